use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{BookmarkStore, SlotBackend};
use crate::view;

/// Categories and bookmarks matching `filter`, in render order.
pub fn run<B: SlotBackend>(store: &BookmarkStore<B>, filter: &str) -> Result<CmdResult> {
    Ok(CmdResult::default()
        .with_listed(store.get_filtered_view(filter.trim()))
        .with_dark_mode(store.state().settings.dark_mode))
}

/// Every category title, for completion.
pub fn categories<B: SlotBackend>(store: &BookmarkStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_titles(view::category_titles(store.state())))
}
