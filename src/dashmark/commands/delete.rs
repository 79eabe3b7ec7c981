use crate::commands::{CmdMessage, CmdResult, Confirm};
use crate::error::Result;
use crate::store::{BookmarkStore, SlotBackend};

use super::helpers::{resolve_category, resolve_item};

pub fn bookmark<B: SlotBackend, C: Confirm>(
    store: &mut BookmarkStore<B>,
    category: &str,
    item: &str,
    confirm: &mut C,
) -> Result<CmdResult> {
    let (key, cat) = resolve_category(store, category)?;
    let bookmark = resolve_item(&cat, item)?;

    let summary = vec![format!("{} ({})", bookmark.name, bookmark.url)];
    if !confirm.confirm(&summary)? {
        return Ok(CmdResult::cancelled());
    }

    store.delete_bookmark(&key, &bookmark.id)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Deleted: {}",
        bookmark.name
    ))))
}

/// Deletes a category together with all of its bookmarks.
pub fn category<B: SlotBackend, C: Confirm>(
    store: &mut BookmarkStore<B>,
    category: &str,
    confirm: &mut C,
) -> Result<CmdResult> {
    let (key, cat) = resolve_category(store, category)?;

    let mut summary = vec![format!("Category {} and its {} bookmark(s):", cat.title, cat.items.len())];
    summary.extend(cat.items.iter().map(|b| format!("  {}", b.name)));
    if !confirm.confirm(&summary)? {
        return Ok(CmdResult::cancelled());
    }

    store.delete_category(&key)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Deleted category: {}",
        cat.title
    ))))
}
