use crate::codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DashmarkError, Result};
use crate::store::{BookmarkStore, SlotBackend};
use std::fs;
use std::path::Path;
use tracing::info;

/// Replaces the whole tree with the snapshot in `path`.
///
/// The file is decoded before anything changes; a file that is not a valid
/// snapshot leaves the store untouched. Only the primary slot is written.
pub fn run<B: SlotBackend>(store: &mut BookmarkStore<B>, path: &Path) -> Result<CmdResult> {
    let text = fs::read_to_string(path).map_err(DashmarkError::Io)?;
    let imported = codec::decode(&text)?;
    let categories = imported.categories.len();
    let bookmarks = imported.bookmark_count();

    store.replace_all(imported)?;
    info!(path = %path.display(), categories, bookmarks, "imported");
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Imported {} bookmark(s) in {} categories from {}",
        bookmarks,
        categories,
        path.display()
    ))))
}
