use crate::codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DashmarkError, Result};
use crate::store::{BookmarkStore, SlotBackend};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// `<prefix>_<YYYY-MM-DD>.json` for today's date.
pub fn export_file_name(prefix: &str) -> String {
    format!("{}_{}.json", prefix, Utc::now().format("%Y-%m-%d"))
}

/// Writes the whole tree, pretty-printed, into `dir`. Neither slot is touched.
pub fn run<B: SlotBackend>(store: &BookmarkStore<B>, dir: &Path, prefix: &str) -> Result<CmdResult> {
    let text = codec::encode(store.state())?;

    if !dir.exists() {
        fs::create_dir_all(dir).map_err(DashmarkError::Io)?;
    }
    let path: PathBuf = dir.join(export_file_name(prefix));
    fs::write(&path, text).map_err(DashmarkError::Io)?;

    let stats = store.stats();
    info!(path = %path.display(), bookmarks = stats.bookmarks, "exported");
    Ok(CmdResult::default()
        .with_exported(path.clone())
        .with_message(CmdMessage::success(format!(
            "Exported {} bookmark(s) in {} categories to {}",
            stats.bookmarks,
            stats.categories,
            path.display()
        ))))
}
