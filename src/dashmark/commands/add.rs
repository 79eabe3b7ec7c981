use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{BookmarkStore, SlotBackend};

use super::helpers::short_id;

pub fn run<B: SlotBackend>(
    store: &mut BookmarkStore<B>,
    name: &str,
    url: &str,
    category_title: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if name.trim().is_empty() || url.trim().is_empty() {
        result.add_message(CmdMessage::warning(
            "Both a name and a url are needed to add a bookmark.",
        ));
        return Ok(result);
    }

    let added = store.add_bookmark(name.trim(), url.trim(), category_title.trim())?;
    if added.created_category {
        result.add_message(CmdMessage::info(format!(
            "Created category: {}",
            category_title.trim()
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Added {} ({}) to {}",
        name.trim(),
        short_id(&added.bookmark_id),
        category_title.trim()
    )));
    Ok(result)
}
