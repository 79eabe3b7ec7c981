use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{BookmarkStore, SlotBackend};

use super::helpers::{resolve_category, resolve_item};

pub fn bookmark<B: SlotBackend>(
    store: &mut BookmarkStore<B>,
    category: &str,
    item: &str,
    new_name: &str,
) -> Result<CmdResult> {
    let (key, cat) = resolve_category(store, category)?;
    let target = resolve_item(&cat, item)?;

    let message = if store.rename_bookmark(&key, &target.id, new_name)? {
        CmdMessage::success(format!("Renamed {} to {}", target.name, new_name.trim()))
    } else {
        CmdMessage::info("Name unchanged.")
    };
    Ok(CmdResult::default().with_message(message))
}

pub fn category<B: SlotBackend>(
    store: &mut BookmarkStore<B>,
    category: &str,
    new_title: &str,
) -> Result<CmdResult> {
    let (key, cat) = resolve_category(store, category)?;

    let message = if store.rename_category(&key, new_title)? {
        CmdMessage::success(format!("Renamed category {} to {}", cat.title, new_title.trim()))
    } else {
        CmdMessage::info("Title unchanged.")
    };
    Ok(CmdResult::default().with_message(message))
}
