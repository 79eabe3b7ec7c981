use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{BookmarkStore, SlotBackend};

fn label(dark_mode: bool) -> &'static str {
    if dark_mode {
        "dark"
    } else {
        "light"
    }
}

pub fn set<B: SlotBackend>(store: &mut BookmarkStore<B>, dark_mode: bool) -> Result<CmdResult> {
    store.set_dark_mode(dark_mode)?;
    Ok(CmdResult::default()
        .with_dark_mode(dark_mode)
        .with_message(CmdMessage::success(format!("Theme: {}", label(dark_mode)))))
}

pub fn toggle<B: SlotBackend>(store: &mut BookmarkStore<B>) -> Result<CmdResult> {
    let dark_mode = store.toggle_dark_mode()?;
    Ok(CmdResult::default()
        .with_dark_mode(dark_mode)
        .with_message(CmdMessage::success(format!("Theme: {}", label(dark_mode)))))
}

/// Reports the current theme without changing it.
pub fn show<B: SlotBackend>(store: &BookmarkStore<B>) -> Result<CmdResult> {
    let dark_mode = store.state().settings.dark_mode;
    Ok(CmdResult::default()
        .with_dark_mode(dark_mode)
        .with_message(CmdMessage::info(format!("Theme: {}", label(dark_mode)))))
}
