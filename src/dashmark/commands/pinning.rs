use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{BookmarkStore, SlotBackend};

use super::helpers::{resolve_category, resolve_item};

/// Flips a bookmark's pin. Pinning changes display order only.
pub fn toggle<B: SlotBackend>(
    store: &mut BookmarkStore<B>,
    category: &str,
    item: &str,
) -> Result<CmdResult> {
    let (key, cat) = resolve_category(store, category)?;
    let bookmark = resolve_item(&cat, item)?;
    store.toggle_pin(&key, &bookmark.id)?;

    let verb = if bookmark.is_pinned { "Unpinned" } else { "Pinned" };
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "{}: {}",
        verb, bookmark.name
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_CATEGORY_KEY;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn toggling_twice_restores_flag() {
        let mut store = BookmarkStore::open(MemBackend::new());
        let id = store.category(DEFAULT_CATEGORY_KEY).unwrap().items[0].id.clone();

        let result = toggle(&mut store, DEFAULT_CATEGORY_KEY, &id).unwrap();
        assert_eq!(result.messages[0].content, "Pinned: Google");
        assert!(store.category(DEFAULT_CATEGORY_KEY).unwrap().items[0].is_pinned);

        let result = toggle(&mut store, DEFAULT_CATEGORY_KEY, &id).unwrap();
        assert_eq!(result.messages[0].content, "Unpinned: Google");
        assert!(!store.category(DEFAULT_CATEGORY_KEY).unwrap().items[0].is_pinned);
    }
}
