use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{BookmarkStore, SlotBackend};

use super::helpers::resolve_category;

pub fn toggle<B: SlotBackend>(store: &mut BookmarkStore<B>, category: &str) -> Result<CmdResult> {
    let (key, cat) = resolve_category(store, category)?;
    store.toggle_category_collapsed(&key)?;

    let verb = if cat.is_collapsed { "Expanded" } else { "Collapsed" };
    Ok(CmdResult::default().with_message(CmdMessage::success(format!("{}: {}", verb, cat.title))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_CATEGORY_KEY;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn collapse_and_expand() {
        let mut store = BookmarkStore::open(MemBackend::new());
        let result = toggle(&mut store, "عام").unwrap();
        assert_eq!(result.messages[0].content, "Collapsed: عام");
        assert!(store.category(DEFAULT_CATEGORY_KEY).unwrap().is_collapsed);

        let result = toggle(&mut store, DEFAULT_CATEGORY_KEY).unwrap();
        assert_eq!(result.messages[0].content, "Expanded: عام");
    }
}
