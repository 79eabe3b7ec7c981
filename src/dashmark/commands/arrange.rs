use crate::commands::{CmdMessage, CmdResult};
use crate::drag::{provisional_order, DragSession, DropCommand, DropTarget, InsertionPoint};
use crate::error::Result;
use crate::store::{BookmarkStore, SlotBackend};

use super::helpers::{resolve_category, resolve_item};

/// Puts a category's bookmarks in the given order. Every bookmark must be named once.
pub fn reorder<B: SlotBackend, I: AsRef<str>>(
    store: &mut BookmarkStore<B>,
    category: &str,
    items: &[I],
) -> Result<CmdResult> {
    let (key, cat) = resolve_category(store, category)?;
    let ids = items
        .iter()
        .map(|item| resolve_item(&cat, item.as_ref()).map(|b| b.id))
        .collect::<Result<Vec<_>>>()?;

    let message = if store.reorder_within_category(&key, &ids)? {
        CmdMessage::success(format!("Reordered: {}", cat.title))
    } else {
        CmdMessage::warning(format!(
            "Order must list each of the {} bookmark(s) in {} exactly once.",
            cat.items.len(),
            cat.title
        ))
    };
    Ok(CmdResult::default().with_message(message))
}

/// Moves a bookmark to `index` in category `to`, or to its end.
///
/// Runs as a complete drag: the card is picked up from `from`, laid out in the
/// target grid and dropped there, so the same store call a pointer drop makes
/// is the one applied here.
pub fn move_to<B: SlotBackend>(
    store: &mut BookmarkStore<B>,
    item: &str,
    from: &str,
    to: &str,
    index: Option<usize>,
) -> Result<CmdResult> {
    let (source_key, source) = resolve_category(store, from)?;
    let (target_key, target) = resolve_category(store, to)?;
    let bookmark = resolve_item(&source, item)?;

    let mut session = DragSession::new();
    session.begin(bookmark.id.clone(), source_key);

    let siblings: Vec<String> = target
        .item_ids()
        .into_iter()
        .filter(|id| *id != bookmark.id)
        .collect();
    let point = match index {
        Some(i) if i < siblings.len() => InsertionPoint::Before(siblings[i].clone()),
        _ => InsertionPoint::End,
    };
    let layout = provisional_order(&siblings, &bookmark.id, &point);

    let dropped = drop(
        store,
        &mut session,
        Some(DropTarget {
            category_key: target_key,
            layout,
        }),
    )?;
    if dropped.messages.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("Nothing moved.")));
    }
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Moved {} to {}",
        bookmark.name, target.title
    ))))
}

/// Ends `session` over `target` and applies the resulting store change.
pub fn drop<B: SlotBackend>(
    store: &mut BookmarkStore<B>,
    session: &mut DragSession,
    target: Option<DropTarget>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let Some(command) = session.drop_on(target) else {
        return Ok(result);
    };

    let description = match &command {
        DropCommand::Reorder { category_key, .. } => format!("Reordered {}", category_key),
        DropCommand::Move {
            item_id,
            target_key,
            index,
            ..
        } => format!("Moved {} to {} at {}", item_id, target_key, index),
    };
    if command.apply(store)? {
        result.add_message(CmdMessage::success(description));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Bookmark, Category, RootState};
    use crate::store::mem_backend::MemBackend;

    fn store() -> BookmarkStore<MemBackend> {
        let mut state = RootState::empty();
        for (key, title, names) in [("a", "Alpha", ["a1", "a2", "a3"]), ("b", "Beta", ["b1", "b2", "b3"])] {
            let mut cat = Category::new(title);
            cat.items = names
                .iter()
                .map(|n| Bookmark {
                    id: format!("{}-0000-id", n),
                    name: n.to_string(),
                    url: format!("https://{}.io", n),
                    is_pinned: false,
                })
                .collect();
            state.categories.insert(key.to_string(), cat);
        }
        BookmarkStore::with_state(MemBackend::new(), state)
    }

    fn names(store: &BookmarkStore<MemBackend>, key: &str) -> Vec<String> {
        store.category(key).unwrap().items.iter().map(|b| b.name.clone()).collect()
    }

    #[test]
    fn reorder_with_prefixes() {
        let mut store = store();
        let result = reorder(&mut store, "Alpha", &["a3-0", "a1-0", "a2-0"]).unwrap();
        assert_eq!(result.messages[0].content, "Reordered: Alpha");
        assert_eq!(names(&store, "a"), ["a3", "a1", "a2"]);
    }

    #[test]
    fn partial_reorder_is_refused() {
        let mut store = store();
        let result = reorder(&mut store, "a", &["a3-0", "a1-0"]).unwrap();
        assert!(result.messages[0].content.contains("exactly once"));
        assert_eq!(names(&store, "a"), ["a1", "a2", "a3"]);
    }

    #[test]
    fn move_to_index_and_end() {
        let mut store = store();
        move_to(&mut store, "a1-0", "Alpha", "Beta", Some(1)).unwrap();
        assert_eq!(names(&store, "a"), ["a2", "a3"]);
        assert_eq!(names(&store, "b"), ["b1", "a1", "b2", "b3"]);

        let result = move_to(&mut store, "a2-0", "a", "b", None).unwrap();
        assert_eq!(result.messages[0].content, "Moved a2 to Beta");
        assert_eq!(names(&store, "b"), ["b1", "a1", "b2", "b3", "a2"]);
    }

    #[test]
    fn move_within_category_reorders() {
        let mut store = store();
        move_to(&mut store, "a3-0", "a", "a", Some(0)).unwrap();
        assert_eq!(names(&store, "a"), ["a3", "a1", "a2"]);

        move_to(&mut store, "a3-0", "a", "a", None).unwrap();
        assert_eq!(names(&store, "a"), ["a1", "a2", "a3"]);
    }

    #[test]
    fn drop_outside_any_grid_does_nothing() {
        let mut store = store();
        let before = store.state().clone();
        let mut session = DragSession::new();
        session.begin("a1-0000-id", "a");
        let result = drop(&mut store, &mut session, None).unwrap();
        assert!(result.messages.is_empty());
        assert!(!session.is_dragging());
        assert_eq!(store.state(), &before);
    }
}
