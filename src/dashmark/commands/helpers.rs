use crate::error::{DashmarkError, Result};
use crate::model::{Bookmark, Category};
use crate::store::{BookmarkStore, SlotBackend};

/// Shortest id prefix accepted in place of a full bookmark id.
pub const MIN_ID_PREFIX: usize = 4;

/// Resolves a category selector: an exact key first, then an exact title.
pub fn resolve_category<B: SlotBackend>(
    store: &BookmarkStore<B>,
    selector: &str,
) -> Result<(String, Category)> {
    let state = store.state();
    let key = if state.categories.contains_key(selector) {
        Some(selector)
    } else {
        state.key_for_title(selector)
    };

    key.and_then(|k| state.categories.get(k).map(|c| (k.to_string(), c.clone())))
        .ok_or_else(|| DashmarkError::NotFound(format!("category '{}'", selector)))
}

/// Resolves a bookmark inside `category` by exact id, or by a unique id prefix
/// of at least [`MIN_ID_PREFIX`] characters.
pub fn resolve_item(category: &Category, selector: &str) -> Result<Bookmark> {
    if let Some(item) = category.item(selector) {
        return Ok(item.clone());
    }

    let not_found = || {
        DashmarkError::NotFound(format!(
            "bookmark '{}' in category '{}'",
            selector, category.title
        ))
    };

    if selector.chars().count() < MIN_ID_PREFIX {
        return Err(not_found());
    }

    let mut matches = category.items.iter().filter(|b| b.id.starts_with(selector));
    match (matches.next(), matches.next()) {
        (Some(item), None) => Ok(item.clone()),
        (Some(_), Some(_)) => Err(DashmarkError::Api(format!(
            "bookmark id prefix '{}' is ambiguous in category '{}'",
            selector, category.title
        ))),
        (None, _) => Err(not_found()),
    }
}

/// First 8 characters of an id, as shown in listings.
pub fn short_id(id: &str) -> &str {
    id.char_indices().nth(8).map(|(i, _)| &id[..i]).unwrap_or(id)
}
