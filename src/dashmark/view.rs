//! Read-only projections of a [`RootState`] for renderers.

use crate::model::{Bookmark, RootState};
use serde::Serialize;

/// One category as a renderer should draw it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    pub key: String,
    pub title: String,
    pub is_collapsed: bool,
    /// Matching items, pinned first, manual order kept within each group.
    pub items: Vec<Bookmark>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub categories: usize,
    pub bookmarks: usize,
    pub pinned: usize,
}

/// Filters categories and items by a case-insensitive substring.
///
/// An item matches when its name or its category's title contains `filter`.
/// With an empty filter every category is returned, empty ones included. With a
/// non-empty filter a category is returned only when its title or at least one of
/// its items matches.
pub fn filtered_view(state: &RootState, filter: &str) -> Vec<CategoryView> {
    let needle = filter.to_lowercase();

    state
        .categories
        .iter()
        .filter_map(|(key, category)| {
            let title_matches = category.title.to_lowercase().contains(&needle);
            let matching: Vec<&Bookmark> = category
                .items
                .iter()
                .filter(|b| title_matches || b.name.to_lowercase().contains(&needle))
                .collect();

            if !filter.is_empty() && matching.is_empty() && !title_matches {
                return None;
            }

            Some(CategoryView {
                key: key.clone(),
                title: category.title.clone(),
                is_collapsed: category.is_collapsed,
                items: pinned_first(&matching),
            })
        })
        .collect()
}

/// Stable partition: pinned items, then the rest, each group in input order.
fn pinned_first(items: &[&Bookmark]) -> Vec<Bookmark> {
    let (pinned, unpinned): (Vec<&Bookmark>, Vec<&Bookmark>) =
        items.iter().copied().partition(|b| b.is_pinned);
    pinned.into_iter().chain(unpinned).cloned().collect()
}

pub fn stats(state: &RootState) -> Stats {
    let items = state.categories.values().flat_map(|c| c.items.iter());
    Stats {
        categories: state.categories.len(),
        bookmarks: state.bookmark_count(),
        pinned: items.filter(|b| b.is_pinned).count(),
    }
}

/// Category titles in render order, for autocompletion.
pub fn category_titles(state: &RootState) -> Vec<String> {
    state.categories.values().map(|c| c.title.clone()).collect()
}
