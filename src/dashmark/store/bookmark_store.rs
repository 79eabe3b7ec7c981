use super::backend::SlotBackend;
use super::Slot;
use crate::codec;
use crate::error::Result;
use crate::model::{Bookmark, Category, RootState};
use crate::view::{self, CategoryView, Stats};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// What `add_bookmark` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedBookmark {
    pub category_key: String,
    pub bookmark_id: String,
    pub created_category: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    NoBackup,
    Restored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Persist {
    WithBackup,
    PrimaryOnly,
}

/// Owner of the canonical bookmark tree.
///
/// Every mutation runs to completion and then writes the snapshot out. Lookups of
/// missing categories or bookmarks are silent no-ops reported as `Ok(false)`. An
/// `Err` from a mutation always means the write failed; the in-memory tree has
/// already been updated at that point and stays authoritative for the session.
pub struct BookmarkStore<B: SlotBackend> {
    state: RootState,
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: SlotBackend> BookmarkStore<B> {
    /// Loads the primary slot, falling back to the seeded default tree when the
    /// slot is empty, unreadable or not a valid snapshot. Never writes.
    pub fn open(backend: B) -> Self {
        let state = match backend.read_slot(Slot::Primary) {
            Ok(Some(text)) => match codec::decode(&text) {
                Ok(state) => state,
                Err(e) => {
                    warn!(
                        location = %backend.slot_location(Slot::Primary),
                        error = %e,
                        "primary slot is not a valid snapshot, starting from defaults"
                    );
                    RootState::default()
                }
            },
            Ok(None) => {
                debug!("primary slot empty, starting from defaults");
                RootState::default()
            }
            Err(e) => {
                warn!(error = %e, "could not read primary slot, starting from defaults");
                RootState::default()
            }
        };
        Self { state, backend }
    }

    pub fn with_state(backend: B, state: RootState) -> Self {
        Self { state, backend }
    }

    pub fn state(&self) -> &RootState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn category(&self, key: &str) -> Option<&Category> {
        self.state.categories.get(key)
    }

    pub fn get_filtered_view(&self, filter: &str) -> Vec<CategoryView> {
        view::filtered_view(&self.state, filter)
    }

    pub fn stats(&self) -> Stats {
        view::stats(&self.state)
    }

    /// Appends a bookmark to the category titled `category_title`, creating the
    /// category when no title matches. Empty names and urls are stored as given.
    pub fn add_bookmark(
        &mut self,
        name: &str,
        url: &str,
        category_title: &str,
    ) -> Result<AddedBookmark> {
        let (category_key, created_category) = match self.state.key_for_title(category_title) {
            Some(key) => (key.to_string(), false),
            None => {
                let key = self.state.fresh_category_key();
                self.state
                    .categories
                    .insert(key.clone(), Category::new(category_title));
                (key, true)
            }
        };

        let bookmark = Bookmark::new(name, url);
        let bookmark_id = bookmark.id.clone();
        if let Some(category) = self.state.categories.get_mut(&category_key) {
            category.items.push(bookmark);
        }
        debug!(category = %category_key, id = %bookmark_id, created_category, "bookmark added");

        self.persist(Persist::WithBackup)?;
        Ok(AddedBookmark {
            category_key,
            bookmark_id,
            created_category,
        })
    }

    pub fn delete_bookmark(&mut self, category_key: &str, item_id: &str) -> Result<bool> {
        let Some(category) = self.state.categories.get_mut(category_key) else {
            return Ok(false);
        };
        let Some(pos) = category.position(item_id) else {
            return Ok(false);
        };
        category.items.remove(pos);
        debug!(category = %category_key, id = %item_id, "bookmark deleted");
        self.commit()
    }

    /// Removes a category and every bookmark in it.
    pub fn delete_category(&mut self, category_key: &str) -> Result<bool> {
        if self.state.categories.shift_remove(category_key).is_none() {
            return Ok(false);
        }
        debug!(category = %category_key, "category deleted");
        self.commit()
    }

    pub fn toggle_pin(&mut self, category_key: &str, item_id: &str) -> Result<bool> {
        let Some(item) = self
            .state
            .categories
            .get_mut(category_key)
            .and_then(|c| c.item_mut(item_id))
        else {
            return Ok(false);
        };
        item.is_pinned = !item.is_pinned;
        debug!(category = %category_key, id = %item_id, pinned = item.is_pinned, "pin toggled");
        self.commit()
    }

    pub fn toggle_category_collapsed(&mut self, category_key: &str) -> Result<bool> {
        let Some(category) = self.state.categories.get_mut(category_key) else {
            return Ok(false);
        };
        category.is_collapsed = !category.is_collapsed;
        debug!(category = %category_key, collapsed = category.is_collapsed, "collapse toggled");
        self.commit()
    }

    /// Renames a bookmark. Blank or unchanged names leave everything untouched.
    pub fn rename_bookmark(
        &mut self,
        category_key: &str,
        item_id: &str,
        new_name: &str,
    ) -> Result<bool> {
        let new_name = new_name.trim();
        let Some(item) = self
            .state
            .categories
            .get_mut(category_key)
            .and_then(|c| c.item_mut(item_id))
        else {
            return Ok(false);
        };
        if new_name.is_empty() || item.name == new_name {
            return Ok(false);
        }
        item.name = new_name.to_string();
        self.commit()
    }

    /// Retitles a category. Blank or unchanged titles leave everything untouched.
    pub fn rename_category(&mut self, category_key: &str, new_title: &str) -> Result<bool> {
        let new_title = new_title.trim();
        let Some(category) = self.state.categories.get_mut(category_key) else {
            return Ok(false);
        };
        if new_title.is_empty() || category.title == new_title {
            return Ok(false);
        }
        category.title = new_title.to_string();
        self.commit()
    }

    /// Permutes a category's items into `new_order`.
    ///
    /// `new_order` must name every current item exactly once; anything else is a no-op.
    pub fn reorder_within_category(
        &mut self,
        category_key: &str,
        new_order: &[String],
    ) -> Result<bool> {
        let Some(category) = self.state.categories.get_mut(category_key) else {
            return Ok(false);
        };
        if new_order.len() != category.items.len() {
            return Ok(false);
        }

        let mut by_id: HashMap<&str, &Bookmark> =
            category.items.iter().map(|b| (b.id.as_str(), b)).collect();
        let mut reordered = Vec::with_capacity(new_order.len());
        for id in new_order {
            match by_id.remove(id.as_str()) {
                Some(bookmark) => reordered.push(bookmark.clone()),
                None => return Ok(false),
            }
        }

        category.items = reordered;
        debug!(category = %category_key, "category reordered");
        self.commit()
    }

    /// Transfers one bookmark from `source_key` to `target_key` at `target_index`,
    /// clamped to the target's length. Same-category moves are a no-op; use
    /// `reorder_within_category` for those.
    pub fn move_between_categories(
        &mut self,
        source_key: &str,
        target_key: &str,
        item_id: &str,
        target_index: usize,
    ) -> Result<bool> {
        if source_key == target_key || !self.state.categories.contains_key(target_key) {
            return Ok(false);
        }
        let Some(source) = self.state.categories.get_mut(source_key) else {
            return Ok(false);
        };
        let Some(pos) = source.position(item_id) else {
            return Ok(false);
        };
        let bookmark = source.items.remove(pos);

        if let Some(target) = self.state.categories.get_mut(target_key) {
            let index = target_index.min(target.items.len());
            target.items.insert(index, bookmark);
            debug!(from = %source_key, to = %target_key, id = %item_id, index, "bookmark moved");
        }
        self.commit()
    }

    pub fn set_dark_mode(&mut self, value: bool) -> Result<()> {
        self.state.settings.dark_mode = value;
        self.persist(Persist::WithBackup)
    }

    /// Flips dark mode and returns the new value.
    pub fn toggle_dark_mode(&mut self) -> Result<bool> {
        let value = !self.state.settings.dark_mode;
        self.set_dark_mode(value)?;
        Ok(value)
    }

    /// Swaps in a whole new tree. Writes the primary slot only, so the backup
    /// keeps whatever an ordinary edit last wrote there.
    pub fn replace_all(&mut self, new_state: RootState) -> Result<()> {
        self.state = new_state;
        info!(
            categories = self.state.categories.len(),
            bookmarks = self.state.bookmark_count(),
            "state replaced"
        );
        self.persist(Persist::PrimaryOnly)
    }

    pub fn has_backup(&self) -> Result<bool> {
        Ok(self
            .backend
            .read_slot(Slot::Backup)?
            .is_some_and(|text| !text.trim().is_empty()))
    }

    /// Replaces the current tree with the backup slot's snapshot.
    ///
    /// A backup that does not decode is a validation error and changes nothing.
    pub fn restore_from_backup(&mut self) -> Result<RestoreOutcome> {
        let text = match self.backend.read_slot(Slot::Backup)? {
            Some(text) if !text.trim().is_empty() => text,
            _ => return Ok(RestoreOutcome::NoBackup),
        };
        let restored = codec::decode(&text)?;
        self.replace_all(restored)?;
        Ok(RestoreOutcome::Restored)
    }

    fn commit(&mut self) -> Result<bool> {
        self.persist(Persist::WithBackup)?;
        Ok(true)
    }

    fn persist(&self, mode: Persist) -> Result<()> {
        let text = codec::encode_compact(&self.state)?;
        self.write(Slot::Primary, &text)?;
        if mode == Persist::WithBackup {
            self.write(Slot::Backup, &text)?;
        }
        Ok(())
    }

    fn write(&self, slot: Slot, text: &str) -> Result<()> {
        match self.backend.write_slot(slot, text) {
            Ok(()) => {
                debug!(%slot, bytes = text.len(), "slot written");
                Ok(())
            }
            Err(e) => {
                warn!(%slot, error = %e, "failed to persist, in-memory state kept");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashmarkError;
    use crate::model::DEFAULT_CATEGORY_KEY;
    use crate::store::mem_backend::MemBackend;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn fresh() -> BookmarkStore<MemBackend> {
        BookmarkStore::open(MemBackend::new())
    }

    fn id_of(store: &BookmarkStore<MemBackend>, key: &str, name: &str) -> String {
        store
            .category(key)
            .and_then(|c| c.items.iter().find(|b| b.name == name))
            .map(|b| b.id.clone())
            .unwrap()
    }

    fn names(store: &BookmarkStore<MemBackend>, key: &str) -> Vec<String> {
        store
            .category(key)
            .unwrap()
            .items
            .iter()
            .map(|b| b.name.clone())
            .collect()
    }

    /// Store with categories "a" (A1..A3) and "b" (B1, B2).
    fn two_categories() -> BookmarkStore<MemBackend> {
        let mut state = RootState::empty();
        for (key, prefix, count) in [("a", "A", 3), ("b", "B", 2)] {
            let mut cat = Category::new(prefix);
            for i in 1..=count {
                cat.items
                    .push(Bookmark::new(format!("{}{}", prefix, i), "x.io"));
            }
            state.categories.insert(key.to_string(), cat);
        }
        BookmarkStore::with_state(MemBackend::new(), state)
    }

    #[test]
    fn opens_with_defaults_when_primary_is_empty() {
        let store = fresh();
        assert_eq!(names(&store, DEFAULT_CATEGORY_KEY), ["Google", "GitHub"]);
        assert_eq!(store.backend().write_count(Slot::Primary), 0);
    }

    #[test]
    fn opens_from_primary_slot() {
        let backend = MemBackend::new();
        backend.put(
            Slot::Primary,
            r#"{"categories":{"k":{"title":"Saved","items":[],"isCollapsed":true}},"settings":{"darkMode":true}}"#,
        );
        let store = BookmarkStore::open(backend);
        assert_eq!(store.category("k").unwrap().title, "Saved");
        assert!(store.state().settings.dark_mode);
    }

    #[test]
    fn corrupt_primary_falls_back_to_defaults() {
        let backend = MemBackend::new();
        backend.put(Slot::Primary, "{ not json");
        let store = BookmarkStore::open(backend);
        assert!(store.category(DEFAULT_CATEGORY_KEY).is_some());
    }

    #[test]
    fn add_normalizes_url_and_creates_category() {
        let mut store = fresh();
        let added = store.add_bookmark("Example", "example.com", "NewCat").unwrap();
        assert!(added.created_category);

        let cat = store.category(&added.category_key).unwrap();
        assert_eq!(cat.title, "NewCat");
        assert_eq!(cat.items.len(), 1);
        assert_eq!(cat.items[0].url, "https://example.com");
        assert_eq!(cat.items[0].id, added.bookmark_id);
        assert!(!cat.items[0].is_pinned);
        assert!(!cat.is_collapsed);
    }

    #[test]
    fn add_reuses_category_with_matching_title() {
        let mut store = fresh();
        let added = store.add_bookmark("Docs", "https://docs.rs", "عام").unwrap();
        assert!(!added.created_category);
        assert_eq!(added.category_key, DEFAULT_CATEGORY_KEY);
        assert_eq!(names(&store, DEFAULT_CATEGORY_KEY), ["Google", "GitHub", "Docs"]);
    }

    #[test]
    fn add_stores_empty_strings() {
        let mut store = fresh();
        let added = store.add_bookmark("", "", "").unwrap();
        let cat = store.category(&added.category_key).unwrap();
        assert_eq!(cat.title, "");
        assert_eq!(cat.items[0].name, "");
        assert_eq!(cat.items[0].url, "https://");
    }

    #[test]
    fn add_ids_stay_unique() {
        let mut store = fresh();
        for i in 0..50 {
            store.add_bookmark(&format!("n{}", i), "a.io", "Bulk").unwrap();
        }
        let key = store.state().key_for_title("Bulk").unwrap().to_string();
        let ids: HashSet<_> = store
            .category(&key)
            .unwrap()
            .items
            .iter()
            .map(|b| b.id.clone())
            .collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn toggle_pin_scenario_keeps_manual_order() {
        let mut store = fresh();
        let google = id_of(&store, DEFAULT_CATEGORY_KEY, "Google");
        assert!(store.toggle_pin(DEFAULT_CATEGORY_KEY, &google).unwrap());

        let view = store.get_filtered_view("");
        let items = &view[0].items;
        let shown: Vec<_> = items.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(shown, ["Google", "GitHub"]);
        assert!(items.iter().all(|b| b.is_pinned));
    }

    #[test]
    fn missing_targets_are_noops() {
        let mut store = fresh();
        let before = store.state().clone();
        assert!(!store.delete_category("nope").unwrap());
        assert!(!store.delete_bookmark("nope", "x").unwrap());
        assert!(!store.delete_bookmark(DEFAULT_CATEGORY_KEY, "x").unwrap());
        assert!(!store.toggle_pin(DEFAULT_CATEGORY_KEY, "x").unwrap());
        assert!(!store.toggle_category_collapsed("nope").unwrap());
        assert!(!store.rename_category("nope", "T").unwrap());
        assert!(!store.rename_bookmark(DEFAULT_CATEGORY_KEY, "x", "N").unwrap());
        assert_eq!(store.state(), &before);
        assert_eq!(store.backend().write_count(Slot::Primary), 0);
    }

    #[test]
    fn delete_bookmark_and_category() {
        let mut store = two_categories();
        let a2 = id_of(&store, "a", "A2");
        assert!(store.delete_bookmark("a", &a2).unwrap());
        assert_eq!(names(&store, "a"), ["A1", "A3"]);

        assert!(store.delete_category("a").unwrap());
        assert!(store.category("a").is_none());
        assert_eq!(store.state().bookmark_count(), 2);
    }

    #[test]
    fn delete_category_keeps_order_of_the_rest() {
        let mut store = two_categories();
        store.add_bookmark("C1", "c.io", "C").unwrap();
        store.delete_category("b").unwrap();
        let titles: Vec<_> = store.state().categories.values().map(|c| c.title.clone()).collect();
        assert_eq!(titles, ["A", "C"]);
    }

    #[test]
    fn collapse_toggles() {
        let mut store = fresh();
        store.toggle_category_collapsed(DEFAULT_CATEGORY_KEY).unwrap();
        assert!(store.category(DEFAULT_CATEGORY_KEY).unwrap().is_collapsed);
        store.toggle_category_collapsed(DEFAULT_CATEGORY_KEY).unwrap();
        assert!(!store.category(DEFAULT_CATEGORY_KEY).unwrap().is_collapsed);
    }

    #[test]
    fn rename_requires_a_new_non_blank_value() {
        let mut store = fresh();
        let google = id_of(&store, DEFAULT_CATEGORY_KEY, "Google");
        assert!(!store.rename_bookmark(DEFAULT_CATEGORY_KEY, &google, "   ").unwrap());
        assert!(!store.rename_bookmark(DEFAULT_CATEGORY_KEY, &google, "Google").unwrap());
        assert_eq!(store.backend().write_count(Slot::Primary), 0);

        assert!(store.rename_bookmark(DEFAULT_CATEGORY_KEY, &google, " Search ").unwrap());
        assert_eq!(names(&store, DEFAULT_CATEGORY_KEY)[0], "Search");

        assert!(!store.rename_category(DEFAULT_CATEGORY_KEY, "").unwrap());
        assert!(store.rename_category(DEFAULT_CATEGORY_KEY, "General").unwrap());
        assert_eq!(store.category(DEFAULT_CATEGORY_KEY).unwrap().title, "General");
    }

    #[test]
    fn reorder_applies_a_permutation() {
        let mut store = two_categories();
        let ids: Vec<String> = ["A3", "A1", "A2"]
            .iter()
            .map(|n| id_of(&store, "a", n))
            .collect();
        assert!(store.reorder_within_category("a", &ids).unwrap());
        assert_eq!(names(&store, "a"), ["A3", "A1", "A2"]);
    }

    #[test]
    fn reorder_rejects_non_permutations() {
        let mut store = two_categories();
        let a1 = id_of(&store, "a", "A1");
        let a2 = id_of(&store, "a", "A2");
        let a3 = id_of(&store, "a", "A3");
        let b1 = id_of(&store, "b", "B1");
        let before = store.state().clone();

        for bad in [
            vec![a1.clone(), a2.clone()],
            vec![a1.clone(), a2.clone(), a3.clone(), b1.clone()],
            vec![a1.clone(), a1.clone(), a2.clone()],
            vec![a1.clone(), a2.clone(), b1.clone()],
        ] {
            assert!(!store.reorder_within_category("a", &bad).unwrap());
        }
        assert!(!store.reorder_within_category("zz", &[]).unwrap());
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn move_transfers_and_clamps() {
        let mut store = two_categories();
        let a1 = id_of(&store, "a", "A1");
        assert!(store.move_between_categories("a", "b", &a1, 1).unwrap());
        assert_eq!(names(&store, "a"), ["A2", "A3"]);
        assert_eq!(names(&store, "b"), ["B1", "A1", "B2"]);

        let a2 = id_of(&store, "a", "A2");
        assert!(store.move_between_categories("a", "b", &a2, 99).unwrap());
        assert_eq!(names(&store, "b"), ["B1", "A1", "B2", "A2"]);
    }

    #[test]
    fn move_noops() {
        let mut store = two_categories();
        let a1 = id_of(&store, "a", "A1");
        let b1 = id_of(&store, "b", "B1");
        let before = store.state().clone();
        assert!(!store.move_between_categories("a", "a", &a1, 0).unwrap());
        assert!(!store.move_between_categories("a", "b", &b1, 0).unwrap());
        assert!(!store.move_between_categories("a", "missing", &a1, 0).unwrap());
        assert!(!store.move_between_categories("missing", "b", &a1, 0).unwrap());
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn dark_mode() {
        let mut store = fresh();
        store.set_dark_mode(true).unwrap();
        assert!(store.state().settings.dark_mode);
        assert!(!store.toggle_dark_mode().unwrap());
        assert!(!store.state().settings.dark_mode);
    }

    #[test]
    fn ordinary_mutations_write_both_slots() {
        let mut store = fresh();
        store.add_bookmark("x", "x.io", "X").unwrap();
        let primary = store.backend().read_slot(Slot::Primary).unwrap();
        let backup = store.backend().read_slot(Slot::Backup).unwrap();
        assert!(primary.is_some());
        assert_eq!(primary, backup);
        assert_eq!(codec::decode(&primary.unwrap()).unwrap(), *store.state());
    }

    #[test]
    fn replace_all_leaves_backup_alone() {
        let mut store = fresh();
        store.set_dark_mode(true).unwrap();
        let backup_before = store.backend().read_slot(Slot::Backup).unwrap();

        store.replace_all(RootState::empty()).unwrap();
        assert_eq!(store.backend().read_slot(Slot::Backup).unwrap(), backup_before);
        let primary = store.backend().read_slot(Slot::Primary).unwrap().unwrap();
        assert_eq!(codec::decode(&primary).unwrap(), RootState::empty());

        // The next ordinary edit syncs the backup again.
        store.add_bookmark("a", "a.io", "A").unwrap();
        assert_eq!(
            store.backend().read_slot(Slot::Backup).unwrap(),
            store.backend().read_slot(Slot::Primary).unwrap()
        );
    }

    #[test]
    fn restore_without_backup_changes_nothing() {
        let mut store = fresh();
        assert!(!store.has_backup().unwrap());
        let before = store.state().clone();
        assert_eq!(store.restore_from_backup().unwrap(), RestoreOutcome::NoBackup);
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn restore_brings_back_last_edit() {
        let mut store = fresh();
        store.add_bookmark("Keep", "keep.io", "Saved").unwrap();
        let saved = store.state().clone();

        store.replace_all(RootState::empty()).unwrap();
        assert!(store.state().categories.is_empty());

        assert_eq!(store.restore_from_backup().unwrap(), RestoreOutcome::Restored);
        assert_eq!(store.state(), &saved);
        assert_eq!(store.backend().write_count(Slot::Backup), 1);
    }

    #[test]
    fn corrupt_backup_is_a_validation_error() {
        let backend = MemBackend::new();
        backend.put(Slot::Backup, r#"{"nope": true}"#);
        let mut store = BookmarkStore::open(backend);
        let before = store.state().clone();
        assert!(matches!(
            store.restore_from_backup(),
            Err(DashmarkError::Validation(_))
        ));
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn persistence_failure_keeps_in_memory_change() {
        let mut store = fresh();
        store.backend().set_simulate_write_error(true);
        let err = store.add_bookmark("Offline", "o.io", "Local").unwrap_err();
        assert!(err.is_persistence_failure());
        assert!(store.state().key_for_title("Local").is_some());
    }

    #[test]
    fn quota_failure_is_reported() {
        let backend = MemBackend::new().with_max_slot_bytes(64);
        let mut store = BookmarkStore::open(backend);
        let err = store.add_bookmark("Big", "big.io", "Big").unwrap_err();
        assert!(matches!(err, DashmarkError::QuotaExceeded { slot: Slot::Primary, .. }));
    }

    proptest! {
        #[test]
        fn move_is_an_atomic_transfer(pick in 0usize..3, index in 0usize..6) {
            let mut store = two_categories();
            let id = store.category("a").unwrap().items[pick].id.clone();
            let total = store.state().bookmark_count();

            prop_assert!(store.move_between_categories("a", "b", &id, index).unwrap());

            let a = store.category("a").unwrap();
            let b = store.category("b").unwrap();
            prop_assert!(a.position(&id).is_none());
            prop_assert_eq!(b.items.iter().filter(|x| x.id == id).count(), 1);
            prop_assert_eq!(b.position(&id), Some(index.min(2)));
            prop_assert_eq!(store.state().bookmark_count(), total);
        }

        #[test]
        fn reorder_with_wrong_ids_is_a_noop(extra in "[a-z]{1,6}", drop_one in any::<bool>()) {
            let mut store = two_categories();
            let before = store.state().clone();
            let mut ids = store.category("a").unwrap().item_ids();
            if drop_one {
                ids.pop();
            } else {
                ids.push(extra);
            }
            prop_assert!(!store.reorder_within_category("a", &ids).unwrap());
            prop_assert_eq!(store.state(), &before);
        }
    }
}
