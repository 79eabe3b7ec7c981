//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry
//! point for every dashmark operation, whichever UI drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Owns the session**: the [`BookmarkStore`] loaded at startup, the data paths and
//!   the active [`DashmarkConfig`]
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs` and the store
//! - **Terminal I/O**: no stdout, stderr or prompting; destructive calls take a
//!   [`Confirm`] supplied by the caller
//! - **Presentation**: returns views and messages, not strings to print
//!
//! ## Generic Over SlotBackend
//!
//! `DashmarkApi<B: SlotBackend>`:
//! - Production: `DashmarkApi<FsBackend>`
//! - Testing: `DashmarkApi<MemBackend>`

use crate::commands::{self, CmdResult, Confirm, DashmarkPaths};
use crate::config::DashmarkConfig;
use crate::drag::{DragSession, DropTarget};
use crate::error::Result;
use crate::store::{BookmarkStore, SlotBackend};
use std::path::Path;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{AutoConfirm, CmdMessage, MessageLevel};

/// The main API facade for dashmark operations.
pub struct DashmarkApi<B: SlotBackend> {
    store: BookmarkStore<B>,
    paths: DashmarkPaths,
    config: DashmarkConfig,
}

impl<B: SlotBackend> DashmarkApi<B> {
    /// Opens the store on `backend`. Loading never writes to either slot.
    pub fn new(backend: B, paths: DashmarkPaths, config: DashmarkConfig) -> Self {
        Self {
            store: BookmarkStore::open(backend),
            paths,
            config,
        }
    }

    pub fn add_bookmark(&mut self, name: &str, url: &str, category: &str) -> Result<CmdResult> {
        commands::add::run(&mut self.store, name, url, category)
    }

    pub fn list(&self, filter: &str) -> Result<CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn category_titles(&self) -> Result<CmdResult> {
        commands::list::categories(&self.store)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn delete_bookmark<C: Confirm>(
        &mut self,
        category: &str,
        item: &str,
        confirm: &mut C,
    ) -> Result<CmdResult> {
        commands::delete::bookmark(&mut self.store, category, item, confirm)
    }

    pub fn delete_category<C: Confirm>(&mut self, category: &str, confirm: &mut C) -> Result<CmdResult> {
        commands::delete::category(&mut self.store, category, confirm)
    }

    pub fn toggle_pin(&mut self, category: &str, item: &str) -> Result<CmdResult> {
        commands::pinning::toggle(&mut self.store, category, item)
    }

    pub fn toggle_collapsed(&mut self, category: &str) -> Result<CmdResult> {
        commands::collapse::toggle(&mut self.store, category)
    }

    pub fn rename_bookmark(&mut self, category: &str, item: &str, name: &str) -> Result<CmdResult> {
        commands::rename::bookmark(&mut self.store, category, item, name)
    }

    pub fn rename_category(&mut self, category: &str, title: &str) -> Result<CmdResult> {
        commands::rename::category(&mut self.store, category, title)
    }

    pub fn reorder<I: AsRef<str>>(&mut self, category: &str, items: &[I]) -> Result<CmdResult> {
        commands::arrange::reorder(&mut self.store, category, items)
    }

    pub fn move_bookmark(
        &mut self,
        item: &str,
        from: &str,
        to: &str,
        index: Option<usize>,
    ) -> Result<CmdResult> {
        commands::arrange::move_to(&mut self.store, item, from, to, index)
    }

    /// Completes a pointer drag started by the renderer.
    pub fn drop(&mut self, session: &mut DragSession, target: Option<DropTarget>) -> Result<CmdResult> {
        commands::arrange::drop(&mut self.store, session, target)
    }

    pub fn set_dark_mode(&mut self, dark_mode: bool) -> Result<CmdResult> {
        commands::theme::set(&mut self.store, dark_mode)
    }

    pub fn toggle_dark_mode(&mut self) -> Result<CmdResult> {
        commands::theme::toggle(&mut self.store)
    }

    pub fn theme(&self) -> Result<CmdResult> {
        commands::theme::show(&self.store)
    }

    /// Exports into `dir`, or into the data directory when `None`.
    pub fn export(&self, dir: Option<&Path>) -> Result<CmdResult> {
        let dir = dir.unwrap_or(&self.paths.data_dir);
        commands::export::run(&self.store, dir, &self.config.export_prefix)
    }

    pub fn import(&mut self, path: &Path) -> Result<CmdResult> {
        commands::import::run(&mut self.store, path)
    }

    pub fn restore_backup<C: Confirm>(&mut self, confirm: &mut C) -> Result<CmdResult> {
        commands::backup::restore(&mut self.store, confirm)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &DashmarkPaths {
        &self.paths
    }

    pub fn store(&self) -> &BookmarkStore<B> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_CATEGORY_KEY;
    use crate::store::mem_backend::MemBackend;
    use tempfile::TempDir;

    fn api(dir: &TempDir) -> DashmarkApi<MemBackend> {
        DashmarkApi::new(
            MemBackend::new(),
            DashmarkPaths {
                data_dir: dir.path().to_path_buf(),
            },
            DashmarkConfig::default(),
        )
    }

    #[test]
    fn add_then_list() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir);
        api.add_bookmark("Rust", "rust-lang.org", "Dev").unwrap();
        let listed = api.list("rust").unwrap().listed;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].items[0].url, "https://rust-lang.org");
    }

    #[test]
    fn export_defaults_to_data_dir() {
        let dir = TempDir::new().unwrap();
        let api = api(&dir);
        let path = api.export(None).unwrap().exported.unwrap();
        assert!(path.starts_with(dir.path()));
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("bookmarks_backup_"));
    }

    #[test]
    fn delete_goes_through_confirm() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir);
        api.delete_category(DEFAULT_CATEGORY_KEY, &mut AutoConfirm(false))
            .unwrap();
        assert_eq!(api.stats().unwrap().stats.unwrap().categories, 1);
        api.delete_category(DEFAULT_CATEGORY_KEY, &mut AutoConfirm(true))
            .unwrap();
        assert_eq!(api.stats().unwrap().stats.unwrap().categories, 0);
    }

    #[test]
    fn drag_drop_through_api() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir);
        let ids = api.store().category(DEFAULT_CATEGORY_KEY).unwrap().item_ids();

        let mut session = DragSession::new();
        session.begin(ids[1].clone(), DEFAULT_CATEGORY_KEY);
        api.drop(
            &mut session,
            Some(DropTarget {
                category_key: DEFAULT_CATEGORY_KEY.into(),
                layout: vec![ids[1].clone(), ids[0].clone()],
            }),
        )
        .unwrap();

        let names: Vec<_> = api
            .store()
            .category(DEFAULT_CATEGORY_KEY)
            .unwrap()
            .items
            .iter()
            .map(|b| b.name.clone())
            .collect();
        assert_eq!(names, ["GitHub", "Google"]);
    }
}
