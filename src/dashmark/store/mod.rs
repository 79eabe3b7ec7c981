//! # Storage Layer
//!
//! Dashmark keeps the whole bookmark tree in memory and mirrors it to two named
//! slots after every change:
//!
//! - **Primary**: the current snapshot. Read once when the store opens.
//! - **Backup**: the last snapshot written by an ordinary edit. Imports and
//!   restores write the primary slot only, so a bad import never clobbers the
//!   one recovery path.
//!
//! ## Layers
//!
//! - [`backend::SlotBackend`]: raw slot I/O ("how"). No logic beyond
//!   read/write and the per-slot byte limit.
//!   - [`fs_backend::FsBackend`]: one JSON file per slot, atomic writes.
//!   - [`mem_backend::MemBackend`]: `RefCell` maps for tests.
//! - [`bookmark_store::BookmarkStore`]: the canonical state and every mutation
//!   ("what"). Generic over the backend.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── bookmark_dashboard_data.json     # Primary slot
//! ├── bookmark_dashboard_backup.json   # Backup slot
//! └── config.json                      # Slot names and limits
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod backend;
pub mod bookmark_store;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::SlotBackend;
pub use bookmark_store::{AddedBookmark, BookmarkStore, RestoreOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    Primary,
    Backup,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Primary => write!(f, "primary"),
            Slot::Backup => write!(f, "backup"),
        }
    }
}

/// Storage key names for the two slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotKeys {
    pub primary: String,
    pub backup: String,
}

impl SlotKeys {
    pub fn key(&self, slot: Slot) -> &str {
        match slot {
            Slot::Primary => &self.primary,
            Slot::Backup => &self.backup,
        }
    }
}

impl Default for SlotKeys {
    fn default() -> Self {
        Self {
            primary: crate::config::DEFAULT_PRIMARY_SLOT.to_string(),
            backup: crate::config::DEFAULT_BACKUP_SLOT.to_string(),
        }
    }
}
