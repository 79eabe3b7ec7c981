use super::backend::SlotBackend;
use super::{Slot, SlotKeys};
use crate::config::{DashmarkConfig, DEFAULT_MAX_SLOT_BYTES};
use crate::error::{DashmarkError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Slot backend storing each slot as `<root>/<key>.json`.
pub struct FsBackend {
    root: PathBuf,
    keys: SlotKeys,
    max_slot_bytes: usize,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            keys: SlotKeys::default(),
            max_slot_bytes: DEFAULT_MAX_SLOT_BYTES,
        }
    }

    /// Backend rooted at `root` using the slot names and limit from `config`.
    pub fn from_config(root: PathBuf, config: &DashmarkConfig) -> Self {
        Self::new(root)
            .with_slot_keys(config.slot_keys())
            .with_max_slot_bytes(config.max_slot_bytes)
    }

    pub fn with_slot_keys(mut self, keys: SlotKeys) -> Self {
        self.keys = keys;
        self
    }

    pub fn with_max_slot_bytes(mut self, limit: usize) -> Self {
        self.max_slot_bytes = limit;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn slot_path(&self, slot: Slot) -> PathBuf {
        self.root.join(format!("{}.json", self.keys.key(slot)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(DashmarkError::Io)?;
        }
        Ok(())
    }
}

impl SlotBackend for FsBackend {
    fn read_slot(&self, slot: Slot) -> Result<Option<String>> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(path).map_err(DashmarkError::Io)?;
        Ok(Some(text))
    }

    fn write_slot(&self, slot: Slot, text: &str) -> Result<()> {
        if text.len() > self.max_slot_bytes {
            return Err(DashmarkError::QuotaExceeded {
                slot,
                size: text.len(),
                limit: self.max_slot_bytes,
            });
        }
        self.ensure_dir()?;

        // Write to a sibling temp file, then rename over the slot.
        let tmp_file = self
            .root
            .join(format!(".{}-{}.tmp", self.keys.key(slot), Uuid::new_v4()));
        let written =
            fs::write(&tmp_file, text).and_then(|()| fs::rename(&tmp_file, self.slot_path(slot)));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_file);
            return Err(DashmarkError::Io(e));
        }
        Ok(())
    }

    fn slot_location(&self, slot: Slot) -> String {
        self.slot_path(slot).display().to_string()
    }
}
