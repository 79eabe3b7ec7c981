use crate::error::{DashmarkError, Result};
use crate::store::SlotKeys;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const DEFAULT_PRIMARY_SLOT: &str = "bookmark_dashboard_data";
pub const DEFAULT_BACKUP_SLOT: &str = "bookmark_dashboard_backup";
pub const DEFAULT_MAX_SLOT_BYTES: usize = 5 * 1024 * 1024;
pub const DEFAULT_EXPORT_PREFIX: &str = "bookmarks_backup";

/// Keys accepted by [`DashmarkConfig::get`] and [`DashmarkConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["primary-slot", "backup-slot", "max-slot-bytes", "export-prefix"];

/// Configuration for dashmark, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashmarkConfig {
    /// Storage key of the primary slot
    #[serde(default = "default_primary_slot")]
    pub primary_slot: String,

    /// Storage key of the backup slot
    #[serde(default = "default_backup_slot")]
    pub backup_slot: String,

    /// Largest snapshot a slot accepts, in bytes
    #[serde(default = "default_max_slot_bytes")]
    pub max_slot_bytes: usize,

    /// Export files are named `<prefix>_<YYYY-MM-DD>.json`
    #[serde(default = "default_export_prefix")]
    pub export_prefix: String,
}

fn default_primary_slot() -> String {
    DEFAULT_PRIMARY_SLOT.to_string()
}

fn default_backup_slot() -> String {
    DEFAULT_BACKUP_SLOT.to_string()
}

fn default_max_slot_bytes() -> usize {
    DEFAULT_MAX_SLOT_BYTES
}

fn default_export_prefix() -> String {
    DEFAULT_EXPORT_PREFIX.to_string()
}

impl Default for DashmarkConfig {
    fn default() -> Self {
        Self {
            primary_slot: default_primary_slot(),
            backup_slot: default_backup_slot(),
            max_slot_bytes: default_max_slot_bytes(),
            export_prefix: default_export_prefix(),
        }
    }
}

impl DashmarkConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DashmarkError::Io)?;
        let config: DashmarkConfig =
            serde_json::from_str(&content).map_err(DashmarkError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DashmarkError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DashmarkError::Serialization)?;
        fs::write(config_path, content).map_err(DashmarkError::Io)?;
        Ok(())
    }

    pub fn slot_keys(&self) -> SlotKeys {
        SlotKeys {
            primary: self.primary_slot.clone(),
            backup: self.backup_slot.clone(),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "primary-slot" => Some(self.primary_slot.clone()),
            "backup-slot" => Some(self.backup_slot.clone()),
            "max-slot-bytes" => Some(self.max_slot_bytes.to_string()),
            "export-prefix" => Some(self.export_prefix.clone()),
            _ => None,
        }
    }

    /// Set a value by key. Errors are user-facing messages.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        match key {
            "primary-slot" | "backup-slot" | "export-prefix" if !is_valid_name(value) => Err(
                format!("Invalid value for {}: use letters, digits, '-' or '_'", key),
            ),
            "primary-slot" if value == self.backup_slot => {
                Err("primary-slot must differ from backup-slot".to_string())
            }
            "backup-slot" if value == self.primary_slot => {
                Err("backup-slot must differ from primary-slot".to_string())
            }
            "primary-slot" => {
                self.primary_slot = value.to_string();
                Ok(())
            }
            "backup-slot" => {
                self.backup_slot = value.to_string();
                Ok(())
            }
            "export-prefix" => {
                self.export_prefix = value.to_string();
                Ok(())
            }
            "max-slot-bytes" => match value.parse::<usize>() {
                Ok(n) if n > 0 => {
                    self.max_slot_bytes = n;
                    Ok(())
                }
                _ => Err(format!("Invalid value for max-slot-bytes: {}", value)),
            },
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}

fn is_valid_name(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
