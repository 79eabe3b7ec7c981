use crate::config::DashmarkConfig;
use crate::error::Result;
use crate::view::{CategoryView, Stats};
use std::path::PathBuf;

pub mod add;
pub mod arrange;
pub mod backup;
pub mod collapse;
pub mod config;
pub mod delete;
pub mod export;
pub mod helpers;
pub mod import;
pub mod list;
pub mod pinning;
pub mod rename;
pub mod stats;
pub mod theme;

#[derive(Debug, Clone)]
pub struct DashmarkPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<CategoryView>,
    pub stats: Option<Stats>,
    pub titles: Vec<String>,
    pub dark_mode: Option<bool>,
    pub exported: Option<PathBuf>,
    pub config: Option<DashmarkConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed(mut self, listed: Vec<CategoryView>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_titles(mut self, titles: Vec<String>) -> Self {
        self.titles = titles;
        self
    }

    pub fn with_dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = Some(dark_mode);
        self
    }

    pub fn with_exported(mut self, path: PathBuf) -> Self {
        self.exported = Some(path);
        self
    }

    pub fn with_config(mut self, config: DashmarkConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub(crate) fn cancelled() -> Self {
        Self::default().with_message(CmdMessage::info("Operation cancelled."))
    }
}

/// Asks the user to approve a destructive operation.
///
/// Commands that delete or overwrite data take one of these instead of reading
/// stdin themselves, so the CLI can prompt while tests answer directly.
pub trait Confirm {
    /// `summary` lists what will be affected, one entry per line.
    fn confirm(&mut self, summary: &[String]) -> Result<bool>;
}

/// Answers every prompt with a fixed value. `AutoConfirm(true)` backs `--yes`.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&mut self, _summary: &[String]) -> Result<bool> {
        Ok(self.0)
    }
}
