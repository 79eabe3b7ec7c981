use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2025-01-15" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("DASHMARK_GIT_HASH");
    const COMMIT_DATE: &str = env!("DASHMARK_COMMIT_DATE");
    const IS_RELEASE: &str = env!("DASHMARK_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "dashmark", bin_name = "dashmark", version = get_version())]
#[command(about = "Bookmark dashboard with categories, pinning and backups", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the storage slots and config.json
    #[arg(long, global = true, env = "DASHMARK_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Dark,
    Light,
    Toggle,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Bookmark(BookmarkCommands),

    #[command(flatten)]
    Category(CategoryCommands),

    #[command(flatten)]
    Data(DataCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// Add a bookmark, creating the category if no title matches
    #[command(alias = "a", display_order = 1)]
    Add {
        name: String,
        /// Gets https:// prepended when it has no scheme
        url: String,
        /// Category title
        category: String,
    },

    /// List bookmarks, optionally filtered by name or category title
    #[command(alias = "ls", display_order = 2)]
    List { filter: Option<String> },

    /// List category titles
    #[command(display_order = 3)]
    Categories,

    /// Show bookmark and category counts
    #[command(display_order = 4)]
    Stats,
}

#[derive(Subcommand, Debug)]
pub enum BookmarkCommands {
    /// Delete a bookmark
    #[command(display_order = 10)]
    Rm {
        /// Category key or title
        category: String,
        /// Bookmark id or id prefix
        item: String,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Pin or unpin a bookmark
    #[command(alias = "p", display_order = 11)]
    Pin { category: String, item: String },

    /// Rename a bookmark
    #[command(display_order = 12)]
    Rename {
        category: String,
        item: String,
        name: String,
    },

    /// Move a bookmark to another position or category
    #[command(alias = "mv", display_order = 13)]
    Move {
        /// Bookmark id or id prefix
        item: String,

        /// Category the bookmark is in
        #[arg(long)]
        from: String,

        /// Category to move it to (may equal --from)
        #[arg(long)]
        to: String,

        /// Position in the target category; the end when omitted
        #[arg(long)]
        index: Option<usize>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// Delete a category and every bookmark in it
    #[command(display_order = 20)]
    Rmcat {
        category: String,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Collapse or expand a category
    #[command(display_order = 21)]
    Collapse { category: String },

    /// Change a category's title
    #[command(display_order = 22)]
    Retitle { category: String, title: String },

    /// Put a category's bookmarks in the given order
    #[command(display_order = 23)]
    Reorder {
        category: String,
        /// Every bookmark id (or prefix) of the category, in the new order
        #[arg(required = true, num_args = 1..)]
        items: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Write all bookmarks to a dated JSON file
    #[command(display_order = 30)]
    Export {
        /// Output directory; the data directory when omitted
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Replace all bookmarks with the contents of an exported file
    #[command(display_order = 31)]
    Import { file: PathBuf },

    /// Replace all bookmarks with the backup slot
    #[command(display_order = 32)]
    Restore {
        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Show or change the theme
    #[command(display_order = 40)]
    Theme {
        #[arg(value_enum)]
        mode: Option<ThemeChoice>,
    },

    /// Get or set configuration
    #[command(display_order = 41)]
    Config {
        /// Configuration key (e.g., export-prefix)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
