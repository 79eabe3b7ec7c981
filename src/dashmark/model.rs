use chrono::Utc;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefixes that mark a URL as already carrying a scheme.
const KNOWN_SCHEMES: &[&str] = &[
    "http://",
    "https://",
    "ftp://",
    "ftps://",
    "file://",
    "mailto:",
    "about:",
    "data:",
    "chrome://",
    "edge://",
];

pub const DEFAULT_CATEGORY_KEY: &str = "general";
pub const DEFAULT_CATEGORY_TITLE: &str = "عام";

/// Ids of the seeded bookmarks. Fixed so an unsaved default tree lists the same
/// ids in every session.
pub const SEED_GOOGLE_ID: &str = "seed-google";
pub const SEED_GITHUB_ID: &str = "seed-github";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub name: String,
    pub url: String,
    pub is_pinned: bool,
}

impl Bookmark {
    /// Creates an unpinned bookmark with a fresh id. The url is normalized.
    pub fn new(name: impl Into<String>, url: &str) -> Self {
        Self {
            id: new_bookmark_id(),
            name: name.into(),
            url: normalize_url(url),
            is_pinned: false,
        }
    }

    /// Host part of the url, if it has one.
    pub fn host(&self) -> Option<&str> {
        let rest = self.url.split_once("://").map(|(_, r)| r)?;
        let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
        let host_port = authority.rsplit('@').next().unwrap_or_default();
        let host = match host_port.rsplit_once(':') {
            Some((h, port)) if port.chars().all(|c| c.is_ascii_digit()) => h,
            _ => host_port,
        };
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub title: String,
    /// Manual order. Pinning never reorders this sequence.
    pub items: Vec<Bookmark>,
    pub is_collapsed: bool,
}

impl Category {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
            is_collapsed: false,
        }
    }

    pub fn position(&self, item_id: &str) -> Option<usize> {
        self.items.iter().position(|b| b.id == item_id)
    }

    pub fn item(&self, item_id: &str) -> Option<&Bookmark> {
        self.items.iter().find(|b| b.id == item_id)
    }

    pub fn item_mut(&mut self, item_id: &str) -> Option<&mut Bookmark> {
        self.items.iter_mut().find(|b| b.id == item_id)
    }

    pub fn item_ids(&self) -> Vec<String> {
        self.items.iter().map(|b| b.id.clone()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub dark_mode: bool,
}

/// The whole persisted tree.
///
/// Category iteration order is insertion order and drives render order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootState {
    pub categories: IndexMap<String, Category>,
    pub settings: Settings,
}

impl Default for RootState {
    fn default() -> Self {
        let mut general = Category::new(DEFAULT_CATEGORY_TITLE);
        general.items.push(Bookmark {
            id: SEED_GOOGLE_ID.to_string(),
            name: "Google".to_string(),
            url: "https://google.com".to_string(),
            is_pinned: false,
        });
        general.items.push(Bookmark {
            id: SEED_GITHUB_ID.to_string(),
            name: "GitHub".to_string(),
            url: "https://github.com".to_string(),
            is_pinned: true,
        });

        let mut categories = IndexMap::new();
        categories.insert(DEFAULT_CATEGORY_KEY.to_string(), general);
        Self {
            categories,
            settings: Settings::default(),
        }
    }
}

impl RootState {
    pub fn empty() -> Self {
        Self {
            categories: IndexMap::new(),
            settings: Settings::default(),
        }
    }

    /// First category whose title matches exactly.
    pub fn key_for_title(&self, title: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|(_, cat)| cat.title == title)
            .map(|(key, _)| key.as_str())
    }

    /// A key of the form `cat_<millis>` not yet present in this tree.
    pub fn fresh_category_key(&self) -> String {
        let base = format!("cat_{}", Utc::now().timestamp_millis());
        if !self.categories.contains_key(&base) {
            return base;
        }
        (1..)
            .map(|n| format!("{}_{}", base, n))
            .find(|candidate| !self.categories.contains_key(candidate))
            .unwrap_or(base)
    }

    pub fn bookmark_count(&self) -> usize {
        self.categories.values().map(|c| c.items.len()).sum()
    }
}

pub fn new_bookmark_id() -> String {
    Uuid::new_v4().to_string()
}

/// Prepends `https://` unless the url already starts with a known scheme.
pub fn normalize_url(url: &str) -> String {
    let lower = url.to_ascii_lowercase();
    if KNOWN_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}
