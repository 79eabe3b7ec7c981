//! # Import/Export Codec
//!
//! Converts between the JSON snapshot shape and [`RootState`]:
//!
//! ```text
//! {
//!   "categories": {
//!     "<key>": { "title": "..", "items": [ { "id", "name", "url", "isPinned" } ], "isCollapsed": false }
//!   },
//!   "settings": { "darkMode": false }
//! }
//! ```
//!
//! Encoding is plain serde. Decoding is deliberately lenient: the top level must be an
//! object with a `categories` object, everything below that is read best-effort.
//! Wrong-typed strings become `""`, wrong-typed flags become `false`, non-object items
//! are dropped and a missing `settings` falls back to defaults.
//!
//! Bookmark ids are the one inner field that gets repaired instead of blanked: an item
//! with no id (or one that repeats an earlier id in the same category) is given a fresh
//! one, so every decoded tree still satisfies the per-category uniqueness invariant.

use crate::error::{DashmarkError, Result};
use crate::model::{new_bookmark_id, Bookmark, Category, RootState, Settings};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Pretty, two-space indented snapshot. Used for export files.
pub fn encode(state: &RootState) -> Result<String> {
    serde_json::to_string_pretty(state).map_err(DashmarkError::Serialization)
}

/// Single-line snapshot. Used for the storage slots.
pub fn encode_compact(state: &RootState) -> Result<String> {
    serde_json::to_string(state).map_err(DashmarkError::Serialization)
}

pub fn decode(text: &str) -> Result<RootState> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| DashmarkError::Validation(format!("not valid JSON ({})", e)))?;

    let root = value
        .as_object()
        .ok_or_else(|| DashmarkError::Validation("top level is not an object".to_string()))?;

    let categories = match root.get("categories") {
        None | Some(Value::Null) => {
            return Err(DashmarkError::Validation(
                "missing `categories` field".to_string(),
            ))
        }
        Some(Value::Object(map)) => map,
        Some(_) => {
            return Err(DashmarkError::Validation(
                "`categories` is not an object".to_string(),
            ))
        }
    };

    Ok(RootState {
        categories: categories
            .iter()
            .map(|(key, value)| (key.clone(), decode_category(value)))
            .collect::<IndexMap<_, _>>(),
        settings: root.get("settings").map(decode_settings).unwrap_or_default(),
    })
}

fn decode_category(value: &Value) -> Category {
    let empty = Map::new();
    let obj = value.as_object().unwrap_or(&empty);

    let mut seen = HashSet::new();
    let items = obj
        .get("items")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_object)
                .map(|item| {
                    let mut bookmark = decode_bookmark(item);
                    if bookmark.id.is_empty() || !seen.insert(bookmark.id.clone()) {
                        bookmark.id = new_bookmark_id();
                        seen.insert(bookmark.id.clone());
                    }
                    bookmark
                })
                .collect()
        })
        .unwrap_or_default();

    Category {
        title: string_field(obj, "title"),
        items,
        is_collapsed: bool_field(obj, "isCollapsed"),
    }
}

fn decode_bookmark(obj: &Map<String, Value>) -> Bookmark {
    Bookmark {
        id: string_field(obj, "id"),
        name: string_field(obj, "name"),
        url: string_field(obj, "url"),
        is_pinned: bool_field(obj, "isPinned"),
    }
}

fn decode_settings(value: &Value) -> Settings {
    match value.as_object() {
        Some(obj) => Settings {
            dark_mode: bool_field(obj, "darkMode"),
        },
        None => Settings::default(),
    }
}

fn string_field(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn bool_field(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key).and_then(Value::as_bool).unwrap_or(false)
}
