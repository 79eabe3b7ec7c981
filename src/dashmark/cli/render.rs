//! # Rendering Module
//!
//! Turns command results into terminal text. Width math is done on display width so
//! wide and right-to-left titles line up; color comes from `colored`, which drops
//! escapes when stdout is not a terminal or `NO_COLOR` is set.

use colored::*;
use dashmark::api::{CmdMessage, MessageLevel};
use dashmark::config::DashmarkConfig;
use dashmark::view::{CategoryView, Stats};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const ID_WIDTH: usize = 8;
pub const NAME_WIDTH: usize = 32;
pub const PIN_MARKER: &str = "⚲";
pub const COLLAPSED_MARKER: &str = "▸";
pub const EXPANDED_MARKER: &str = "▾";

pub fn render_listing(categories: &[CategoryView]) -> String {
    if categories.is_empty() {
        return "No bookmarks found.\n".to_string();
    }

    let mut out = String::new();
    for (i, category) in categories.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let marker = if category.is_collapsed {
            COLLAPSED_MARKER
        } else {
            EXPANDED_MARKER
        };
        out.push_str(&format!(
            "{} {} {}\n",
            marker,
            category.title.bold(),
            format!("({}, {})", category.key, category.items.len()).dimmed()
        ));
        if category.is_collapsed {
            continue;
        }
        if category.items.is_empty() {
            out.push_str(&format!("    {}\n", "(empty)".dimmed()));
            continue;
        }

        for bookmark in &category.items {
            let prefix = if bookmark.is_pinned {
                format!("  {} ", PIN_MARKER)
            } else {
                "    ".to_string()
            };
            let id = short(&bookmark.id);
            let name = pad_to_width(&truncate_to_width(&bookmark.name, NAME_WIDTH), NAME_WIDTH);
            let fixed = prefix.width() + ID_WIDTH + 1 + NAME_WIDTH + 1;
            let site = bookmark.host().unwrap_or(bookmark.url.as_str());
            let site = truncate_to_width(site, LINE_WIDTH.saturating_sub(fixed));

            let id_colored = if bookmark.is_pinned {
                id.yellow()
            } else {
                id.normal()
            };
            out.push_str(&format!(
                "{}{:<width$} {} {}\n",
                prefix,
                id_colored,
                name,
                site.dimmed(),
                width = ID_WIDTH
            ));
        }
    }
    out
}

pub fn render_titles(titles: &[String]) -> String {
    if titles.is_empty() {
        return "No categories.\n".to_string();
    }
    titles.iter().map(|t| format!("{}\n", t)).collect()
}

pub fn render_stats(stats: &Stats) -> String {
    format!(
        "{} bookmark(s) in {} categories, {} pinned\n",
        stats.bookmarks, stats.categories, stats.pinned
    )
}

pub fn render_config(config: &DashmarkConfig) -> String {
    format!(
        "primary-slot = {}\nbackup-slot = {}\nmax-slot-bytes = {}\nexport-prefix = {}\n",
        config.primary_slot, config.backup_slot, config.max_slot_bytes, config.export_prefix
    )
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

fn short(id: &str) -> String {
    id.chars().take(ID_WIDTH).collect()
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}
