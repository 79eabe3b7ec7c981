//! # CLI Layer
//!
//! This module is **one possible renderer** for dashmark, not the application itself.
//!
//! It is the only place that:
//! - Parses arguments
//! - Reads the confirmation answer from stdin
//! - Writes to stdout/stderr
//!
//! ## Structure
//!
//! - `run()`: dispatch, called by `main.rs`
//! - `init_context()`: resolves the data directory, loads config, opens the store
//! - `handle_*()`: per-command handlers that call the API and print the result

use super::logging::{init_logging, LogConfig};
use super::render::{print_messages, render_config, render_listing, render_stats, render_titles};
use super::setup::{
    BookmarkCommands, CategoryCommands, Cli, Commands, CoreCommands, DataCommands, MiscCommands,
    ThemeChoice,
};
use clap::Parser;
use colored::*;
use dashmark::api::{AutoConfirm, ConfigAction, DashmarkApi};
use dashmark::commands::{CmdResult, Confirm, DashmarkPaths};
use dashmark::config::DashmarkConfig;
use dashmark::error::{DashmarkError, Result};
use dashmark::store::fs_backend::FsBackend;
use directories::ProjectDirs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Prompts on stdout and accepts only an exact `Y`, unless `--yes` was given.
struct StdinConfirm {
    yes: bool,
}

impl Confirm for StdinConfirm {
    fn confirm(&mut self, summary: &[String]) -> Result<bool> {
        if self.yes {
            return AutoConfirm(true).confirm(summary);
        }
        println!("This will permanently change:");
        for line in summary {
            println!("  {}", line);
        }
        print!("[Y] To confirm: ");
        io::stdout().flush().map_err(DashmarkError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(DashmarkError::Io)?;
        Ok(input.trim() == "Y")
    }
}

struct AppContext {
    api: DashmarkApi<FsBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_verbosity(cli.verbose).with_ansi(io::stderr().is_terminal()));

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Core(cmd)) => match cmd {
            CoreCommands::Add {
                name,
                url,
                category,
            } => handle_add(&mut ctx, &name, &url, &category),
            CoreCommands::List { filter } => handle_list(&ctx, filter.as_deref().unwrap_or("")),
            CoreCommands::Categories => handle_categories(&ctx),
            CoreCommands::Stats => handle_stats(&ctx),
        },
        Some(Commands::Bookmark(cmd)) => match cmd {
            BookmarkCommands::Rm {
                category,
                item,
                yes,
            } => handle_rm(&mut ctx, &category, &item, yes),
            BookmarkCommands::Pin { category, item } => {
                print_result(&ctx.api.toggle_pin(&category, &item)?);
                Ok(())
            }
            BookmarkCommands::Rename {
                category,
                item,
                name,
            } => {
                print_result(&ctx.api.rename_bookmark(&category, &item, &name)?);
                Ok(())
            }
            BookmarkCommands::Move {
                item,
                from,
                to,
                index,
            } => {
                print_result(&ctx.api.move_bookmark(&item, &from, &to, index)?);
                Ok(())
            }
        },
        Some(Commands::Category(cmd)) => match cmd {
            CategoryCommands::Rmcat { category, yes } => handle_rmcat(&mut ctx, &category, yes),
            CategoryCommands::Collapse { category } => {
                print_result(&ctx.api.toggle_collapsed(&category)?);
                Ok(())
            }
            CategoryCommands::Retitle { category, title } => {
                print_result(&ctx.api.rename_category(&category, &title)?);
                Ok(())
            }
            CategoryCommands::Reorder { category, items } => {
                print_result(&ctx.api.reorder(&category, &items)?);
                Ok(())
            }
        },
        Some(Commands::Data(cmd)) => match cmd {
            DataCommands::Export { dir } => {
                print_result(&ctx.api.export(dir.as_deref())?);
                Ok(())
            }
            DataCommands::Import { file } => {
                print_result(&ctx.api.import(&file)?);
                Ok(())
            }
            DataCommands::Restore { yes } => handle_restore(&mut ctx, yes),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Theme { mode } => handle_theme(&mut ctx, mode),
            MiscCommands::Config { key, value } => handle_config(&ctx, key, value),
        },
        None => handle_list(&ctx, ""),
    }
}

/// `--data-dir`/`DASHMARK_DATA_DIR` first, then the platform data directory.
fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    ProjectDirs::from("com", "dashmark", "dashmark")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| DashmarkError::Api("Could not determine a data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = load_config(&data_dir);
    debug!(data_dir = %data_dir.display(), "opening store");

    let backend = FsBackend::from_config(data_dir.clone(), &config);
    let paths = DashmarkPaths { data_dir };
    Ok(AppContext {
        api: DashmarkApi::new(backend, paths, config),
    })
}

fn load_config(data_dir: &Path) -> DashmarkConfig {
    DashmarkConfig::load(data_dir).unwrap_or_else(|e| {
        eprintln!("{}", format!("Ignoring unreadable config: {}", e).yellow());
        DashmarkConfig::default()
    })
}

fn print_result(result: &CmdResult) {
    print_messages(&result.messages);
}

fn handle_add(ctx: &mut AppContext, name: &str, url: &str, category: &str) -> Result<()> {
    print_result(&ctx.api.add_bookmark(name, url, category)?);
    Ok(())
}

fn handle_list(ctx: &AppContext, filter: &str) -> Result<()> {
    let result = ctx.api.list(filter)?;
    print!("{}", render_listing(&result.listed));
    print_result(&result);
    Ok(())
}

fn handle_categories(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.category_titles()?;
    print!("{}", render_titles(&result.titles));
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(stats) = &result.stats {
        print!("{}", render_stats(stats));
    }
    Ok(())
}

fn handle_rm(ctx: &mut AppContext, category: &str, item: &str, yes: bool) -> Result<()> {
    let result = ctx
        .api
        .delete_bookmark(category, item, &mut StdinConfirm { yes })?;
    print_result(&result);
    Ok(())
}

fn handle_rmcat(ctx: &mut AppContext, category: &str, yes: bool) -> Result<()> {
    let result = ctx
        .api
        .delete_category(category, &mut StdinConfirm { yes })?;
    print_result(&result);
    Ok(())
}

fn handle_restore(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let result = ctx.api.restore_backup(&mut StdinConfirm { yes })?;
    print_result(&result);
    Ok(())
}

fn handle_theme(ctx: &mut AppContext, mode: Option<ThemeChoice>) -> Result<()> {
    let result = match mode {
        None => ctx.api.theme()?,
        Some(ThemeChoice::Dark) => ctx.api.set_dark_mode(true)?,
        Some(ThemeChoice::Light) => ctx.api.set_dark_mode(false)?,
        Some(ThemeChoice::Toggle) => ctx.api.toggle_dark_mode()?,
    };
    print_result(&result);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print!("{}", render_config(config));
    }
    print_result(&result);
    Ok(())
}
