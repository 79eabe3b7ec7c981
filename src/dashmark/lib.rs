//! # Dashmark Architecture
//!
//! Dashmark is a **UI-agnostic bookmark dashboard core**. The terminal client in `cli/`
//! is one renderer for it; a web view or a TUI would call the same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, formats output                │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the session              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, drag.rs)                     │
//! │  - Selector resolution, confirmation, import/export files   │
//! │  - Drag sessions turned into reorder/move commands          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store Layer (store/, codec.rs, view.rs)                    │
//! │  - BookmarkStore: canonical tree + every mutation           │
//! │  - SlotBackend: FsBackend (production), MemBackend (tests)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain arguments and returns `Result<CmdResult>`
//! or plain values. It never prints, never exits and never reads stdin; destructive
//! commands ask a [`commands::Confirm`] supplied by the caller instead.
//!
//! ## Persistence Model
//!
//! The whole tree lives in memory. After each mutation it is serialized and written
//! to the primary slot and then the backup slot. Importing a file or restoring the
//! backup writes the primary slot only. A failed write is reported as an error, but
//! the in-memory tree keeps the change and stays the session's source of truth.
//!
//! ## Testing Strategy
//!
//! 1. **Store and commands**: unit tests against `MemBackend`, plus `proptest` laws
//!    for round-trips, pin ordering, moves and reorders.
//! 2. **API**: dispatch tests.
//! 3. **Integration** (`tests/`): `FsBackend` on a temp dir, and the binary end to end.
//!
//! ## Module Overview
//!
//! - [`model`]: `Bookmark`, `Category`, `Settings`, `RootState`
//! - [`codec`]: JSON snapshot encode/decode
//! - [`view`]: filtered view and stats
//! - [`store`]: slots, backends and the `BookmarkStore`
//! - [`drag`]: drag reorder session
//! - [`commands`]: command layer
//! - [`api`]: facade
//! - [`config`]: `config.json` in the data directory
//! - [`error`]: `DashmarkError`

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod drag;
pub mod error;
pub mod model;
pub mod store;
pub mod view;
