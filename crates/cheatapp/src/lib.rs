//! # Cheat Architecture
//!
//! Cheat is a **UI-agnostic cheat sheet library**: it filters reference catalogs and keeps
//! a persisted set of bookmarks. The `cheat` binary is one client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (the `cheat` crate)                              │
//! │  - Parses arguments, loads catalog files, renders output    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (index arguments → selectors)          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic over Library, BookmarkStore and search    │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (search.rs, store/)                                   │
//! │  - filter: pure, read-only query over one catalog           │
//! │  - BookmarkStore over a StorageBackend (fs or memory)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Catalogs are read-only input. The library never discovers or parses catalog files; the
//! client builds a [`library::Library`] and passes it in.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never calls
//! `std::process::exit`. Diagnostics go through `tracing`; installing a subscriber is the
//! client's decision.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`search`]: The filter engine
//! - [`store`]: Bookmark persistence
//! - [`model`]: Catalog and bookmark types
//! - [`library`]: The set of loaded catalogs
//! - [`index`]: Display indexes for bookmarks
//! - [`config`]: Configuration management
//! - [`init`]: Path resolution and context setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod library;
pub mod model;
pub mod search;
pub mod store;
