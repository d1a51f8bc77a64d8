//! # CLI Layer
//!
//! This module is **one possible UI client** for cheat. It is the only place that:
//! - Parses arguments
//! - Finds and parses catalog files
//! - Writes to stdout and stderr
//! - Installs a `tracing` subscriber
//!
//! ## Structure
//!
//! - [`setup`]: clap definitions
//! - [`commands`]: `run()`, context setup and per-command handlers
//! - [`loader`]: catalog directory loading
//! - [`render`]: `CmdResult` to terminal text
//! - [`styles`]: the terminal palette
//!
//! Handlers never format output themselves. With `--output json` the `CmdResult` is
//! printed as JSON instead of being rendered.

pub mod commands;
pub mod loader;
pub mod render;
pub mod setup;
pub mod styles;

pub use commands::run;
