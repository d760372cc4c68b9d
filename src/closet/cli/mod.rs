//! # CLI Layer
//!
//! This module is **one possible UI client** for closet; it is not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Handles argument parsing
//! - Installs the tracing subscriber
//! - Decides when the wardrobe is read from and written to disk
//!
//! ## Structure
//!
//! - `args`: clap definitions
//! - `commands`: `run()` and the per-command handlers
//! - `render`: `TerminalView` plus table and message printing
//! - `logging`: tracing subscriber setup

mod args;
mod commands;
mod logging;
mod render;

pub use commands::run;
