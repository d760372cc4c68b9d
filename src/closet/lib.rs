//! # Closet Architecture
//!
//! Closet is a **UI-agnostic wardrobe inventory library**. The interactive
//! terminal program is one client of it; the session state machine, the
//! collection and the storage boundary know nothing about terminals.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, sets up logging, renders to a terminal │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Layer (session/)                                   │
//! │  - Menu state machine over any BufRead input                │
//! │  - Displays through the View trait                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Closet: owns the insertion-ordered garment list          │
//! │  - Thin facade over commands, returns owned copies          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure logic over slices of Garment                        │
//! └─────────────────────────────────────────────────────────────┘
//!
//!   Storage (store/) sits beside the stack: the whole list is loaded
//!   once before a session and saved once after it.
//! ```
//!
//! ## Validation
//!
//! A [`model::Garment`] can only exist in a valid state. Every constructor and
//! setter validates, and deserialization goes back through the same checks, so
//! the layers above never re-check field values.
//!
//! ## Testing Strategy
//!
//! 1. **Model and commands**: unit tests next to the code.
//! 2. **API**: facade tests over `store::memory::fixtures`.
//! 3. **Session**: scripted input through `std::io::Cursor` and a
//!    `RecordingView` that captures what would have been shown.
//! 4. **Binary**: `tests/` drives the real executable over stdin with a
//!    temporary data directory.
//!
//! ## Module Overview
//!
//! - [`api`]: the collection facade
//! - [`commands`]: create, find, sort, update and delete logic
//! - [`model`]: `Garment`, its kinds and the enumerations
//! - [`session`]: menus, the state machine and the `View` boundary
//! - [`store`]: snapshot persistence
//! - [`config`]: configuration management
//! - [`error`]: error types
//! - `cli`: argument parsing, logging setup and terminal rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
