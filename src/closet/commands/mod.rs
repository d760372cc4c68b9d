//! Operation logic over a garment collection.
//!
//! Each submodule works on plain slices and vectors and returns plain Rust
//! values. Nothing here performs I/O; [`crate::api::Closet`] is the facade that
//! owns the collection and dispatches here.

pub mod create;
pub mod delete;
pub mod find;
pub mod sort;
pub mod update;

pub use sort::SortKey;
pub use update::GarmentUpdate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A message for the display boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}
