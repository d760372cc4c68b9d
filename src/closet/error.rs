use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ClosetError {
    #[error("Invalid {field}: {constraint}")]
    InvalidFieldValue {
        field: &'static str,
        constraint: String,
    },

    #[error("Unsupported operation: {0}")]
    UnsupportedMutation(String),

    #[error("Invalid range: min ({min}) must be less than max ({max})")]
    InvalidRange { min: i32, max: i32 },

    #[error("Invalid input: {0}")]
    MalformedInput(String),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Garment not found: {0}")]
    GarmentNotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl ClosetError {
    pub fn invalid_field(field: &'static str, constraint: impl Into<String>) -> Self {
        ClosetError::InvalidFieldValue {
            field,
            constraint: constraint.into(),
        }
    }

    /// The field name carried by an `InvalidFieldValue`, if this is one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ClosetError::InvalidFieldValue { field, .. } => Some(field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClosetError>;
