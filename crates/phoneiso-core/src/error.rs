// crates/phoneiso-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading, validating or saving a reference dataset.
///
/// Lookups themselves never fail: an unclassifiable input yields `""`.
#[derive(Debug, Error)]
pub enum PhoneIsoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, PhoneIsoError>;
