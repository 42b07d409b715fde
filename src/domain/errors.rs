//! Domain error types
//!
//! Rejected lines and partial extractions are not errors; they surface as
//! `None` fields. These variants cover contract violations and I/O at the
//! edges of the engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// A preparsed entry broke the input contract (e.g. empty author)
    #[error("Validation error: {0}")]
    Validation(String),
    /// Reading or writing a data file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// External service error
    #[error("External service error: {0}")]
    External(String),
}
