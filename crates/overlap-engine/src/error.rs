//! Error types for overlap-engine operations.
//!
//! Conflict detection and layout are total and never produce these; only
//! loading, strict validation and configuration can fail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid duration '{0}': use a format like 1h, 30m, 1h30m")]
    InvalidDuration(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Events JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
