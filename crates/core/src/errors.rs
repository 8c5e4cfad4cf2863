//! Core error types for the Goalfolio engine.
//!
//! Ingestion and strategy failures are collected under a single root
//! [`Error`] so callers only deal with one `Result` type.

use thiserror::Error;

use crate::strategy::StrategyError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the goal planning library.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Strategy computation failed: {0}")]
    Strategy(#[from] StrategyError),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Malformed CSV: {0}")]
    Csv(String),
}

// === From implementations for common error types ===

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Validation(ValidationError::Csv(err.to_string()))
    }
}
