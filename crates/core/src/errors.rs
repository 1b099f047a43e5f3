//! Core error types for folioreport.
//!
//! Missing optional numbers are never errors here: they travel as `None`
//! through every formula. These variants cover malformed input and
//! environment problems only.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the core crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to load locale catalog: {0}")]
    Locale(String),

    #[error("Export failed: {0}")]
    Export(String),
}

/// Validation errors for asset records and user-supplied settings.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Malformed asset record: {0}")]
    MalformedRecord(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::MalformedRecord(err.to_string()))
    }
}
