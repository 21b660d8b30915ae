//! Error types for the recipient input

use thiserror::Error;

/// Errors that can occur while loading the autocomplete option pool
#[derive(Error, Debug)]
pub enum SourceError {
    /// The source could not be reached
    #[error("Option source unavailable: {0}")]
    Unavailable(String),

    /// The source answered with something unusable
    #[error("Malformed option data: {0}")]
    Malformed(String),
}

/// Result type for option-pool operations
pub type Result<T> = std::result::Result<T, SourceError>;
