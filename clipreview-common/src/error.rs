//! Common error types for the clip review tool

use thiserror::Error;

/// Common result type for clip review operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared by the dataset, comment store, and config layers
#[derive(Error, Debug)]
pub enum Error {
    /// CSV read/write error (wraps csv::Error)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
