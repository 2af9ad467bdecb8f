//! Error handling module for the expt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use expc_lex::{LexError, SourceError};
use thiserror::Error;

/// Main error type for the expt CLI application.
///
/// This enum represents all possible errors that can occur
/// during the execution of expt commands.
#[derive(Error, Debug)]
pub enum ExptError {
    /// Error when a required configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when the source file cannot be loaded.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Error when the source text fails to tokenize.
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),
}

/// Result type alias using ExptError.
pub type Result<T> = std::result::Result<T, ExptError>;
