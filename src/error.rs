//! Error types for the lexstat library.
//!
//! All fallible operations in lexstat return [`Result`], whose error type is
//! the [`LexstatError`] enum.
//!
//! # Examples
//!
//! ```
//! use lexstat::error::{LexstatError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexstatError::invalid_input("text is empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for lexstat operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for the string-carrying variants.
#[derive(Error, Debug)]
pub enum LexstatError {
    /// The input text was empty or whitespace-only.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Analysis-related errors (tokenization, classification, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// I/O errors (reading input files, writing log sinks, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexstatError.
pub type Result<T> = std::result::Result<T, LexstatError>;

impl LexstatError {
    /// Create a new invalid-input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        LexstatError::InvalidInput(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexstatError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexstatError::Other(msg.into())
    }
}
