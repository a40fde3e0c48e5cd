//! Error types for the Lexispell library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`LexispellError`] enum.
//!
//! # Examples
//!
//! ```
//! use lexispell::error::{LexispellError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexispellError::invalid_word("a"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lexispell operations.
#[derive(Error, Debug)]
pub enum LexispellError {
    /// A word too short to carry a single bigram.
    #[error("Invalid word: {0:?} must contain at least 2 characters")]
    InvalidWord(String),

    /// A required input (dictionary, stopword list) could not be read.
    #[error("Source unavailable: {name}: {cause}")]
    SourceUnavailable {
        /// Human readable name of the source, usually a path.
        name: String,
        /// The underlying I/O failure.
        #[source]
        cause: io::Error,
    },

    /// I/O errors outside of source loading (reading text, writing reports).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with LexispellError.
pub type Result<T> = std::result::Result<T, LexispellError>;

impl LexispellError {
    /// Create a new invalid word error.
    pub fn invalid_word<S: Into<String>>(word: S) -> Self {
        LexispellError::InvalidWord(word.into())
    }

    /// Create a new source unavailable error.
    pub fn source_unavailable<S: Into<String>>(name: S, cause: io::Error) -> Self {
        LexispellError::SourceUnavailable {
            name: name.into(),
            cause,
        }
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LexispellError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexispellError::Other(msg.into())
    }
}
