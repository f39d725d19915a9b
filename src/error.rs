//! Centralized error handling for the stampbook application.
//!
//! The taxonomy is shallow by design: nothing in this application is fatal.
//! A photo that fails to decode is the same as no photo, a capture that fails
//! is logged and retried by the user, and malformed dates never reach an
//! error path at all (they render as a placeholder).
//!
//! The `ResultExt` trait adds a `.context()` method so call sites can say
//! what they were doing when an error bubbled up:
//!
//! ```
//! use stampbook::error::{Result, ResultExt as _};
//! use std::fs;
//!
//! fn read_photo(path: &str) -> Result<Vec<u8>> {
//!     let bytes = fs::read(path).context("Failed to read photo file")?;
//!     Ok(bytes)
//! }
//! ```

use std::fmt;

/// Main error type for stampbook operations.
#[derive(Debug)]
pub enum StampbookError {
    /// I/O errors (reading photos, writing exports)
    Io(std::io::Error),

    /// Image decode/encode errors
    Image(String),

    /// Screenshot capture errors (rect empty, worker lost, pixel mismatch)
    Capture(String),

    /// Generic error with context
    Other(String),
}

impl fmt::Display for StampbookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Image(msg) => write!(f, "Image error: {msg}"),
            Self::Capture(msg) => write!(f, "Capture error: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for StampbookError {}

impl From<std::io::Error> for StampbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<image::ImageError> for StampbookError {
    fn from(err: image::ImageError) -> Self {
        Self::Image(err.to_string())
    }
}

/// Result type alias for stampbook operations.
pub type Result<T> = std::result::Result<T, StampbookError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<StampbookError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: StampbookError = e.into();
            StampbookError::Other(format!("{}: {}", msg.into(), err))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: StampbookError = e.into();
            StampbookError::Other(format!("{}: {}", f(), err))
        })
    }
}
