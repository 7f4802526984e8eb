//! Error types for the Winnower library.
//!
//! Refinement itself never fails on malformed keyword data — empty strings,
//! digit-only strings, and oversized strings are all routed through the
//! reason-coded trash ledger as data. [`WinnowerError`] exists for caller
//! contract violations (invalid options, filter construction failures),
//! which are reported before any processing begins.
//!
//! # Examples
//!
//! ```
//! use winnower::error::{Result, WinnowerError};
//!
//! fn check_threshold(threshold: usize) -> Result<()> {
//!     if threshold > 10 {
//!         return Err(WinnowerError::invalid_argument("threshold too large"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_threshold(3).is_ok());
//! ```

use thiserror::Error;

/// The main error type for Winnower operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation
/// and provides convenient constructor methods for the common cases.
#[derive(Error, Debug)]
pub enum WinnowerError {
    /// Invalid configuration supplied by the caller (e.g. `min_length < 1`)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analysis-related errors (normalization, filter construction)
    #[error("Analysis error: {0}")]
    Analysis(String),

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

/// Result type alias for operations that may fail with WinnowerError.
pub type Result<T> = std::result::Result<T, WinnowerError>;

impl WinnowerError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        WinnowerError::Analysis(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        WinnowerError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        WinnowerError::Config(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WinnowerError::Other(msg.into())
    }
}
