//! Configuration options for one refinement run.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WinnowerError};

/// Options controlling length filtering, similarity suppression, and case
/// handling.
///
/// Immutable for the duration of one refinement run. Validated before any
/// processing begins; an invalid configuration is a caller contract
/// violation, never silently coerced.
///
/// # Examples
///
/// ```
/// use winnower::refine::options::RefinementOptions;
///
/// let options = RefinementOptions::default();
/// assert_eq!(options.min_length, 1);
/// assert_eq!(options.similarity_threshold, 1);
/// assert!(!options.case_sensitive);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefinementOptions {
    /// Keywords whose raw character count is below this are rejected
    /// before normalization. Must be >= 1.
    pub min_length: usize,
    /// Maximum edit distance treated as "near-duplicate". Zero only
    /// matches identical strings, which the duplicate pass removes first.
    pub similarity_threshold: usize,
    /// Disables case folding during normalization.
    pub case_sensitive: bool,
}

impl Default for RefinementOptions {
    fn default() -> Self {
        RefinementOptions {
            min_length: 1,
            similarity_threshold: 1,
            case_sensitive: false,
        }
    }
}

impl RefinementOptions {
    /// Check the caller contract. Fails fast with a configuration error
    /// when `min_length < 1`.
    pub fn validate(&self) -> Result<()> {
        if self.min_length < 1 {
            return Err(WinnowerError::invalid_argument(
                "min_length must be at least 1",
            ));
        }
        Ok(())
    }
}
