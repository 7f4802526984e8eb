//! Keyword normalizer combining the analysis filters in fixed order.
//!
//! The pipeline is: case fold (unless case sensitivity is requested) →
//! character substitution table → enabled stop phrases, sequentially →
//! whitespace collapse and trim. Each stage operates on the previous
//! stage's output, so the order is part of the contract.
//!
//! # Examples
//!
//! ```
//! use winnower::analysis::normalizer::Normalizer;
//! use winnower::analysis::phrase::ReplacementConfig;
//!
//! let config = ReplacementConfig::new().with_phrase(" for ", true);
//! let normalizer = Normalizer::new(config, false).unwrap();
//!
//! let out = normalizer.normalize("  Shoes for Summer  ");
//! assert_eq!(out.text, "shoes summer");
//! assert!(out.changed);
//! ```

use crate::analysis::char_map::CharMapFilter;
use crate::analysis::phrase::{PhraseFilter, ReplacementConfig};
use crate::error::Result;

/// A keyword folded into canonical comparable form.
///
/// `changed` is true iff `text` differs from the raw input it was derived
/// from. The refinement engine uses it to log an informational trash
/// record without removing the keyword from consideration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedKeyword {
    /// The canonical form: substituted, phrase-stripped, single-spaced,
    /// trimmed, and case-folded unless case sensitivity was requested.
    pub text: String,
    /// Whether normalization altered the raw input at all.
    pub changed: bool,
}

/// Folds raw keyword strings into canonical comparable forms.
///
/// Pure and stateless across calls: the filters are built once at
/// construction and every [`normalize`](Normalizer::normalize) call is an
/// independent computation over its input.
pub struct Normalizer {
    char_map: CharMapFilter,
    phrases: PhraseFilter,
    case_sensitive: bool,
}

impl Normalizer {
    /// Build a normalizer for one refinement run.
    ///
    /// Fails only if the substitution automaton cannot be constructed.
    pub fn new(config: ReplacementConfig, case_sensitive: bool) -> Result<Self> {
        Ok(Normalizer {
            char_map: CharMapFilter::new()?,
            phrases: PhraseFilter::new(&config),
            case_sensitive,
        })
    }

    /// Normalize a raw keyword.
    ///
    /// Never fails: empty input yields an empty canonical form with
    /// `changed == false`.
    pub fn normalize(&self, raw: &str) -> NormalizedKeyword {
        let folded = if self.case_sensitive {
            raw.to_string()
        } else {
            raw.to_lowercase()
        };

        let substituted = self.char_map.apply(&folded);
        let stripped = self.phrases.apply(&substituted);

        let text = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
        let changed = text != raw;

        NormalizedKeyword { text, changed }
    }
}
