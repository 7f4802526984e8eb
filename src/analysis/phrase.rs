//! Stop-phrase stripping with caller-controlled toggles.
//!
//! A [`ReplacementConfig`] is an insertion-ordered list of stop phrases,
//! each with an enabled flag the caller (typically a form with one checkbox
//! per phrase) can flip. Phrases are written with surrounding spaces
//! (e.g. `" for "`) so they never match inside a word.
//!
//! Application order matters: phrases are replaced sequentially in
//! insertion order, and a later phrase may match text exposed by an
//! earlier substitution. The config therefore preserves insertion order
//! rather than sorting or hashing its entries.
//!
//! # Examples
//!
//! ```
//! use winnower::analysis::phrase::{PhraseFilter, ReplacementConfig};
//!
//! let config = ReplacementConfig::new()
//!     .with_phrase(" pour ", true)
//!     .with_phrase(" les ", true);
//!
//! let filter = PhraseFilter::new(&config);
//! assert_eq!(filter.apply(" pour les chaussures "), " chaussures ");
//! ```

use serde::{Deserialize, Serialize};

/// One stop phrase and its apply flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopPhrase {
    /// The phrase to strip, surrounded by spaces to avoid partial-word
    /// matches.
    pub phrase: String,
    /// Whether this phrase is applied during normalization.
    pub enabled: bool,
}

/// An insertion-ordered set of stop phrases.
///
/// Disabled phrases stay in the list (the caller may re-enable them
/// between runs) but are skipped at apply time. Immutable for the
/// duration of one refinement run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementConfig {
    phrases: Vec<StopPhrase>,
}

impl ReplacementConfig {
    /// Create an empty config.
    pub fn new() -> Self {
        ReplacementConfig::default()
    }

    /// Add a phrase with the given apply flag, preserving insertion order.
    pub fn with_phrase<S: Into<String>>(mut self, phrase: S, enabled: bool) -> Self {
        self.phrases.push(StopPhrase {
            phrase: phrase.into(),
            enabled,
        });
        self
    }

    /// The phrases in insertion order.
    pub fn phrases(&self) -> &[StopPhrase] {
        &self.phrases
    }

    /// Whether no enabled phrase exists.
    pub fn is_empty(&self) -> bool {
        !self.phrases.iter().any(|p| p.enabled)
    }
}

/// A filter that strips enabled stop phrases from text.
pub struct PhraseFilter {
    enabled: Vec<String>,
}

impl PhraseFilter {
    /// Create a filter over the enabled phrases of `config`, in insertion
    /// order.
    pub fn new(config: &ReplacementConfig) -> Self {
        let enabled = config
            .phrases()
            .iter()
            .filter(|p| p.enabled)
            .map(|p| p.phrase.clone())
            .collect();

        PhraseFilter { enabled }
    }

    /// Replace every occurrence of each enabled phrase with a single
    /// space, applying phrases sequentially in insertion order.
    pub fn apply(&self, input: &str) -> String {
        let mut output = input.to_string();
        for phrase in &self.enabled {
            output = output.replace(phrase.as_str(), " ");
        }
        output
    }
}
