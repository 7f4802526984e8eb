//! The refinement engine: length filtering, structural-duplicate
//! detection, and near-duplicate suppression.
//!
//! # Algorithm
//!
//! One pass over the input in original order performs the blank drop,
//! length filter, normalization, empty check, and structural-duplicate
//! check against the accumulating accepted list. A second pass over the
//! fixed accepted ordering suppresses near-duplicates by bounded edit
//! distance. First-seen keywords always win: a later keyword is never
//! conserved at the expense of an earlier one.
//!
//! # Examples
//!
//! ```
//! use winnower::analysis::phrase::ReplacementConfig;
//! use winnower::refine::engine::RefinementEngine;
//! use winnower::refine::options::RefinementOptions;
//!
//! let engine = RefinementEngine::new(
//!     ReplacementConfig::new(),
//!     RefinementOptions::default(),
//! )
//! .unwrap();
//!
//! let result = engine.refine(&["red shoes", "shoes red", "blue shoes"]);
//! assert_eq!(result.final_keywords, vec!["red shoes", "blue shoes"]);
//! assert_eq!(result.trash.len(), 1);
//! ```

use ahash::AHashSet;

use crate::analysis::normalizer::Normalizer;
use crate::analysis::phrase::ReplacementConfig;
use crate::error::Result;
use crate::refine::options::RefinementOptions;
use crate::refine::trash::{ReasonCode, RefinementResult, TrashRecord};
use crate::util::levenshtein::within_distance;

/// An accepted keyword with its sorted token snapshot.
///
/// The snapshot makes word order irrelevant for structural comparison
/// ("red shoes" vs "shoes red") and is computed once per acceptance.
struct Accepted {
    text: String,
    sorted_tokens: Vec<String>,
}

fn sorted_tokens(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    tokens.sort_unstable();
    tokens
}

/// Refines a raw keyword list into a set of semantically-unique keywords
/// plus a reason-coded trash ledger.
///
/// Construction validates the options and builds the normalizer; after
/// that, [`refine`](RefinementEngine::refine) is an infallible pure
/// computation. The engine holds no mutable state across calls.
pub struct RefinementEngine {
    normalizer: Normalizer,
    options: RefinementOptions,
}

impl RefinementEngine {
    /// Build an engine for the given stop-phrase config and options.
    ///
    /// Fails fast on a caller contract violation (`min_length < 1`)
    /// before any processing begins.
    pub fn new(config: ReplacementConfig, options: RefinementOptions) -> Result<Self> {
        options.validate()?;
        let normalizer = Normalizer::new(config, options.case_sensitive)?;
        Ok(RefinementEngine {
            normalizer,
            options,
        })
    }

    /// Run one refinement over `raw_keywords`.
    ///
    /// Every non-blank input ends up either in `final_keywords` (via its
    /// normalized form) or in the trash ledger with an exclusionary
    /// reason; blank entries are dropped silently.
    pub fn refine<S: AsRef<str>>(&self, raw_keywords: &[S]) -> RefinementResult {
        let mut trash: Vec<TrashRecord> = Vec::new();
        let mut recorded_raw: AHashSet<&str> = AHashSet::new();
        let mut accepted: Vec<Accepted> = Vec::new();

        for raw in raw_keywords {
            let raw = raw.as_ref();

            // Blank entries carry no information and are not logged.
            if raw.trim().is_empty() {
                continue;
            }

            if raw.chars().count() < self.options.min_length {
                trash.push(TrashRecord::new("", raw, ReasonCode::TooShort));
                recorded_raw.insert(raw);
                continue;
            }

            let normalized = self.normalizer.normalize(raw);

            // Informational only: the keyword stays in consideration.
            if normalized.changed && !recorded_raw.contains(raw) {
                trash.push(TrashRecord::new(
                    normalized.text.clone(),
                    raw,
                    ReasonCode::SpecialCharsReplaced,
                ));
                recorded_raw.insert(raw);
            }

            if normalized.text.is_empty() {
                trash.push(TrashRecord::new("", raw, ReasonCode::EmptyAfterProcessing));
                recorded_raw.insert(raw);
                continue;
            }

            let tokens = sorted_tokens(&normalized.text);
            if let Some(hit) = accepted.iter().find(|a| a.sorted_tokens == tokens) {
                trash.push(TrashRecord::new(
                    hit.text.clone(),
                    normalized.text,
                    ReasonCode::StructuralDuplicate,
                ));
                recorded_raw.insert(raw);
                continue;
            }

            accepted.push(Accepted {
                text: normalized.text,
                sorted_tokens: tokens,
            });
        }

        // Near-duplicate pass over the fixed accepted ordering. Removal
        // decisions index into the original ordering: a removed keyword
        // no longer conserves later candidates, and an earlier keyword is
        // never removed by a later one.
        let threshold = self.options.similarity_threshold;
        let mut removed = vec![false; accepted.len()];

        for i in 0..accepted.len() {
            if removed[i] {
                continue;
            }
            for j in (i + 1)..accepted.len() {
                if removed[j] {
                    continue;
                }
                if within_distance(&accepted[i].text, &accepted[j].text, threshold) {
                    removed[j] = true;
                    trash.push(TrashRecord::new(
                        accepted[i].text.clone(),
                        accepted[j].text.clone(),
                        ReasonCode::NearDuplicate,
                    ));
                }
            }
        }

        let final_keywords = accepted
            .into_iter()
            .zip(removed)
            .filter(|(_, is_removed)| !is_removed)
            .map(|(a, _)| a.text)
            .collect();

        RefinementResult {
            final_keywords,
            trash,
        }
    }
}

/// Convenience wrapper: build an engine and run one refinement.
pub fn refine<S: AsRef<str>>(
    raw_keywords: &[S],
    config: ReplacementConfig,
    options: RefinementOptions,
) -> Result<RefinementResult> {
    Ok(RefinementEngine::new(config, options)?.refine(raw_keywords))
}
