//! The reason-coded trash ledger and refinement output types.
//!
//! Every keyword that does not survive refinement leaves a
//! [`TrashRecord`] behind, so the caller can show or export an audit
//! trail of exactly why each entry was removed and, where applicable,
//! which surviving keyword it collided with.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a keyword was recorded in the trash ledger.
///
/// A closed set so the ledger stays machine-checkable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    /// Raw length below the configured minimum.
    TooShort,
    /// Normalization altered the raw value. Informational only; the
    /// keyword stays in consideration.
    SpecialCharsReplaced,
    /// Nothing remained after normalization.
    EmptyAfterProcessing,
    /// Same sorted token set as an already-accepted keyword.
    StructuralDuplicate,
    /// Within the similarity threshold of an earlier-seen keyword.
    NearDuplicate,
}

impl ReasonCode {
    /// Whether this reason removed the keyword from the final list.
    ///
    /// False only for [`ReasonCode::SpecialCharsReplaced`], which records
    /// that normalization touched the value without excluding it.
    pub fn is_exclusionary(&self) -> bool {
        !matches!(self, ReasonCode::SpecialCharsReplaced)
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReasonCode::TooShort => "too_short",
            ReasonCode::SpecialCharsReplaced => "special_chars_replaced",
            ReasonCode::EmptyAfterProcessing => "empty_after_processing",
            ReasonCode::StructuralDuplicate => "structural_duplicate",
            ReasonCode::NearDuplicate => "near_duplicate",
        };
        write!(f, "{name}")
    }
}

/// One entry of the trash ledger.
///
/// `removed` is the value that did not survive; `conserved` is the
/// surviving keyword it collided with, or empty when no collision was
/// involved (too short, empty after processing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrashRecord {
    /// The surviving collision partner, if any.
    pub conserved: String,
    /// The value that was removed (or, for informational records,
    /// altered).
    pub removed: String,
    /// Why this record exists.
    pub reason: ReasonCode,
}

impl TrashRecord {
    pub fn new<C, R>(conserved: C, removed: R, reason: ReasonCode) -> Self
    where
        C: Into<String>,
        R: Into<String>,
    {
        TrashRecord {
            conserved: conserved.into(),
            removed: removed.into(),
            reason,
        }
    }
}

/// The output of one refinement run.
///
/// Created fresh per call and never mutated afterward. The presentation
/// or export shell consumes it as opaque tabular data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefinementResult {
    /// Surviving keywords in their canonical form, in original relative
    /// order.
    pub final_keywords: Vec<String>,
    /// The ordered, reason-coded record of every removal and alteration.
    pub trash: Vec<TrashRecord>,
}
