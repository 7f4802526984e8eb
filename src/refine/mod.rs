//! Keyword refinement engine.
//!
//! Consumes a raw keyword list and produces a reduced set of
//! semantically-unique keywords plus a reason-coded trash ledger
//! explaining every removal. See [`engine::RefinementEngine`] for the
//! entry point.

pub mod engine;
pub mod options;
pub mod trash;

pub use engine::RefinementEngine;
pub use options::RefinementOptions;
pub use trash::{ReasonCode, RefinementResult, TrashRecord};
