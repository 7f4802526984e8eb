//! # Winnower
//!
//! A keyword refinement and deduplication library for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation, no I/O, no shared state
//! - Canonical keyword normalization (diacritic folding, configurable
//!   stop-phrase stripping, case folding, whitespace collapse)
//! - Structural-duplicate detection over sorted token sets
//! - Near-duplicate suppression by bounded edit distance
//! - Reason-coded trash ledger explaining every removal
//!
//! ## Example
//!
//! ```
//! use winnower::prelude::*;
//!
//! let engine = RefinementEngine::new(
//!     ReplacementConfig::new(),
//!     RefinementOptions::default(),
//! )
//! .unwrap();
//!
//! let result = engine.refine(&["Café", "cafe", "Café "]);
//! assert_eq!(result.final_keywords, vec!["cafe"]);
//! ```

pub mod analysis;
pub mod error;
pub mod refine;
pub mod util;

pub mod prelude {
    pub use crate::analysis::normalizer::{NormalizedKeyword, Normalizer};
    pub use crate::analysis::phrase::{ReplacementConfig, StopPhrase};
    pub use crate::error::{Result, WinnowerError};
    pub use crate::refine::engine::{RefinementEngine, refine};
    pub use crate::refine::options::RefinementOptions;
    pub use crate::refine::trash::{ReasonCode, RefinementResult, TrashRecord};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
