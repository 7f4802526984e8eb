//! Text analysis pipeline for keyword normalization.
//!
//! This module folds raw keyword strings into canonical comparable forms.
//! The [`normalizer::Normalizer`] applies, in fixed order: case folding,
//! a character substitution table (diacritics and separator punctuation),
//! configurable stop-phrase stripping, and whitespace collapse.

pub mod char_map;
pub mod normalizer;
pub mod phrase;

pub use char_map::CharMapFilter;
pub use normalizer::{NormalizedKeyword, Normalizer};
pub use phrase::{PhraseFilter, ReplacementConfig, StopPhrase};
