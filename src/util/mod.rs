//! Utility modules for Winnower.

pub mod levenshtein;
