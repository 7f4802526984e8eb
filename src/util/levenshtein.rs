//! Levenshtein edit distance with a digit guard for keyword comparison.
//!
//! This module provides the distance primitive used by near-duplicate
//! suppression. On top of the classic single-character-edit distance it
//! adds a guard for numeric keywords: strings containing decimal digits
//! (product codes, version tags) must never be treated as near-duplicates
//! of each other, so any comparison involving a digit reports an
//! unbounded distance.

use std::cmp::min;

/// Edit distance between two keywords.
///
/// `Infinite` is returned whenever either operand contains a decimal
/// digit; such keywords are incomparable for similarity purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditDistance {
    /// A computed single-character-edit distance.
    Finite(usize),
    /// The operands are incomparable (digit guard).
    Infinite,
}

impl EditDistance {
    /// Check whether this distance is within the given threshold.
    ///
    /// `Infinite` is never within any threshold.
    pub fn is_within(&self, threshold: usize) -> bool {
        match self {
            EditDistance::Finite(d) => *d <= threshold,
            EditDistance::Infinite => false,
        }
    }
}

fn contains_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
}

/// Calculate the edit distance between two keywords, applying the digit
/// guard first.
///
/// # Examples
///
/// ```
/// use winnower::util::levenshtein::{EditDistance, keyword_distance};
///
/// assert_eq!(keyword_distance("shoe", "shoes"), EditDistance::Finite(1));
/// assert_eq!(keyword_distance("v2", "v3"), EditDistance::Infinite);
/// ```
pub fn keyword_distance(a: &str, b: &str) -> EditDistance {
    if contains_digit(a) || contains_digit(b) {
        return EditDistance::Infinite;
    }
    EditDistance::Finite(levenshtein_distance(a, b))
}

/// Check whether two keywords are within `threshold` edits of each other.
///
/// Applies the digit guard, then runs a two-row dynamic program with
/// row-minimum early exit. This is the form the refinement engine calls:
/// it only ever needs the boolean answer, so candidates that drift past
/// the threshold are abandoned without filling the rest of the matrix.
pub fn within_distance(a: &str, b: &str, threshold: usize) -> bool {
    if contains_digit(a) || contains_digit(b) {
        return false;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.len().abs_diff(b_chars.len()) > threshold {
        return false;
    }
    if a_chars.is_empty() || b_chars.is_empty() {
        return a_chars.len().max(b_chars.len()) <= threshold;
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, &ca) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        let mut row_min = curr[0];

        for (j, &cb) in b_chars.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j]
            } else {
                1 + min(min(prev[j + 1], curr[j]), prev[j])
            };
            row_min = min(row_min, curr[j + 1]);
        }

        if row_min > threshold {
            return false;
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()] <= threshold
}

/// Calculate the classic Levenshtein distance between two strings.
///
/// Insertions, deletions, and substitutions each cost 1. Operates on
/// `char` boundaries, so multibyte text is compared per character rather
/// than per byte. No digit guard; see [`keyword_distance`] for the
/// guarded form.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let cols = a_chars.len() + 1;
    let rows = b_chars.len() + 1;
    let mut matrix = vec![vec![0usize; cols]; rows];

    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }

    for i in 1..rows {
        for j in 1..cols {
            if b_chars[i - 1] == a_chars[j - 1] {
                matrix[i][j] = matrix[i - 1][j - 1];
            } else {
                matrix[i][j] = 1 + min(
                    min(matrix[i - 1][j], matrix[i][j - 1]),
                    matrix[i - 1][j - 1],
                );
            }
        }
    }

    matrix[rows - 1][cols - 1]
}
