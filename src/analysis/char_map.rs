//! Character substitution filter for diacritic and punctuation folding.
//!
//! Maps each source character to exactly one replacement character (or a
//! space, for separator punctuation such as apostrophes, periods, and
//! hyphens). Characters outside the table pass through unchanged.
//!
//! # Examples
//!
//! ```
//! use winnower::analysis::char_map::CharMapFilter;
//!
//! let filter = CharMapFilter::new().unwrap();
//! assert_eq!(filter.apply("café"), "cafe");
//! assert_eq!(filter.apply("l'été"), "l ete");
//! ```

use aho_corasick::{AhoCorasick, MatchKind};

use crate::error::{Result, WinnowerError};

/// The default substitution table.
///
/// Diacritics fold to their base letter; apostrophes, periods, and hyphens
/// become spaces so that `"mother's"` and `"mothers"` tokenize apart from
/// their punctuation. The table is applied after case folding, so only
/// lowercase forms are listed.
pub const DEFAULT_CHAR_MAP: &[(&str, &str)] = &[
    ("ö", "o"),
    ("ü", "u"),
    ("ù", "u"),
    ("ê", "e"),
    ("è", "e"),
    ("à", "a"),
    ("â", "a"),
    ("î", "i"),
    ("ó", "o"),
    ("ő", "o"),
    ("ú", "u"),
    ("é", "e"),
    ("á", "a"),
    ("ű", "u"),
    ("í", "i"),
    ("ô", "o"),
    ("ï", "i"),
    ("ç", "c"),
    ("ñ", "n"),
    ("'", " "),
    (".", " "),
    ("-", " "),
];

/// A filter that rewrites text through a character mapping table.
///
/// Built on an Aho-Corasick automaton over the table keys, matching
/// leftmost-longest, so the whole input is folded in a single scan.
pub struct CharMapFilter {
    ac: AhoCorasick,
    replacements: Vec<&'static str>,
}

impl CharMapFilter {
    /// Create a filter over [`DEFAULT_CHAR_MAP`].
    pub fn new() -> Result<Self> {
        let keys: Vec<&str> = DEFAULT_CHAR_MAP.iter().map(|(k, _)| *k).collect();
        let replacements: Vec<&'static str> =
            DEFAULT_CHAR_MAP.iter().map(|(_, v)| *v).collect();

        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&keys)
            .map_err(|e| WinnowerError::analysis(e.to_string()))?;

        Ok(Self { ac, replacements })
    }

    /// Apply the substitution table to `input`.
    pub fn apply(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut last_end = 0;

        for m in self.ac.find_iter(input) {
            output.push_str(&input[last_end..m.start()]);
            output.push_str(self.replacements[m.pattern().as_usize()]);
            last_end = m.end();
        }
        output.push_str(&input[last_end..]);

        output
    }
}
