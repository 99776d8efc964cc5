//! Line scoring heuristics.
//!
//! A line's score is the sum of independent typographic cues: how much larger
//! than body text it is, whether its font is bold, whether it starts with a
//! structural prefix, and whether it is a short all-caps run. The cues are
//! standalone predicates so the policy can grow without touching the
//! aggregation.

use once_cell::sync::Lazy;
use regex::Regex;

use super::stats::FontStatistics;

/// Structural heading prefixes, anchored at the start of the line: dotted
/// outline numbers ("3", "1.2.3"), a capital letter with a dot ("A."), or
/// "Chapter"/"Section" followed by a number.
static STRUCTURAL_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:(?:\d+\.)*\d+|[A-Z]\.|Chapter\s\d+|Section\s\d+)").unwrap());

const BOLD_BONUS: u32 = 2;
const PREFIX_BONUS: u32 = 3;
const ALL_CAPS_BONUS: u32 = 1;

/// Word-count bound for the all-caps cue (exclusive).
const ALL_CAPS_MAX_WORDS: usize = 7;

/// Whether the font descriptor marks a bold face.
pub fn is_bold_font(font: &str) -> bool {
    font.to_lowercase().contains("bold")
}

/// Whether the text starts with a structural heading prefix.
pub fn has_structural_prefix(text: &str) -> bool {
    STRUCTURAL_PREFIX.is_match(text)
}

/// Whether the text is entirely upper-case and shorter than seven words.
///
/// Requires at least one cased character: digits and punctuation alone do
/// not qualify.
pub fn is_short_all_caps(text: &str) -> bool {
    let has_upper = text.chars().any(|c| c.is_uppercase());
    let has_lower = text.chars().any(|c| c.is_lowercase());
    has_upper && !has_lower && text.split_whitespace().count() < ALL_CAPS_MAX_WORDS
}

/// Scores lines against a fixed body-size baseline.
///
/// The baseline is set at construction and never changes, so scoring is a
/// pure function of its arguments.
#[derive(Debug, Clone, Copy)]
pub struct LineScorer {
    body_size: i32,
}

impl LineScorer {
    /// Create a scorer from a document's font statistics.
    pub fn new(stats: &FontStatistics) -> Self {
        Self {
            body_size: stats.body_size(),
        }
    }

    /// Create a scorer with an explicit baseline.
    pub fn with_body_size(body_size: i32) -> Self {
        Self { body_size }
    }

    /// The baseline this scorer measures against.
    pub fn body_size(&self) -> i32 {
        self.body_size
    }

    /// Additive heuristic score for one line.
    ///
    /// `size` and `font` come from the line's representative (first) span;
    /// `text` is the joined line text.
    pub fn score(&self, text: &str, size: i32, font: &str) -> u32 {
        let mut score = (size - self.body_size).max(0) as u32;
        if is_bold_font(font) {
            score += BOLD_BONUS;
        }
        if has_structural_prefix(text) {
            score += PREFIX_BONUS;
        }
        if is_short_all_caps(text) {
            score += ALL_CAPS_BONUS;
        }
        score
    }
}
