//! Heading-candidate collection.

use crate::model::Document;

use super::score::LineScorer;

/// Minimum score a line must exceed to become a candidate.
pub const CANDIDATE_THRESHOLD: u32 = 2;

/// A line that scored above the candidate threshold.
///
/// Immutable once collected; `page` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Joined line text
    pub text: String,

    /// Heuristic score
    pub score: u32,

    /// Representative font size in whole points
    pub size: i32,

    /// Page the line appears on (1-indexed)
    pub page: u32,
}

/// Collect scoring candidates in page order, then line order within a page.
///
/// Empty lines are skipped; the first span of each line supplies the
/// representative size and font. Collection order is preserved because the
/// assembler's tie-breaking depends on it.
pub fn collect_candidates(doc: &Document, scorer: &LineScorer) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for (page, line) in doc.lines() {
        let text = line.text();
        if text.is_empty() {
            continue;
        }
        let Some(lead) = line.lead_span() else {
            continue;
        };

        let size = lead.size_pt();
        let score = scorer.score(&text, size, &lead.font);
        if score > CANDIDATE_THRESHOLD {
            candidates.push(Candidate {
                text,
                score,
                size,
                page: page.number,
            });
        }
    }

    candidates
}
