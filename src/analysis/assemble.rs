//! Structure assembly: title selection and heading-level mapping.

use crate::model::{ExtractionResult, HeadingLevel, OutlineEntry};

use super::candidates::Candidate;

/// Number of distinct candidate font sizes promoted to heading levels.
const LEVEL_COUNT: usize = 3;

/// Assemble the final structure from the ordered candidate sequence.
///
/// Pure function; every edge case (no candidates, no page-1 candidates, all
/// candidates at one size) resolves through the rules below rather than an
/// error path.
pub fn assemble(candidates: &[Candidate]) -> ExtractionResult {
    if candidates.is_empty() {
        return ExtractionResult::untitled();
    }

    let title = select_title(candidates);
    let levels = map_levels(candidates);

    let outline = candidates
        .iter()
        .filter(|c| !(c.page == 1 && c.text == title))
        .filter_map(|c| {
            level_for(&levels, c.size).map(|level| OutlineEntry {
                level,
                text: c.text.clone(),
                page: c.page,
            })
        })
        .collect();

    ExtractionResult { title, outline }
}

/// The highest-scoring page-1 candidate, earliest occurrence winning ties;
/// falls back to the first candidate anywhere when page 1 has none.
fn select_title(candidates: &[Candidate]) -> String {
    let mut best: Option<&Candidate> = None;
    for candidate in candidates.iter().filter(|c| c.page == 1) {
        match best {
            Some(current) if candidate.score <= current.score => {}
            _ => best = Some(candidate),
        }
    }
    best.unwrap_or(&candidates[0]).text.clone()
}

/// Map the top [`LEVEL_COUNT`] distinct candidate sizes, largest first, to
/// H1..H3. Sizes below the cut receive no level.
fn map_levels(candidates: &[Candidate]) -> Vec<(i32, HeadingLevel)> {
    let mut sizes: Vec<i32> = candidates.iter().map(|c| c.size).collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes.dedup();

    sizes
        .into_iter()
        .take(LEVEL_COUNT)
        .enumerate()
        .filter_map(|(rank, size)| HeadingLevel::from_rank(rank).map(|level| (size, level)))
        .collect()
}

fn level_for(levels: &[(i32, HeadingLevel)], size: i32) -> Option<HeadingLevel> {
    levels
        .iter()
        .find(|(mapped, _)| *mapped == size)
        .map(|(_, level)| *level)
}
