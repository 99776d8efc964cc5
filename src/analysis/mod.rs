//! Heuristic outline analysis.
//!
//! The pipeline runs in four stages over an already-parsed [`Document`]:
//! a statistics pass establishes the document's body font size, a scorer
//! rates every line against that baseline, qualifying lines are collected as
//! candidates in reading order, and the assembler turns the candidates into
//! a title plus a three-level outline. Every stage is a pure function of its
//! input; nothing here performs I/O or can fail.

mod assemble;
mod candidates;
mod score;
mod stats;

pub use assemble::assemble;
pub use candidates::{collect_candidates, Candidate, CANDIDATE_THRESHOLD};
pub use score::{has_structural_prefix, is_bold_font, is_short_all_caps, LineScorer};
pub use stats::{FontStatistics, DEFAULT_BODY_SIZE};

use crate::model::{Document, ExtractionResult};

/// Run the full analysis pipeline over a parsed document.
///
/// # Example
///
/// ```
/// use outliner::analysis::extract_structure;
/// use outliner::model::{Document, Page, StyleSpan, TextLine};
///
/// let mut page = Page::new(1);
/// page.add_line(TextLine::from_spans(vec![StyleSpan::new(
///     "1. Introduction",
///     16.0,
///     "Helvetica",
/// )]));
/// let mut doc = Document::new();
/// doc.add_page(page);
///
/// let result = extract_structure(&doc);
/// assert_eq!(result.title, "1. Introduction");
/// ```
pub fn extract_structure(doc: &Document) -> ExtractionResult {
    let stats = FontStatistics::scan(doc);
    let scorer = LineScorer::new(&stats);
    let candidates = collect_candidates(doc, &scorer);
    assemble(&candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Document, Page, StyleSpan, TextLine};

    fn doc_with_lines(lines: Vec<(&str, f32, &str)>) -> Document {
        let mut page = Page::new(1);
        for (text, size, font) in lines {
            page.add_line(TextLine::from_spans(vec![StyleSpan::new(
                text, size, font,
            )]));
        }
        let mut doc = Document::new();
        doc.add_page(page);
        doc
    }

    #[test]
    fn test_empty_document_yields_untitled() {
        let result = extract_structure(&Document::new());
        assert_eq!(result.title, "Untitled Document");
        assert!(result.outline.is_empty());
    }

    #[test]
    fn test_single_heading_becomes_title() {
        let doc = doc_with_lines(vec![
            ("1. Introduction", 16.0, "Helvetica"),
            ("Body text that dominates the page by volume.", 10.0, "Helvetica"),
            ("More body text at the dominant size here.", 10.0, "Helvetica"),
        ]);
        let result = extract_structure(&doc);
        // Size bonus 6 + prefix bonus 3 = 9; the only candidate is the title
        // and is therefore excluded from the outline.
        assert_eq!(result.title, "1. Introduction");
        assert!(result.outline.is_empty());
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let doc = doc_with_lines(vec![
            ("ANNUAL REPORT", 20.0, "Times-Bold"),
            ("1. Overview", 14.0, "Times-Bold"),
            ("The quick brown fox jumps over the lazy dog.", 10.0, "Times"),
            ("2. Findings", 14.0, "Times-Bold"),
        ]);
        let first = extract_structure(&doc);
        let second = extract_structure(&doc);
        assert_eq!(first, second);
    }
}
