//! Document-wide font statistics.

use std::collections::BTreeMap;

use crate::model::Document;

/// Baseline used when a document carries no text at all.
pub const DEFAULT_BODY_SIZE: i32 = 10;

/// The body-text baseline for one document.
///
/// Computed once per extraction run with [`FontStatistics::scan`] and fixed
/// afterwards. The body size is the whole-point font size covering the
/// greatest total character count across every span of the document.
#[derive(Debug, Clone)]
pub struct FontStatistics {
    body_size: i32,
    histogram: BTreeMap<i32, usize>,
}

impl FontStatistics {
    /// Scan every span of the document and derive the body size.
    ///
    /// Pure aggregation: the result does not depend on traversal order.
    /// Equal character counts resolve to the larger size.
    pub fn scan(doc: &Document) -> Self {
        let mut histogram: BTreeMap<i32, usize> = BTreeMap::new();
        for (_, line) in doc.lines() {
            for span in &line.spans {
                *histogram.entry(span.size_pt()).or_insert(0) += span.text.chars().count();
            }
        }

        let body_size = histogram
            .iter()
            .max_by_key(|(_, count)| *count)
            .map(|(size, _)| *size)
            .unwrap_or(DEFAULT_BODY_SIZE);

        Self {
            body_size,
            histogram,
        }
    }

    /// The dominant (body text) font size in whole points.
    pub fn body_size(&self) -> i32 {
        self.body_size
    }

    /// Distinct observed sizes in ascending order.
    pub fn sizes(&self) -> impl Iterator<Item = i32> + '_ {
        self.histogram.keys().copied()
    }

    /// Total character count observed at a given size.
    pub fn char_count(&self, size: i32) -> usize {
        self.histogram.get(&size).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Page, StyleSpan, TextLine};

    fn doc_from_spans(spans: Vec<StyleSpan>) -> Document {
        let mut page = Page::new(1);
        for span in spans {
            page.add_line(TextLine::from_spans(vec![span]));
        }
        let mut doc = Document::new();
        doc.add_page(page);
        doc
    }

    #[test]
    fn test_empty_document_defaults_to_ten() {
        let stats = FontStatistics::scan(&Document::new());
        assert_eq!(stats.body_size(), DEFAULT_BODY_SIZE);
    }

    #[test]
    fn test_body_size_weighted_by_characters() {
        // One long span at 10pt outweighs several short spans at 18pt.
        let stats = FontStatistics::scan(&doc_from_spans(vec![
            StyleSpan::new("a fairly long run of body text", 10.0, "F"),
            StyleSpan::new("BIG", 18.0, "F"),
            StyleSpan::new("BIG", 18.0, "F"),
        ]));
        assert_eq!(stats.body_size(), 10);
        assert_eq!(stats.char_count(18), 6);
    }

    #[test]
    fn test_fractional_sizes_truncate() {
        // 10.9pt and 10.2pt pool into the same 10pt bucket.
        let stats = FontStatistics::scan(&doc_from_spans(vec![
            StyleSpan::new("alpha", 10.9, "F"),
            StyleSpan::new("beta", 10.2, "F"),
            StyleSpan::new("xy", 12.0, "F"),
        ]));
        assert_eq!(stats.body_size(), 10);
        assert_eq!(stats.char_count(10), 9);
    }

    #[test]
    fn test_order_independence() {
        let spans = vec![
            StyleSpan::new("heading", 16.0, "F"),
            StyleSpan::new("body body body", 11.0, "F"),
            StyleSpan::new("note", 8.0, "F"),
        ];
        let mut reversed = spans.clone();
        reversed.reverse();

        let forward = FontStatistics::scan(&doc_from_spans(spans));
        let backward = FontStatistics::scan(&doc_from_spans(reversed));
        assert_eq!(forward.body_size(), backward.body_size());
    }

    #[test]
    fn test_tie_resolves_to_larger_size() {
        let stats = FontStatistics::scan(&doc_from_spans(vec![
            StyleSpan::new("abcd", 10.0, "F"),
            StyleSpan::new("efgh", 14.0, "F"),
        ]));
        assert_eq!(stats.body_size(), 14);
    }
}
