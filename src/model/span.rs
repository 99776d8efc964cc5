//! Span and line-level types.

use serde::{Deserialize, Serialize};

/// A contiguous run of text rendered with one font at one size.
///
/// Produced by the line source (the PDF parser); immutable afterwards. The
/// rendered size is kept as reported; consumers truncate to whole points at
/// the point of use via [`StyleSpan::size_pt`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleSpan {
    /// The text content
    pub text: String,

    /// Rendered font size in points
    pub size: f32,

    /// Font descriptor (e.g., "Helvetica-Bold")
    pub font: String,
}

impl StyleSpan {
    /// Create a new span.
    pub fn new(text: impl Into<String>, size: f32, font: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size,
            font: font.into(),
        }
    }

    /// Font size truncated toward zero to whole points.
    ///
    /// Truncation, not rounding: a 10.9pt span and an 11pt span are distinct.
    pub fn size_pt(&self) -> i32 {
        self.size as i32
    }
}

/// An ordered sequence of spans forming one text line on a page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextLine {
    /// The spans in reading order
    pub spans: Vec<StyleSpan>,
}

impl TextLine {
    /// Create a line from spans.
    pub fn from_spans(spans: Vec<StyleSpan>) -> Self {
        Self { spans }
    }

    /// The line's text: span texts joined with single spaces, trimmed.
    pub fn text(&self) -> String {
        self.spans
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }

    /// The representative span: the first one.
    pub fn lead_span(&self) -> Option<&StyleSpan> {
        self.spans.first()
    }

    /// Check whether the line has no visible text.
    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_truncates_toward_zero() {
        assert_eq!(StyleSpan::new("x", 10.9, "F").size_pt(), 10);
        assert_eq!(StyleSpan::new("x", 11.0, "F").size_pt(), 11);
        assert_eq!(StyleSpan::new("x", 11.999, "F").size_pt(), 11);
    }

    #[test]
    fn test_line_text_joins_and_trims() {
        let line = TextLine::from_spans(vec![
            StyleSpan::new("  1.", 12.0, "F"),
            StyleSpan::new("Introduction ", 12.0, "F"),
        ]);
        assert_eq!(line.text(), "1. Introduction");
    }

    #[test]
    fn test_whitespace_only_line_is_empty() {
        let line = TextLine::from_spans(vec![StyleSpan::new("   ", 12.0, "F")]);
        assert!(line.is_empty());
        assert!(TextLine::default().is_empty());
    }

    #[test]
    fn test_lead_span() {
        let line = TextLine::from_spans(vec![
            StyleSpan::new("big", 18.0, "Bold"),
            StyleSpan::new("small", 9.0, "Regular"),
        ]);
        assert_eq!(line.lead_span().unwrap().size_pt(), 18);
        assert!(TextLine::default().lead_span().is_none());
    }
}
