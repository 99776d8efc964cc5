//! Outline output types: the serialized extraction contract.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Title used when no line in the document qualifies as a candidate.
pub const DEFAULT_TITLE: &str = "Untitled Document";

/// Heading level, largest font size first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Top-level heading (largest candidate font size)
    H1,
    /// Second-level heading
    H2,
    /// Third-level heading
    H3,
}

impl HeadingLevel {
    /// Level for a 0-based rank in the descending size order.
    pub fn from_rank(rank: usize) -> Option<Self> {
        match rank {
            0 => Some(HeadingLevel::H1),
            1 => Some(HeadingLevel::H2),
            2 => Some(HeadingLevel::H3),
            _ => None,
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadingLevel::H1 => write!(f, "H1"),
            HeadingLevel::H2 => write!(f, "H2"),
            HeadingLevel::H3 => write!(f, "H3"),
        }
    }
}

/// A single entry of the extracted outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Heading level
    pub level: HeadingLevel,

    /// Heading text
    pub text: String,

    /// Page the heading appears on (1-indexed)
    pub page: u32,
}

/// The result of one extraction run over one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Document title
    pub title: String,

    /// Headings in page order, then line order within a page
    pub outline: Vec<OutlineEntry>,
}

impl ExtractionResult {
    /// The fallback result for a document with no heading candidates.
    pub fn untitled() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            outline: Vec::new(),
        }
    }

    /// Check if the outline is empty.
    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_serializes_as_plain_name() {
        let json = serde_json::to_string(&HeadingLevel::H2).unwrap();
        assert_eq!(json, "\"H2\"");
    }

    #[test]
    fn test_level_from_rank() {
        assert_eq!(HeadingLevel::from_rank(0), Some(HeadingLevel::H1));
        assert_eq!(HeadingLevel::from_rank(2), Some(HeadingLevel::H3));
        assert_eq!(HeadingLevel::from_rank(3), None);
    }

    #[test]
    fn test_untitled_fallback() {
        let result = ExtractionResult::untitled();
        assert_eq!(result.title, "Untitled Document");
        assert!(result.is_empty());
    }

    #[test]
    fn test_result_round_trip() {
        let result = ExtractionResult {
            title: "Spec".to_string(),
            outline: vec![OutlineEntry {
                level: HeadingLevel::H1,
                text: "1. Introduction".to_string(),
                page: 2,
            }],
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: ExtractionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
