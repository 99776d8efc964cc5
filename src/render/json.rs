//! JSON rendering of extraction results.

use crate::error::{Error, Result};
use crate::model::ExtractionResult;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize an extraction result to JSON.
pub fn to_json(result: &ExtractionResult, format: JsonFormat) -> Result<String> {
    let rendered = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(result),
        JsonFormat::Compact => serde_json::to_string(result),
    };

    rendered.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HeadingLevel, OutlineEntry};

    fn sample() -> ExtractionResult {
        ExtractionResult {
            title: "Annual Report".to_string(),
            outline: vec![OutlineEntry {
                level: HeadingLevel::H1,
                text: "1. Overview".to_string(),
                page: 2,
            }],
        }
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\": \"Annual Report\""));
        assert!(json.contains("\"level\": \"H1\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"page\":2"));
    }

    #[test]
    fn test_untitled_shape() {
        let json = to_json(&ExtractionResult::untitled(), JsonFormat::Compact).unwrap();
        assert_eq!(json, r#"{"title":"Untitled Document","outline":[]}"#);
    }
}
