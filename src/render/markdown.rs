//! Markdown rendering of extraction results.

use crate::model::{ExtractionResult, HeadingLevel};

/// Render the title and outline as a Markdown document.
///
/// The title becomes a level-1 heading; H1/H2/H3 entries map to `##`/`###`/
/// `####` with their page number annotated.
pub fn to_markdown(result: &ExtractionResult) -> String {
    let mut out = String::new();
    out.push_str("# ");
    out.push_str(&result.title);
    out.push('\n');

    for entry in &result.outline {
        out.push('\n');
        out.push_str(marker(entry.level));
        out.push(' ');
        out.push_str(&entry.text);
        out.push_str(&format!(" (p. {})\n", entry.page));
    }

    out
}

fn marker(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "##",
        HeadingLevel::H2 => "###",
        HeadingLevel::H3 => "####",
    }
}
