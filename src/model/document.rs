//! Page and document-level types.

use super::TextLine;
use serde::{Deserialize, Serialize};

/// A single page: its 1-based number and its text lines in reading order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Text lines on the page, top to bottom
    pub lines: Vec<TextLine>,
}

impl Page {
    /// Create a new empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            lines: Vec::new(),
        }
    }

    /// Add a line to the page.
    pub fn add_line(&mut self, line: TextLine) {
        self.lines.push(line);
    }

    /// Check if the page has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A parsed document: an ordered sequence of pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Pages in the document
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterate all lines in page order, then line order within a page.
    pub fn lines(&self) -> impl Iterator<Item = (&Page, &TextLine)> {
        self.pages
            .iter()
            .flat_map(|page| page.lines.iter().map(move |line| (page, line)))
    }
}
