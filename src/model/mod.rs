//! Document model types for styled-text representation.
//!
//! This module defines the intermediate representation that bridges PDF
//! parsing and outline analysis: a document is an ordered list of pages, a
//! page an ordered list of text lines, and a line an ordered list of styled
//! spans. The model carries no geometry beyond reading order; the analysis
//! works from typography alone.

mod document;
mod outline;
mod span;

pub use document::{Document, Page};
pub use outline::{ExtractionResult, HeadingLevel, OutlineEntry, DEFAULT_TITLE};
pub use span::{StyleSpan, TextLine};
