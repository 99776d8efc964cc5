//! # outliner
//!
//! Fast heuristic title and heading-outline extraction from PDF documents.
//!
//! The library infers a document's logical structure — a title plus up to
//! three heading levels — from typography alone: font size against the
//! document's body-text baseline, boldness, structural text prefixes, and
//! capitalization. No layout model, no machine learning, no language rules.
//!
//! ## Quick Start
//!
//! ```no_run
//! use outliner::{extract_file, render, JsonFormat};
//!
//! fn main() -> outliner::Result<()> {
//!     let result = extract_file("document.pdf")?;
//!     println!("Title: {}", result.title);
//!     println!("{}", render::to_json(&result, JsonFormat::Pretty)?);
//!     Ok(())
//! }
//! ```
//!
//! ## How it works
//!
//! 1. The parser walks each page's content stream and produces styled text
//!    lines (spans with font size and font name).
//! 2. A statistics pass finds the body font size: the whole-point size
//!    covering the most characters document-wide.
//! 3. Every line is scored against that baseline; lines scoring above a
//!    threshold become heading candidates.
//! 4. The assembler picks the title from page-1 candidates and maps the top
//!    three candidate font sizes to H1/H2/H3.
//!
//! The analysis core ([`analysis::extract_structure`]) is a pure function
//! over the parsed [`model::Document`] and can be used directly on styled
//! lines from any source.

pub mod analysis;
pub mod batch;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use analysis::{extract_structure, Candidate, FontStatistics, LineScorer};
pub use batch::{process_dir, BatchOptions, BatchReport};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_pdf, PdfFormat};
pub use error::{Error, Result};
pub use model::{
    Document, ExtractionResult, HeadingLevel, OutlineEntry, Page, StyleSpan, TextLine,
};
pub use parser::{ErrorMode, ParseOptions, PdfParser};
pub use render::{to_json, to_markdown, JsonFormat};

use std::io::Read;
use std::path::Path;

/// Extract the title and outline from a PDF file.
///
/// # Example
///
/// ```no_run
/// use outliner::extract_file;
///
/// let result = extract_file("document.pdf").unwrap();
/// println!("{} headings", result.outline.len());
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<ExtractionResult> {
    extract_file_with_options(path, ParseOptions::default())
}

/// Extract from a PDF file with custom parse options.
///
/// # Example
///
/// ```no_run
/// use outliner::{extract_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().lenient();
/// let result = extract_file_with_options("document.pdf", options).unwrap();
/// ```
pub fn extract_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<ExtractionResult> {
    let parser = PdfParser::open_with_options(path, options)?;
    let document = parser.parse()?;
    Ok(extract_structure(&document))
}

/// Extract from PDF bytes.
pub fn extract_bytes(data: &[u8]) -> Result<ExtractionResult> {
    extract_bytes_with_options(data, ParseOptions::default())
}

/// Extract from PDF bytes with custom parse options.
pub fn extract_bytes_with_options(
    data: &[u8],
    options: ParseOptions,
) -> Result<ExtractionResult> {
    let parser = PdfParser::from_bytes_with_options(data, options)?;
    let document = parser.parse()?;
    Ok(extract_structure(&document))
}

/// Extract from a reader.
pub fn extract_reader<R: Read>(reader: R) -> Result<ExtractionResult> {
    let parser = PdfParser::from_reader(reader)?;
    let document = parser.parse()?;
    Ok(extract_structure(&document))
}

/// Run the analysis over an already-parsed document.
///
/// This is the pure core: no I/O, no failure path. Useful when the styled
/// lines come from a source other than the built-in PDF parser.
pub fn extract_document(document: &Document) -> ExtractionResult {
    extract_structure(document)
}
