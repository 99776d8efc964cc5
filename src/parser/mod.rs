//! PDF parsing: the line source feeding the analysis pipeline.

mod options;
mod pdf;

pub use options::{ErrorMode, ParseOptions};
pub use pdf::PdfParser;
