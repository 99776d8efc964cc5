//! Batch extraction over a directory of PDF files.
//!
//! One failing document never aborts the run: each file is processed in
//! isolation and failures are reported per file. Documents are independent,
//! so the batch runs them in parallel by default.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::analysis::extract_structure;
use crate::error::Result;
use crate::parser::{ParseOptions, PdfParser};
use crate::render::{to_json, JsonFormat};

/// Options for a batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Parser options applied to every document
    pub parse: ParseOptions,

    /// JSON format for the output files
    pub format: JsonFormat,

    /// Process documents in parallel
    pub parallel: bool,
}

impl BatchOptions {
    /// Create new batch options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse documents leniently (skip unreadable pages).
    pub fn lenient(mut self) -> Self {
        self.parse = self.parse.lenient();
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set the JSON output format.
    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.format = format;
        self
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            parse: ParseOptions::default(),
            format: JsonFormat::Pretty,
            parallel: true,
        }
    }
}

/// Summary of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Input files that produced an output JSON
    pub succeeded: Vec<PathBuf>,

    /// Input files that failed, with the failure message
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchReport {
    /// Total number of files attempted.
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    /// Whether every file succeeded.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Extract every `.pdf` file in `input_dir`, writing `<stem>.json` per input
/// into `output_dir` (created if missing).
pub fn process_dir(input_dir: &Path, output_dir: &Path, options: &BatchOptions) -> Result<BatchReport> {
    let files = scan_pdfs(input_dir)?;
    fs::create_dir_all(output_dir)?;

    let outcomes: Vec<(PathBuf, std::result::Result<(), String>)> = if options.parallel {
        files
            .into_par_iter()
            .map(|f| {
                let outcome = process_one(&f, output_dir, options).map_err(|e| e.to_string());
                (f, outcome)
            })
            .collect()
    } else {
        files
            .into_iter()
            .map(|f| {
                let outcome = process_one(&f, output_dir, options).map_err(|e| e.to_string());
                (f, outcome)
            })
            .collect()
    };

    let mut report = BatchReport::default();
    for (file, outcome) in outcomes {
        match outcome {
            Ok(()) => report.succeeded.push(file),
            Err(message) => {
                log::error!("Failed to process {}: {}", file.display(), message);
                report.failed.push((file, message));
            }
        }
    }

    Ok(report)
}

/// Run one document end to end and write its JSON next to the others.
fn process_one(input: &Path, output_dir: &Path, options: &BatchOptions) -> Result<()> {
    let parser = PdfParser::open_with_options(input, options.parse.clone())?;
    let document = parser.parse()?;
    let result = extract_structure(&document);
    let json = to_json(&result, options.format)?;

    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let out_path = output_dir.join(format!("{}.json", stem));
    fs::write(&out_path, json)?;

    log::info!("Processed {}", input.display());
    Ok(())
}

/// Collect `.pdf` files (case-insensitive extension) in a stable order.
fn scan_pdfs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
        })
        .collect();
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_options_builder() {
        let options = BatchOptions::new()
            .lenient()
            .sequential()
            .with_format(JsonFormat::Compact);
        assert!(!options.parallel);
        assert_eq!(options.format, JsonFormat::Compact);
        assert_eq!(
            options.parse.error_mode,
            crate::parser::ErrorMode::Lenient
        );
    }

    #[test]
    fn test_report_counts() {
        let mut report = BatchReport::default();
        assert!(report.is_clean());
        report.succeeded.push(PathBuf::from("a.pdf"));
        report.failed.push((PathBuf::from("b.pdf"), "bad".to_string()));
        assert_eq!(report.total(), 2);
        assert!(!report.is_clean());
    }
}
