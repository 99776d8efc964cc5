//! PDF format detection and validation.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};

/// PDF magic bytes at the start of every valid file.
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Header version string length, e.g. "1.7".
const VERSION_LEN: usize = 3;

/// PDF format information read from the file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfFormat {
    /// PDF version (e.g., "1.7", "2.0")
    pub version: String,
}

impl std::fmt::Display for PdfFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PDF {}", self.version)
    }
}

/// Detect PDF format from a file path.
///
/// Reads only the first few header bytes; returns
/// [`Error::UnknownFormat`] when the file is not a PDF.
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<PdfFormat> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 16];
    let n = reader.read(&mut header)?;
    detect_format_from_bytes(&header[..n])
}

/// Detect PDF format from bytes.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<PdfFormat> {
    let rest = data.strip_prefix(PDF_MAGIC).ok_or(Error::UnknownFormat)?;
    if rest.len() < VERSION_LEN {
        return Err(Error::UnknownFormat);
    }

    let version = String::from_utf8_lossy(&rest[..VERSION_LEN]).to_string();
    let bytes = version.as_bytes();
    let well_formed =
        bytes[0].is_ascii_digit() && bytes[1] == b'.' && bytes[2].is_ascii_digit();
    if !well_formed {
        return Err(Error::UnsupportedVersion(version));
    }

    Ok(PdfFormat { version })
}

/// Check if a file is a valid PDF.
pub fn is_pdf<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes start with a valid PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
