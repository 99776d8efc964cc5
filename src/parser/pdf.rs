//! lopdf-backed PDF parser producing the styled-line document model.
//!
//! This is the line source for the analysis pipeline: it walks each page's
//! content stream, tracks the text matrix to recover baselines and effective
//! font sizes, decodes shown text with the page font's encoding, and groups
//! the resulting spans into reading-order lines.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use lopdf::{content::Content, Document as LopdfDocument, Object, ObjectId};

use crate::detect::detect_format_from_path;
use crate::error::{Error, Result};
use crate::model::{Document, Page, StyleSpan, TextLine};

use super::options::{ErrorMode, ParseOptions};

/// PDF document parser.
pub struct PdfParser {
    doc: LopdfDocument,
    options: ParseOptions,
}

impl PdfParser {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a PDF file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        detect_format_from_path(path)?;
        let doc = LopdfDocument::load(path)?;
        Self::from_document(doc, options)
    }

    /// Parse a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a PDF from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data)?;
        Self::from_document(doc, options)
    }

    /// Parse a PDF from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a PDF from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    fn from_document(doc: LopdfDocument, options: ParseOptions) -> Result<Self> {
        if doc.is_encrypted() {
            return Err(Error::Encrypted);
        }
        Ok(Self { doc, options })
    }

    /// PDF version string of the loaded document.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }

    /// Parse the document into the styled-line model.
    pub fn parse(&self) -> Result<Document> {
        let mut document = Document::new();

        for (page_num, page_id) in self.doc.get_pages() {
            let mut page = Page::new(page_num);
            match self.extract_page_lines(page_id) {
                Ok(lines) => {
                    for line in lines {
                        if !line.is_empty() {
                            page.add_line(line);
                        }
                    }
                }
                Err(e) => {
                    if self.options.error_mode == ErrorMode::Strict {
                        return Err(e);
                    }
                    log::warn!("Skipping page {}: {}", page_num, e);
                }
            }
            document.add_page(page);
        }

        Ok(document)
    }

    /// Extract the styled lines of one page.
    fn extract_page_lines(&self, page_id: ObjectId) -> Result<Vec<TextLine>> {
        let fonts = self
            .doc
            .get_page_fonts(page_id)
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        // Resource name → BaseFont descriptor.
        let mut base_fonts: HashMap<Vec<u8>, String> = HashMap::new();
        for (name, font_dict) in &fonts {
            let base = font_dict
                .get(b"BaseFont")
                .ok()
                .and_then(|o| o.as_name().ok())
                .map(|n| String::from_utf8_lossy(n).to_string())
                .unwrap_or_else(|| "Unknown".to_string());
            base_fonts.insert(name.clone(), base);
        }

        let content = self.page_content(page_id)?;
        let spans = self.walk_content(&content, &fonts, &base_fonts)?;
        Ok(group_into_lines(spans))
    }

    /// Collect the raw (decompressed) content stream bytes for a page.
    fn page_content(&self, page_id: ObjectId) -> Result<Vec<u8>> {
        let page_dict = self
            .doc
            .get_dictionary(page_id)
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        let contents = match page_dict.get(b"Contents") {
            Ok(obj) => obj,
            // A page without a content stream is legal: it is simply blank.
            Err(_) => return Ok(Vec::new()),
        };

        match contents {
            Object::Reference(r) => {
                if let Ok(Object::Stream(s)) = self.doc.get_object(*r) {
                    return s
                        .decompressed_content()
                        .map_err(|e| Error::PdfParse(e.to_string()));
                }
                Err(Error::PdfParse("Invalid content stream".to_string()))
            }
            Object::Array(arr) => {
                let mut content = Vec::new();
                for obj in arr {
                    if let Object::Reference(r) = obj {
                        if let Ok(Object::Stream(s)) = self.doc.get_object(*r) {
                            if let Ok(data) = s.decompressed_content() {
                                content.extend_from_slice(&data);
                                content.push(b' ');
                            }
                        }
                    }
                }
                Ok(content)
            }
            _ => Err(Error::PdfParse("Invalid content stream".to_string())),
        }
    }

    /// Interpret the content stream, emitting one raw span per text-showing
    /// operation.
    fn walk_content(
        &self,
        content: &[u8],
        fonts: &std::collections::BTreeMap<Vec<u8>, &lopdf::Dictionary>,
        base_fonts: &HashMap<Vec<u8>, String>,
    ) -> Result<Vec<RawSpan>> {
        if content.is_empty() {
            return Ok(Vec::new());
        }

        let content = Content::decode(content).map_err(|e| Error::PdfParse(e.to_string()))?;

        let mut spans = Vec::new();
        let mut current_font_name: Vec<u8> = Vec::new();
        let mut current_font = String::new();
        let mut current_size: f32 = 12.0;
        let mut matrix = TextMatrix::default();
        let mut in_text_block = false;

        for op in content.operations {
            match op.operator.as_str() {
                "BT" => {
                    in_text_block = true;
                    matrix = TextMatrix::default();
                }
                "ET" => {
                    in_text_block = false;
                }
                "Tf" => {
                    if op.operands.len() >= 2 {
                        if let Object::Name(font_name) = &op.operands[0] {
                            current_font_name = font_name.clone();
                            current_font = base_fonts
                                .get(font_name.as_slice())
                                .cloned()
                                .unwrap_or_else(|| {
                                    String::from_utf8_lossy(font_name.as_slice()).to_string()
                                });
                        }
                        current_size = get_number(&op.operands[1]).unwrap_or(12.0);
                    }
                }
                "Td" | "TD" => {
                    if op.operands.len() >= 2 {
                        let tx = get_number(&op.operands[0]).unwrap_or(0.0);
                        let ty = get_number(&op.operands[1]).unwrap_or(0.0);
                        matrix.translate(tx, ty);
                    }
                }
                "Tm" => {
                    if op.operands.len() >= 6 {
                        matrix.set(
                            get_number(&op.operands[0]).unwrap_or(1.0),
                            get_number(&op.operands[1]).unwrap_or(0.0),
                            get_number(&op.operands[2]).unwrap_or(0.0),
                            get_number(&op.operands[3]).unwrap_or(1.0),
                            get_number(&op.operands[4]).unwrap_or(0.0),
                            get_number(&op.operands[5]).unwrap_or(0.0),
                        );
                    }
                }
                "T*" => {
                    matrix.next_line();
                }
                "Tj" | "TJ" => {
                    if !in_text_block {
                        continue;
                    }

                    let encoding = fonts
                        .get(&current_font_name)
                        .and_then(|f| f.get_font_encoding(&self.doc).ok());

                    let text = if op.operator == "TJ" {
                        if let Some(Object::Array(arr)) = op.operands.first() {
                            let mut combined = String::new();
                            for item in arr {
                                match item {
                                    Object::String(bytes, _) => {
                                        let decoded = if let Some(ref enc) = encoding {
                                            LopdfDocument::decode_text(enc, bytes)
                                                .unwrap_or_default()
                                        } else {
                                            decode_text_simple(bytes)
                                        };
                                        combined.push_str(&decoded);
                                    }
                                    // Kerning adjustments are in 1/1000 text
                                    // space units; large negative values are
                                    // word spaces.
                                    Object::Integer(n) => {
                                        if (-(*n as f32)) > WORD_SPACE_THRESHOLD {
                                            push_word_space(&mut combined);
                                        }
                                    }
                                    Object::Real(n) => {
                                        if -n > WORD_SPACE_THRESHOLD {
                                            push_word_space(&mut combined);
                                        }
                                    }
                                    _ => {}
                                }
                            }
                            combined
                        } else {
                            String::new()
                        }
                    } else if let Some(Object::String(bytes, _)) = op.operands.first() {
                        if let Some(ref enc) = encoding {
                            LopdfDocument::decode_text(enc, bytes).unwrap_or_default()
                        } else {
                            decode_text_simple(bytes)
                        }
                    } else {
                        String::new()
                    };

                    if !text.trim().is_empty() {
                        spans.push(RawSpan {
                            text,
                            x: matrix.x(),
                            y: matrix.y(),
                            size: current_size * matrix.scale(),
                            font: current_font.clone(),
                        });
                    }
                }
                "'" | "\"" => {
                    matrix.next_line();
                    if !in_text_block {
                        continue;
                    }

                    let text_idx = if op.operator == "\"" { 2 } else { 0 };
                    if let Some(Object::String(bytes, _)) = op.operands.get(text_idx) {
                        let encoding = fonts
                            .get(&current_font_name)
                            .and_then(|f| f.get_font_encoding(&self.doc).ok());

                        let text = if let Some(ref enc) = encoding {
                            LopdfDocument::decode_text(enc, bytes).unwrap_or_default()
                        } else {
                            decode_text_simple(bytes)
                        };

                        if !text.trim().is_empty() {
                            spans.push(RawSpan {
                                text,
                                x: matrix.x(),
                                y: matrix.y(),
                                size: current_size * matrix.scale(),
                                font: current_font.clone(),
                            });
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(spans)
    }
}

/// Kerning adjustment (in 1/1000 text space units) beyond which a word space
/// is assumed.
const WORD_SPACE_THRESHOLD: f32 = 200.0;

fn push_word_space(text: &mut String) {
    if !text.is_empty() && !text.ends_with(' ') && !text.ends_with('\u{00A0}') {
        text.push(' ');
    }
}

/// A decoded span before line grouping: text plus baseline position.
#[derive(Debug, Clone)]
struct RawSpan {
    text: String,
    x: f32,
    y: f32,
    size: f32,
    font: String,
}

/// Group spans into lines by baseline proximity.
///
/// Spans are ordered top-to-bottom (PDF Y grows upward), then left-to-right;
/// spans whose baselines differ by less than a size-proportional tolerance
/// land on the same line.
fn group_into_lines(mut spans: Vec<RawSpan>) -> Vec<TextLine> {
    if spans.is_empty() {
        return Vec::new();
    }

    spans.sort_by(|a, b| {
        let y_cmp = b.y.partial_cmp(&a.y).unwrap_or(std::cmp::Ordering::Equal);
        if y_cmp == std::cmp::Ordering::Equal {
            a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal)
        } else {
            y_cmp
        }
    });

    let mut lines = Vec::new();
    let mut current: Vec<RawSpan> = Vec::new();
    let mut current_y: Option<f32> = None;

    for span in spans {
        let tolerance = span.size * 0.3;
        match current_y {
            Some(y) if (span.y - y).abs() <= tolerance => current.push(span),
            _ => {
                if !current.is_empty() {
                    lines.push(to_text_line(std::mem::take(&mut current)));
                }
                current_y = Some(span.y);
                current.push(span);
            }
        }
    }
    if !current.is_empty() {
        lines.push(to_text_line(current));
    }

    lines
}

fn to_text_line(spans: Vec<RawSpan>) -> TextLine {
    TextLine::from_spans(
        spans
            .into_iter()
            .map(|s| StyleSpan::new(s.text, s.size, s.font))
            .collect(),
    )
}

/// Helper to extract a number from a PDF object.
fn get_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

/// Simple text decoding fallback when no encoding is available.
fn decode_text_simple(bytes: &[u8]) -> String {
    // UTF-16BE with BOM marker
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks(2)
            .filter_map(|c| {
                if c.len() == 2 {
                    Some(u16::from_be_bytes([c[0], c[1]]))
                } else {
                    None
                }
            })
            .collect();
        return String::from_utf16(&utf16).unwrap_or_default();
    }

    if let Ok(s) = String::from_utf8(bytes.to_vec()) {
        return s;
    }

    // Latin-1
    bytes.iter().map(|&b| b as char).collect()
}

/// Text matrix state across content-stream operations.
#[derive(Debug, Clone)]
struct TextMatrix {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32, // X translation
    f: f32, // Y translation
}

impl Default for TextMatrix {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }
}

impl TextMatrix {
    #[allow(clippy::many_single_char_names)]
    fn set(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) {
        self.a = a;
        self.b = b;
        self.c = c;
        self.d = d;
        self.e = e;
        self.f = f;
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.e += tx * self.a + ty * self.c;
        self.f += tx * self.b + ty * self.d;
    }

    fn next_line(&mut self) {
        // Default leading; a TL operator would refine this.
        self.f -= 12.0 * self.d;
    }

    fn x(&self) -> f32 {
        self.e
    }

    fn y(&self) -> f32 {
        self.f
    }

    fn scale(&self) -> f32 {
        (self.a * self.a + self.c * self.c).sqrt()
    }
}
