use crate::error::PdfNotesError;
use crate::extraction::{PdfDocument, PdfExtractor};
use lopdf::Document;
use std::path::Path;

/// Pure-Rust extraction backend built on `lopdf`.
///
/// The file is read into memory and closed before parsing starts, so the
/// only thing an open document holds is the parsed object graph.
pub struct LopdfExtractor;

impl LopdfExtractor {
    pub fn new() -> Self {
        LopdfExtractor
    }
}

impl Default for LopdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for LopdfExtractor {
    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>, PdfNotesError> {
        let bytes = std::fs::read(path).map_err(|source| PdfNotesError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        let doc = LopdfDocument::from_bytes(&bytes).map_err(|reason| PdfNotesError::Format {
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(Box::new(doc))
    }

    fn backend_name(&self) -> &str {
        "lopdf"
    }
}

/// A parsed document with its page numbers resolved up front.
pub struct LopdfDocument {
    doc: Document,
    page_numbers: Vec<u32>,
}

impl LopdfDocument {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, String> {
        let doc = Document::load_mem(bytes).map_err(|e| e.to_string())?;
        let page_numbers = doc.get_pages().keys().copied().collect();
        Ok(LopdfDocument { doc, page_numbers })
    }
}

impl PdfDocument for LopdfDocument {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, page_number: usize) -> Result<String, PdfNotesError> {
        let number = page_number
            .checked_sub(1)
            .and_then(|i| self.page_numbers.get(i))
            .copied()
            .ok_or(PdfNotesError::Range {
                start: page_number,
                end: page_number,
                page_count: self.page_numbers.len(),
            })?;

        self.doc
            .extract_text(&[number])
            .map(|text| normalize_page_text(&text))
            .map_err(|e| PdfNotesError::Extraction {
                page_number,
                reason: e.to_string(),
            })
    }
}

/// lopdf ends every text object with a newline and leaves trailing blanks
/// from `TJ` arrays. Trim line ends so both backends produce the same shape.
fn normalize_page_text(text: &str) -> String {
    let lines: Vec<&str> = text.lines().map(|l| l.trim_end()).collect();
    let mut out = lines.join("\n");
    let trimmed_len = out.trim_end_matches('\n').len();
    out.truncate(trimmed_len);
    out
}
