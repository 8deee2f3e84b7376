use crate::error::PdfNotesError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive, 1-indexed page bounds that lie inside a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    pub start: usize,
    pub end: usize,
}

impl PageRange {
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    pub fn pages(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Page bounds as requested by the caller. Missing bounds default to the
/// first and last page of the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub start: Option<usize>,
    pub end: Option<usize>,
}

impl PageRequest {
    pub fn new(start: Option<usize>, end: Option<usize>) -> Self {
        PageRequest { start, end }
    }

    pub fn all() -> Self {
        PageRequest::default()
    }

    /// Clamp the request against a document with `page_count` pages.
    ///
    /// Partial overlap is clamped. A request that lies entirely outside the
    /// document, or has explicit bounds with `start > end`, is a range
    /// error. `Ok(None)` means nothing is left to extract, which only
    /// happens for a document without pages and no explicit bounds.
    pub fn resolve(&self, page_count: usize) -> Result<Option<PageRange>, PdfNotesError> {
        let range_error = || PdfNotesError::Range {
            start: self.start.unwrap_or(1),
            end: self.end.unwrap_or(page_count),
            page_count,
        };

        if let (Some(start), Some(end)) = (self.start, self.end) {
            if start > end {
                return Err(range_error());
            }
        }
        if self.end == Some(0) {
            return Err(range_error());
        }

        let start = self.start.unwrap_or(1).max(1);
        let end = self.end.unwrap_or(page_count).min(page_count);

        if start > page_count {
            if page_count == 0 && self.start.is_none() && self.end.is_none() {
                return Ok(None);
            }
            return Err(range_error());
        }

        Ok(Some(PageRange { start, end }))
    }
}

/// Text of a single page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    pub page_number: usize,
    pub text: String,
}

/// A page that produced no text. Extraction continues past it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWarning {
    pub page_number: usize,
    pub reason: String,
}

/// Result of extracting a page range from one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extraction {
    pub source: String,
    pub backend: String,
    pub page_count: usize,
    /// `None` when the resolved range is empty.
    pub range: Option<PageRange>,
    pub pages: Vec<PageText>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<PageWarning>,
}

impl Extraction {
    /// All page texts joined in page order.
    pub fn full_text(&self) -> String {
        self.pages
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A run of lines opened by a detected heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// `None` for text that precedes the first heading.
    pub heading: Option<String>,
    /// Page on which the section starts.
    pub page_number: usize,
    pub body: String,
}

/// Sections of an extraction, carrying the same document metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionedExtraction {
    pub source: String,
    pub backend: String,
    pub page_count: usize,
    pub range: Option<PageRange>,
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<PageWarning>,
}
