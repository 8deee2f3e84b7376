pub mod lopdf_backend;
pub mod pdftotext;

use crate::error::PdfNotesError;
use lopdf_backend::LopdfExtractor;
use pdftotext::PdftotextExtractor;
use std::fmt;
use std::path::Path;

/// An opened PDF. Dropping the value releases everything the backend holds.
pub trait PdfDocument {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Text of one page (1-indexed) in content-stream reading order.
    ///
    /// An error here is scoped to the page: callers record it and move on.
    fn page_text(&self, page_number: usize) -> Result<String, PdfNotesError>;
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Open the document at `path`.
    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>, PdfNotesError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Backend selection as exposed on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Backend {
    /// `pdftotext` when installed, `lopdf` otherwise.
    #[default]
    Auto,
    Lopdf,
    Pdftotext,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Auto => write!(f, "auto"),
            Backend::Lopdf => write!(f, "lopdf"),
            Backend::Pdftotext => write!(f, "pdftotext"),
        }
    }
}

impl Backend {
    pub fn from_str_loose(s: &str) -> Option<Backend> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Some(Backend::Auto),
            "lopdf" => Some(Backend::Lopdf),
            "pdftotext" | "poppler" => Some(Backend::Pdftotext),
            _ => None,
        }
    }

    /// Build the extractor for this selection. `layout` only affects
    /// `pdftotext`.
    pub fn extractor(self, layout: bool) -> Box<dyn PdfExtractor> {
        match self {
            Backend::Lopdf => Box::new(LopdfExtractor::new()),
            Backend::Pdftotext => Box::new(PdftotextExtractor::new().with_layout(layout)),
            Backend::Auto => {
                if PdftotextExtractor::is_available() {
                    Box::new(PdftotextExtractor::new().with_layout(layout))
                } else {
                    tracing::debug!("pdftotext not installed, using lopdf");
                    Box::new(LopdfExtractor::new())
                }
            }
        }
    }
}
