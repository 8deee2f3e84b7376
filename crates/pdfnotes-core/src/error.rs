use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PdfNotesError {
    #[error("file access error: cannot read {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("format error: {path} is not a readable PDF: {reason}")]
    Format { path: PathBuf, reason: String },

    #[error("range error: pages {start}-{end} are outside the document ({page_count} pages)")]
    Range {
        start: usize,
        end: usize,
        page_count: usize,
    },

    #[error("text extraction failed on page {page_number}: {reason}")]
    Extraction { page_number: usize, reason: String },

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("{backend} failed with exit code {code}: {stderr}")]
    BackendFailed {
        backend: String,
        code: i32,
        stderr: String,
    },

    #[error("section '{0}' not found in the searched pages")]
    SectionNotFound(String),

    #[error("failed to load heading rules from {path}: {reason}")]
    RulesetLoad { path: PathBuf, reason: String },

    #[error("invalid heading rules: {0}")]
    RulesetInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
