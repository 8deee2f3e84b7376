use crate::error::PdfNotesError;
use crate::extraction::{PdfDocument, PdfExtractor};
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

const PROGRAM: &str = "pdftotext";

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Reading order by default; `with_layout(true)` passes `-layout` to keep the
/// column alignment of tables.
pub struct PdftotextExtractor {
    program: OsString,
    layout: bool,
}

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor {
            program: PROGRAM.into(),
            layout: false,
        }
    }

    pub fn with_layout(mut self, layout: bool) -> Self {
        self.layout = layout;
        self
    }

    /// Run this executable instead of `pdftotext` from `PATH`.
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new(PROGRAM)
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>, PdfNotesError> {
        let mut cmd = Command::new(&self.program);
        if self.layout {
            cmd.arg("-layout");
        }
        let output = cmd
            .arg("-enc")
            .arg("UTF-8")
            .arg(path)
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    PdfNotesError::PdftotextNotFound
                } else {
                    PdfNotesError::BackendFailed {
                        backend: PROGRAM.into(),
                        code: -1,
                        stderr: e.to_string(),
                    }
                }
            })?;

        if !output.status.success() {
            return Err(map_failure(output.status.code(), &output.stderr, path));
        }

        let text = String::from_utf8_lossy(&output.stdout);
        Ok(Box::new(PdftotextDocument {
            pages: split_pages(&text),
        }))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Page texts produced by a single pdftotext run. The child process has
/// exited by the time this exists.
struct PdftotextDocument {
    pages: Vec<String>,
}

impl PdfDocument for PdftotextDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, page_number: usize) -> Result<String, PdfNotesError> {
        page_number
            .checked_sub(1)
            .and_then(|i| self.pages.get(i))
            .cloned()
            .ok_or(PdfNotesError::Range {
                start: page_number,
                end: page_number,
                page_count: self.pages.len(),
            })
    }
}

/// Translate a non-zero pdftotext exit into an error. `code` is `None` when
/// the process was killed by a signal.
fn map_failure(code: Option<i32>, stderr: &[u8], path: &Path) -> PdfNotesError {
    let stderr = String::from_utf8_lossy(stderr).trim().to_string();
    match code {
        // poppler's "error opening a PDF file"
        Some(1) => PdfNotesError::Format {
            path: path.to_path_buf(),
            reason: stderr,
        },
        code => PdfNotesError::BackendFailed {
            backend: PROGRAM.into(),
            code: code.unwrap_or(-1),
            stderr,
        },
    }
}

/// pdftotext terminates every page with a form feed (\x0c), including the
/// last one, so the final split piece is not a page.
fn split_pages(text: &str) -> Vec<String> {
    let mut pieces: Vec<&str> = text.split('\x0c').collect();
    if pieces.last().is_some_and(|p| p.trim().is_empty()) {
        pieces.pop();
    }
    pieces
        .into_iter()
        .map(|page| {
            page.lines()
                .map(|l| l.trim_end())
                .collect::<Vec<_>>()
                .join("\n")
                .trim_end_matches('\n')
                .to_string()
        })
        .collect()
}
