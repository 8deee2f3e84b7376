pub mod error;
pub mod extraction;
pub mod model;
pub mod rules;
pub mod sections;

use error::PdfNotesError;
use extraction::{PdfDocument, PdfExtractor};
use model::{Extraction, PageRange, PageRequest, PageText, PageWarning, SectionedExtraction};
use rules::matcher::HeadingDetector;
use std::path::Path;

/// Main API entry point: extract the text of a page range from a PDF.
///
/// The document is opened once and dropped before this returns, whichever
/// way it returns. Pages that yield no text are kept as empty strings and
/// reported in `warnings`.
pub fn extract(
    path: &Path,
    request: PageRequest,
    extractor: &dyn PdfExtractor,
) -> Result<Extraction, PdfNotesError> {
    let document = open_document(path, extractor)?;
    let page_count = document.page_count();
    let range = request.resolve(page_count)?;

    let (pages, warnings) = match range {
        Some(range) => {
            tracing::info!("Extracting pages {range} of {page_count}");
            read_pages(document.as_ref(), range)
        }
        None => {
            tracing::info!("Nothing to extract, document has no pages");
            (Vec::new(), Vec::new())
        }
    };

    Ok(Extraction {
        source: path.display().to_string(),
        backend: extractor.backend_name().to_string(),
        page_count,
        range,
        pages,
        warnings,
    })
}

/// Extract a page range and split it into sections at detected headings.
pub fn extract_sections(
    path: &Path,
    request: PageRequest,
    extractor: &dyn PdfExtractor,
    detector: &dyn HeadingDetector,
) -> Result<SectionedExtraction, PdfNotesError> {
    let extraction = extract(path, request, extractor)?;
    Ok(into_sections(extraction, detector))
}

/// Split an existing extraction into sections.
pub fn into_sections(extraction: Extraction, detector: &dyn HeadingDetector) -> SectionedExtraction {
    let sections = sections::segment(&extraction.pages, detector);
    tracing::debug!("Detected {} section(s)", sections.len());
    SectionedExtraction {
        source: extraction.source,
        backend: extraction.backend,
        page_count: extraction.page_count,
        range: extraction.range,
        sections,
        warnings: extraction.warnings,
    }
}

/// Locate the section whose heading contains `pattern` within the `search`
/// window and return only its pages.
pub fn extract_section(
    path: &Path,
    pattern: &str,
    search: PageRequest,
    extractor: &dyn PdfExtractor,
    detector: &dyn HeadingDetector,
) -> Result<Extraction, PdfNotesError> {
    tracing::info!("Searching for section '{pattern}'");
    let mut extraction = extract(path, search, extractor)?;

    let found = sections::locate_section(&extraction.pages, pattern, detector)
        .ok_or_else(|| PdfNotesError::SectionNotFound(pattern.to_string()))?;
    tracing::info!("Found section at pages {found}");

    extraction
        .pages
        .retain(|p| found.pages().contains(&p.page_number));
    extraction
        .warnings
        .retain(|w| found.pages().contains(&w.page_number));
    extraction.range = Some(found);
    Ok(extraction)
}

/// Check that `path` is a readable file, then open it with the backend.
fn open_document(
    path: &Path,
    extractor: &dyn PdfExtractor,
) -> Result<Box<dyn PdfDocument>, PdfNotesError> {
    let file_access = |source: std::io::Error| PdfNotesError::FileAccess {
        path: path.to_path_buf(),
        source,
    };
    let metadata = std::fs::metadata(path).map_err(file_access)?;
    if metadata.is_dir() {
        return Err(file_access(std::io::Error::other("is a directory")));
    }
    std::fs::File::open(path).map_err(file_access)?;

    let document = extractor.open(path)?;
    tracing::debug!(
        "Opened {} with {} ({} pages)",
        path.display(),
        extractor.backend_name(),
        document.page_count()
    );
    Ok(document)
}

/// Read every page of `range`. Per-page failures become empty text plus a
/// warning instead of aborting the batch.
fn read_pages(document: &dyn PdfDocument, range: PageRange) -> (Vec<PageText>, Vec<PageWarning>) {
    let mut pages = Vec::with_capacity(range.len());
    let mut warnings = Vec::new();

    for page_number in range.pages() {
        let text = match document.page_text(page_number) {
            Ok(text) if text.trim().is_empty() => {
                warnings.push(PageWarning {
                    page_number,
                    reason: "no extractable text (image-only page?)".into(),
                });
                String::new()
            }
            Ok(text) => text,
            Err(e) => {
                warnings.push(PageWarning {
                    page_number,
                    reason: e.to_string(),
                });
                String::new()
            }
        };
        pages.push(PageText { page_number, text });
    }

    for w in &warnings {
        tracing::warn!("page {}: {}", w.page_number, w.reason);
    }

    (pages, warnings)
}
