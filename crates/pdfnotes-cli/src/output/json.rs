use pdfnotes_core::error::PdfNotesError;
use serde::Serialize;

/// Pretty-printed JSON. Non-ASCII text (CJK headings) is kept as is.
pub fn to_string<T: Serialize>(value: &T) -> Result<String, PdfNotesError> {
    Ok(serde_json::to_string_pretty(value)?)
}
