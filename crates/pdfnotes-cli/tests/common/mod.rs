#![allow(dead_code)]

#[path = "../../../pdfnotes-core/tests/common/pdf.rs"]
mod pdf;

use assert_cmd::Command;
use std::path::{Path, PathBuf};

pub fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("pdfnotes").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Create a PDF where each page shows the given lines. A page with no lines
/// has no text layer.
pub fn pdf_with_pages(pages: &[&[&str]]) -> Vec<u8> {
    pdf::pdf_bytes::<&[&str], &str>(pages)
}

/// 20 pages; page `n` reads "n.1 Topic n" / "Body of page n".
pub fn textbook(dir: &Path) -> PathBuf {
    let lines: Vec<(String, String)> = (1..=20)
        .map(|n| (format!("{n}.1 Topic {n}"), format!("Body of page {n}")))
        .collect();
    let pages: Vec<[&str; 2]> = lines
        .iter()
        .map(|(h, b)| [h.as_str(), b.as_str()])
        .collect();
    let page_refs: Vec<&[&str]> = pages.iter().map(|p| &p[..]).collect();

    let path = dir.join("textbook.pdf");
    std::fs::write(&path, pdf_with_pages(&page_refs)).unwrap();
    path
}
