//! PDF fixtures built with lopdf, written into temporary directories.

#![allow(dead_code)]

mod pdf;

pub use pdf::pdf_bytes;

use std::path::{Path, PathBuf};

pub fn write_pdf(dir: &Path, name: &str, pages: &[Vec<String>]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, pdf_bytes::<Vec<String>, String>(pages)).unwrap();
    path
}

/// A 20-page chapter: page `n` opens section "n.1 Topic n" and carries one
/// body line.
pub fn textbook(dir: &Path) -> PathBuf {
    let pages: Vec<Vec<String>> = (1..=20)
        .map(|n| {
            vec![
                format!("{n}.1 Topic {n}"),
                format!("Body text of page {n}"),
            ]
        })
        .collect();
    write_pdf(dir, "textbook.pdf", &pages)
}

/// Three pages, the middle one without a text layer.
pub fn with_scanned_page(dir: &Path) -> PathBuf {
    let pages = vec![
        vec!["First page".to_string()],
        vec![],
        vec!["Third page".to_string()],
    ];
    write_pdf(dir, "scanned.pdf", &pages)
}
