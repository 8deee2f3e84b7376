use pdfnotes_core::model::{Extraction, SectionedExtraction};

const BANNER_WIDTH: usize = 60;

/// Plain text, one banner per page unless `page_numbers` is false, in which
/// case the page texts are simply joined.
pub fn format_pages(extraction: &Extraction, page_numbers: bool) -> String {
    if !page_numbers {
        return extraction.full_text();
    }

    let banner = "=".repeat(BANNER_WIDTH);
    extraction
        .pages
        .iter()
        .map(|page| {
            format!(
                "{banner}\nPage {}\n{banner}\n\n{}\n",
                page.page_number, page.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Heading line followed by its body; sections separated by a blank line.
pub fn format_sections(sectioned: &SectionedExtraction) -> String {
    sectioned
        .sections
        .iter()
        .map(|section| match (&section.heading, section.body.is_empty()) {
            (Some(heading), true) => heading.clone(),
            (Some(heading), false) => format!("{heading}\n{}", section.body),
            (None, _) => section.body.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdfnotes_core::model::{PageText, Section};

    fn extraction(texts: &[&str]) -> Extraction {
        Extraction {
            source: "book.pdf".into(),
            backend: "mock".into(),
            page_count: texts.len(),
            range: None,
            pages: texts
                .iter()
                .enumerate()
                .map(|(i, t)| PageText {
                    page_number: i + 1,
                    text: t.to_string(),
                })
                .collect(),
            warnings: vec![],
        }
    }

    #[test]
    fn test_pages_with_banners() {
        let out = format_pages(&extraction(&["alpha", "beta"]), true);
        let banner = "=".repeat(60);
        assert!(out.starts_with(&format!("{banner}\nPage 1\n{banner}\n\nalpha\n")));
        assert!(out.contains("Page 2"));
        assert!(out.find("alpha").unwrap() < out.find("beta").unwrap());
    }

    #[test]
    fn test_pages_without_banners() {
        let out = format_pages(&extraction(&["alpha", "", "gamma"]), false);
        assert_eq!(out, "alpha\n\ngamma");
    }

    #[test]
    fn test_sections() {
        let sectioned = SectionedExtraction {
            source: "book.pdf".into(),
            backend: "mock".into(),
            page_count: 1,
            range: None,
            sections: vec![
                Section {
                    heading: None,
                    page_number: 1,
                    body: "preface".into(),
                },
                Section {
                    heading: Some("1.1 Intro".into()),
                    page_number: 1,
                    body: "body".into(),
                },
                Section {
                    heading: Some("1.2 Empty".into()),
                    page_number: 1,
                    body: String::new(),
                },
            ],
            warnings: vec![],
        };
        assert_eq!(
            format_sections(&sectioned),
            "preface\n\n1.1 Intro\nbody\n\n1.2 Empty"
        );
    }
}
