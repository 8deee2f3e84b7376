use pdfnotes_core::model::{Extraction, SectionedExtraction};

pub fn format_pages(extraction: &Extraction) -> String {
    extraction
        .pages
        .iter()
        .map(|page| format!("## Page {}\n\n{}\n", page.page_number, page.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Detected headings become `##` headings. Text before the first heading is
/// emitted without one.
pub fn format_sections(sectioned: &SectionedExtraction) -> String {
    sectioned
        .sections
        .iter()
        .map(|section| match &section.heading {
            Some(heading) if section.body.is_empty() => format!("## {heading}\n"),
            Some(heading) => format!("## {heading}\n\n{}\n", section.body),
            None => format!("{}\n", section.body),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdfnotes_core::model::{PageText, Section};

    #[test]
    fn test_pages() {
        let extraction = Extraction {
            source: "book.pdf".into(),
            backend: "mock".into(),
            page_count: 2,
            range: None,
            pages: vec![
                PageText {
                    page_number: 7,
                    text: "seven".into(),
                },
                PageText {
                    page_number: 8,
                    text: "eight".into(),
                },
            ],
            warnings: vec![],
        };
        assert_eq!(
            format_pages(&extraction),
            "## Page 7\n\nseven\n\n## Page 8\n\neight\n"
        );
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
                    heading: Some("第十四章 抽样分布".into()),
                    page_number: 1,
                    body: "正文".into(),
                },
            ],
            warnings: vec![],
        };
        assert_eq!(
            format_sections(&sectioned),
            "preface\n\n## 第十四章 抽样分布\n\n正文\n"
        );
    }
}
