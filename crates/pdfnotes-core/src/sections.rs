use crate::model::{PageRange, PageText, Section};
use crate::rules::matcher::HeadingDetector;

/// Split page texts into sections at every detected heading.
///
/// Lines before the first heading become a section without a heading,
/// dropped if they are blank. Headings are stored trimmed; body lines are
/// kept as extracted, minus leading and trailing blank lines.
pub fn segment(pages: &[PageText], detector: &dyn HeadingDetector) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut heading: Option<String> = None;
    let mut page_number = pages.first().map(|p| p.page_number).unwrap_or(1);
    let mut body: Vec<&str> = Vec::new();

    for page in pages {
        for line in page.text.lines() {
            if detector.is_heading(line) {
                push_section(&mut sections, heading.take(), page_number, &body);
                heading = Some(line.trim().to_string());
                page_number = page.page_number;
                body.clear();
            } else {
                body.push(line);
            }
        }
    }
    push_section(&mut sections, heading, page_number, &body);

    sections
}

fn push_section(
    sections: &mut Vec<Section>,
    heading: Option<String>,
    page_number: usize,
    body: &[&str],
) {
    let first = body.iter().position(|l| !l.trim().is_empty());
    let last = body.iter().rposition(|l| !l.trim().is_empty());
    let body = match (first, last) {
        (Some(first), Some(last)) => body[first..=last].join("\n"),
        _ => String::new(),
    };
    if heading.is_none() && body.is_empty() {
        return;
    }
    sections.push(Section {
        heading,
        page_number,
        body,
    });
}

/// Find the pages spanned by the section whose heading contains `pattern`.
///
/// The section starts on the first page containing `pattern` and ends on
/// the page before the next page carrying a heading of another section.
/// A heading belongs to the section when `pattern` is followed by
/// whitespace, a `.` or nothing: "14.1.2" stays inside "14.1", "14.10"
/// does not. Without such a page it runs to the last page searched.
pub fn locate_section(
    pages: &[PageText],
    pattern: &str,
    detector: &dyn HeadingDetector,
) -> Option<PageRange> {
    let start_idx = pages.iter().position(|p| p.text.contains(pattern))?;
    let start = pages[start_idx].page_number;

    for page in &pages[start_idx + 1..] {
        let next_heading = page
            .text
            .lines()
            .filter(|l| detector.is_heading(l))
            .any(|l| !continues_section(l, pattern));
        if next_heading {
            return Some(PageRange {
                start,
                end: page.page_number - 1,
            });
        }
    }

    pages.last().map(|last| PageRange {
        start,
        end: last.page_number,
    })
}

fn continues_section(heading: &str, pattern: &str) -> bool {
    heading.trim().strip_prefix(pattern).is_some_and(|rest| {
        rest.is_empty() || rest.starts_with('.') || rest.starts_with(char::is_whitespace)
    })
}
