use pdfnotes_core::error::PdfNotesError;
use pdfnotes_core::model::PageRequest;

use crate::commands::build_matcher;
use crate::output;
use crate::{ExtractArgs, OutputFormat};

pub fn run(args: ExtractArgs) -> Result<(), PdfNotesError> {
    let extractor = args.backend.extractor(args.layout);
    tracing::info!("Using backend: {}", extractor.backend_name());

    let needs_matcher = args.sections || args.section.is_some();
    let matcher = if needs_matcher {
        Some(build_matcher(&args.preset, &args.rules)?)
    } else {
        None
    };

    let extraction = match (&args.section, &matcher) {
        (Some(pattern), Some(matcher)) => pdfnotes_core::extract_section(
            &args.pdf_file,
            pattern,
            PageRequest::new(args.search_start, args.search_end),
            extractor.as_ref(),
            matcher,
        )?,
        _ => pdfnotes_core::extract(
            &args.pdf_file,
            PageRequest::new(args.start, args.end),
            extractor.as_ref(),
        )?,
    };

    let rendered = match (args.sections, &matcher) {
        (true, Some(matcher)) => {
            let sectioned = pdfnotes_core::into_sections(extraction, matcher);
            match args.format {
                OutputFormat::Text => output::text::format_sections(&sectioned),
                OutputFormat::Markdown => output::markdown::format_sections(&sectioned),
                OutputFormat::Json => output::json::to_string(&sectioned)?,
            }
        }
        _ => match args.format {
            OutputFormat::Text => output::text::format_pages(&extraction, !args.no_page_numbers),
            OutputFormat::Markdown => output::markdown::format_pages(&extraction),
            OutputFormat::Json => output::json::to_string(&extraction)?,
        },
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, format!("{rendered}\n"))?;
            eprintln!("Output written to {}", path.display());
        }
        None => {
            println!("{rendered}");
        }
    }

    Ok(())
}
