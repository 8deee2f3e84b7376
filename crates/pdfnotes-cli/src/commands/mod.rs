pub mod extract;
pub mod rules;

use pdfnotes_core::error::PdfNotesError;
use pdfnotes_core::rules::builtin;
use pdfnotes_core::rules::matcher::HeadingMatcher;
use pdfnotes_core::rules::schema::HeadingRuleSet;
use std::path::PathBuf;

/// Compile the heading detector from presets and rule files, falling back to
/// the default preset when neither is given.
pub fn build_matcher(
    presets: &[String],
    rule_files: &[PathBuf],
) -> Result<HeadingMatcher, PdfNotesError> {
    let effective_presets: Vec<&str> = if presets.is_empty() && rule_files.is_empty() {
        vec![builtin::DEFAULT_PRESET]
    } else {
        presets.iter().map(String::as_str).collect()
    };

    let mut rulesets: Vec<HeadingRuleSet> = Vec::new();
    for preset in effective_presets {
        rulesets.push(builtin::load_preset(preset)?);
    }
    for path in rule_files {
        rulesets.push(pdfnotes_core::rules::load_ruleset(path)?);
    }

    tracing::debug!(
        "Heading rules: {}",
        rulesets
            .iter()
            .map(|rs| rs.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    HeadingMatcher::from_rulesets(&rulesets)
}
