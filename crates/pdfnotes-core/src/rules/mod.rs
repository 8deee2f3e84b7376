pub mod builtin;
pub mod matcher;
pub mod schema;

use crate::error::PdfNotesError;
use regex::Regex;
use schema::HeadingRuleSet;
use std::collections::HashSet;
use std::path::Path;

/// Load a heading rule set from a JSON file.
pub fn load_ruleset(path: &Path) -> Result<HeadingRuleSet, PdfNotesError> {
    let content = std::fs::read_to_string(path).map_err(|e| PdfNotesError::RulesetLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_ruleset(&content, path)
}

/// Parse a rule set from a JSON string.
pub fn parse_ruleset(json: &str, source: &Path) -> Result<HeadingRuleSet, PdfNotesError> {
    let ruleset: HeadingRuleSet =
        serde_json::from_str(json).map_err(|e| PdfNotesError::RulesetLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_ruleset(&ruleset)?;
    Ok(ruleset)
}

/// Parse a rule set from a JSON string (no file path context).
pub fn parse_ruleset_str(json: &str) -> Result<HeadingRuleSet, PdfNotesError> {
    let ruleset: HeadingRuleSet = serde_json::from_str(json).map_err(PdfNotesError::Json)?;
    validate_ruleset(&ruleset)?;
    Ok(ruleset)
}

/// Validate that a rule set is well-formed and every pattern compiles.
pub fn validate_ruleset(ruleset: &HeadingRuleSet) -> Result<(), PdfNotesError> {
    if ruleset.name.trim().is_empty() {
        return Err(PdfNotesError::RulesetInvalid(
            "name must not be empty".into(),
        ));
    }

    if ruleset.max_line_length == 0 {
        return Err(PdfNotesError::RulesetInvalid(
            "max_line_length must be greater than zero".into(),
        ));
    }

    if ruleset.rules.is_empty() {
        return Err(PdfNotesError::RulesetInvalid("rules must not be empty".into()));
    }

    let mut seen = HashSet::new();
    for rule in &ruleset.rules {
        if rule.name.trim().is_empty() {
            return Err(PdfNotesError::RulesetInvalid(
                "rule name must not be empty".into(),
            ));
        }

        if !seen.insert(rule.name.as_str()) {
            return Err(PdfNotesError::RulesetInvalid(format!(
                "duplicate rule name '{}'",
                rule.name
            )));
        }

        if rule.pattern.is_empty() {
            return Err(PdfNotesError::RulesetInvalid(format!(
                "rule '{}' has an empty pattern",
                rule.name
            )));
        }

        if let Err(e) = Regex::new(&rule.pattern) {
            return Err(PdfNotesError::RulesetInvalid(format!(
                "rule '{}' has an invalid pattern: {}",
                rule.name, e
            )));
        }

        if rule.max_line_length == Some(0) {
            return Err(PdfNotesError::RulesetInvalid(format!(
                "rule '{}' has max_line_length 0",
                rule.name
            )));
        }
    }

    Ok(())
}
