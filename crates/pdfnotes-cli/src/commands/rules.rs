use pdfnotes_core::error::PdfNotesError;
use pdfnotes_core::rules::builtin;
use pdfnotes_core::rules::schema::HeadingRuleSet;
use std::path::{Path, PathBuf};

use crate::commands::build_matcher;

pub fn list() -> Result<(), PdfNotesError> {
    println!("Available heading rule sets:\n");
    for name in builtin::PRESETS {
        let rs = builtin::load_preset(name)?;
        let default_marker = if *name == builtin::DEFAULT_PRESET {
            " [default]"
        } else {
            ""
        };
        println!("  {:<10} {} (v{}){}", name, rs.name, rs.version, default_marker);
        if let Some(ref desc) = rs.description {
            println!("             {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn explain(preset: &str) -> Result<(), PdfNotesError> {
    let rs = builtin::load_preset(preset)?;

    println!("{} (version {})\n", rs.name, rs.version);
    if let Some(ref desc) = rs.description {
        println!("{}\n", desc);
    }
    print_rules(&rs);
    Ok(())
}

fn print_rules(rs: &HeadingRuleSet) {
    println!(
        "A line is a heading when it matches one of these {} rule(s) and is at most",
        rs.rules.len()
    );
    println!(
        "{} characters long (unless the rule sets its own limit):\n",
        rs.max_line_length
    );

    let max_name_len = rs.rules.iter().map(|r| r.name.len()).max().unwrap_or(10);

    for rule in &rs.rules {
        let limit = rule.max_line_length.unwrap_or(rs.max_line_length);
        println!(
            "  {:<width$}  {}  (max {} chars)",
            rule.name,
            rule.pattern,
            limit,
            width = max_name_len
        );
        if let Some(ref note) = rule.note {
            println!("  {:<width$}  {}", "", note, width = max_name_len);
        }
    }
    println!();
}

pub fn schema() -> Result<(), PdfNotesError> {
    print!(
        r#"JSON Heading Rule Schema
========================

A rule file defines which lines of extracted text start a new section.
When you run `pdfnotes extract --sections`, every line is trimmed and
checked against the rules; the first matching rule makes it a heading.

Top-level fields:
  name             (string, required)  Human-readable name of the rule set
  description      (string, optional)  What this rule set is for
  version          (string, required)  Version identifier (e.g., "1.0")
  max_line_length  (integer, optional) Longest line, in characters, that can
                                       be a heading. Default: 80
  rules            (array, required)   List of heading rules (see below)

Each rule in the "rules" array:
  name             (string, required)  Unique rule name, shown by
                                       `pdfnotes rules match`
  pattern          (string, required)  Regular expression matched against
                                       the trimmed line. Anchor it with ^
                                       to match from the line start.
  max_line_length  (integer, optional) Overrides the top-level limit
  note             (string, optional)  Example or explanation

Example:
{{
  "name": "Lecture notes",
  "description": "Headings used in the course handouts",
  "version": "1.0",
  "max_line_length": 60,
  "rules": [
    {{
      "name": "lecture",
      "pattern": "^Lecture \\d+",
      "note": "Lecture 7: Bayesian inference"
    }},
    {{
      "name": "numbered",
      "pattern": "^\\d+(\\.\\d+)+\\s+\\p{{L}}",
      "max_line_length": 80
    }}
  ]
}}

Note: backslashes must be escaped in JSON, so the regex \d is written "\\d".
Rule files can be combined with presets: --preset cjk --rules lectures.json
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), PdfNotesError> {
    let rs = pdfnotes_core::rules::load_ruleset(file)?;

    println!("Rule set '{}' (v{}) is valid.", rs.name, rs.version);
    println!("  Rules: {}", rs.rules.len());
    println!("  Max line length: {}", rs.max_line_length);

    // Potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    for rule in &rs.rules {
        if !rule.pattern.starts_with('^') {
            warnings.push(format!(
                "rule '{}' is not anchored with '^' and may match inside body lines",
                rule.name
            ));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}

pub fn match_line(
    line: &str,
    presets: &[String],
    rule_files: &[PathBuf],
) -> Result<(), PdfNotesError> {
    let matcher = build_matcher(presets, rule_files)?;
    match matcher.matching_rule(line) {
        Some(rule) => println!("heading (rule '{rule}')"),
        None => println!("body text"),
    }
    Ok(())
}
