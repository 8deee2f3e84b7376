use crate::error::PdfNotesError;
use crate::rules::schema::HeadingRuleSet;
use crate::rules::validate_ruleset;
use regex::Regex;

/// Decides whether a line of extracted text is a heading.
///
/// Segmentation only talks to this trait, so detection rules can be swapped
/// without touching the extraction loop. Any `Fn(&str) -> bool` qualifies.
pub trait HeadingDetector {
    fn is_heading(&self, line: &str) -> bool;
}

impl<F> HeadingDetector for F
where
    F: Fn(&str) -> bool,
{
    fn is_heading(&self, line: &str) -> bool {
        self(line)
    }
}

#[derive(Debug, Clone)]
struct CompiledRule {
    name: String,
    regex: Regex,
    max_line_length: usize,
}

/// Heading detector compiled from one or more rule sets.
///
/// A line is a heading when, trimmed, it is non-empty, no longer than the
/// rule's length limit and matched by the rule's pattern. The first matching
/// rule wins.
#[derive(Debug, Clone)]
pub struct HeadingMatcher {
    rules: Vec<CompiledRule>,
}

impl HeadingMatcher {
    pub fn compile(ruleset: &HeadingRuleSet) -> Result<Self, PdfNotesError> {
        Self::from_rulesets(std::slice::from_ref(ruleset))
    }

    /// Merge several rule sets, keeping their order.
    pub fn from_rulesets(rulesets: &[HeadingRuleSet]) -> Result<Self, PdfNotesError> {
        let mut rules = Vec::new();
        for ruleset in rulesets {
            validate_ruleset(ruleset)?;
            for rule in &ruleset.rules {
                let regex = Regex::new(&rule.pattern).map_err(|e| {
                    PdfNotesError::RulesetInvalid(format!(
                        "rule '{}' has an invalid pattern: {}",
                        rule.name, e
                    ))
                })?;
                rules.push(CompiledRule {
                    name: rule.name.clone(),
                    regex,
                    max_line_length: rule.max_line_length.unwrap_or(ruleset.max_line_length),
                });
            }
        }
        Ok(HeadingMatcher { rules })
    }

    /// Name of the first rule that classifies `line` as a heading.
    pub fn matching_rule(&self, line: &str) -> Option<&str> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        let len = trimmed.chars().count();
        self.rules
            .iter()
            .find(|r| len <= r.max_line_length && r.regex.is_match(trimmed))
            .map(|r| r.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl HeadingDetector for HeadingMatcher {
    fn is_heading(&self, line: &str) -> bool {
        self.matching_rule(line).is_some()
    }
}
