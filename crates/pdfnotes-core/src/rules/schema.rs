use serde::{Deserialize, Serialize};

/// Line length above which a line is never treated as a heading, unless the
/// rule set or rule says otherwise.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 80;

fn default_max_line_length() -> usize {
    DEFAULT_MAX_LINE_LENGTH
}

/// A set of heading patterns used to split extracted text into sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadingRuleSet {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Longest line (in characters, after trimming) that can be a heading.
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,
    pub rules: Vec<HeadingRuleDef>,
}

/// A single heading pattern within a rule set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadingRuleDef {
    pub name: String,
    /// Regular expression matched against the trimmed line.
    pub pattern: String,
    /// Overrides the rule set's `max_line_length` for this rule.
    #[serde(default)]
    pub max_line_length: Option<usize>,
    #[serde(default)]
    pub note: Option<String>,
}
