use crate::error::PdfNotesError;
use crate::rules::schema::HeadingRuleSet;

const ACADEMIC_JSON: &str = include_str!("../../../../rules/academic.json");
const NUMBERED_JSON: &str = include_str!("../../../../rules/numbered.json");
const CHAPTER_JSON: &str = include_str!("../../../../rules/chapter.json");
const CJK_JSON: &str = include_str!("../../../../rules/cjk.json");

/// Available predefined heading rule sets.
pub const PRESETS: &[&str] = &["academic", "numbered", "chapter", "cjk"];

/// Preset used when neither presets nor rule files are given.
pub const DEFAULT_PRESET: &str = "academic";

/// Load a predefined rule set by name.
pub fn load_preset(name: &str) -> Result<HeadingRuleSet, PdfNotesError> {
    let json = match name {
        "academic" => ACADEMIC_JSON,
        "numbered" => NUMBERED_JSON,
        "chapter" => CHAPTER_JSON,
        "cjk" => CJK_JSON,
        _ => {
            return Err(PdfNotesError::RulesetInvalid(format!(
                "unknown preset '{}'. Available: {}",
                name,
                PRESETS.join(", ")
            )))
        }
    };
    let ruleset: HeadingRuleSet = serde_json::from_str(json)?;
    Ok(ruleset)
}
