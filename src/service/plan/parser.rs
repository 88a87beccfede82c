//! Extraction of numbered steps from freeform model output

use regex::Regex;
use std::sync::LazyLock;

/// Number of steps every action plan carries
pub const STEP_COUNT: usize = 3;

static NUMBERED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*(.+)$").expect("numbered line pattern is valid"));

/// Steps used when the model output does not contain three numbered lines
pub fn generic_steps() -> [String; STEP_COUNT] {
    [
        "Review your benefit documentation to understand coverage details.".to_string(),
        "Contact the healthcare provider or service center to schedule an appointment."
            .to_string(),
        "Present your benefits card and complete the claim process as directed.".to_string(),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSteps {
    pub steps: [String; STEP_COUNT],
    /// True when the generic steps replaced unusable output
    pub used_fallback: bool,
}

/// Parse exactly three steps out of `text`
///
/// Blank and unnumbered lines are skipped. Only the first three numbered
/// lines are kept. Fewer than three means the whole output is discarded in
/// favour of [`generic_steps`]; a partial plan is never returned.
pub fn parse_steps(text: &str) -> ParsedSteps {
    let found: Vec<String> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| NUMBERED_LINE.captures(line))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().trim().to_string()))
        .take(STEP_COUNT)
        .collect();

    match <[String; STEP_COUNT]>::try_from(found) {
        Ok(steps) => ParsedSteps {
            steps,
            used_fallback: false,
        },
        Err(partial) => {
            tracing::debug!(
                found = partial.len(),
                "Model output did not contain enough numbered steps, using generic steps"
            );
            ParsedSteps {
                steps: generic_steps(),
                used_fallback: true,
            }
        }
    }
}
