//! Keyword-based classification used when the model is unavailable

use crate::model::{BenefitCategory, ClassificationResult};

const DENTAL_KEYWORDS: &[&str] = &["tooth", "dental", "cavity", "gum"];
const MENTAL_HEALTH_KEYWORDS: &[&str] = &["stress", "anxiety", "mental", "therapy", "depres"];
const VISION_KEYWORDS: &[&str] = &["eye", "vision", "glasses", "see"];
const OPD_KEYWORDS: &[&str] = &["fever", "cold", "flu", "doctor", "sick"];

const KEYWORD_MATCH_CONFIDENCE: f32 = 0.9;
const OPD_KEYWORD_CONFIDENCE: f32 = 0.85;
const DEFAULT_CONFIDENCE: f32 = 0.5;

/// Keyword sets checked in priority order; the first hit wins
const RULES: &[(BenefitCategory, &[&str], f32)] = &[
    (BenefitCategory::Dental, DENTAL_KEYWORDS, KEYWORD_MATCH_CONFIDENCE),
    (
        BenefitCategory::MentalHealth,
        MENTAL_HEALTH_KEYWORDS,
        KEYWORD_MATCH_CONFIDENCE,
    ),
    (BenefitCategory::Vision, VISION_KEYWORDS, KEYWORD_MATCH_CONFIDENCE),
    (BenefitCategory::Opd, OPD_KEYWORDS, OPD_KEYWORD_CONFIDENCE),
];

/// Classify a health need by substring keywords
///
/// Never returns `Unknown`: text without any keyword defaults to general
/// outpatient care with low confidence.
pub fn classify_heuristically(text: &str) -> ClassificationResult {
    let input = text.to_lowercase();

    RULES
        .iter()
        .find(|(_, keywords, _)| keywords.iter().any(|k| input.contains(k)))
        .map(|(category, _, confidence)| ClassificationResult::new(*category, *confidence))
        .unwrap_or_else(|| ClassificationResult::new(BenefitCategory::Opd, DEFAULT_CONFIDENCE))
}
