use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::BenefitCategory;

/// Outcome of classifying a free-text health need
///
/// `confidence` is informational; nothing branches on its exact value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassificationResult {
    pub category: BenefitCategory,
    /// Between 0.0 and 1.0
    pub confidence: f32,
}

impl ClassificationResult {
    pub fn new(category: BenefitCategory, confidence: f32) -> Self {
        Self {
            category,
            confidence,
        }
    }
}
