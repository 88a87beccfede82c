use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Healthcare domain used to group benefits and route classification.
///
/// `Unknown` is the sentinel produced when a model reply names no known
/// category. No benefit record ever belongs to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum BenefitCategory {
    Dental,
    #[serde(rename = "Mental Health")]
    MentalHealth,
    Vision,
    #[serde(rename = "OPD")]
    Opd,
    Unknown,
}

impl BenefitCategory {
    /// Categories a benefit can belong to, in classification priority order
    pub const KNOWN: [BenefitCategory; 4] = [
        BenefitCategory::Dental,
        BenefitCategory::MentalHealth,
        BenefitCategory::Vision,
        BenefitCategory::Opd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BenefitCategory::Dental => "Dental",
            BenefitCategory::MentalHealth => "Mental Health",
            BenefitCategory::Vision => "Vision",
            BenefitCategory::Opd => "OPD",
            BenefitCategory::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for BenefitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unrecognized benefit category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for BenefitCategory {
    type Err = ParseCategoryError;

    /// Exact, case-sensitive match against the display names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Dental" => Ok(BenefitCategory::Dental),
            "Mental Health" => Ok(BenefitCategory::MentalHealth),
            "Vision" => Ok(BenefitCategory::Vision),
            "OPD" => Ok(BenefitCategory::Opd),
            "Unknown" => Ok(BenefitCategory::Unknown),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}

/// A named healthcare coverage offering shown as a benefit card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BenefitRecord {
    pub id: String,
    pub title: String,
    pub category: BenefitCategory,
    /// Short coverage summary, e.g. "Up to $2,500/year"
    pub coverage: String,
    pub description: String,
    pub icon: String,
    /// Display color token used by the front end
    pub color: String,
    pub features: Vec<String>,
}
