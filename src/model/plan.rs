use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Step-by-step guide for availing a specific benefit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ActionPlan {
    /// Always exactly three steps
    pub steps: Vec<String>,
    /// Diagnostic note, set when the model reply could not be parsed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

impl ActionPlan {
    pub fn new(steps: [String; 3]) -> Self {
        Self {
            steps: steps.into(),
            additional_info: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.additional_info = Some(note.into());
        self
    }
}
