//! Per-visitor discovery context
//!
//! Holds what the visitor has entered and chosen so far. The context is owned
//! by the caller and passed by `&mut` through each flow step.

use crate::model::{ActionPlan, BenefitCategory, BenefitRecord};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoverySession {
    user_input: String,
    category: Option<BenefitCategory>,
    selected_benefit: Option<BenefitRecord>,
    action_plan: Option<ActionPlan>,
}

impl DiscoverySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_input(&self) -> &str {
        &self.user_input
    }

    pub fn set_user_input(&mut self, input: impl Into<String>) {
        self.user_input = input.into();
    }

    pub fn category(&self) -> Option<BenefitCategory> {
        self.category
    }

    pub fn set_category(&mut self, category: Option<BenefitCategory>) {
        self.category = category;
    }

    pub fn selected_benefit(&self) -> Option<&BenefitRecord> {
        self.selected_benefit.as_ref()
    }

    pub fn set_selected_benefit(&mut self, benefit: Option<BenefitRecord>) {
        self.selected_benefit = benefit;
    }

    pub fn action_plan(&self) -> Option<&ActionPlan> {
        self.action_plan.as_ref()
    }

    pub fn set_action_plan(&mut self, plan: Option<ActionPlan>) {
        self.action_plan = plan;
    }

    /// Clear everything, leaving a fresh empty context
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_clears_all_fields() {
        let mut session = DiscoverySession::new();
        session.set_user_input("tooth pain");
        session.set_category(Some(BenefitCategory::Dental));
        session.set_action_plan(Some(ActionPlan::new([
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
        ])));

        session.reset();

        assert_eq!(session, DiscoverySession::new());
        assert!(session.user_input().is_empty());
        assert!(session.category().is_none());
        assert!(session.selected_benefit().is_none());
        assert!(session.action_plan().is_none());
    }
}
