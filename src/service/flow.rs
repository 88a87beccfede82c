//! Guided discovery flow
//!
//! Drives a [`DiscoverySession`] through input, classification, benefit
//! selection and plan generation.

use std::sync::Arc;

use crate::model::{
    ActionPlan, BenefitCategory, BenefitRecord, ClassificationResult, DiscoverySession, FlowConfig,
};
use crate::service::catalog::BenefitCatalog;
use crate::service::classification::ClassificationService;
use crate::service::plan::PlanGenerationService;

/// Maximum number of benefit cards offered after classification
pub const MAX_BENEFITS_SHOWN: usize = 4;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum FlowError {
    #[error("Health need description is empty")]
    EmptyInput,

    #[error("No category has been determined yet")]
    NoCategory,

    #[error("Benefit not found: {0}")]
    UnknownBenefit(String),

    #[error("No benefit has been selected")]
    NoBenefitSelected,

    #[error("Benefit {id} is not offered for category {category}")]
    BenefitNotOffered {
        id: String,
        category: BenefitCategory,
    },
}

/// Result of submitting a health need
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Classified {
        classification: ClassificationResult,
        benefits: Vec<BenefitRecord>,
    },
    /// No category arrived in time; the visitor goes back to input
    TimedOut,
}

pub struct DiscoveryFlow {
    classification_service: Arc<ClassificationService>,
    plan_service: Arc<PlanGenerationService>,
    catalog: Arc<BenefitCatalog>,
    config: FlowConfig,
}

impl DiscoveryFlow {
    pub fn new(
        classification_service: Arc<ClassificationService>,
        plan_service: Arc<PlanGenerationService>,
        catalog: Arc<BenefitCatalog>,
        config: FlowConfig,
    ) -> Self {
        Self {
            classification_service,
            plan_service,
            catalog,
            config,
        }
    }

    /// Classify the visitor's health need and offer matching benefits
    ///
    /// Classification and the minimum display delay run together and both
    /// must finish. The redirect timer races the pair and is dropped as soon
    /// as the classification arrives.
    pub async fn submit_need(
        &self,
        session: &mut DiscoverySession,
        text: &str,
    ) -> Result<SubmitOutcome, FlowError> {
        if text.trim().is_empty() {
            return Err(FlowError::EmptyInput);
        }

        session.set_user_input(text);
        session.set_category(None);

        let paced = async {
            let (classification, ()) = tokio::join!(
                self.classification_service.classify(text),
                tokio::time::sleep(self.config.min_display)
            );
            classification
        };

        let classification = tokio::select! {
            classification = paced => classification,
            () = tokio::time::sleep(self.config.redirect_timeout) => {
                tracing::warn!(
                    timeout_ms = self.config.redirect_timeout.as_millis(),
                    "No category determined before redirect timeout"
                );
                return Ok(SubmitOutcome::TimedOut);
            }
        };

        session.set_category(Some(classification.category));

        let benefits = self.offered_benefits(classification.category);

        tracing::debug!(
            category = %classification.category,
            confidence = classification.confidence,
            benefits = benefits.len(),
            "Health need classified"
        );

        Ok(SubmitOutcome::Classified {
            classification,
            benefits,
        })
    }

    /// Benefit cards shown for a category
    pub fn offered_benefits(&self, category: BenefitCategory) -> Vec<BenefitRecord> {
        let mut benefits = self.catalog.by_category(category);
        benefits.truncate(MAX_BENEFITS_SHOWN);
        benefits
    }

    /// Select one of the offered benefits and generate its action plan
    pub async fn select_benefit(
        &self,
        session: &mut DiscoverySession,
        benefit_id: &str,
    ) -> Result<ActionPlan, FlowError> {
        let category = session.category().ok_or(FlowError::NoCategory)?;

        let benefit = self
            .catalog
            .by_id(benefit_id)
            .cloned()
            .ok_or_else(|| FlowError::UnknownBenefit(benefit_id.to_string()))?;

        if !self
            .offered_benefits(category)
            .iter()
            .any(|offered| offered.id == benefit.id)
        {
            return Err(FlowError::BenefitNotOffered {
                id: benefit.id,
                category,
            });
        }

        let plan = self
            .plan_service
            .generate(benefit.category, &benefit.title)
            .await;

        session.set_selected_benefit(Some(benefit));
        session.set_action_plan(Some(plan.clone()));
        Ok(plan)
    }

    /// Replace the plan for the already selected benefit
    pub async fn regenerate_plan(
        &self,
        session: &mut DiscoverySession,
    ) -> Result<ActionPlan, FlowError> {
        let (category, title) = session
            .selected_benefit()
            .map(|b| (b.category, b.title.clone()))
            .ok_or(FlowError::NoBenefitSelected)?;

        let plan = self.plan_service.generate(category, &title).await;
        session.set_action_plan(Some(plan.clone()));
        Ok(plan)
    }

    pub fn start_over(&self, session: &mut DiscoverySession) {
        session.reset();
    }

    /// Plan for a benefit picked straight from the catalog
    ///
    /// Runs the selection step on a fresh session whose category is the
    /// benefit's own, so the benefit is always among the offered cards.
    pub async fn plan_for_benefit(&self, benefit_id: &str) -> Result<ActionPlan, FlowError> {
        let category = self
            .catalog
            .by_id(benefit_id)
            .map(|b| b.category)
            .ok_or_else(|| FlowError::UnknownBenefit(benefit_id.to_string()))?;

        let mut session = DiscoverySession::new();
        session.set_category(Some(category));
        self.select_benefit(&mut session, benefit_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::llm::TextGenerator;
    use crate::service::plan::canned_plan;
    use crate::service::retry::RetryPolicy;
    use crate::service::test_support::ScriptedGenerator;
    use std::time::Duration;
    use tokio::time::Instant;

    fn flow_with(generator: Option<ScriptedGenerator>) -> DiscoveryFlow {
        let generator = generator.map(|g| Arc::new(g) as Arc<dyn TextGenerator>);
        let policy = RetryPolicy::new(1, Duration::from_millis(1));
        DiscoveryFlow::new(
            Arc::new(ClassificationService::new(generator.clone(), policy)),
            Arc::new(PlanGenerationService::new(generator, policy)),
            Arc::new(BenefitCatalog::builtin().unwrap()),
            FlowConfig::default(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_waits_for_minimum_display() {
        let flow = flow_with(None);
        let mut session = DiscoverySession::new();
        let start = Instant::now();

        let outcome = flow
            .submit_need(&mut session, "I have tooth pain, what can I do?")
            .await
            .unwrap();

        assert_eq!(start.elapsed(), Duration::from_secs(2));
        let SubmitOutcome::Classified {
            classification,
            benefits,
        } = outcome
        else {
            panic!("expected classification");
        };
        assert_eq!(classification.category, BenefitCategory::Dental);
        assert_eq!(benefits.len(), 3);
        assert_eq!(session.category(), Some(BenefitCategory::Dental));
        assert_eq!(session.user_input(), "I have tooth pain, what can I do?");
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_model_does_not_change_result() {
        let generator = ScriptedGenerator::replying("Vision").with_latency(Duration::from_secs(5));
        let flow = flow_with(Some(generator));
        let mut session = DiscoverySession::new();
        let start = Instant::now();

        let outcome = flow.submit_need(&mut session, "blurry").await.unwrap();

        assert_eq!(start.elapsed(), Duration::from_secs(5));
        assert!(matches!(
            outcome,
            SubmitOutcome::Classified { classification, .. }
                if classification == ClassificationResult::new(BenefitCategory::Vision, 0.85)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_hung_model_times_out_without_category() {
        let generator =
            ScriptedGenerator::replying("Dental").with_latency(Duration::from_secs(60));
        let flow = flow_with(Some(generator));
        let mut session = DiscoverySession::new();
        let start = Instant::now();

        let outcome = flow.submit_need(&mut session, "tooth").await.unwrap();

        assert_eq!(outcome, SubmitOutcome::TimedOut);
        assert_eq!(start.elapsed(), Duration::from_secs(10));
        assert!(session.category().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_category_offers_catalog_prefix() {
        let flow = flow_with(Some(ScriptedGenerator::replying("no idea")));
        let mut session = DiscoverySession::new();

        let outcome = flow.submit_need(&mut session, "hmm").await.unwrap();

        let SubmitOutcome::Classified { benefits, .. } = outcome else {
            panic!("expected classification");
        };
        let ids: Vec<_> = benefits.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["dental-1", "dental-2", "dental-3", "mental-1"]);
    }

    #[tokio::test]
    async fn test_blank_input_is_rejected() {
        let flow = flow_with(None);
        let mut session = DiscoverySession::new();

        let result = flow.submit_need(&mut session, "   ").await;

        assert_eq!(result, Err(FlowError::EmptyInput));
        assert!(session.user_input().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_benefit_and_regenerate() {
        let flow = flow_with(None);
        let mut session = DiscoverySession::new();

        flow.submit_need(&mut session, "my glasses broke").await.unwrap();
        let plan = flow.select_benefit(&mut session, "vision-1").await.unwrap();

        assert_eq!(plan, canned_plan(BenefitCategory::Vision));
        assert_eq!(session.selected_benefit().unwrap().id, "vision-1");
        assert_eq!(session.action_plan(), Some(&plan));

        let regenerated = flow.regenerate_plan(&mut session).await.unwrap();
        assert_eq!(regenerated, plan);
    }

    #[tokio::test]
    async fn test_selection_preconditions() {
        let flow = flow_with(None);
        let mut session = DiscoverySession::new();

        assert_eq!(
            flow.select_benefit(&mut session, "dental-1").await,
            Err(FlowError::NoCategory)
        );
        assert_eq!(
            flow.regenerate_plan(&mut session).await,
            Err(FlowError::NoBenefitSelected)
        );

        session.set_category(Some(BenefitCategory::Dental));
        assert_eq!(
            flow.select_benefit(&mut session, "dental-99").await,
            Err(FlowError::UnknownBenefit("dental-99".to_string()))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_rejects_benefit_outside_offered_cards() {
        let flow = flow_with(None);
        let mut session = DiscoverySession::new();
        flow.submit_need(&mut session, "tooth pain").await.unwrap();

        let result = flow.select_benefit(&mut session, "vision-2").await;

        assert_eq!(
            result,
            Err(FlowError::BenefitNotOffered {
                id: "vision-2".to_string(),
                category: BenefitCategory::Dental,
            })
        );
        assert!(session.selected_benefit().is_none());
        assert!(session.action_plan().is_none());
    }

    #[tokio::test]
    async fn test_unknown_category_offers_only_catalog_prefix() {
        let flow = flow_with(None);
        let mut session = DiscoverySession::new();
        session.set_category(Some(BenefitCategory::Unknown));

        assert!(flow.select_benefit(&mut session, "mental-1").await.is_ok());
        assert!(matches!(
            flow.select_benefit(&mut session, "opd-1").await,
            Err(FlowError::BenefitNotOffered { .. })
        ));
    }

    #[tokio::test]
    async fn test_plan_for_benefit() {
        let flow = flow_with(Some(ScriptedGenerator::replying(
            "1. Call the clinic.\n2. Bring your card.\n3. Attend.",
        )));

        let plan = flow.plan_for_benefit("opd-4").await.unwrap();
        assert_eq!(plan.steps, vec!["Call the clinic.", "Bring your card.", "Attend."]);

        assert_eq!(
            flow.plan_for_benefit("opd-9").await,
            Err(FlowError::UnknownBenefit("opd-9".to_string()))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_over_resets_session() {
        let flow = flow_with(None);
        let mut session = DiscoverySession::new();
        flow.submit_need(&mut session, "fever").await.unwrap();
        flow.select_benefit(&mut session, "opd-1").await.unwrap();

        flow.start_over(&mut session);

        assert_eq!(session, DiscoverySession::new());
    }
}
