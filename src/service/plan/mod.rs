//! Action plan generation service
//!
//! Generates a personalized three-step plan for a chosen benefit, degrading
//! to a canned per-category plan when the model is unavailable.

use std::sync::Arc;

use crate::model::{ActionPlan, BenefitCategory};
use crate::service::llm::{TextGenerator, generate_with_policy};
use crate::service::retry::RetryPolicy;

pub mod fallback;
pub mod parser;
pub mod prompts;

pub use fallback::canned_plan;
use parser::parse_steps;
use prompts::build_plan_prompt;

/// Note attached when the model reply had to be replaced by generic steps
pub const PARTIAL_DATA_NOTE: &str = "Plan generated with partial data";

/// Service for generating benefit action plans
pub struct PlanGenerationService {
    generator: Option<Arc<dyn TextGenerator>>,
    retry_policy: RetryPolicy,
}

impl PlanGenerationService {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>, retry_policy: RetryPolicy) -> Self {
        tracing::info!(
            model = generator.as_ref().map(|g| g.model()).unwrap_or("none"),
            max_attempts = retry_policy.max_attempts,
            "Plan generation service initialized"
        );

        Self {
            generator,
            retry_policy,
        }
    }

    /// Generate a plan for `benefit_name`. Never fails.
    pub async fn generate(&self, category: BenefitCategory, benefit_name: &str) -> ActionPlan {
        let Some(generator) = self.generator.as_deref() else {
            return canned_plan(category);
        };

        let start_time = std::time::Instant::now();
        let prompt = build_plan_prompt(category, benefit_name);

        tracing::debug!(
            model = %generator.model(),
            category = %category,
            benefit = %benefit_name,
            "Initiating LLM call for action plan"
        );

        match generate_with_policy(generator, &prompt, self.retry_policy).await {
            Ok(reply) => {
                let parsed = parse_steps(&reply);

                tracing::info!(
                    model = %generator.model(),
                    category = %category,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    used_fallback = parsed.used_fallback,
                    "LLM action plan generation completed"
                );

                let plan = ActionPlan::new(parsed.steps);
                if parsed.used_fallback {
                    plan.with_note(PARTIAL_DATA_NOTE)
                } else {
                    plan
                }
            }
            Err(e) => {
                tracing::warn!(
                    model = %generator.model(),
                    category = %category,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    error = %e,
                    "LLM action plan generation failed, using canned plan"
                );
                canned_plan(category)
            }
        }
    }
}
