//! Health need classification service
//!
//! Asks the model for a benefit category and degrades to keyword matching
//! when the model is not configured or the call fails.

use std::sync::Arc;

use crate::model::{BenefitCategory, ClassificationResult};
use crate::service::llm::{TextGenerator, generate_with_policy};
use crate::service::retry::RetryPolicy;

pub mod heuristic;
pub mod prompts;

pub use heuristic::classify_heuristically;
use prompts::build_classification_prompt;

const MODEL_MATCH_CONFIDENCE: f32 = 0.85;
const MODEL_NO_MATCH_CONFIDENCE: f32 = 0.3;

/// Service for classifying free-text health needs into benefit categories
pub struct ClassificationService {
    generator: Option<Arc<dyn TextGenerator>>,
    retry_policy: RetryPolicy,
}

impl ClassificationService {
    /// Create a new classification service
    ///
    /// Without a generator every request is answered by the keyword heuristic.
    pub fn new(generator: Option<Arc<dyn TextGenerator>>, retry_policy: RetryPolicy) -> Self {
        tracing::info!(
            model = generator.as_ref().map(|g| g.model()).unwrap_or("none"),
            max_attempts = retry_policy.max_attempts,
            "Classification service initialized"
        );

        Self {
            generator,
            retry_policy,
        }
    }

    /// Classify a health need. Never fails.
    pub async fn classify(&self, user_input: &str) -> ClassificationResult {
        let Some(generator) = self.generator.as_deref() else {
            return classify_heuristically(user_input);
        };

        let start_time = std::time::Instant::now();
        let prompt = build_classification_prompt(user_input);

        tracing::debug!(
            model = %generator.model(),
            prompt_length = prompt.len(),
            "Initiating LLM call for classification"
        );

        match generate_with_policy(generator, &prompt, self.retry_policy).await {
            Ok(reply) => {
                let result = match extract_category(&reply) {
                    Some(category) => ClassificationResult::new(category, MODEL_MATCH_CONFIDENCE),
                    None => ClassificationResult::new(
                        BenefitCategory::Unknown,
                        MODEL_NO_MATCH_CONFIDENCE,
                    ),
                };

                tracing::info!(
                    model = %generator.model(),
                    elapsed_ms = start_time.elapsed().as_millis(),
                    category = %result.category,
                    "LLM classification completed"
                );
                result
            }
            Err(e) => {
                tracing::warn!(
                    model = %generator.model(),
                    elapsed_ms = start_time.elapsed().as_millis(),
                    error = %e,
                    "LLM classification failed, using keyword fallback"
                );
                classify_heuristically(user_input)
            }
        }
    }
}

/// First known category, in priority order, whose name appears anywhere in
/// the reply (case-insensitive)
fn extract_category(reply: &str) -> Option<BenefitCategory> {
    let reply = reply.to_lowercase();
    BenefitCategory::KNOWN
        .into_iter()
        .find(|category| reply.contains(&category.as_str().to_lowercase()))
}
