//! Shared LLM client and interaction utilities
//!
//! Provides the text-generation seam used by the classification and plan
//! services, backed by the Gemini provider.

use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::gemini;

use crate::model::LlmConfig;
use crate::service::retry::{RetryPolicy, retry_with_backoff};

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LlmError {
    #[error("Failed to create LLM client: {0}")]
    ClientInit(String),

    #[error("LLM completion failed: {0}")]
    Completion(String),
}

/// A model that turns one text prompt into one text completion
///
/// Failures are opaque: rate limits, network errors and malformed replies all
/// surface as `LlmError`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;

    /// Model identifier, for logging
    fn model(&self) -> &str;
}

/// Shared LLM client wrapper
#[derive(Clone)]
pub struct LlmClient {
    client: gemini::Client,
    model: String,
}

impl LlmClient {
    /// Create a new LLM client with the provided API key
    pub fn new(api_key: &str, model: &str) -> Result<Self, LlmError> {
        let client =
            gemini::Client::new(api_key).map_err(|e| LlmError::ClientInit(e.to_string()))?;

        Ok(Self {
            client,
            model: model.to_string(),
        })
    }

    /// Build a client from configuration
    ///
    /// Returns `None` when no credential is configured; callers then run in
    /// fallback-only mode.
    pub fn from_config(config: &LlmConfig) -> Result<Option<Self>, LlmError> {
        let Some(api_key) = config.api_key.as_deref() else {
            tracing::warn!(
                "Gemini API key not found, set GEMINI_API_KEY to enable model-backed classification and plans"
            );
            return Ok(None);
        };

        let client = Self::new(api_key, &config.model)?;
        tracing::info!(model = %config.model, "LLM client initialized");
        Ok(Some(client))
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let agent = self.client.agent(&self.model).build();

        let text = agent
            .prompt(prompt)
            .await
            .map_err(|e| LlmError::Completion(e.to_string()))?;

        Ok(text.trim().to_string())
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// Call the model once, or through the retry wrapper when the policy allows
/// more than one attempt
pub async fn generate_with_policy(
    generator: &dyn TextGenerator,
    prompt: &str,
    policy: RetryPolicy,
) -> Result<String, LlmError> {
    if policy.max_attempts <= 1 {
        return generator.generate(prompt).await;
    }

    retry_with_backoff(policy, || generator.generate(prompt))
        .await
        .map_err(|e| {
            e.into_operation_error().unwrap_or_else(|| {
                LlmError::Completion("retry policy allowed no attempts".to_string())
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::test_support::ScriptedGenerator;
    use std::time::Duration;

    #[tokio::test]
    async fn test_single_attempt_policy_calls_once() {
        let generator = ScriptedGenerator::new(vec![
            Err(LlmError::Completion("quota".to_string())),
            Ok("Dental".to_string()),
        ]);
        let policy = RetryPolicy::new(1, Duration::from_millis(1));

        let result = generate_with_policy(&generator, "prompt", policy).await;

        assert!(matches!(result, Err(LlmError::Completion(_))));
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_policy_retries_model_call() {
        let generator = ScriptedGenerator::new(vec![
            Err(LlmError::Completion("quota".to_string())),
            Ok("Vision".to_string()),
        ]);
        let policy = RetryPolicy::new(3, Duration::from_millis(100));

        let result = generate_with_policy(&generator, "prompt", policy).await;

        assert_eq!(result.unwrap(), "Vision");
        assert_eq!(generator.calls(), 2);
    }

    #[test]
    fn test_from_config_without_key_is_fallback_only() {
        let config = LlmConfig::default();
        let client = LlmClient::from_config(&config).unwrap();
        assert!(client.is_none());
    }
}
