//! Application state and service initialization
//!
//! This module centralizes all service initialization and dependency injection,
//! making it easier to manage the application lifecycle and test services.

use std::sync::Arc;

use crate::model::{Config, FlowConfig};
use crate::service::catalog::CatalogError;
use crate::service::llm::TextGenerator;
use crate::service::retry::RetryPolicy;
use crate::service::{
    BenefitCatalog, ClassificationService, DiscoveryFlow, LlmClient, PlanGenerationService,
    SessionStore,
};

/// Application state containing all services and shared resources
pub struct AppState {
    /// Read-only benefit catalog
    pub catalog: Arc<BenefitCatalog>,
    /// Health need classification service
    pub classification_service: Arc<ClassificationService>,
    /// Guided flow over the services above
    pub flow: Arc<DiscoveryFlow>,
    /// Open discovery sessions
    pub sessions: Arc<SessionStore>,
    /// Whether a model credential is configured
    pub model_configured: bool,
}

impl AppState {
    /// Initialize all services and build application state
    ///
    /// A missing `GEMINI_API_KEY` is not an error: the services then answer
    /// from the keyword heuristic and canned plans.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let generator = LlmClient::from_config(&config.llm)
            .map_err(|e| AppError::InvalidConfig(e.to_string()))?
            .map(|client| Arc::new(client) as Arc<dyn TextGenerator>);

        let retry_policy = RetryPolicy::new(
            config.llm.max_attempts.max(1),
            config.llm.retry_base_delay,
        );

        Self::build(generator, retry_policy, config.flow)
    }

    /// Build the service graph around an already constructed model
    pub fn build(
        generator: Option<Arc<dyn TextGenerator>>,
        retry_policy: RetryPolicy,
        flow_config: FlowConfig,
    ) -> Result<Self, AppError> {
        let model_configured = generator.is_some();
        let catalog = Arc::new(BenefitCatalog::builtin()?);

        let classification_service = Arc::new(ClassificationService::new(
            generator.clone(),
            retry_policy,
        ));
        let plan_service = Arc::new(PlanGenerationService::new(generator, retry_policy));

        let flow = Arc::new(DiscoveryFlow::new(
            Arc::clone(&classification_service),
            plan_service,
            Arc::clone(&catalog),
            flow_config,
        ));

        Ok(Self {
            catalog,
            classification_service,
            flow,
            sessions: Arc::new(SessionStore::new()),
            model_configured,
        })
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Built-in catalog violates its invariants
    #[error("Benefit catalog is invalid: {0}")]
    Catalog(#[from] CatalogError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_runs_fallback_only() {
        let state = AppState::new(&Config::default()).unwrap();
        assert!(!state.model_configured);
        assert_eq!(state.catalog.len(), 13);
    }
}
