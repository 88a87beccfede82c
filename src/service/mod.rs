pub mod catalog;
pub mod classification;
pub mod flow;
pub mod llm;
pub mod plan;
pub mod retry;
pub mod sessions;

#[cfg(test)]
pub mod test_support;

pub use catalog::BenefitCatalog;
pub use classification::ClassificationService;
pub use flow::DiscoveryFlow;
pub use llm::LlmClient;
pub use plan::PlanGenerationService;
pub use sessions::SessionStore;
