pub mod benefit;
pub mod classification;
pub mod config;
pub mod plan;
pub mod session;

pub use benefit::{BenefitCategory, BenefitRecord, ParseCategoryError};
pub use classification::ClassificationResult;
pub use config::{Config, FlowConfig, LlmConfig};
pub use plan::ActionPlan;
pub use session::DiscoverySession;
