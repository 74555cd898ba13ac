pub mod qa_config;

pub use qa_config::{ProviderConfig, QaConfig, RecommendationConfig, UnitOptions};
