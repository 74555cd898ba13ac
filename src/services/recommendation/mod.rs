// src/services/recommendation/mod.rs

pub mod rule_based;

pub use rule_based::RuleBasedRecommendations;

use crate::errors::RecommendationError;
use crate::models::qa::{AnalysisBundle, Issue};
use async_trait::async_trait;

/// Turns the aggregated findings of a run into ordered, human readable advice.
#[async_trait]
pub trait RecommendationEngine: Send + Sync {
    async fn generate(
        &self,
        issues: &[Issue],
        analysis: &AnalysisBundle,
    ) -> Result<Vec<String>, RecommendationError>;
}
