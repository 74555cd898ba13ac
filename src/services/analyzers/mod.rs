// src/services/analyzers/mod.rs
//! Page analyzers.
//!
//! Analyzers characterise the page instead of flagging defects. Their
//! results are stored under the analyzer's name in the analysis bundle and
//! feed scoring and recommendations.

pub mod content;
pub mod interaction;
pub mod layout;
pub mod performance;

pub use content::ContentAnalyzer;
pub use interaction::InteractionAnalyzer;
pub use layout::LayoutAnalyzer;
pub use performance::PerformanceAnalyzer;

use crate::models::config::QaConfig;
use crate::models::qa::Snapshot;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

#[async_trait]
pub trait Analyzer: Send + Sync {
    /// Key of this analyzer's entry in the analysis bundle.
    fn name(&self) -> &str;

    async fn analyze(&self, snapshot: &Snapshot) -> anyhow::Result<Value>;
}

/// Built-in analyzers. Every registered analyzer runs; there is no
/// per-analyzer enable switch.
pub fn default_analyzers(config: &QaConfig) -> Vec<Arc<dyn Analyzer>> {
    vec![
        Arc::new(ContentAnalyzer::new(config.unit(content::NAME))),
        Arc::new(LayoutAnalyzer::new(config.unit(layout::NAME))),
        Arc::new(InteractionAnalyzer::new(config.unit(interaction::NAME))),
        Arc::new(PerformanceAnalyzer),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::UnitOptions;

    #[test]
    fn analyzers_ignore_enabled_flag() {
        let config = QaConfig::default()
            .with_unit("layout", UnitOptions::disabled())
            .with_unit("performance", UnitOptions::disabled());
        let names: Vec<String> = default_analyzers(&config)
            .iter()
            .map(|a| a.name().to_string())
            .collect();
        assert_eq!(names, vec!["content", "layout", "interaction", "performance"]);
    }
}
