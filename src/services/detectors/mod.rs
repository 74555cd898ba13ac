// src/services/detectors/mod.rs
//! Issue detectors.
//!
//! Each detector inspects the shared snapshot and turns what it finds into
//! [`Issue`] records. Detectors never see each other's output.

pub mod accessibility;
pub mod performance;
pub mod security;
pub mod visual;

pub use accessibility::AccessibilityDetector;
pub use performance::PerformanceDetector;
pub use security::SecurityDetector;
pub use visual::VisualDetector;

use crate::models::config::QaConfig;
use crate::models::qa::{Issue, Snapshot};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait Detector: Send + Sync {
    /// Config category this detector reads its options from.
    fn name(&self) -> &str;

    fn is_enabled(&self) -> bool;

    /// Must treat the snapshot as read-only; other units share it.
    async fn detect(&self, snapshot: &Snapshot) -> anyhow::Result<Vec<Issue>>;
}

/// The built-in detectors, each configured from its own sub-mapping.
pub fn default_detectors(config: &QaConfig) -> Vec<Arc<dyn Detector>> {
    vec![
        Arc::new(AccessibilityDetector::new(config.unit(accessibility::NAME))),
        Arc::new(PerformanceDetector::new(config.unit(performance::NAME))),
        Arc::new(VisualDetector::new(config.unit(visual::NAME))),
        Arc::new(SecurityDetector::new(config.unit(security::NAME))),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::UnitOptions;

    #[test]
    fn detectors_follow_their_own_config() {
        let config = QaConfig::default()
            .with_unit("performance", UnitOptions::disabled())
            .with_unit("visual", UnitOptions::disabled());
        let detectors = default_detectors(&config);

        let enabled: Vec<&str> = detectors
            .iter()
            .filter(|d| d.is_enabled())
            .map(|d| d.name())
            .collect();
        assert_eq!(enabled, vec!["accessibility", "security"]);
    }
}
