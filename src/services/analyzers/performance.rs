use crate::models::qa::{Snapshot, PERFORMANCE_ENTRY};
use crate::services::analyzers::Analyzer;
use async_trait::async_trait;
use serde_json::{json, Value};

/// Publishes the snapshot's performance measurements. Its `score` field is
/// what the metrics use as the performance score.
pub struct PerformanceAnalyzer;

#[async_trait]
impl Analyzer for PerformanceAnalyzer {
    fn name(&self) -> &str {
        PERFORMANCE_ENTRY
    }

    async fn analyze(&self, snapshot: &Snapshot) -> anyhow::Result<Value> {
        let performance = &snapshot.performance;
        if !performance.score.is_finite() {
            anyhow::bail!("performance score is not a number: {}", performance.score);
        }

        Ok(json!({
            "score": performance.score,
            "load_time_ms": snapshot.load_time_ms,
            "first_contentful_paint_ms": performance.first_contentful_paint_ms,
            "largest_contentful_paint_ms": performance.largest_contentful_paint_ms,
            "total_byte_weight": performance.total_byte_weight,
        }))
    }
}
