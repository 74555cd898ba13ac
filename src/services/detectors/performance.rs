use crate::models::config::UnitOptions;
use crate::models::qa::{Issue, IssueType, Severity, Snapshot};
use crate::services::detectors::Detector;
use async_trait::async_trait;

pub const NAME: &str = "performance";

const DEFAULT_SLOW_LOAD_MS: f64 = 3000.0;
const DEFAULT_MIN_SCORE: f64 = 50.0;

/// Flags slow page loads and poor performance scores.
pub struct PerformanceDetector {
    options: UnitOptions,
    slow_load_ms: f64,
    min_score: f64,
}

impl PerformanceDetector {
    pub fn new(options: UnitOptions) -> Self {
        let slow_load_ms = options
            .f64_setting("slow_load_ms")
            .unwrap_or(DEFAULT_SLOW_LOAD_MS);
        let min_score = options.f64_setting("min_score").unwrap_or(DEFAULT_MIN_SCORE);
        Self {
            options,
            slow_load_ms,
            min_score,
        }
    }
}

#[async_trait]
impl Detector for PerformanceDetector {
    fn name(&self) -> &str {
        NAME
    }

    fn is_enabled(&self) -> bool {
        self.options.enabled
    }

    async fn detect(&self, snapshot: &Snapshot) -> anyhow::Result<Vec<Issue>> {
        let mut issues = Vec::new();

        if snapshot.load_time_ms > self.slow_load_ms {
            let severity = if snapshot.load_time_ms > self.slow_load_ms * 2.0 {
                Severity::Critical
            } else {
                Severity::High
            };
            issues.push(
                Issue::builder(
                    IssueType::Performance,
                    severity,
                    "Slow Page Load",
                    format!(
                        "Page took {:.0}ms to load (threshold {:.0}ms)",
                        snapshot.load_time_ms, self.slow_load_ms
                    ),
                )
                .step(format!("Navigate to {}", snapshot.url))
                .step("Measure time until the page has loaded")
                .expected_behavior(format!("Page loads within {:.0}ms", self.slow_load_ms))
                .actual_behavior(format!("Page loaded in {:.0}ms", snapshot.load_time_ms))
                .confidence(0.8)
                .metadata("load_time_ms", snapshot.load_time_ms)
                .metadata("threshold_ms", self.slow_load_ms)
                .build(),
            );
        }

        if snapshot.performance.score < self.min_score {
            issues.push(
                Issue::builder(
                    IssueType::Performance,
                    Severity::Medium,
                    "Low Performance Score",
                    format!(
                        "Performance score {:.0} is below {:.0}",
                        snapshot.performance.score, self.min_score
                    ),
                )
                .step(format!("Navigate to {}", snapshot.url))
                .step("Run a performance audit")
                .expected_behavior(format!("Performance score of at least {:.0}", self.min_score))
                .actual_behavior(format!("Performance score {:.0}", snapshot.performance.score))
                .confidence(0.7)
                .metadata("score", snapshot.performance.score)
                .build(),
            );
        }

        Ok(issues)
    }
}
