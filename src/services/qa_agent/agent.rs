use crate::errors::{AnalysisError, UnitKind};
use crate::models::config::QaConfig;
use crate::models::qa::{
    AcquisitionOptions, AcquisitionOverrides, AnalysisBundle, Issue, Report, Snapshot,
};
use crate::services::analyzers::{default_analyzers, Analyzer};
use crate::services::detectors::{default_detectors, Detector};
use crate::services::qa_agent::compute::{build_summary, compute_metrics};
use crate::services::qa_agent::fan_out::{fan_out, UnitTask};
use crate::services::recommendation::{RecommendationEngine, RuleBasedRecommendations};
use crate::services::reporters::{default_reporters, Reporter};
use crate::services::PageProvider;
use crate::utils::{normalize_url, Diagnostic, DiagnosticLevel, DiagnosticSink};
use chrono::Utc;
use log::info;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Runs one QA pass over a page: acquire, detect, analyze, recommend, score.
pub struct QaAgent {
    config: QaConfig,
    provider: Arc<dyn PageProvider>,
    detectors: Vec<Arc<dyn Detector>>,
    analyzers: Vec<Arc<dyn Analyzer>>,
    recommendations: Arc<dyn RecommendationEngine>,
    reporters: Vec<Arc<dyn Reporter>>,
    sink: Arc<dyn DiagnosticSink>,
}

impl QaAgent {
    /// Agent with the built-in units, each built from its own config category.
    pub fn new(
        config: QaConfig,
        provider: Arc<dyn PageProvider>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            detectors: default_detectors(&config),
            analyzers: default_analyzers(&config),
            recommendations: Arc::new(RuleBasedRecommendations::new(
                config.recommendations.clone(),
            )),
            reporters: default_reporters(&config),
            config,
            provider,
            sink,
        }
    }

    pub fn with_detectors(mut self, detectors: Vec<Arc<dyn Detector>>) -> Self {
        self.detectors = detectors;
        self
    }

    pub fn with_analyzers(mut self, analyzers: Vec<Arc<dyn Analyzer>>) -> Self {
        self.analyzers = analyzers;
        self
    }

    pub fn with_recommendation_engine(mut self, engine: Arc<dyn RecommendationEngine>) -> Self {
        self.recommendations = engine;
        self
    }

    pub fn with_reporters(mut self, reporters: Vec<Arc<dyn Reporter>>) -> Self {
        self.reporters = reporters;
        self
    }

    pub fn config(&self) -> &QaConfig {
        &self.config
    }

    fn diagnostic(&self, level: DiagnosticLevel, message: impl Into<String>) {
        self.sink.record(Diagnostic::new(level, None, message));
    }

    pub async fn analyze(
        &self,
        url: &str,
        overrides: &AcquisitionOverrides,
    ) -> Result<Report, AnalysisError> {
        let start = Instant::now();

        // The report keeps the address as given; only acquisition sees the normalized form.
        let url = url.to_string();
        let target = normalize_url(&url).map_err(|source| AnalysisError::Acquisition {
            url: url.clone(),
            source,
        })?;
        let options = AcquisitionOptions::default().merge(overrides);

        self.diagnostic(DiagnosticLevel::Info, format!("Starting QA analysis for {}", url));
        let snapshot = self
            .provider
            .acquire(&target, &options)
            .await
            .map_err(|source| AnalysisError::Acquisition {
                url: url.clone(),
                source,
            })?;
        let snapshot = Arc::new(snapshot);

        let issues = self.detect(&snapshot).await;
        info!("Detection finished for {} with {} issues", url, issues.len());

        let analysis = self.run_analyzers(&snapshot).await;

        let recommendations = self
            .recommendations
            .generate(&issues, &analysis)
            .await
            .map_err(|source| AnalysisError::Recommendation {
                url: url.clone(),
                source,
            })?;

        let summary = build_summary(&issues);
        let metrics = compute_metrics(&issues, &analysis);
        let execution_time_ms = start.elapsed().as_secs_f64() * 1000.0;

        self.diagnostic(
            DiagnosticLevel::Info,
            format!(
                "QA analysis completed for {}: {} issues in {:.0}ms",
                url,
                issues.len(),
                execution_time_ms
            ),
        );

        Ok(Report::new(
            url,
            Utc::now(),
            issues,
            summary,
            metrics,
            recommendations,
            execution_time_ms,
        ))
    }

    async fn detect(&self, snapshot: &Arc<Snapshot>) -> Vec<Issue> {
        let tasks: Vec<UnitTask<Vec<Issue>>> = self
            .detectors
            .iter()
            .filter(|detector| detector.is_enabled())
            .map(|detector| {
                let detector = Arc::clone(detector);
                let snapshot = Arc::clone(snapshot);
                UnitTask {
                    name: detector.name().to_string(),
                    timeout: self.config.unit_timeout(detector.name()),
                    run: Box::pin(async move { detector.detect(&snapshot).await }),
                }
            })
            .collect();

        fan_out(UnitKind::Detector, tasks, self.sink.as_ref())
            .await
            .into_iter()
            .flat_map(|(_, issues)| issues)
            .collect()
    }

    async fn run_analyzers(&self, snapshot: &Arc<Snapshot>) -> AnalysisBundle {
        let tasks: Vec<UnitTask<Value>> = self
            .analyzers
            .iter()
            .map(|analyzer| {
                let analyzer = Arc::clone(analyzer);
                let snapshot = Arc::clone(snapshot);
                UnitTask {
                    name: analyzer.name().to_string(),
                    timeout: self.config.unit_timeout(analyzer.name()),
                    run: Box::pin(async move { analyzer.analyze(&snapshot).await }),
                }
            })
            .collect();

        fan_out(UnitKind::Analyzer, tasks, self.sink.as_ref())
            .await
            .into_iter()
            .collect()
    }

    /// Runs every registered reporter against `destination`. A failing
    /// reporter is recorded and skipped.
    pub async fn render_reports(&self, report: &Report, destination: &Path) -> Vec<PathBuf> {
        let mut artifacts = Vec::with_capacity(self.reporters.len());
        for reporter in &self.reporters {
            match reporter.render(report, destination).await {
                Ok(path) => artifacts.push(path),
                Err(e) => self.sink.record(Diagnostic::new(
                    DiagnosticLevel::Warn,
                    Some(reporter.name()),
                    format!("report rendering failed: {}", e),
                )),
            }
        }
        artifacts
    }
}
