mod common;

use common::{issue, issues, FixedAnalyzer, FixedProvider, ScriptedDetector};
use pageqa::models::config::QaConfig;
use pageqa::models::qa::{AcquisitionOverrides, Issue, IssueType, Metrics, Severity, Snapshot};
use pageqa::services::{Analyzer, Detector, QaAgent};
use pageqa::utils::MemorySink;
use std::sync::Arc;

async fn metrics_for(found: Vec<Issue>, analyzers: Vec<Arc<dyn Analyzer>>) -> Metrics {
    let detectors: Vec<Arc<dyn Detector>> =
        vec![Arc::new(ScriptedDetector::reporting("scripted", found))];
    let report = QaAgent::new(
        QaConfig::default(),
        Arc::new(FixedProvider::new(Snapshot::default())),
        Arc::new(MemorySink::new()),
    )
    .with_detectors(detectors)
    .with_analyzers(analyzers)
    .analyze("https://example.com", &AcquisitionOverrides::default())
    .await
    .unwrap();
    *report.metrics()
}

#[tokio::test]
async fn no_issues_scores_full_marks() {
    let metrics = metrics_for(Vec::new(), Vec::new()).await;
    assert_eq!(metrics.quality_score, 100.0);
    assert_eq!(metrics.accessibility_score, 100.0);
    assert_eq!(metrics.performance_score, 100.0);
    assert_eq!(metrics.security_score, 100.0);
    assert_eq!(metrics.ux_score, 100.0);
}

#[tokio::test]
async fn one_high_accessibility_issue() {
    let metrics = metrics_for(
        vec![issue(IssueType::Accessibility, Severity::High, "Image Missing Alt Text")],
        Vec::new(),
    )
    .await;
    assert_eq!(metrics.accessibility_score, 85.0);
    assert_eq!(metrics.quality_score, 88.0);
}

#[tokio::test]
async fn one_critical_security_issue() {
    let metrics = metrics_for(
        vec![issue(IssueType::Security, Severity::Critical, "Page Served Over HTTP")],
        Vec::new(),
    )
    .await;
    assert_eq!(metrics.security_score, 60.0);
    assert_eq!(metrics.quality_score, 73.0);
}

#[tokio::test]
async fn ten_low_bugs() {
    let metrics = metrics_for(issues(IssueType::Bug, Severity::Low, 10), Vec::new()).await;
    assert_eq!(metrics.quality_score, 80.0);
    assert_eq!(metrics.accessibility_score, 100.0);
    assert_eq!(metrics.security_score, 100.0);
    assert_eq!(metrics.ux_score, 100.0);
}

#[tokio::test]
async fn performance_score_comes_from_the_analyzer() {
    let metrics = metrics_for(
        Vec::new(),
        vec![Arc::new(FixedAnalyzer::performance(85.0))],
    )
    .await;
    assert_eq!(metrics.performance_score, 85.0);
}

#[tokio::test]
async fn scores_stay_in_bounds_under_heavy_load() {
    let mut found = issues(IssueType::Security, Severity::Critical, 12);
    found.extend(issues(IssueType::UserExperience, Severity::High, 20));
    found.extend(issues(IssueType::Accessibility, Severity::Low, 300));
    let metrics = metrics_for(found, Vec::new()).await;

    for score in [
        metrics.quality_score,
        metrics.accessibility_score,
        metrics.performance_score,
        metrics.security_score,
        metrics.ux_score,
    ] {
        assert!((0.0..=100.0).contains(&score), "score {} out of bounds", score);
    }
    assert_eq!(metrics.accessibility_score, 0.0);
}
