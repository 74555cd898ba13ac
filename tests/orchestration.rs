mod common;

use common::{
    issue, issues, Behaviour, BrokenProvider, FailingRecommendations, FixedAnalyzer,
    FixedProvider, ScriptedDetector,
};
use pageqa::errors::AnalysisError;
use pageqa::models::config::{QaConfig, UnitOptions};
use pageqa::models::qa::{
    AcquisitionOptions, AcquisitionOverrides, IssueType, Report, Severity, Snapshot,
};
use pageqa::services::{Analyzer, Detector, QaAgent};
use pageqa::utils::{FileSink, MemorySink};
use std::error::Error as _;
use std::sync::Arc;
use std::time::Duration;

fn agent_with(
    config: QaConfig,
    detectors: Vec<Arc<dyn Detector>>,
    analyzers: Vec<Arc<dyn Analyzer>>,
    sink: Arc<MemorySink>,
) -> QaAgent {
    QaAgent::new(
        config,
        Arc::new(FixedProvider::new(Snapshot::default())),
        sink,
    )
    .with_detectors(detectors)
    .with_analyzers(analyzers)
}

async fn run(detectors: Vec<Arc<dyn Detector>>, analyzers: Vec<Arc<dyn Analyzer>>) -> Report {
    agent_with(
        QaConfig::default(),
        detectors,
        analyzers,
        Arc::new(MemorySink::new()),
    )
    .analyze("https://example.com", &AcquisitionOverrides::default())
    .await
    .unwrap()
}

fn titles(report: &Report) -> Vec<String> {
    report.issues().iter().map(|i| i.title().to_string()).collect()
}

#[tokio::test]
async fn failing_detectors_are_isolated() {
    let sink = Arc::new(MemorySink::new());
    let detectors: Vec<Arc<dyn Detector>> = vec![
        Arc::new(ScriptedDetector::reporting(
            "accessibility",
            vec![
                issue(IssueType::Accessibility, Severity::High, "Image Missing Alt Text"),
                issue(IssueType::Accessibility, Severity::Medium, "Improper Heading Structure"),
            ],
        )),
        Arc::new(ScriptedDetector::with("visual", Behaviour::Fail)),
        Arc::new(ScriptedDetector::reporting(
            "security",
            vec![issue(IssueType::Security, Severity::Critical, "Page Served Over HTTP")],
        )),
        Arc::new(ScriptedDetector::with("performance", Behaviour::Panic)),
    ];

    let report = agent_with(QaConfig::default(), detectors, Vec::new(), sink.clone())
        .analyze("https://example.com", &AcquisitionOverrides::default())
        .await
        .unwrap();

    assert_eq!(
        titles(&report),
        vec![
            "Image Missing Alt Text",
            "Improper Heading Structure",
            "Page Served Over HTTP"
        ]
    );
    assert_eq!(report.summary().total_issues, 3);

    let failed_units: Vec<Option<String>> = sink.errors().into_iter().map(|d| d.unit).collect();
    assert_eq!(
        failed_units,
        vec![Some("visual".to_string()), Some("performance".to_string())]
    );
}

#[tokio::test]
async fn slow_detector_times_out_without_blocking_siblings() {
    let sink = Arc::new(MemorySink::new());
    let config = QaConfig::default().with_unit(
        "visual",
        UnitOptions {
            timeout_ms: Some(50),
            ..UnitOptions::default()
        },
    );
    let detectors: Vec<Arc<dyn Detector>> = vec![
        Arc::new(ScriptedDetector::with("visual", Behaviour::Hang)),
        Arc::new(ScriptedDetector::reporting(
            "security",
            vec![issue(IssueType::Security, Severity::Low, "Missing HSTS Header")],
        )),
    ];

    let report = tokio::time::timeout(
        Duration::from_secs(5),
        agent_with(config, detectors, Vec::new(), sink.clone())
            .analyze("https://example.com", &AcquisitionOverrides::default()),
    )
    .await
    .expect("run must not wait for the hung detector")
    .unwrap();

    assert_eq!(titles(&report), vec!["Missing HSTS Header"]);
    let errors = sink.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "detector visual failed: timed out after 50ms");
}

#[tokio::test]
async fn disabled_detectors_are_not_invoked() {
    let sink = Arc::new(MemorySink::new());
    let detectors: Vec<Arc<dyn Detector>> = vec![Arc::new(ScriptedDetector {
        name: "visual".to_string(),
        enabled: false,
        behaviour: Behaviour::Panic,
    })];

    let report = agent_with(QaConfig::default(), detectors, Vec::new(), sink.clone())
        .analyze("https://example.com", &AcquisitionOverrides::default())
        .await
        .unwrap();

    assert!(report.issues().is_empty());
    assert!(sink.errors().is_empty());
}

#[tokio::test]
async fn acquisition_failure_produces_no_report() {
    let sink = Arc::new(MemorySink::new());
    let agent = QaAgent::new(QaConfig::default(), Arc::new(BrokenProvider), sink);

    let err = agent
        .analyze("https://example.com", &AcquisitionOverrides::default())
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::Acquisition { .. }));
    assert_eq!(
        err.source().map(|s| s.to_string()).as_deref(),
        Some("browser crashed")
    );
}

#[tokio::test]
async fn recommendation_failure_is_fatal() {
    let agent = agent_with(
        QaConfig::default(),
        vec![Arc::new(ScriptedDetector::reporting(
            "security",
            issues(IssueType::Security, Severity::High, 1),
        ))],
        Vec::new(),
        Arc::new(MemorySink::new()),
    )
    .with_recommendation_engine(Arc::new(FailingRecommendations));

    let err = agent
        .analyze("https://example.com", &AcquisitionOverrides::default())
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::Recommendation { .. }));
    assert!(err.source().unwrap().to_string().contains("model unavailable"));
}

#[tokio::test]
async fn failing_analyzer_leaves_no_bundle_entry() {
    let sink = Arc::new(MemorySink::new());
    let analyzers: Vec<Arc<dyn Analyzer>> = vec![
        Arc::new(FixedAnalyzer::failing("performance")),
        Arc::new(FixedAnalyzer {
            name: "layout".to_string(),
            value: Some(serde_json::json!({ "responsive_meta": true })),
        }),
    ];

    let report = agent_with(QaConfig::default(), Vec::new(), analyzers, sink.clone())
        .analyze("https://example.com", &AcquisitionOverrides::default())
        .await
        .unwrap();

    // performance falls back to 100 when the analyzer produced nothing
    assert_eq!(report.metrics().performance_score, 100.0);
    let errors = sink.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message,
        "analyzer performance failed: performance analysis failed"
    );
}

#[tokio::test]
async fn caller_options_override_defaults() {
    let provider = Arc::new(FixedProvider::new(Snapshot::default()));
    let agent = QaAgent::new(
        QaConfig::default(),
        provider.clone(),
        Arc::new(MemorySink::new()),
    )
    .with_detectors(Vec::new())
    .with_analyzers(Vec::new());

    let overrides = AcquisitionOverrides {
        take_screenshots: Some(false),
        extract_forms: Some(false),
        ..AcquisitionOverrides::default()
    };
    agent.analyze("example.com", &overrides).await.unwrap();

    let seen = provider.seen_options.lock().unwrap().clone();
    assert_eq!(
        seen,
        vec![AcquisitionOptions {
            take_screenshots: false,
            analyze_accessibility: true,
            measure_performance: true,
            extract_forms: false,
            map_user_flows: true,
        }]
    );
}

#[tokio::test]
async fn summary_partitions_the_issue_list() {
    let mut found = issues(IssueType::Accessibility, Severity::High, 3);
    found.extend(issues(IssueType::Bug, Severity::Critical, 2));
    found.extend(issues(IssueType::UserExperience, Severity::Low, 4));

    let report = run(
        vec![Arc::new(ScriptedDetector::reporting("mixed", found))],
        Vec::new(),
    )
    .await;

    let summary = report.summary();
    assert_eq!(summary.total_issues, report.issues().len());
    assert_eq!(summary.by_severity.values().sum::<usize>(), 9);
    assert_eq!(summary.by_type.values().sum::<usize>(), 9);
    assert_eq!(summary.critical_issues.len(), 2);
    assert!(summary
        .critical_issues
        .iter()
        .all(|c| c.issue_type == IssueType::Bug));
}

#[tokio::test]
async fn repeated_runs_score_identically() {
    let detectors = || -> Vec<Arc<dyn Detector>> {
        vec![Arc::new(ScriptedDetector::reporting(
            "accessibility",
            issues(IssueType::Accessibility, Severity::Medium, 2),
        ))]
    };
    let first = run(detectors(), vec![Arc::new(FixedAnalyzer::performance(72.0))]).await;
    let second = run(detectors(), vec![Arc::new(FixedAnalyzer::performance(72.0))]).await;

    assert_eq!(first.metrics(), second.metrics());
    assert_eq!(first.recommendations(), second.recommendations());
}

#[tokio::test]
async fn file_sink_keeps_unit_failures() {
    let dir = tempfile::tempdir().unwrap();
    let sink = Arc::new(FileSink::new(dir.path().join("run.log")));
    let agent = QaAgent::new(
        QaConfig::default(),
        Arc::new(FixedProvider::new(Snapshot::default())),
        sink.clone(),
    )
    .with_detectors(vec![Arc::new(ScriptedDetector::with(
        "security",
        Behaviour::Fail,
    ))])
    .with_analyzers(Vec::new());

    agent
        .analyze("https://example.com", &AcquisitionOverrides::default())
        .await
        .unwrap();

    let log = std::fs::read_to_string(sink.path()).unwrap();
    assert!(log.contains("::Error::security::detector security failed: security could not inspect the page"));
    assert!(log.contains("Starting QA analysis for https://example.com"));
}
