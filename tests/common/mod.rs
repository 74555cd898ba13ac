#![allow(dead_code)]

use async_trait::async_trait;
use pageqa::errors::{AcquisitionError, RecommendationError};
use pageqa::models::qa::{AcquisitionOptions, AnalysisBundle, Issue, IssueType, Severity, Snapshot};
use pageqa::services::{Analyzer, Detector, PageProvider, RecommendationEngine};
use serde_json::{json, Value};
use std::sync::Mutex;
use std::time::Duration;

/// Serves a fixed snapshot and remembers the options it was asked with.
pub struct FixedProvider {
    snapshot: Snapshot,
    pub seen_options: Mutex<Vec<AcquisitionOptions>>,
}

impl FixedProvider {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            seen_options: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PageProvider for FixedProvider {
    async fn acquire(
        &self,
        url: &str,
        options: &AcquisitionOptions,
    ) -> Result<Snapshot, AcquisitionError> {
        self.seen_options.lock().unwrap().push(*options);
        Ok(Snapshot {
            url: url.to_string(),
            ..self.snapshot.clone()
        })
    }
}

pub struct BrokenProvider;

#[async_trait]
impl PageProvider for BrokenProvider {
    async fn acquire(
        &self,
        _url: &str,
        _options: &AcquisitionOptions,
    ) -> Result<Snapshot, AcquisitionError> {
        Err(AcquisitionError::Other("browser crashed".to_string()))
    }
}

pub enum Behaviour {
    Report(Vec<Issue>),
    Fail,
    Panic,
    Hang,
}

/// Detector whose outcome is scripted by the test.
pub struct ScriptedDetector {
    pub name: String,
    pub enabled: bool,
    pub behaviour: Behaviour,
}

impl ScriptedDetector {
    pub fn reporting(name: &str, issues: Vec<Issue>) -> Self {
        Self {
            name: name.to_string(),
            enabled: true,
            behaviour: Behaviour::Report(issues),
        }
    }

    pub fn with(name: &str, behaviour: Behaviour) -> Self {
        Self {
            name: name.to_string(),
            enabled: true,
            behaviour,
        }
    }
}

#[async_trait]
impl Detector for ScriptedDetector {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn detect(&self, _snapshot: &Snapshot) -> anyhow::Result<Vec<Issue>> {
        match &self.behaviour {
            Behaviour::Report(issues) => Ok(issues.clone()),
            Behaviour::Fail => anyhow::bail!("{} could not inspect the page", self.name),
            Behaviour::Panic => panic!("{} panicked", self.name),
            Behaviour::Hang => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok(Vec::new())
            }
        }
    }
}

/// Analyzer returning a fixed value, or failing when `value` is `None`.
pub struct FixedAnalyzer {
    pub name: String,
    pub value: Option<Value>,
}

impl FixedAnalyzer {
    pub fn performance(score: f64) -> Self {
        Self {
            name: "performance".to_string(),
            value: Some(json!({ "score": score })),
        }
    }

    pub fn failing(name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: None,
        }
    }
}

#[async_trait]
impl Analyzer for FixedAnalyzer {
    fn name(&self) -> &str {
        &self.name
    }

    async fn analyze(&self, _snapshot: &Snapshot) -> anyhow::Result<Value> {
        self.value
            .clone()
            .ok_or_else(|| anyhow::anyhow!("{} analysis failed", self.name))
    }
}

pub struct FailingRecommendations;

#[async_trait]
impl RecommendationEngine for FailingRecommendations {
    async fn generate(
        &self,
        _issues: &[Issue],
        _analysis: &AnalysisBundle,
    ) -> Result<Vec<String>, RecommendationError> {
        Err(RecommendationError::Failed("model unavailable".to_string()))
    }
}

pub fn issue(issue_type: IssueType, severity: Severity, title: &str) -> Issue {
    Issue::builder(issue_type, severity, title, format!("{} detected", title))
        .step("Navigate to the page")
        .confidence(0.8)
        .build()
}

pub fn issues(issue_type: IssueType, severity: Severity, count: usize) -> Vec<Issue> {
    (0..count)
        .map(|n| issue(issue_type, severity, &format!("{} #{}", issue_type, n)))
        .collect()
}
