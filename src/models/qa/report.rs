use crate::models::qa::issue::{Issue, IssueType, Severity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalIssue {
    pub title: String,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
}

// Counts derived from a report's issue list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_issues: usize,
    pub by_severity: BTreeMap<Severity, usize>,
    pub by_type: BTreeMap<IssueType, usize>,
    pub critical_issues: Vec<CriticalIssue>,
}

// Scores in [0, 100], higher is better
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub quality_score: f64,
    pub accessibility_score: f64,
    pub performance_score: f64,
    pub security_score: f64,
    pub ux_score: f64,
}

/// Terminal artifact of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    url: String,
    timestamp: DateTime<Utc>,
    issues: Vec<Issue>,
    summary: Summary,
    metrics: Metrics,
    recommendations: Vec<String>,
    execution_time_ms: f64,
}

impl Report {
    pub fn new(
        url: String,
        timestamp: DateTime<Utc>,
        issues: Vec<Issue>,
        summary: Summary,
        metrics: Metrics,
        recommendations: Vec<String>,
        execution_time_ms: f64,
    ) -> Self {
        Self {
            url,
            timestamp,
            issues,
            summary,
            metrics,
            recommendations,
            execution_time_ms,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    pub fn execution_time_ms(&self) -> f64 {
        self.execution_time_ms
    }
}
