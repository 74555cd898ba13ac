use crate::errors::RecommendationError;
use crate::models::config::RecommendationConfig;
use crate::models::qa::{performance_score, AnalysisBundle, Issue, IssueType, Severity};
use crate::services::recommendation::RecommendationEngine;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};

const PERFORMANCE_TARGET: f64 = 90.0;

fn advice_for(issue_type: IssueType) -> &'static str {
    match issue_type {
        IssueType::Accessibility => {
            "Resolve accessibility issues so the page meets WCAG 2.1 AA for all users"
        }
        IssueType::Security => {
            "Harden transport and response headers: serve over HTTPS and set CSP and HSTS"
        }
        IssueType::Performance => {
            "Reduce load time by compressing assets, deferring scripts and caching resources"
        }
        IssueType::UserExperience => {
            "Review interaction flows and labels so users can complete key tasks"
        }
        IssueType::VisualRegression => {
            "Stabilise layout: reserve space for media and test narrow viewports"
        }
        IssueType::Bug => "Fix functional bugs before addressing lower priority polish",
    }
}

/// Deterministic recommendations derived from issue severities and analyzer output.
pub struct RuleBasedRecommendations {
    config: RecommendationConfig,
}

impl RuleBasedRecommendations {
    pub fn new(config: RecommendationConfig) -> Self {
        Self { config }
    }
}

fn analysis_hints(analysis: &AnalysisBundle) -> Vec<String> {
    let mut hints = Vec::new();

    if let Some(content) = analysis.get("content") {
        if content.get("has_title").and_then(|v| v.as_bool()) == Some(false) {
            hints.push("Add a descriptive <title> to the page".to_string());
        }
        if content.get("thin_content").and_then(|v| v.as_bool()) == Some(true) {
            hints.push("Expand the page copy; it has very little visible text".to_string());
        }
    }

    if let Some(layout) = analysis.get("layout") {
        if layout.get("responsive_meta").and_then(|v| v.as_bool()) == Some(false) {
            hints.push(
                "Add a <meta name=\"viewport\"> tag so the page renders on mobile devices"
                    .to_string(),
            );
        }
    }

    if let Some(interaction) = analysis.get("interaction") {
        let unlabeled = interaction
            .get("unlabeled_elements")
            .and_then(|v| v.as_array())
            .map(|v| v.len())
            .unwrap_or(0);
        if unlabeled > 0 {
            hints.push(format!(
                "Give {} interactive element(s) an accessible label",
                unlabeled
            ));
        }
    }

    if let Some(score) = performance_score(analysis) {
        if score < PERFORMANCE_TARGET {
            hints.push(format!(
                "Improve the performance score from {:.0} to at least {:.0}",
                score, PERFORMANCE_TARGET
            ));
        }
    }

    hints
}

#[async_trait]
impl RecommendationEngine for RuleBasedRecommendations {
    async fn generate(
        &self,
        issues: &[Issue],
        analysis: &AnalysisBundle,
    ) -> Result<Vec<String>, RecommendationError> {
        let mut candidates = Vec::new();

        for issue in issues.iter().filter(|i| i.severity() == Severity::Critical) {
            candidates.push(format!("Fix critical issue: {}", issue.title()));
        }

        // worst severity seen per type
        let mut worst: BTreeMap<IssueType, Severity> = BTreeMap::new();
        for issue in issues {
            let entry = worst.entry(issue.issue_type()).or_insert(issue.severity());
            if issue.severity() > *entry {
                *entry = issue.severity();
            }
        }
        let mut by_severity: Vec<(IssueType, Severity)> = worst.into_iter().collect();
        by_severity.sort_by(|a, b| b.1.cmp(&a.1));
        candidates.extend(
            by_severity
                .into_iter()
                .map(|(issue_type, _)| advice_for(issue_type).to_string()),
        );

        candidates.extend(analysis_hints(analysis));

        let mut seen = HashSet::new();
        Ok(candidates
            .into_iter()
            .filter(|line| seen.insert(line.clone()))
            .take(self.config.max_recommendations)
            .collect())
    }
}
