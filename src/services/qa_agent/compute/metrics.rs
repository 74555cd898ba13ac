use crate::models::qa::{performance_score, AnalysisBundle, Issue, IssueType, Metrics, Severity};

const MAX_SCORE: f64 = 100.0;

/// Points subtracted from a category score per issue of each severity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenaltyTable {
    pub issue_type: IssueType,
    pub critical: f64,
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl PenaltyTable {
    pub const fn penalty(&self, severity: Severity) -> f64 {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }
}

pub const ACCESSIBILITY_PENALTIES: PenaltyTable = PenaltyTable {
    issue_type: IssueType::Accessibility,
    critical: 25.0,
    high: 15.0,
    medium: 5.0,
    low: 1.0,
};

pub const SECURITY_PENALTIES: PenaltyTable = PenaltyTable {
    issue_type: IssueType::Security,
    critical: 40.0,
    high: 25.0,
    medium: 10.0,
    low: 2.0,
};

pub const UX_PENALTIES: PenaltyTable = PenaltyTable {
    issue_type: IssueType::UserExperience,
    critical: 20.0,
    high: 12.0,
    medium: 6.0,
    low: 2.0,
};

// quality = 100 - (critical * 25 + high * 10 + total * 2)
const QUALITY_CRITICAL_WEIGHT: f64 = 25.0;
const QUALITY_HIGH_WEIGHT: f64 = 10.0;
const QUALITY_PER_ISSUE: f64 = 2.0;

/// 100 when no issue of the table's type exists, else 100 minus the summed
/// penalties, floored at 0.
pub fn category_score(issues: &[Issue], table: &PenaltyTable) -> f64 {
    let penalty: f64 = issues
        .iter()
        .filter(|issue| issue.issue_type() == table.issue_type)
        .map(|issue| table.penalty(issue.severity()))
        .sum();
    (MAX_SCORE - penalty).max(0.0)
}

fn quality_score(issues: &[Issue]) -> f64 {
    let count = |severity: Severity| issues.iter().filter(|i| i.severity() == severity).count() as f64;
    let deduction = count(Severity::Critical) * QUALITY_CRITICAL_WEIGHT
        + count(Severity::High) * QUALITY_HIGH_WEIGHT
        + issues.len() as f64 * QUALITY_PER_ISSUE;
    (MAX_SCORE - deduction).max(0.0)
}

/// Pure function of its inputs; calling it twice gives identical metrics.
pub fn compute_metrics(issues: &[Issue], analysis: &AnalysisBundle) -> Metrics {
    Metrics {
        quality_score: quality_score(issues),
        accessibility_score: category_score(issues, &ACCESSIBILITY_PENALTIES),
        performance_score: performance_score(analysis)
            .unwrap_or(MAX_SCORE)
            .clamp(0.0, MAX_SCORE),
        security_score: category_score(issues, &SECURITY_PENALTIES),
        ux_score: category_score(issues, &UX_PENALTIES),
    }
}
