use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

// Issue category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IssueType {
    #[serde(rename = "bug")]
    Bug,
    #[serde(rename = "accessibility")]
    Accessibility,
    #[serde(rename = "performance")]
    Performance,
    #[serde(rename = "security")]
    Security,
    #[serde(rename = "user_experience")]
    UserExperience,
    #[serde(rename = "visual_regression")]
    VisualRegression,
}

impl IssueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::Bug => "bug",
            IssueType::Accessibility => "accessibility",
            IssueType::Performance => "performance",
            IssueType::Security => "security",
            IssueType::UserExperience => "user_experience",
            IssueType::VisualRegression => "visual_regression",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Declaration order gives Low < Medium < High < Critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single detected defect.
///
/// Fields are read-only once built; a detector that wants a different
/// severity or type has to build a new issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    id: String,
    #[serde(rename = "type")]
    issue_type: IssueType,
    severity: Severity,
    title: String,
    description: String,
    element_selector: Option<String>,
    screenshot_path: Option<String>,
    steps_to_reproduce: Vec<String>,
    expected_behavior: Option<String>,
    actual_behavior: Option<String>,
    confidence: f64,
    metadata: BTreeMap<String, Value>,
}

impl Issue {
    pub fn builder(
        issue_type: IssueType,
        severity: Severity,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> IssueBuilder {
        IssueBuilder::new(issue_type, severity, title, description)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn issue_type(&self) -> IssueType {
        self.issue_type
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn element_selector(&self) -> Option<&str> {
        self.element_selector.as_deref()
    }

    pub fn screenshot_path(&self) -> Option<&str> {
        self.screenshot_path.as_deref()
    }

    pub fn steps_to_reproduce(&self) -> &[String] {
        &self.steps_to_reproduce
    }

    pub fn expected_behavior(&self) -> Option<&str> {
        self.expected_behavior.as_deref()
    }

    pub fn actual_behavior(&self) -> Option<&str> {
        self.actual_behavior.as_deref()
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn metadata(&self) -> &BTreeMap<String, Value> {
        &self.metadata
    }
}

pub struct IssueBuilder {
    issue: Issue,
}

impl IssueBuilder {
    pub fn new(
        issue_type: IssueType,
        severity: Severity,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            issue: Issue {
                id: Uuid::new_v4().to_string(),
                issue_type,
                severity,
                title: title.into(),
                description: description.into(),
                element_selector: None,
                screenshot_path: None,
                steps_to_reproduce: Vec::new(),
                expected_behavior: None,
                actual_behavior: None,
                confidence: 1.0,
                metadata: BTreeMap::new(),
            },
        }
    }

    pub fn element_selector(mut self, selector: impl Into<String>) -> Self {
        self.issue.element_selector = Some(selector.into());
        self
    }

    pub fn screenshot_path(mut self, path: impl Into<String>) -> Self {
        self.issue.screenshot_path = Some(path.into());
        self
    }

    pub fn step(mut self, step: impl Into<String>) -> Self {
        self.issue.steps_to_reproduce.push(step.into());
        self
    }

    pub fn expected_behavior(mut self, text: impl Into<String>) -> Self {
        self.issue.expected_behavior = Some(text.into());
        self
    }

    pub fn actual_behavior(mut self, text: impl Into<String>) -> Self {
        self.issue.actual_behavior = Some(text.into());
        self
    }

    /// Values outside [0, 1] are clamped; NaN becomes 0.
    pub fn confidence(mut self, confidence: f64) -> Self {
        self.issue.confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };
        self
    }

    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.issue.metadata.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Issue {
        self.issue
    }
}
