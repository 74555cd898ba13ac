use crate::models::config::UnitOptions;
use crate::models::qa::{AccessibilityObservation, Issue, IssueType, Severity, Snapshot};
use crate::services::detectors::Detector;
use async_trait::async_trait;
use serde_json::json;

pub const NAME: &str = "accessibility";

const CONFIDENCE: f64 = 0.9;

/// Turns the provider's raw accessibility observations into issues.
pub struct AccessibilityDetector {
    options: UnitOptions,
}

impl AccessibilityDetector {
    pub fn new(options: UnitOptions) -> Self {
        Self { options }
    }

    fn issue_for(&self, observation: &AccessibilityObservation, url: &str) -> Issue {
        let kind = observation.kind.as_str();
        let tag_name = observation
            .element
            .tag_name
            .as_deref()
            .unwrap_or("unknown");

        let mut builder = Issue::builder(
            IssueType::Accessibility,
            severity_for(kind),
            title_for(kind),
            observation.message.clone(),
        )
        .step(format!("Navigate to {}", url))
        .step(format!("Locate element: {}", tag_name))
        .step("Check accessibility compliance")
        .expected_behavior(expected_behavior_for(kind))
        .actual_behavior(observation.message.clone())
        .confidence(CONFIDENCE)
        .metadata("wcag_guideline", wcag_guideline_for(kind))
        .metadata(
            "element_details",
            json!({
                "tagName": observation.element.tag_name,
                "selector": observation.element.selector,
            }),
        );

        if let Some(selector) = &observation.element.selector {
            builder = builder.element_selector(selector.clone());
        }
        builder.build()
    }
}

#[async_trait]
impl Detector for AccessibilityDetector {
    fn name(&self) -> &str {
        NAME
    }

    fn is_enabled(&self) -> bool {
        self.options.enabled
    }

    async fn detect(&self, snapshot: &Snapshot) -> anyhow::Result<Vec<Issue>> {
        Ok(snapshot
            .accessibility
            .issues
            .iter()
            .map(|observation| self.issue_for(observation, &snapshot.url))
            .collect())
    }
}

fn severity_for(kind: &str) -> Severity {
    match kind {
        "missing_alt_text" => Severity::High,
        "keyboard_accessibility" => Severity::Critical,
        "color_contrast" | "heading_structure" => Severity::Medium,
        _ => Severity::Medium,
    }
}

fn title_for(kind: &str) -> &'static str {
    match kind {
        "missing_alt_text" => "Image Missing Alt Text",
        "keyboard_accessibility" => "Element Not Keyboard Accessible",
        "color_contrast" => "Insufficient Color Contrast",
        "heading_structure" => "Improper Heading Structure",
        _ => "Accessibility Issue",
    }
}

fn expected_behavior_for(kind: &str) -> &'static str {
    match kind {
        "missing_alt_text" => "All images should have descriptive alt text",
        "keyboard_accessibility" => "All interactive elements should be keyboard accessible",
        "color_contrast" => "Text should have sufficient contrast ratio (4.5:1 minimum)",
        "heading_structure" => "Headings should follow proper hierarchical structure",
        _ => "Element should be accessible",
    }
}

fn wcag_guideline_for(kind: &str) -> &'static str {
    match kind {
        "missing_alt_text" => "WCAG 2.1 - 1.1.1 Non-text Content",
        "keyboard_accessibility" => "WCAG 2.1 - 2.1.1 Keyboard",
        "color_contrast" => "WCAG 2.1 - 1.4.3 Contrast (Minimum)",
        "heading_structure" => "WCAG 2.1 - 1.3.1 Info and Relationships",
        _ => "WCAG 2.1",
    }
}
