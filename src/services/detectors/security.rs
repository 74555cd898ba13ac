use crate::models::config::UnitOptions;
use crate::models::qa::{Issue, IssueType, Severity, Snapshot};
use crate::services::detectors::Detector;
use crate::utils::is_https;
use async_trait::async_trait;

pub const NAME: &str = "security";

// (header, severity, title, expected behaviour)
const REQUIRED_HEADERS: &[(&str, Severity, &str, &str)] = &[
    (
        "content-security-policy",
        Severity::Medium,
        "Missing Content Security Policy",
        "Responses carry a Content-Security-Policy header",
    ),
    (
        "strict-transport-security",
        Severity::Low,
        "Missing HSTS Header",
        "HTTPS responses carry a Strict-Transport-Security header",
    ),
];

/// Transport and header hygiene checks.
pub struct SecurityDetector {
    options: UnitOptions,
}

impl SecurityDetector {
    pub fn new(options: UnitOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl Detector for SecurityDetector {
    fn name(&self) -> &str {
        NAME
    }

    fn is_enabled(&self) -> bool {
        self.options.enabled
    }

    async fn detect(&self, snapshot: &Snapshot) -> anyhow::Result<Vec<Issue>> {
        let mut issues = Vec::new();
        let secure = is_https(&snapshot.url);

        if !secure {
            issues.push(
                Issue::builder(
                    IssueType::Security,
                    Severity::Critical,
                    "Page Served Over HTTP",
                    format!("{} is not served over HTTPS", snapshot.url),
                )
                .step(format!("Navigate to {}", snapshot.url))
                .step("Inspect the connection in the browser address bar")
                .expected_behavior("Page is only reachable over HTTPS")
                .actual_behavior("Page is served over plain HTTP")
                .confidence(1.0)
                .metadata("owasp", "A02:2021 Cryptographic Failures")
                .build(),
            );
        }

        for form in &snapshot.forms {
            let insecure_action = form
                .action
                .as_deref()
                .map(|action| action.to_ascii_lowercase().starts_with("http://"))
                .unwrap_or(false);
            if !insecure_action {
                continue;
            }
            let mut builder = Issue::builder(
                IssueType::Security,
                Severity::High,
                "Form Submits Over HTTP",
                format!(
                    "Form posts to {} without encryption",
                    form.action.as_deref().unwrap_or_default()
                ),
            )
            .step(format!("Navigate to {}", snapshot.url))
            .step("Submit the form and inspect the request")
            .expected_behavior("Form data is only sent over HTTPS")
            .actual_behavior("Form data is sent over plain HTTP")
            .confidence(0.95)
            .metadata("form_action", form.action.clone().unwrap_or_default());
            if let Some(selector) = &form.selector {
                builder = builder.element_selector(selector.clone());
            }
            issues.push(builder.build());
        }

        for (header, severity, title, expected) in REQUIRED_HEADERS {
            if *header == "strict-transport-security" && !secure {
                continue;
            }
            if snapshot.header(header).is_some() {
                continue;
            }
            issues.push(
                Issue::builder(
                    IssueType::Security,
                    *severity,
                    *title,
                    format!("Response has no {} header", header),
                )
                .step(format!("Request {}", snapshot.url))
                .step("Inspect the response headers")
                .expected_behavior(*expected)
                .actual_behavior(format!("{} header is absent", header))
                .confidence(0.9)
                .metadata("header", *header)
                .build(),
            );
        }

        Ok(issues)
    }
}
