use crate::errors::ReportError;
use crate::models::qa::{Issue, Report};
use crate::services::reporters::{artifact_path, Reporter};
use crate::utils::{ensure_dir, escape_html, save_text};
use async_trait::async_trait;
use log::info;
use std::path::{Path, PathBuf};

pub const NAME: &str = "html_report";

/// Self-contained HTML page with scores, summary counts and the issue list.
pub struct HtmlReporter;

fn score_row(label: &str, score: f64) -> String {
    format!(
        "<tr><td>{}</td><td class=\"score\">{:.0}</td></tr>",
        label, score
    )
}

fn issue_row(issue: &Issue) -> String {
    format!(
        "<tr class=\"{severity}\"><td>{severity}</td><td>{kind}</td><td>{title}</td><td>{description}</td><td><code>{selector}</code></td></tr>",
        severity = issue.severity(),
        kind = issue.issue_type(),
        title = escape_html(issue.title()),
        description = escape_html(issue.description()),
        selector = escape_html(issue.element_selector().unwrap_or("-")),
    )
}

pub fn render_html(report: &Report) -> String {
    let metrics = report.metrics();
    let summary = report.summary();

    let scores: String = [
        score_row("Quality", metrics.quality_score),
        score_row("Accessibility", metrics.accessibility_score),
        score_row("Performance", metrics.performance_score),
        score_row("Security", metrics.security_score),
        score_row("User experience", metrics.ux_score),
    ]
    .concat();

    let severities: String = summary
        .by_severity
        .iter()
        .rev()
        .map(|(severity, count)| format!("<li>{}: {}</li>", severity, count))
        .collect();
    let types: String = summary
        .by_type
        .iter()
        .map(|(issue_type, count)| format!("<li>{}: {}</li>", issue_type, count))
        .collect();
    let issues: String = report.issues().iter().map(issue_row).collect();
    let recommendations: String = report
        .recommendations()
        .iter()
        .map(|r| format!("<li>{}</li>", escape_html(r)))
        .collect();

    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"UTF-8\">
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
    <title>QA Report - {url}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 2rem;
            color: #2d3748;
        }}
        table {{ border-collapse: collapse; width: 100%; margin-bottom: 2rem; }}
        td, th {{ border: 1px solid #e2e8f0; padding: 0.5rem; text-align: left; }}
        .score {{ font-weight: bold; }}
        .critical {{ background: #fed7d7; }}
        .high {{ background: #feebc8; }}
    </style>
</head>
<body>
    <h1>QA Report</h1>
    <p>{url}<br>Generated {timestamp} in {elapsed:.0} ms</p>
    <h2>Scores</h2>
    <table>{scores}</table>
    <h2>Summary ({total} issues)</h2>
    <ul>{severities}</ul>
    <ul>{types}</ul>
    <h2>Recommendations</h2>
    <ol>{recommendations}</ol>
    <h2>Issues</h2>
    <table>
        <tr><th>Severity</th><th>Type</th><th>Title</th><th>Description</th><th>Element</th></tr>
        {issues}
    </table>
</body>
</html>",
        url = escape_html(report.url()),
        timestamp = report.timestamp().to_rfc3339(),
        elapsed = report.execution_time_ms(),
        total = summary.total_issues,
    )
}

#[async_trait]
impl Reporter for HtmlReporter {
    fn name(&self) -> &str {
        NAME
    }

    async fn render(&self, report: &Report, destination: &Path) -> Result<PathBuf, ReportError> {
        ensure_dir(destination)?;
        let output_path = artifact_path(report, destination, "html");
        save_text(&output_path, &render_html(report))?;
        info!("HTML report saved to {}", output_path.display());
        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::reporters::test_support::sample_report;

    #[test]
    fn escapes_report_content() {
        let html = render_html(&sample_report());
        assert!(html.contains("Image &lt;img src=&quot;a.png&quot;&gt; has no alt text"));
        assert!(html.contains("Add alt text &amp; captions"));
        assert!(html.contains("<td class=\"score\">88</td>"));
        assert!(html.contains("<li>high: 1</li>"));
        assert!(!html.contains("<img src"));
    }

    #[tokio::test]
    async fn writes_html_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = HtmlReporter
            .render(&sample_report(), dir.path())
            .await
            .unwrap();
        assert_eq!(path, dir.path().join("example.com_qa_report.html"));
        assert!(std::fs::read_to_string(path).unwrap().starts_with("<!DOCTYPE html>"));
    }
}
