use crate::models::config::UnitOptions;
use crate::models::qa::{Issue, IssueBuilder, IssueType, Severity, Snapshot};
use crate::services::detectors::Detector;
use crate::utils::{element_selector, parse_document, select};
use async_trait::async_trait;

pub const NAME: &str = "visual";

const DEFAULT_MIN_VIEWPORT_WIDTH: u64 = 320;

/// Flags rendering risks visible from the snapshot alone: a viewport too
/// narrow to lay the page out, and images without reserved dimensions.
pub struct VisualDetector {
    options: UnitOptions,
    min_viewport_width: u64,
}

impl VisualDetector {
    pub fn new(options: UnitOptions) -> Self {
        let min_viewport_width = options
            .u64_setting("min_viewport_width")
            .unwrap_or(DEFAULT_MIN_VIEWPORT_WIDTH);
        Self {
            options,
            min_viewport_width,
        }
    }
}

/// Selector and `src` of every image missing a width or height.
fn unsized_images(html: &str) -> Vec<(String, String)> {
    let document = parse_document(html);
    select(&document, "img")
        .into_iter()
        .filter(|img| img.value().attr("width").is_none() || img.value().attr("height").is_none())
        .map(|img| {
            let src = img.value().attr("src").unwrap_or_default().to_string();
            (element_selector(img), src)
        })
        .collect()
}

fn with_screenshot(builder: IssueBuilder, snapshot: &Snapshot) -> IssueBuilder {
    match snapshot.screenshots.first() {
        Some(screenshot) => builder.screenshot_path(screenshot.path.clone()),
        None => builder,
    }
}

#[async_trait]
impl Detector for VisualDetector {
    fn name(&self) -> &str {
        NAME
    }

    fn is_enabled(&self) -> bool {
        self.options.enabled
    }

    async fn detect(&self, snapshot: &Snapshot) -> anyhow::Result<Vec<Issue>> {
        let mut issues = Vec::new();

        if u64::from(snapshot.viewport.width) < self.min_viewport_width {
            let builder = Issue::builder(
                IssueType::VisualRegression,
                Severity::High,
                "Viewport Too Narrow",
                format!(
                    "Page was captured at {}px wide, below the supported minimum of {}px",
                    snapshot.viewport.width, self.min_viewport_width
                ),
            )
            .step(format!("Navigate to {}", snapshot.url))
            .step(format!(
                "Resize the viewport to {}x{}",
                snapshot.viewport.width, snapshot.viewport.height
            ))
            .expected_behavior(format!(
                "Layout supports widths from {}px",
                self.min_viewport_width
            ))
            .actual_behavior(format!("Viewport width {}px", snapshot.viewport.width))
            .confidence(0.6)
            .metadata("viewport_width", snapshot.viewport.width);
            issues.push(with_screenshot(builder, snapshot).build());
        }

        for (selector, src) in unsized_images(&snapshot.html) {
            let builder = Issue::builder(
                IssueType::VisualRegression,
                Severity::Low,
                "Image Without Reserved Dimensions",
                "Image has no width/height attributes and may shift the layout while loading",
            )
            .element_selector(selector.clone())
            .step(format!("Navigate to {}", snapshot.url))
            .step(format!("Watch element {} while the page loads", selector))
            .expected_behavior("Images reserve their space before loading")
            .actual_behavior("Surrounding content moves once the image loads")
            .confidence(0.5)
            .metadata("src", src);
            issues.push(with_screenshot(builder, snapshot).build());
        }

        Ok(issues)
    }
}
