use crate::errors::AcquisitionError;
use crate::models::qa::{
    AccessibilityData, AccessibilityObservation, AcquisitionOptions, ElementRef,
    InteractiveElement, PerformanceData, Screenshot, Snapshot, Viewport,
};
use crate::services::provider::PageProvider;
use crate::utils::{normalize_url, sanitize_filename};
use async_trait::async_trait;
use std::collections::BTreeMap;

const CANNED_HTML: &str =
    r#"<html><body><h1>Test</h1><img src="test.jpg"><button>Click me</button></body></html>"#;

/// Returns the same canned page for every url. Used for dry runs and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticPageProvider {
    viewport: Viewport,
}

impl StaticPageProvider {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }
}

#[async_trait]
impl PageProvider for StaticPageProvider {
    async fn acquire(
        &self,
        url: &str,
        options: &AcquisitionOptions,
    ) -> Result<Snapshot, AcquisitionError> {
        let url = normalize_url(url)?;

        let accessibility = if options.analyze_accessibility {
            AccessibilityData {
                issues: vec![AccessibilityObservation {
                    kind: "missing_alt_text".to_string(),
                    element: ElementRef {
                        tag_name: Some("img".to_string()),
                        selector: Some("img:nth-of-type(1)".to_string()),
                    },
                    message: "Image missing alt text".to_string(),
                }],
            }
        } else {
            AccessibilityData::default()
        };

        let performance = if options.measure_performance {
            PerformanceData {
                score: 85.0,
                ..PerformanceData::default()
            }
        } else {
            PerformanceData::default()
        };

        let interactive_elements = if options.map_user_flows {
            vec![InteractiveElement {
                tag_name: "button".to_string(),
                selector: Some("button:nth-of-type(1)".to_string()),
                label: Some("Click me".to_string()),
            }]
        } else {
            Vec::new()
        };

        let screenshots = if options.take_screenshots {
            vec![Screenshot {
                label: "full_page".to_string(),
                path: format!("screenshots/{}.png", sanitize_filename(&url)),
            }]
        } else {
            Vec::new()
        };

        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), "text/html".to_string());

        Ok(Snapshot {
            url,
            title: "Test Page".to_string(),
            html: CANNED_HTML.to_string(),
            load_time_ms: 500.0,
            viewport: self.viewport,
            accessibility,
            performance,
            forms: Vec::new(),
            interactive_elements,
            screenshots,
            headers,
        })
    }
}
