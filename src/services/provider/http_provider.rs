use crate::errors::AcquisitionError;
use crate::models::config::ProviderConfig;
use crate::models::qa::{
    AccessibilityData, AccessibilityObservation, AcquisitionOptions, ElementRef, FormInfo,
    InteractiveElement, PerformanceData, Snapshot,
};
use crate::services::provider::PageProvider;
use crate::utils::{
    count_elements, css, element_selector, element_text, extract_title, normalize_url,
    parse_document, select,
};
use async_trait::async_trait;
use log::info;
use reqwest::Client;
use scraper::Html;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Fetches the raw page over HTTP and derives the snapshot from its markup.
/// Nothing is rendered, so screenshots are never produced.
pub struct HttpPageProvider {
    client: Client,
    config: ProviderConfig,
}

impl HttpPageProvider {
    pub fn new(config: ProviderConfig) -> Result<Self, AcquisitionError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| AcquisitionError::Other(format!("failed to build http client: {}", e)))?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl PageProvider for HttpPageProvider {
    async fn acquire(
        &self,
        url: &str,
        options: &AcquisitionOptions,
    ) -> Result<Snapshot, AcquisitionError> {
        let url = normalize_url(url)?;
        info!("Fetching {}", url);

        let started = Instant::now();
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| AcquisitionError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AcquisitionError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let headers: BTreeMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();

        let html = response
            .text()
            .await
            .map_err(|source| AcquisitionError::Request {
                url: url.clone(),
                source,
            })?;
        let load_time_ms = started.elapsed().as_secs_f64() * 1000.0;

        Ok(snapshot_from_markup(
            url,
            html,
            load_time_ms,
            headers,
            &self.config,
            options,
        ))
    }
}

/// 100 up to one second, one point lost per further 100 ms.
pub fn score_from_load_time(load_time_ms: f64) -> f64 {
    (100.0 - ((load_time_ms - 1000.0).max(0.0) / 100.0)).clamp(0.0, 100.0)
}

pub fn snapshot_from_markup(
    url: String,
    html: String,
    load_time_ms: f64,
    headers: BTreeMap<String, String>,
    config: &ProviderConfig,
    options: &AcquisitionOptions,
) -> Snapshot {
    let document = parse_document(&html);

    let accessibility = if options.analyze_accessibility {
        AccessibilityData {
            issues: accessibility_observations(&document),
        }
    } else {
        AccessibilityData::default()
    };

    let performance = if options.measure_performance {
        PerformanceData {
            score: score_from_load_time(load_time_ms),
            total_byte_weight: Some(html.len() as u64),
            ..PerformanceData::default()
        }
    } else {
        PerformanceData::default()
    };

    let forms = if options.extract_forms {
        extract_forms(&document)
    } else {
        Vec::new()
    };

    let interactive_elements = if options.map_user_flows {
        interactive_elements(&document)
    } else {
        Vec::new()
    };

    Snapshot {
        title: extract_title(&document).unwrap_or_default(),
        url,
        load_time_ms,
        viewport: config.viewport,
        accessibility,
        performance,
        forms,
        interactive_elements,
        screenshots: Vec::new(),
        headers,
        html,
    }
}

fn accessibility_observations(document: &Html) -> Vec<AccessibilityObservation> {
    let mut observations: Vec<AccessibilityObservation> = select(document, "img")
        .into_iter()
        .filter(|img| img.value().attr("alt").is_none())
        .map(|img| AccessibilityObservation {
            kind: "missing_alt_text".to_string(),
            element: ElementRef {
                tag_name: Some("img".to_string()),
                selector: Some(element_selector(img)),
            },
            message: "Image missing alt text".to_string(),
        })
        .collect();

    let h1_count = count_elements(document, "h1");
    if h1_count != 1 {
        observations.push(AccessibilityObservation {
            kind: "heading_structure".to_string(),
            element: ElementRef {
                tag_name: Some("h1".to_string()),
                selector: None,
            },
            message: format!("Page has {} <h1> elements, expected exactly one", h1_count),
        });
    }

    observations
}

fn extract_forms(document: &Html) -> Vec<FormInfo> {
    let fields = css("input, select, textarea");
    select(document, "form")
        .into_iter()
        .map(|form| FormInfo {
            selector: Some(element_selector(form)),
            action: form.value().attr("action").map(str::to_string),
            method: form.value().attr("method").map(str::to_ascii_lowercase),
            field_count: form.select(&fields).count(),
        })
        .collect()
}

fn interactive_elements(document: &Html) -> Vec<InteractiveElement> {
    let label_of = |element: scraper::ElementRef<'_>| {
        let attrs = element.value();
        attrs
            .attr("aria-label")
            .or_else(|| attrs.attr("title"))
            .or_else(|| attrs.attr("value"))
            .map(str::to_string)
            .or_else(|| element_text(element))
    };

    let mut elements = Vec::new();
    for (name, selector) in [
        ("a", "a[href]"),
        ("button", "button"),
        ("select", "select"),
        ("textarea", "textarea"),
    ] {
        for element in select(document, selector) {
            elements.push(InteractiveElement {
                tag_name: name.to_string(),
                selector: Some(element_selector(element)),
                label: label_of(element),
            });
        }
    }
    for input in select(document, "input") {
        let attrs = input.value();
        if attrs.attr("type").is_some_and(|t| t.eq_ignore_ascii_case("hidden")) {
            continue;
        }
        elements.push(InteractiveElement {
            tag_name: "input".to_string(),
            selector: Some(element_selector(input)),
            label: attrs
                .attr("aria-label")
                .or_else(|| attrs.attr("placeholder"))
                .map(str::to_string),
        });
    }
    elements
}
