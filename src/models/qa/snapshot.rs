use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Toggles passed to the page provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcquisitionOptions {
    pub take_screenshots: bool,
    pub analyze_accessibility: bool,
    pub measure_performance: bool,
    pub extract_forms: bool,
    pub map_user_flows: bool,
}

impl Default for AcquisitionOptions {
    fn default() -> Self {
        Self {
            take_screenshots: true,
            analyze_accessibility: true,
            measure_performance: true,
            extract_forms: true,
            map_user_flows: true,
        }
    }
}

impl AcquisitionOptions {
    /// Caller-supplied values win over the current ones.
    pub fn merge(self, overrides: &AcquisitionOverrides) -> Self {
        Self {
            take_screenshots: overrides.take_screenshots.unwrap_or(self.take_screenshots),
            analyze_accessibility: overrides
                .analyze_accessibility
                .unwrap_or(self.analyze_accessibility),
            measure_performance: overrides
                .measure_performance
                .unwrap_or(self.measure_performance),
            extract_forms: overrides.extract_forms.unwrap_or(self.extract_forms),
            map_user_flows: overrides.map_user_flows.unwrap_or(self.map_user_flows),
        }
    }
}

// Partial options as supplied by a caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcquisitionOverrides {
    pub take_screenshots: Option<bool>,
    pub analyze_accessibility: Option<bool>,
    pub measure_performance: Option<bool>,
    pub extract_forms: Option<bool>,
    pub map_user_flows: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementRef {
    pub tag_name: Option<String>,
    pub selector: Option<String>,
}

// Raw accessibility observation reported by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityObservation {
    #[serde(rename = "type")]
    pub kind: String,
    pub element: ElementRef,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityData {
    pub issues: Vec<AccessibilityObservation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceData {
    pub score: f64,
    pub first_contentful_paint_ms: Option<f64>,
    pub largest_contentful_paint_ms: Option<f64>,
    pub total_byte_weight: Option<u64>,
}

impl Default for PerformanceData {
    fn default() -> Self {
        Self {
            score: 100.0,
            first_contentful_paint_ms: None,
            largest_contentful_paint_ms: None,
            total_byte_weight: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormInfo {
    pub selector: Option<String>,
    pub action: Option<String>,
    pub method: Option<String>,
    pub field_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractiveElement {
    pub tag_name: String,
    pub selector: Option<String>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screenshot {
    pub label: String,
    pub path: String,
}

/// One captured page state. Shared read-only by every detector and
/// analyzer of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub url: String,
    pub title: String,
    pub html: String,
    pub load_time_ms: f64,
    pub viewport: Viewport,
    pub accessibility: AccessibilityData,
    pub performance: PerformanceData,
    pub forms: Vec<FormInfo>,
    pub interactive_elements: Vec<InteractiveElement>,
    #[serde(default)]
    pub screenshots: Vec<Screenshot>,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl Snapshot {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
