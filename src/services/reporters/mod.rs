// src/services/reporters/mod.rs
//! Report renderers. Each one turns a finished report into an artifact on disk.

pub mod html;
pub mod json;

pub use html::HtmlReporter;
pub use json::JsonReporter;

use crate::errors::ReportError;
use crate::models::config::QaConfig;
use crate::models::qa::Report;
use crate::utils::{host_of, sanitize_filename};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[async_trait]
pub trait Reporter: Send + Sync {
    fn name(&self) -> &str;

    /// Writes the artifact under `destination` and returns its location.
    async fn render(&self, report: &Report, destination: &Path) -> Result<PathBuf, ReportError>;
}

/// `<destination>/<host>_qa_report.<extension>`
pub(crate) fn artifact_path(report: &Report, destination: &Path, extension: &str) -> PathBuf {
    destination.join(format!(
        "{}_qa_report.{}",
        sanitize_filename(host_of(report.url())),
        extension
    ))
}

/// Reporters whose config category is enabled, JSON first.
pub fn default_reporters(config: &QaConfig) -> Vec<Arc<dyn Reporter>> {
    let mut reporters: Vec<Arc<dyn Reporter>> = Vec::new();
    if config.unit(json::NAME).enabled {
        reporters.push(Arc::new(JsonReporter));
    }
    if config.unit(html::NAME).enabled {
        reporters.push(Arc::new(HtmlReporter));
    }
    reporters
}
