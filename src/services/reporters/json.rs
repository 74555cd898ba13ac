use crate::errors::ReportError;
use crate::models::qa::Report;
use crate::services::reporters::{artifact_path, Reporter};
use crate::utils::{ensure_dir, save_json};
use async_trait::async_trait;
use log::info;
use std::path::{Path, PathBuf};

pub const NAME: &str = "json_report";

/// Pretty-printed JSON dump of the whole report.
pub struct JsonReporter;

#[async_trait]
impl Reporter for JsonReporter {
    fn name(&self) -> &str {
        NAME
    }

    async fn render(&self, report: &Report, destination: &Path) -> Result<PathBuf, ReportError> {
        ensure_dir(destination)?;
        let output_path = artifact_path(report, destination, "json");
        save_json(&output_path, report)?;
        info!("JSON report saved to {}", output_path.display());
        Ok(output_path)
    }
}
