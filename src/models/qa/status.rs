use crate::models::qa::report::Report;
use serde::{Deserialize, Serialize};
use std::fmt;

// QA run response status
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QaStatus {
    Completed,
    Error,
}

impl fmt::Display for QaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status_str = match self {
            QaStatus::Completed => "completed",
            QaStatus::Error => "error",
        };
        write!(f, "{}", status_str)
    }
}

// Response for the QA handler
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QaResponse {
    pub status: QaStatus,
    pub message: String,
    pub timestamp: String,
    pub report: Option<Report>,
}
