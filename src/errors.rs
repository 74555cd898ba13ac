use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// The page provider could not produce a snapshot.
#[derive(Debug, Error)]
pub enum AcquisitionError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("invalid url '{0}'")]
    InvalidUrl(String),
    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("recommendation engine failed: {0}")]
    Failed(String),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },
}

/// Fatal failure of a whole run. No report is produced.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("page acquisition failed for {url}")]
    Acquisition {
        url: String,
        #[source]
        source: AcquisitionError,
    },
    #[error("recommendation phase failed for {url}")]
    Recommendation {
        url: String,
        #[source]
        source: RecommendationError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Detector,
    Analyzer,
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitKind::Detector => write!(f, "detector"),
            UnitKind::Analyzer => write!(f, "analyzer"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitFailureCause {
    Failed(String),
    TimedOut(Duration),
    Panicked(String),
}

/// An isolated detector or analyzer failure. Never reaches the caller;
/// it is only reported to the diagnostic sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} {unit} failed: {}", describe(.cause))]
pub struct UnitFailure {
    pub unit: String,
    pub kind: UnitKind,
    pub cause: UnitFailureCause,
}

fn describe(cause: &UnitFailureCause) -> String {
    match cause {
        UnitFailureCause::Failed(reason) => reason.clone(),
        UnitFailureCause::TimedOut(budget) => format!("timed out after {:?}", budget),
        UnitFailureCause::Panicked(reason) => format!("panicked: {}", reason),
    }
}
