use chrono::{DateTime, Utc};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub unit: Option<String>,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl Diagnostic {
    pub fn new(level: DiagnosticLevel, unit: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            level,
            unit: unit.map(str::to_string),
            message: message.into(),
            at: Utc::now(),
        }
    }
}

/// Where the agent reports run diagnostics, including isolated unit failures.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, diagnostic: Diagnostic);
}

/// Forwards every diagnostic to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&self, diagnostic: Diagnostic) {
        let unit = diagnostic.unit.as_deref().unwrap_or("agent");
        match diagnostic.level {
            DiagnosticLevel::Info => log::info!("[{}] {}", unit, diagnostic.message),
            DiagnosticLevel::Warn => log::warn!("[{}] {}", unit, diagnostic.message),
            DiagnosticLevel::Error => log::error!("[{}] {}", unit, diagnostic.message),
        }
    }
}

/// Keeps diagnostics in memory so callers can inspect them after a run.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Diagnostic> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn errors(&self) -> Vec<Diagnostic> {
        self.entries()
            .into_iter()
            .filter(|d| d.level == DiagnosticLevel::Error)
            .collect()
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&self, diagnostic: Diagnostic) {
        match self.entries.lock() {
            Ok(mut entries) => entries.push(diagnostic),
            Err(poisoned) => poisoned.into_inner().push(diagnostic),
        }
    }
}

/// Appends timestamped entries to a log file, and forwards to `log` as well.
pub struct FileSink {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, diagnostic: &Diagnostic) -> io::Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(|p| p.into_inner());
        let timestamp = diagnostic.at.format("%Y-%m-%dT%H:%M:%S%.fZ");
        let log_entry = format!(
            "{}::{:?}::{}::{}\n",
            timestamp,
            diagnostic.level,
            diagnostic.unit.as_deref().unwrap_or("agent"),
            diagnostic.message
        );

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        file.write_all(log_entry.as_bytes())
    }
}

impl DiagnosticSink for FileSink {
    fn record(&self, diagnostic: Diagnostic) {
        if let Err(e) = self.append(&diagnostic) {
            log::warn!("failed to write diagnostic to {}: {}", self.path.display(), e);
        }
        LogSink.record(diagnostic);
    }
}
