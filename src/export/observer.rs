//! Progress reporting for export runs.
//!
//! The pipeline never logs directly. It reports through an injected
//! [`ExportObserver`], which keeps every stage testable without a global
//! subscriber.

use std::fmt;
use std::sync::Mutex;

/// Severity of an observer message, mirroring a batch job's run log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Success,
    Warning,
    Failure,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Failure => "failure",
        };
        f.write_str(label)
    }
}

/// Receives progress messages from the export pipeline.
pub trait ExportObserver: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);

    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    fn success(&self, message: &str) {
        self.log(LogLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    fn failure(&self, message: &str) {
        self.log(LogLevel::Failure, message);
    }
}

/// Forwards observer messages to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ExportObserver for TracingObserver {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => tracing::debug!("{}", message),
            LogLevel::Info => tracing::info!("{}", message),
            LogLevel::Success => tracing::info!(outcome = "success", "{}", message),
            LogLevel::Warning => tracing::warn!("{}", message),
            LogLevel::Failure => tracing::error!("{}", message),
        }
    }
}

/// Keeps every message in memory, in order.
///
/// Useful for embedding the exporter in a host that shows a run log, and
/// for asserting on pipeline behavior in tests.
#[derive(Debug, Default)]
pub struct MemoryObserver {
    entries: Mutex<Vec<(LogLevel, String)>>,
}

impl MemoryObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded entries.
    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Messages recorded at `level`.
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message)
            .collect()
    }
}

impl ExportObserver for MemoryObserver {
    fn log(&self, level: LogLevel, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((level, message.to_string()));
        }
    }
}
