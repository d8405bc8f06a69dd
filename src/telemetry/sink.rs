//! Append-only telemetry log
//!
//! Each append is a single self-contained write; overlapping appends are
//! left unsynchronized by design. No retry, no buffering, no batching.

use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use super::types::TelemetryEvent;
use crate::types::Result;

/// Result of a telemetry append, as reported to the HTTP caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// Event written to the log
    Received,
    /// Write failed; the error was logged internally and the event dropped
    LoggedWithError,
}

impl AppendOutcome {
    /// Status string for the response body
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::LoggedWithError => "logged_with_error",
        }
    }
}

/// File-backed telemetry sink
pub struct TelemetrySink {
    path: PathBuf,
}

impl TelemetrySink {
    /// Create a sink backed by the given log path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The log file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one event as a JSON line, creating the log file if absent
    ///
    /// Soft-fail policy: any I/O failure (unwritable path, path is a
    /// directory, disk full) is logged and reported as `LoggedWithError`
    /// instead of an error. Applied uniformly to every telemetry failure.
    pub async fn append(&self, event: &TelemetryEvent) -> AppendOutcome {
        match self.try_append(event).await {
            Ok(()) => {
                debug!(event = %event.event, "Telemetry event appended");
                AppendOutcome::Received
            }
            Err(e) => {
                warn!(
                    "Telemetry append to {} failed: {}",
                    self.path.display(),
                    e
                );
                AppendOutcome::LoggedWithError
            }
        }
    }

    async fn try_append(&self, event: &TelemetryEvent) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let mut line = serde_json::to_string(event)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::types::validate_telemetry;
    use tempfile::TempDir;

    fn event(name: &str) -> TelemetryEvent {
        let body = format!(r#"{{"event": "{}", "details": {{"foo": "bar"}}}}"#, name);
        validate_telemetry(body.as_bytes()).unwrap()
    }

    #[tokio::test]
    async fn test_append_creates_file_and_writes_one_line() {
        let dir = TempDir::new().unwrap();
        let sink = TelemetrySink::new(dir.path().join("telemetry.log"));

        assert_eq!(sink.append(&event("test_event")).await, AppendOutcome::Received);

        let content = std::fs::read_to_string(sink.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("test_event"));
        assert!(lines[0].contains("\"foo\":\"bar\""));
    }

    #[tokio::test]
    async fn test_sequential_appends_preserve_order() {
        let dir = TempDir::new().unwrap();
        let sink = TelemetrySink::new(dir.path().join("telemetry.log"));

        for i in 0..5 {
            let name = format!("event_{}", i);
            assert_eq!(sink.append(&event(&name)).await, AppendOutcome::Received);
        }

        let content = std::fs::read_to_string(sink.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 5);
        for (i, line) in lines.iter().enumerate() {
            let parsed: TelemetryEvent = serde_json::from_str(line).unwrap();
            assert_eq!(parsed.event, format!("event_{}", i));
        }
    }

    #[tokio::test]
    async fn test_append_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs/nested/telemetry.log");
        let sink = TelemetrySink::new(path.clone());

        assert_eq!(sink.append(&event("boot")).await, AppendOutcome::Received);
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_append_to_directory_path_soft_fails() {
        let dir = TempDir::new().unwrap();
        // The log path itself is a directory; the append must degrade,
        // not error
        let sink = TelemetrySink::new(dir.path().to_path_buf());

        assert_eq!(
            sink.append(&event("doomed")).await,
            AppendOutcome::LoggedWithError
        );
    }
}
