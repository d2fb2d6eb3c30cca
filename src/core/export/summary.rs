//! Export summary and reporting

use std::path::PathBuf;
use std::time::Duration;

/// Summary of a completed export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Number of records written to the document
    pub record_count: usize,

    /// Description of the source that was read
    pub source: String,

    /// Path of the written document
    pub output_path: PathBuf,

    /// Size of the written document in bytes
    pub bytes_written: usize,

    /// SHA-256 of the written document
    pub checksum: String,

    /// Duration of the export
    pub duration: Duration,
}

impl ExportSummary {
    /// Create a summary for a written document
    pub fn new(
        record_count: usize,
        source: impl Into<String>,
        output_path: impl Into<PathBuf>,
        bytes_written: usize,
        checksum: impl Into<String>,
    ) -> Self {
        Self {
            record_count,
            source: source.into(),
            output_path: output_path.into(),
            bytes_written,
            checksum: checksum.into(),
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            records = self.record_count,
            source = %self.source,
            output = %self.output_path.display(),
            bytes = self.bytes_written,
            checksum = %self.checksum,
            duration_ms = self.duration.as_millis() as u64,
            "Export completed"
        );
    }

    /// Human-readable lines printed by the CLI
    pub fn report_lines(&self) -> Vec<String> {
        vec![
            format!("✅ Export completed: {} records", self.record_count),
            format!("📁 Output: {}", self.output_path.display()),
            format!("  Source: {}", self.source),
            format!("  Size: {} bytes", self.bytes_written),
            format!("  SHA-256: {}", self.checksum),
            format!("  Duration: {:.2}s", self.duration.as_secs_f64()),
        ]
    }
}
