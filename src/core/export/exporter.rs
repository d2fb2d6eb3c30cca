//! Exporter - runs the read, normalize and write sequence
//!
//! One run opens the source, verifies its schema, reads every row in
//! decision-date order, releases the source, then writes the normalized
//! records as a single JSON array.

use crate::adapters::source::MetadataSource;
use crate::adapters::sqlite::SqliteSource;
use crate::config::schema::{DEFAULT_OUTPUT_PATH, DEFAULT_SOURCE_PATH, DEFAULT_TABLE};
use crate::config::HanreiConfig;
use crate::core::export::summary::ExportSummary;
use crate::core::output::{render_pretty, write_atomic};
use crate::core::transform::normalize_all;
use crate::core::verification::verify_written;
use crate::domain::record::MetadataRecord;
use crate::domain::Result;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Locations an export reads from and writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// SQLite database file
    pub source_path: PathBuf,

    /// Metadata table inside the database
    pub table: String,

    /// JSON document to (over)write
    pub destination_path: PathBuf,
}

impl ExportConfig {
    /// Export between two paths using the standard table name
    pub fn new(source_path: impl Into<PathBuf>, destination_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            table: DEFAULT_TABLE.to_string(),
            destination_path: destination_path.into(),
        }
    }

    /// Override the table name
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_PATH, DEFAULT_OUTPUT_PATH)
    }
}

impl From<&HanreiConfig> for ExportConfig {
    fn from(config: &HanreiConfig) -> Self {
        Self {
            source_path: config.source.path.clone(),
            table: config.source.table.clone(),
            destination_path: config.output.path.clone(),
        }
    }
}

/// Exports the metadata table to a JSON document
pub struct Exporter {
    config: ExportConfig,
}

impl Exporter {
    /// Create a new exporter
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Configuration this exporter runs with
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Execute the export against the configured SQLite database
    ///
    /// # Errors
    ///
    /// - [`ExportError::Connection`](crate::domain::ExportError::Connection)
    ///   if the database cannot be opened
    /// - [`ExportError::Schema`](crate::domain::ExportError::Schema) if the
    ///   table or a column is missing
    /// - [`ExportError::Write`](crate::domain::ExportError::Write) if the
    ///   document cannot be written
    ///
    /// Nothing is written unless every row was read successfully.
    pub async fn run(&self) -> Result<ExportSummary> {
        tracing::info!(
            source = %self.config.source_path.display(),
            table = %self.config.table,
            output = %self.config.destination_path.display(),
            "Starting export"
        );

        let mut source = SqliteSource::open(&self.config.source_path, &self.config.table).await?;
        self.export_from(&mut source).await
    }

    /// Execute the export against an already opened source
    ///
    /// The source is closed before the document is written, on success and
    /// on failure alike.
    pub async fn export_from<S: MetadataSource>(&self, source: &mut S) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let description = source.describe();

        let fetched = read_rows(source).await;
        if let Err(e) = source.close().await {
            if fetched.is_ok() {
                return Err(e);
            }
            tracing::warn!(error = %e, "Failed to close source after read error");
        }
        let rows = fetched?;

        let records = normalize_all(rows);
        let record_count = records.len();

        let document = render_pretty(&records)?;
        write_atomic(&self.config.destination_path, &document)?;
        let checksum = verify_written(&self.config.destination_path, &document)?;

        let summary = ExportSummary::new(
            record_count,
            description,
            &self.config.destination_path,
            document.len(),
            checksum,
        )
        .with_duration(start_time.elapsed());

        summary.log_summary();
        Ok(summary)
    }
}

async fn read_rows<S: MetadataSource>(source: &mut S) -> Result<Vec<MetadataRecord>> {
    source.verify_schema().await?;
    let rows = source.fetch_ordered().await?;
    tracing::info!(records = rows.len(), "Read metadata rows");
    Ok(rows)
}

/// Export `source` to `destination` and return the record count
///
/// # Examples
///
/// ```rust,no_run
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let count = hanrei_export::export("../data/hanrei.db", "data/metadata.json").await?;
/// println!("{count} records");
/// # Ok(())
/// # }
/// ```
pub async fn export(source: impl AsRef<Path>, destination: impl AsRef<Path>) -> Result<usize> {
    let config = ExportConfig::new(source.as_ref(), destination.as_ref());
    let summary = Exporter::new(config).run().await?;
    Ok(summary.record_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ExportError, ExportRecord};
    use async_trait::async_trait;
    use std::fs;
    use tempfile::TempDir;

    /// In-memory source that records how it was used
    #[derive(Default)]
    struct VecSource {
        rows: Vec<MetadataRecord>,
        schema_error: bool,
        fetch_error: bool,
        closed: bool,
    }

    #[async_trait]
    impl MetadataSource for VecSource {
        fn describe(&self) -> String {
            "memory".to_string()
        }

        async fn verify_schema(&mut self) -> Result<()> {
            if self.schema_error {
                return Err(ExportError::Schema("missing columns: soten".to_string()));
            }
            Ok(())
        }

        async fn fetch_ordered(&mut self) -> Result<Vec<MetadataRecord>> {
            if self.fetch_error {
                return Err(ExportError::Query("disk I/O error".to_string()));
            }
            Ok(self.rows.clone())
        }

        async fn close(&mut self) -> Result<()> {
            self.closed = true;
            Ok(())
        }
    }

    fn exporter_into(dir: &TempDir) -> Exporter {
        Exporter::new(ExportConfig::new(
            "unused.db",
            dir.path().join("data").join("metadata.json"),
        ))
    }

    #[test]
    fn test_export_config_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.source_path, PathBuf::from("../data/hanrei.db"));
        assert_eq!(config.table, "hanrei_metadata");
        assert_eq!(config.destination_path, PathBuf::from("data/metadata.json"));
    }

    #[test]
    fn test_export_config_from_file_config() {
        let mut file_config = HanreiConfig::default();
        file_config.source.table = "cases".to_string();
        let config = ExportConfig::from(&file_config);
        assert_eq!(config.table, "cases");
    }

    #[tokio::test]
    async fn test_export_writes_records_in_source_order() {
        let dir = TempDir::new().unwrap();
        let exporter = exporter_into(&dir);
        let mut source = VecSource {
            rows: vec![
                MetadataRecord {
                    decision_date: Some("2024-03-01".to_string()),
                    ..MetadataRecord::new(20)
                },
                MetadataRecord {
                    decision_date: Some("2023-01-01".to_string()),
                    ..MetadataRecord::new(10)
                },
            ],
            ..Default::default()
        };

        let summary = exporter.export_from(&mut source).await.unwrap();
        assert_eq!(summary.record_count, 2);
        assert!(source.closed);

        let written = fs::read(&exporter.config().destination_path).unwrap();
        let records: Vec<ExportRecord> = serde_json::from_slice(&written).unwrap();
        assert_eq!(records.iter().map(|r| r.id).collect::<Vec<_>>(), vec![20, 10]);
        assert_eq!(summary.bytes_written, written.len());
    }

    #[tokio::test]
    async fn test_schema_error_closes_source_and_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let exporter = exporter_into(&dir);
        let mut source = VecSource {
            schema_error: true,
            ..Default::default()
        };

        let result = exporter.export_from(&mut source).await;
        assert!(matches!(result, Err(ExportError::Schema(_))));
        assert!(source.closed);
        assert!(!exporter.config().destination_path.exists());
    }

    #[tokio::test]
    async fn test_fetch_error_keeps_previous_output() {
        let dir = TempDir::new().unwrap();
        let exporter = exporter_into(&dir);
        let destination = exporter.config().destination_path.clone();
        fs::create_dir_all(destination.parent().unwrap()).unwrap();
        fs::write(&destination, b"[]").unwrap();

        let mut source = VecSource {
            fetch_error: true,
            ..Default::default()
        };

        let result = exporter.export_from(&mut source).await;
        assert!(matches!(result, Err(ExportError::Query(_))));
        assert!(source.closed);
        assert_eq!(fs::read(&destination).unwrap(), b"[]");
    }

    #[tokio::test]
    async fn test_run_with_missing_database() {
        let dir = TempDir::new().unwrap();
        let exporter = Exporter::new(ExportConfig::new(
            dir.path().join("absent.db"),
            dir.path().join("metadata.json"),
        ));

        let result = exporter.run().await;
        assert!(matches!(result, Err(ExportError::Connection(_))));
        assert!(!dir.path().join("metadata.json").exists());
    }
}
