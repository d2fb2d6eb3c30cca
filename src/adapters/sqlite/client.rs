//! SQLite metadata source
//!
//! Opens the case-law database read-only with sqlx and reads the metadata
//! table in one ordered query.

use crate::adapters::source::MetadataSource;
use crate::domain::record::{MetadataRecord, SOURCE_COLUMNS};
use crate::domain::{ExportError, Result};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;
use std::path::{Path, PathBuf};

/// SQLite result code for "file is not a database"
const SQLITE_NOTADB: &str = "26";

/// Column as reported by `PRAGMA table_info`
#[derive(Debug, sqlx::FromRow)]
struct ColumnInfo {
    name: String,
}

/// Read-only connection to a SQLite metadata table
pub struct SqliteSource {
    conn: Option<SqliteConnection>,
    path: PathBuf,
    table: String,
}

impl SqliteSource {
    /// Open `path` read-only
    ///
    /// The file is never created. Column and table names are quoted when
    /// interpolated, but callers coming from configuration have already
    /// restricted `table` to a plain identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Connection`] if the file is missing or cannot
    /// be opened as a SQLite database.
    pub async fn open(path: impl AsRef<Path>, table: impl Into<String>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let table = table.into();

        if !path.is_file() {
            return Err(ExportError::Connection(format!(
                "Source database not found: {}",
                path.display()
            )));
        }

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .read_only(true)
            .create_if_missing(false);

        let conn = SqliteConnection::connect_with(&options)
            .await
            .map_err(|e| {
                ExportError::Connection(format!(
                    "Failed to open source database {}: {}",
                    path.display(),
                    e
                ))
            })?;

        tracing::debug!(source = %path.display(), table = %table, "Opened source database");

        Ok(Self {
            conn: Some(conn),
            path,
            table,
        })
    }

    fn connection(&mut self) -> Result<&mut SqliteConnection> {
        self.conn
            .as_mut()
            .ok_or_else(|| ExportError::Connection("Source connection already closed".to_string()))
    }

    /// `SELECT` for all 13 columns, newest decision date first
    ///
    /// Text columns are cast so every non-null value decodes as a string.
    /// Every column is aliased to its lowercase name, whatever case the
    /// table declares it in. The sort uses the stored column (qualified so
    /// the cast alias does not shadow it).
    fn select_sql(&self) -> String {
        let table = quote_ident(&self.table);
        let columns: Vec<String> = SOURCE_COLUMNS
            .iter()
            .map(|column| {
                let quoted = quote_ident(column);
                if *column == "id" {
                    format!("{quoted} AS {quoted}")
                } else {
                    format!("CAST({quoted} AS TEXT) AS {quoted}")
                }
            })
            .collect();

        format!(
            "SELECT {} FROM {table} ORDER BY {table}.{} DESC",
            columns.join(", "),
            quote_ident("saiban_nengappi")
        )
    }
}

#[async_trait]
impl MetadataSource for SqliteSource {
    fn describe(&self) -> String {
        format!("{} ({})", self.path.display(), self.table)
    }

    async fn verify_schema(&mut self) -> Result<()> {
        let query = format!("PRAGMA table_info({})", quote_ident(&self.table));
        let table = self.table.clone();
        let columns: Vec<ColumnInfo> = sqlx::query_as(&query)
            .fetch_all(self.connection()?)
            .await
            .map_err(|e| classify(e, ExportError::Schema))?;

        if columns.is_empty() {
            return Err(ExportError::Schema(format!(
                "Table '{table}' not found in source database"
            )));
        }

        // SQLite column names are case-insensitive
        let missing: Vec<&str> = SOURCE_COLUMNS
            .iter()
            .copied()
            .filter(|expected| {
                !columns
                    .iter()
                    .any(|c| c.name.eq_ignore_ascii_case(expected))
            })
            .collect();

        if !missing.is_empty() {
            return Err(ExportError::Schema(format!(
                "Table '{table}' is missing columns: {}",
                missing.join(", ")
            )));
        }

        tracing::debug!(table = %table, columns = columns.len(), "Source schema verified");
        Ok(())
    }

    async fn fetch_ordered(&mut self) -> Result<Vec<MetadataRecord>> {
        let sql = self.select_sql();
        let rows: Vec<MetadataRecord> = sqlx::query_as(&sql)
            .fetch_all(self.connection()?)
            .await
            .map_err(|e| classify(e, ExportError::Query))?;

        tracing::debug!(rows = rows.len(), "Fetched metadata rows");
        Ok(rows)
    }

    async fn close(&mut self) -> Result<()> {
        if let Some(conn) = self.conn.take() {
            conn.close().await.map_err(|e| {
                ExportError::Connection(format!("Failed to close source database: {e}"))
            })?;
            tracing::debug!(source = %self.path.display(), "Closed source database");
        }
        Ok(())
    }
}

/// Map a driver error to a domain error
///
/// A file that is not a database only surfaces on the first statement, so it
/// is reported as a connection failure regardless of the stage.
fn classify(err: sqlx::Error, otherwise: fn(String) -> ExportError) -> ExportError {
    if let sqlx::Error::Database(db_err) = &err {
        let not_a_database = db_err.code().as_deref() == Some(SQLITE_NOTADB)
            || db_err.message().contains("not a database");
        if not_a_database {
            return ExportError::Connection(db_err.message().to_string());
        }
        if db_err.message().contains("no such table") || db_err.message().contains("no such column")
        {
            return ExportError::Schema(db_err.message().to_string());
        }
    }
    otherwise(err.to_string())
}

/// Quote an SQL identifier with double quotes
fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}
