//! Metadata source abstraction
//!
//! The exporter only needs three things from a source: proof that the
//! expected table and columns exist, every row in decision-date order, and a
//! way to release the connection.

use crate::domain::record::MetadataRecord;
use crate::domain::Result;
use async_trait::async_trait;

/// Read-only source of case metadata rows
#[async_trait]
pub trait MetadataSource: Send {
    /// Short human-readable description of the source, used in logs
    fn describe(&self) -> String;

    /// Check that the metadata table and all 13 columns exist
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Schema`](crate::domain::ExportError::Schema)
    /// naming the missing table or columns.
    async fn verify_schema(&mut self) -> Result<()>;

    /// Fetch all rows ordered by `saiban_nengappi` descending
    ///
    /// The comparison is the engine's ordering of the stored value. Rows
    /// with equal decision dates come back in whatever order the engine
    /// yields them.
    async fn fetch_ordered(&mut self) -> Result<Vec<MetadataRecord>>;

    /// Release the underlying connection
    ///
    /// Calling this more than once is a no-op.
    async fn close(&mut self) -> Result<()>;
}
