//! Export orchestration and reporting

pub mod exporter;
pub mod summary;

pub use exporter::{export, ExportConfig, Exporter};
pub use summary::ExportSummary;
