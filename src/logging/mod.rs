//! Logging and observability
//!
//! Structured logging with tracing:
//! - Configurable log levels, `RUST_LOG` override
//! - Console output on stderr
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use hanrei_export::logging::init_logging;
//! use hanrei_export::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(records = 42, "Export completed");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use hanrei_export::log_error_with_context;
/// use hanrei_export::domain::ExportError;
///
/// let error = ExportError::Schema("missing columns: soten".to_string());
/// log_error_with_context!(&error, "Export failed");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
