//! SQLite integration
//!
//! This module provides the read-only SQLite source of case metadata.

pub mod client;

pub use client::SqliteSource;
