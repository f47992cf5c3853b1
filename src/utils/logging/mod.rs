//! Logging utilities for imports and console output
//!
//! This module provides the log helpers used by the importers and the fixed
//! texts the shell prints to the user.

pub mod console;
pub mod log;

// Re-export commonly used functions for convenience
pub use log::{log_import_complete, log_import_start, log_suspicious_date};
