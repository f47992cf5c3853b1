//! Logging utilities
//!
//! This module provides standardized log lines for file imports.

use std::path::Path;
use std::time::Duration;

/// Log the start of an import
///
/// # Arguments
/// * `kind` - What is being imported ("patients", "regions")
/// * `path` - File being read
pub fn log_import_start(kind: &str, path: &Path) {
    log::info!("Importing {kind} from {}", path.display());
}

/// Log a finished import
///
/// # Arguments
/// * `kind` - What was imported
/// * `path` - File that was read
/// * `count` - Number of records stored
/// * `elapsed` - Time spent reading and storing
pub fn log_import_complete(kind: &str, path: &Path, count: usize, elapsed: Duration) {
    log::info!(
        "Imported {count} {kind} from {} in {elapsed:?}",
        path.display()
    );
}

/// Log a date that was accepted but is not a real calendar day
///
/// # Arguments
/// * `line` - 1-based line number in the import file
/// * `field` - Name of the field
/// * `value` - The suspicious value
pub fn log_suspicious_date(line: usize, field: &str, value: &str) {
    log::warn!("Line {line}: {field} '{value}' is not a calendar date, keeping it as read");
}
