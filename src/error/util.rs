//! Utility functions for error handling
//!
//! Helpers that open input files and translate io failures into
//! [`EpiReaderError`] values carrying the offending path.

use std::fs;
use std::io::{self, BufReader};
use std::path::Path;

use crate::error::{EpiReaderError, Result};

/// Safely open a file for buffered reading
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for log context)
///
/// # Returns
/// * `Result<BufReader<fs::File>>` - The opened file or a detailed error
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<BufReader<fs::File>> {
    if !path.exists() {
        log::warn!("File needed for {purpose} does not exist: {}", path.display());
        return Err(EpiReaderError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    if !path.is_file() {
        return Err(EpiReaderError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Expected a file for {purpose}: {}", path.display()),
        )));
    }

    match fs::File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::PermissionDenied => {
                    "Permission denied - check file permissions".to_string()
                }
                io::ErrorKind::NotFound => {
                    return Err(EpiReaderError::FileNotFound {
                        path: path.to_path_buf(),
                    });
                }
                _ => format!("Failed to open file for {purpose}"),
            };

            Err(EpiReaderError::Io(io::Error::new(
                e.kind(),
                format!("{context}: {} ({e})", path.display()),
            )))
        }
    }
}

/// Create (or truncate) a file for writing
pub fn safe_create_file(path: &Path, purpose: &str) -> Result<fs::File> {
    fs::File::create(path).map_err(|e| {
        EpiReaderError::Io(io::Error::new(
            e.kind(),
            format!("Failed to create {} for {purpose}: {e}", path.display()),
        ))
    })
}
