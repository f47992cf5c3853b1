//! Error handling for the epidemiological reader.
//!
//! Two layers of errors live here. [`ContainerError`] is the status taxonomy
//! shared by the list and map containers; [`EpiReaderError`] covers everything
//! above them (file access, parsing, analytic failures).

use std::io;
use std::path::PathBuf;

pub mod util;

/// Status returned by a failed container operation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContainerError {
    /// Operation on a container that was never created (or already destroyed)
    #[error("container is not initialised")]
    NullContainer,

    /// Operation requires at least one element
    #[error("container is empty")]
    Empty,

    /// Rank outside the valid range for the operation
    #[error("invalid rank {rank} for container of size {size}")]
    InvalidRank { rank: usize, size: usize },

    /// Key not present in the map
    #[error("unknown key")]
    UnknownKey,

    /// Capacity exhausted and growth is disabled
    #[error("container is full (capacity {capacity})")]
    Full { capacity: usize },

    /// Allocation of backing storage failed
    #[error("out of memory while allocating container storage")]
    NoMemory,
}

/// Specialized error type for the reader and its analytic commands
#[derive(Debug, thiserror::Error)]
pub enum EpiReaderError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A container operation failed
    #[error("Container error: {0}")]
    Container(#[from] ContainerError),

    /// Input file does not exist
    #[error("File not found ({})", .path.display())]
    FileNotFound { path: PathBuf },

    /// Malformed record in an import file
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Infection chain loops back onto a patient already visited
    #[error("contamination cycle detected at patient {id}")]
    CycleDetected { id: i64 },

    /// No patient carries the requested id
    #[error("patient {id} not found")]
    PatientNotFound { id: i64 },

    /// Not enough records around a date to compute a growth rate
    #[error("there is no record for date <{date}>")]
    NoRecordForDate { date: String },

    /// User supplied an argument that cannot be interpreted
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl EpiReaderError {
    /// Create a parse error for a given (1-based) line
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Result type for reader operations
pub type Result<T> = std::result::Result<T, EpiReaderError>;
