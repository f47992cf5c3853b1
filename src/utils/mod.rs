//! Utility functions shared by the importers and the shell

pub mod logging;
pub mod text;

pub use logging::{log_import_complete, log_import_start, log_suspicious_date};
