//! Domain models for the line list
//!
//! This module contains the record types stored in the containers: patients
//! in the list, regions in the map, and the dates and categories they use.

pub mod date;
pub mod patient;
pub mod region;
pub mod types;

// Re-export commonly used types
pub use date::{Date, InvalidDate};
pub use patient::Patient;
pub use region::Region;
pub use types::{PatientStatus, Sex};

/// Key type of the region map
pub type RegionKey = String;
