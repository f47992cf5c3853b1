//! A Rust library for importing and analysing epidemiological line-list data
//! with a sequential list and a sorted map as the only storage.

pub mod algorithm;
pub mod collections;
pub mod common;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod shell;
pub mod utils;

// Re-export the most common types for easier use
// Containers
pub use collections::{ArrayList, GrowthPolicy, SortedArrayMap};
pub use common::traits::{Container, is_empty_or_null, size_of};

// Core types
pub use config::EpiReaderConfig;
pub use error::{ContainerError, EpiReaderError, Result};
pub use models::{Date, Patient, PatientStatus, Region, RegionKey, Sex};

// Import and shell
pub use loader::{import_patients, import_regions, read_patients, read_regions};
pub use shell::{Command, Session};
