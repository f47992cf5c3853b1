//! Common traits used across the codebase
//!
//! This module defines the interface shared by the list and map containers
//! so that helpers and tests can treat them uniformly.

pub mod collection;

// Re-export collection traits
pub use collection::{Container, is_empty_or_null, size_of};
