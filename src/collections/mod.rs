//! Array-backed storage containers
//!
//! This module provides the two containers every command works on: an
//! ordered, rank-addressed [`ArrayList`] holding patients and a
//! [`SortedArrayMap`] holding regions keyed by name. Both keep their elements
//! in one contiguous buffer and double its capacity when it fills up, unless
//! growth is disabled through [`GrowthPolicy::Fixed`].

pub mod list;
pub mod sorted_map;

pub use list::ArrayList;
pub use sorted_map::SortedArrayMap;

use crate::error::ContainerError;

/// What a container does once size reaches capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowthPolicy {
    /// Double the capacity (a zero capacity grows to one)
    #[default]
    Doubling,
    /// Never grow; insertions into a full container fail with `Full`
    Fixed,
}

impl GrowthPolicy {
    /// Capacity to grow to from `current`
    ///
    /// # Errors
    /// `Full` for a fixed policy, `NoMemory` if doubling overflows
    pub fn next_capacity(self, current: usize) -> Result<usize, ContainerError> {
        match self {
            Self::Doubling => current
                .checked_mul(2)
                .map(|doubled| doubled.max(1))
                .ok_or(ContainerError::NoMemory),
            Self::Fixed => Err(ContainerError::Full { capacity: current }),
        }
    }
}

/// Allocate room for `capacity` elements in a fresh buffer
pub(crate) fn allocate<T>(capacity: usize) -> Result<Vec<T>, ContainerError> {
    let mut storage = Vec::new();
    storage
        .try_reserve_exact(capacity)
        .map_err(|_| ContainerError::NoMemory)?;
    Ok(storage)
}

/// Make room for one more element, growing the buffer when it is full
///
/// Returns the (possibly new) logical capacity. Existing elements are kept
/// in place; a failed reallocation leaves the buffer untouched.
pub(crate) fn ensure_capacity<T>(
    storage: &mut Vec<T>,
    capacity: usize,
    policy: GrowthPolicy,
) -> Result<usize, ContainerError> {
    if storage.len() < capacity {
        return Ok(capacity);
    }

    let new_capacity = policy.next_capacity(capacity)?;
    storage
        .try_reserve_exact(new_capacity - storage.len())
        .map_err(|_| ContainerError::NoMemory)?;

    log::trace!("Grew container storage from {capacity} to {new_capacity} slots");
    Ok(new_capacity)
}
