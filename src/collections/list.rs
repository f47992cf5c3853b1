//! Rank-addressed sequential container
//!
//! [`ArrayList`] keeps its elements in insertion order at contiguous ranks
//! `0..len`. Adding at a rank shifts every later element one slot towards the
//! end; removing shifts them back.

use std::slice;

use crate::collections::{GrowthPolicy, allocate, ensure_capacity};
use crate::common::traits::Container;
use crate::error::ContainerError;

/// Ordered, capacity-growing list of values
#[derive(Debug, Clone)]
pub struct ArrayList<T> {
    /// Elements at ranks `0..len`
    elements: Vec<T>,
    /// Logical capacity; `elements.len() <= capacity` at all times
    capacity: usize,
    /// Behaviour once `len == capacity`
    policy: GrowthPolicy,
}

impl<T> ArrayList<T> {
    /// Create a list whose backing storage holds `initial_capacity` elements
    ///
    /// # Errors
    /// Returns `NoMemory` if the storage cannot be allocated
    pub fn with_capacity(initial_capacity: usize) -> Result<Self, ContainerError> {
        Self::with_policy(initial_capacity, GrowthPolicy::Doubling)
    }

    /// Create a list with an explicit growth policy
    ///
    /// # Errors
    /// Returns `NoMemory` if the storage cannot be allocated
    pub fn with_policy(
        initial_capacity: usize,
        policy: GrowthPolicy,
    ) -> Result<Self, ContainerError> {
        Ok(Self {
            elements: allocate(initial_capacity)?,
            capacity: initial_capacity,
            policy,
        })
    }

    /// Insert `value` at `rank`, shifting `rank..len` one slot later
    ///
    /// # Errors
    /// * `InvalidRank` if `rank > len`
    /// * `Full` if the list is full and growth is disabled
    /// * `NoMemory` if growing the storage fails
    pub fn add(&mut self, rank: usize, value: T) -> Result<(), ContainerError> {
        let size = self.elements.len();
        if rank > size {
            return Err(ContainerError::InvalidRank { rank, size });
        }

        self.capacity = ensure_capacity(&mut self.elements, self.capacity, self.policy)?;
        self.elements.insert(rank, value);
        Ok(())
    }

    /// Append `value` after the last element
    ///
    /// # Errors
    /// Same as [`ArrayList::add`] apart from `InvalidRank`
    pub fn push(&mut self, value: T) -> Result<(), ContainerError> {
        self.add(self.elements.len(), value)
    }

    /// Remove and return the element at `rank`, shifting later elements back
    ///
    /// # Errors
    /// * `Empty` if the list holds nothing
    /// * `InvalidRank` if `rank >= len`
    pub fn remove(&mut self, rank: usize) -> Result<T, ContainerError> {
        self.check_rank(rank)?;
        Ok(self.elements.remove(rank))
    }

    /// Borrow the element at `rank`
    ///
    /// # Errors
    /// * `Empty` if the list holds nothing
    /// * `InvalidRank` if `rank >= len`
    pub fn get(&self, rank: usize) -> Result<&T, ContainerError> {
        self.check_rank(rank)?;
        Ok(&self.elements[rank])
    }

    /// Replace the element at `rank`, returning the previous one
    ///
    /// # Errors
    /// Same rank validation as [`ArrayList::get`]
    pub fn set(&mut self, rank: usize, value: T) -> Result<T, ContainerError> {
        self.check_rank(rank)?;
        Ok(std::mem::replace(&mut self.elements[rank], value))
    }

    /// Iterate over the elements in rank order
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Release the backing storage
    ///
    /// The list is consumed, so no handle to it survives.
    pub fn destroy(self) {
        log::trace!(
            "Releasing list storage ({} elements, capacity {})",
            self.elements.len(),
            self.capacity
        );
    }

    fn check_rank(&self, rank: usize) -> Result<(), ContainerError> {
        let size = self.elements.len();
        if size == 0 {
            return Err(ContainerError::Empty);
        }
        if rank >= size {
            return Err(ContainerError::InvalidRank { rank, size });
        }
        Ok(())
    }
}

impl<T> Container for ArrayList<T> {
    fn len(&self) -> usize {
        self.elements.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn clear(&mut self) {
        self.elements.clear();
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
