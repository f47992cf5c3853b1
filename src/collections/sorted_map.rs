//! Sorted associative container over a growable array
//!
//! [`SortedArrayMap`] stores key/value pairs in a single buffer kept in
//! ascending key order. Lookups use binary search; inserting a new key shifts
//! every larger entry one slot later so the order is never broken.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::slice;

use crate::collections::{GrowthPolicy, allocate, ensure_capacity};
use crate::common::traits::Container;
use crate::error::ContainerError;

/// Map with unique keys stored in ascending order
#[derive(Debug, Clone)]
pub struct SortedArrayMap<K, V> {
    /// Pairs sorted by key, no duplicates
    entries: Vec<(K, V)>,
    capacity: usize,
    policy: GrowthPolicy,
}

impl<K: Ord, V> SortedArrayMap<K, V> {
    /// Create a map whose backing storage holds `initial_capacity` pairs
    ///
    /// # Errors
    /// Returns `NoMemory` if the storage cannot be allocated
    pub fn with_capacity(initial_capacity: usize) -> Result<Self, ContainerError> {
        Self::with_policy(initial_capacity, GrowthPolicy::Doubling)
    }

    /// Create a map with an explicit growth policy
    ///
    /// # Errors
    /// Returns `NoMemory` if the storage cannot be allocated
    pub fn with_policy(
        initial_capacity: usize,
        policy: GrowthPolicy,
    ) -> Result<Self, ContainerError> {
        Ok(Self {
            entries: allocate(initial_capacity)?,
            capacity: initial_capacity,
            policy,
        })
    }

    /// Binary search for `key`
    ///
    /// Returns `Ok(index)` of the matching entry, or `Err(index)` of the first
    /// entry whose key is greater than `key` (the insertion point).
    fn search<Q>(&self, key: &Q) -> Result<usize, usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut start = 0;
        let mut end = self.entries.len();

        while start < end {
            let middle = start + (end - start) / 2;
            match self.entries[middle].0.borrow().cmp(key) {
                Ordering::Equal => return Ok(middle),
                Ordering::Greater => end = middle,
                Ordering::Less => start = middle + 1,
            }
        }

        Err(start)
    }

    /// Associate `value` with `key`
    ///
    /// An existing key has its value replaced in place and the previous value
    /// is returned; a new key is inserted at its ordered position.
    ///
    /// # Errors
    /// * `Full` if a new key does not fit and growth is disabled
    /// * `NoMemory` if growing the storage fails
    pub fn put(&mut self, key: K, value: V) -> Result<Option<V>, ContainerError> {
        match self.search(&key) {
            Ok(index) => Ok(Some(std::mem::replace(&mut self.entries[index].1, value))),
            Err(position) => {
                self.capacity = ensure_capacity(&mut self.entries, self.capacity, self.policy)?;
                self.entries.insert(position, (key, value));
                Ok(None)
            }
        }
    }

    /// Remove `key` and return its value
    ///
    /// # Errors
    /// * `Empty` if the map holds nothing
    /// * `UnknownKey` if `key` is absent
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V, ContainerError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let index = self.locate(key)?;
        Ok(self.entries.remove(index).1)
    }

    /// Borrow the value stored under `key`
    ///
    /// # Errors
    /// * `Empty` if the map holds nothing
    /// * `UnknownKey` if `key` is absent
    pub fn get<Q>(&self, key: &Q) -> Result<&V, ContainerError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let index = self.locate(key)?;
        Ok(&self.entries[index].1)
    }

    /// Check whether `key` is present
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).is_ok()
    }

    /// Snapshot of the keys in ascending order
    #[must_use]
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.entries.iter().map(|(key, _)| key.clone()).collect()
    }

    /// Snapshot of the values in ascending key order
    #[must_use]
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.entries.iter().map(|(_, value)| value.clone()).collect()
    }

    /// Iterate over the pairs in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Release the backing storage
    pub fn destroy(self) {
        log::trace!(
            "Releasing map storage ({} entries, capacity {})",
            self.entries.len(),
            self.capacity
        );
    }

    fn locate<Q>(&self, key: &Q) -> Result<usize, ContainerError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if self.entries.is_empty() {
            return Err(ContainerError::Empty);
        }
        self.search(key).map_err(|_| ContainerError::UnknownKey)
    }
}

impl<K, V> Container for SortedArrayMap<K, V> {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a, K, V> IntoIterator for &'a SortedArrayMap<K, V> {
    type Item = &'a (K, V);
    type IntoIter = slice::Iter<'a, (K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
