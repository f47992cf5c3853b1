//! Standardized container traits
//!
//! Both storage containers share size, capacity and clearing semantics. A
//! container that has not been created yet is represented by `None`; the
//! helpers at the bottom of this module give such a missing handle the same
//! behaviour the containers promise for a null handle.

use crate::error::ContainerError;

/// Core trait for capacity-managed containers
pub trait Container {
    /// Number of stored elements (or key/value pairs)
    fn len(&self) -> usize;

    /// Number of elements the backing storage can hold before growing
    fn capacity(&self) -> usize;

    /// Reset the size to zero while keeping the backing storage
    fn clear(&mut self);

    /// Check whether the container holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Size of a possibly missing container
///
/// # Errors
/// Returns [`ContainerError::NullContainer`] when `container` is `None`
pub fn size_of<C: Container>(container: Option<&C>) -> Result<usize, ContainerError> {
    container
        .map(Container::len)
        .ok_or(ContainerError::NullContainer)
}

/// Emptiness check that treats a missing container as empty
#[must_use]
pub fn is_empty_or_null<C: Container>(container: Option<&C>) -> bool {
    container.is_none_or(Container::is_empty)
}
