/// A capacity hint: asks a [`SimpleVector`](crate::SimpleVector) to be
/// created with room for `capacity` elements but no elements in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReserveRequest {
    capacity: usize,
}

impl ReserveRequest {
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The number of slots the new vector should allocate.
    #[must_use]
    pub const fn capacity(self) -> usize {
        self.capacity
    }
}

/// Builds a [`ReserveRequest`] for `capacity` elements.
///
/// # Examples
///
/// ```
/// use simple_vector::{reserve, SimpleVector};
///
/// let v: SimpleVector<u8> = SimpleVector::from(reserve(16));
/// assert_eq!(v.capacity(), 16);
/// assert!(v.is_empty());
/// ```
#[must_use]
pub const fn reserve(capacity: usize) -> ReserveRequest {
    ReserveRequest::new(capacity)
}
