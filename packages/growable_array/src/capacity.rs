/// A request for a number of allocated slots, as opposed to a number of items.
///
/// Passing a `CapacityRequest` where a count would otherwise be ambiguous makes it explicit
/// that the slots are reserved rather than filled:
///
/// ```
/// use growable_array::{CapacityRequest, GrowableArray};
///
/// // Three default items.
/// let filled = GrowableArray::<u32>::with_len(3);
/// assert_eq!(filled.len(), 3);
///
/// // Room for three items, none present yet.
/// let reserved = GrowableArray::<u32>::from(CapacityRequest::new(3));
/// assert_eq!(reserved.len(), 0);
/// assert_eq!(reserved.capacity(), 3);
/// ```
///
/// A bare `usize` converts into a request, so [`GrowableArray::reserve()`][1] accepts either.
///
/// [1]: crate::GrowableArray::reserve
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CapacityRequest {
    capacity: usize,
}

impl CapacityRequest {
    /// Creates a request for `capacity` allocated slots.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The number of slots requested.
    #[must_use]
    pub const fn capacity(self) -> usize {
        self.capacity
    }
}

impl From<usize> for CapacityRequest {
    fn from(capacity: usize) -> Self {
        Self::new(capacity)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(CapacityRequest: Send, Sync, Copy);

    #[test]
    fn new_keeps_value() {
        assert_eq!(CapacityRequest::new(42).capacity(), 42);
        assert_eq!(CapacityRequest::default().capacity(), 0);
    }

    #[test]
    fn from_usize_matches_new() {
        assert_eq!(CapacityRequest::from(7), CapacityRequest::new(7));
    }
}
