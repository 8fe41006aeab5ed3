/// Requested capacity for an empty `DynamicArray`.
///
/// Exists to pick the reserving constructor: `DynamicArray::with_reserve(reserve(10))`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReserveProxy {
    capacity: usize,
}

impl ReserveProxy {
    pub const fn new(capacity: usize) -> ReserveProxy {
        ReserveProxy { capacity }
    }

    #[inline(always)]
    pub const fn capacity(self) -> usize {
        self.capacity
    }
}

/// Shorthand for `ReserveProxy::new`.
pub const fn reserve(capacity: usize) -> ReserveProxy {
    ReserveProxy::new(capacity)
}
