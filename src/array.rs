use crate::{AccessError, OwnedArray, ReserveProxy};
use std::fmt::Debug;
use std::ops::{Index, IndexMut, Range};

/// Growable array backed by a single `OwnedArray` block.
///
/// Slots `[0, len)` hold the array items. Slots `[len, capacity)` hold leftover values, either
/// defaults created by growth or items that were popped or cleared; they are not part of the
/// array and are dropped only when overwritten or when the block is released.
///
/// Growth never happens in place: a new block is allocated, the items are moved into it, and
/// the blocks are swapped. The old block stays intact until the swap.
pub struct DynamicArray<T> {
    storage: OwnedArray<T>,
    capacity: usize,
    len: usize,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array without allocating.
    pub const fn new() -> DynamicArray<T> {
        DynamicArray {
            storage: OwnedArray::new(),
            capacity: 0,
            len: 0,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the item at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be smaller than `len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "get_unchecked index < len");
        self.storage.get_unchecked(index)
    }

    /// Returns the item at `index` mutably without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be smaller than `len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len, "get_unchecked_mut index < len");
        self.storage.get_unchecked_mut(index)
    }

    /// Returns the item at `index`, or `AccessError::OutOfRange` if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, AccessError> {
        if index >= self.len {
            return Err(AccessError::OutOfRange { index, len: self.len });
        }
        Ok(unsafe { self.storage.get_unchecked(index) })
    }

    /// Returns the item at `index` mutably, or `AccessError::OutOfRange` if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, AccessError> {
        if index >= self.len {
            return Err(AccessError::OutOfRange { index, len: self.len });
        }
        Ok(unsafe { self.storage.get_unchecked_mut(index) })
    }

    /// Sets the length to 0. Capacity is kept and nothing is dropped.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Removes the last item from the array. The value stays in its slot until overwritten.
    ///
    /// Panics if the array is empty.
    pub fn pop_back(&mut self) {
        assert!(self.len > 0, "pop_back on empty array");
        self.len -= 1;
    }

    /// Exchanges contents with `other` without allocating.
    pub fn swap(&mut self, other: &mut DynamicArray<T>) {
        self.storage.swap(&mut other.storage);
        std::mem::swap(&mut self.capacity, &mut other.capacity);
        std::mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves the contents into a new array and leaves this one with length and capacity 0.
    pub fn take(&mut self) -> DynamicArray<T> {
        let mut taken = DynamicArray::new();
        self.swap(&mut taken);
        taken
    }

    /// Replaces the contents with those of `other`, leaving `other` empty.
    ///
    /// The previous contents of `self` are dropped.
    pub fn assign_from(&mut self, other: &mut DynamicArray<T>) {
        let mut taken = other.take();
        self.swap(&mut taken);
    }

    pub fn as_slice(&self) -> &[T] {
        &self.storage.as_slice()[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        &mut self.storage.as_mut_slice()[..len]
    }

    /// Begin and end positions of the items. For an empty array both are equal.
    pub fn as_ptr_range(&self) -> Range<*const T> {
        self.as_slice().as_ptr_range()
    }

    pub fn as_mut_ptr_range(&mut self) -> Range<*mut T> {
        self.as_mut_slice().as_mut_ptr_range()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Gives the block to the caller, trimmed to the array items.
    pub(crate) fn into_block(mut self) -> Option<Box<[T]>> {
        let len = self.len;
        self.storage.release().map(|block| {
            let mut items = block.into_vec();
            items.truncate(len);
            items.into_boxed_slice()
        })
    }
}

impl<T> DynamicArray<T> where T: Default {
    /// Creates an array of `len` default values with capacity `len`.
    pub fn with_len(len: usize) -> DynamicArray<T> {
        DynamicArray {
            storage: OwnedArray::with_len(len),
            capacity: len,
            len,
        }
    }

    /// Creates an empty array with at least the requested capacity.
    pub fn with_reserve(proxy: ReserveProxy) -> DynamicArray<T> {
        let mut array = DynamicArray::new();
        array.reserve(proxy.capacity());
        array
    }

    /// Makes sure capacity is at least `new_capacity`. Never shrinks.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity {
            trace!("reserve {} -> {}", self.capacity, new_capacity);
            self.reallocate(new_capacity);
        }
    }

    /// Changes the length to `new_size`.
    ///
    /// Below capacity only the length changes: slots that become part of the array keep
    /// whatever value they held, they are not reset to the default. At or above capacity a new
    /// block of `max(new_size, 2 * capacity)` is allocated, the items are moved over and the
    /// new slots hold default values.
    pub fn resize(&mut self, new_size: usize) {
        if new_size < self.capacity {
            self.len = new_size;
            return;
        }
        self.reallocate(new_size.max(self.capacity.saturating_mul(2)));
        self.len = new_size;
    }

    /// Appends `value`, growing through `resize` when the block is full.
    pub fn push_back(&mut self, value: T) {
        let index = self.len;
        self.resize(index + 1);
        self.storage.as_mut_slice()[index] = value;
    }

    /// Inserts `value` at `index`, shifting the items at and after it one slot toward the end.
    ///
    /// A full array doubles its capacity first (an array with capacity 0 grows to 1). Inserting
    /// at `len()` appends. Returns `index`. Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        assert!(index <= self.len, "insert index {} is out of range for length {}", index, self.len);
        let last = self.len;
        if self.len == self.capacity {
            self.resize(last + 1);
        } else {
            self.len += 1;
        }
        let shifted = &mut self.storage.as_mut_slice()[index..=last];
        shifted[last - index] = value;
        shifted.rotate_right(1);
        index
    }

    /// Removes the item at `index`, shifting everything after it one slot toward the front.
    ///
    /// The erased item is dropped and its slot at the old end holds a default value.
    /// Returns `index`, which now refers to the item that followed the erased one.
    /// Panics if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> usize {
        assert!(index < self.len, "erase index {} is out of range for length {}", index, self.len);
        let shifted = &mut self.storage.as_mut_slice()[index..self.len];
        shifted.rotate_left(1);
        if let Some(erased) = shifted.last_mut() {
            *erased = T::default();
        }
        self.len -= 1;
        index
    }

    /// Removes the last item and returns it, leaving a default value in its slot.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let len = self.len;
        Some(std::mem::take(&mut self.storage.as_mut_slice()[len]))
    }

    /// Allocates a block of `new_capacity` defaults, moves the items in and swaps it in place
    /// of the current block, which is dropped afterwards.
    fn reallocate(&mut self, new_capacity: usize) {
        debug!("reallocate {} items, capacity {} -> {}", self.len, self.capacity, new_capacity);
        let len = self.len;
        let mut block = OwnedArray::with_len(new_capacity);
        block.as_mut_slice()[..len].swap_with_slice(&mut self.storage.as_mut_slice()[..len]);
        self.storage.swap(&mut block);
        self.capacity = new_capacity;
    }
}

impl<T> DynamicArray<T> where T: Clone {
    /// Creates an array of `len` copies of `value` with capacity `len`.
    pub fn with_value(len: usize, value: T) -> DynamicArray<T> {
        DynamicArray {
            storage: OwnedArray::from(vec![value; len].into_boxed_slice()),
            capacity: len,
            len,
        }
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        DynamicArray::new()
    }
}

impl<T> Clone for DynamicArray<T> where T: Clone {
    /// Copies the items into a new block sized to `len()`.
    fn clone(&self) -> Self {
        DynamicArray::from(self.as_slice())
    }

    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(items: Vec<T>) -> Self {
        let len = items.len();
        DynamicArray {
            storage: OwnedArray::from(items.into_boxed_slice()),
            capacity: len,
            len,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(items: [T; N]) -> Self {
        DynamicArray::from(Vec::from(items))
    }
}

impl<T> From<&[T]> for DynamicArray<T> where T: Clone {
    fn from(items: &[T]) -> Self {
        DynamicArray::from(items.to_vec())
    }
}

impl<T> From<ReserveProxy> for DynamicArray<T> where T: Default {
    fn from(proxy: ReserveProxy) -> Self {
        DynamicArray::with_reserve(proxy)
    }
}

impl<T> std::iter::FromIterator<T> for DynamicArray<T> where T: Default {
    fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> Self {
        let mut array = DynamicArray::new();
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for DynamicArray<T> where T: Default {
    fn extend<I: IntoIterator<Item=T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

/// Panics when `index >= len()`. Use `get_unchecked` to skip the check or `at` to get an error.
impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Debug for DynamicArray<T> where T: Debug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
