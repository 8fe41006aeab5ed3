use std::fmt::Debug;
use std::ptr;

/// Exclusive owner of a single fixed-length heap block of `T`.
///
/// The owner holds either one block or nothing. A block is never shared: moving the owner moves
/// the block, and `OwnedArray` does not implement `Clone`. A request for a zero-length block
/// produces an empty owner instead of a zero-length allocation.
///
/// There is no resizing here, `DynamicArray` builds growth on top of this by allocating a new
/// owner and swapping it in.
pub struct OwnedArray<T> {
    raw: Option<Box<[T]>>,
}

impl<T> OwnedArray<T> {
    /// Creates an owner with no block.
    pub const fn new() -> OwnedArray<T> {
        OwnedArray { raw: None }
    }

    /// Takes ownership of a block previously produced by `into_raw` or `Box::into_raw`.
    ///
    /// A null pointer produces an empty owner.
    ///
    /// # Safety
    ///
    /// The pointer must be null or come from a `Box<[T]>` that nothing else owns or frees.
    pub unsafe fn from_raw(raw: *mut [T]) -> OwnedArray<T> {
        if raw.is_null() {
            OwnedArray::new()
        } else {
            OwnedArray::from(Box::from_raw(raw))
        }
    }

    /// Returns true if a block is owned.
    #[inline(always)]
    pub fn is_some(&self) -> bool {
        self.raw.is_some()
    }

    /// Number of elements in the owned block, 0 when there is no block.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.raw.as_ref().map_or(0, |block| block.len())
    }

    /// Pointer to the first element, or null when there is no block.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.raw.as_ref().map_or(ptr::null(), |block| block.as_ptr())
    }

    /// Mutable pointer to the first element, or null when there is no block.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.raw.as_mut().map_or(ptr::null_mut(), |block| block.as_mut_ptr())
    }

    pub fn as_slice(&self) -> &[T] {
        match self.raw {
            Some(ref block) => &block[..],
            None => &[],
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self.raw {
            Some(ref mut block) => &mut block[..],
            None => &mut [],
        }
    }

    /// Returns the element at `index` without any bounds check.
    ///
    /// # Safety
    ///
    /// A block must be owned and `index` must be smaller than its length.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        &*self.as_ptr().add(index)
    }

    /// Returns the element at `index` mutably without any bounds check.
    ///
    /// # Safety
    ///
    /// A block must be owned and `index` must be smaller than its length.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        &mut *self.as_mut_ptr().add(index)
    }

    /// Gives up the block and leaves this owner empty.
    ///
    /// The returned block is no longer released by this owner.
    #[must_use = "dropping the released block frees it immediately"]
    pub fn release(&mut self) -> Option<Box<[T]>> {
        trace!("release block of {} items", self.len());
        self.raw.take()
    }

    /// Like `release`, but hands out a raw pointer, null when there was no block.
    ///
    /// Pass the pointer back to `from_raw` to free it.
    #[must_use = "the released block leaks unless passed back to `from_raw`"]
    pub fn into_raw(mut self) -> *mut [T] {
        match self.release() {
            Some(block) => Box::into_raw(block),
            None => ptr::slice_from_raw_parts_mut(ptr::null_mut(), 0),
        }
    }

    /// Moves the block into a new owner and leaves this one empty.
    pub fn take(&mut self) -> OwnedArray<T> {
        OwnedArray { raw: self.raw.take() }
    }

    /// Exchanges blocks with `other`. Never allocates.
    #[inline(always)]
    pub fn swap(&mut self, other: &mut OwnedArray<T>) {
        std::mem::swap(&mut self.raw, &mut other.raw);
    }
}

impl<T> OwnedArray<T> where T: Default {
    /// Allocates a block of `len` default values, or nothing if `len` is 0.
    pub fn with_len(len: usize) -> OwnedArray<T> {
        if len == 0 {
            return OwnedArray::new();
        }
        trace!("allocate block of {} items", len);
        OwnedArray {
            raw: Some(std::iter::repeat_with(T::default).take(len).collect()),
        }
    }
}

impl<T> Default for OwnedArray<T> {
    fn default() -> Self {
        OwnedArray::new()
    }
}

impl<T> From<Box<[T]>> for OwnedArray<T> {
    fn from(block: Box<[T]>) -> Self {
        if block.is_empty() {
            OwnedArray::new()
        } else {
            OwnedArray { raw: Some(block) }
        }
    }
}

impl<T> From<Option<Box<[T]>>> for OwnedArray<T> {
    fn from(block: Option<Box<[T]>>) -> Self {
        match block {
            Some(block) => OwnedArray::from(block),
            None => OwnedArray::new(),
        }
    }
}

impl<T> Debug for OwnedArray<T> where T: Debug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

#[cfg(test)]
mod owned_tests {
    use crate::OwnedArray;
    use crate::dropflag::{DropFlag, Droppable};
    use std::cell::RefCell;

    fn counted(flag: &DropFlag<usize>, count: i32) -> Box<[Droppable]> {
        (0..count).map(|data| Droppable::new(data, flag)).collect()
    }

    #[test]
    fn zero_length_is_empty() {
        let block = OwnedArray::<i32>::with_len(0);
        assert!(!block.is_some());
        assert_eq!(0, block.len());
        assert!(block.as_ptr().is_null());

        let block = OwnedArray::<i32>::from(Vec::new().into_boxed_slice());
        assert!(!block.is_some());
    }

    #[test]
    fn with_len_fills_defaults() {
        let block = OwnedArray::<String>::with_len(3);
        assert!(block.is_some());
        assert_eq!(3, block.len());
        for item in block.as_slice() {
            assert_eq!("", item.as_str());
        }
    }

    #[test]
    fn unchecked_access_is_base_plus_index() {
        let mut block = OwnedArray::from(vec![10, 20, 30].into_boxed_slice());
        let base = block.as_ptr();
        unsafe {
            assert_eq!(base, block.get_unchecked(0) as *const i32);
            assert_eq!(base.add(2), block.get_unchecked(2) as *const i32);
            assert_eq!(10, *block.get_unchecked(0));
            *block.get_unchecked_mut(1) = 21;
            assert_eq!(21, *block.get_unchecked(1));
        }
    }

    #[test]
    fn null_raw_pointer_is_empty() {
        let block = unsafe { OwnedArray::<u8>::from_raw(std::ptr::slice_from_raw_parts_mut(std::ptr::null_mut(), 0)) };
        assert!(!block.is_some());
    }

    #[test]
    fn raw_pointer_round_trip_keeps_items() {
        let block = OwnedArray::from(vec![1u8, 2, 3].into_boxed_slice());
        let raw = block.into_raw();
        let block = unsafe { OwnedArray::from_raw(raw) };
        assert_eq!(&[1, 2, 3], block.as_slice());
    }

    #[test]
    fn optional_block_conversion() {
        let block = OwnedArray::from(Some(vec![4, 5].into_boxed_slice()));
        assert_eq!(&[4, 5], block.as_slice());

        let block = OwnedArray::<i32>::from(None);
        assert!(!block.is_some());

        let block = OwnedArray::<i32>::from(Some(Vec::new().into_boxed_slice()));
        assert!(!block.is_some(), "zero-length block is stored as empty");
    }

    #[test]
    fn drop_releases_every_item_once() {
        let flag = DropFlag::new(RefCell::new(0));
        let block = OwnedArray::from(counted(&flag, 4));
        assert_eq!(0, *flag.borrow());
        std::mem::drop(block);
        assert_eq!(4, *flag.borrow());
    }

    #[test]
    fn release_hands_block_to_caller() {
        let flag = DropFlag::new(RefCell::new(0));
        let mut block = OwnedArray::from(counted(&flag, 2));
        let released = block.release().expect("block was owned");
        assert!(!block.is_some());

        std::mem::drop(block);
        assert_eq!(0, *flag.borrow(), "empty owner frees nothing");

        std::mem::drop(released);
        assert_eq!(2, *flag.borrow());
    }

    #[test]
    fn take_leaves_source_empty() {
        let mut source = OwnedArray::from(vec![5, 6].into_boxed_slice());
        let target = source.take();
        assert!(!source.is_some());
        assert_eq!(&[5, 6], target.as_slice());
    }

    #[test]
    fn assignment_frees_previous_block() {
        let flag = DropFlag::new(RefCell::new(0));
        let mut block = OwnedArray::from(counted(&flag, 3));
        assert!(block.is_some());
        block = OwnedArray::new();
        assert_eq!(3, *flag.borrow());
        assert!(!block.is_some());
    }

    #[test]
    fn swap_exchanges_blocks() {
        let mut a = OwnedArray::from(vec![1, 2].into_boxed_slice());
        let mut b = OwnedArray::new();
        let a_ptr = a.as_ptr();
        a.swap(&mut b);
        assert!(!a.is_some());
        assert_eq!(a_ptr, b.as_ptr());
        assert_eq!(&[1, 2], b.as_slice());
    }
}
