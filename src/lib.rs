//! Growable array built from an exclusively owned heap block.
//!
//! `OwnedArray` owns one fixed-length block and knows nothing about growth. `DynamicArray`
//! keeps a length and capacity on top of it and grows by allocating a new `OwnedArray`,
//! moving the items over and swapping it in.

#[macro_use]
mod logging;

/// Creates a `DynamicArray` from a list of items, or from a value and a length.
///
/// ```
/// let items = simplevec::dynarray![1, 2, 3];
/// assert_eq!(3, items.len());
///
/// let zeros = simplevec::dynarray![0u8; 4];
/// assert_eq!(&[0, 0, 0, 0], zeros.as_slice());
/// ```
#[macro_export]
macro_rules! dynarray {
    () => (
        $crate::DynamicArray::new()
    );
    ($value:expr; $len:expr) => (
        $crate::DynamicArray::with_value($len, $value)
    );
    ($($item:expr),+ $(,)?) => (
        $crate::DynamicArray::from([$($item),+])
    );
}

mod owned;
mod array;
mod cmp;
mod iter;
mod error;
mod reserve;

pub use owned::OwnedArray;
pub use array::DynamicArray;
pub use iter::IntoIter;
pub use error::AccessError;
pub use reserve::{reserve, ReserveProxy};

#[cfg(test)]
pub mod dropflag;
