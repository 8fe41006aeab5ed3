use crate::DynamicArray;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

// Only the items in [0, len) take part in comparisons. `<=`, `>` and `>=` come from
// `partial_cmp`, so they agree with `<`.

impl<T> PartialEq for DynamicArray<T> where T: PartialEq {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        self.as_slice() == other.as_slice()
    }
}

impl<T> Eq for DynamicArray<T> where T: Eq {}

impl<T> PartialEq<[T]> for DynamicArray<T> where T: PartialEq {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T, const N: usize> PartialEq<[T; N]> for DynamicArray<T> where T: PartialEq {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<T> PartialEq<Vec<T>> for DynamicArray<T> where T: PartialEq {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> PartialOrd for DynamicArray<T> where T: PartialOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T> Ord for DynamicArray<T> where T: Ord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T> Hash for DynamicArray<T> where T: Hash {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}
