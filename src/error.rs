use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error returned by checked element access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessError {
    /// The index is not smaller than the array length.
    OutOfRange { index: usize, len: usize },
}

impl Display for AccessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessError::OutOfRange { index, len } => write!(f, "Invalid index {}, array length is {}", index, len),
        }
    }
}

impl Error for AccessError {}
