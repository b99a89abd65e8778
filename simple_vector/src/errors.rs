use core::fmt;

/// Recoverable failures reported by [`SimpleVector`](crate::SimpleVector).
///
/// Broken preconditions (indexing past the end, popping an empty vector)
/// panic instead and never show up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A checked access was made at `index` while the vector held `len` elements.
    OutOfRange { index: usize, len: usize },
    /// The requested capacity does not fit in a valid allocation layout.
    CapacityOverflow,
    /// The allocator refused a buffer of `capacity` elements.
    AllocFailed { capacity: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index out of range: the len is {len} but the index is {index}")
            }
            Self::CapacityOverflow => f.write_str("capacity overflow"),
            Self::AllocFailed { capacity } => {
                write!(f, "memory allocation of {capacity} elements failed")
            }
        }
    }
}

impl core::error::Error for Error {}

pub type Result<T, E = Error> = core::result::Result<T, E>;
