//! Container error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during array operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// Checked access with an index at or past the live prefix.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// The allocator could not satisfy a slab request.
    ///
    /// Surfaced from construction, growth, insert, erase, and deep
    /// copy. The container is left in its prior valid state — the old
    /// buffer is never released before the new one is confirmed
    /// allocated.
    AllocationFailed {
        /// Number of slots requested.
        requested: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range: {len} live elements")
            }
            Self::AllocationFailed { requested } => {
                write!(f, "allocation of {requested} slots failed")
            }
        }
    }
}

impl Error for ArrayError {}
