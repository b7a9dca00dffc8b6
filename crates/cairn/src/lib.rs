//! Growable contiguous-storage array with explicit buffer management.
//!
//! [`GrowArray`] keeps its elements in a single owned heap slab sized by
//! `capacity`, of which the first `len` slots are live. Appends double
//! the capacity when the slab is full; positional insert and erase
//! rebuild the slab wholesale.
//!
//! # Architecture
//!
//! ```text
//! GrowArray<T>
//! ├── Buffer<T> (Box<[T]>, allocated to full capacity, default-filled)
//! └── len (length of the live prefix)
//! ```
//!
//! Every capacity-changing operation is a buffer transition: allocate
//! the replacement slab, populate it fully, then release the old one.
//! At no point does a container hold a partially populated buffer that
//! a caller can observe.
//!
//! # Safety
//!
//! All slab memory is eagerly initialised with `T::default()`. No
//! `MaybeUninit`, no `unsafe` — allocation failure surfaces as
//! [`ArrayError::AllocationFailed`] instead of undefined behaviour or
//! a process abort.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
mod buffer;
pub mod error;

// Public re-exports for the primary API surface.
pub use array::GrowArray;
pub use error::ArrayError;
