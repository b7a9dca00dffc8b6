//! Test fixtures and instrumented element types for cairn development.
//!
//! Provides [`Probe`], an element type that reports its constructions
//! and drops to a shared [`ProbeCounters`], used to pin down when the
//! container releases removed elements.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod probe;

pub use probe::{Probe, ProbeCounters};
