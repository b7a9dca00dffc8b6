//! Benchmark workloads for the cairn container.
//!
//! Provides deterministic value generation and pre-built arrays so the
//! bench targets measure container transitions rather than setup.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use cairn::GrowArray;

/// Generate `n` deterministic pseudo-random values from `seed`.
///
/// Plain multiplicative hashing — no RNG dependency, same sequence on
/// every run.
pub fn seeded_values(n: usize, seed: u64) -> Vec<i64> {
    (0..n as u64)
        .map(|i| {
            seed.wrapping_mul(6364136223846793005)
                .wrapping_add(i.wrapping_mul(1442695040888963407)) as i64
        })
        .collect()
}

/// Build an array filled to exactly `n` elements (and `n` capacity),
/// so the next append triggers a growth.
pub fn full_array(n: usize, seed: u64) -> GrowArray<i64> {
    GrowArray::from_values(&seeded_values(n, seed)).expect("bench allocation")
}
