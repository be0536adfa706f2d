//! Test utilities for Strake development.
//!
//! Provides deterministic fixture data and proptest strategies for
//! aggregate scalars. Strategies generate scalars from raw bit
//! patterns so NaN payloads and negative zero are covered; compare
//! marshal results with [`bits_of`] rather than `PartialEq`.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strake_core::Scalar;

/// Sequential f32 fixture data: 1.0, 2.0, … N.
pub fn seq_f32<const N: usize>() -> [f32; N] {
    std::array::from_fn(|i| (i + 1) as f32)
}

/// Sequential f64 fixture data: 1.0, 2.0, … N.
pub fn seq_f64<const N: usize>() -> [f64; N] {
    std::array::from_fn(|i| (i + 1) as f64)
}

/// A seeded RNG for reproducible randomized fixtures.
pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Fill an array with finite random f32 values from a seeded RNG.
pub fn random_f32<const N: usize>(rng: &mut ChaCha8Rng) -> [f32; N] {
    std::array::from_fn(|_| rng.random::<f32>() * 200.0 - 100.0)
}

/// Fill an array with finite random f64 values from a seeded RNG.
pub fn random_f64<const N: usize>(rng: &mut ChaCha8Rng) -> [f64; N] {
    std::array::from_fn(|_| rng.random::<f64>() * 200.0 - 100.0)
}

/// Strategy over f32 arrays spanning the full bit space, NaNs included.
pub fn arb_f32_array<const N: usize>() -> impl Strategy<Value = [f32; N]> {
    any::<[u32; N]>().prop_map(|bits| bits.map(f32::from_bits))
}

/// Strategy over f64 arrays spanning the full bit space, NaNs included.
pub fn arb_f64_array<const N: usize>() -> impl Strategy<Value = [f64; N]> {
    any::<[u64; N]>().prop_map(|bits| bits.map(f64::from_bits))
}

/// The element-wise bit patterns of a scalar array, for exact
/// comparison.
pub fn bits_of<T: Scalar, const N: usize>(a: [T; N]) -> [u64; N] {
    a.map(Scalar::bit_pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_fixtures_start_at_one() {
        assert_eq!(seq_f32::<4>(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(seq_f64::<2>(), [1.0, 2.0]);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let a: [f32; 8] = random_f32(&mut rng(42));
        let b: [f32; 8] = random_f32(&mut rng(42));
        assert_eq!(bits_of(a), bits_of(b));
    }

    #[test]
    fn bits_of_distinguishes_negative_zero() {
        assert_ne!(bits_of([0.0f32]), bits_of([-0.0f32]));
    }
}
