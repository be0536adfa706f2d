//! Benchmark support for the Strake marshaling layer.
//!
//! The benchmarks themselves live in `benches/` (criterion,
//! `harness = false`); this library holds the shared codec
//! constructors so every bench compares the same two strategy values.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use strake_marshal::{Codec, Strategy};

/// The bounds-checked backend.
pub fn safe_codec() -> Codec {
    Codec::with_strategy(Strategy::SafeOnly).expect("safe backend needs no probing")
}

/// The raw-address backend; panics if layout validation fails.
pub fn fast_codec() -> Codec {
    Codec::with_strategy(Strategy::Auto).expect("aggregate layouts must validate")
}
