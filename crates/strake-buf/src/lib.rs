//! Buffer destinations for the Strake marshaling layer.
//!
//! Provides the two position-relative buffer kinds — [`TypedBuf`]
//! (addressed in scalar units) and [`ByteBuf`] (addressed in bytes) —
//! each with heap (growable, address-unstable) or direct (pinned,
//! address-stable) backing, plus the [`ScalarSink`] / [`ScalarSource`]
//! traits through which the marshal backends access them.
//!
//! Buffers are caller-owned: the marshaling layer never allocates or
//! retains them, and a marshal operation never reads or advances a
//! buffer's cursor. Taking a base address is safe here; only the
//! marshal crate's audited raw module dereferences it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod byte;
mod sink;
mod typed;

pub use byte::ByteBuf;
pub use sink::{ScalarSink, ScalarSource};
pub use typed::TypedBuf;

/// A position-relative `f32` buffer.
pub type FloatBuf = TypedBuf<f32>;
/// A position-relative `f64` buffer.
pub type DoubleBuf = TypedBuf<f64>;
