//! Error types for the Strake marshaling layer.
//!
//! Two disjoint families: [`MarshalError`] for per-call caller contract
//! violations (reported synchronously at the call site, never retried),
//! and [`LayoutError`] for layout-invariant violations found by the
//! offset validator (fatal at backend construction, never per-call).

use std::error::Error;
use std::fmt;

/// Per-call errors from marshal operations and buffer accessors.
///
/// Every variant is a caller contract violation. The marshaling layer
/// never retries or recovers these; they propagate to the immediate
/// caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarshalError {
    /// The operation's footprint exceeds the destination's capacity.
    ///
    /// `offset` and `len` are in the destination's own offset units:
    /// scalars for typed buffers, bytes for byte buffers.
    OutOfRange {
        /// Requested start offset.
        offset: usize,
        /// Requested length from `offset`.
        len: usize,
        /// Total capacity of the buffer.
        capacity: usize,
    },
    /// An address-based operation was attempted on a buffer that is not
    /// backed by addressable, position-stable memory.
    ///
    /// This is never recovered by falling back to the bounds-checked
    /// path; backend selection, not per-call dispatch, decides which
    /// code path runs.
    NotDirect,
    /// `grow` was called on a direct buffer, whose capacity is pinned
    /// for its lifetime.
    FixedCapacity {
        /// The buffer's (fixed) capacity.
        capacity: usize,
    },
    /// A cursor position beyond the buffer's capacity was requested.
    InvalidPosition {
        /// Requested cursor position.
        position: usize,
        /// Total capacity of the buffer.
        capacity: usize,
    },
}

impl fmt::Display for MarshalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                offset,
                len,
                capacity,
            } => write!(
                f,
                "range out of bounds: offset {offset} + len {len} > capacity {capacity}"
            ),
            Self::NotDirect => write!(f, "buffer is not direct: no stable base address"),
            Self::FixedCapacity { capacity } => {
                write!(f, "direct buffer capacity is fixed at {capacity}")
            }
            Self::InvalidPosition { position, capacity } => {
                write!(f, "position {position} exceeds capacity {capacity}")
            }
        }
    }
}

impl Error for MarshalError {}

/// Layout-invariant violations found while validating an aggregate
/// type's in-memory representation against the layout catalog.
///
/// A `LayoutError` means the raw-address fast path must never be
/// trusted for this process. It is a permanent capability verdict
/// produced once at backend construction, not a retryable error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// A scalar field does not live at `first_offset + i * width`.
    FieldOffset {
        /// Full name of the aggregate type.
        type_name: &'static str,
        /// Name of the offending field.
        field: &'static str,
        /// Expected byte offset per the layout catalog.
        expected: usize,
        /// Actual byte offset reported by the compiler.
        actual: usize,
    },
    /// The type's total size does not equal scalar count times width,
    /// i.e. the representation carries hidden padding.
    Footprint {
        /// Full name of the aggregate type.
        type_name: &'static str,
        /// Expected size in bytes.
        expected: usize,
        /// Actual size in bytes.
        actual: usize,
    },
    /// The type's alignment differs from its scalar's alignment.
    Alignment {
        /// Full name of the aggregate type.
        type_name: &'static str,
        /// Expected alignment in bytes.
        expected: usize,
        /// Actual alignment in bytes.
        actual: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldOffset {
                type_name,
                field,
                expected,
                actual,
            } => write!(
                f,
                "{type_name}::{field} at byte offset {actual}, catalog expects {expected}"
            ),
            Self::Footprint {
                type_name,
                expected,
                actual,
            } => write!(
                f,
                "{type_name} occupies {actual} bytes, catalog expects {expected}"
            ),
            Self::Alignment {
                type_name,
                expected,
                actual,
            } => write!(
                f,
                "{type_name} aligned to {actual} bytes, catalog expects {expected}"
            ),
        }
    }
}

impl Error for LayoutError {}
