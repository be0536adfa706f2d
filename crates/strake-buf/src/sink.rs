//! Destination and source traits the marshal backends operate through.
//!
//! A [`ScalarSink`] abstracts the two position-relative buffer kinds —
//! typed scalar buffers addressed in scalar units and byte buffers
//! addressed in bytes — behind one seam: a bounds check in the
//! destination's own units, a unit-to-byte conversion, a checked bulk
//! transfer for the safe path, and an optional stable base address for
//! the fast path. [`ScalarSource`] is the read-side mirror.
//!
//! Implementations must never read or advance the buffer's cursor;
//! all addressing is absolute.

use strake_core::{MarshalError, Scalar};

/// A bounds-checked, absolutely-addressed scalar write target.
pub trait ScalarSink<T: Scalar> {
    /// Check that `count` scalars starting at `offset` (in this
    /// buffer's offset units) fit within capacity.
    fn check_range(&self, offset: usize, count: usize) -> Result<(), MarshalError>;

    /// Convert an offset in this buffer's units to a byte offset.
    fn byte_offset(&self, offset: usize) -> usize;

    /// Write `values` starting at `offset`, bounds-checked, without
    /// touching the cursor.
    fn write_scalars(&mut self, offset: usize, values: &[T]) -> Result<(), MarshalError>;

    /// Stable base address of the backing store, for raw-address
    /// copies.
    ///
    /// Returns [`MarshalError::NotDirect`] for heap-backed buffers,
    /// whose base may move on growth. Never falls back.
    fn direct_base_mut(&mut self) -> Result<*mut u8, MarshalError>;
}

/// A bounds-checked, absolutely-addressed scalar read source.
pub trait ScalarSource<T: Scalar> {
    /// Check that `count` scalars starting at `offset` (in this
    /// buffer's offset units) fit within capacity.
    fn check_range(&self, offset: usize, count: usize) -> Result<(), MarshalError>;

    /// Convert an offset in this buffer's units to a byte offset.
    fn byte_offset(&self, offset: usize) -> usize;

    /// Read `out.len()` scalars starting at `offset`, bounds-checked,
    /// without touching the cursor.
    fn read_scalars(&self, offset: usize, out: &mut [T]) -> Result<(), MarshalError>;

    /// Stable base address of the backing store, for raw-address
    /// copies. Returns [`MarshalError::NotDirect`] for heap-backed
    /// buffers.
    fn direct_base(&self) -> Result<*const u8, MarshalError>;
}
