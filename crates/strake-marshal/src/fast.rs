//! Fast-backend plumbing: bounds and directness checks in front of the
//! raw-address operations.
//!
//! Observable behavior matches the safe backend for every operation:
//! the same range check runs first (so an out-of-range call reports the
//! identical error under both backends), then the destination must
//! yield a stable base address — a non-direct buffer is rejected with
//! [`MarshalError::NotDirect`] rather than silently falling back to the
//! bounds-checked path. Backend selection, not per-call dispatch, is
//! the single source of truth for which code path runs.
#![allow(unsafe_code)]

use strake_buf::{ScalarSink, ScalarSource};
use strake_core::{MarshalError, Scalar};

/// Run a raw put of `count` scalars against a checked, direct sink.
pub(crate) fn put_agg<A, T, D>(
    agg: &A,
    offset: usize,
    dst: &mut D,
    count: usize,
    op: unsafe fn(&A, *mut T),
) -> Result<(), MarshalError>
where
    T: Scalar,
    D: ScalarSink<T>,
{
    dst.check_range(offset, count)?;
    let at = dst.byte_offset(offset);
    let base = dst.direct_base_mut()?;
    // SAFETY: `base` is valid for the buffer's full byte capacity, the
    // range check proved `offset + count` scalars fit inside it, and
    // `op` writes exactly `count` scalars at the computed address.
    unsafe {
        op(agg, base.add(at).cast::<T>());
    }
    Ok(())
}

/// Run a raw get of `count` scalars against a checked, direct source.
pub(crate) fn get_agg<A, T, D>(
    agg: &mut A,
    offset: usize,
    src: &D,
    count: usize,
    op: unsafe fn(&mut A, *const T),
) -> Result<(), MarshalError>
where
    T: Scalar,
    D: ScalarSource<T>,
{
    src.check_range(offset, count)?;
    let at = src.byte_offset(offset);
    let base = src.direct_base()?;
    // SAFETY: as in `put_agg`, with `op` reading exactly `count`
    // scalars at the computed address.
    unsafe {
        op(agg, base.add(at).cast::<T>());
    }
    Ok(())
}
