//! Raw-address marshal operations.
//!
//! This module is the crate's audited unsafe boundary: every `unsafe`
//! dereference in the marshaling layer lives here. The functions are
//! used internally by the fast backend (after its bounds and
//! directness checks) and exported for callers that own raw memory
//! outright.
//!
//! Copies move 64-bit words where the footprint allows, with a 32-bit
//! tail for odd scalar counts; all stores are unaligned-tolerant so
//! byte buffers may place scalars at any byte offset. Padded variants
//! fold the padding policy's constants into pre-built 64-bit words
//! (e.g. [`ZERO_ONE`], a zero scalar and a one scalar packed into one
//! move).
//!
//! Soundness of reading an aggregate as a contiguous scalar block
//! rests on the `#[repr(C)]`, no-padding representation certified by
//! `strake_core::validate` — the backend selector runs that validation
//! before any function here executes.
//!
//! # Safety
//!
//! For every `put_*`, `dst` must be valid for writes of the
//! operation's full footprint; for every `get_*`, `src` must be valid
//! for reads of it. Footprints are the destination image's scalar
//! count times the scalar width. Pointers may be unaligned. Regions
//! must not overlap the aggregate itself.
#![allow(unsafe_code)]

use strake_core::layout::{self, ShapeLayout};
use strake_core::{Mat2, Mat3, Mat3x2, Mat4, Mat4x3, Quat, Scalar, Vec2, Vec3, Vec4};

/// Pack two `f32` bit patterns into one `u64` store, first scalar at
/// the lower address.
const fn pack2(first: f32, second: f32) -> u64 {
    let a = first.to_bits() as u64;
    let b = second.to_bits() as u64;
    if cfg!(target_endian = "little") {
        (b << 32) | a
    } else {
        (a << 32) | b
    }
}

/// (0.0f32, 0.0f32) as one 64-bit store.
pub const ZERO_ZERO: u64 = pack2(0.0, 0.0);
/// (0.0f32, 1.0f32) as one 64-bit store.
pub const ZERO_ONE: u64 = pack2(0.0, 1.0);
/// (1.0f32, 0.0f32) as one 64-bit store.
pub const ONE_ZERO: u64 = pack2(1.0, 0.0);

/// Word-wise byte copy: 8 bytes at a time with a 4-byte tail.
///
/// `len` must be a multiple of 4.
unsafe fn copy_bytes_wordwise(src: *const u8, dst: *mut u8, len: usize) {
    debug_assert_eq!(len % 4, 0);
    let words = len / 8;
    for i in 0..words {
        let w = src.add(i * 8).cast::<u64>().read_unaligned();
        dst.add(i * 8).cast::<u64>().write_unaligned(w);
    }
    if len % 8 != 0 {
        let tail = words * 8;
        let w = src.add(tail).cast::<u32>().read_unaligned();
        dst.add(tail).cast::<u32>().write_unaligned(w);
    }
}

/// Copy `n` contiguous scalars.
pub(crate) unsafe fn copy_scalars<T: Scalar>(src: *const T, dst: *mut T, n: usize) {
    copy_bytes_wordwise(src.cast(), dst.cast(), n * T::WIDTH);
}

/// Store the source's scalars in the layout's transposed order.
unsafe fn copy_permuted<T: Scalar>(src: *const T, dst: *mut T, layout: &ShapeLayout) {
    for i in 0..layout.scalar_count() {
        dst.add(i)
            .write_unaligned(src.add(layout.transposed_index(i)).read());
    }
}

/// Per-scalar `f64` → `f32` narrowing copy.
unsafe fn copy_narrowed(src: *const f64, dst: *mut f32, n: usize) {
    for i in 0..n {
        dst.add(i).write_unaligned(src.add(i).read() as f32);
    }
}

/// Per-scalar `f32` → `f64` widening copy.
unsafe fn copy_widened(src: *const f32, dst: *mut f64, n: usize) {
    for i in 0..n {
        dst.add(i).write_unaligned(f64::from(src.add(i).read()));
    }
}

/// Narrowing copy in the layout's transposed order.
unsafe fn copy_narrowed_permuted(src: *const f64, dst: *mut f32, layout: &ShapeLayout) {
    for i in 0..layout.scalar_count() {
        dst.add(i)
            .write_unaligned(src.add(layout.transposed_index(i)).read() as f32);
    }
}

// ---------------------------------------------------------------------------
// Contiguous canonical-order copies.
// ---------------------------------------------------------------------------

/// Write the 2 scalars of `v` at `dst`.
///
/// # Safety
///
/// `dst` must be valid for writes of 2 scalars; see the module contract.
pub unsafe fn put_vec2<T: Scalar>(v: &Vec2<T>, dst: *mut T) {
    copy_scalars((v as *const Vec2<T>).cast::<T>(), dst, 2);
}

/// Read 2 scalars at `src` into `v`.
///
/// # Safety
///
/// `src` must be valid for reads of 2 scalars; see the module contract.
pub unsafe fn get_vec2<T: Scalar>(v: &mut Vec2<T>, src: *const T) {
    copy_scalars(src, (v as *mut Vec2<T>).cast::<T>(), 2);
}

/// Write the 3 scalars of `v` at `dst`.
///
/// # Safety
///
/// `dst` must be valid for writes of 3 scalars; see the module contract.
pub unsafe fn put_vec3<T: Scalar>(v: &Vec3<T>, dst: *mut T) {
    copy_scalars((v as *const Vec3<T>).cast::<T>(), dst, 3);
}

/// Read 3 scalars at `src` into `v`.
///
/// # Safety
///
/// `src` must be valid for reads of 3 scalars; see the module contract.
pub unsafe fn get_vec3<T: Scalar>(v: &mut Vec3<T>, src: *const T) {
    copy_scalars(src, (v as *mut Vec3<T>).cast::<T>(), 3);
}

/// Write the 4 scalars of `v` at `dst`.
///
/// # Safety
///
/// `dst` must be valid for writes of 4 scalars; see the module contract.
pub unsafe fn put_vec4<T: Scalar>(v: &Vec4<T>, dst: *mut T) {
    copy_scalars((v as *const Vec4<T>).cast::<T>(), dst, 4);
}

/// Read 4 scalars at `src` into `v`.
///
/// # Safety
///
/// `src` must be valid for reads of 4 scalars; see the module contract.
pub unsafe fn get_vec4<T: Scalar>(v: &mut Vec4<T>, src: *const T) {
    copy_scalars(src, (v as *mut Vec4<T>).cast::<T>(), 4);
}

/// Write the 4 scalars of `q` (x, y, z, w) at `dst`.
///
/// # Safety
///
/// `dst` must be valid for writes of 4 scalars; see the module contract.
pub unsafe fn put_quat<T: Scalar>(q: &Quat<T>, dst: *mut T) {
    copy_scalars((q as *const Quat<T>).cast::<T>(), dst, 4);
}

/// Read 4 scalars at `src` into `q`.
///
/// # Safety
///
/// `src` must be valid for reads of 4 scalars; see the module contract.
pub unsafe fn get_quat<T: Scalar>(q: &mut Quat<T>, src: *const T) {
    copy_scalars(src, (q as *mut Quat<T>).cast::<T>(), 4);
}

/// Write the 4 scalars of `m` in canonical order at `dst`.
///
/// # Safety
///
/// `dst` must be valid for writes of 4 scalars; see the module contract.
pub unsafe fn put_mat2<T: Scalar>(m: &Mat2<T>, dst: *mut T) {
    copy_scalars((m as *const Mat2<T>).cast::<T>(), dst, 4);
}

/// Read 4 scalars at `src` into `m`.
///
/// # Safety
///
/// `src` must be valid for reads of 4 scalars; see the module contract.
pub unsafe fn get_mat2<T: Scalar>(m: &mut Mat2<T>, src: *const T) {
    copy_scalars(src, (m as *mut Mat2<T>).cast::<T>(), 4);
}

/// Write the 9 scalars of `m` in canonical order at `dst`.
///
/// # Safety
///
/// `dst` must be valid for writes of 9 scalars; see the module contract.
pub unsafe fn put_mat3<T: Scalar>(m: &Mat3<T>, dst: *mut T) {
    copy_scalars((m as *const Mat3<T>).cast::<T>(), dst, 9);
}

/// Read 9 scalars at `src` into `m`.
///
/// # Safety
///
/// `src` must be valid for reads of 9 scalars; see the module contract.
pub unsafe fn get_mat3<T: Scalar>(m: &mut Mat3<T>, src: *const T) {
    copy_scalars(src, (m as *mut Mat3<T>).cast::<T>(), 9);
}

/// Write the 16 scalars of `m` in canonical order at `dst`.
///
/// # Safety
///
/// `dst` must be valid for writes of 16 scalars; see the module contract.
pub unsafe fn put_mat4<T: Scalar>(m: &Mat4<T>, dst: *mut T) {
    copy_scalars((m as *const Mat4<T>).cast::<T>(), dst, 16);
}

/// Read 16 scalars at `src` into `m`.
///
/// # Safety
///
/// `src` must be valid for reads of 16 scalars; see the module contract.
pub unsafe fn get_mat4<T: Scalar>(m: &mut Mat4<T>, src: *const T) {
    copy_scalars(src, (m as *mut Mat4<T>).cast::<T>(), 16);
}

/// Write the 6 scalars of `m` in canonical order at `dst`.
///
/// # Safety
///
/// `dst` must be valid for writes of 6 scalars; see the module contract.
pub unsafe fn put_mat3x2<T: Scalar>(m: &Mat3x2<T>, dst: *mut T) {
    copy_scalars((m as *const Mat3x2<T>).cast::<T>(), dst, 6);
}

/// Read 6 scalars at `src` into `m`.
///
/// # Safety
///
/// `src` must be valid for reads of 6 scalars; see the module contract.
pub unsafe fn get_mat3x2<T: Scalar>(m: &mut Mat3x2<T>, src: *const T) {
    copy_scalars(src, (m as *mut Mat3x2<T>).cast::<T>(), 6);
}

/// Write the 12 scalars of `m` in canonical order at `dst`.
///
/// # Safety
///
/// `dst` must be valid for writes of 12 scalars; see the module contract.
pub unsafe fn put_mat4x3<T: Scalar>(m: &Mat4x3<T>, dst: *mut T) {
    copy_scalars((m as *const Mat4x3<T>).cast::<T>(), dst, 12);
}

/// Read 12 scalars at `src` into `m`.
///
/// # Safety
///
/// `src` must be valid for reads of 12 scalars; see the module contract.
pub unsafe fn get_mat4x3<T: Scalar>(m: &mut Mat4x3<T>, src: *const T) {
    copy_scalars(src, (m as *mut Mat4x3<T>).cast::<T>(), 12);
}

// ---------------------------------------------------------------------------
// Transposed (row-major) writes.
// ---------------------------------------------------------------------------

/// Write `m` in row-major order at `dst`.
///
/// # Safety
///
/// `dst` must be valid for writes of 4 scalars; see the module contract.
pub unsafe fn put_mat2_transposed<T: Scalar>(m: &Mat2<T>, dst: *mut T) {
    copy_permuted((m as *const Mat2<T>).cast::<T>(), dst, &layout::MAT2);
}

/// Write `m` in row-major order at `dst`.
///
/// # Safety
///
/// `dst` must be valid for writes of 9 scalars; see the module contract.
pub unsafe fn put_mat3_transposed<T: Scalar>(m: &Mat3<T>, dst: *mut T) {
    copy_permuted((m as *const Mat3<T>).cast::<T>(), dst, &layout::MAT3);
}

/// Write `m` in row-major order at `dst`.
///
/// # Safety
///
/// `dst` must be valid for writes of 16 scalars; see the module contract.
pub unsafe fn put_mat4_transposed<T: Scalar>(m: &Mat4<T>, dst: *mut T) {
    copy_permuted((m as *const Mat4<T>).cast::<T>(), dst, &layout::MAT4);
}

/// Write `m` as its 3×4 row-major image at `dst`.
///
/// # Safety
///
/// `dst` must be valid for writes of 12 scalars; see the module contract.
pub unsafe fn put_mat4x3_transposed<T: Scalar>(m: &Mat4x3<T>, dst: *mut T) {
    copy_permuted((m as *const Mat4x3<T>).cast::<T>(), dst, &layout::MAT4X3);
}

/// Write the upper 4×3 of `m`, row-major (12 scalars), at `dst`.
///
/// # Safety
///
/// `dst` must be valid for writes of 12 scalars; see the module contract.
pub unsafe fn put_mat4_4x3_transposed<T: Scalar>(m: &Mat4<T>, dst: *mut T) {
    let s = (m as *const Mat4<T>).cast::<T>();
    for i in 0..12 {
        let c = i % 4;
        let r = i / 4;
        dst.add(i).write_unaligned(s.add(c * 4 + r).read());
    }
}

// ---------------------------------------------------------------------------
// Padded expansions. The f32 forms fold the padding constants into
// pre-built 64-bit words; the f64 forms store whole scalars, which are
// already word-sized.
// ---------------------------------------------------------------------------

/// Write `m` into a 4×4 f32 slot with a homogeneous last column/row.
///
/// # Safety
///
/// `dst` must be valid for writes of 16 scalars; see the module contract.
pub unsafe fn put_mat3f_4x4(m: &Mat3<f32>, dst: *mut f32) {
    let s = (m as *const Mat3<f32>).cast::<u8>();
    let d = dst.cast::<u8>();
    for c in 0..3 {
        copy_bytes_wordwise(s.add(c * 12), d.add(c * 16), 12);
        d.add(c * 16 + 12).cast::<u32>().write_unaligned(0);
    }
    d.add(48).cast::<u64>().write_unaligned(ZERO_ZERO);
    d.add(56).cast::<u64>().write_unaligned(ZERO_ONE);
}

/// Write `m` into a 4×4 f64 slot with a homogeneous last column/row.
///
/// # Safety
///
/// `dst` must be valid for writes of 16 scalars; see the module contract.
pub unsafe fn put_mat3d_4x4(m: &Mat3<f64>, dst: *mut f64) {
    let s = (m as *const Mat3<f64>).cast::<f64>();
    for c in 0..3 {
        copy_scalars(s.add(c * 3), dst.add(c * 4), 3);
        dst.add(c * 4 + 3).write_unaligned(0.0);
    }
    dst.add(12).write_unaligned(0.0);
    dst.add(13).write_unaligned(0.0);
    dst.add(14).write_unaligned(0.0);
    dst.add(15).write_unaligned(1.0);
}

/// Write `m` into a 4×4 f32 slot, fourth row (0, 0, 0, 1).
///
/// # Safety
///
/// `dst` must be valid for writes of 16 scalars; see the module contract.
pub unsafe fn put_mat4x3f_4x4(m: &Mat4x3<f32>, dst: *mut f32) {
    let s = (m as *const Mat4x3<f32>).cast::<u8>();
    let d = dst.cast::<u8>();
    for c in 0..4 {
        copy_bytes_wordwise(s.add(c * 12), d.add(c * 16), 12);
    }
    d.add(12).cast::<u32>().write_unaligned(0);
    d.add(28).cast::<u32>().write_unaligned(0);
    d.add(44).cast::<u32>().write_unaligned(0);
    d.add(60).cast::<u32>().write_unaligned(1.0f32.to_bits());
}

/// Write `m` into a 4×4 f64 slot, fourth row (0, 0, 0, 1).
///
/// # Safety
///
/// `dst` must be valid for writes of 16 scalars; see the module contract.
pub unsafe fn put_mat4x3d_4x4(m: &Mat4x3<f64>, dst: *mut f64) {
    let s = (m as *const Mat4x3<f64>).cast::<f64>();
    for c in 0..4 {
        copy_scalars(s.add(c * 3), dst.add(c * 4), 3);
        dst.add(c * 4 + 3).write_unaligned(0.0);
    }
    dst.add(15).write_unaligned(1.0);
}

/// Write `m` into a 3×3 f32 slot with a homogeneous third row.
///
/// # Safety
///
/// `dst` must be valid for writes of 9 scalars; see the module contract.
pub unsafe fn put_mat3x2f_3x3(m: &Mat3x2<f32>, dst: *mut f32) {
    let s = (m as *const Mat3x2<f32>).cast::<u8>();
    let d = dst.cast::<u8>();
    for c in 0..3 {
        let w = s.add(c * 8).cast::<u64>().read_unaligned();
        d.add(c * 12).cast::<u64>().write_unaligned(w);
    }
    d.add(8).cast::<u32>().write_unaligned(0);
    d.add(20).cast::<u32>().write_unaligned(0);
    d.add(32).cast::<u32>().write_unaligned(1.0f32.to_bits());
}

/// Write `m` into a 3×3 f64 slot with a homogeneous third row.
///
/// # Safety
///
/// `dst` must be valid for writes of 9 scalars; see the module contract.
pub unsafe fn put_mat3x2d_3x3(m: &Mat3x2<f64>, dst: *mut f64) {
    let s = (m as *const Mat3x2<f64>).cast::<f64>();
    for c in 0..3 {
        copy_scalars(s.add(c * 2), dst.add(c * 3), 2);
        dst.add(c * 3 + 2).write_unaligned(0.0);
    }
    dst.add(8).write_unaligned(1.0);
}

/// Write `m` into a homogeneous 4×4 f32 slot.
///
/// # Safety
///
/// `dst` must be valid for writes of 16 scalars; see the module contract.
pub unsafe fn put_mat3x2f_4x4(m: &Mat3x2<f32>, dst: *mut f32) {
    let s = (m as *const Mat3x2<f32>).cast::<u8>();
    let d = dst.cast::<u8>();
    let col0 = s.cast::<u64>().read_unaligned();
    let col1 = s.add(8).cast::<u64>().read_unaligned();
    let col3 = s.add(16).cast::<u64>().read_unaligned();
    d.cast::<u64>().write_unaligned(col0);
    d.add(8).cast::<u64>().write_unaligned(ZERO_ZERO);
    d.add(16).cast::<u64>().write_unaligned(col1);
    d.add(24).cast::<u64>().write_unaligned(ZERO_ZERO);
    d.add(32).cast::<u64>().write_unaligned(ZERO_ZERO);
    d.add(40).cast::<u64>().write_unaligned(ONE_ZERO);
    d.add(48).cast::<u64>().write_unaligned(col3);
    d.add(56).cast::<u64>().write_unaligned(ZERO_ONE);
}

/// Write `m` into a homogeneous 4×4 f64 slot.
///
/// # Safety
///
/// `dst` must be valid for writes of 16 scalars; see the module contract.
pub unsafe fn put_mat3x2d_4x4(m: &Mat3x2<f64>, dst: *mut f64) {
    let s = (m as *const Mat3x2<f64>).cast::<f64>();
    copy_scalars(s, dst, 2);
    dst.add(2).write_unaligned(0.0);
    dst.add(3).write_unaligned(0.0);
    copy_scalars(s.add(2), dst.add(4), 2);
    dst.add(6).write_unaligned(0.0);
    dst.add(7).write_unaligned(0.0);
    dst.add(8).write_unaligned(0.0);
    dst.add(9).write_unaligned(0.0);
    dst.add(10).write_unaligned(1.0);
    dst.add(11).write_unaligned(0.0);
    copy_scalars(s.add(4), dst.add(12), 2);
    dst.add(14).write_unaligned(0.0);
    dst.add(15).write_unaligned(1.0);
}

// ---------------------------------------------------------------------------
// Precision narrowing/widening.
// ---------------------------------------------------------------------------

/// Write `v` as 2 narrowed f32 scalars at `dst`.
///
/// # Safety
///
/// `dst` must be valid for writes of 2 f32 scalars; see the module contract.
pub unsafe fn putf_vec2(v: &Vec2<f64>, dst: *mut f32) {
    copy_narrowed((v as *const Vec2<f64>).cast::<f64>(), dst, 2);
}

/// Read 2 f32 scalars at `src`, widened, into `v`.
///
/// # Safety
///
/// `src` must be valid for reads of 2 f32 scalars; see the module contract.
pub unsafe fn getf_vec2(v: &mut Vec2<f64>, src: *const f32) {
    copy_widened(src, (v as *mut Vec2<f64>).cast::<f64>(), 2);
}

/// Write `v` as 3 narrowed f32 scalars at `dst`.
///
/// # Safety
///
/// `dst` must be valid for writes of 3 f32 scalars; see the module contract.
pub unsafe fn putf_vec3(v: &Vec3<f64>, dst: *mut f32) {
    copy_narrowed((v as *const Vec3<f64>).cast::<f64>(), dst, 3);
}

/// Read 3 f32 scalars at `src`, widened, into `v`.
///
/// # Safety
///
/// `src` must be valid for reads of 3 f32 scalars; see the module contract.
pub unsafe fn getf_vec3(v: &mut Vec3<f64>, src: *const f32) {
    copy_widened(src, (v as *mut Vec3<f64>).cast::<f64>(), 3);
}

/// Write `v` as 4 narrowed f32 scalars at `dst`.
///
/// # Safety
///
/// `dst` must be valid for writes of 4 f32 scalars; see the module contract.
pub unsafe fn putf_vec4(v: &Vec4<f64>, dst: *mut f32) {
    copy_narrowed((v as *const Vec4<f64>).cast::<f64>(), dst, 4);
}

/// Read 4 f32 scalars at `src`, widened, into `v`.
///
/// # Safety
///
/// `src` must be valid for reads of 4 f32 scalars; see the module contract.
pub unsafe fn getf_vec4(v: &mut Vec4<f64>, src: *const f32) {
    copy_widened(src, (v as *mut Vec4<f64>).cast::<f64>(), 4);
}

/// Write `q` as 4 narrowed f32 scalars at `dst`.
///
/// # Safety
///
/// `dst` must be valid for writes of 4 f32 scalars; see the module contract.
pub unsafe fn putf_quat(q: &Quat<f64>, dst: *mut f32) {
    copy_narrowed((q as *const Quat<f64>).cast::<f64>(), dst, 4);
}

/// Read 4 f32 scalars at `src`, widened, into `q`.
///
/// # Safety
///
/// `src` must be valid for reads of 4 f32 scalars; see the module contract.
pub unsafe fn getf_quat(q: &mut Quat<f64>, src: *const f32) {
    copy_widened(src, (q as *mut Quat<f64>).cast::<f64>(), 4);
}

/// Write `m` as 4 narrowed f32 scalars at `dst`.
///
/// # Safety
///
/// `dst` must be valid for writes of 4 f32 scalars; see the module contract.
pub unsafe fn putf_mat2(m: &Mat2<f64>, dst: *mut f32) {
    copy_narrowed((m as *const Mat2<f64>).cast::<f64>(), dst, 4);
}

/// Read 4 f32 scalars at `src`, widened, into `m`.
///
/// # Safety
///
/// `src` must be valid for reads of 4 f32 scalars; see the module contract.
pub unsafe fn getf_mat2(m: &mut Mat2<f64>, src: *const f32) {
    copy_widened(src, (m as *mut Mat2<f64>).cast::<f64>(), 4);
}

/// Write `m` as 9 narrowed f32 scalars at `dst`.
///
/// # Safety
///
/// `dst` must be valid for writes of 9 f32 scalars; see the module contract.
pub unsafe fn putf_mat3(m: &Mat3<f64>, dst: *mut f32) {
    copy_narrowed((m as *const Mat3<f64>).cast::<f64>(), dst, 9);
}

/// Read 9 f32 scalars at `src`, widened, into `m`.
///
/// # Safety
///
/// `src` must be valid for reads of 9 f32 scalars; see the module contract.
pub unsafe fn getf_mat3(m: &mut Mat3<f64>, src: *const f32) {
    copy_widened(src, (m as *mut Mat3<f64>).cast::<f64>(), 9);
}

/// Write `m` as 16 narrowed f32 scalars at `dst`.
///
/// # Safety
///
/// `dst` must be valid for writes of 16 f32 scalars; see the module contract.
pub unsafe fn putf_mat4(m: &Mat4<f64>, dst: *mut f32) {
    copy_narrowed((m as *const Mat4<f64>).cast::<f64>(), dst, 16);
}

/// Read 16 f32 scalars at `src`, widened, into `m`.
///
/// # Safety
///
/// `src` must be valid for reads of 16 f32 scalars; see the module contract.
pub unsafe fn getf_mat4(m: &mut Mat4<f64>, src: *const f32) {
    copy_widened(src, (m as *mut Mat4<f64>).cast::<f64>(), 16);
}

/// Write `m` as 6 narrowed f32 scalars at `dst`.
///
/// # Safety
///
/// `dst` must be valid for writes of 6 f32 scalars; see the module contract.
pub unsafe fn putf_mat3x2(m: &Mat3x2<f64>, dst: *mut f32) {
    copy_narrowed((m as *const Mat3x2<f64>).cast::<f64>(), dst, 6);
}

/// Read 6 f32 scalars at `src`, widened, into `m`.
///
/// # Safety
///
/// `src` must be valid for reads of 6 f32 scalars; see the module contract.
pub unsafe fn getf_mat3x2(m: &mut Mat3x2<f64>, src: *const f32) {
    copy_widened(src, (m as *mut Mat3x2<f64>).cast::<f64>(), 6);
}

/// Write `m` as 12 narrowed f32 scalars at `dst`.
///
/// # Safety
///
/// `dst` must be valid for writes of 12 f32 scalars; see the module contract.
pub unsafe fn putf_mat4x3(m: &Mat4x3<f64>, dst: *mut f32) {
    copy_narrowed((m as *const Mat4x3<f64>).cast::<f64>(), dst, 12);
}

/// Read 12 f32 scalars at `src`, widened, into `m`.
///
/// # Safety
///
/// `src` must be valid for reads of 12 f32 scalars; see the module contract.
pub unsafe fn getf_mat4x3(m: &mut Mat4x3<f64>, src: *const f32) {
    copy_widened(src, (m as *mut Mat4x3<f64>).cast::<f64>(), 12);
}

/// Write `m` in row-major order as 16 narrowed f32 scalars at `dst`.
///
/// # Safety
///
/// `dst` must be valid for writes of 16 f32 scalars; see the module contract.
pub unsafe fn putf_mat4_transposed(m: &Mat4<f64>, dst: *mut f32) {
    copy_narrowed_permuted((m as *const Mat4<f64>).cast::<f64>(), dst, &layout::MAT4);
}

/// Write `m` as its 3×4 row-major image, 12 narrowed f32 scalars, at `dst`.
///
/// # Safety
///
/// `dst` must be valid for writes of 12 f32 scalars; see the module contract.
pub unsafe fn putf_mat4x3_transposed(m: &Mat4x3<f64>, dst: *mut f32) {
    copy_narrowed_permuted((m as *const Mat4x3<f64>).cast::<f64>(), dst, &layout::MAT4X3);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_pad_words_encode_scalar_pairs() {
        let mut out = [7.0f32; 2];
        // SAFETY: out has room for exactly the two packed scalars.
        unsafe {
            out.as_mut_ptr().cast::<u64>().write_unaligned(ZERO_ONE);
        }
        assert_eq!(out, [0.0, 1.0]);
        unsafe {
            out.as_mut_ptr().cast::<u64>().write_unaligned(ONE_ZERO);
        }
        assert_eq!(out, [1.0, 0.0]);
        assert_eq!(ZERO_ZERO, 0);
    }

    #[test]
    fn wordwise_copy_handles_odd_scalar_counts() {
        let src: [f32; 9] = std::array::from_fn(|i| i as f32);
        let mut dst = [0.0f32; 9];
        // SAFETY: both regions cover 9 scalars and do not overlap.
        unsafe { copy_scalars(src.as_ptr(), dst.as_mut_ptr(), 9) };
        assert_eq!(src, dst);
    }

    #[test]
    fn put_mat4x3f_4x4_pads_fourth_row() {
        let m = Mat4x3::<f32>::from_array([2.0; 12]);
        let mut out = [9.0f32; 16];
        // SAFETY: out covers the full 16-scalar footprint.
        unsafe { put_mat4x3f_4x4(&m, out.as_mut_ptr()) };
        assert_eq!(
            out,
            [
                2.0, 2.0, 2.0, 0.0, //
                2.0, 2.0, 2.0, 0.0, //
                2.0, 2.0, 2.0, 0.0, //
                2.0, 2.0, 2.0, 1.0
            ]
        );
    }

    #[test]
    fn put_mat3x2f_4x4_embeds_affine() {
        let m = Mat3x2::<f32>::new(10.0, 11.0, 12.0, 13.0, 14.0, 15.0);
        let mut out = [9.0f32; 16];
        // SAFETY: out covers the full 16-scalar footprint.
        unsafe { put_mat3x2f_4x4(&m, out.as_mut_ptr()) };
        assert_eq!(
            out,
            [
                10.0, 11.0, 0.0, 0.0, //
                12.0, 13.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                14.0, 15.0, 0.0, 1.0
            ]
        );
    }

    #[test]
    fn transposed_write_is_row_major() {
        let m = Mat4::<f64>::from_array(std::array::from_fn(|i| i as f64));
        let mut out = [0.0f64; 16];
        // SAFETY: out covers the full 16-scalar footprint.
        unsafe { put_mat4_transposed(&m, out.as_mut_ptr()) };
        assert_eq!(out[0], 0.0);
        assert_eq!(out[1], 4.0);
        assert_eq!(out[4], 1.0);
        assert_eq!(out[15], 15.0);
    }
}
