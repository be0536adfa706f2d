//! The marshal operation surface, dispatched over the selected backend.
//!
//! A [`Codec`] is the strategy value chosen once at startup via
//! [`Codec::with_strategy`] or [`crate::codec()`]: every operation
//! matches on the backend kind and
//! either materializes a scalar image for one bounds-checked bulk
//! transfer (safe), or runs the same checks and then a raw-address word
//! copy (fast). The two arms are held to byte-identical output by the
//! property tests.
//!
//! Offsets are in the destination's own units — scalars for
//! [`TypedBuf`](strake_buf::TypedBuf), bytes for
//! [`ByteBuf`](strake_buf::ByteBuf) — and no operation ever reads or
//! advances a buffer's cursor. `put` operations write exactly the
//! image's scalar count; `get` operations are their exact inverse,
//! bit-for-bit.

use strake_buf::{ScalarSink, ScalarSource};
use strake_core::layout;
use strake_core::{
    Mat2, Mat3, Mat3x2, Mat4, Mat4x3, MarshalError, Quat, Scalar, Vec2, Vec3, Vec4,
};

use crate::{fast, image, raw};

/// Which backend a [`Codec`] dispatches to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendKind {
    /// Bounds-checked, position-relative buffer accessors.
    Safe,
    /// Raw-address word copies against direct buffers.
    Fast,
}

/// The selected marshal backend.
///
/// Construct once via [`Codec::with_strategy`] or use the process-wide
/// instance from [`crate::codec()`]. Immutable and stateless after
/// construction; concurrent calls on independent buffers need no
/// locking.
pub struct Codec {
    pub(crate) kind: BackendKind,
}

impl Codec {
    /// The backend this codec was selected with.
    pub fn kind(&self) -> BackendKind {
        self.kind
    }

    // -- vectors ----------------------------------------------------------

    /// Write the 2 scalars of `v` at `offset`.
    pub fn put_vec2<T: Scalar>(
        &self,
        v: &Vec2<T>,
        offset: usize,
        dst: &mut impl ScalarSink<T>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => dst.write_scalars(offset, &v.to_array()),
            BackendKind::Fast => fast::put_agg(v, offset, dst, 2, raw::put_vec2::<T>),
        }
    }

    /// Read 2 scalars at `offset` into `v`.
    pub fn get_vec2<T: Scalar>(
        &self,
        v: &mut Vec2<T>,
        offset: usize,
        src: &impl ScalarSource<T>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => {
                let mut a = [T::ZERO; 2];
                src.read_scalars(offset, &mut a)?;
                *v = Vec2::from_array(a);
                Ok(())
            }
            BackendKind::Fast => fast::get_agg(v, offset, src, 2, raw::get_vec2::<T>),
        }
    }

    /// Write the 3 scalars of `v` at `offset`.
    pub fn put_vec3<T: Scalar>(
        &self,
        v: &Vec3<T>,
        offset: usize,
        dst: &mut impl ScalarSink<T>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => dst.write_scalars(offset, &v.to_array()),
            BackendKind::Fast => fast::put_agg(v, offset, dst, 3, raw::put_vec3::<T>),
        }
    }

    /// Read 3 scalars at `offset` into `v`.
    pub fn get_vec3<T: Scalar>(
        &self,
        v: &mut Vec3<T>,
        offset: usize,
        src: &impl ScalarSource<T>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => {
                let mut a = [T::ZERO; 3];
                src.read_scalars(offset, &mut a)?;
                *v = Vec3::from_array(a);
                Ok(())
            }
            BackendKind::Fast => fast::get_agg(v, offset, src, 3, raw::get_vec3::<T>),
        }
    }

    /// Write the 4 scalars of `v` at `offset`.
    pub fn put_vec4<T: Scalar>(
        &self,
        v: &Vec4<T>,
        offset: usize,
        dst: &mut impl ScalarSink<T>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => dst.write_scalars(offset, &v.to_array()),
            BackendKind::Fast => fast::put_agg(v, offset, dst, 4, raw::put_vec4::<T>),
        }
    }

    /// Read 4 scalars at `offset` into `v`.
    pub fn get_vec4<T: Scalar>(
        &self,
        v: &mut Vec4<T>,
        offset: usize,
        src: &impl ScalarSource<T>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => {
                let mut a = [T::ZERO; 4];
                src.read_scalars(offset, &mut a)?;
                *v = Vec4::from_array(a);
                Ok(())
            }
            BackendKind::Fast => fast::get_agg(v, offset, src, 4, raw::get_vec4::<T>),
        }
    }

    // -- quaternions ------------------------------------------------------

    /// Write the 4 scalars of `q` (x, y, z, w) at `offset`.
    pub fn put_quat<T: Scalar>(
        &self,
        q: &Quat<T>,
        offset: usize,
        dst: &mut impl ScalarSink<T>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => dst.write_scalars(offset, &q.to_array()),
            BackendKind::Fast => fast::put_agg(q, offset, dst, 4, raw::put_quat::<T>),
        }
    }

    /// Read 4 scalars at `offset` into `q`.
    pub fn get_quat<T: Scalar>(
        &self,
        q: &mut Quat<T>,
        offset: usize,
        src: &impl ScalarSource<T>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => {
                let mut a = [T::ZERO; 4];
                src.read_scalars(offset, &mut a)?;
                *q = Quat::from_array(a);
                Ok(())
            }
            BackendKind::Fast => fast::get_agg(q, offset, src, 4, raw::get_quat::<T>),
        }
    }

    // -- square matrices --------------------------------------------------

    /// Write the 4 scalars of `m` in canonical column-major order.
    pub fn put_mat2<T: Scalar>(
        &self,
        m: &Mat2<T>,
        offset: usize,
        dst: &mut impl ScalarSink<T>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => dst.write_scalars(offset, &m.to_array()),
            BackendKind::Fast => fast::put_agg(m, offset, dst, 4, raw::put_mat2::<T>),
        }
    }

    /// Read 4 scalars at `offset` into `m`.
    pub fn get_mat2<T: Scalar>(
        &self,
        m: &mut Mat2<T>,
        offset: usize,
        src: &impl ScalarSource<T>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => {
                let mut a = [T::ZERO; 4];
                src.read_scalars(offset, &mut a)?;
                *m = Mat2::from_array(a);
                Ok(())
            }
            BackendKind::Fast => fast::get_agg(m, offset, src, 4, raw::get_mat2::<T>),
        }
    }

    /// Write the 9 scalars of `m` in canonical column-major order.
    pub fn put_mat3<T: Scalar>(
        &self,
        m: &Mat3<T>,
        offset: usize,
        dst: &mut impl ScalarSink<T>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => dst.write_scalars(offset, &m.to_array()),
            BackendKind::Fast => fast::put_agg(m, offset, dst, 9, raw::put_mat3::<T>),
        }
    }

    /// Read 9 scalars at `offset` into `m`.
    pub fn get_mat3<T: Scalar>(
        &self,
        m: &mut Mat3<T>,
        offset: usize,
        src: &impl ScalarSource<T>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => {
                let mut a = [T::ZERO; 9];
                src.read_scalars(offset, &mut a)?;
                *m = Mat3::from_array(a);
                Ok(())
            }
            BackendKind::Fast => fast::get_agg(m, offset, src, 9, raw::get_mat3::<T>),
        }
    }

    /// Write the 16 scalars of `m` in canonical column-major order.
    pub fn put_mat4<T: Scalar>(
        &self,
        m: &Mat4<T>,
        offset: usize,
        dst: &mut impl ScalarSink<T>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => dst.write_scalars(offset, &m.to_array()),
            BackendKind::Fast => fast::put_agg(m, offset, dst, 16, raw::put_mat4::<T>),
        }
    }

    /// Read 16 scalars at `offset` into `m`.
    pub fn get_mat4<T: Scalar>(
        &self,
        m: &mut Mat4<T>,
        offset: usize,
        src: &impl ScalarSource<T>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => {
                let mut a = [T::ZERO; 16];
                src.read_scalars(offset, &mut a)?;
                *m = Mat4::from_array(a);
                Ok(())
            }
            BackendKind::Fast => fast::get_agg(m, offset, src, 16, raw::get_mat4::<T>),
        }
    }

    // -- rectangular matrices ---------------------------------------------

    /// Write the 6 scalars of `m` in canonical column-major order.
    pub fn put_mat3x2<T: Scalar>(
        &self,
        m: &Mat3x2<T>,
        offset: usize,
        dst: &mut impl ScalarSink<T>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => dst.write_scalars(offset, &m.to_array()),
            BackendKind::Fast => fast::put_agg(m, offset, dst, 6, raw::put_mat3x2::<T>),
        }
    }

    /// Read 6 scalars at `offset` into `m`.
    pub fn get_mat3x2<T: Scalar>(
        &self,
        m: &mut Mat3x2<T>,
        offset: usize,
        src: &impl ScalarSource<T>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => {
                let mut a = [T::ZERO; 6];
                src.read_scalars(offset, &mut a)?;
                *m = Mat3x2::from_array(a);
                Ok(())
            }
            BackendKind::Fast => fast::get_agg(m, offset, src, 6, raw::get_mat3x2::<T>),
        }
    }

    /// Write the 12 scalars of `m` in canonical column-major order.
    pub fn put_mat4x3<T: Scalar>(
        &self,
        m: &Mat4x3<T>,
        offset: usize,
        dst: &mut impl ScalarSink<T>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => dst.write_scalars(offset, &m.to_array()),
            BackendKind::Fast => fast::put_agg(m, offset, dst, 12, raw::put_mat4x3::<T>),
        }
    }

    /// Read 12 scalars at `offset` into `m`.
    pub fn get_mat4x3<T: Scalar>(
        &self,
        m: &mut Mat4x3<T>,
        offset: usize,
        src: &impl ScalarSource<T>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => {
                let mut a = [T::ZERO; 12];
                src.read_scalars(offset, &mut a)?;
                *m = Mat4x3::from_array(a);
                Ok(())
            }
            BackendKind::Fast => fast::get_agg(m, offset, src, 12, raw::get_mat4x3::<T>),
        }
    }

    // -- transposed writes ------------------------------------------------

    /// Write `m` in row-major order.
    pub fn put_mat2_transposed<T: Scalar>(
        &self,
        m: &Mat2<T>,
        offset: usize,
        dst: &mut impl ScalarSink<T>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => {
                dst.write_scalars(offset, &image::transposed(&layout::MAT2, &m.to_array()))
            }
            BackendKind::Fast => fast::put_agg(m, offset, dst, 4, raw::put_mat2_transposed::<T>),
        }
    }

    /// Write `m` in row-major order.
    pub fn put_mat3_transposed<T: Scalar>(
        &self,
        m: &Mat3<T>,
        offset: usize,
        dst: &mut impl ScalarSink<T>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => {
                dst.write_scalars(offset, &image::transposed(&layout::MAT3, &m.to_array()))
            }
            BackendKind::Fast => fast::put_agg(m, offset, dst, 9, raw::put_mat3_transposed::<T>),
        }
    }

    /// Write `m` in row-major order.
    pub fn put_mat4_transposed<T: Scalar>(
        &self,
        m: &Mat4<T>,
        offset: usize,
        dst: &mut impl ScalarSink<T>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => {
                dst.write_scalars(offset, &image::transposed(&layout::MAT4, &m.to_array()))
            }
            BackendKind::Fast => fast::put_agg(m, offset, dst, 16, raw::put_mat4_transposed::<T>),
        }
    }

    /// Write `m` as its 3×4 row-major image (12 scalars).
    pub fn put_mat4x3_transposed<T: Scalar>(
        &self,
        m: &Mat4x3<T>,
        offset: usize,
        dst: &mut impl ScalarSink<T>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => {
                dst.write_scalars(offset, &image::transposed(&layout::MAT4X3, &m.to_array()))
            }
            BackendKind::Fast => {
                fast::put_agg(m, offset, dst, 12, raw::put_mat4x3_transposed::<T>)
            }
        }
    }

    /// Write the upper 4×3 of `m`, row-major (12 scalars).
    pub fn put_mat4_4x3_transposed<T: Scalar>(
        &self,
        m: &Mat4<T>,
        offset: usize,
        dst: &mut impl ScalarSink<T>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => {
                dst.write_scalars(offset, &image::mat4_to_4x3_transposed(&m.to_array()))
            }
            BackendKind::Fast => {
                fast::put_agg(m, offset, dst, 12, raw::put_mat4_4x3_transposed::<T>)
            }
        }
    }

    // -- padded expansions ------------------------------------------------

    /// Expand `m` into a 4×4 slot with a homogeneous last column/row.
    pub fn put_mat3f_4x4(
        &self,
        m: &Mat3<f32>,
        offset: usize,
        dst: &mut impl ScalarSink<f32>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => dst.write_scalars(offset, &image::mat3_to_4x4(&m.to_array())),
            BackendKind::Fast => fast::put_agg(m, offset, dst, 16, raw::put_mat3f_4x4),
        }
    }

    /// Expand `m` into a 4×4 slot with a homogeneous last column/row.
    pub fn put_mat3d_4x4(
        &self,
        m: &Mat3<f64>,
        offset: usize,
        dst: &mut impl ScalarSink<f64>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => dst.write_scalars(offset, &image::mat3_to_4x4(&m.to_array())),
            BackendKind::Fast => fast::put_agg(m, offset, dst, 16, raw::put_mat3d_4x4),
        }
    }

    /// Expand `m` into a 4×4 slot; the fourth row becomes (0, 0, 0, 1).
    pub fn put_mat4x3f_4x4(
        &self,
        m: &Mat4x3<f32>,
        offset: usize,
        dst: &mut impl ScalarSink<f32>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => dst.write_scalars(offset, &image::mat4x3_to_4x4(&m.to_array())),
            BackendKind::Fast => fast::put_agg(m, offset, dst, 16, raw::put_mat4x3f_4x4),
        }
    }

    /// Expand `m` into a 4×4 slot; the fourth row becomes (0, 0, 0, 1).
    pub fn put_mat4x3d_4x4(
        &self,
        m: &Mat4x3<f64>,
        offset: usize,
        dst: &mut impl ScalarSink<f64>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => dst.write_scalars(offset, &image::mat4x3_to_4x4(&m.to_array())),
            BackendKind::Fast => fast::put_agg(m, offset, dst, 16, raw::put_mat4x3d_4x4),
        }
    }

    /// Expand `m` into a 3×3 slot with a homogeneous third row.
    pub fn put_mat3x2f_3x3(
        &self,
        m: &Mat3x2<f32>,
        offset: usize,
        dst: &mut impl ScalarSink<f32>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => dst.write_scalars(offset, &image::mat3x2_to_3x3(&m.to_array())),
            BackendKind::Fast => fast::put_agg(m, offset, dst, 9, raw::put_mat3x2f_3x3),
        }
    }

    /// Expand `m` into a 3×3 slot with a homogeneous third row.
    pub fn put_mat3x2d_3x3(
        &self,
        m: &Mat3x2<f64>,
        offset: usize,
        dst: &mut impl ScalarSink<f64>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => dst.write_scalars(offset, &image::mat3x2_to_3x3(&m.to_array())),
            BackendKind::Fast => fast::put_agg(m, offset, dst, 9, raw::put_mat3x2d_3x3),
        }
    }

    /// Expand `m` into a homogeneous 4×4 slot.
    pub fn put_mat3x2f_4x4(
        &self,
        m: &Mat3x2<f32>,
        offset: usize,
        dst: &mut impl ScalarSink<f32>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => dst.write_scalars(offset, &image::mat3x2_to_4x4(&m.to_array())),
            BackendKind::Fast => fast::put_agg(m, offset, dst, 16, raw::put_mat3x2f_4x4),
        }
    }

    /// Expand `m` into a homogeneous 4×4 slot.
    pub fn put_mat3x2d_4x4(
        &self,
        m: &Mat3x2<f64>,
        offset: usize,
        dst: &mut impl ScalarSink<f64>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => dst.write_scalars(offset, &image::mat3x2_to_4x4(&m.to_array())),
            BackendKind::Fast => fast::put_agg(m, offset, dst, 16, raw::put_mat3x2d_4x4),
        }
    }

    // -- precision narrowing/widening -------------------------------------

    /// Write `v` as 2 narrowed f32 scalars.
    pub fn putf_vec2(
        &self,
        v: &Vec2<f64>,
        offset: usize,
        dst: &mut impl ScalarSink<f32>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => dst.write_scalars(offset, &image::narrowed(&v.to_array())),
            BackendKind::Fast => fast::put_agg(v, offset, dst, 2, raw::putf_vec2),
        }
    }

    /// Read 2 f32 scalars, widened, into `v`.
    pub fn getf_vec2(
        &self,
        v: &mut Vec2<f64>,
        offset: usize,
        src: &impl ScalarSource<f32>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => {
                let mut a = [0.0f32; 2];
                src.read_scalars(offset, &mut a)?;
                *v = Vec2::from_array(image::widened(&a));
                Ok(())
            }
            BackendKind::Fast => fast::get_agg(v, offset, src, 2, raw::getf_vec2),
        }
    }

    /// Write `v` as 3 narrowed f32 scalars.
    pub fn putf_vec3(
        &self,
        v: &Vec3<f64>,
        offset: usize,
        dst: &mut impl ScalarSink<f32>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => dst.write_scalars(offset, &image::narrowed(&v.to_array())),
            BackendKind::Fast => fast::put_agg(v, offset, dst, 3, raw::putf_vec3),
        }
    }

    /// Read 3 f32 scalars, widened, into `v`.
    pub fn getf_vec3(
        &self,
        v: &mut Vec3<f64>,
        offset: usize,
        src: &impl ScalarSource<f32>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => {
                let mut a = [0.0f32; 3];
                src.read_scalars(offset, &mut a)?;
                *v = Vec3::from_array(image::widened(&a));
                Ok(())
            }
            BackendKind::Fast => fast::get_agg(v, offset, src, 3, raw::getf_vec3),
        }
    }

    /// Write `v` as 4 narrowed f32 scalars.
    pub fn putf_vec4(
        &self,
        v: &Vec4<f64>,
        offset: usize,
        dst: &mut impl ScalarSink<f32>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => dst.write_scalars(offset, &image::narrowed(&v.to_array())),
            BackendKind::Fast => fast::put_agg(v, offset, dst, 4, raw::putf_vec4),
        }
    }

    /// Read 4 f32 scalars, widened, into `v`.
    pub fn getf_vec4(
        &self,
        v: &mut Vec4<f64>,
        offset: usize,
        src: &impl ScalarSource<f32>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => {
                let mut a = [0.0f32; 4];
                src.read_scalars(offset, &mut a)?;
                *v = Vec4::from_array(image::widened(&a));
                Ok(())
            }
            BackendKind::Fast => fast::get_agg(v, offset, src, 4, raw::getf_vec4),
        }
    }

    /// Write `q` as 4 narrowed f32 scalars.
    pub fn putf_quat(
        &self,
        q: &Quat<f64>,
        offset: usize,
        dst: &mut impl ScalarSink<f32>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => dst.write_scalars(offset, &image::narrowed(&q.to_array())),
            BackendKind::Fast => fast::put_agg(q, offset, dst, 4, raw::putf_quat),
        }
    }

    /// Read 4 f32 scalars, widened, into `q`.
    pub fn getf_quat(
        &self,
        q: &mut Quat<f64>,
        offset: usize,
        src: &impl ScalarSource<f32>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => {
                let mut a = [0.0f32; 4];
                src.read_scalars(offset, &mut a)?;
                *q = Quat::from_array(image::widened(&a));
                Ok(())
            }
            BackendKind::Fast => fast::get_agg(q, offset, src, 4, raw::getf_quat),
        }
    }

    /// Write `m` as 4 narrowed f32 scalars.
    pub fn putf_mat2(
        &self,
        m: &Mat2<f64>,
        offset: usize,
        dst: &mut impl ScalarSink<f32>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => dst.write_scalars(offset, &image::narrowed(&m.to_array())),
            BackendKind::Fast => fast::put_agg(m, offset, dst, 4, raw::putf_mat2),
        }
    }

    /// Read 4 f32 scalars, widened, into `m`.
    pub fn getf_mat2(
        &self,
        m: &mut Mat2<f64>,
        offset: usize,
        src: &impl ScalarSource<f32>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => {
                let mut a = [0.0f32; 4];
                src.read_scalars(offset, &mut a)?;
                *m = Mat2::from_array(image::widened(&a));
                Ok(())
            }
            BackendKind::Fast => fast::get_agg(m, offset, src, 4, raw::getf_mat2),
        }
    }

    /// Write `m` as 9 narrowed f32 scalars.
    pub fn putf_mat3(
        &self,
        m: &Mat3<f64>,
        offset: usize,
        dst: &mut impl ScalarSink<f32>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => dst.write_scalars(offset, &image::narrowed(&m.to_array())),
            BackendKind::Fast => fast::put_agg(m, offset, dst, 9, raw::putf_mat3),
        }
    }

    /// Read 9 f32 scalars, widened, into `m`.
    pub fn getf_mat3(
        &self,
        m: &mut Mat3<f64>,
        offset: usize,
        src: &impl ScalarSource<f32>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => {
                let mut a = [0.0f32; 9];
                src.read_scalars(offset, &mut a)?;
                *m = Mat3::from_array(image::widened(&a));
                Ok(())
            }
            BackendKind::Fast => fast::get_agg(m, offset, src, 9, raw::getf_mat3),
        }
    }

    /// Write `m` as 16 narrowed f32 scalars.
    pub fn putf_mat4(
        &self,
        m: &Mat4<f64>,
        offset: usize,
        dst: &mut impl ScalarSink<f32>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => dst.write_scalars(offset, &image::narrowed(&m.to_array())),
            BackendKind::Fast => fast::put_agg(m, offset, dst, 16, raw::putf_mat4),
        }
    }

    /// Read 16 f32 scalars, widened, into `m`.
    pub fn getf_mat4(
        &self,
        m: &mut Mat4<f64>,
        offset: usize,
        src: &impl ScalarSource<f32>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => {
                let mut a = [0.0f32; 16];
                src.read_scalars(offset, &mut a)?;
                *m = Mat4::from_array(image::widened(&a));
                Ok(())
            }
            BackendKind::Fast => fast::get_agg(m, offset, src, 16, raw::getf_mat4),
        }
    }

    /// Write `m` as 6 narrowed f32 scalars.
    pub fn putf_mat3x2(
        &self,
        m: &Mat3x2<f64>,
        offset: usize,
        dst: &mut impl ScalarSink<f32>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => dst.write_scalars(offset, &image::narrowed(&m.to_array())),
            BackendKind::Fast => fast::put_agg(m, offset, dst, 6, raw::putf_mat3x2),
        }
    }

    /// Read 6 f32 scalars, widened, into `m`.
    pub fn getf_mat3x2(
        &self,
        m: &mut Mat3x2<f64>,
        offset: usize,
        src: &impl ScalarSource<f32>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => {
                let mut a = [0.0f32; 6];
                src.read_scalars(offset, &mut a)?;
                *m = Mat3x2::from_array(image::widened(&a));
                Ok(())
            }
            BackendKind::Fast => fast::get_agg(m, offset, src, 6, raw::getf_mat3x2),
        }
    }

    /// Write `m` as 12 narrowed f32 scalars.
    pub fn putf_mat4x3(
        &self,
        m: &Mat4x3<f64>,
        offset: usize,
        dst: &mut impl ScalarSink<f32>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => dst.write_scalars(offset, &image::narrowed(&m.to_array())),
            BackendKind::Fast => fast::put_agg(m, offset, dst, 12, raw::putf_mat4x3),
        }
    }

    /// Read 12 f32 scalars, widened, into `m`.
    pub fn getf_mat4x3(
        &self,
        m: &mut Mat4x3<f64>,
        offset: usize,
        src: &impl ScalarSource<f32>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => {
                let mut a = [0.0f32; 12];
                src.read_scalars(offset, &mut a)?;
                *m = Mat4x3::from_array(image::widened(&a));
                Ok(())
            }
            BackendKind::Fast => fast::get_agg(m, offset, src, 12, raw::getf_mat4x3),
        }
    }

    /// Write `m` in row-major order as 16 narrowed f32 scalars.
    pub fn putf_mat4_transposed(
        &self,
        m: &Mat4<f64>,
        offset: usize,
        dst: &mut impl ScalarSink<f32>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => {
                let t = image::transposed(&layout::MAT4, &m.to_array());
                dst.write_scalars(offset, &image::narrowed(&t))
            }
            BackendKind::Fast => fast::put_agg(m, offset, dst, 16, raw::putf_mat4_transposed),
        }
    }

    /// Write `m` as its 3×4 row-major image, 12 narrowed f32 scalars.
    pub fn putf_mat4x3_transposed(
        &self,
        m: &Mat4x3<f64>,
        offset: usize,
        dst: &mut impl ScalarSink<f32>,
    ) -> Result<(), MarshalError> {
        match self.kind {
            BackendKind::Safe => {
                let t = image::transposed(&layout::MAT4X3, &m.to_array());
                dst.write_scalars(offset, &image::narrowed(&t))
            }
            BackendKind::Fast => fast::put_agg(m, offset, dst, 12, raw::putf_mat4x3_transposed),
        }
    }
}
