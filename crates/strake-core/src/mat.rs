//! Matrix aggregate shapes.
//!
//! All matrices are stored column-major: field `mCR` is column `C`,
//! row `R`, and the canonical scalar order is `m00, m01, …` — column 0
//! top to bottom, then column 1, and so on. Every type is `#[repr(C)]`
//! with declared field order equal to canonical order and no interior
//! padding; the offset validator in [`crate::validate`] certifies this
//! before the fast backend is allowed to read the field block as a
//! contiguous scalar array.
//!
//! These types carry no arithmetic. They are value carriers for the
//! marshaling layer; transform math lives with the callers.

use crate::scalar::Scalar;

/// A 2×2 column-major matrix (4 scalars).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat2<T: Scalar> {
    /// Column 0, row 0.
    pub m00: T,
    /// Column 0, row 1.
    pub m01: T,
    /// Column 1, row 0.
    pub m10: T,
    /// Column 1, row 1.
    pub m11: T,
}

/// Single-precision [`Mat2`].
pub type Mat2f = Mat2<f32>;
/// Double-precision [`Mat2`].
pub type Mat2d = Mat2<f64>;

impl<T: Scalar> Mat2<T> {
    /// Construct from scalars in canonical column-major order.
    pub fn new(m00: T, m01: T, m10: T, m11: T) -> Self {
        Self { m00, m01, m10, m11 }
    }

    /// The identity matrix.
    pub fn identity() -> Self {
        Self::new(T::ONE, T::ZERO, T::ZERO, T::ONE)
    }

    /// The scalars in canonical column-major order.
    pub fn to_array(&self) -> [T; 4] {
        [self.m00, self.m01, self.m10, self.m11]
    }

    /// Construct from canonical column-major order.
    pub fn from_array(a: [T; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl<T: Scalar> Default for Mat2<T> {
    fn default() -> Self {
        Self::identity()
    }
}

/// A 3×3 column-major matrix (9 scalars).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat3<T: Scalar> {
    /// Column 0, row 0.
    pub m00: T,
    /// Column 0, row 1.
    pub m01: T,
    /// Column 0, row 2.
    pub m02: T,
    /// Column 1, row 0.
    pub m10: T,
    /// Column 1, row 1.
    pub m11: T,
    /// Column 1, row 2.
    pub m12: T,
    /// Column 2, row 0.
    pub m20: T,
    /// Column 2, row 1.
    pub m21: T,
    /// Column 2, row 2.
    pub m22: T,
}

/// Single-precision [`Mat3`].
pub type Mat3f = Mat3<f32>;
/// Double-precision [`Mat3`].
pub type Mat3d = Mat3<f64>;

impl<T: Scalar> Mat3<T> {
    /// Construct from scalars in canonical column-major order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(m00: T, m01: T, m02: T, m10: T, m11: T, m12: T, m20: T, m21: T, m22: T) -> Self {
        Self {
            m00,
            m01,
            m02,
            m10,
            m11,
            m12,
            m20,
            m21,
            m22,
        }
    }

    /// The identity matrix.
    pub fn identity() -> Self {
        let (o, z) = (T::ONE, T::ZERO);
        Self::new(o, z, z, z, o, z, z, z, o)
    }

    /// The scalars in canonical column-major order.
    pub fn to_array(&self) -> [T; 9] {
        [
            self.m00, self.m01, self.m02, self.m10, self.m11, self.m12, self.m20, self.m21,
            self.m22,
        ]
    }

    /// Construct from canonical column-major order.
    pub fn from_array(a: [T; 9]) -> Self {
        Self::new(a[0], a[1], a[2], a[3], a[4], a[5], a[6], a[7], a[8])
    }
}

impl<T: Scalar> Default for Mat3<T> {
    fn default() -> Self {
        Self::identity()
    }
}

/// A 4×4 column-major matrix (16 scalars).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4<T: Scalar> {
    /// Column 0, row 0.
    pub m00: T,
    /// Column 0, row 1.
    pub m01: T,
    /// Column 0, row 2.
    pub m02: T,
    /// Column 0, row 3.
    pub m03: T,
    /// Column 1, row 0.
    pub m10: T,
    /// Column 1, row 1.
    pub m11: T,
    /// Column 1, row 2.
    pub m12: T,
    /// Column 1, row 3.
    pub m13: T,
    /// Column 2, row 0.
    pub m20: T,
    /// Column 2, row 1.
    pub m21: T,
    /// Column 2, row 2.
    pub m22: T,
    /// Column 2, row 3.
    pub m23: T,
    /// Column 3, row 0.
    pub m30: T,
    /// Column 3, row 1.
    pub m31: T,
    /// Column 3, row 2.
    pub m32: T,
    /// Column 3, row 3.
    pub m33: T,
}

/// Single-precision [`Mat4`].
pub type Mat4f = Mat4<f32>;
/// Double-precision [`Mat4`].
pub type Mat4d = Mat4<f64>;

impl<T: Scalar> Mat4<T> {
    /// Construct from scalars in canonical column-major order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        m00: T,
        m01: T,
        m02: T,
        m03: T,
        m10: T,
        m11: T,
        m12: T,
        m13: T,
        m20: T,
        m21: T,
        m22: T,
        m23: T,
        m30: T,
        m31: T,
        m32: T,
        m33: T,
    ) -> Self {
        Self {
            m00,
            m01,
            m02,
            m03,
            m10,
            m11,
            m12,
            m13,
            m20,
            m21,
            m22,
            m23,
            m30,
            m31,
            m32,
            m33,
        }
    }

    /// The identity matrix.
    pub fn identity() -> Self {
        let (o, z) = (T::ONE, T::ZERO);
        Self::new(o, z, z, z, z, o, z, z, z, z, o, z, z, z, z, o)
    }

    /// The scalars in canonical column-major order.
    pub fn to_array(&self) -> [T; 16] {
        [
            self.m00, self.m01, self.m02, self.m03, self.m10, self.m11, self.m12, self.m13,
            self.m20, self.m21, self.m22, self.m23, self.m30, self.m31, self.m32, self.m33,
        ]
    }

    /// Construct from canonical column-major order.
    pub fn from_array(a: [T; 16]) -> Self {
        Self::new(
            a[0], a[1], a[2], a[3], a[4], a[5], a[6], a[7], a[8], a[9], a[10], a[11], a[12], a[13],
            a[14], a[15],
        )
    }
}

impl<T: Scalar> Default for Mat4<T> {
    fn default() -> Self {
        Self::identity()
    }
}

/// A 3-column, 2-row matrix (6 scalars): a 2D affine transform whose
/// third column holds the translation.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat3x2<T: Scalar> {
    /// Column 0, row 0.
    pub m00: T,
    /// Column 0, row 1.
    pub m01: T,
    /// Column 1, row 0.
    pub m10: T,
    /// Column 1, row 1.
    pub m11: T,
    /// Column 2, row 0 (translation x).
    pub m20: T,
    /// Column 2, row 1 (translation y).
    pub m21: T,
}

/// Single-precision [`Mat3x2`].
pub type Mat3x2f = Mat3x2<f32>;
/// Double-precision [`Mat3x2`].
pub type Mat3x2d = Mat3x2<f64>;

impl<T: Scalar> Mat3x2<T> {
    /// Construct from scalars in canonical column-major order.
    pub fn new(m00: T, m01: T, m10: T, m11: T, m20: T, m21: T) -> Self {
        Self {
            m00,
            m01,
            m10,
            m11,
            m20,
            m21,
        }
    }

    /// The identity transform (zero translation).
    pub fn identity() -> Self {
        let (o, z) = (T::ONE, T::ZERO);
        Self::new(o, z, z, o, z, z)
    }

    /// The scalars in canonical column-major order.
    pub fn to_array(&self) -> [T; 6] {
        [self.m00, self.m01, self.m10, self.m11, self.m20, self.m21]
    }

    /// Construct from canonical column-major order.
    pub fn from_array(a: [T; 6]) -> Self {
        Self::new(a[0], a[1], a[2], a[3], a[4], a[5])
    }
}

impl<T: Scalar> Default for Mat3x2<T> {
    fn default() -> Self {
        Self::identity()
    }
}

/// A 4-column, 3-row matrix (12 scalars): a 3D affine transform whose
/// fourth column holds the translation. Marshaling it into a 4×4 slot
/// appends the implicit homogeneous fourth row (0, 0, 0, 1).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4x3<T: Scalar> {
    /// Column 0, row 0.
    pub m00: T,
    /// Column 0, row 1.
    pub m01: T,
    /// Column 0, row 2.
    pub m02: T,
    /// Column 1, row 0.
    pub m10: T,
    /// Column 1, row 1.
    pub m11: T,
    /// Column 1, row 2.
    pub m12: T,
    /// Column 2, row 0.
    pub m20: T,
    /// Column 2, row 1.
    pub m21: T,
    /// Column 2, row 2.
    pub m22: T,
    /// Column 3, row 0 (translation x).
    pub m30: T,
    /// Column 3, row 1 (translation y).
    pub m31: T,
    /// Column 3, row 2 (translation z).
    pub m32: T,
}

/// Single-precision [`Mat4x3`].
pub type Mat4x3f = Mat4x3<f32>;
/// Double-precision [`Mat4x3`].
pub type Mat4x3d = Mat4x3<f64>;

impl<T: Scalar> Mat4x3<T> {
    /// Construct from scalars in canonical column-major order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        m00: T,
        m01: T,
        m02: T,
        m10: T,
        m11: T,
        m12: T,
        m20: T,
        m21: T,
        m22: T,
        m30: T,
        m31: T,
        m32: T,
    ) -> Self {
        Self {
            m00,
            m01,
            m02,
            m10,
            m11,
            m12,
            m20,
            m21,
            m22,
            m30,
            m31,
            m32,
        }
    }

    /// The identity transform (zero translation).
    pub fn identity() -> Self {
        let (o, z) = (T::ONE, T::ZERO);
        Self::new(o, z, z, z, o, z, z, z, o, z, z, z)
    }

    /// The scalars in canonical column-major order.
    pub fn to_array(&self) -> [T; 12] {
        [
            self.m00, self.m01, self.m02, self.m10, self.m11, self.m12, self.m20, self.m21,
            self.m22, self.m30, self.m31, self.m32,
        ]
    }

    /// Construct from canonical column-major order.
    pub fn from_array(a: [T; 12]) -> Self {
        Self::new(
            a[0], a[1], a[2], a[3], a[4], a[5], a[6], a[7], a[8], a[9], a[10], a[11],
        )
    }
}

impl<T: Scalar> Default for Mat4x3<T> {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_round_trip_preserves_canonical_order() {
        let m = Mat4f::from_array(std::array::from_fn(|i| i as f32));
        assert_eq!(m.m00, 0.0);
        assert_eq!(m.m03, 3.0);
        assert_eq!(m.m10, 4.0);
        assert_eq!(m.m33, 15.0);
        assert_eq!(m.to_array(), std::array::from_fn(|i| i as f32));
    }

    #[test]
    fn identity_has_unit_diagonal() {
        let m = Mat3d::identity();
        assert_eq!(m.m00, 1.0);
        assert_eq!(m.m11, 1.0);
        assert_eq!(m.m22, 1.0);
        assert_eq!(m.m01, 0.0);

        let a = Mat4x3f::identity().to_array();
        assert_eq!(a, [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(Mat2f::default(), Mat2f::identity());
        assert_eq!(Mat3x2d::default(), Mat3x2d::identity());
    }
}
