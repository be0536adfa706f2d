//! Vector aggregate shapes.
//!
//! Canonical scalar order is `x, y(, z(, w))`. Like the matrix types,
//! vectors are `#[repr(C)]` value carriers with no arithmetic.

use crate::scalar::Scalar;

/// A 2-component vector.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2<T: Scalar> {
    /// First component.
    pub x: T,
    /// Second component.
    pub y: T,
}

/// Single-precision [`Vec2`].
pub type Vec2f = Vec2<f32>;
/// Double-precision [`Vec2`].
pub type Vec2d = Vec2<f64>;

impl<T: Scalar> Vec2<T> {
    /// Construct from components.
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// The components in canonical order.
    pub fn to_array(&self) -> [T; 2] {
        [self.x, self.y]
    }

    /// Construct from canonical order.
    pub fn from_array(a: [T; 2]) -> Self {
        Self::new(a[0], a[1])
    }
}

/// A 3-component vector.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3<T: Scalar> {
    /// First component.
    pub x: T,
    /// Second component.
    pub y: T,
    /// Third component.
    pub z: T,
}

/// Single-precision [`Vec3`].
pub type Vec3f = Vec3<f32>;
/// Double-precision [`Vec3`].
pub type Vec3d = Vec3<f64>;

impl<T: Scalar> Vec3<T> {
    /// Construct from components.
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// The components in canonical order.
    pub fn to_array(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Construct from canonical order.
    pub fn from_array(a: [T; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

/// A 4-component vector.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec4<T: Scalar> {
    /// First component.
    pub x: T,
    /// Second component.
    pub y: T,
    /// Third component.
    pub z: T,
    /// Fourth component.
    pub w: T,
}

/// Single-precision [`Vec4`].
pub type Vec4f = Vec4<f32>;
/// Double-precision [`Vec4`].
pub type Vec4d = Vec4<f64>;

impl<T: Scalar> Vec4<T> {
    /// Construct from components.
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// The components in canonical order.
    pub fn to_array(&self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Construct from canonical order.
    pub fn from_array(a: [T; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_is_xyzw() {
        let v = Vec4d::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(Vec4d::from_array([1.0, 2.0, 3.0, 4.0]), v);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Vec3f::default().to_array(), [0.0; 3]);
    }
}
