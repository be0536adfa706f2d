//! Layout catalog: the canonical scalar order and footprint of every
//! aggregate shape.
//!
//! Pure data plus const arithmetic, no behavior. The offset validator
//! and both marshal backends consume the same catalog so that their
//! notions of "element 7 of a 4×4" can never disagree.
//!
//! Canonical order is column-major throughout: element `i` of a
//! `cols × rows` matrix is column `i / rows`, row `i % rows`. The
//! transposed image used by `put_*_transposed` operations is the same
//! scalars laid out row-major; [`ShapeLayout::transposed_index`] maps
//! between the two.

/// Shape description of one aggregate type.
///
/// `cols` is 1 for vectors and quaternions, so `scalar_count` is simply
/// the component count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeLayout {
    /// Display name of the shape (precision-independent).
    pub name: &'static str,
    /// Number of columns.
    pub cols: usize,
    /// Number of rows.
    pub rows: usize,
}

impl ShapeLayout {
    /// Number of scalars in the canonical image.
    pub const fn scalar_count(&self) -> usize {
        self.cols * self.rows
    }

    /// Byte footprint of the canonical image for a scalar width.
    pub const fn byte_len(&self, width: usize) -> usize {
        self.scalar_count() * width
    }

    /// Canonical index of the scalar occupying slot `i` of the
    /// transposed (row-major) image.
    ///
    /// For a 4×4 this yields the order `m00, m10, m20, m30, m01, …`;
    /// for the 4×3 it yields the 3×4 row-major order.
    pub const fn transposed_index(&self, i: usize) -> usize {
        let c = i % self.cols;
        let r = i / self.cols;
        c * self.rows + r
    }
}

/// 2-component vector.
pub const VEC2: ShapeLayout = ShapeLayout {
    name: "Vec2",
    cols: 1,
    rows: 2,
};
/// 3-component vector.
pub const VEC3: ShapeLayout = ShapeLayout {
    name: "Vec3",
    cols: 1,
    rows: 3,
};
/// 4-component vector.
pub const VEC4: ShapeLayout = ShapeLayout {
    name: "Vec4",
    cols: 1,
    rows: 4,
};
/// Quaternion (x, y, z, w).
pub const QUAT: ShapeLayout = ShapeLayout {
    name: "Quat",
    cols: 1,
    rows: 4,
};
/// 2×2 matrix.
pub const MAT2: ShapeLayout = ShapeLayout {
    name: "Mat2",
    cols: 2,
    rows: 2,
};
/// 3×3 matrix.
pub const MAT3: ShapeLayout = ShapeLayout {
    name: "Mat3",
    cols: 3,
    rows: 3,
};
/// 4×4 matrix.
pub const MAT4: ShapeLayout = ShapeLayout {
    name: "Mat4",
    cols: 4,
    rows: 4,
};
/// 3-column, 2-row affine matrix.
pub const MAT3X2: ShapeLayout = ShapeLayout {
    name: "Mat3x2",
    cols: 3,
    rows: 2,
};
/// 4-column, 3-row affine matrix.
pub const MAT4X3: ShapeLayout = ShapeLayout {
    name: "Mat4x3",
    cols: 4,
    rows: 3,
};

/// Every shape in the catalog, for exhaustive validation sweeps.
pub const ALL: &[ShapeLayout] = &[VEC2, VEC3, VEC4, QUAT, MAT2, MAT3, MAT4, MAT3X2, MAT4X3];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_counts() {
        assert_eq!(MAT4.scalar_count(), 16);
        assert_eq!(MAT4X3.scalar_count(), 12);
        assert_eq!(MAT3X2.scalar_count(), 6);
        assert_eq!(QUAT.scalar_count(), 4);
        assert_eq!(VEC2.byte_len(4), 8);
        assert_eq!(MAT4.byte_len(8), 128);
    }

    #[test]
    fn mat4_transposed_order_is_row_major() {
        let order: Vec<usize> = (0..16).map(|i| MAT4.transposed_index(i)).collect();
        assert_eq!(
            order,
            vec![0, 4, 8, 12, 1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15]
        );
    }

    #[test]
    fn mat4x3_transposed_order_is_3x4_row_major() {
        // m00 m10 m20 m30 | m01 m11 m21 m31 | m02 m12 m22 m32
        let order: Vec<usize> = (0..12).map(|i| MAT4X3.transposed_index(i)).collect();
        assert_eq!(order, vec![0, 3, 6, 9, 1, 4, 7, 10, 2, 5, 8, 11]);
    }

    #[test]
    fn transpose_is_an_involution_for_square_shapes() {
        for layout in [MAT2, MAT3, MAT4] {
            for i in 0..layout.scalar_count() {
                assert_eq!(
                    layout.transposed_index(layout.transposed_index(i)),
                    i,
                    "{} slot {i}",
                    layout.name
                );
            }
        }
    }

    #[test]
    fn vector_transpose_is_identity() {
        for i in 0..4 {
            assert_eq!(VEC4.transposed_index(i), i);
        }
    }
}
