//! Scalar image builders for the bounds-checked backend.
//!
//! Every marshal operation writes some *image* of its aggregate: the
//! canonical order, the transposed order, a padded expansion into a
//! larger footprint, or a precision-converted copy. The safe backend
//! materializes that image into a stack array here and performs a
//! single bounds-checked bulk transfer; the property tests hold the
//! fast backend to byte-identical output.
//!
//! The padded builders are the executable statement of the padding
//! policy: unfilled elements take the homogeneous-coordinate constants
//! (off-diagonal 0, diagonal 1), never left undefined.

use strake_core::layout::ShapeLayout;
use strake_core::Scalar;

/// Permute a canonical image into its transposed (row-major) order.
pub(crate) fn transposed<T: Scalar, const N: usize>(layout: &ShapeLayout, a: &[T; N]) -> [T; N] {
    debug_assert_eq!(layout.scalar_count(), N);
    std::array::from_fn(|i| a[layout.transposed_index(i)])
}

/// Upper 4×3 of a 4×4, transposed: three rows of four, row-major.
pub(crate) fn mat4_to_4x3_transposed<T: Scalar>(a: &[T; 16]) -> [T; 12] {
    std::array::from_fn(|i| {
        let c = i % 4;
        let r = i / 4;
        a[c * 4 + r]
    })
}

/// Expand a 3×3 into a 4×4 slot with a homogeneous last column/row.
pub(crate) fn mat3_to_4x4<T: Scalar>(a: &[T; 9]) -> [T; 16] {
    let (o, z) = (T::ONE, T::ZERO);
    [
        a[0], a[1], a[2], z, //
        a[3], a[4], a[5], z, //
        a[6], a[7], a[8], z, //
        z, z, z, o,
    ]
}

/// Expand a 4×3 affine into a 4×4 slot: each column gains the implicit
/// fourth-row element (0, 0, 0, 1).
pub(crate) fn mat4x3_to_4x4<T: Scalar>(a: &[T; 12]) -> [T; 16] {
    let (o, z) = (T::ONE, T::ZERO);
    [
        a[0], a[1], a[2], z, //
        a[3], a[4], a[5], z, //
        a[6], a[7], a[8], z, //
        a[9], a[10], a[11], o,
    ]
}

/// Expand a 3×2 affine into a 3×3 slot with a homogeneous third row.
pub(crate) fn mat3x2_to_3x3<T: Scalar>(a: &[T; 6]) -> [T; 9] {
    let (o, z) = (T::ONE, T::ZERO);
    [
        a[0], a[1], z, //
        a[2], a[3], z, //
        a[4], a[5], o,
    ]
}

/// Expand a 3×2 affine into a homogeneous 4×4 slot: linear part in
/// columns 0–1, unit z column, translation in column 3.
pub(crate) fn mat3x2_to_4x4<T: Scalar>(a: &[T; 6]) -> [T; 16] {
    let (o, z) = (T::ONE, T::ZERO);
    [
        a[0], a[1], z, z, //
        a[2], a[3], z, z, //
        z, z, o, z, //
        a[4], a[5], z, o,
    ]
}

/// Per-scalar `f64` → `f32` narrowing (round-to-nearest cast).
pub(crate) fn narrowed<const N: usize>(a: &[f64; N]) -> [f32; N] {
    a.map(|v| v as f32)
}

/// Per-scalar `f32` → `f64` widening (exact).
pub(crate) fn widened<const N: usize>(a: &[f32; N]) -> [f64; N] {
    a.map(f64::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strake_core::layout;

    #[test]
    fn transposed_mat4_is_row_major() {
        let a: [f32; 16] = std::array::from_fn(|i| i as f32);
        let t = transposed(&layout::MAT4, &a);
        assert_eq!(
            t,
            [
                0.0, 4.0, 8.0, 12.0, 1.0, 5.0, 9.0, 13.0, 2.0, 6.0, 10.0, 14.0, 3.0, 7.0, 11.0,
                15.0
            ]
        );
    }

    #[test]
    fn mat4x3_padding_fills_fourth_row() {
        let a = [2.0f32; 12];
        let p = mat4x3_to_4x4(&a);
        for c in 0..4 {
            assert_eq!(&p[c * 4..c * 4 + 3], &[2.0; 3]);
        }
        assert_eq!(p[3], 0.0);
        assert_eq!(p[7], 0.0);
        assert_eq!(p[11], 0.0);
        assert_eq!(p[15], 1.0);
    }

    #[test]
    fn mat3_padding_is_homogeneous() {
        let a = [5.0f64; 9];
        let p = mat3_to_4x4(&a);
        assert_eq!(p[3], 0.0);
        assert_eq!(p[7], 0.0);
        assert_eq!(p[11], 0.0);
        assert_eq!(&p[12..], &[0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn mat3x2_expansions_place_translation_last() {
        let a = [10.0f32, 11.0, 12.0, 13.0, 14.0, 15.0];
        assert_eq!(
            mat3x2_to_3x3(&a),
            [10.0, 11.0, 0.0, 12.0, 13.0, 0.0, 14.0, 15.0, 1.0]
        );
        assert_eq!(
            mat3x2_to_4x4(&a),
            [
                10.0, 11.0, 0.0, 0.0, //
                12.0, 13.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                14.0, 15.0, 0.0, 1.0
            ]
        );
    }

    #[test]
    fn mat4_4x3_transposed_drops_last_row() {
        let a: [f32; 16] = std::array::from_fn(|i| i as f32);
        // Rows of the upper 4x3: (m00 m10 m20 m30)(m01 ...)(m02 ...).
        assert_eq!(
            mat4_to_4x3_transposed(&a),
            [0.0, 4.0, 8.0, 12.0, 1.0, 5.0, 9.0, 13.0, 2.0, 6.0, 10.0, 14.0]
        );
    }

    #[test]
    fn narrowing_matches_scalar_cast() {
        let a = [1.0f64, 1e-40, f64::MAX, -0.0];
        let n = narrowed(&a);
        for (v, w) in a.iter().zip(n) {
            assert_eq!(w.to_bits(), (*v as f32).to_bits());
        }
    }

    #[test]
    fn widening_is_exact() {
        let a = [1.5f32, -2.25, f32::MIN_POSITIVE, 0.1];
        let w = widened(&a);
        for (v, d) in a.iter().zip(w) {
            assert_eq!(d.to_bits(), f64::from(*v).to_bits());
        }
    }
}
