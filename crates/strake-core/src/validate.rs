//! Offset validator: certifies that each aggregate type's in-memory
//! field layout matches the layout catalog's offset arithmetic.
//!
//! The fast backend reads an aggregate's field block as a contiguous
//! scalar array starting at the struct's base address. That is only
//! sound if every field `i` actually lives at byte offset `i * width`.
//! `#[repr(C)]` with no interior padding guarantees it for these field
//! types, and the const assertions below fail the build outright if a
//! footprint ever disagrees; [`validate_layouts`] re-derives the same
//! facts from `offset_of!` at backend construction so the verdict is
//! recorded against the exact binary being run.
//!
//! A failure here is a permanent capability verdict for the whole
//! process: if one type's layout cannot be trusted, the compiler's
//! layout decisions cannot be trusted for any of them, and the fast
//! backend must never be selected.

use std::any::type_name;
use std::mem::{align_of, offset_of, size_of};

use crate::error::LayoutError;
use crate::mat::{Mat2, Mat3, Mat3x2, Mat4, Mat4x3};
use crate::quat::Quat;
use crate::scalar::Scalar;
use crate::vec::{Vec2, Vec3, Vec4};

// Footprints are also enforced at build time; a hidden-padding
// regression fails compilation before it can fail validation.
const _: () = {
    assert!(size_of::<Vec2<f32>>() == 8 && size_of::<Vec2<f64>>() == 16);
    assert!(size_of::<Vec3<f32>>() == 12 && size_of::<Vec3<f64>>() == 24);
    assert!(size_of::<Vec4<f32>>() == 16 && size_of::<Vec4<f64>>() == 32);
    assert!(size_of::<Quat<f32>>() == 16 && size_of::<Quat<f64>>() == 32);
    assert!(size_of::<Mat2<f32>>() == 16 && size_of::<Mat2<f64>>() == 32);
    assert!(size_of::<Mat3<f32>>() == 36 && size_of::<Mat3<f64>>() == 72);
    assert!(size_of::<Mat4<f32>>() == 64 && size_of::<Mat4<f64>>() == 128);
    assert!(size_of::<Mat3x2<f32>>() == 24 && size_of::<Mat3x2<f64>>() == 48);
    assert!(size_of::<Mat4x3<f32>>() == 48 && size_of::<Mat4x3<f64>>() == 96);
    assert!(align_of::<Mat4<f32>>() == align_of::<f32>());
    assert!(align_of::<Mat4<f64>>() == align_of::<f64>());
};

/// Validate every aggregate type in the catalog, both precisions.
///
/// Returns the first violation found. Success means the fast backend
/// may treat every aggregate as a contiguous scalar block for the
/// lifetime of the process.
pub fn validate_layouts() -> Result<(), LayoutError> {
    check_vec2::<f32>()?;
    check_vec2::<f64>()?;
    check_vec3::<f32>()?;
    check_vec3::<f64>()?;
    check_vec4::<f32>()?;
    check_vec4::<f64>()?;
    check_quat::<f32>()?;
    check_quat::<f64>()?;
    check_mat2::<f32>()?;
    check_mat2::<f64>()?;
    check_mat3::<f32>()?;
    check_mat3::<f64>()?;
    check_mat4::<f32>()?;
    check_mat4::<f64>()?;
    check_mat3x2::<f32>()?;
    check_mat3x2::<f64>()?;
    check_mat4x3::<f32>()?;
    check_mat4x3::<f64>()?;
    Ok(())
}

/// Assert a contiguous, catalog-ordered run of fields.
///
/// `fields` lists `(name, actual_offset)` in canonical order; field `i`
/// must live at `i * width`, the type must have no trailing padding,
/// and its alignment must equal the scalar's.
fn check_contiguous(
    type_name: &'static str,
    width: usize,
    size: usize,
    align: usize,
    scalar_align: usize,
    fields: &[(&'static str, usize)],
) -> Result<(), LayoutError> {
    if align != scalar_align {
        return Err(LayoutError::Alignment {
            type_name,
            expected: scalar_align,
            actual: align,
        });
    }
    let expected_size = fields.len() * width;
    if size != expected_size {
        return Err(LayoutError::Footprint {
            type_name,
            expected: expected_size,
            actual: size,
        });
    }
    for (i, (field, actual)) in fields.iter().enumerate() {
        let expected = i * width;
        if *actual != expected {
            return Err(LayoutError::FieldOffset {
                type_name,
                field,
                expected,
                actual: *actual,
            });
        }
    }
    Ok(())
}

fn check_vec2<T: Scalar>() -> Result<(), LayoutError> {
    check_contiguous(
        type_name::<Vec2<T>>(),
        T::WIDTH,
        size_of::<Vec2<T>>(),
        align_of::<Vec2<T>>(),
        align_of::<T>(),
        &[
            ("x", offset_of!(Vec2<T>, x)),
            ("y", offset_of!(Vec2<T>, y)),
        ],
    )
}

fn check_vec3<T: Scalar>() -> Result<(), LayoutError> {
    check_contiguous(
        type_name::<Vec3<T>>(),
        T::WIDTH,
        size_of::<Vec3<T>>(),
        align_of::<Vec3<T>>(),
        align_of::<T>(),
        &[
            ("x", offset_of!(Vec3<T>, x)),
            ("y", offset_of!(Vec3<T>, y)),
            ("z", offset_of!(Vec3<T>, z)),
        ],
    )
}

fn check_vec4<T: Scalar>() -> Result<(), LayoutError> {
    check_contiguous(
        type_name::<Vec4<T>>(),
        T::WIDTH,
        size_of::<Vec4<T>>(),
        align_of::<Vec4<T>>(),
        align_of::<T>(),
        &[
            ("x", offset_of!(Vec4<T>, x)),
            ("y", offset_of!(Vec4<T>, y)),
            ("z", offset_of!(Vec4<T>, z)),
            ("w", offset_of!(Vec4<T>, w)),
        ],
    )
}

fn check_quat<T: Scalar>() -> Result<(), LayoutError> {
    check_contiguous(
        type_name::<Quat<T>>(),
        T::WIDTH,
        size_of::<Quat<T>>(),
        align_of::<Quat<T>>(),
        align_of::<T>(),
        &[
            ("x", offset_of!(Quat<T>, x)),
            ("y", offset_of!(Quat<T>, y)),
            ("z", offset_of!(Quat<T>, z)),
            ("w", offset_of!(Quat<T>, w)),
        ],
    )
}

fn check_mat2<T: Scalar>() -> Result<(), LayoutError> {
    check_contiguous(
        type_name::<Mat2<T>>(),
        T::WIDTH,
        size_of::<Mat2<T>>(),
        align_of::<Mat2<T>>(),
        align_of::<T>(),
        &[
            ("m00", offset_of!(Mat2<T>, m00)),
            ("m01", offset_of!(Mat2<T>, m01)),
            ("m10", offset_of!(Mat2<T>, m10)),
            ("m11", offset_of!(Mat2<T>, m11)),
        ],
    )
}

fn check_mat3<T: Scalar>() -> Result<(), LayoutError> {
    check_contiguous(
        type_name::<Mat3<T>>(),
        T::WIDTH,
        size_of::<Mat3<T>>(),
        align_of::<Mat3<T>>(),
        align_of::<T>(),
        &[
            ("m00", offset_of!(Mat3<T>, m00)),
            ("m01", offset_of!(Mat3<T>, m01)),
            ("m02", offset_of!(Mat3<T>, m02)),
            ("m10", offset_of!(Mat3<T>, m10)),
            ("m11", offset_of!(Mat3<T>, m11)),
            ("m12", offset_of!(Mat3<T>, m12)),
            ("m20", offset_of!(Mat3<T>, m20)),
            ("m21", offset_of!(Mat3<T>, m21)),
            ("m22", offset_of!(Mat3<T>, m22)),
        ],
    )
}

fn check_mat4<T: Scalar>() -> Result<(), LayoutError> {
    check_contiguous(
        type_name::<Mat4<T>>(),
        T::WIDTH,
        size_of::<Mat4<T>>(),
        align_of::<Mat4<T>>(),
        align_of::<T>(),
        &[
            ("m00", offset_of!(Mat4<T>, m00)),
            ("m01", offset_of!(Mat4<T>, m01)),
            ("m02", offset_of!(Mat4<T>, m02)),
            ("m03", offset_of!(Mat4<T>, m03)),
            ("m10", offset_of!(Mat4<T>, m10)),
            ("m11", offset_of!(Mat4<T>, m11)),
            ("m12", offset_of!(Mat4<T>, m12)),
            ("m13", offset_of!(Mat4<T>, m13)),
            ("m20", offset_of!(Mat4<T>, m20)),
            ("m21", offset_of!(Mat4<T>, m21)),
            ("m22", offset_of!(Mat4<T>, m22)),
            ("m23", offset_of!(Mat4<T>, m23)),
            ("m30", offset_of!(Mat4<T>, m30)),
            ("m31", offset_of!(Mat4<T>, m31)),
            ("m32", offset_of!(Mat4<T>, m32)),
            ("m33", offset_of!(Mat4<T>, m33)),
        ],
    )
}

fn check_mat3x2<T: Scalar>() -> Result<(), LayoutError> {
    check_contiguous(
        type_name::<Mat3x2<T>>(),
        T::WIDTH,
        size_of::<Mat3x2<T>>(),
        align_of::<Mat3x2<T>>(),
        align_of::<T>(),
        &[
            ("m00", offset_of!(Mat3x2<T>, m00)),
            ("m01", offset_of!(Mat3x2<T>, m01)),
            ("m10", offset_of!(Mat3x2<T>, m10)),
            ("m11", offset_of!(Mat3x2<T>, m11)),
            ("m20", offset_of!(Mat3x2<T>, m20)),
            ("m21", offset_of!(Mat3x2<T>, m21)),
        ],
    )
}

fn check_mat4x3<T: Scalar>() -> Result<(), LayoutError> {
    check_contiguous(
        type_name::<Mat4x3<T>>(),
        T::WIDTH,
        size_of::<Mat4x3<T>>(),
        align_of::<Mat4x3<T>>(),
        align_of::<T>(),
        &[
            ("m00", offset_of!(Mat4x3<T>, m00)),
            ("m01", offset_of!(Mat4x3<T>, m01)),
            ("m02", offset_of!(Mat4x3<T>, m02)),
            ("m10", offset_of!(Mat4x3<T>, m10)),
            ("m11", offset_of!(Mat4x3<T>, m11)),
            ("m12", offset_of!(Mat4x3<T>, m12)),
            ("m20", offset_of!(Mat4x3<T>, m20)),
            ("m21", offset_of!(Mat4x3<T>, m21)),
            ("m22", offset_of!(Mat4x3<T>, m22)),
            ("m30", offset_of!(Mat4x3<T>, m30)),
            ("m31", offset_of!(Mat4x3<T>, m31)),
            ("m32", offset_of!(Mat4x3<T>, m32)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_shape_validates() {
        validate_layouts().unwrap();
    }

    #[test]
    fn misordered_fields_are_rejected() {
        // Synthetic field table with x and y swapped.
        let err = check_contiguous(
            "test::Swapped",
            4,
            8,
            4,
            4,
            &[("x", 4), ("y", 0)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            LayoutError::FieldOffset {
                type_name: "test::Swapped",
                field: "x",
                expected: 0,
                actual: 4,
            }
        );
    }

    #[test]
    fn hidden_padding_is_rejected() {
        let err = check_contiguous(
            "test::Padded",
            4,
            12,
            4,
            4,
            &[("x", 0), ("y", 4)],
        )
        .unwrap_err();
        assert!(matches!(err, LayoutError::Footprint { expected: 8, actual: 12, .. }));
    }

    #[test]
    fn foreign_alignment_is_rejected() {
        let err = check_contiguous("test::Aligned", 4, 8, 16, 4, &[("x", 0), ("y", 4)])
            .unwrap_err();
        assert!(matches!(err, LayoutError::Alignment { expected: 4, actual: 16, .. }));
    }
}
