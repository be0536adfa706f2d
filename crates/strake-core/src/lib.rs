//! Core types for the Strake marshaling layer.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the aggregate shapes (matrices, vectors, quaternions in `f32` and
//! `f64`), the layout catalog describing their canonical scalar order
//! and footprint, the offset validator that certifies their in-memory
//! representation against that catalog, and the error types shared by
//! the buffer and marshal crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod layout;
pub mod scalar;
pub mod validate;

mod mat;
mod quat;
mod vec;

pub use error::{LayoutError, MarshalError};
pub use mat::{
    Mat2, Mat2d, Mat2f, Mat3, Mat3d, Mat3f, Mat3x2, Mat3x2d, Mat3x2f, Mat4, Mat4d, Mat4f, Mat4x3,
    Mat4x3d, Mat4x3f,
};
pub use quat::{Quat, Quatd, Quatf};
pub use scalar::Scalar;
pub use validate::validate_layouts;
pub use vec::{Vec2, Vec2d, Vec2f, Vec3, Vec3d, Vec3f, Vec4, Vec4d, Vec4f};
