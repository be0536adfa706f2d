//! Strake: bit-exact marshaling of fixed-shape numeric aggregates —
//! matrices, vectors, and quaternions in single and double precision —
//! to and from externally managed memory buffers.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Strake sub-crates. For most users, adding `strake` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strake::prelude::*;
//!
//! // The process-wide codec: probed once, fast backend when the
//! // aggregate layouts validate, safe backend otherwise.
//! let codec = strake::codec();
//!
//! // Marshal a matrix into a direct (address-stable) scalar buffer.
//! let m = Mat4f::identity();
//! let mut buf = FloatBuf::allocate_direct(16);
//! codec.put_mat4(&m, 0, &mut buf).unwrap();
//!
//! // Read it back bit-for-bit.
//! let mut out = Mat4f::default();
//! codec.get_mat4(&mut out, 0, &buf).unwrap();
//! assert_eq!(out, m);
//!
//! // The cursor is never touched by marshal operations.
//! assert_eq!(buf.position(), 0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strake-core` | Aggregate types, layout catalog, offset validation, errors |
//! | [`buf`] | `strake-buf` | Typed and byte buffers, sink/source traits |
//! | [`marshal`] | `strake-marshal` | Backends, selection, raw-address operations |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Aggregate types, layout catalog, and offset validation
/// (`strake-core`).
pub use strake_core as types;

/// Buffer destinations and the sink/source traits (`strake-buf`).
pub use strake_buf as buf;

/// Marshal backends, backend selection, and the raw-address operation
/// set (`strake-marshal`).
pub use strake_marshal as marshal;

pub use strake_marshal::codec;

/// Common imports for typical Strake usage.
///
/// ```rust
/// use strake::prelude::*;
/// ```
pub mod prelude {
    // Aggregate shapes
    pub use strake_core::{
        Mat2, Mat2d, Mat2f, Mat3, Mat3d, Mat3f, Mat3x2, Mat3x2d, Mat3x2f, Mat4, Mat4d, Mat4f,
        Mat4x3, Mat4x3d, Mat4x3f, Quat, Quatd, Quatf, Vec2, Vec2d, Vec2f, Vec3, Vec3d, Vec3f,
        Vec4, Vec4d, Vec4f,
    };

    // Errors
    pub use strake_core::{LayoutError, MarshalError};

    // Buffers
    pub use strake_buf::{ByteBuf, DoubleBuf, FloatBuf, ScalarSink, ScalarSource, TypedBuf};

    // Backend selection
    pub use strake_marshal::{codec, BackendKind, Codec, Strategy};
}
