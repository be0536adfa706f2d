//! Marshal backends and backend selection for Strake.
//!
//! Two interchangeable implementations of the marshal operation
//! surface:
//!
//! - the **safe backend** materializes each operation's scalar image
//!   and performs one bounds-checked bulk transfer through the buffer
//!   traits;
//! - the **fast backend** runs the same bounds check, then copies raw
//!   machine words against the buffer's base address — available only
//!   once the offset validator has certified every aggregate's field
//!   layout, and only against direct buffers.
//!
//! [`Codec::with_strategy`] constructs the strategy value explicitly;
//! [`codec()`] exposes the lazily-selected process-wide instance. The
//! raw-address operation set used by the fast backend is exported in
//! [`raw`] for callers that own memory outright.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

mod codec;
mod fast;
mod image;
pub mod raw;
mod select;

pub use codec::{BackendKind, Codec};
pub use select::{codec, Strategy, SAFE_ONLY_ENV};
