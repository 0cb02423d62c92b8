//! Vertex formats.
//!
//! A [`VertexFormat`] is an ordered list of [`VertexFormatElement`]s, each
//! tagged with a [`Usage`]. Packed quad data is a flat `u32` buffer holding
//! four vertices laid out back to back, every element at the byte offset the
//! format assigns it.
//!
//! - [`codec`]: the per-element pack/unpack primitive
//! - [`locate`]: finding semantic elements by usage
//! - [`packing`]: whole-quad pack/unpack built on the two above

pub mod codec;
mod element;
pub mod locate;
pub mod packing;

pub use element::{ElementType, Usage, VertexFormat, VertexFormatElement};
pub use locate::{ElementIndices, FormatCache};
pub use packing::{UnpackedQuad, VERTICES_PER_QUAD};
