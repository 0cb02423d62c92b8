//! Quads: the mutable working form and the packed baked form.
//!
//! A [`Quad`] is what pipeline stages mutate. A [`BakedQuad`] is what the
//! host hands in and gets back: packed words plus face metadata.

mod baked;
mod vertex;

pub use baked::BakedQuad;
pub use vertex::{Quad, Vertex};
