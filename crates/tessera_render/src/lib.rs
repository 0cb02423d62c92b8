//! # Tessera Render
//!
//! Quad transformation pipeline for block and item models:
//! - Composable stages that mutate one shared [`Quad`] in place
//! - Clamping to a box with culling of collapsed quads
//! - Vertex format lookup and packing of whole quads
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       QUAD PIPELINE                           │
//! ├──────────────────────────────────────────────────────────────┤
//! │  BakedQuad ─unpack─▶ Quad ─▶ stage ─▶ stage ─▶ ... ─pack─▶ out │
//! │                         │        │                            │
//! │                      VertexFormat (locate + codec)            │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rules
//!
//! - One quad buffer per pipeline, no per-stage allocation
//! - Culling, missing elements and missing sprites are return values
//! - Pipelines are not shared between threads; build one per thread
//!
//! ## Example
//!
//! ```rust
//! use tessera_core::{Cuboid6, Orientation};
//! use tessera_render::{Quad, QuadPipeline, VertexFormat};
//!
//! let mut pipeline = QuadPipeline::builder(VertexFormat::block())
//!     .reinterpolate_clamped(true)
//!     .clamp(Cuboid6::FULL_BLOCK)
//!     .build();
//!
//! // A zero-area quad never survives a clamp.
//! let mut quad = Quad::new(Orientation::Up);
//! assert!(!pipeline.transform(&mut quad));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod colour;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod quad;
pub mod sprite;
pub mod util;
pub mod uv;

pub use colour::Colour;
pub use error::{FormatError, FormatResult};
pub use format::{
    ElementIndices, ElementType, FormatCache, UnpackedQuad, Usage, VertexFormat,
    VertexFormatElement, VERTICES_PER_QUAD,
};
pub use pipeline::transformers::{QuadClamper, QuadOffsetter, QuadReInterpolator};
pub use pipeline::{PipelineBuilder, PipelineElement, PipelineStats, QuadPipeline, QuadTransformer};
pub use quad::{BakedQuad, Quad, Vertex};
pub use sprite::{sprite_for_uv, sprite_for_uv_logged, Sprite, SpriteAtlas, SpriteSource};
pub use util::{build_quad, diffuse_face_light, sort_face_data};
pub use uv::{IdentityUv, SpriteUvTransform, Uv, UvScale, UvTransform, UvTranslation, Vertex5};
