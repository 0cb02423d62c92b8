//! # Tessera
//!
//! Quad pipeline utilities for voxel game mods.
//!
//! The host mod loader constructs a [`Tessera`] and calls its lifecycle
//! callbacks in order. Model baking code then asks it for pipeline
//! builders configured from `config/tessera.toml`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use tessera::{Dist, Tessera};
//! use tessera::render::VertexFormat;
//! use tessera::geometry::Cuboid6;
//!
//! let mut lib = Tessera::new(Dist::Client);
//! lib.on_common_setup(Path::new(Tessera::CONFIG_PATH))?;
//! lib.on_client_setup()?;
//!
//! let mut pipeline = lib
//!     .pipeline_builder(VertexFormat::block())
//!     .clamp(Cuboid6::FULL_BLOCK)
//!     .build();
//! let trimmed = pipeline.run(&baked_quad)?;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod lifecycle;

pub use config::{PipelineConfig, SpriteConfig, TesseraConfig};
pub use error::{ConfigError, TesseraError, TesseraResult};
pub use lifecycle::{Dist, LifecyclePhase, Tessera};

/// Geometry support types.
pub use tessera_core as geometry;
/// Quad pipeline and vertex formats.
pub use tessera_render as render;
