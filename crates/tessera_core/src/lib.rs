//! # Tessera Core
//!
//! Geometry support library for the Tessera quad pipeline:
//! - [`Vector3`] double precision vectors
//! - [`Cuboid6`] and [`Aabb`] axis-aligned boxes
//! - [`Orientation`] face directions, paired as opposites
//!
//! ## Example
//!
//! ```rust
//! use tessera_core::{Axis, Cuboid6, Orientation, Vector3};
//!
//! let bounds = Cuboid6::new(Vector3::ZERO, Vector3::new(1.0, 1.0, 1.0));
//! assert!(bounds.contains(Vector3::new(0.5, 0.5, 0.5)));
//! assert_eq!(Orientation::Down.in_plane_axes(), [Axis::X, Axis::Z]);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod cuboid;
pub mod math;
pub mod orientation;
pub mod vector;

pub use cuboid::{Aabb, Cuboid6};
pub use math::{approx_eq, between, clip, EPSILON};
pub use orientation::{Axis, Orientation};
pub use vector::Vector3;
