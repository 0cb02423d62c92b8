//! Clamp stage.

use crate::pipeline::QuadTransformer;
use crate::quad::Quad;
use tessera_core::Cuboid6;

/// Clamps vertex positions into a box and culls quads that collapse.
///
/// Only positions move. Follow with a
/// [`QuadReInterpolator`](super::QuadReInterpolator) to bring uv, colour
/// and lightmap along.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadClamper {
    clamp_bounds: Cuboid6,
}

impl QuadClamper {
    /// Creates a clamper for `bounds`, given as a [`Cuboid6`] or an
    /// [`Aabb`](tessera_core::Aabb).
    #[must_use]
    pub fn new(bounds: impl Into<Cuboid6>) -> Self {
        Self {
            clamp_bounds: bounds.into(),
        }
    }

    /// Replaces the clamp bounds. They apply to every following quad.
    pub fn set_clamp_bounds(&mut self, bounds: impl Into<Cuboid6>) {
        self.clamp_bounds.set(bounds);
    }

    /// The current clamp bounds.
    #[must_use]
    pub const fn clamp_bounds(&self) -> &Cuboid6 {
        &self.clamp_bounds
    }
}

impl Default for QuadClamper {
    fn default() -> Self {
        Self::new(Cuboid6::FULL_BLOCK)
    }
}

impl QuadTransformer for QuadClamper {
    fn name(&self) -> &'static str {
        "clamp"
    }

    fn transform(&mut self, quad: &mut Quad) -> bool {
        quad.clamp(&self.clamp_bounds);
        // A box outside the face on an in-plane axis lands here too:
        // every vertex ends up on the same boundary coordinate.
        !quad.is_degenerate()
    }
}
