//! Translation stage.

use crate::pipeline::QuadTransformer;
use crate::quad::Quad;
use tessera_core::Vector3;

/// Moves every vertex by a fixed offset. Never culls.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QuadOffsetter {
    offset: Vector3,
}

impl QuadOffsetter {
    /// Creates an offsetter.
    #[must_use]
    pub const fn new(offset: Vector3) -> Self {
        Self { offset }
    }

    /// Replaces the offset.
    pub fn set_offset(&mut self, offset: Vector3) {
        self.offset = offset;
    }
}

impl QuadTransformer for QuadOffsetter {
    fn name(&self) -> &'static str {
        "offset"
    }

    fn transform(&mut self, quad: &mut Quad) -> bool {
        quad.offset(self.offset);
        true
    }
}
