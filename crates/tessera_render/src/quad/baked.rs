//! Packed quads as owned by the host engine.

use tessera_core::Orientation;

/// A quad in packed form, ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct BakedQuad {
    /// Four vertices packed per the vertex format.
    pub vertex_data: Vec<u32>,
    /// Tint index, `-1` for untinted.
    pub tint_index: i32,
    /// Face the quad belongs to.
    pub face: Orientation,
    /// Name of the sprite the quad samples, if known.
    pub sprite: Option<String>,
    /// Whether the host should apply directional shading.
    pub diffuse_lighting: bool,
}

impl BakedQuad {
    /// Creates an untinted, shaded quad with no sprite.
    #[must_use]
    pub fn new(vertex_data: Vec<u32>, face: Orientation) -> Self {
        Self {
            vertex_data,
            tint_index: -1,
            face,
            sprite: None,
            diffuse_lighting: true,
        }
    }

    /// Sets the tint index.
    #[must_use]
    pub fn with_tint(mut self, tint_index: i32) -> Self {
        self.tint_index = tint_index;
        self
    }

    /// Sets the sprite name.
    #[must_use]
    pub fn with_sprite(mut self, sprite: impl Into<String>) -> Self {
        self.sprite = Some(sprite.into());
        self
    }

    /// Returns true if the quad has a tint index.
    #[must_use]
    pub const fn has_tint(&self) -> bool {
        self.tint_index != -1
    }

    /// The packed words as bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertex_data)
    }
}
