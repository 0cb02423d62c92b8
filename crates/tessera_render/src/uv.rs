//! Texture coordinates and UV transformations.

use crate::sprite::Sprite;
use tessera_core::Vector3;

/// A texture coordinate pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Uv {
    /// Horizontal coordinate.
    pub u: f64,
    /// Vertical coordinate.
    pub v: f64,
}

impl Uv {
    /// Creates a new coordinate pair.
    #[must_use]
    pub const fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }
}

/// A position with a texture coordinate, the input for building quads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vertex5 {
    /// Model-space position.
    pub vec: Vector3,
    /// Texture coordinate.
    pub uv: Uv,
}

impl Vertex5 {
    /// Creates a vertex from position and uv components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, u: f64, v: f64) -> Self {
        Self {
            vec: Vector3::new(x, y, z),
            uv: Uv::new(u, v),
        }
    }
}

/// Maps texture coordinates in place.
pub trait UvTransform {
    /// Applies the mapping to `uv`.
    fn apply(&self, uv: &mut Uv);
}

/// Adds a constant offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvTranslation {
    /// Horizontal offset.
    pub du: f64,
    /// Vertical offset.
    pub dv: f64,
}

impl UvTransform for UvTranslation {
    fn apply(&self, uv: &mut Uv) {
        uv.u += self.du;
        uv.v += self.dv;
    }
}

/// Multiplies by a constant factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvScale {
    /// Horizontal factor.
    pub su: f64,
    /// Vertical factor.
    pub sv: f64,
}

impl UvTransform for UvScale {
    fn apply(&self, uv: &mut Uv) {
        uv.u *= self.su;
        uv.v *= self.sv;
    }
}

/// Maps the unit square onto a sprite's region of the atlas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteUvTransform<'a> {
    sprite: &'a Sprite,
}

impl<'a> SpriteUvTransform<'a> {
    /// Creates a transform targeting `sprite`.
    #[must_use]
    pub const fn new(sprite: &'a Sprite) -> Self {
        Self { sprite }
    }
}

impl UvTransform for SpriteUvTransform<'_> {
    fn apply(&self, uv: &mut Uv) {
        uv.u = self.sprite.interpolated_u(uv.u);
        uv.v = self.sprite.interpolated_v(uv.v);
    }
}

/// Leaves coordinates unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityUv;

impl UvTransform for IdentityUv {
    fn apply(&self, _uv: &mut Uv) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_and_scale() {
        let mut uv = Uv::new(0.5, 0.25);
        UvScale { su: 2.0, sv: 4.0 }.apply(&mut uv);
        UvTranslation { du: -1.0, dv: 0.0 }.apply(&mut uv);
        assert_eq!(uv, Uv::new(0.0, 1.0));
    }

    #[test]
    fn test_sprite_transform_maps_unit_square() {
        let sprite = Sprite::new("stone", 0.5, 0.75, 0.25, 0.5);
        let transform = SpriteUvTransform::new(&sprite);

        let mut corner = Uv::new(1.0, 0.0);
        transform.apply(&mut corner);
        assert_eq!(corner, Uv::new(0.75, 0.25));

        let mut middle = Uv::new(0.5, 0.5);
        transform.apply(&mut middle);
        assert_eq!(middle, Uv::new(0.625, 0.375));
    }
}
