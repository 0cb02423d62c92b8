//! Sprites and the uv fallback lookup.
//!
//! The atlas belongs to the host. [`SpriteSource`] is the view of it this
//! crate needs; [`SpriteAtlas`] is a plain in-memory implementation.

use crate::uv::Uv;
use tessera_core::between;

/// A named rectangular region of a texture atlas.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    /// Resource name.
    pub name: String,
    /// Left edge.
    pub min_u: f32,
    /// Right edge.
    pub max_u: f32,
    /// Top edge.
    pub min_v: f32,
    /// Bottom edge.
    pub max_v: f32,
}

impl Sprite {
    /// Creates a sprite covering `[min_u, max_u] x [min_v, max_v]`.
    #[must_use]
    pub fn new(name: impl Into<String>, min_u: f32, max_u: f32, min_v: f32, max_v: f32) -> Self {
        Self {
            name: name.into(),
            min_u,
            max_u,
            min_v,
            max_v,
        }
    }

    /// Maps `t` in `[0, 1]` to this sprite's u range.
    #[must_use]
    pub fn interpolated_u(&self, t: f64) -> f64 {
        f64::from(self.min_u) + f64::from(self.max_u - self.min_u) * t
    }

    /// Maps `t` in `[0, 1]` to this sprite's v range.
    #[must_use]
    pub fn interpolated_v(&self, t: f64) -> f64 {
        f64::from(self.min_v) + f64::from(self.max_v - self.min_v) * t
    }

    /// Returns true if `uv` lies inside, edges included.
    #[must_use]
    pub fn contains(&self, uv: Uv) -> bool {
        between(f64::from(self.min_u), uv.u, f64::from(self.max_u))
            && between(f64::from(self.min_v), uv.v, f64::from(self.max_v))
    }
}

/// Read access to a texture atlas.
pub trait SpriteSource {
    /// Every registered sprite, in the atlas' iteration order.
    fn sprites(&self) -> &[Sprite];

    /// The sprite drawn when a lookup fails.
    fn missing_sprite(&self) -> &Sprite;
}

/// In-memory atlas iterating in registration order.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteAtlas {
    sprites: Vec<Sprite>,
    missing: Sprite,
}

impl SpriteAtlas {
    /// Name of the default missing sprite.
    pub const MISSING_NAME: &'static str = "missingno";

    /// Creates an empty atlas with the default missing sprite.
    #[must_use]
    pub fn new() -> Self {
        Self::with_missing(Sprite::new(Self::MISSING_NAME, 0.0, 1.0, 0.0, 1.0))
    }

    /// Creates an empty atlas with a custom missing sprite.
    #[must_use]
    pub fn with_missing(missing: Sprite) -> Self {
        Self {
            sprites: Vec::new(),
            missing,
        }
    }

    /// Registers a sprite at the end of the iteration order.
    pub fn register(&mut self, sprite: Sprite) {
        self.sprites.push(sprite);
    }

    /// Looks a sprite up by name, falling back to the missing sprite.
    #[must_use]
    pub fn get(&self, name: &str) -> &Sprite {
        self.sprites
            .iter()
            .find(|s| s.name == name)
            .unwrap_or(&self.missing)
    }

    /// Number of registered sprites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Returns true if no sprite is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

impl Default for SpriteAtlas {
    fn default() -> Self {
        Self::new()
    }
}

impl SpriteSource for SpriteAtlas {
    fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    fn missing_sprite(&self) -> &Sprite {
        &self.missing
    }
}

/// Finds the sprite whose region contains `uv`.
///
/// Scans every sprite in order and returns the first hit, or the missing
/// sprite. This is O(sprites) per call with no index; keep it off hot paths
/// and use it only when nothing better identifies the sprite.
#[must_use]
pub fn sprite_for_uv<S: SpriteSource + ?Sized>(source: &S, uv: Uv) -> &Sprite {
    source
        .sprites()
        .iter()
        .find(|sprite| sprite.contains(uv))
        .unwrap_or_else(|| source.missing_sprite())
}

/// [`sprite_for_uv`], logging when the missing sprite is returned.
///
/// With `warn` set the fallback is logged at warn level, otherwise at debug.
#[must_use]
pub fn sprite_for_uv_logged<S: SpriteSource + ?Sized>(source: &S, uv: Uv, warn: bool) -> &Sprite {
    match source.sprites().iter().find(|sprite| sprite.contains(uv)) {
        Some(sprite) => sprite,
        None => {
            if warn {
                tracing::warn!(u = uv.u, v = uv.v, "no sprite contains uv, using missing sprite");
            } else {
                tracing::debug!(u = uv.u, v = uv.v, "no sprite contains uv, using missing sprite");
            }
            source.missing_sprite()
        }
    }
}
