//! Axis-aligned boxes.
//!
//! [`Aabb`] is the host engine's box representation, [`Cuboid6`] is ours.
//! Both convert into [`Cuboid6`], which is what clip stages store.

use crate::math::between;
use crate::vector::Vector3;

/// Axis-aligned box in the host engine's layout.
///
/// Corners are normalised on construction, so `min_* <= max_*` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum X.
    pub min_x: f64,
    /// Minimum Y.
    pub min_y: f64,
    /// Minimum Z.
    pub min_z: f64,
    /// Maximum X.
    pub max_x: f64,
    /// Maximum Y.
    pub max_y: f64,
    /// Maximum Z.
    pub max_z: f64,
}

impl Aabb {
    /// Creates a box spanning the two corners, in any order.
    #[must_use]
    pub fn new(x1: f64, y1: f64, z1: f64, x2: f64, y2: f64, z2: f64) -> Self {
        Self {
            min_x: x1.min(x2),
            min_y: y1.min(y2),
            min_z: z1.min(z2),
            max_x: x1.max(x2),
            max_y: y1.max(y2),
            max_z: z1.max(z2),
        }
    }
}

/// Axis-aligned box with minimum and maximum corners.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cuboid6 {
    /// Minimum corner.
    pub min: Vector3,
    /// Maximum corner.
    pub max: Vector3,
}

impl Cuboid6 {
    /// The unit block, `[0, 1]` on every axis.
    pub const FULL_BLOCK: Self = Self::new(Vector3::ZERO, Vector3::ONE);

    /// Creates a box from its corners.
    #[must_use]
    pub const fn new(min: Vector3, max: Vector3) -> Self {
        Self { min, max }
    }

    /// Copies another box into this one.
    pub fn set(&mut self, other: impl Into<Cuboid6>) -> &mut Self {
        *self = other.into();
        self
    }

    /// Returns true if `point` lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, point: Vector3) -> bool {
        between(self.min.x, point.x, self.max.x)
            && between(self.min.y, point.y, self.max.y)
            && between(self.min.z, point.z, self.max.z)
    }

    /// Returns true if any axis has zero or negative extent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.max.x <= self.min.x || self.max.y <= self.min.y || self.max.z <= self.min.z
    }

    /// Translates both corners.
    pub fn offset(&mut self, delta: Vector3) -> &mut Self {
        self.min += delta;
        self.max += delta;
        self
    }

    /// Grows the box by `amount` on every side.
    pub fn expand(&mut self, amount: f64) -> &mut Self {
        let d = Vector3::new(amount, amount, amount);
        self.min = self.min - d;
        self.max = self.max + d;
        self
    }

    /// Returns the extent along each axis.
    #[must_use]
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }
}

impl From<Aabb> for Cuboid6 {
    fn from(b: Aabb) -> Self {
        Self::new(
            Vector3::new(b.min_x, b.min_y, b.min_z),
            Vector3::new(b.max_x, b.max_y, b.max_z),
        )
    }
}

impl From<&Aabb> for Cuboid6 {
    fn from(b: &Aabb) -> Self {
        Self::from(*b)
    }
}

impl From<&Cuboid6> for Cuboid6 {
    fn from(c: &Cuboid6) -> Self {
        *c
    }
}

impl From<Cuboid6> for Aabb {
    fn from(c: Cuboid6) -> Self {
        Self::new(c.min.x, c.min.y, c.min.z, c.max.x, c.max.y, c.max.z)
    }
}
