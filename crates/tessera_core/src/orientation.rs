//! Face orientations.
//!
//! The six axis-aligned face directions, declared as pairs of opposites.
//! Which axes lie in the plane of a face comes from an explicit table
//! ([`Orientation::in_plane_axes`]) rather than from declaration order.

/// A spatial axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis.
    Z,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Index into `[x, y, z]` arrays.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

/// Direction a face points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Facing -Y.
    Down,
    /// Facing +Y.
    Up,
    /// Facing -Z.
    North,
    /// Facing +Z.
    South,
    /// Facing -X.
    West,
    /// Facing +X.
    East,
}

impl Orientation {
    /// All orientations in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Down,
        Self::Up,
        Self::North,
        Self::South,
        Self::West,
        Self::East,
    ];

    /// Declaration index, opposites adjacent.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        match self {
            Self::Down => 0,
            Self::Up => 1,
            Self::North => 2,
            Self::South => 3,
            Self::West => 4,
            Self::East => 5,
        }
    }

    /// The axis the face normal runs along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Down | Self::Up => Axis::Y,
            Self::North | Self::South => Axis::Z,
            Self::West | Self::East => Axis::X,
        }
    }

    /// The two axes spanning the face plane.
    ///
    /// Never contains [`Orientation::axis`].
    #[must_use]
    pub const fn in_plane_axes(self) -> [Axis; 2] {
        match self {
            Self::Down | Self::Up => [Axis::X, Axis::Z],
            Self::North | Self::South => [Axis::X, Axis::Y],
            Self::West | Self::East => [Axis::Z, Axis::Y],
        }
    }

    /// The face pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }

    /// Unit normal.
    #[must_use]
    pub const fn normal(self) -> [f32; 3] {
        match self {
            Self::Down => [0.0, -1.0, 0.0],
            Self::Up => [0.0, 1.0, 0.0],
            Self::North => [0.0, 0.0, -1.0],
            Self::South => [0.0, 0.0, 1.0],
            Self::West => [-1.0, 0.0, 0.0],
            Self::East => [1.0, 0.0, 0.0],
        }
    }

    /// The orientation whose normal is closest to `(x, y, z)`.
    ///
    /// Ties resolve in declaration order. A zero vector yields [`Orientation::Up`].
    #[must_use]
    pub fn from_normal(x: f32, y: f32, z: f32) -> Self {
        let mut best = Self::Up;
        let mut best_dot = 0.0f32;
        for face in Self::ALL {
            let n = face.normal();
            let dot = n[0] * x + n[1] * y + n[2] * z;
            if dot > best_dot {
                best_dot = dot;
                best = face;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_plane_axes_exclude_normal_axis() {
        for face in Orientation::ALL {
            let [a, b] = face.in_plane_axes();
            assert_ne!(a, face.axis());
            assert_ne!(b, face.axis());
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_down_excludes_y() {
        assert_eq!(Orientation::Down.axis(), Axis::Y);
        assert_eq!(Orientation::Down.in_plane_axes(), [Axis::X, Axis::Z]);
    }

    #[test]
    fn test_opposites_are_adjacent_pairs() {
        for face in Orientation::ALL {
            assert_eq!(face.opposite().opposite(), face);
            assert_eq!(face.ordinal() / 2, face.opposite().ordinal() / 2);
            assert_eq!(face.axis(), face.opposite().axis());
        }
    }

    #[test]
    fn test_from_normal() {
        assert_eq!(Orientation::from_normal(0.0, -0.9, 0.1), Orientation::Down);
        assert_eq!(Orientation::from_normal(0.7, 0.1, 0.0), Orientation::East);
        assert_eq!(Orientation::from_normal(0.0, 0.0, 0.0), Orientation::Up);
    }
}
