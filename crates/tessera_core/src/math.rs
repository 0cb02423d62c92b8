//! Scalar helpers.

/// Tolerance used by [`approx_eq`].
pub const EPSILON: f64 = 1e-5;

/// Returns true if `x` lies in `[min, max]`, both ends inclusive.
#[inline]
#[must_use]
pub fn between(min: f64, x: f64, max: f64) -> bool {
    min <= x && x <= max
}

/// Clamps `x` to `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics when `min > max`; the lower
/// bound wins, matching how inverted boxes collapse geometry.
#[inline]
#[must_use]
pub fn clip(x: f64, min: f64, max: f64) -> f64 {
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

/// Returns true if `a` and `b` differ by less than [`EPSILON`].
#[inline]
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_is_inclusive() {
        assert!(between(0.0, 0.0, 1.0));
        assert!(between(0.0, 1.0, 1.0));
        assert!(!between(0.0, 1.000_1, 1.0));
    }

    #[test]
    fn test_clip() {
        assert_eq!(clip(-2.0, 0.0, 1.0), 0.0);
        assert_eq!(clip(2.0, 0.0, 1.0), 1.0);
        assert_eq!(clip(0.25, 0.0, 1.0), 0.25);
    }

    #[test]
    fn test_clip_inverted_range_does_not_panic() {
        assert_eq!(clip(5.0, 2.0, 1.0), 1.0);
        assert_eq!(clip(-5.0, 2.0, 1.0), 2.0);
    }

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.0 + 1e-7));
        assert!(!approx_eq(1.0, 1.001));
    }
}
