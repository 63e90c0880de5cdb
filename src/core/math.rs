//! Mathematical primitives for phase and angle arithmetic.
//!
//! All angles are in radians. Wrapping uses the `atan2(sin x, cos x)` form,
//! which maps any finite angle into (-π, π] and is exact at zero.

/// Wrap an angle into (-π, π].
///
/// # Example
/// ```
/// use disha_df::core::math::normalize_angle;
/// use std::f64::consts::PI;
///
/// assert_eq!(normalize_angle(0.0), 0.0);
/// assert!((normalize_angle(3.0 * PI) - PI).abs() < 1e-12);
/// ```
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    angle.sin().atan2(angle.cos())
}

/// Shortest signed angular difference from angle `a` to angle `b`.
///
/// Returns the angle you need to add to `a` to reach `b`, taking the
/// shortest path around the circle.
#[inline]
pub fn angle_diff(a: f64, b: f64) -> f64 {
    normalize_angle(b - a)
}

/// Uniformly spaced samples over [start, stop], endpoints included.
///
/// `points == 1` yields just `[start]`. Matches the sweep-grid convention
/// used throughout the simulation harness.
pub fn linspace(start: f64, stop: f64, points: usize) -> Vec<f64> {
    if points == 0 {
        return Vec::new();
    }
    if points == 1 {
        return vec![start];
    }
    let step = (stop - start) / (points - 1) as f64;
    (0..points).map(|i| start + step * i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_normalize_angle_zero_is_exact() {
        assert_eq!(normalize_angle(0.0), 0.0);
    }

    #[test]
    fn test_normalize_angle_wraps_multiples_of_two_pi() {
        assert_relative_eq!(normalize_angle(2.0 * PI), 0.0, epsilon = 1e-12);
        assert_relative_eq!(normalize_angle(-2.0 * PI), 0.0, epsilon = 1e-12);
        assert_relative_eq!(normalize_angle(3.0 * PI), PI, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_angle_just_beyond_boundary() {
        let result = normalize_angle(PI + 0.001);
        assert!(result < 0.0, "should wrap to negative: {}", result);
        assert_relative_eq!(result, -PI + 0.001, epsilon = 1e-9);
    }

    #[test]
    fn test_angle_diff_crossing_pi() {
        assert_relative_eq!(angle_diff(PI - 0.1, -PI + 0.1), 0.2, epsilon = 1e-9);
        assert_relative_eq!(angle_diff(-PI + 0.1, PI - 0.1), -0.2, epsilon = 1e-9);
    }

    #[test]
    fn test_angle_diff_same_angle() {
        assert_relative_eq!(angle_diff(1.0, 1.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_handles_nan() {
        assert!(normalize_angle(f64::NAN).is_nan());
    }

    #[test]
    fn test_linspace_endpoints_inclusive() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v.len(), 5);
        assert_relative_eq!(v[0], 0.0);
        assert_relative_eq!(v[4], 1.0);
        assert_relative_eq!(v[2], 0.5);
    }

    #[test]
    fn test_linspace_single_point() {
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
    }

    #[test]
    fn test_linspace_empty() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }
}
