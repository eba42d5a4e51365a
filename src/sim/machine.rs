//! Machine-angle calculation
//!
//! The launcher rig is aligned against a map's maximum-range point; aiming
//! anywhere else offsets the rig by the angle between the two sight lines.
//! Independent of the swing sweep - a pure bearing difference.

use glam::Vec2;

/// Offset angle (degrees) between the sight line to the map's maximum-range
/// point and the sight line to `target`. Zero by construction when the
/// target sits exactly at max range.
///
/// Uses `atan2`, which matches atan(y/x) everywhere ahead of the rig (x > 0)
/// and stays defined for targets on the y-axis.
#[inline]
pub fn machine_angle(target: Vec2, max_range: Vec2) -> f32 {
    (max_range.y.atan2(max_range.x) - target.y.atan2(target.x)).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_at_max_range_point() {
        let max_range = Vec2::new(2.65, 1.512);
        assert_eq!(machine_angle(max_range, max_range), 0.0);
    }

    #[test]
    fn test_golden_offsets() {
        let max_range = Vec2::new(2.65, 1.512);
        let a = machine_angle(Vec2::new(1.5, 0.4), max_range);
        assert!((a - 14.776196).abs() < 1e-3);

        // Targets above the max-range sight line come back negative
        let a = machine_angle(Vec2::new(0.8, 1.4), max_range);
        assert!((a + 30.547506).abs() < 1e-3);
    }

    #[test]
    fn test_defined_on_y_axis() {
        let a = machine_angle(Vec2::new(0.0, 1.0), Vec2::new(2.65, 1.512));
        assert!(a.is_finite());
    }
}
