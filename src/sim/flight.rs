//! Projectile flight solver
//!
//! Closed-form kinematics for the launched ball: when it returns to the
//! ground and how far it travels. No stepping or integration - the vertical
//! motion y(t) = h + uy*t - g*t²/2 is solved as a quadratic in t.

use glam::Vec2;

/// A resolved landing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landing {
    /// Time from launch to touchdown (s)
    pub time: f32,
    /// Horizontal distance covered (m)
    pub displacement: f32,
}

/// Solve the landing of a ball launched at `vel` from `height`.
///
/// Returns `None` when the discriminant is negative (no real landing time) -
/// a filtered outcome, not an error. The time can come back negative for
/// sub-ground launches; the sweep's displacement filter screens those out.
pub fn solve_landing(vel: Vec2, height: f32, gravity: f32) -> Option<Landing> {
    let a = -0.5 * gravity;
    let b = vel.y;
    let c = height;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    // a < 0 flips the root ordering; the larger root is the forward-time one
    let sqrt_d = discriminant.sqrt();
    let t1 = (-b + sqrt_d) / (2.0 * a);
    let t2 = (-b - sqrt_d) / (2.0 * a);
    let time = t1.max(t2);

    Some(Landing {
        time,
        displacement: vel.x * time,
    })
}

/// Ball height when it crosses horizontal distance `target_x`, clamped to
/// ground level.
///
/// Returns `None` when the horizontal velocity is zero - the crossing time
/// is undefined.
pub fn height_at_distance(vel: Vec2, height: f32, gravity: f32, target_x: f32) -> Option<f32> {
    if vel.x == 0.0 {
        return None;
    }
    let t = target_x / vel.x;
    let y = height + vel.y * t - 0.5 * gravity * t * t;
    Some(y.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f32 = 1e-3;

    #[test]
    fn test_landing_golden_values() {
        // Launch vector of the theta=19 reference chain
        let landing = solve_landing(Vec2::new(1.636635, 4.180384), 0.3, 9.81).unwrap();
        assert!((landing.time - 0.918835).abs() < TOL);
        assert!((landing.displacement - 1.503797).abs() < TOL);

        // theta=45 chain: lands well past the 2.65 m map range
        let landing = solve_landing(Vec2::new(6.658261, 6.169243), 0.3, 9.81).unwrap();
        assert!((landing.time - 1.304627).abs() < TOL);
        assert!((landing.displacement - 8.686544).abs() < 2e-3);
    }

    #[test]
    fn test_ground_launch_classic_range() {
        // From ground level, t = 2*uy/g
        let landing = solve_landing(Vec2::new(1.0, 4.905), 0.0, 9.81).unwrap();
        assert!((landing.time - 1.0).abs() < TOL);
        assert!((landing.displacement - 1.0).abs() < TOL);
    }

    #[test]
    fn test_plain_drop_matches_fall_time() {
        let landing = solve_landing(Vec2::new(0.0, 0.0), 0.3, 9.81).unwrap();
        assert!((landing.time - crate::fall_time(0.3, 9.81)).abs() < 1e-6);
        assert_eq!(landing.displacement, 0.0);
    }

    #[test]
    fn test_negative_discriminant_is_filtered() {
        // Launch point below ground, not enough upward speed to reach it:
        // D = 2² - 4*(-g/2)*(-1) = 4 - 19.62 < 0
        assert!(solve_landing(Vec2::new(3.0, 2.0), -1.0, 9.81).is_none());
    }

    #[test]
    fn test_sub_ground_launch_yields_negative_time() {
        // Both roots negative; the solver reports the larger one and leaves
        // filtering to the caller
        let landing = solve_landing(Vec2::new(1.0, -5.0), -1.0, 9.81).unwrap();
        assert!(landing.time < 0.0);
        assert!(landing.displacement < 0.0);
    }

    #[test]
    fn test_height_at_distance_golden() {
        let y = height_at_distance(Vec2::new(1.636635, 4.180384), 0.3, 9.81, 1.0).unwrap();
        assert!((y - 1.023057).abs() < TOL);
    }

    #[test]
    fn test_height_clamps_to_ground() {
        // Far beyond the landing point the parabola is under ground
        let y = height_at_distance(Vec2::new(1.636635, 4.180384), 0.3, 9.81, 5.0).unwrap();
        assert_eq!(y, 0.0);
    }

    #[test]
    fn test_height_undefined_without_horizontal_speed() {
        assert!(height_at_distance(Vec2::new(0.0, 3.0), 0.3, 9.81, 1.0).is_none());
    }
}
