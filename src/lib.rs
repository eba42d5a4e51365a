//! Swing Shot - a paddle-swing launch predictor
//!
//! Core modules:
//! - `sim`: Deterministic launch solver (impact model, flight solver, angle sweep, zones)
//! - `config`: Data-driven per-map deployment configuration
//! - `export`: CSV export of the swept trajectory table
//!
//! The solver answers one question: at which swing angle must the paddle
//! strike a dropped ball so that it lands a given distance away. It is an
//! offline, restartable computation - no per-frame integration happens here.

pub mod config;
pub mod export;
pub mod sim;

pub use config::{MapConfig, MapPreset};
pub use sim::{Impact, LaunchSolution, Predictor, SimParams, TrajectoryPoint, TrajectoryTable};

/// Default solver parameters
pub mod consts {
    /// Gravitational acceleration (m/s²)
    pub const GRAVITY: f32 = 9.81;

    /// Ball mass (kg)
    pub const BALL_MASS: f32 = 0.024;
    /// Paddle effective mass (kg)
    pub const PADDLE_MASS: f32 = 0.1;
    /// Coefficient of restitution for the ball/paddle pair
    pub const RESTITUTION: f32 = 0.5;
    /// Paddle driving speed at the moment of impact (m/s)
    pub const PADDLE_SPEED: f32 = 10.0;
    /// Drop height above the paddle (m)
    pub const DROP_HEIGHT: f32 = 0.3;

    /// Swing angle sweep bounds (degrees)
    pub const MIN_ANGLE_DEG: f32 = 1.0;
    pub const MAX_ANGLE_DEG: f32 = 70.0;
    /// Sweep resolution (degrees per step)
    pub const ANGLE_STEP_DEG: f32 = 0.1;

    /// Valid landing range on the default map (m). Deployment data, not physics.
    pub const MAX_DISPLACEMENT: f32 = 2.65;
}

/// Speed of a ball dropped from `height`, at the moment of impact (m/s)
#[inline]
pub fn impact_speed(height: f32, gravity: f32) -> f32 {
    (2.0 * gravity * height).sqrt()
}

/// Free-fall time from release to paddle height (s)
#[inline]
pub fn fall_time(height: f32, gravity: f32) -> f32 {
    (2.0 * height / gravity).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_speed_matches_drop() {
        // h = 0.3, g = 9.81 -> ub ~ 2.426 m/s
        let ub = impact_speed(0.3, 9.81);
        assert!((ub - 2.426108).abs() < 1e-3);
    }

    #[test]
    fn test_fall_time() {
        let t = fall_time(0.3, 9.81);
        assert!((t - 0.247310).abs() < 1e-3);
        // Consistency: v = g * t at impact
        assert!((impact_speed(0.3, 9.81) - 9.81 * t).abs() < 1e-3);
    }

    #[test]
    fn test_zero_height_is_finite() {
        assert_eq!(impact_speed(0.0, 9.81), 0.0);
        assert_eq!(fall_time(0.0, 9.81), 0.0);
    }
}
