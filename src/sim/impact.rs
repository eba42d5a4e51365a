//! Paddle/ball impact model
//!
//! A 1-D oblique momentum-and-restitution exchange along the paddle's swing
//! plane: the dropped ball meets the driven paddle face at swing angle
//! theta, and the exchange yields the ball's post-impact speed. A separate
//! resolver turns that scalar speed into a 2-D launch vector.

use glam::Vec2;

use super::params::SimParams;

/// Post-impact velocities for one swing angle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impact {
    /// Paddle velocity after the exchange, along the swing axis (m/s)
    pub paddle_vel: f32,
    /// Ball velocity after the exchange, along the swing axis (m/s)
    pub ball_vel: f32,
    /// Resultant ball speed (m/s)
    pub speed: f32,
}

/// Momentum/restitution exchange at swing angle `theta_deg` (degrees).
///
/// Pure and total over all finite angles: the only division is by the
/// combined mass m + M, which `SimParams::sanitized` keeps positive.
pub fn post_impact(theta_deg: f32, params: &SimParams) -> Impact {
    let m = params.ball_mass;
    let mp = params.paddle_mass;
    let e = params.restitution;
    let up = params.paddle_speed;
    let ub = params.impact_speed();

    let theta = theta_deg.to_radians();
    let sin_t = theta.sin();
    let cos_t = theta.cos();

    let numerator = (mp - e * m) * up * sin_t - m * ub * cos_t * (1.0 + e);
    let paddle_vel = numerator / (m + mp);
    let ball_vel = e * ub * cos_t + e * up * sin_t + paddle_vel;
    let speed = (ball_vel * ball_vel + (ub * sin_t).powi(2)).sqrt();

    Impact {
        paddle_vel,
        ball_vel,
        speed,
    }
}

/// Resolve the post-impact speed into a 2-D launch vector (ux, uy).
///
/// Returns `None` when `ub * sin(theta)` is zero - a zero drop height or a
/// flat swing leaves the auxiliary angle undefined (division by zero).
pub fn launch_velocity(theta_deg: f32, params: &SimParams) -> Option<Vec2> {
    let ub = params.impact_speed();
    let sin_t = theta_deg.to_radians().sin();
    let rise = ub * sin_t;
    if rise == 0.0 {
        return None;
    }

    let impact = post_impact(theta_deg, params);

    // The ratio pairs the swing angle in degrees with a speed in m/s.
    // Dimensionally inconsistent, but every shipped zone table was
    // calibrated against this exact curve; rescaling it moves all landings.
    let tan_alpha = theta_deg / rise;
    let alpha_deg = tan_alpha.atan().to_degrees();
    let beta = (alpha_deg - theta_deg).to_radians();

    Some(Vec2::new(
        impact.speed * beta.cos(),
        impact.speed * beta.sin(),
    ))
}
