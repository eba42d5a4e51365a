//! Solver input parameters
//!
//! One `SimParams` value describes a complete prediction run: the physical
//! properties of the ball/paddle pair plus the swing-angle sweep window.
//! Values are immutable for the duration of a sweep.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Input parameters for one prediction run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimParams {
    /// Ball mass m (kg), must be positive
    pub ball_mass: f32,
    /// Paddle effective mass M (kg), must be positive
    pub paddle_mass: f32,
    /// Coefficient of restitution e. Conventionally in [0, 1]; the solver
    /// does not clamp it - callers decide how hard to constrain input.
    pub restitution: f32,
    /// Paddle driving speed u_p (m/s), signed. Direction is encoded by the
    /// swing angle, not by this sign.
    pub paddle_speed: f32,
    /// Drop height h above the paddle (m), never negative
    pub drop_height: f32,
    /// Gravitational acceleration g (m/s²), must be positive
    pub gravity: f32,
    /// Lower sweep bound (degrees)
    pub min_angle_deg: f32,
    /// Upper sweep bound (degrees), never below `min_angle_deg`
    pub max_angle_deg: f32,
    /// Sweep resolution (degrees), must be positive
    pub angle_step_deg: f32,
    /// Valid landing range declared by the caller (m). Copied from the
    /// active map configuration; a deployment constant, not physics.
    pub max_displacement: f32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            ball_mass: consts::BALL_MASS,
            paddle_mass: consts::PADDLE_MASS,
            restitution: consts::RESTITUTION,
            paddle_speed: consts::PADDLE_SPEED,
            drop_height: consts::DROP_HEIGHT,
            gravity: consts::GRAVITY,
            min_angle_deg: consts::MIN_ANGLE_DEG,
            max_angle_deg: consts::MAX_ANGLE_DEG,
            angle_step_deg: consts::ANGLE_STEP_DEG,
            max_displacement: consts::MAX_DISPLACEMENT,
        }
    }
}

impl SimParams {
    /// Impact speed ub of the dropped ball (m/s)
    #[inline]
    pub fn impact_speed(&self) -> f32 {
        crate::impact_speed(self.drop_height, self.gravity)
    }

    /// Return a copy with every invalid field replaced by its documented
    /// default. Invalid input never propagates as a hard error; each
    /// substitution is logged at warn level.
    pub fn sanitized(mut self) -> Self {
        self.ball_mass = positive_or(self.ball_mass, consts::BALL_MASS, "ball_mass");
        self.paddle_mass = positive_or(self.paddle_mass, consts::PADDLE_MASS, "paddle_mass");
        self.gravity = positive_or(self.gravity, consts::GRAVITY, "gravity");
        self.angle_step_deg =
            positive_or(self.angle_step_deg, consts::ANGLE_STEP_DEG, "angle_step_deg");
        self.max_displacement = positive_or(
            self.max_displacement,
            consts::MAX_DISPLACEMENT,
            "max_displacement",
        );

        if !self.drop_height.is_finite() {
            log::warn!(
                "drop_height {} invalid, using default {}",
                self.drop_height,
                consts::DROP_HEIGHT
            );
            self.drop_height = consts::DROP_HEIGHT;
        } else if self.drop_height < 0.0 {
            log::warn!("drop_height {} negative, clamping to 0", self.drop_height);
            self.drop_height = 0.0;
        }

        if !self.restitution.is_finite() {
            log::warn!(
                "restitution {} invalid, using default {}",
                self.restitution,
                consts::RESTITUTION
            );
            self.restitution = consts::RESTITUTION;
        }
        if !self.paddle_speed.is_finite() {
            log::warn!(
                "paddle_speed {} invalid, using default {}",
                self.paddle_speed,
                consts::PADDLE_SPEED
            );
            self.paddle_speed = consts::PADDLE_SPEED;
        }

        if !self.min_angle_deg.is_finite() || !self.max_angle_deg.is_finite() {
            log::warn!(
                "sweep bounds [{}, {}] invalid, using defaults",
                self.min_angle_deg,
                self.max_angle_deg
            );
            self.min_angle_deg = consts::MIN_ANGLE_DEG;
            self.max_angle_deg = consts::MAX_ANGLE_DEG;
        } else if self.min_angle_deg > self.max_angle_deg {
            log::warn!(
                "sweep bounds [{}, {}] reversed, swapping",
                self.min_angle_deg,
                self.max_angle_deg
            );
            std::mem::swap(&mut self.min_angle_deg, &mut self.max_angle_deg);
        }

        // A positive step below f32 resolution at the lower bound never
        // moves the grid, and the sweep would spin forever.
        if self.min_angle_deg + self.angle_step_deg == self.min_angle_deg {
            log::warn!(
                "angle_step_deg {} vanishes at min angle {}, using default {}",
                self.angle_step_deg,
                self.min_angle_deg,
                consts::ANGLE_STEP_DEG
            );
            self.angle_step_deg = consts::ANGLE_STEP_DEG;
            if self.min_angle_deg + self.angle_step_deg == self.min_angle_deg {
                log::warn!(
                    "sweep bounds [{}, {}] absorb the default step, using default bounds",
                    self.min_angle_deg,
                    self.max_angle_deg
                );
                self.min_angle_deg = consts::MIN_ANGLE_DEG;
                self.max_angle_deg = consts::MAX_ANGLE_DEG;
            }
        }

        self
    }

    /// The discrete sweep grid: min, min+step, min+2*step, ... while <= max.
    /// Angles come from index multiplication so the grid never drifts the
    /// way a float accumulator would.
    pub fn sweep_angles(&self) -> impl Iterator<Item = f32> + use<> {
        let min = self.min_angle_deg;
        let max = self.max_angle_deg;
        let step = self.angle_step_deg;
        (0u32..)
            .map(move |i| min + i as f32 * step)
            .take_while(move |angle| *angle <= max)
    }
}

/// Keep `value` if it is finite and positive, otherwise fall back
fn positive_or(value: f32, default: f32, name: &str) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        log::warn!("{name} {value} invalid, using default {default}");
        default
    }
}
