//! Sweep orchestration and table queries
//!
//! `Predictor` is the facade the surrounding application talks to: set
//! parameters once, run one sweep, then ask for the best swing angle, the
//! launch speed at a given angle, or the arc height over a target.

use glam::Vec2;

use super::flight::{self, Landing};
use super::impact;
use super::params::SimParams;
use super::table::{TrajectoryPoint, TrajectoryTable};

/// Full single-angle readout, beyond the bare displacement the table keeps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchSolution {
    /// Post-impact ball speed in m/s
    pub speed: f32,
    /// Launch velocity components in m/s
    pub velocity: Vec2,
    /// Flight time to touchdown in seconds
    pub time: f32,
    /// Landing displacement in meters
    pub displacement: f32,
}

/// Offline launch predictor: one parameter set, one swept table
#[derive(Debug, Clone, Default)]
pub struct Predictor {
    params: SimParams,
    table: TrajectoryTable,
}

impl Predictor {
    /// Build a predictor; parameters go through the sanitize pass first
    pub fn new(params: SimParams) -> Self {
        Self {
            params: params.sanitized(),
            table: TrajectoryTable::new(),
        }
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    /// Replace the parameter set. The current table keeps serving queries
    /// until the next `simulate` rebuilds it.
    pub fn configure(&mut self, params: SimParams) {
        self.params = params.sanitized();
    }

    /// Run one full sweep: clear the table, walk the angle grid, keep every
    /// angle whose landing is real and inside `[0, max_displacement]`.
    pub fn simulate(&mut self) -> &TrajectoryTable {
        self.table.clear();
        let params = self.params;
        let mut swept = 0usize;
        for angle_deg in params.sweep_angles() {
            swept += 1;
            let Some(vel) = impact::launch_velocity(angle_deg, &params) else {
                continue;
            };
            let Some(landing) = flight::solve_landing(vel, params.drop_height, params.gravity)
            else {
                continue;
            };
            if landing.displacement < 0.0 || landing.displacement > params.max_displacement {
                continue;
            }
            self.table.push(TrajectoryPoint {
                angle_deg,
                displacement: landing.displacement,
            });
        }
        log::info!(
            "simulated {} angles, kept {} valid landings",
            swept,
            self.table.len()
        );
        &self.table
    }

    /// Swing angle whose predicted landing lies closest to `target_x`
    ///
    /// Targets beyond the valid range are clamped onto it (recovered, with a
    /// warning). `None` when the table is empty; callers must surface that
    /// rather than substitute a made-up angle.
    pub fn best_angle_for(&self, target_x: f32) -> Option<f32> {
        let target = if target_x > self.params.max_displacement {
            log::warn!(
                "target {} m beyond valid range {} m, clamping",
                target_x,
                self.params.max_displacement
            );
            self.params.max_displacement
        } else {
            target_x
        };
        self.table.nearest(target).map(|p| p.angle_deg)
    }

    /// Post-impact ball speed for one swing angle, straight from the impact
    /// model. Defined even where the launch direction is not.
    pub fn speed_for_angle(&self, angle_deg: f32) -> f32 {
        impact::post_impact(angle_deg, &self.params).speed
    }

    /// Height of the arc directly above `target_x`, floor-clamped
    pub fn height_at_target(&self, target_x: f32, angle_deg: f32) -> Option<f32> {
        let vel = impact::launch_velocity(angle_deg, &self.params)?;
        flight::height_at_distance(vel, self.params.drop_height, self.params.gravity, target_x)
    }

    /// Full readout for one swing angle, unfiltered by the valid range
    pub fn solve_angle(&self, angle_deg: f32) -> Option<LaunchSolution> {
        let vel = impact::launch_velocity(angle_deg, &self.params)?;
        let Landing { time, displacement } =
            flight::solve_landing(vel, self.params.drop_height, self.params.gravity)?;
        Some(LaunchSolution {
            speed: vel.length(),
            velocity: vel,
            time,
            displacement,
        })
    }

    /// The table built by the last `simulate` (empty before the first run)
    pub fn table(&self) -> &TrajectoryTable {
        &self.table
    }
}
