//! Deterministic launch solver
//!
//! All prediction logic lives here. This module must be pure and deterministic:
//! - Closed-form math only, no integration loops
//! - No clocks, RNG, or I/O
//! - Same parameters in, same table out

pub mod flight;
pub mod impact;
pub mod machine;
pub mod params;
pub mod predictor;
pub mod table;
pub mod zone;

pub use flight::{Landing, height_at_distance, solve_landing};
pub use impact::{Impact, launch_velocity, post_impact};
pub use machine::machine_angle;
pub use params::SimParams;
pub use predictor::{LaunchSolution, Predictor};
pub use table::{TrajectoryPoint, TrajectoryTable};
pub use zone::{AngleGate, OUT_OF_BOUNDS, ZoneBand, classify};
