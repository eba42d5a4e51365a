//! Swept trajectory table
//!
//! One row per valid swing angle, inserted in ascending angle order by the
//! sweep. The table is the inverse-function device: instead of inverting
//! the impact/flight composition analytically, queries scan it for the
//! displacement nearest a target.

use serde::{Deserialize, Serialize};

/// One swept angle and where the ball lands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    /// Swing angle (degrees)
    pub angle_deg: f32,
    /// Horizontal landing displacement (m)
    pub displacement: f32,
}

/// Displacement-vs-angle table, ascending angle order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryTable {
    points: Vec<TrajectoryPoint>,
}

impl TrajectoryTable {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Drop all rows (start of a fresh sweep)
    pub(crate) fn clear(&mut self) {
        self.points.clear();
    }

    /// Append a row; the sweep appends in ascending angle order
    pub(crate) fn push(&mut self, point: TrajectoryPoint) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The row whose displacement lies closest to `target_x`.
    ///
    /// On an exact tie the first row in scan order wins, which is the
    /// lowest angle - downstream displays rely on that choice being
    /// deterministic. Empty table gives `None`, never a sentinel angle.
    pub fn nearest(&self, target_x: f32) -> Option<&TrajectoryPoint> {
        self.points.iter().min_by(|a, b| {
            let da = (a.displacement - target_x).abs();
            let db = (b.displacement - target_x).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}
