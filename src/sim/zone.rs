//! Landing-zone classification
//!
//! Maps a scalar landing displacement onto a named scoring zone through an
//! ordered list of intervals. The band tables themselves are per-map
//! deployment data (see `config`); only the classification rule lives here.

use serde::{Deserialize, Serialize};

/// Label for a displacement no band claims
pub const OUT_OF_BOUNDS: &str = "Out of Bounds";

/// A named displacement interval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneBand {
    /// Inclusive lower edge
    pub lo: f32,
    /// Exclusive upper edge (inclusive for the final band of a table)
    pub hi: f32,
    pub label: String,
}

impl ZoneBand {
    pub fn new(lo: f32, hi: f32, label: &str) -> Self {
        Self {
            lo,
            hi,
            label: label.to_owned(),
        }
    }
}

/// First band containing `value` wins, scanned in table order.
///
/// Every band is half-open [lo, hi) so a shared edge belongs to the band it
/// opens; the final band alone is closed [lo, hi] so the far edge of the
/// map still scores. Values outside every band give `fallback`.
pub fn classify<'a>(value: f32, bands: &'a [ZoneBand], fallback: &'a str) -> &'a str {
    let last = bands.len().wrapping_sub(1);
    for (i, band) in bands.iter().enumerate() {
        let contained = if i == last {
            value >= band.lo && value <= band.hi
        } else {
            value >= band.lo && value < band.hi
        };
        if contained {
            return &band.label;
        }
    }
    fallback
}

/// Machine-angle admission window (degrees)
///
/// Gated maps compose this check in front of the band scan; it is not part
/// of the interval logic itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleGate {
    pub lo: f32,
    pub hi: f32,
}

impl AngleGate {
    pub fn new(lo: f32, hi: f32) -> Self {
        Self { lo, hi }
    }

    /// Whether the rig's machine angle permits scoring at all
    #[inline]
    pub fn admits(&self, angle_deg: f32) -> bool {
        angle_deg >= self.lo && angle_deg <= self.hi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bands() -> Vec<ZoneBand> {
        vec![
            ZoneBand::new(0.7, 0.9, "Red"),
            ZoneBand::new(0.9, 1.13, "Green"),
            ZoneBand::new(1.13, 1.4, "Yellow"),
            ZoneBand::new(1.4, 1.8, "Blue"),
            ZoneBand::new(1.8, 2.65, "Purple"),
        ]
    }

    #[test]
    fn test_interior_values() {
        let bands = bands();
        assert_eq!(classify(1.0, &bands, OUT_OF_BOUNDS), "Green");
        assert_eq!(classify(2.0, &bands, OUT_OF_BOUNDS), "Purple");
    }

    #[test]
    fn test_unclaimed_values_fall_back() {
        let bands = bands();
        assert_eq!(classify(0.5, &bands, OUT_OF_BOUNDS), OUT_OF_BOUNDS);
        assert_eq!(classify(3.0, &bands, OUT_OF_BOUNDS), OUT_OF_BOUNDS);
        assert_eq!(classify(-0.2, &bands, OUT_OF_BOUNDS), OUT_OF_BOUNDS);
    }

    #[test]
    fn test_shared_edge_belongs_to_opening_band() {
        let bands = bands();
        assert_eq!(classify(0.9, &bands, OUT_OF_BOUNDS), "Green");
        assert_eq!(classify(1.13, &bands, OUT_OF_BOUNDS), "Yellow");
    }

    #[test]
    fn test_final_band_is_closed() {
        let bands = bands();
        assert_eq!(classify(2.65, &bands, OUT_OF_BOUNDS), "Purple");
        assert_eq!(classify(2.66, &bands, OUT_OF_BOUNDS), OUT_OF_BOUNDS);
    }

    #[test]
    fn test_empty_table_always_falls_back() {
        assert_eq!(classify(1.0, &[], OUT_OF_BOUNDS), OUT_OF_BOUNDS);
    }

    #[test]
    fn test_gate_window() {
        let gate = AngleGate::new(0.0, 12.0);
        assert!(gate.admits(0.0));
        assert!(gate.admits(12.0));
        assert!(gate.admits(5.5));
        assert!(!gate.admits(-0.1));
        assert!(!gate.admits(12.1));
    }
}
