//! Map configuration and scoring tables
//!
//! Each deployment site ships as a `MapConfig`: the rig's reach, the unit
//! scale its zone table is written in, an optional machine-angle gate, and
//! the ordered zone bands. Sites can be loaded from JSON or taken from the
//! built-in presets.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::zone::{self, AngleGate, ZoneBand};

/// Built-in deployment sites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MapPreset {
    #[default]
    Backyard,
    Arena,
    Precision,
}

impl MapPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            MapPreset::Backyard => "Backyard",
            MapPreset::Arena => "Arena",
            MapPreset::Precision => "Precision",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "backyard" | "map1" | "1" => Some(MapPreset::Backyard),
            "arena" | "map2" | "2" => Some(MapPreset::Arena),
            "precision" | "map3" | "3" => Some(MapPreset::Precision),
            _ => None,
        }
    }
}

/// One deployment site: rig reach, zone table, scoring rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Display name
    pub name: String,
    /// Farthest reachable point, the machine-angle reference
    pub max_range: Vec2,
    /// Multiplier from meters to the unit the zone table is written in
    pub displacement_scale: f32,
    /// Machine-angle window required to score at all, if the site has one
    pub machine_angle_gate: Option<AngleGate>,
    /// Ordered zone bands, in table units
    pub bands: Vec<ZoneBand>,
    /// Label for landings no band claims
    pub out_of_bounds: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self::preset(MapPreset::Backyard)
    }
}

impl MapConfig {
    /// Build one of the built-in sites
    pub fn preset(preset: MapPreset) -> Self {
        match preset {
            MapPreset::Backyard => Self {
                name: "Backyard".to_owned(),
                max_range: Vec2::new(2.65, 1.512),
                displacement_scale: 1.0,
                machine_angle_gate: None,
                bands: vec![
                    ZoneBand::new(0.70, 0.90, "Red"),
                    ZoneBand::new(0.90, 1.13, "Green"),
                    ZoneBand::new(1.13, 1.40, "Yellow"),
                    ZoneBand::new(1.40, 1.80, "Blue"),
                    ZoneBand::new(1.80, 2.65, "Purple"),
                ],
                out_of_bounds: zone::OUT_OF_BOUNDS.to_owned(),
            },
            // Arena's survey was delivered in millimeters; the scale keeps
            // its table verbatim instead of transcribing every edge.
            MapPreset::Arena => Self {
                name: "Arena".to_owned(),
                max_range: Vec2::new(4.6, 2.323),
                displacement_scale: 1000.0,
                machine_angle_gate: None,
                bands: vec![
                    ZoneBand::new(900.0, 1600.0, "Red"),
                    ZoneBand::new(1600.0, 2500.0, "Green"),
                    ZoneBand::new(2500.0, 3400.0, "Yellow"),
                    ZoneBand::new(3400.0, 4600.0, "Blue"),
                ],
                out_of_bounds: zone::OUT_OF_BOUNDS.to_owned(),
            },
            MapPreset::Precision => Self {
                name: "Precision".to_owned(),
                machine_angle_gate: Some(AngleGate::new(0.0, 12.0)),
                ..Self::preset(MapPreset::Backyard)
            },
        }
    }

    /// Zone label for a landing displacement in meters
    pub fn zone_for(&self, displacement_m: f32) -> &str {
        let scaled = displacement_m * self.displacement_scale;
        zone::classify(scaled, &self.bands, &self.out_of_bounds)
    }

    /// Zone label with the machine-angle gate applied first
    ///
    /// A shot outside the gate window scores nothing no matter where it
    /// lands. Ungated sites ignore the angle.
    pub fn zone_for_gated(&self, displacement_m: f32, machine_angle_deg: f32) -> &str {
        if let Some(gate) = &self.machine_angle_gate {
            if !gate.admits(machine_angle_deg) {
                return &self.out_of_bounds;
            }
        }
        self.zone_for(displacement_m)
    }

    /// Load a site description from a JSON file
    ///
    /// Any failure (missing file, malformed JSON) falls back to the default
    /// site so the tool still produces a report.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded map config from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!("Bad map config {}: {err}; using default", path.display());
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Cannot read map config {}: {err}; using default", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_from_str() {
        assert_eq!(MapPreset::from_str("backyard"), Some(MapPreset::Backyard));
        assert_eq!(MapPreset::from_str("MAP2"), Some(MapPreset::Arena));
        assert_eq!(MapPreset::from_str("3"), Some(MapPreset::Precision));
        assert_eq!(MapPreset::from_str("moon"), None);
    }

    #[test]
    fn test_backyard_zones() {
        let map = MapConfig::preset(MapPreset::Backyard);
        assert_eq!(map.zone_for(1.00), "Green");
        assert_eq!(map.zone_for(0.50), "Out of Bounds");
        assert_eq!(map.zone_for(1.13), "Yellow");
        assert_eq!(map.zone_for(2.65), "Purple");
        assert_eq!(map.zone_for(2.70), "Out of Bounds");
    }

    #[test]
    fn test_arena_table_is_in_millimeters() {
        let map = MapConfig::preset(MapPreset::Arena);
        assert_eq!(map.zone_for(2.0), "Green");
        assert_eq!(map.zone_for(0.5), "Out of Bounds");
        assert_eq!(map.zone_for(4.6), "Blue");
    }

    #[test]
    fn test_gate_blocks_scoring() {
        let map = MapConfig::preset(MapPreset::Precision);
        assert_eq!(map.zone_for_gated(1.0, 5.0), "Green");
        assert_eq!(map.zone_for_gated(1.0, 12.0), "Green");
        assert_eq!(map.zone_for_gated(1.0, 12.1), "Out of Bounds");
        assert_eq!(map.zone_for_gated(1.0, -3.0), "Out of Bounds");
    }

    #[test]
    fn test_ungated_sites_ignore_machine_angle() {
        let map = MapConfig::preset(MapPreset::Backyard);
        assert_eq!(map.zone_for_gated(1.0, 90.0), "Green");
    }

    #[test]
    fn test_json_round_trip() {
        let map = MapConfig::preset(MapPreset::Precision);
        let json = serde_json::to_string(&map).unwrap();
        let back: MapConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let map = MapConfig::load(Path::new("/nonexistent/map.json"));
        assert_eq!(map, MapConfig::default());
    }

    #[test]
    fn test_malformed_json_falls_back_to_default() {
        let path =
            std::env::temp_dir().join(format!("swing-shot-map-{}.json", std::process::id()));
        std::fs::write(&path, "{ not json at all").unwrap();
        let map = MapConfig::load(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(map, MapConfig::default());
    }
}
