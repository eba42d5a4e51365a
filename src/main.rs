//! Swing Shot entry point
//!
//! One predict cycle per invocation: parse arguments, sweep the angle grid,
//! print the report. Positional arguments, all optional:
//!
//! ```text
//! swing-shot [paddle_speed] [cor] [target_x] [target_y] [map] [--csv PATH]
//! ```

use std::env;
use std::path::Path;

use glam::Vec2;

use swing_shot::sim::{Predictor, SimParams, machine_angle};
use swing_shot::{MapConfig, MapPreset, consts, export, fall_time};

/// Parse one numeric field, substituting its default on bad input
fn parse_or_default(arg: Option<&String>, name: &str, default: f32) -> f32 {
    match arg {
        None => default,
        Some(raw) => match raw.parse::<f32>() {
            Ok(value) => value,
            Err(_) => {
                log::warn!("Cannot parse {name} {raw:?}, using default {default}");
                default
            }
        },
    }
}

fn main() {
    env_logger::init();
    log::info!("Swing Shot starting...");

    let mut csv_path: Option<String> = None;
    let mut positional: Vec<String> = Vec::new();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--csv" {
            csv_path = args.next();
            if csv_path.is_none() {
                log::warn!("--csv given without a path, ignoring");
            }
        } else {
            positional.push(arg);
        }
    }

    let paddle_speed =
        parse_or_default(positional.first(), "paddle speed", consts::PADDLE_SPEED);
    let restitution = parse_or_default(positional.get(1), "restitution", consts::RESTITUTION);
    let target_x = parse_or_default(positional.get(2), "target x", 1.5);
    let target_y = parse_or_default(positional.get(3), "target y", 0.0);
    let map = match positional.get(4) {
        None => MapConfig::default(),
        Some(raw) => match MapPreset::from_str(raw) {
            Some(preset) => MapConfig::preset(preset),
            None => {
                log::warn!(
                    "Unknown map {raw:?}, using {}",
                    MapPreset::default().as_str()
                );
                MapConfig::default()
            }
        },
    };

    let params = SimParams {
        paddle_speed,
        restitution,
        max_displacement: map.max_range.x,
        ..SimParams::default()
    };

    let mut predictor = Predictor::new(params);
    predictor.simulate();

    println!(
        "Map: {} ({} reachable landings)",
        map.name,
        predictor.table().len()
    );
    let p = predictor.params();
    println!(
        "Drop time to impact: {:.3} s",
        fall_time(p.drop_height, p.gravity)
    );

    let machine = machine_angle(Vec2::new(target_x, target_y), map.max_range);

    let Some(best) = predictor.best_angle_for(target_x) else {
        println!("No reachable landing for target {target_x} m, nothing to suggest");
        return;
    };
    // In range by construction; the clamp guards the printed suggestion
    // against future table sources.
    let best = best.clamp(p.min_angle_deg, p.max_angle_deg);

    println!("Suggested swing angle: {best:.1} deg");
    if let Some(sol) = predictor.solve_angle(best) {
        println!("Launch speed: {:.3} m/s", sol.speed);
        println!(
            "Launch velocity: ({:.3}, {:.3}) m/s",
            sol.velocity.x, sol.velocity.y
        );
        println!("Flight time: {:.3} s", sol.time);
        println!("Predicted landing: {:.3} m", sol.displacement);
        if let Some(h) = predictor.height_at_target(target_x, best) {
            println!("Arc height over target: {h:.3} m");
        }
        println!("Machine angle: {machine:.2} deg");
        println!("Zone: {}", map.zone_for_gated(sol.displacement, machine));
    }

    if let Some(path) = csv_path {
        if let Err(err) = export::write_csv(Path::new(&path), predictor.table()) {
            log::error!("CSV export to {path} failed: {err}");
        }
    }
}
