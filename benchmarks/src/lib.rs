//! Shared setup for the haptix benchmarks.

use glam::DVec3;
use haptix::{HapticWorld, PointMass, Probe, SimulationConfig};

/// Default scene with the body resting at the origin.
pub fn setup_world() -> HapticWorld {
    HapticWorld::new(SimulationConfig::default()).expect("default config is valid")
}

/// Body pressed into the corner where three walls meet.
pub fn corner_body() -> PointMass {
    PointMass::new(DVec3::new(58.0, 58.0, 58.0), 0.005, 10.0).with_stiffness(4.0)
}

/// Probe overlapping a body at the origin.
pub fn touching_probe() -> Probe {
    Probe::new(DVec3::new(0.0, 12.0, 0.0), 5.0, 0.48)
}

/// `n` probe samples on a circle through the body.
pub fn probe_path(n: usize) -> Vec<DVec3> {
    (0..n)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / n.max(1) as f64;
            DVec3::new(angle.cos(), angle.sin(), 0.0) * 12.0
        })
        .collect()
}
