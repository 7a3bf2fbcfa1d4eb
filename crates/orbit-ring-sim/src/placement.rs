//! Placement math: initial angles, orbit positions and change detection.

use std::f64::consts::TAU;

use glam::DVec3;

use orbit_ring_core::config::RingConfig;
use orbit_ring_core::constants::PLACEMENT_TOLERANCE;
use orbit_ring_core::enums::PlacementMode;

/// Angular step between items in Evenly mode. `None` for an empty ring.
pub fn evenly_step(count: usize) -> Option<f64> {
    (count > 0).then(|| TAU / count as f64)
}

/// Starting angle (radians) for item `index` of `count`.
pub fn initial_angle(mode: PlacementMode, index: usize, count: usize, spacing: f64) -> f64 {
    match mode {
        PlacementMode::Evenly => evenly_step(count).map_or(0.0, |step| index as f64 * step),
        PlacementMode::Sequential => index as f64 * spacing,
    }
}

/// Point on the horizontal circle around `center`; y stays at the center's y.
pub fn orbit_position(center: DVec3, angle: f64, radius: f64) -> DVec3 {
    let (sin, cos) = angle.sin_cos();
    DVec3::new(center.x + cos * radius, center.y, center.z + sin * radius)
}

/// Placement parameters captured at initialization. Any difference beyond
/// tolerance means the current batch no longer matches the configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementKey {
    pub count: usize,
    pub radius: f64,
    pub mode: PlacementMode,
    pub spacing: f64,
}

impl PlacementKey {
    pub fn capture<T>(config: &RingConfig<T>) -> Self {
        Self {
            count: config.count(),
            radius: config.radius(),
            mode: config.placement(),
            spacing: config.spacing(),
        }
    }

    /// Whether `current` calls for a rebuild relative to this key.
    pub fn is_stale(&self, current: &PlacementKey) -> bool {
        self.count != current.count
            || (self.radius - current.radius).abs() > PLACEMENT_TOLERANCE
            || self.mode != current.mode
            || (self.spacing - current.spacing).abs() > PLACEMENT_TOLERANCE
    }
}
