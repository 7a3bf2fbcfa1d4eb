//! Enumeration types used by the ring configuration.

use serde::{Deserialize, Serialize};

/// How initial angles are assigned to ring items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementMode {
    /// Equal angular steps covering the full circle (`TAU / count`).
    #[default]
    Evenly,
    /// Fixed angular increment per index, independent of count.
    Sequential,
}

/// Orbit direction around the center, seen from above (+Y).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrbitDirection {
    /// Angles increase over time.
    #[default]
    Left,
    /// Angles decrease over time.
    Right,
}

impl OrbitDirection {
    /// Multiplier applied to the orbit speed: +1 for Left, -1 for Right.
    pub fn sign(self) -> f64 {
        match self {
            OrbitDirection::Left => 1.0,
            OrbitDirection::Right => -1.0,
        }
    }
}
