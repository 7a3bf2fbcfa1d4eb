//! Serializable views of the ring for hosts and tooling.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::{OrbitDirection, PlacementMode};
use crate::types::Pose;

/// Complete ring state at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingSnapshot {
    /// Number of initializations performed so far.
    pub generation: u64,
    /// Resolved orbit center at snapshot time.
    pub center: DVec3,
    pub radius: f64,
    pub placement: PlacementMode,
    pub direction: OrbitDirection,
    pub items: Vec<ItemView>,
}

/// One ring item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemView {
    pub index: usize,
    /// Current orbit angle in radians (unwrapped, accumulates over time).
    pub angle: f64,
    /// Host-reported pose; `None` if the host no longer knows the handle.
    pub pose: Option<Pose>,
}
