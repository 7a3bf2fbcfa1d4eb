//! Events emitted by the ring controller for host-side bookkeeping.

use serde::{Deserialize, Serialize};

use crate::enums::PlacementMode;

/// Lifecycle events, buffered by the controller until drained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RingEvent {
    /// A fresh batch of items was created.
    Initialized {
        generation: u64,
        count: usize,
        placement: PlacementMode,
    },
    /// The previous batch was destroyed ahead of re-initialization.
    ItemsDestroyed { count: usize },
    /// The center object no longer resolves; the ring fell back to its own center.
    CenterLost,
}
