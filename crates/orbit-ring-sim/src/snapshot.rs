//! Snapshot builder: reads item poses back from the host.
//!
//! Read-only — it never modifies the host.

use glam::DVec3;

use orbit_ring_core::config::RingConfig;
use orbit_ring_core::state::{ItemView, RingSnapshot};
use orbit_ring_core::types::RingItem;

use crate::factory::ObjectFactory;

/// Build a `RingSnapshot` for the given items.
pub fn build_snapshot<F: ObjectFactory>(
    factory: &F,
    config: &RingConfig<F::Template>,
    items: &[RingItem<F::Handle>],
    center: DVec3,
    generation: u64,
) -> RingSnapshot {
    RingSnapshot {
        generation,
        center,
        radius: config.radius(),
        placement: config.placement(),
        direction: config.direction(),
        items: items
            .iter()
            .enumerate()
            .map(|(index, item)| ItemView {
                index,
                angle: item.angle,
                pose: factory.pose(item.handle),
            })
            .collect(),
    }
}
