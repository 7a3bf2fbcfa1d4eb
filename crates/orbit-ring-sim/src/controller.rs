//! Ring controller — owns the ring items and drives them each frame.
//!
//! `RingController` places `count` clones of the template around a circle,
//! rebuilds the batch whenever placement parameters drift from the values
//! captured at the last initialization, and advances orbit and spin on every
//! `tick`. Completely headless: all scene access goes through the factory.

use glam::DVec3;
use tracing::{debug, trace, warn};

use orbit_ring_core::config::RingConfig;
use orbit_ring_core::error::ConfigError;
use orbit_ring_core::events::RingEvent;
use orbit_ring_core::state::RingSnapshot;
use orbit_ring_core::types::{Pose, RingItem};

use crate::factory::ObjectFactory;
use crate::placement::{self, PlacementKey};
use crate::snapshot;

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// The batch was rebuilt before motion was applied.
    pub reinitialized: bool,
    /// Items moved this tick.
    pub moved: usize,
}

/// The ring controller. Owns its factory, configuration and items.
pub struct RingController<F: ObjectFactory> {
    factory: F,
    config: RingConfig<F::Template>,
    /// Parent for created items; also the ring's identity in the host.
    owner: Option<F::Handle>,
    center_object: Option<F::Handle>,
    items: Vec<RingItem<F::Handle>>,
    /// Placement parameters at the last initialization (`None` before the first).
    captured: Option<PlacementKey>,
    generation: u64,
    events: Vec<RingEvent>,
}

impl<F: ObjectFactory> RingController<F> {
    /// Create an uninitialized controller. Items appear on `initialize` or the first `tick`.
    pub fn new(factory: F, config: RingConfig<F::Template>, owner: Option<F::Handle>) -> Self {
        Self {
            factory,
            config,
            owner,
            center_object: None,
            items: Vec::new(),
            captured: None,
            generation: 0,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &RingConfig<F::Template> {
        &self.config
    }

    /// Mutable configuration. Placement changes apply on the next tick.
    pub fn config_mut(&mut self) -> &mut RingConfig<F::Template> {
        &mut self.config
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }

    pub fn owner(&self) -> Option<F::Handle> {
        self.owner
    }

    pub fn center_object(&self) -> Option<F::Handle> {
        self.center_object
    }

    /// Follow a host object as the orbit center. `None` is rejected.
    /// Takes effect on the next tick without rebuilding the ring.
    pub fn set_center_object(&mut self, center: Option<F::Handle>) -> Result<(), ConfigError> {
        match center {
            Some(handle) => {
                self.center_object = Some(handle);
                Ok(())
            }
            None => {
                let error = ConfigError::NullCenterObject;
                warn!(%error, "ring setting rejected, keeping previous value");
                Err(error)
            }
        }
    }

    pub fn items(&self) -> &[RingItem<F::Handle>] {
        &self.items
    }

    pub fn angles(&self) -> impl Iterator<Item = f64> + '_ {
        self.items.iter().map(|item| item.angle)
    }

    /// Number of initializations performed.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_initialized(&self) -> bool {
        self.captured.is_some()
    }

    /// Take all buffered events.
    pub fn drain_events(&mut self) -> Vec<RingEvent> {
        std::mem::take(&mut self.events)
    }

    /// Current orbit center without side effects. A dangling center object
    /// reads as the configured center but stays assigned.
    pub fn peek_center(&self) -> DVec3 {
        self.center_object
            .and_then(|handle| self.factory.world_position(handle))
            .unwrap_or_else(|| self.config.center())
    }

    /// Orbit center this frame: the center object if it still resolves,
    /// otherwise the configured center. Drops a dangling center object.
    pub fn resolve_center(&mut self) -> DVec3 {
        if let Some(handle) = self.center_object {
            match self.factory.world_position(handle) {
                Some(position) => return position,
                None => {
                    warn!(?handle, "center object no longer exists, using ring center");
                    self.center_object = None;
                    self.events.push(RingEvent::CenterLost);
                }
            }
        }
        self.config.center()
    }

    /// Destroy the current batch and create a fresh one from the configuration.
    pub fn initialize(&mut self) {
        let center = self.resolve_center();

        let destroyed = self.items.len();
        for item in self.items.drain(..) {
            self.factory.destroy(item.handle);
        }
        if destroyed > 0 {
            self.events.push(RingEvent::ItemsDestroyed { count: destroyed });
        }

        let key = PlacementKey::capture(&self.config);
        let mut items = Vec::with_capacity(key.count);
        for index in 0..key.count {
            let angle = placement::initial_angle(key.mode, index, key.count, key.spacing);
            let position = placement::orbit_position(center, angle, key.radius);
            let handle = self.factory.create(
                self.config.template(),
                Pose::looking_at(position, center),
                self.owner,
            );
            items.push(RingItem { handle, angle });
        }

        self.items = items;
        self.captured = Some(key);
        self.generation += 1;

        debug!(
            generation = self.generation,
            count = key.count,
            radius = key.radius,
            placement = ?key.mode,
            "ring initialized"
        );
        self.events.push(RingEvent::Initialized {
            generation: self.generation,
            count: key.count,
            placement: key.mode,
        });
    }

    /// Advance the ring by `dt` seconds, rebuilding first if placement changed.
    /// A non-finite `dt` skips the tick entirely.
    pub fn tick(&mut self, dt: f64) -> TickReport {
        if !dt.is_finite() {
            warn!(dt, "non-finite frame time, skipping tick");
            return TickReport {
                reinitialized: false,
                moved: 0,
            };
        }

        let current = PlacementKey::capture(&self.config);
        let reinitialized = self
            .captured
            .map_or(true, |captured| captured.is_stale(&current));
        if reinitialized {
            self.initialize();
        }

        if self.items.is_empty() {
            return TickReport {
                reinitialized,
                moved: 0,
            };
        }

        let center = self.resolve_center();
        let radius = self.config.radius();
        let orbit_step =
            self.config.orbit_speed().to_radians() * self.config.direction().sign() * dt;
        let spin_step = (self.config.self_rotate_speed() * dt).to_radians();

        for item in &mut self.items {
            item.angle += orbit_step;
            let position = placement::orbit_position(center, item.angle, radius);
            self.factory.set_position(item.handle, position);
            self.factory.rotate_local(item.handle, DVec3::Y, spin_step);
        }

        trace!(items = self.items.len(), orbit_step, spin_step, "ring ticked");
        TickReport {
            reinitialized,
            moved: self.items.len(),
        }
    }

    /// Serializable view of the ring and the poses the host reports.
    pub fn snapshot(&self) -> RingSnapshot {
        snapshot::build_snapshot(
            &self.factory,
            &self.config,
            &self.items,
            self.peek_center(),
            self.generation,
        )
    }
}
