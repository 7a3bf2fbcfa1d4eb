//! Ring controller for the orbit ring.
//!
//! Places clones of a template around a circle through an injected
//! `ObjectFactory`, then orbits and spins them every tick. Includes
//! `WorldHost`, a hecs-backed host used by the demo tool and tests.

pub mod components;
pub mod controller;
pub mod factory;
pub mod host;
pub mod placement;
pub mod snapshot;

pub use controller::{RingController, TickReport};
pub use factory::ObjectFactory;
pub use host::WorldHost;
pub use orbit_ring_core as core;
