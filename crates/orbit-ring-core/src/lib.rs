//! Core types and definitions for the orbit ring.
//!
//! This crate defines the vocabulary shared by the simulation and the demo
//! tool: poses, placement enums, configuration, errors, events, snapshots
//! and constants. It has no dependency on any ECS or host engine.

pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

pub use config::{RingConfig, RingSettings};
pub use error::ConfigError;
