//! Ring configuration with validating setters.
//!
//! `RingConfig` holds the template the ring clones plus every placement and
//! motion parameter. Setters refuse invalid values, log a warning, and keep
//! the prior value. `RingSettings` is the plain serializable form used for
//! config files.

use glam::DVec3;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::*;
use crate::enums::{OrbitDirection, PlacementMode};
use crate::error::ConfigError;

/// Serializable ring parameters (everything except the template).
///
/// Missing fields fall back to the defaults, so a partial JSON file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingSettings {
    /// Signed so that negative values from a file are rejected, not wrapped.
    pub count: i64,
    pub radius: f64,
    /// Ring center used when no center object is assigned.
    pub center: DVec3,
    /// Degrees per second about the local up axis.
    pub self_rotate_speed: f64,
    /// Degrees per second around the center.
    pub orbit_speed: f64,
    pub direction: OrbitDirection,
    pub placement: PlacementMode,
    /// Radians between consecutive items in Sequential mode.
    pub spacing: f64,
}

impl Default for RingSettings {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT as i64,
            radius: DEFAULT_RADIUS,
            center: DVec3::ZERO,
            self_rotate_speed: DEFAULT_SELF_ROTATE_SPEED,
            orbit_speed: DEFAULT_ORBIT_SPEED,
            direction: OrbitDirection::default(),
            placement: PlacementMode::default(),
            spacing: DEFAULT_SPACING,
        }
    }
}

impl RingSettings {
    /// Parse settings from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Validated ring configuration. `T` is the host's template type.
#[derive(Debug, Clone)]
pub struct RingConfig<T> {
    template: T,
    count: usize,
    radius: f64,
    center: DVec3,
    self_rotate_speed: f64,
    orbit_speed: f64,
    direction: OrbitDirection,
    placement: PlacementMode,
    spacing: f64,
}

impl<T> RingConfig<T> {
    /// Configuration with default parameters for the given template.
    pub fn new(template: T) -> Self {
        Self {
            template,
            count: DEFAULT_COUNT,
            radius: DEFAULT_RADIUS,
            center: DVec3::ZERO,
            self_rotate_speed: DEFAULT_SELF_ROTATE_SPEED,
            orbit_speed: DEFAULT_ORBIT_SPEED,
            direction: OrbitDirection::default(),
            placement: PlacementMode::default(),
            spacing: DEFAULT_SPACING,
        }
    }

    /// Build a configuration from file settings, validating every field.
    /// Fails on the first invalid field.
    pub fn from_settings(template: T, settings: &RingSettings) -> Result<Self, ConfigError> {
        let mut config = Self::new(template);
        config.set_count(settings.count)?;
        config.set_radius(settings.radius)?;
        config.set_center(settings.center);
        config.set_self_rotate_speed(settings.self_rotate_speed)?;
        config.set_orbit_speed(settings.orbit_speed)?;
        config.set_direction(settings.direction);
        config.set_placement(settings.placement);
        config.set_spacing(settings.spacing)?;
        Ok(config)
    }

    /// Export the current parameters.
    pub fn settings(&self) -> RingSettings {
        RingSettings {
            count: self.count as i64,
            radius: self.radius,
            center: self.center,
            self_rotate_speed: self.self_rotate_speed,
            orbit_speed: self.orbit_speed,
            direction: self.direction,
            placement: self.placement,
            spacing: self.spacing,
        }
    }

    pub fn template(&self) -> &T {
        &self.template
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn center(&self) -> DVec3 {
        self.center
    }

    pub fn self_rotate_speed(&self) -> f64 {
        self.self_rotate_speed
    }

    pub fn orbit_speed(&self) -> f64 {
        self.orbit_speed
    }

    pub fn direction(&self) -> OrbitDirection {
        self.direction
    }

    pub fn placement(&self) -> PlacementMode {
        self.placement
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Replace the template. `None` is rejected.
    pub fn set_template(&mut self, template: Option<T>) -> Result<(), ConfigError> {
        match template {
            Some(template) => {
                self.template = template;
                Ok(())
            }
            None => Err(rejected("template", ConfigError::NullTemplate)),
        }
    }

    /// Set the item count. Negative values and values above `MAX_COUNT` are rejected.
    pub fn set_count(&mut self, count: i64) -> Result<(), ConfigError> {
        if count < 0 {
            return Err(rejected("count", ConfigError::NegativeCount(count)));
        }
        if count as u64 > MAX_COUNT as u64 {
            return Err(rejected(
                "count",
                ConfigError::CountTooLarge {
                    count,
                    max: MAX_COUNT,
                },
            ));
        }
        self.count = count as usize;
        Ok(())
    }

    /// Set the ring radius. Negative and non-finite values are rejected.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), ConfigError> {
        let radius = finite("radius", radius)?;
        if radius < 0.0 {
            return Err(rejected("radius", ConfigError::NegativeRadius(radius)));
        }
        self.radius = radius;
        Ok(())
    }

    pub fn set_center(&mut self, center: DVec3) {
        self.center = center;
    }

    pub fn set_self_rotate_speed(&mut self, degrees_per_sec: f64) -> Result<(), ConfigError> {
        self.self_rotate_speed = finite("self_rotate_speed", degrees_per_sec)?;
        Ok(())
    }

    pub fn set_orbit_speed(&mut self, degrees_per_sec: f64) -> Result<(), ConfigError> {
        self.orbit_speed = finite("orbit_speed", degrees_per_sec)?;
        Ok(())
    }

    pub fn set_direction(&mut self, direction: OrbitDirection) {
        self.direction = direction;
    }

    pub fn set_placement(&mut self, placement: PlacementMode) {
        self.placement = placement;
    }

    /// Set the Sequential-mode angular increment (radians, not arc length).
    pub fn set_spacing(&mut self, radians: f64) -> Result<(), ConfigError> {
        self.spacing = finite("spacing", radians)?;
        Ok(())
    }
}

/// Log a rejected setting and hand the error back for propagation.
fn rejected(field: &'static str, error: ConfigError) -> ConfigError {
    warn!(field, %error, "ring setting rejected, keeping previous value");
    error
}

fn finite(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(rejected(field, ConfigError::NonFinite { field, value }))
    }
}
