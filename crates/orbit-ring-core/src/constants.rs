//! Ring defaults and tuning parameters.

/// Host frame rate assumed by the demo loop (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Placement change detection ---

/// Radius and spacing changes at or below this magnitude do not rebuild the ring.
pub const PLACEMENT_TOLERANCE: f64 = 0.001;

// --- Defaults ---

pub const DEFAULT_COUNT: usize = 8;

/// Largest item count a ring accepts.
pub const MAX_COUNT: usize = 100_000;

/// Ring radius in world units.
pub const DEFAULT_RADIUS: f64 = 5.0;

/// Spin about the local up axis (degrees per second).
pub const DEFAULT_SELF_ROTATE_SPEED: f64 = 90.0;

/// Revolution around the center (degrees per second).
pub const DEFAULT_ORBIT_SPEED: f64 = 30.0;

/// Angular increment between items in Sequential mode (radians).
pub const DEFAULT_SPACING: f64 = 0.9;
