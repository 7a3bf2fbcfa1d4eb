//! Fundamental geometric types.

use glam::{DMat3, DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Position and orientation of an object in world space.
/// y = Up. Orientation maps local +Z (forward) and +Y (up) into the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: DVec3,
    pub rotation: DQuat,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
        }
    }
}

impl Pose {
    pub fn new(position: DVec3, rotation: DQuat) -> Self {
        Self { position, rotation }
    }

    /// Pose at `position` with identity rotation.
    pub fn at(position: DVec3) -> Self {
        Self::new(position, DQuat::IDENTITY)
    }

    /// Pose at `position` whose forward axis points at `target`.
    pub fn looking_at(position: DVec3, target: DVec3) -> Self {
        Self::new(position, look_rotation(target - position, DVec3::Y))
    }

    /// Local forward (+Z) in world space.
    pub fn forward(&self) -> DVec3 {
        self.rotation * DVec3::Z
    }

    /// Local up (+Y) in world space.
    pub fn up(&self) -> DVec3 {
        self.rotation * DVec3::Y
    }
}

/// Rotation whose forward (+Z) axis points along `forward` and whose up axis
/// is as close to `up` as possible.
///
/// A zero-length `forward` yields the identity. When `forward` is parallel to
/// `up` the shortest arc from +Z is used instead.
pub fn look_rotation(forward: DVec3, up: DVec3) -> DQuat {
    let Some(f) = forward.try_normalize() else {
        return DQuat::IDENTITY;
    };
    let Some(right) = up.cross(f).try_normalize() else {
        return DQuat::from_rotation_arc(DVec3::Z, f);
    };
    let true_up = f.cross(right);
    DQuat::from_mat3(&DMat3::from_cols(right, true_up, f)).normalize()
}

/// An instantiated ring member and its current orbit angle (radians).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingItem<H> {
    pub handle: H,
    pub angle: f64,
}
