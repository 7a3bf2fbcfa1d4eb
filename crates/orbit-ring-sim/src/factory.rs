//! Host capability the ring controller drives.
//!
//! The controller never touches a scene directly: every object it owns is
//! created, moved, spun and destroyed through this trait.

use std::fmt::Debug;

use glam::DVec3;

use orbit_ring_core::types::Pose;

/// Instantiates and manipulates templated objects in a host scene.
pub trait ObjectFactory {
    /// Opaque reference to a live host object.
    type Handle: Copy + Eq + Debug;
    /// What the host clones when creating a ring item.
    type Template: Debug;

    /// Create a clone of `template` at `pose`, optionally under `parent`.
    fn create(
        &mut self,
        template: &Self::Template,
        pose: Pose,
        parent: Option<Self::Handle>,
    ) -> Self::Handle;

    /// Destroy a previously created object. Unknown handles are ignored.
    fn destroy(&mut self, handle: Self::Handle);

    /// Move an object to a world-space position, keeping its rotation.
    fn set_position(&mut self, handle: Self::Handle, position: DVec3);

    /// Rotate an object by `radians` about `axis` expressed in its local frame.
    fn rotate_local(&mut self, handle: Self::Handle, axis: DVec3, radians: f64);

    /// Current pose, or `None` if the handle no longer resolves.
    fn pose(&self, handle: Self::Handle) -> Option<Pose>;

    fn world_position(&self, handle: Self::Handle) -> Option<DVec3> {
        self.pose(handle).map(|pose| pose.position)
    }
}
