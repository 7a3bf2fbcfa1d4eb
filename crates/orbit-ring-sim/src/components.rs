//! ECS components stored by `WorldHost`.
//!
//! Components are plain data. `Pose` from the core crate doubles as the
//! transform component.

/// Template cloned into the world. Instances record which prefab they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefab {
    pub name: String,
}

impl Prefab {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Marks an entity as a clone of a prefab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefabInstance {
    pub prefab: String,
}

/// Hierarchy link to the owning entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parent(pub hecs::Entity);

/// Marks a standalone entity (ring owner, center reference).
#[derive(Debug, Clone, Copy)]
pub struct Anchor;
