//! hecs-backed host: a minimal scene that satisfies `ObjectFactory`.
//!
//! Entities carry a `Pose`; ring items additionally carry `PrefabInstance`
//! and, when created under an owner, `Parent`. Positions are world space.

use glam::{DQuat, DVec3};
use hecs::{Entity, EntityBuilder, World};

use orbit_ring_core::types::Pose;

use crate::components::{Anchor, Parent, Prefab, PrefabInstance};
use crate::factory::ObjectFactory;

/// Owns the hecs world the ring lives in.
#[derive(Default)]
pub struct WorldHost {
    world: World,
}

impl WorldHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only access to the underlying world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn a standalone entity usable as a ring owner or center reference.
    pub fn spawn_anchor(&mut self, pose: Pose) -> Entity {
        self.world.spawn((Anchor, pose))
    }

    /// Teleport any entity. Returns false if it no longer exists.
    pub fn move_to(&mut self, entity: Entity, position: DVec3) -> bool {
        match self.world.get::<&mut Pose>(entity) {
            Ok(mut pose) => {
                pose.position = position;
                true
            }
            Err(_) => false,
        }
    }

    /// Remove any entity. Returns false if it was already gone.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        self.world.despawn(entity).is_ok()
    }

    /// Prefab instances parented under `parent`.
    pub fn children_of(&self, parent: Entity) -> Vec<Entity> {
        let mut query = self.world.query::<(&Parent, &PrefabInstance)>();
        query
            .iter()
            .filter(|(_, (link, _))| link.0 == parent)
            .map(|(entity, _)| entity)
            .collect()
    }

    /// Number of live prefab instances.
    pub fn instance_count(&self) -> usize {
        let mut query = self.world.query::<&PrefabInstance>();
        query.iter().count()
    }
}

impl ObjectFactory for WorldHost {
    type Handle = Entity;
    type Template = Prefab;

    fn create(&mut self, template: &Prefab, pose: Pose, parent: Option<Entity>) -> Entity {
        let mut builder = EntityBuilder::new();
        builder.add(pose).add(PrefabInstance {
            prefab: template.name.clone(),
        });
        if let Some(parent) = parent {
            builder.add(Parent(parent));
        }
        self.world.spawn(builder.build())
    }

    fn destroy(&mut self, handle: Entity) {
        let _ = self.world.despawn(handle);
    }

    fn set_position(&mut self, handle: Entity, position: DVec3) {
        self.move_to(handle, position);
    }

    fn rotate_local(&mut self, handle: Entity, axis: DVec3, radians: f64) {
        if let Ok(mut pose) = self.world.get::<&mut Pose>(handle) {
            pose.rotation = (pose.rotation * DQuat::from_axis_angle(axis, radians)).normalize();
        }
    }

    fn pose(&self, handle: Entity) -> Option<Pose> {
        self.world.get::<&Pose>(handle).ok().map(|pose| *pose)
    }
}
