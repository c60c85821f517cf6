//! Entity arena: id allocation, storage, and tile queries.

use std::collections::BTreeMap;

use crate::error::InvariantError;
use crate::state::actor::ActorState;
use crate::state::common::{EntityId, Position};
use crate::state::entity::Entity;

/// Owner of every entity in play, keyed by id.
///
/// A `BTreeMap` keeps iteration in id order, which makes NPC scheduling and
/// target tie-breaking deterministic. Ids are handed out monotonically and
/// never reused; an item whose entity leaves the map (picked up) keeps its
/// id inside the inventory and is re-inserted under the same id on drop.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entities {
    next_id: u32,
    entities: BTreeMap<EntityId, Entity>,
}

impl Entities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Reserves a fresh id without inserting anything. Used for items
    /// created directly inside an inventory (mining yields).
    pub fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Inserts an entity under its own id. Ids minted elsewhere (drops,
    /// corpse spills) stay valid because the allocator never goes
    /// backwards.
    pub fn insert(&mut self, entity: Entity) {
        let id = entity.id();
        self.next_id = self.next_id.max(id.0 + 1);
        self.entities.insert(id, entity);
    }

    /// Allocates an id and inserts the entity built from it.
    pub fn spawn(&mut self, build: impl FnOnce(EntityId) -> Entity) -> EntityId {
        let id = self.allocate_id();
        self.entities.insert(id, build(id));
        id
    }

    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        self.entities.remove(&id)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    pub fn actor(&self, id: EntityId) -> Option<&ActorState> {
        self.entities.get(&id)?.as_actor()
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut ActorState> {
        self.entities.get_mut(&id)?.as_actor_mut()
    }

    /// Actor lookup that treats absence as a broken invariant.
    pub fn expect_actor(&self, id: EntityId) -> Result<&ActorState, InvariantError> {
        self.entities
            .get(&id)
            .ok_or(InvariantError::MissingEntity(id))?
            .as_actor()
            .ok_or(InvariantError::NotAnActor(id))
    }

    pub fn expect_actor_mut(&mut self, id: EntityId) -> Result<&mut ActorState, InvariantError> {
        self.entities
            .get_mut(&id)
            .ok_or(InvariantError::MissingEntity(id))?
            .as_actor_mut()
            .ok_or(InvariantError::NotAnActor(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Living actors (corpses excluded), in id order.
    pub fn alive_actors(&self) -> impl Iterator<Item = &ActorState> {
        self.entities
            .values()
            .filter_map(Entity::as_actor)
            .filter(|actor| actor.is_alive())
    }

    /// First entity on `position` that blocks movement.
    pub fn blocking_entity_at(&self, position: Position) -> Option<&Entity> {
        self.entities
            .values()
            .find(|entity| entity.blocks_movement() && entity.position() == position)
    }

    /// Living actor standing on `position`.
    pub fn actor_id_at(&self, position: Position) -> Option<EntityId> {
        self.alive_actors()
            .find(|actor| actor.position == position)
            .map(|actor| actor.id)
    }

    /// Living actor with a spawner component on `position`.
    pub fn spawner_id_at(&self, position: Position) -> Option<EntityId> {
        self.alive_actors()
            .find(|actor| actor.position == position && actor.spawner.is_some())
            .map(|actor| actor.id)
    }

    /// Ground item lying on `position`.
    pub fn ground_item_id_at(&self, position: Position) -> Option<EntityId> {
        self.entities
            .values()
            .find(|entity| matches!(entity, Entity::Item(_)) && entity.position() == position)
            .map(Entity::id)
    }

    /// Resource deposit on `position`.
    pub fn resource_id_at(&self, position: Position) -> Option<EntityId> {
        self.entities
            .values()
            .find(|entity| matches!(entity, Entity::Resource(_)) && entity.position() == position)
            .map(Entity::id)
    }

    /// Any entity other than `excluding` on `position`. Spawners use this
    /// to refuse producing onto an occupied tile.
    pub fn entity_at_excluding(&self, position: Position, excluding: EntityId) -> Option<&Entity> {
        self.entities
            .values()
            .find(|entity| entity.id() != excluding && entity.position() == position)
    }
}
