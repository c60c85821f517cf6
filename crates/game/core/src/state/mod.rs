//! Authoritative game state representation.
//!
//! This module owns the data structures that describe entities, fighters,
//! inventories, and prototypes. Frontends query this state but mutate it
//! exclusively through actions driven by the turn engine.
pub mod actor;
pub mod common;
pub mod conditions;
pub mod entities;
pub mod entity;
pub mod equipment;
pub mod fighter;
pub mod harvest;
pub mod inventory;
pub mod item;
pub mod spawner;
pub mod templates;

pub use actor::{ActorState, Faction};
pub use common::{EntityId, Position, Rgb};
pub use conditions::{Condition, ConditionKind, ConditionSlot, ConditionSpec, ConditionTable};
pub use entities::Entities;
pub use entity::{Entity, GroundItem, RenderOrder, ResourceState};
pub use equipment::Equipment;
pub use fighter::Fighter;
pub use harvest::Harvestable;
pub use inventory::Inventory;
pub use item::{Consumable, EquipSlot, Equippable, ItemState};
pub use spawner::{Spawner, SpawnerMode};
pub use templates::{ActorTemplate, ActorTemplateBuilder, ItemTemplate, Prototype, ResourceTemplate};

use crate::config::GameConfig;
use crate::error::InvariantError;

/// Canonical snapshot of the deterministic game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// RNG seed for deterministic random generation. Set once at game
    /// initialization and combined with the clock and actor id to derive
    /// per-event seeds.
    pub game_seed: u64,

    /// Completed ticks since the run started.
    pub clock: u64,

    pub config: GameConfig,

    /// All entities in play: actors, ground items, resource deposits.
    pub entities: Entities,

    /// Accumulated score (kills and the like).
    pub score: u64,

    /// Debug flag: a ghost player is skipped by NPC target acquisition.
    pub player_is_ghost: bool,
}

impl GameState {
    pub fn new(game_seed: u64, config: GameConfig) -> Self {
        Self {
            game_seed,
            clock: 0,
            config,
            entities: Entities::new(),
            score: 0,
            player_is_ghost: false,
        }
    }

    /// Adds the player actor under its reserved id.
    pub fn add_player(&mut self, template: &ActorTemplate, position: Position) {
        // Claim id 0 before anything else is spawned.
        let id = self.entities.allocate_id();
        debug_assert_eq!(id, EntityId::PLAYER);
        self.entities.insert(template.to_entity(EntityId::PLAYER, position));
    }

    /// Spawns an entity from a prototype at `position`, returning its id.
    pub fn spawn(&mut self, prototype: &Prototype, position: Position) -> EntityId {
        self.entities
            .spawn(|id| prototype.to_entity(id, position))
    }

    pub fn player(&self) -> Result<&ActorState, InvariantError> {
        self.entities.expect_actor(EntityId::PLAYER)
    }

    pub fn player_mut(&mut self) -> Result<&mut ActorState, InvariantError> {
        self.entities.expect_actor_mut(EntityId::PLAYER)
    }

    pub fn player_position(&self) -> Result<Position, InvariantError> {
        Ok(self.player()?.position)
    }
}
