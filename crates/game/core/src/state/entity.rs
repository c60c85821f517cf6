//! The entity sum type and its shared surface.

use crate::state::actor::ActorState;
use crate::state::common::{EntityId, Position, Rgb};
use crate::state::harvest::Harvestable;
use crate::state::item::ItemState;

/// Draw priority, lowest first. Corpses sink below items so loot stays
/// visible on top of remains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderOrder {
    Corpse,
    Item,
    Structure,
    Actor,
}

/// An item lying on the map.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroundItem {
    pub position: Position,
    pub item: ItemState,
}

/// A mineable deposit occupying a tile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceState {
    pub id: EntityId,
    pub position: Position,
    pub name: String,
    pub glyph: char,
    pub color: Rgb,
    pub harvestable: Harvestable,
}

/// Anything that occupies the arena.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Entity {
    Actor(ActorState),
    Item(GroundItem),
    Resource(ResourceState),
}

impl Entity {
    pub fn id(&self) -> EntityId {
        match self {
            Entity::Actor(actor) => actor.id,
            Entity::Item(ground) => ground.item.id,
            Entity::Resource(resource) => resource.id,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Entity::Actor(actor) => actor.position,
            Entity::Item(ground) => ground.position,
            Entity::Resource(resource) => resource.position,
        }
    }

    pub fn set_position(&mut self, position: Position) {
        match self {
            Entity::Actor(actor) => actor.position = position,
            Entity::Item(ground) => ground.position = position,
            Entity::Resource(resource) => resource.position = position,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entity::Actor(actor) => &actor.name,
            Entity::Item(ground) => &ground.item.name,
            Entity::Resource(resource) => &resource.name,
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            Entity::Actor(actor) => actor.glyph,
            Entity::Item(ground) => ground.item.glyph,
            Entity::Resource(resource) => resource.glyph,
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            Entity::Actor(actor) => actor.color,
            Entity::Item(ground) => ground.item.color,
            Entity::Resource(resource) => resource.color,
        }
    }

    /// Items never block; resources always do; actors carry a flag that
    /// flips off when they die.
    pub fn blocks_movement(&self) -> bool {
        match self {
            Entity::Actor(actor) => actor.blocks_movement,
            Entity::Item(_) => false,
            Entity::Resource(_) => true,
        }
    }

    pub fn render_order(&self) -> RenderOrder {
        match self {
            Entity::Actor(actor) => actor.render_order,
            Entity::Item(_) => RenderOrder::Item,
            Entity::Resource(_) => RenderOrder::Structure,
        }
    }

    pub fn as_actor(&self) -> Option<&ActorState> {
        match self {
            Entity::Actor(actor) => Some(actor),
            _ => None,
        }
    }

    pub fn as_actor_mut(&mut self) -> Option<&mut ActorState> {
        match self {
            Entity::Actor(actor) => Some(actor),
            _ => None,
        }
    }

    pub fn as_ground_item(&self) -> Option<&GroundItem> {
        match self {
            Entity::Item(ground) => Some(ground),
            _ => None,
        }
    }

    pub fn as_resource(&self) -> Option<&ResourceState> {
        match self {
            Entity::Resource(resource) => Some(resource),
            _ => None,
        }
    }

    pub fn as_resource_mut(&mut self) -> Option<&mut ResourceState> {
        match self {
            Entity::Resource(resource) => Some(resource),
            _ => None,
        }
    }
}
