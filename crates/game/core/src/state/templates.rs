//! Value-type prototypes.
//!
//! Spawning clones a template into a live entity with an explicit id and
//! position; templates never alias the entities stamped from them, so
//! mutating one spawned mob can never bleed into its siblings.

use crate::ai::Brain;
use crate::state::actor::{ActorState, Faction};
use crate::state::common::{EntityId, Position, Rgb};
use crate::state::entity::{Entity, GroundItem, RenderOrder, ResourceState};
use crate::state::equipment::Equipment;
use crate::state::fighter::Fighter;
use crate::state::harvest::Harvestable;
use crate::state::inventory::Inventory;
use crate::state::item::{Consumable, Equippable, ItemState};
use crate::state::spawner::Spawner;

/// Prototype for an item entity or inventory stack.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTemplate {
    pub name: String,
    pub glyph: char,
    pub color: Rgb,
    pub amount: u32,
    pub max_stack: u32,
    pub consumable: Option<Consumable>,
    pub equippable: Option<Equippable>,
}

impl ItemTemplate {
    /// Non-stacking item with no payload.
    pub fn plain(name: impl Into<String>, glyph: char, color: Rgb) -> Self {
        Self {
            name: name.into(),
            glyph,
            color,
            amount: 1,
            max_stack: 1,
            consumable: None,
            equippable: None,
        }
    }

    pub fn with_stack(mut self, amount: u32, max_stack: u32) -> Self {
        self.amount = amount;
        self.max_stack = max_stack;
        self
    }

    pub fn with_consumable(mut self, consumable: Consumable) -> Self {
        self.consumable = Some(consumable);
        self
    }

    pub fn with_equippable(mut self, equippable: Equippable) -> Self {
        self.equippable = Some(equippable);
        self
    }

    /// Stamps an inventory stack with a freshly allocated id.
    pub fn to_item(&self, id: EntityId) -> ItemState {
        ItemState {
            id,
            name: self.name.clone(),
            glyph: self.glyph,
            color: self.color,
            amount: self.amount,
            max_stack: self.max_stack,
            consumable: self.consumable,
            equippable: self.equippable.clone(),
        }
    }

    /// Stamps a map entity.
    pub fn to_entity(&self, id: EntityId, position: Position) -> Entity {
        Entity::Item(GroundItem {
            position,
            item: self.to_item(id),
        })
    }
}

/// Prototype for a mineable deposit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceTemplate {
    pub name: String,
    pub glyph: char,
    pub color: Rgb,
    pub capacity: i32,
    pub portion: i32,
    pub yield_item: ItemTemplate,
}

impl ResourceTemplate {
    pub fn new(
        name: impl Into<String>,
        glyph: char,
        color: Rgb,
        capacity: i32,
        portion: i32,
        yield_item: ItemTemplate,
    ) -> Self {
        Self {
            name: name.into(),
            glyph,
            color,
            capacity,
            portion,
            yield_item,
        }
    }

    pub fn to_entity(&self, id: EntityId, position: Position) -> Entity {
        Entity::Resource(ResourceState {
            id,
            position,
            name: self.name.clone(),
            glyph: self.glyph,
            color: self.color,
            harvestable: Harvestable::new(self.yield_item.clone(), self.capacity, self.portion),
        })
    }
}

/// Prototype for an actor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorTemplate {
    pub name: String,
    pub glyph: char,
    pub color: Rgb,
    pub blocks_movement: bool,
    pub render_order: RenderOrder,
    pub faction: Faction,
    pub brain: Option<Brain>,
    pub fighter: Option<Fighter>,
    pub inventory_capacity: Option<usize>,
    pub has_equipment: bool,
    pub spawner: Option<Spawner>,
}

impl ActorTemplate {
    pub fn builder(name: impl Into<String>) -> ActorTemplateBuilder {
        ActorTemplateBuilder::new(name)
    }

    /// Stamps a live actor. Every component is cloned; the template is
    /// untouched.
    pub fn to_entity(&self, id: EntityId, position: Position) -> Entity {
        Entity::Actor(ActorState {
            id,
            position,
            name: self.name.clone(),
            glyph: self.glyph,
            color: self.color,
            blocks_movement: self.blocks_movement,
            render_order: self.render_order,
            faction: self.faction,
            brain: self.brain.clone(),
            fighter: self.fighter.clone(),
            inventory: self.inventory_capacity.map(Inventory::new),
            equipment: self.has_equipment.then(Equipment::new),
            spawner: self.spawner.clone(),
        })
    }
}

/// Builder for [`ActorTemplate`].
#[derive(Clone, Debug)]
pub struct ActorTemplateBuilder {
    template: ActorTemplate,
}

impl ActorTemplateBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            template: ActorTemplate {
                name: name.into(),
                glyph: '?',
                color: (255, 255, 255),
                blocks_movement: true,
                render_order: RenderOrder::Actor,
                faction: Faction::Hostile,
                brain: None,
                fighter: None,
                inventory_capacity: None,
                has_equipment: false,
                spawner: None,
            },
        }
    }

    pub fn glyph(mut self, glyph: char) -> Self {
        self.template.glyph = glyph;
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.template.color = color;
        self
    }

    pub fn blocks_movement(mut self, blocks: bool) -> Self {
        self.template.blocks_movement = blocks;
        self
    }

    pub fn render_order(mut self, order: RenderOrder) -> Self {
        self.template.render_order = order;
        self
    }

    pub fn faction(mut self, faction: Faction) -> Self {
        self.template.faction = faction;
        self
    }

    pub fn brain(mut self, brain: Brain) -> Self {
        self.template.brain = Some(brain);
        self
    }

    pub fn fighter(mut self, fighter: Fighter) -> Self {
        self.template.fighter = Some(fighter);
        self
    }

    pub fn inventory(mut self, capacity: usize) -> Self {
        self.template.inventory_capacity = Some(capacity);
        self
    }

    pub fn equipment(mut self) -> Self {
        self.template.has_equipment = true;
        self
    }

    pub fn spawner(mut self, spawner: Spawner) -> Self {
        self.template.spawner = Some(spawner);
        self
    }

    pub fn build(self) -> ActorTemplate {
        self.template
    }
}

/// Any spawnable prototype.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Prototype {
    Actor(ActorTemplate),
    Item(ItemTemplate),
    Resource(ResourceTemplate),
}

impl Prototype {
    pub fn name(&self) -> &str {
        match self {
            Prototype::Actor(template) => &template.name,
            Prototype::Item(template) => &template.name,
            Prototype::Resource(template) => &template.name,
        }
    }

    pub fn to_entity(&self, id: EntityId, position: Position) -> Entity {
        match self {
            Prototype::Actor(template) => template.to_entity(id, position),
            Prototype::Item(template) => template.to_entity(id, position),
            Prototype::Resource(template) => template.to_entity(id, position),
        }
    }
}
