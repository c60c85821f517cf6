//! Actors: anything that takes turns, fights, or spawns.

use crate::ai::Brain;
use crate::error::InvariantError;
use crate::state::common::{EntityId, Position, Rgb};
use crate::state::conditions::ConditionSpec;
use crate::state::entity::RenderOrder;
use crate::state::equipment::Equipment;
use crate::state::fighter::Fighter;
use crate::state::inventory::Inventory;
use crate::state::item::{EquipSlot, ItemState};
use crate::state::spawner::Spawner;

/// Allegiance tag; actors of different factions are mutually hostile.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Faction {
    Player,
    Snake,
    Hostile,
}

impl Faction {
    pub fn is_hostile_to(&self, other: Faction) -> bool {
        *self != other
    }
}

/// An actor in the arena. Components are optional so the same shape covers
/// the player, mobs, and structure actors like spawners.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: EntityId,
    pub position: Position,
    pub name: String,
    pub glyph: char,
    pub color: Rgb,
    pub blocks_movement: bool,
    pub render_order: RenderOrder,
    pub faction: Faction,
    /// Decision maker. `None` marks the actor as dead: corpses keep their
    /// fighter block (and its conditions) but never act again.
    pub brain: Option<Brain>,
    pub fighter: Option<Fighter>,
    pub inventory: Option<Inventory>,
    pub equipment: Option<Equipment>,
    pub spawner: Option<Spawner>,
}

impl ActorState {
    /// Alive means able to act.
    pub fn is_alive(&self) -> bool {
        self.brain.is_some()
    }

    pub fn fighter(&self) -> Result<&Fighter, InvariantError> {
        self.fighter
            .as_ref()
            .ok_or(InvariantError::missing_component(self.id, "fighter"))
    }

    pub fn fighter_mut(&mut self) -> Result<&mut Fighter, InvariantError> {
        self.fighter
            .as_mut()
            .ok_or(InvariantError::missing_component(self.id, "fighter"))
    }

    pub fn inventory(&self) -> Result<&Inventory, InvariantError> {
        self.inventory
            .as_ref()
            .ok_or(InvariantError::missing_component(self.id, "inventory"))
    }

    pub fn inventory_mut(&mut self) -> Result<&mut Inventory, InvariantError> {
        self.inventory
            .as_mut()
            .ok_or(InvariantError::missing_component(self.id, "inventory"))
    }

    pub fn equipment(&self) -> Result<&Equipment, InvariantError> {
        self.equipment
            .as_ref()
            .ok_or(InvariantError::missing_component(self.id, "equipment"))
    }

    pub fn equipment_mut(&mut self) -> Result<&mut Equipment, InvariantError> {
        self.equipment
            .as_mut()
            .ok_or(InvariantError::missing_component(self.id, "equipment"))
    }

    pub fn spawner_mut(&mut self) -> Result<&mut Spawner, InvariantError> {
        self.spawner
            .as_mut()
            .ok_or(InvariantError::missing_component(self.id, "spawner"))
    }

    /// Item equipped in `slot`, resolved through the inventory.
    pub fn equipped(&self, slot: EquipSlot) -> Option<&ItemState> {
        let id = self.equipment.as_ref()?.slot(slot)?;
        self.inventory.as_ref()?.item(id)
    }

    fn equip_bonus(&self, slot: EquipSlot, pick: impl Fn(&crate::state::item::Equippable) -> i32) -> i32 {
        self.equipped(slot)
            .and_then(|item| item.equippable.as_ref())
            .map(pick)
            .unwrap_or(0)
    }

    /// Melee attack power: base power plus the equipped weapon's bonus.
    pub fn effective_power(&self) -> i32 {
        let base = self.fighter.as_ref().map_or(0, |f| f.base_power);
        base + self.equip_bonus(EquipSlot::Weapon, |e| e.power_bonus)
    }

    /// Damage reduction: base armor plus the equipped armor's value.
    pub fn effective_armor(&self) -> i32 {
        let base = self.fighter.as_ref().map_or(0, |f| f.base_armor);
        base + self.equip_bonus(EquipSlot::Armor, |e| e.armor_value)
    }

    pub fn effective_dodge(&self) -> i32 {
        let base = self.fighter.as_ref().map_or(0, |f| f.base_dodge);
        base + self.equip_bonus(EquipSlot::Armor, |e| e.dodge_value)
    }

    pub fn effective_accuracy(&self) -> i32 {
        let base = self.fighter.as_ref().map_or(0, |f| f.base_accuracy);
        base + self.equip_bonus(EquipSlot::Weapon, |e| e.accuracy)
    }

    /// Condition inflicted by this actor's melee hits: the equipped
    /// weapon's effect when it carries one, else the fighter's innate
    /// attack effect.
    pub fn attack_effect(&self) -> Option<&ConditionSpec> {
        if let Some(effect) = self
            .equipped(EquipSlot::Weapon)
            .and_then(|item| item.equippable.as_ref())
            .and_then(|equippable| equippable.attack_effect.as_ref())
        {
            return Some(effect);
        }
        self.fighter.as_ref()?.attack_effect.as_ref()
    }

    /// Equipped ranged weapon, if any.
    pub fn ranged_weapon(&self) -> Option<&ItemState> {
        self.equipped(EquipSlot::Ranged)
    }
}
