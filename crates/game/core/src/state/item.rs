//! Item payloads: stacking, equippable gear, consumables.

use crate::state::common::{EntityId, Rgb};
use crate::state::conditions::ConditionSpec;

/// Slot an equippable item occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipSlot {
    Weapon,
    Ranged,
    Armor,
}

/// Equippable payload of an item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equippable {
    pub slot: EquipSlot,
    /// Added to melee power, or used as the full ranged attack power.
    pub power_bonus: i32,
    pub accuracy: i32,
    pub armor_penetration: i32,
    pub armor_value: i32,
    pub dodge_value: i32,
    /// Maximum firing distance in tiles (Euclidean); ranged weapons only.
    pub range: Option<u32>,
    /// Condition inflicted on melee victims, overriding the wielder's
    /// innate attack effect.
    pub attack_effect: Option<ConditionSpec>,
}

impl Equippable {
    pub fn weapon(accuracy: i32, armor_penetration: i32, power_bonus: i32) -> Self {
        Self {
            slot: EquipSlot::Weapon,
            power_bonus,
            accuracy,
            armor_penetration,
            armor_value: 0,
            dodge_value: 0,
            range: None,
            attack_effect: None,
        }
    }

    pub fn ranged_weapon(accuracy: i32, armor_penetration: i32, power_bonus: i32, range: u32) -> Self {
        Self {
            slot: EquipSlot::Ranged,
            power_bonus,
            accuracy,
            armor_penetration,
            armor_value: 0,
            dodge_value: 0,
            range: Some(range),
            attack_effect: None,
        }
    }

    pub fn armor(armor_value: i32, dodge_value: i32) -> Self {
        Self {
            slot: EquipSlot::Armor,
            power_bonus: 0,
            accuracy: 0,
            armor_penetration: 0,
            armor_value,
            dodge_value,
            range: None,
            attack_effect: None,
        }
    }
}

/// Single-use payload of an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Consumable {
    /// Restores up to `amount` HP; rejected at full health.
    Healing { amount: i32 },
    /// Scrambles the target's brain for `turns` ticks.
    Confusion { turns: u32 },
}

/// An item, whether lying on the map or held in an inventory.
///
/// The id is allocated from the same arena as every other entity and sticks
/// to the item across pickup and drop, so equipment slots can point at it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemState {
    pub id: EntityId,
    pub name: String,
    pub glyph: char,
    pub color: Rgb,
    /// Units in this stack; plain items always hold 1.
    pub amount: u32,
    /// Per-stack cap; 1 means the item does not stack.
    pub max_stack: u32,
    pub consumable: Option<Consumable>,
    pub equippable: Option<Equippable>,
}

impl ItemState {
    pub fn is_stackable(&self) -> bool {
        self.max_stack > 1
    }

    pub fn space_left(&self) -> u32 {
        self.max_stack.saturating_sub(self.amount)
    }

    /// Name shown in menus and messages, with the stack size when relevant.
    pub fn display_name(&self) -> String {
        if self.is_stackable() {
            format!("{} [{}]", self.name, self.amount)
        } else {
            self.name.clone()
        }
    }
}
