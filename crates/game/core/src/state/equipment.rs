//! Equipment slots referencing items held in the owner's inventory.

use crate::state::common::EntityId;
use crate::state::item::EquipSlot;

/// Three-slot equipment board. Slots hold the ids of inventory items; the
/// items themselves never leave the inventory while equipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    pub weapon: Option<EntityId>,
    pub ranged: Option<EntityId>,
    pub armor: Option<EntityId>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, slot: EquipSlot) -> Option<EntityId> {
        match slot {
            EquipSlot::Weapon => self.weapon,
            EquipSlot::Ranged => self.ranged,
            EquipSlot::Armor => self.armor,
        }
    }

    fn slot_mut(&mut self, slot: EquipSlot) -> &mut Option<EntityId> {
        match slot {
            EquipSlot::Weapon => &mut self.weapon,
            EquipSlot::Ranged => &mut self.ranged,
            EquipSlot::Armor => &mut self.armor,
        }
    }

    pub fn is_equipped(&self, id: EntityId) -> bool {
        [self.weapon, self.ranged, self.armor].contains(&Some(id))
    }

    /// Equips `id` into `slot`, or unequips it when it already occupies the
    /// slot. Whatever previously occupied the slot is displaced. Returns
    /// `true` when the item ends up equipped.
    pub fn toggle(&mut self, id: EntityId, slot: EquipSlot) -> bool {
        let entry = self.slot_mut(slot);
        if *entry == Some(id) {
            *entry = None;
            false
        } else {
            *entry = Some(id);
            true
        }
    }

    /// Clears any slot currently holding `id` (item dropped or destroyed).
    pub fn unequip(&mut self, id: EntityId) {
        for entry in [&mut self.weapon, &mut self.ranged, &mut self.armor] {
            if *entry == Some(id) {
                *entry = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_equips_then_unequips() {
        let mut equipment = Equipment::new();
        assert!(equipment.toggle(EntityId(5), EquipSlot::Weapon));
        assert!(equipment.is_equipped(EntityId(5)));
        assert!(!equipment.toggle(EntityId(5), EquipSlot::Weapon));
        assert!(!equipment.is_equipped(EntityId(5)));
    }

    #[test]
    fn toggle_displaces_previous_occupant() {
        let mut equipment = Equipment::new();
        equipment.toggle(EntityId(5), EquipSlot::Armor);
        assert!(equipment.toggle(EntityId(6), EquipSlot::Armor));
        assert_eq!(equipment.armor, Some(EntityId(6)));
        assert!(!equipment.is_equipped(EntityId(5)));
    }
}
