//! Damage formulas.
//!
//! Pure calculations; application and the death transition live in
//! [`super::death`].

use crate::state::{ActorState, Equippable};

/// Melee damage: effective power (base plus weapon bonus) against
/// effective armor (base plus worn armor). May be zero or negative, in
/// which case the attack lands "but does no damage".
pub fn melee_damage(attacker: &ActorState, target: &ActorState) -> i32 {
    attacker.effective_power() - target.effective_armor()
}

/// Ranged damage: the weapon's own power against the target's armor. The
/// shooter's base power does not contribute.
pub fn ranged_damage(weapon: &Equippable, target: &ActorState) -> i32 {
    weapon.power_bonus - target.effective_armor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{
        ActorState, EntityId, Equipment, Faction, Fighter, Inventory, ItemState, Position,
        RenderOrder,
    };

    fn fighter_actor(id: u32, fighter: Fighter) -> ActorState {
        ActorState {
            id: EntityId(id),
            position: Position::ORIGIN,
            name: "Dummy".into(),
            glyph: 'd',
            color: (255, 255, 255),
            blocks_movement: true,
            render_order: RenderOrder::Actor,
            faction: Faction::Hostile,
            brain: None,
            fighter: Some(fighter),
            inventory: None,
            equipment: None,
            spawner: None,
        }
    }

    #[test]
    fn melee_is_power_minus_armor() {
        let attacker = fighter_actor(1, Fighter::new(6, 5, 0));
        let target = fighter_actor(2, Fighter::new(30, 2, 1));
        assert_eq!(melee_damage(&attacker, &target), 4);
        assert_eq!(melee_damage(&target, &attacker), 2);
    }

    #[test]
    fn equipped_gear_shifts_the_formula() {
        let mut attacker = fighter_actor(1, Fighter::new(10, 2, 0));
        let sword = ItemState {
            id: EntityId(9),
            name: "Sword".into(),
            glyph: '/',
            color: (255, 255, 255),
            amount: 1,
            max_stack: 1,
            consumable: None,
            equippable: Some(Equippable::weapon(0, 0, 3)),
        };
        let mut inventory = Inventory::new(4);
        inventory.push(sword);
        attacker.inventory = Some(inventory);
        let mut equipment = Equipment::new();
        equipment.toggle(EntityId(9), crate::state::EquipSlot::Weapon);
        attacker.equipment = Some(equipment);

        let target = fighter_actor(2, Fighter::new(30, 2, 1));
        assert_eq!(melee_damage(&attacker, &target), 4);
    }
}
