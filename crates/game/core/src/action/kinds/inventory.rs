//! Item handling: pickup, drop, equip, use.

use crate::action::ActionTransition;
use crate::action::error::{ActionError, Rejection};
use crate::ai::Brain;
use crate::env::{GameEnv, TurnHooks};
use crate::error::InvariantError;
use crate::log::{MessageColor, MessageLog};
use crate::state::{ActorState, Consumable, Entity, EntityId, GameState, GroundItem, Position};

/// Removes one unit from a held stack, dropping the stack entirely (and
/// clearing any equipment slot pointing at it) when it empties.
fn consume_one(actor: &mut ActorState, item: EntityId) -> Result<(), InvariantError> {
    let emptied = {
        let inventory = actor.inventory_mut()?;
        match inventory.item_mut(item) {
            Some(stack) => {
                stack.amount = stack.amount.saturating_sub(1);
                stack.amount == 0
            }
            None => false,
        }
    };
    if emptied {
        if let Some(equipment) = actor.equipment.as_mut() {
            equipment.unequip(item);
        }
        actor.inventory_mut()?.remove(item);
    }
    Ok(())
}

/// Picks up the item stack on the actor's own tile.
///
/// Stackable loot first merges into held stacks of the same name; that
/// partial merge sticks even when the leftover is then rejected for lack
/// of a free slot, mirroring how a full-handed miner still tops off open
/// stacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickupAction {
    pub actor: EntityId,
}

impl PickupAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for PickupAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn perform(
        &self,
        state: &mut GameState,
        _env: &GameEnv<'_>,
        _hooks: &mut dyn TurnHooks,
        log: &mut MessageLog,
    ) -> Result<(), ActionError> {
        let actor = state.entities.expect_actor(self.actor)?;
        let position = actor.position;
        let ground_id = state
            .entities
            .ground_item_id_at(position)
            .ok_or(Rejection::NothingToPickUp)?;

        let mut ground = match state.entities.remove(ground_id) {
            Some(Entity::Item(ground)) => ground,
            _ => return Err(InvariantError::MissingEntity(ground_id).into()),
        };

        let actor = state.entities.expect_actor_mut(self.actor)?;
        let inventory = actor.inventory_mut()?;
        inventory.merge_into_stacks(&mut ground.item);

        if ground.item.amount == 0 {
            log.add_message(
                format!("You picked up the {}!", ground.item.name),
                MessageColor::White,
            );
            return Ok(());
        }

        if inventory.is_full() {
            // Residual goes back where it was found.
            state.entities.insert(Entity::Item(ground));
            return Err(Rejection::InventoryFull.into());
        }

        let name = ground.item.name.clone();
        inventory.push(ground.item);
        log.add_message(format!("You picked up the {name}!"), MessageColor::White);
        Ok(())
    }
}

/// Drops a held item onto the actor's tile, unequipping it if needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropAction {
    pub actor: EntityId,
    pub item: EntityId,
}

impl DropAction {
    pub fn new(actor: EntityId, item: EntityId) -> Self {
        Self { actor, item }
    }
}

impl ActionTransition for DropAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn perform(
        &self,
        state: &mut GameState,
        _env: &GameEnv<'_>,
        _hooks: &mut dyn TurnHooks,
        log: &mut MessageLog,
    ) -> Result<(), ActionError> {
        let actor = state.entities.expect_actor_mut(self.actor)?;
        if !actor.inventory()?.contains(self.item) {
            return Err(Rejection::ItemNotHeld.into());
        }
        let position = actor.position;

        if let Some(equipment) = actor.equipment.as_mut() {
            equipment.unequip(self.item);
        }
        let item = actor
            .inventory_mut()?
            .remove(self.item)
            .ok_or(InvariantError::MissingEntity(self.item))?;
        let name = item.name.clone();

        state.entities.insert(Entity::Item(GroundItem { position, item }));
        log.add_message(format!("You dropped the {name}."), MessageColor::White);
        Ok(())
    }
}

/// Toggles a held item in its equipment slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipAction {
    pub actor: EntityId,
    pub item: EntityId,
}

impl EquipAction {
    pub fn new(actor: EntityId, item: EntityId) -> Self {
        Self { actor, item }
    }
}

impl ActionTransition for EquipAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn perform(
        &self,
        state: &mut GameState,
        _env: &GameEnv<'_>,
        _hooks: &mut dyn TurnHooks,
        log: &mut MessageLog,
    ) -> Result<(), ActionError> {
        let actor = state.entities.expect_actor_mut(self.actor)?;
        let (slot, name) = {
            let item = actor
                .inventory()?
                .item(self.item)
                .ok_or(Rejection::ItemNotHeld)?;
            let equippable = item.equippable.as_ref().ok_or(Rejection::NotEquippable)?;
            (equippable.slot, item.name.clone())
        };

        let equipped = actor.equipment_mut()?.toggle(self.item, slot);
        if equipped {
            log.add_message(format!("You equip the {name}."), MessageColor::White);
        } else {
            log.add_message(format!("You remove the {name}."), MessageColor::White);
        }
        Ok(())
    }
}

/// Activates a consumable from the actor's inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseItemAction {
    pub actor: EntityId,
    pub item: EntityId,
    /// Tile the effect lands on; defaults to the user's own tile.
    pub target: Option<Position>,
}

impl UseItemAction {
    pub fn new(actor: EntityId, item: EntityId, target: Option<Position>) -> Self {
        Self {
            actor,
            item,
            target,
        }
    }
}

impl ActionTransition for UseItemAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn perform(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        _hooks: &mut dyn TurnHooks,
        log: &mut MessageLog,
    ) -> Result<(), ActionError> {
        let actor = state.entities.expect_actor(self.actor)?;
        let held = actor
            .inventory()?
            .item(self.item)
            .ok_or(Rejection::ItemNotHeld)?;
        let consumable = held.consumable.ok_or(Rejection::NotUsable)?;
        let item_name = held.name.clone();
        let user_position = actor.position;

        match consumable {
            Consumable::Healing { amount } => {
                let actor = state.entities.expect_actor_mut(self.actor)?;
                let fighter = actor.fighter_mut()?;
                if fighter.hp() >= fighter.max_hp {
                    return Err(Rejection::HealthAlreadyFull.into());
                }
                let recovered = fighter.heal(amount);
                log.add_message(
                    format!("You consume the {item_name}, and recover {recovered} HP!"),
                    MessageColor::HealthRecovered,
                );
                consume_one(actor, self.item)?;
            }
            Consumable::Confusion { turns } => {
                let target_position = self.target.unwrap_or(user_position);
                if !env.vision()?.visible(target_position) {
                    return Err(Rejection::TargetNotVisible.into());
                }
                let target_id = state
                    .entities
                    .actor_id_at(target_position)
                    .ok_or(Rejection::NothingToConfuse)?;
                if target_id == self.actor {
                    return Err(Rejection::CannotConfuseSelf.into());
                }

                let target = state.entities.expect_actor_mut(target_id)?;
                let previous = target.brain.take().ok_or(Rejection::NothingToConfuse)?;
                let target_name = target.name.clone();
                target.brain = Some(Brain::confused(previous, turns));
                log.add_message(
                    format!(
                        "The eyes of the {target_name} look vacant, as it starts to stumble around!"
                    ),
                    MessageColor::StatusApplied,
                );

                let actor = state.entities.expect_actor_mut(self.actor)?;
                consume_one(actor, self.item)?;
            }
        }
        Ok(())
    }
}
