//! Mining and depositing: the spawner economy's supply side.

use crate::action::ActionTransition;
use crate::action::error::{ActionError, Rejection};
use crate::combat::capitalize;
use crate::env::{GameEnv, TurnHooks};
use crate::error::InvariantError;
use crate::log::{MessageColor, MessageLog};
use crate::state::{Entity, EntityId, Faction, GameState};

/// Extracts one portion from an adjacent resource deposit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MineAction {
    pub actor: EntityId,
    pub dx: i32,
    pub dy: i32,
}

impl MineAction {
    pub fn new(actor: EntityId, dx: i32, dy: i32) -> Self {
        Self { actor, dx, dy }
    }
}

impl ActionTransition for MineAction {
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
        let destination = actor.position.offset(self.dx, self.dy);
        let actor_name = actor.name.clone();
        let color = if actor.faction == Faction::Player {
            MessageColor::AllyMine
        } else {
            MessageColor::EnemyMine
        };

        let resource_id = state
            .entities
            .resource_id_at(destination)
            .ok_or(Rejection::NothingToMine)?;

        let yield_id = state.entities.allocate_id();
        let (yield_item, resource_name, depleted) = {
            let resource = state
                .entities
                .get_mut(resource_id)
                .and_then(Entity::as_resource_mut)
                .ok_or(InvariantError::MissingEntity(resource_id))?;
            let depleted = resource.harvestable.extract();
            (
                resource.harvestable.yield_item.to_item(yield_id),
                resource.name.clone(),
                depleted,
            )
        };
        if depleted {
            state.entities.remove(resource_id);
        }

        // Mining bypasses the inventory capacity check; only pickup
        // enforces it.
        let actor = state.entities.expect_actor_mut(self.actor)?;
        actor.inventory_mut()?.push(yield_item);

        log.add_message(
            format!("{} mines {}.", capitalize(&actor_name), resource_name),
            color,
        );
        Ok(())
    }
}

/// Empties the actor's inventory into an adjacent spawner's bank.
///
/// Any spawner accepts the deposit regardless of faction; even an empty
/// inventory deposits zero and still clears.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepositAction {
    pub actor: EntityId,
    pub dx: i32,
    pub dy: i32,
}

impl DepositAction {
    pub fn new(actor: EntityId, dx: i32, dy: i32) -> Self {
        Self { actor, dx, dy }
    }
}

impl ActionTransition for DepositAction {
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
        let destination = actor.position.offset(self.dx, self.dy);
        let actor_name = actor.name.clone();
        let color = if actor.faction == Faction::Player {
            MessageColor::AllyMine
        } else {
            MessageColor::EnemyMine
        };
        // The deposit counts stacks, not units.
        let amount = actor.inventory()?.len() as u32;

        let spawner_id = state
            .entities
            .spawner_id_at(destination)
            .ok_or(Rejection::NoSpawnerToDeposit)?;

        let spawner_name = {
            let spawner_actor = state.entities.expect_actor_mut(spawner_id)?;
            spawner_actor.spawner_mut()?.deposit(amount);
            spawner_actor.name.clone()
        };

        state
            .entities
            .expect_actor_mut(self.actor)?
            .inventory_mut()?
            .take_all();

        log.add_message(
            format!(
                "{} deposits {} resources into the {}.",
                capitalize(&actor_name),
                amount,
                spawner_name
            ),
            color,
        );
        Ok(())
    }
}
