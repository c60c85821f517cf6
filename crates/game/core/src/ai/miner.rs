//! Mining laborer brain.
//!
//! Mines the closest deposit until the inventory is full, then hauls the
//! haul to the closest spawner of its own faction. Each tick yields one
//! effective action; when the current goal is unreachable the miner waits.

use crate::action::{Action, DepositAction, MineAction};
use crate::ai::{Decision, seek};
use crate::env::GameEnv;
use crate::error::InvariantError;
use crate::state::{Entity, EntityId, GameState, Position};

pub(super) fn decide(
    path: &mut Vec<Position>,
    actor_id: EntityId,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<Decision, InvariantError> {
    let actor = state.entities.expect_actor(actor_id)?;
    let hauling = actor.inventory()?.is_full();

    let action = if hauling {
        seek_spawner(path, actor_id, state, env)?
    } else {
        seek_resource(path, actor_id, state, env)?
    };
    Ok(Decision::Act(action.unwrap_or_else(|| Action::wait(actor_id))))
}

fn seek_resource(
    path: &mut Vec<Position>,
    actor_id: EntityId,
    state: &GameState,
    env: &GameEnv<'_>,
) -> Result<Option<Action>, InvariantError> {
    let actor = state.entities.expect_actor(actor_id)?;
    let origin = actor.position;

    let Some(target) = state
        .entities
        .iter()
        .filter(|entity| matches!(entity, Entity::Resource(_)))
        .min_by_key(|entity| origin.distance_squared(entity.position()))
    else {
        return Ok(None);
    };

    seek(
        path,
        actor_id,
        origin,
        target.position(),
        state,
        env,
        |dx, dy| Action::Mine(MineAction::new(actor_id, dx, dy)),
    )
}

fn seek_spawner(
    path: &mut Vec<Position>,
    actor_id: EntityId,
    state: &GameState,
    env: &GameEnv<'_>,
) -> Result<Option<Action>, InvariantError> {
    let actor = state.entities.expect_actor(actor_id)?;
    let origin = actor.position;
    let faction = actor.faction;

    // Deposits only flow to the miner's own side.
    let Some(target) = state
        .entities
        .alive_actors()
        .filter(|candidate| candidate.id != actor_id)
        .filter(|candidate| candidate.spawner.is_some() && candidate.faction == faction)
        .min_by_key(|candidate| origin.distance_squared(candidate.position))
    else {
        return Ok(None);
    };

    let target_position = target.position;
    seek(
        path,
        actor_id,
        origin,
        target_position,
        state,
        env,
        |dx, dy| Action::Deposit(DepositAction::new(actor_id, dx, dy)),
    )
}
