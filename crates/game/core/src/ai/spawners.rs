//! Structure brains driving the two spawner economies.

use crate::action::Action;
use crate::ai::Decision;
use crate::error::InvariantError;
use crate::state::{EntityId, GameState};

pub(super) fn decide_timer(
    actor_id: EntityId,
    state: &mut GameState,
) -> Result<Decision, InvariantError> {
    let due = state
        .entities
        .expect_actor_mut(actor_id)?
        .spawner_mut()?
        .tick_timer();
    if due {
        try_spawn(state, actor_id)?;
    }
    Ok(Decision::Act(Action::wait(actor_id)))
}

pub(super) fn decide_eco(
    actor_id: EntityId,
    state: &mut GameState,
) -> Result<Decision, InvariantError> {
    // The cost is paid up front; a refused spawn (occupied tile) still
    // burns the bank, so crowding a spawner starves it.
    let paid = state
        .entities
        .expect_actor_mut(actor_id)?
        .spawner_mut()?
        .try_pay_spawn();
    if paid {
        try_spawn(state, actor_id)?;
    }
    Ok(Decision::Act(Action::wait(actor_id)))
}

/// Clones the spawner's mob template onto its own tile. Refuses when any
/// other entity already stands there.
fn try_spawn(state: &mut GameState, spawner_id: EntityId) -> Result<bool, InvariantError> {
    let (position, template) = {
        let actor = state.entities.expect_actor(spawner_id)?;
        let spawner = actor
            .spawner
            .as_ref()
            .ok_or(InvariantError::missing_component(spawner_id, "spawner"))?;
        (actor.position, (*spawner.mob).clone())
    };

    if state
        .entities
        .entity_at_excluding(position, spawner_id)
        .is_some()
    {
        tracing::debug!(spawner = %spawner_id, %position, "spawn refused, tile occupied");
        return Ok(false);
    }

    let id = state.entities.spawn(|id| template.to_entity(id, position));
    tracing::debug!(spawner = %spawner_id, spawned = %id, mob = %template.name, "spawned mob");
    Ok(true)
}
