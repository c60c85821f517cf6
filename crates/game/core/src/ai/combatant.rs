//! Chase-and-melee brain.

use crate::action::{Action, MeleeAction};
use crate::ai::{Decision, closest_hostile, seek};
use crate::env::GameEnv;
use crate::error::InvariantError;
use crate::state::{EntityId, GameState, Position};

pub(super) fn decide(
    path: &mut Vec<Position>,
    actor_id: EntityId,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<Decision, InvariantError> {
    let actor = state.entities.expect_actor(actor_id)?;
    let Some(target) = closest_hostile(state, actor) else {
        return Ok(Decision::Act(Action::wait(actor_id)));
    };
    let origin = actor.position;
    let target_position = target.position;

    let action = seek(
        path,
        actor_id,
        origin,
        target_position,
        state,
        env,
        |dx, dy| Action::Melee(MeleeAction::new(actor_id, dx, dy)),
    )?;
    Ok(Decision::Act(action.unwrap_or_else(|| Action::wait(actor_id))))
}
