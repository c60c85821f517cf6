//! Confusion wrapper brain.

use crate::action::{Action, BumpAction};
use crate::ai::{Brain, Decision};
use crate::env::{GameEnv, compute_seed};
use crate::error::InvariantError;
use crate::log::{MessageColor, MessageLog};
use crate::state::{EntityId, GameState};

/// Neighbor offsets a confused actor can stumble into.
const STUMBLE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub(super) fn decide(
    previous: &Brain,
    turns_remaining: &mut u32,
    actor_id: EntityId,
    state: &mut GameState,
    env: &GameEnv<'_>,
    log: &mut MessageLog,
) -> Result<Decision, InvariantError> {
    if *turns_remaining == 0 {
        let name = state.entities.expect_actor(actor_id)?.name.clone();
        log.add_message(
            format!("The {name} is no longer confused."),
            MessageColor::White,
        );
        return Ok(Decision::Become(Box::new(previous.clone())));
    }
    *turns_remaining -= 1;

    let seed = compute_seed(state.game_seed, state.clock, actor_id.0, 0);
    let index = env.rng()?.next_u32(seed) as usize % STUMBLE_OFFSETS.len();
    let (dx, dy) = STUMBLE_OFFSETS[index];

    // Bump, not move: a confused actor blunders into whoever is in the way.
    Ok(Decision::Act(Action::Bump(BumpAction::new(
        actor_id, dx, dy,
    ))))
}
