use crate::action::ActionTransition;
use crate::action::error::{ActionError, Rejection};
use crate::env::{GameEnv, TurnHooks};
use crate::log::MessageLog;
use crate::state::{EntityId, GameState};

/// Single-step movement, diagonals included.
///
/// One rejection covers every refusal (bounds, terrain, blockers): the
/// player only ever learns that the way is blocked, not why.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub actor: EntityId,
    pub dx: i32,
    pub dy: i32,
}

impl MoveAction {
    pub fn new(actor: EntityId, dx: i32, dy: i32) -> Self {
        Self { actor, dx, dy }
    }
}

impl ActionTransition for MoveAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn perform(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        _hooks: &mut dyn TurnHooks,
        _log: &mut MessageLog,
    ) -> Result<(), ActionError> {
        let map = env.map()?;
        let actor = state.entities.expect_actor(self.actor)?;
        let destination = actor.position.offset(self.dx, self.dy);

        if !map.contains(destination) || !map.walkable(destination) {
            return Err(Rejection::WayBlocked.into());
        }
        if state.entities.blocking_entity_at(destination).is_some() {
            return Err(Rejection::WayBlocked.into());
        }

        state.entities.expect_actor_mut(self.actor)?.position = destination;
        Ok(())
    }
}

/// Directional intent: melee when a living actor occupies the destination,
/// otherwise move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BumpAction {
    pub actor: EntityId,
    pub dx: i32,
    pub dy: i32,
}

impl BumpAction {
    pub fn new(actor: EntityId, dx: i32, dy: i32) -> Self {
        Self { actor, dx, dy }
    }
}

impl ActionTransition for BumpAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn perform(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        hooks: &mut dyn TurnHooks,
        log: &mut MessageLog,
    ) -> Result<(), ActionError> {
        let actor = state.entities.expect_actor(self.actor)?;
        let destination = actor.position.offset(self.dx, self.dy);

        if state.entities.actor_id_at(destination).is_some() {
            super::combat::MeleeAction::new(self.actor, self.dx, self.dy)
                .perform(state, env, hooks, log)
        } else {
            MoveAction::new(self.actor, self.dx, self.dy).perform(state, env, hooks, log)
        }
    }
}
