//! Floor interaction.

use crate::action::ActionTransition;
use crate::action::error::{ActionError, Rejection};
use crate::env::{GameEnv, TurnHooks};
use crate::log::{MessageColor, MessageLog};
use crate::state::{EntityId, GameState};

/// Descends the staircase under the actor, replacing the whole floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TakeStairsAction {
    pub actor: EntityId,
}

impl TakeStairsAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for TakeStairsAction {
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
        let position = state.entities.expect_actor(self.actor)?.position;
        if env.map()?.downstairs() != Some(position) {
            return Err(Rejection::NoStairsHere.into());
        }

        hooks.regenerate_floor(state);
        log.add_message("You descend the staircase.", MessageColor::Descend);
        Ok(())
    }
}
