use crate::action::error::ActionError;
use crate::action::ActionTransition;
use crate::env::{GameEnv, TurnHooks};
use crate::log::MessageLog;
use crate::state::{EntityId, GameState};

/// Wait action - actor passes their turn without doing anything.
///
/// Never fails; this is also the universal AI fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaitAction {
    pub actor: EntityId,
}

impl WaitAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for WaitAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn perform(
        &self,
        _state: &mut GameState,
        _env: &GameEnv<'_>,
        _hooks: &mut dyn TurnHooks,
        _log: &mut MessageLog,
    ) -> Result<(), ActionError> {
        Ok(())
    }
}
