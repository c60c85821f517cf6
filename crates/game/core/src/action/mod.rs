//! Action layer.
//!
//! Every state mutation flows through an action: a small value object that
//! checks its own legality against the live state and either mutates or
//! refuses with a [`Rejection`]. Refusal leaves the world untouched, so a
//! stale queued action (the target moved, the item is gone) fails safely.
//!
//! # Module Structure
//!
//! - `error`: the rejection/invariant failure split
//! - `kinds`: one module per action family (movement, combat, harvest,
//!   inventory, interact, wait)

pub mod error;
pub mod kinds;

pub use error::{ActionError, Rejection};
pub use kinds::{
    BumpAction, DepositAction, DropAction, EquipAction, MeleeAction, MineAction, MoveAction,
    PickupAction, RangedAction, TakeStairsAction, UseItemAction, WaitAction,
};

use crate::env::{GameEnv, TurnHooks};
use crate::log::MessageLog;
use crate::state::{EntityId, GameState};

/// Defines how a concrete action variant checks and mutates game state.
pub trait ActionTransition {
    /// Returns the entity performing this action.
    fn actor(&self) -> EntityId;

    /// Checks legality against the current state, then applies. Must not
    /// mutate anything when returning [`ActionError::Impossible`].
    fn perform(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        hooks: &mut dyn TurnHooks,
        log: &mut MessageLog,
    ) -> Result<(), ActionError>;
}

/// Top-level action enum: everything an actor can do with its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Wait(WaitAction),
    Move(MoveAction),
    Bump(BumpAction),
    Melee(MeleeAction),
    Ranged(RangedAction),
    Mine(MineAction),
    Deposit(DepositAction),
    Pickup(PickupAction),
    Drop(DropAction),
    Equip(EquipAction),
    UseItem(UseItemAction),
    TakeStairs(TakeStairsAction),
}

impl Action {
    pub fn wait(actor: EntityId) -> Self {
        Action::Wait(WaitAction::new(actor))
    }

    pub fn actor(&self) -> EntityId {
        match self {
            Action::Wait(action) => action.actor(),
            Action::Move(action) => action.actor(),
            Action::Bump(action) => action.actor(),
            Action::Melee(action) => action.actor(),
            Action::Ranged(action) => action.actor(),
            Action::Mine(action) => action.actor(),
            Action::Deposit(action) => action.actor(),
            Action::Pickup(action) => action.actor(),
            Action::Drop(action) => action.actor(),
            Action::Equip(action) => action.actor(),
            Action::UseItem(action) => action.actor(),
            Action::TakeStairs(action) => action.actor(),
        }
    }

    /// Dispatches to the concrete variant's transition.
    pub fn perform(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        hooks: &mut dyn TurnHooks,
        log: &mut MessageLog,
    ) -> Result<(), ActionError> {
        match self {
            Action::Wait(action) => action.perform(state, env, hooks, log),
            Action::Move(action) => action.perform(state, env, hooks, log),
            Action::Bump(action) => action.perform(state, env, hooks, log),
            Action::Melee(action) => action.perform(state, env, hooks, log),
            Action::Ranged(action) => action.perform(state, env, hooks, log),
            Action::Mine(action) => action.perform(state, env, hooks, log),
            Action::Deposit(action) => action.perform(state, env, hooks, log),
            Action::Pickup(action) => action.perform(state, env, hooks, log),
            Action::Drop(action) => action.perform(state, env, hooks, log),
            Action::Equip(action) => action.perform(state, env, hooks, log),
            Action::UseItem(action) => action.perform(state, env, hooks, log),
            Action::TakeStairs(action) => action.perform(state, env, hooks, log),
        }
    }

    /// Short name for logging.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Action::Wait(_) => "wait",
            Action::Move(_) => "move",
            Action::Bump(_) => "bump",
            Action::Melee(_) => "melee",
            Action::Ranged(_) => "ranged",
            Action::Mine(_) => "mine",
            Action::Deposit(_) => "deposit",
            Action::Pickup(_) => "pickup",
            Action::Drop(_) => "drop",
            Action::Equip(_) => "equip",
            Action::UseItem(_) => "use_item",
            Action::TakeStairs(_) => "take_stairs",
        }
    }
}
