//! Turn resolution pipeline.
//!
//! The [`TurnEngine`] is the authoritative reducer for [`GameState`]. One
//! call to [`TurnEngine::run_tick`] resolves a full game tick: the
//! player's action, every NPC's condition upkeep and decision, and the
//! end-of-tick FOV refresh. Rejections are recoverable and handled here;
//! invariant errors abort the tick and propagate.

use crate::action::{Action, ActionError};
use crate::combat;
use crate::env::{GameEnv, TurnHooks, compute_seed};
use crate::error::InvariantError;
use crate::log::{MessageColor, MessageLog};
use crate::state::{EntityId, GameState};

/// Drives ticks against a borrowed state.
pub struct TurnEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> TurnEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Resolves one tick.
    ///
    /// Order is fixed: the player acts first, then every NPC (in id order)
    /// gets condition upkeep followed by its brain's decision, then the
    /// FOV refresh hook runs once. NPCs spawned during the tick act on the
    /// next one.
    pub fn run_tick(
        &mut self,
        env: &GameEnv<'_>,
        hooks: &mut dyn TurnHooks,
        log: &mut MessageLog,
        player_action: &Action,
    ) -> Result<(), InvariantError> {
        self.state.clock += 1;

        match player_action.perform(self.state, env, hooks, log) {
            Ok(()) => {}
            Err(ActionError::Impossible(rejection)) => {
                // The player is told why; the turn is still consumed.
                log.add_message(rejection.reason(), MessageColor::Impossible);
            }
            Err(ActionError::Invariant(error)) => return Err(error),
        }

        self.npc_turns(env, hooks, log)?;

        let origin = self.state.player_position()?;
        let radius = self.state.config.effective_fov_radius();
        hooks.refresh_fov(origin, radius);
        Ok(())
    }

    fn npc_turns(
        &mut self,
        env: &GameEnv<'_>,
        hooks: &mut dyn TurnHooks,
        log: &mut MessageLog,
    ) -> Result<(), InvariantError> {
        // Snapshot of who gets a turn; mobs spawned mid-pass are excluded.
        let scheduled: Vec<EntityId> = self
            .state
            .entities
            .alive_actors()
            .map(|actor| actor.id)
            .filter(|id| *id != EntityId::PLAYER)
            .collect();

        for id in scheduled {
            // May have died earlier in this same pass.
            let Some(actor) = self.state.entities.actor(id) else {
                continue;
            };
            if !actor.is_alive() {
                continue;
            }

            self.tick_conditions(env, id, log)?;

            // Conditions can kill; re-check before the brain runs.
            let Some(actor) = self.state.entities.actor_mut(id) else {
                continue;
            };
            let Some(mut brain) = actor.brain.take() else {
                continue;
            };

            let decision = brain.decide(id, self.state, env, log)?;
            match decision {
                crate::ai::Decision::Act(action) => {
                    if let Some(actor) = self.state.entities.actor_mut(id) {
                        actor.brain = Some(brain);
                    }
                    match action.perform(self.state, env, hooks, log) {
                        Ok(()) => {}
                        Err(ActionError::Impossible(rejection)) => {
                            // NPC rejections are swallowed silently.
                            tracing::debug!(
                                actor = %id,
                                action = action.kind_name(),
                                reason = %rejection,
                                "npc action rejected"
                            );
                        }
                        Err(ActionError::Invariant(error)) => return Err(error),
                    }
                }
                crate::ai::Decision::Become(next) => {
                    if let Some(actor) = self.state.entities.actor_mut(id) {
                        actor.brain = Some(*next);
                    }
                }
            }
        }
        Ok(())
    }

    /// Condition upkeep for one NPC: proc and demote in the first pass,
    /// sweep markers in the second, then route the accumulated damage
    /// through the combat layer so lethal poison triggers the death
    /// transition.
    fn tick_conditions(
        &mut self,
        env: &GameEnv<'_>,
        id: EntityId,
        log: &mut MessageLog,
    ) -> Result<(), InvariantError> {
        let Some(actor) = self.state.entities.actor_mut(id) else {
            return Ok(());
        };
        let Some(fighter) = actor.fighter.as_mut() else {
            return Ok(());
        };
        if fighter.conditions.is_empty() {
            return Ok(());
        }

        let rng = env.rng()?;
        let seed = compute_seed(self.state.game_seed, self.state.clock, id.0, 1);
        let damage = fighter.conditions.tick_all(rng, seed);
        fighter.conditions.sweep_expired();

        if damage > 0 {
            combat::apply_damage(self.state, id, damage as i32, log)?;
        }
        Ok(())
    }
}
