//! Melee and ranged attacks.

use crate::action::ActionTransition;
use crate::action::error::{ActionError, Rejection};
use crate::combat;
use crate::env::{GameEnv, TurnHooks};
use crate::log::{MessageColor, MessageLog};
use crate::state::{EntityId, GameState, Position};

fn attack_color(attacker: EntityId) -> MessageColor {
    if attacker.is_player() {
        MessageColor::PlayerAttack
    } else {
        MessageColor::EnemyAttack
    }
}

/// Adjacent attack against the actor standing one step away.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeleeAction {
    pub actor: EntityId,
    pub dx: i32,
    pub dy: i32,
}

impl MeleeAction {
    pub fn new(actor: EntityId, dx: i32, dy: i32) -> Self {
        Self { actor, dx, dy }
    }
}

impl ActionTransition for MeleeAction {
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
        let attacker = state.entities.expect_actor(self.actor)?;
        let destination = attacker.position.offset(self.dx, self.dy);
        let target_id = state
            .entities
            .actor_id_at(destination)
            .ok_or(Rejection::NothingToAttack)?;
        let target = state.entities.expect_actor(target_id)?;

        let damage = combat::melee_damage(attacker, target);
        let attack_desc = format!(
            "{} attacks {}",
            combat::capitalize(&attacker.name),
            target.name
        );
        let effect = attacker.attack_effect().cloned();
        let target_name = target.name.clone();
        let color = attack_color(self.actor);

        if damage > 0 {
            log.add_message(format!("{attack_desc} for {damage} hit points."), color);
            combat::apply_damage(state, target_id, damage, log)?;

            if let Some(effect) = effect {
                let target = state.entities.expect_actor_mut(target_id)?;
                if let Some(fighter) = target.fighter.as_mut()
                    && fighter.conditions.afflict(effect.clone())
                {
                    log.add_message(
                        format!(
                            "{} is afflicted with {}!",
                            combat::capitalize(&target_name),
                            effect.name
                        ),
                        MessageColor::StatusApplied,
                    );
                }
            }
        } else {
            log.add_message(format!("{attack_desc} but does no damage."), color);
        }
        Ok(())
    }
}

/// Shot at an arbitrary tile with the equipped ranged weapon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangedAction {
    pub actor: EntityId,
    pub target: Position,
}

impl RangedAction {
    pub fn new(actor: EntityId, target: Position) -> Self {
        Self { actor, target }
    }
}

impl ActionTransition for RangedAction {
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
        let attacker = state.entities.expect_actor(self.actor)?;
        let weapon_item = attacker.ranged_weapon().ok_or(Rejection::NoRangedWeapon)?;
        let weapon = weapon_item
            .equippable
            .as_ref()
            .ok_or(Rejection::NoRangedWeapon)?;
        let range = weapon.range.ok_or(Rejection::NoRangedWeapon)?;

        let range_sq = i64::from(range) * i64::from(range);
        if attacker.position.distance_squared(self.target) > range_sq {
            return Err(Rejection::OutOfRange.into());
        }

        let target_id = state
            .entities
            .actor_id_at(self.target)
            .filter(|id| *id != self.actor)
            .ok_or(Rejection::NothingToShoot)?;
        let target = state.entities.expect_actor(target_id)?;

        let damage = combat::ranged_damage(weapon, target);
        let attack_desc = format!(
            "{} shoots {} with their {}",
            combat::capitalize(&attacker.name),
            target.name,
            weapon_item.name
        );
        let color = attack_color(self.actor);

        if damage > 0 {
            log.add_message(format!("{attack_desc} for {damage} hit points."), color);
            combat::apply_damage(state, target_id, damage, log)?;
        } else {
            log.add_message(format!("{attack_desc} but does no damage."), color);
        }
        Ok(())
    }
}
