//! Clamped damage application and the one-shot death transition.

use crate::error::InvariantError;
use crate::log::{MessageColor, MessageLog};
use crate::state::{Entity, EntityId, GameState, GroundItem, RenderOrder};

/// Lowers the target's HP by `amount` (clamped at zero) and runs the death
/// transition when the target just ran out of health.
///
/// Death fires at most once: a corpse has no brain, and the transition
/// only triggers for actors that were still alive on entry. Ticking
/// conditions on a corpse can therefore never kill it twice.
pub fn apply_damage(
    state: &mut GameState,
    target: EntityId,
    amount: i32,
    log: &mut MessageLog,
) -> Result<(), InvariantError> {
    let actor = state.entities.expect_actor_mut(target)?;
    let was_alive = actor.is_alive();
    let fighter = actor.fighter_mut()?;
    fighter.take_damage(amount);
    let dead = fighter.is_dead();

    if dead && was_alive {
        kill(state, target, log)?;
    }
    Ok(())
}

/// Turns a living actor into a corpse.
///
/// The corpse keeps its fighter block (and whatever conditions it carried)
/// but loses its brain, stops blocking movement, and sinks below items in
/// draw order. Carried items spill onto the actor's tile.
pub fn kill(
    state: &mut GameState,
    target: EntityId,
    log: &mut MessageLog,
) -> Result<(), InvariantError> {
    let (position, spilled) = {
        let actor = state.entities.expect_actor_mut(target)?;
        if !actor.is_alive() {
            return Ok(());
        }

        if target.is_player() {
            log.add_message("You died!", MessageColor::PlayerDie);
        } else {
            log.add_message(
                format!("{} is dead!", capitalize(&actor.name)),
                MessageColor::EnemyDie,
            );
        }

        actor.name = format!("remains of {}", actor.name);
        actor.glyph = '%';
        actor.color = (191, 0, 0);
        actor.blocks_movement = false;
        actor.render_order = RenderOrder::Corpse;
        actor.brain = None;

        let spilled = actor
            .inventory
            .as_mut()
            .map(|inventory| inventory.take_all())
            .unwrap_or_default();
        (actor.position, spilled)
    };

    state.score += 100;
    for item in spilled {
        state.entities.insert(Entity::Item(GroundItem { position, item }));
    }
    Ok(())
}

/// First letter uppercased, for message leads.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
