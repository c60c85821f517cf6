//! NPC decision making.
//!
//! A [`Brain`] is plain data: a tagged enum the engine asks once per tick
//! for a [`Decision`]. Brains never mutate the actor that owns them; a
//! behavior change (confusion wearing off) is returned as
//! [`Decision::Become`] and installed by the engine. That keeps ownership
//! one-way: actors own brains, brains only hold ids and path caches.

mod combatant;
mod confused;
mod miner;
mod spawners;

use crate::action::Action;
use crate::env::{CostGrid, GameEnv};
use crate::error::InvariantError;
use crate::log::MessageLog;
use crate::state::{ActorState, EntityId, GameState, Position};

/// What an actor does with its turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Execute this action now.
    Act(Action),
    /// Replace the brain and do nothing else this tick.
    Become(Box<Brain>),
}

/// Decision maker attached to a living actor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Brain {
    /// Chases the closest hostile and melees when adjacent.
    Combatant { path: Vec<Position> },
    /// Mines the closest deposit, hauls to a friendly spawner when full.
    Miner { path: Vec<Position> },
    /// Stumbles in random directions, then restores the wrapped brain.
    Confused {
        previous: Box<Brain>,
        turns_remaining: u32,
    },
    /// Structure brain: produces a mob every N ticks.
    TimerSpawner,
    /// Structure brain: produces a mob whenever the bank covers the cost.
    EcoSpawner,
}

impl Brain {
    pub fn combatant() -> Self {
        Brain::Combatant { path: Vec::new() }
    }

    pub fn miner() -> Self {
        Brain::Miner { path: Vec::new() }
    }

    pub fn confused(previous: Brain, turns: u32) -> Self {
        Brain::Confused {
            previous: Box::new(previous),
            turns_remaining: turns,
        }
    }

    pub fn timer_spawner() -> Self {
        Brain::TimerSpawner
    }

    pub fn eco_spawner() -> Self {
        Brain::EcoSpawner
    }

    /// Decides the actor's turn.
    ///
    /// `state` is mutable because spawner brains tick their own economy
    /// while deciding; the engine holds the brain outside the actor for
    /// the duration of the call.
    pub fn decide(
        &mut self,
        actor: EntityId,
        state: &mut GameState,
        env: &GameEnv<'_>,
        log: &mut MessageLog,
    ) -> Result<Decision, InvariantError> {
        match self {
            Brain::Combatant { path } => combatant::decide(path, actor, state, env),
            Brain::Miner { path } => miner::decide(path, actor, state, env),
            Brain::Confused {
                previous,
                turns_remaining,
            } => confused::decide(previous, turns_remaining, actor, state, env, log),
            Brain::TimerSpawner => spawners::decide_timer(actor, state),
            Brain::EcoSpawner => spawners::decide_eco(actor, state),
        }
    }
}

/// Movement weights for pathfinding: 1 per walkable tile, with a surcharge
/// on tiles held by blocking entities so routes prefer going around.
pub fn movement_cost(state: &GameState, env: &GameEnv<'_>) -> Result<CostGrid, InvariantError> {
    let map = env.map()?;
    let dimensions = map.dimensions();
    let mut grid = CostGrid::new(dimensions.width, dimensions.height);
    for y in 0..dimensions.height as i32 {
        for x in 0..dimensions.width as i32 {
            let position = Position::new(x, y);
            if map.walkable(position) {
                grid.set(position, 1);
            }
        }
    }
    for entity in state.entities.iter() {
        if entity.blocks_movement() {
            grid.surcharge(entity.position(), CostGrid::OCCUPIED_SURCHARGE);
        }
    }
    Ok(grid)
}

/// Walks toward `target`, refreshing the cached path only while the actor
/// stands in the player's field of vision. Returns the adjacency action
/// when already next to the target, a step along the (possibly stale)
/// path, or `None` when there is nothing useful to do.
fn seek(
    path: &mut Vec<Position>,
    actor: EntityId,
    origin: Position,
    target: Position,
    state: &GameState,
    env: &GameEnv<'_>,
    adjacent: impl FnOnce(i32, i32) -> Action,
) -> Result<Option<Action>, InvariantError> {
    if env.vision()?.visible(origin) {
        if origin.chebyshev_distance(target) <= 1 {
            let (dx, dy) = origin.delta_to(target);
            return Ok(Some(adjacent(dx, dy)));
        }
        let cost = movement_cost(state, env)?;
        *path = env.paths()?.path(origin, target, &cost);
    }

    if path.is_empty() {
        return Ok(None);
    }
    let next = path.remove(0);
    let (dx, dy) = origin.delta_to(next);
    Ok(Some(Action::Move(crate::action::MoveAction::new(
        actor, dx, dy,
    ))))
}

/// Closest living actor hostile to `from`, ties broken by lowest id. A
/// ghost player is invisible to everyone.
fn closest_hostile<'a>(state: &'a GameState, from: &ActorState) -> Option<&'a ActorState> {
    state
        .entities
        .alive_actors()
        .filter(|candidate| candidate.id != from.id)
        .filter(|candidate| candidate.faction.is_hostile_to(from.faction))
        .filter(|candidate| !(state.player_is_ghost && candidate.id == EntityId::PLAYER))
        .min_by_key(|candidate| from.position.distance_squared(candidate.position))
}
