//! Callbacks into the frontend for effects the core cannot resolve itself.

use crate::state::{GameState, Position};

/// Mutable frontend services invoked during a tick.
///
/// Unlike the read-only oracles these are allowed to rebuild world data:
/// descending the stairs replaces the floor, and every tick ends with an
/// FOV refresh around the player.
pub trait TurnHooks {
    /// Recomputes the player's field of view. Radius 0 means "reveal all"
    /// (FOV disabled).
    fn refresh_fov(&mut self, origin: Position, radius: u32);

    /// Tears down the current floor and populates `state` with the next
    /// one. Invoked by the take-stairs action.
    fn regenerate_floor(&mut self, state: &mut GameState);
}

/// Hooks that do nothing; used by tests and headless tools.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHooks;

impl TurnHooks for NoopHooks {
    fn refresh_fov(&mut self, _origin: Position, _radius: u32) {}

    fn regenerate_floor(&mut self, _state: &mut GameState) {}
}
