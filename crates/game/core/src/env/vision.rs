use crate::state::Position;

/// Read-only view of the player's field of vision.
///
/// AI path recomputation keys off this: an NPC refreshes its route only
/// while it stands on a tile the player can currently see, and follows a
/// stale cached path otherwise.
pub trait VisionOracle: Send + Sync {
    fn visible(&self, position: Position) -> bool;
}
