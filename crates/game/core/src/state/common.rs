//! Common value types shared across the state model.

use core::fmt;

/// Unique identifier for an entity in the arena.
///
/// Ids are allocated monotonically and never reused within a run; an item
/// keeps its id while it sits inside an inventory, so equipment slots can
/// reference it stably.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    /// The player always occupies id 0.
    pub const PLAYER: EntityId = EntityId(0);

    pub fn is_player(&self) -> bool {
        *self == Self::PLAYER
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for EntityId {
    fn from(value: u32) -> Self {
        EntityId(value)
    }
}

/// Position on the game map (signed so deltas compose without casts).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by a delta.
    pub fn offset(&self, dx: i32, dy: i32) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }

    /// Delta `(dx, dy)` that moves `self` onto `other`.
    pub fn delta_to(&self, other: Position) -> (i32, i32) {
        (other.x - self.x, other.y - self.y)
    }

    /// Chebyshev distance; adjacency (including diagonals) is `<= 1`.
    pub fn chebyshev_distance(&self, other: Position) -> u32 {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();
        dx.max(dy)
    }

    /// Squared Euclidean distance. Range checks compare against a squared
    /// radius so no floating point enters the resolution path.
    pub fn distance_squared(&self, other: Position) -> i64 {
        let dx = i64::from(self.x - other.x);
        let dy = i64::from(self.y - other.y);
        dx * dx + dy * dy
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// RGB color attached to glyphs and log messages.
pub type Rgb = (u8, u8, u8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chebyshev_counts_diagonals_as_one() {
        let a = Position::new(3, 3);
        assert_eq!(a.chebyshev_distance(Position::new(4, 4)), 1);
        assert_eq!(a.chebyshev_distance(Position::new(3, 5)), 2);
        assert_eq!(a.chebyshev_distance(a), 0);
    }

    #[test]
    fn squared_distance_matches_euclidean_ordering() {
        let a = Position::new(0, 0);
        assert!(a.distance_squared(Position::new(3, 4)) == 25);
        assert!(a.distance_squared(Position::new(1, 1)) < a.distance_squared(Position::new(2, 0)));
    }
}
