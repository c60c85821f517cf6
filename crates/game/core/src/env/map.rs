use crate::state::Position;

/// Static map oracle exposing immutable floor layout.
///
/// The resolution core never owns tiles; generation, FOV, and rendering
/// live with the frontend, which hands the core this read-only view.
pub trait MapOracle: Send + Sync {
    fn dimensions(&self) -> MapDimensions;

    /// True when the tile can be walked on. Out-of-bounds positions are
    /// never walkable.
    fn walkable(&self, position: Position) -> bool;

    /// Tile holding the downward staircase, if this floor has one.
    fn downstairs(&self) -> Option<Position> {
        None
    }

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }
}
