//! Pathfinding oracle and the movement-cost grid fed to it.

use crate::state::Position;

/// Per-tile movement weights handed to the path oracle.
///
/// Weight 0 marks an impassable tile. Occupied tiles stay passable but
/// carry a surcharge so routes flow around crowds instead of queueing
/// behind them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostGrid {
    width: u32,
    height: u32,
    weights: Vec<u32>,
}

impl CostGrid {
    /// Surcharge added to a tile occupied by a blocking entity.
    pub const OCCUPIED_SURCHARGE: u32 = 10;

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            weights: vec![0; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, position: Position) -> Option<usize> {
        if position.x < 0
            || position.y < 0
            || position.x >= self.width as i32
            || position.y >= self.height as i32
        {
            return None;
        }
        Some((position.y as usize) * (self.width as usize) + (position.x as usize))
    }

    pub fn get(&self, position: Position) -> u32 {
        self.index(position)
            .map(|index| self.weights[index])
            .unwrap_or(0)
    }

    pub fn set(&mut self, position: Position, weight: u32) {
        if let Some(index) = self.index(position) {
            self.weights[index] = weight;
        }
    }

    /// Adds `amount` to the weight of a passable tile.
    pub fn surcharge(&mut self, position: Position, amount: u32) {
        if let Some(index) = self.index(position)
            && self.weights[index] > 0
        {
            self.weights[index] += amount;
        }
    }

    pub fn is_blocked(&self, position: Position) -> bool {
        self.get(position) == 0
    }
}

/// Pathfinding oracle.
///
/// Returns the waypoints from `from` to `to` under the given cost grid,
/// excluding the starting tile and including the destination. An empty
/// vector means no route exists.
pub trait PathOracle: Send + Sync {
    fn path(&self, from: Position, to: Position, cost: &CostGrid) -> Vec<Position>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surcharge_leaves_walls_blocked() {
        let mut grid = CostGrid::new(3, 3);
        grid.set(Position::new(1, 1), 1);
        grid.surcharge(Position::new(1, 1), CostGrid::OCCUPIED_SURCHARGE);
        grid.surcharge(Position::new(0, 0), CostGrid::OCCUPIED_SURCHARGE);

        assert_eq!(grid.get(Position::new(1, 1)), 11);
        assert!(grid.is_blocked(Position::new(0, 0)));
        assert!(grid.is_blocked(Position::new(-1, 2)));
    }
}
