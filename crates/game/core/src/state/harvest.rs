//! Harvestable resource deposits.

use crate::state::templates::ItemTemplate;

/// Finite deposit that yields item stacks when mined.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Harvestable {
    /// Prototype cloned (with a fresh id) for every extracted portion.
    pub yield_item: ItemTemplate,
    /// Remaining units in the deposit.
    pub capacity: i32,
    /// Units removed per extraction.
    pub portion: i32,
}

impl Harvestable {
    pub fn new(yield_item: ItemTemplate, capacity: i32, portion: i32) -> Self {
        Self {
            yield_item,
            capacity,
            portion,
        }
    }

    /// Removes one portion. Returns `true` when the deposit is now empty
    /// and its entity should be removed from the map.
    pub fn extract(&mut self) -> bool {
        self.capacity -= self.portion;
        self.capacity <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::templates::ItemTemplate;

    #[test]
    fn extract_depletes_at_zero() {
        let mut deposit = Harvestable::new(ItemTemplate::plain("Crystal", '*', (0, 255, 255)), 3, 1);
        assert!(!deposit.extract());
        assert!(!deposit.extract());
        assert!(deposit.extract());
    }
}
