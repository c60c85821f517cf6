//! Bounded item storage carried by actors.

use crate::state::common::EntityId;
use crate::state::item::ItemState;

/// Slot-bounded inventory. Capacity counts stacks, not units: a stack of
/// ten crystals occupies one slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    pub capacity: usize,
    items: Vec<ItemState>,
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemState> {
        self.items.iter()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn item(&self, id: EntityId) -> Option<&ItemState> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn item_mut(&mut self, id: EntityId) -> Option<&mut ItemState> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Pushes a stack without a capacity check; callers gate on
    /// [`Inventory::is_full`] where the rules demand it.
    pub fn push(&mut self, item: ItemState) {
        self.items.push(item);
    }

    pub fn remove(&mut self, id: EntityId) -> Option<ItemState> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Folds as much of `incoming` as possible into already-held stacks of
    /// the same name, draining `incoming.amount` in place. Non-stackable
    /// items are left untouched.
    pub fn merge_into_stacks(&mut self, incoming: &mut ItemState) {
        if !incoming.is_stackable() {
            return;
        }
        for stack in self
            .items
            .iter_mut()
            .filter(|stack| stack.name == incoming.name)
        {
            if incoming.amount == 0 {
                break;
            }
            let moved = stack.space_left().min(incoming.amount);
            stack.amount += moved;
            incoming.amount -= moved;
        }
    }

    /// Empties the inventory, returning everything that was held.
    pub fn take_all(&mut self) -> Vec<ItemState> {
        core::mem::take(&mut self.items)
    }
}
