//! Combat statistics for actors that can deal and take damage.

use crate::state::conditions::{ConditionSpec, ConditionTable};

/// Combat block of an actor.
///
/// HP is private so every write goes through the clamp: it can never drop
/// below zero or rise above `max_hp`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    pub max_hp: i32,
    hp: i32,
    pub base_power: i32,
    pub base_armor: i32,
    pub base_dodge: i32,
    pub base_accuracy: i32,
    /// Condition attached to melee victims when no equipped weapon carries
    /// its own effect (e.g. a snake's venom).
    pub attack_effect: Option<ConditionSpec>,
    pub conditions: ConditionTable,
}

impl Fighter {
    pub fn new(max_hp: i32, base_power: i32, base_armor: i32) -> Self {
        Self {
            max_hp,
            hp: max_hp,
            base_power,
            base_armor,
            base_dodge: 0,
            base_accuracy: 0,
            attack_effect: None,
            conditions: ConditionTable::new(),
        }
    }

    pub fn with_attack_effect(mut self, effect: ConditionSpec) -> Self {
        self.attack_effect = Some(effect);
        self
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    /// Sets HP, clamped into `0..=max_hp`.
    pub fn set_hp(&mut self, value: i32) {
        self.hp = value.clamp(0, self.max_hp);
    }

    /// Lowers HP by `amount`, clamped at zero. Death is not decided here;
    /// the combat layer owns the one-shot death transition.
    pub fn take_damage(&mut self, amount: i32) {
        self.set_hp(self.hp - amount);
    }

    /// Restores HP and returns the amount actually recovered (zero at full
    /// health).
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.set_hp(self.hp + amount);
        self.hp - before
    }

    pub fn is_dead(&self) -> bool {
        self.hp == 0
    }
}
