//! Mob-spawner component and its two economies.

use crate::state::templates::ActorTemplate;

/// What drives a spawner's output.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpawnerMode {
    /// Spawns every `delay` ticks.
    Timer { delay: u32, timer: u32 },
    /// Spawns whenever the bank covers the cost; fed by deposits.
    Eco { spawn_cost: u32, bank: u32 },
}

/// Component on structure actors that periodically produces mobs on their
/// own tile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spawner {
    /// Prototype of the mob this spawner produces.
    pub mob: Box<ActorTemplate>,
    pub mode: SpawnerMode,
}

impl Spawner {
    pub fn timer(mob: ActorTemplate, delay: u32) -> Self {
        Self {
            mob: Box::new(mob),
            mode: SpawnerMode::Timer { delay, timer: delay },
        }
    }

    pub fn eco(mob: ActorTemplate, spawn_cost: u32) -> Self {
        Self {
            mob: Box::new(mob),
            mode: SpawnerMode::Eco {
                spawn_cost,
                bank: 0,
            },
        }
    }

    /// Credits deposited resources. Timer spawners have no bank and ignore
    /// the deposit.
    pub fn deposit(&mut self, amount: u32) {
        if let SpawnerMode::Eco { bank, .. } = &mut self.mode {
            *bank += amount;
        }
    }

    /// Burns one tick of the timer. Returns `true` when the spawner is due
    /// to produce this tick; the timer resets regardless of whether the
    /// spawn attempt then succeeds.
    pub fn tick_timer(&mut self) -> bool {
        match &mut self.mode {
            SpawnerMode::Timer { delay, timer } => {
                *timer = timer.saturating_sub(1);
                if *timer == 0 {
                    *timer = *delay;
                    true
                } else {
                    false
                }
            }
            SpawnerMode::Eco { .. } => false,
        }
    }

    /// Pays for one spawn from the bank. Returns `true` when the cost was
    /// covered and deducted; the bank never goes negative.
    pub fn try_pay_spawn(&mut self) -> bool {
        match &mut self.mode {
            SpawnerMode::Eco { spawn_cost, bank } => {
                if *bank >= *spawn_cost {
                    *bank -= *spawn_cost;
                    true
                } else {
                    false
                }
            }
            SpawnerMode::Timer { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::templates::ActorTemplate;

    fn mob() -> ActorTemplate {
        ActorTemplate::builder("Virus").glyph('v').build()
    }

    #[test]
    fn timer_fires_and_resets() {
        let mut spawner = Spawner::timer(mob(), 3);
        assert!(!spawner.tick_timer());
        assert!(!spawner.tick_timer());
        assert!(spawner.tick_timer());
        assert_eq!(
            spawner.mode,
            SpawnerMode::Timer { delay: 3, timer: 3 }
        );
    }

    #[test]
    fn eco_bank_never_goes_negative() {
        let mut spawner = Spawner::eco(mob(), 5);
        assert!(!spawner.try_pay_spawn());
        spawner.deposit(7);
        assert!(spawner.try_pay_spawn());
        assert_eq!(
            spawner.mode,
            SpawnerMode::Eco {
                spawn_cost: 5,
                bank: 2
            }
        );
        assert!(!spawner.try_pay_spawn());
    }

    #[test]
    fn deposit_into_timer_is_ignored() {
        let mut spawner = Spawner::timer(mob(), 2);
        spawner.deposit(10);
        assert_eq!(
            spawner.mode,
            SpawnerMode::Timer { delay: 2, timer: 2 }
        );
    }
}
