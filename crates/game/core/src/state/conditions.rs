//! Timed status conditions and the two-phase tick/sweep table.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::env::RngOracle;

/// Immutable description of a condition, shared between prototypes and
/// live instances.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionSpec {
    /// Display name; conditions are keyed by name, so an actor can carry at
    /// most one instance of a given name at a time.
    pub name: String,
    /// `None` means permanent: the payload procs every tick but the
    /// condition never expires on its own.
    pub duration: Option<u32>,
    pub kind: ConditionKind,
}

impl ConditionSpec {
    pub fn poison(name: impl Into<String>, duration: u32, magnitude: u32) -> Self {
        Self {
            name: name.into(),
            duration: Some(duration),
            kind: ConditionKind::Poison { magnitude },
        }
    }
}

/// Per-tick payload of a condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConditionKind {
    /// Damage over time; each proc rolls uniformly in `1..=magnitude`.
    Poison { magnitude: u32 },
}

/// Live instance of a condition on a fighter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Condition {
    pub spec: ConditionSpec,
    /// Remaining ticks; mirrors `spec.duration` at attach time.
    pub remaining: Option<u32>,
}

impl Condition {
    pub fn new(spec: ConditionSpec) -> Self {
        let remaining = spec.duration;
        Self { spec, remaining }
    }

    /// Applies the payload and burns one tick of duration. Returns the
    /// damage dealt this tick.
    pub fn proc(&mut self, rng: &dyn RngOracle, seed: u64) -> u32 {
        let damage = match self.spec.kind {
            ConditionKind::Poison { magnitude } => {
                if magnitude == 0 {
                    0
                } else {
                    rng.range(seed, 1, magnitude)
                }
            }
        };
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }
        damage
    }

    pub fn expired(&self) -> bool {
        matches!(self.remaining, Some(0))
    }
}

/// One entry in a fighter's condition table.
///
/// Ticking never removes in place: an expired condition is first demoted to
/// an `Expired` marker, and a separate sweep pass drops the markers. Code
/// that inspects the table mid-tick therefore never sees entries shift
/// under it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConditionSlot {
    Active(Condition),
    Expired { name: String },
}

impl ConditionSlot {
    pub fn name(&self) -> &str {
        match self {
            ConditionSlot::Active(condition) => &condition.spec.name,
            ConditionSlot::Expired { name } => name,
        }
    }
}

/// Bounded, name-keyed table of conditions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionTable {
    slots: ArrayVec<ConditionSlot, { GameConfig::MAX_CONDITIONS }>,
}

impl ConditionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.is_full()
    }

    /// True if a condition with this name is present, expired markers
    /// included.
    pub fn has(&self, name: &str) -> bool {
        self.slots.iter().any(|slot| slot.name() == name)
    }

    pub fn get(&self, name: &str) -> Option<&Condition> {
        self.slots.iter().find_map(|slot| match slot {
            ConditionSlot::Active(condition) if condition.spec.name == name => Some(condition),
            _ => None,
        })
    }

    /// Attaches a fresh instance. Refuses (returning `false`) when a
    /// condition of the same name is already present or the table is full;
    /// an existing instance is never renewed implicitly, use
    /// [`ConditionTable::extend`] for that.
    pub fn afflict(&mut self, spec: ConditionSpec) -> bool {
        if self.has(&spec.name) || self.is_full() {
            return false;
        }
        self.slots.push(ConditionSlot::Active(Condition::new(spec)));
        true
    }

    /// Extends an active condition by `extra_turns` and raises its payload
    /// magnitude by `extra_magnitude`. Returns `false` when no active
    /// condition of that name exists.
    pub fn extend(&mut self, name: &str, extra_turns: u32, extra_magnitude: u32) -> bool {
        for slot in self.slots.iter_mut() {
            if let ConditionSlot::Active(condition) = slot
                && condition.spec.name == name
            {
                if let Some(remaining) = condition.remaining.as_mut() {
                    *remaining += extra_turns;
                }
                if let Some(duration) = condition.spec.duration.as_mut() {
                    *duration += extra_turns;
                }
                match &mut condition.spec.kind {
                    ConditionKind::Poison { magnitude } => *magnitude += extra_magnitude,
                }
                return true;
            }
        }
        false
    }

    /// Phase one of a tick: proc every active condition and demote the ones
    /// that just ran out to expired markers. Returns the total damage dealt.
    pub fn tick_all(&mut self, rng: &dyn RngOracle, seed: u64) -> u32 {
        let mut total = 0;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if let ConditionSlot::Active(condition) = slot {
                total += condition.proc(rng, seed.wrapping_add(index as u64));
                if condition.expired() {
                    let name = condition.spec.name.clone();
                    *slot = ConditionSlot::Expired { name };
                }
            }
        }
        total
    }

    /// Phase two of a tick: drop expired markers.
    pub fn sweep_expired(&mut self) {
        self.slots
            .retain(|slot| matches!(slot, ConditionSlot::Active(_)));
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConditionSlot> {
        self.slots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    fn poison(duration: u32) -> ConditionSpec {
        ConditionSpec::poison("Mamba Madness", duration, 3)
    }

    #[test]
    fn afflict_blocks_duplicates_by_name() {
        let mut table = ConditionTable::new();
        assert!(table.afflict(poison(3)));
        assert!(!table.afflict(poison(5)));
        assert_eq!(table.get("Mamba Madness").unwrap().remaining, Some(3));
    }

    #[test]
    fn tick_demotes_then_sweep_removes() {
        let rng = PcgRng;
        let mut table = ConditionTable::new();
        table.afflict(poison(2));

        let first = table.tick_all(&rng, 7);
        assert!((1..=3).contains(&first));
        assert!(table.has("Mamba Madness"));

        let second = table.tick_all(&rng, 8);
        assert!((1..=3).contains(&second));
        // Expired but still present as a marker until the sweep.
        assert!(table.has("Mamba Madness"));
        assert!(table.get("Mamba Madness").is_none());

        table.sweep_expired();
        assert!(!table.has("Mamba Madness"));
    }

    #[test]
    fn extend_renews_active_condition() {
        let mut table = ConditionTable::new();
        table.afflict(poison(1));
        assert!(table.extend("Mamba Madness", 2, 1));
        let condition = table.get("Mamba Madness").unwrap();
        assert_eq!(condition.remaining, Some(3));
        assert_eq!(condition.spec.kind, ConditionKind::Poison { magnitude: 4 });
        assert!(!table.extend("Sleep", 1, 0));
    }

    #[test]
    fn permanent_condition_survives_ticks() {
        let rng = PcgRng;
        let mut table = ConditionTable::new();
        table.afflict(ConditionSpec {
            name: "Cursed".into(),
            duration: None,
            kind: ConditionKind::Poison { magnitude: 1 },
        });
        for tick in 0..10 {
            table.tick_all(&rng, tick);
            table.sweep_expired();
        }
        assert!(table.has("Cursed"));
    }
}
