//! Combat resolution.
//!
//! Formulas are pure; [`apply_damage`] is the single write path for HP so
//! the death transition cannot be bypassed or doubled.

pub mod damage;
pub mod death;

pub use damage::{melee_damage, ranged_damage};
pub use death::{apply_damage, capitalize, kill};
