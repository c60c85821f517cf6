//! Game content: built-in prototypes and data-file loaders.
//!
//! This crate owns everything that is data rather than rules:
//! - The [`TemplateRegistry`], an explicit name -> prototype catalog.
//! - Built-in factory definitions in [`factory`] (the shipped bestiary,
//!   gear, and spawner structures).
//! - RON/TOML loaders for overriding or extending content from files.
//!
//! Content is consumed at floor-generation time and never appears in game
//! state; spawning always goes through `Prototype::to_entity`.

pub mod factory;
pub mod registry;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use registry::TemplateRegistry;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, PrototypeLoader};
