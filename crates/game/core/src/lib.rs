//! Deterministic turn-resolution core.
//!
//! `mamba-core` defines the canonical rules (actions, brains, conditions,
//! combat, the turn engine) and exposes pure APIs reusable by frontends
//! and offline tools. All state mutation flows through actions driven by
//! [`engine::TurnEngine`]; map generation, FOV, pathfinding, and rendering
//! stay behind the oracle traits in [`env`].
pub mod action;
pub mod ai;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod log;
pub mod state;

pub use action::{
    Action, ActionError, ActionTransition, BumpAction, DepositAction, DropAction, EquipAction,
    MeleeAction, MineAction, MoveAction, PickupAction, RangedAction, Rejection, TakeStairsAction,
    UseItemAction, WaitAction,
};
pub use ai::{Brain, Decision};
pub use config::GameConfig;
pub use engine::TurnEngine;
pub use env::{
    CostGrid, GameEnv, MapDimensions, MapOracle, NoopHooks, OracleError, PathOracle, PcgRng,
    RngOracle, TurnHooks, VisionOracle, compute_seed,
};
pub use error::InvariantError;
pub use log::{Message, MessageColor, MessageLog};
pub use state::{
    ActorState, ActorTemplate, ConditionKind, ConditionSpec, ConditionTable, Consumable, Entities,
    Entity, EntityId, EquipSlot, Equipment, Equippable, Faction, Fighter, GameState, GroundItem,
    Harvestable, Inventory, ItemState, ItemTemplate, Position, Prototype, RenderOrder,
    ResourceState, ResourceTemplate, Rgb, Spawner, SpawnerMode,
};
