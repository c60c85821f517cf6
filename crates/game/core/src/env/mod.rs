//! Traits describing read-only world data.
//!
//! Oracles expose the static floor layout, the player's field of vision,
//! pathfinding, and deterministic randomness. The [`GameEnv`] aggregate
//! bundles them so the action layer can reach everything it needs without
//! hard coupling to concrete implementations.
mod error;
mod hooks;
mod map;
mod path;
mod rng;
mod vision;

pub use error::OracleError;
pub use hooks::{NoopHooks, TurnHooks};
pub use map::{MapDimensions, MapOracle};
pub use path::{CostGrid, PathOracle};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use vision::VisionOracle;

/// Aggregates the read-only oracles required by the action pipeline and AI.
///
/// Every field is optional so partial environments (unit tests, headless
/// tools) stay cheap to build; accessors turn an absent oracle into an
/// [`OracleError`] at the point of use.
#[derive(Clone, Copy, Default)]
pub struct GameEnv<'a> {
    map: Option<&'a dyn MapOracle>,
    vision: Option<&'a dyn VisionOracle>,
    paths: Option<&'a dyn PathOracle>,
    rng: Option<&'a dyn RngOracle>,
}

impl<'a> GameEnv<'a> {
    pub fn new(
        map: Option<&'a dyn MapOracle>,
        vision: Option<&'a dyn VisionOracle>,
        paths: Option<&'a dyn PathOracle>,
        rng: Option<&'a dyn RngOracle>,
    ) -> Self {
        Self {
            map,
            vision,
            paths,
            rng,
        }
    }

    pub fn with_all(
        map: &'a dyn MapOracle,
        vision: &'a dyn VisionOracle,
        paths: &'a dyn PathOracle,
        rng: &'a dyn RngOracle,
    ) -> Self {
        Self::new(Some(map), Some(vision), Some(paths), Some(rng))
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_map(mut self, map: &'a dyn MapOracle) -> Self {
        self.map = Some(map);
        self
    }

    pub fn with_vision(mut self, vision: &'a dyn VisionOracle) -> Self {
        self.vision = Some(vision);
        self
    }

    pub fn with_paths(mut self, paths: &'a dyn PathOracle) -> Self {
        self.paths = Some(paths);
        self
    }

    pub fn with_rng(mut self, rng: &'a dyn RngOracle) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn map(&self) -> Result<&'a dyn MapOracle, OracleError> {
        self.map.ok_or(OracleError::MapNotAvailable)
    }

    pub fn vision(&self) -> Result<&'a dyn VisionOracle, OracleError> {
        self.vision.ok_or(OracleError::VisionNotAvailable)
    }

    pub fn paths(&self) -> Result<&'a dyn PathOracle, OracleError> {
        self.paths.ok_or(OracleError::PathsNotAvailable)
    }

    pub fn rng(&self) -> Result<&'a dyn RngOracle, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}
