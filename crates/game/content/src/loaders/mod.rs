//! Content loaders for reading game data from files.
//!
//! Two formats, following the rest of the workspace: RON for catalogs
//! (prototypes), TOML for flat configuration. Loaders deserialize straight
//! into `mamba-core` types with serde.

pub mod config;
pub mod prototypes;

pub use config::ConfigLoader;
pub use prototypes::PrototypeLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
