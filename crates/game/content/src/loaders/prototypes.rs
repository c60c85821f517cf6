//! Prototype catalog loader.

use std::path::Path;

use mamba_core::Prototype;

use crate::loaders::{LoadResult, read_file};
use crate::registry::TemplateRegistry;

/// Loader for prototype catalogs from RON files.
///
/// A catalog is a RON list of [`Prototype`] values. Entries are keyed in
/// the registry by their own name, so a file entry overrides the built-in
/// prototype of the same name.
pub struct PrototypeLoader;

impl PrototypeLoader {
    /// Load a prototype catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<Prototype>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Prototype>> {
        ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse prototype catalog RON: {}", e))
    }

    /// Load a catalog and merge it into `registry`, overriding by name.
    pub fn load_into(path: &Path, registry: &mut TemplateRegistry) -> LoadResult<usize> {
        let prototypes = Self::load(path)?;
        let count = prototypes.len();
        for prototype in prototypes {
            registry.insert(prototype);
        }
        Ok(count)
    }
}
