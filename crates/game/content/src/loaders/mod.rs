//! Content loaders for reading game data from files.
//!
//! Content packs are RON; generation settings are TOML. Both deserialize
//! straight into `game-core` types.

pub mod config;
pub mod content;
pub mod factory;

pub use config::{ConfigLoader, GenerationSettings};
pub use content::ContentLoader;
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
