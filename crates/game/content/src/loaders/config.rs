//! Generation settings loader.

use std::path::Path;

use game_core::{GameConfig, GenerationParams};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Rule constants and new-game generation parameters.
///
/// Both sections are optional in the file; missing sections take defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    pub game: GameConfig,
    pub generation: GenerationParams,
}

/// Loader for generation settings from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GenerationSettings> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parses settings and rejects generation parameters no floor can be built from.
    pub fn parse(content: &str) -> LoadResult<GenerationSettings> {
        let settings: GenerationSettings = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse settings TOML: {}", e))?;
        settings
            .generation
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid generation settings: {}", e))?;
        Ok(settings)
    }
}
