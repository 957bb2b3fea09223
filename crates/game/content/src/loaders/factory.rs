//! Content factory for loading everything from a data directory.

use std::path::{Path, PathBuf};

use crate::ContentPack;
use crate::loaders::{ConfigLoader, ContentLoader, GenerationSettings, LoadResult};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── content.ron
/// └── generation.toml
/// ```
///
/// Either file may be absent, in which case the built-in catalog or the
/// default settings are used.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONTENT_FILE: &'static str = "content.ron";
    pub const SETTINGS_FILE: &'static str = "generation.toml";

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the content pack from `content.ron`, or the standard pack.
    pub fn load_content(&self) -> LoadResult<ContentPack> {
        let path = self.data_dir.join(Self::CONTENT_FILE);
        if !path.exists() {
            return Ok(ContentPack::standard());
        }
        ContentLoader::load(&path)
    }

    /// Load settings from `generation.toml`, or the defaults.
    pub fn load_settings(&self) -> LoadResult<GenerationSettings> {
        let path = self.data_dir.join(Self::SETTINGS_FILE);
        if !path.exists() {
            return Ok(GenerationSettings::default());
        }
        ConfigLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_directory_falls_back_to_builtins() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_content().unwrap(), ContentPack::standard());
        assert_eq!(
            factory.load_settings().unwrap(),
            GenerationSettings::default()
        );
    }

    #[test]
    fn files_in_directory_take_precedence() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(ContentFactory::SETTINGS_FILE),
            "[game]\nfov_radius = 3\nfloor_size_increment = 10\nlevel_up_hp = 20\nlevel_up_power = 1\nlevel_up_defense = 1\n",
        )
        .unwrap();
        let mut pack = ContentPack::standard();
        pack.tables.item_spawns = game_core::SpawnTable::new();
        std::fs::write(
            dir.path().join(ContentFactory::CONTENT_FILE),
            ContentLoader::to_ron(&pack).unwrap(),
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_settings().unwrap().game.fov_radius, 3);
        assert_eq!(factory.load_content().unwrap(), pack);
    }
}
