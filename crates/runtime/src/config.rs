//! Runtime configuration shared by the session and the persistence layer.

use std::path::PathBuf;

use directories::ProjectDirs;
use game_content::GenerationSettings;
use game_core::{GameConfig, GenerationParams};

use crate::repository::{FileStateRepository, Result};

/// Built once at startup and passed by reference; nothing reads it globally.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    pub generation: GenerationParams,
    /// Directory holding the save file.
    pub save_dir: PathBuf,
    pub save_file: String,
    /// Fixed seed for new games; a random one is drawn when unset.
    pub seed: Option<u64>,
}

impl RuntimeConfig {
    pub const APPLICATION: &'static str = "dungeon";

    /// Per-user data directory, or the working directory when the platform
    /// has no notion of one.
    pub fn default_save_dir() -> PathBuf {
        ProjectDirs::from("", "", Self::APPLICATION)
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Replaces the rule constants and generation parameters.
    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.game = settings.game;
        self.generation = settings.generation;
        self
    }

    pub fn save_path(&self) -> PathBuf {
        self.save_dir.join(&self.save_file)
    }

    /// Seed for the next new game.
    pub fn next_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Opens the file repository this configuration points at.
    pub fn open_repository(&self) -> Result<FileStateRepository> {
        FileStateRepository::with_file_name(&self.save_dir, &self.save_file)
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            generation: GenerationParams::default(),
            save_dir: Self::default_save_dir(),
            save_file: FileStateRepository::DEFAULT_FILE_NAME.to_owned(),
            seed: None,
        }
    }
}
