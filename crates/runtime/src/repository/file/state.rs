//! File-based StateRepository implementation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use game_core::GameState;
use tracing::{debug, info, warn};

use crate::repository::{RepositoryError, Result, SaveCodec, StateRepository};

/// File-based implementation of StateRepository.
///
/// The save is a single file under `base_dir`, written through a sibling
/// temp file and an atomic rename.
pub struct FileStateRepository {
    path: PathBuf,
}

impl FileStateRepository {
    pub const DEFAULT_FILE_NAME: &'static str = "savegame.sav";

    /// Create a repository storing `savegame.sav` in `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        Self::with_file_name(base_dir, Self::DEFAULT_FILE_NAME)
    }

    pub fn with_file_name(base_dir: impl AsRef<Path>, file_name: &str) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir).map_err(RepositoryError::Io)?;
        Ok(Self {
            path: base_dir.join(file_name),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("sav.tmp")
    }
}

impl StateRepository for FileStateRepository {
    fn save(&self, state: &GameState) -> Result<()> {
        let bytes = SaveCodec::encode(state)?;
        let temp_path = self.temp_path();

        fs::write(&temp_path, &bytes).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        info!(
            path = %self.path.display(),
            bytes = bytes.len(),
            floor = state.current_floor(),
            "saved game"
        );
        Ok(())
    }

    fn load(&self) -> Result<Option<GameState>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved game");
                return Ok(None);
            }
            Err(error) => return Err(RepositoryError::Io(error)),
        };

        let state = SaveCodec::decode(&bytes).inspect_err(|error| {
            warn!(path = %self.path.display(), %error, "rejected saved game");
        })?;
        info!(
            path = %self.path.display(),
            floor = state.current_floor(),
            "loaded game"
        );
        Ok(Some(state))
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn delete(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "deleted saved game");
                Ok(())
            }
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(RepositoryError::Io(error)),
        }
    }
}
