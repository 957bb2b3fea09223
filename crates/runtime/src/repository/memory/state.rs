//! In-memory StateRepository implementation for tests and local runs.

use std::sync::RwLock;

use game_core::GameState;

use crate::repository::{RepositoryError, Result, SaveCodec, StateRepository};

/// In-memory implementation of StateRepository.
///
/// Keeps the encoded blob rather than the state itself, so loads go through
/// the same checks as a file on disk.
#[derive(Default)]
pub struct InMemoryStateRepo {
    blob: RwLock<Option<Vec<u8>>>,
}

impl InMemoryStateRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with raw save bytes, valid or not.
    pub fn with_blob(blob: Vec<u8>) -> Self {
        Self {
            blob: RwLock::new(Some(blob)),
        }
    }
}

impl StateRepository for InMemoryStateRepo {
    fn save(&self, state: &GameState) -> Result<()> {
        let bytes = SaveCodec::encode(state)?;
        let mut blob = self
            .blob
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *blob = Some(bytes);
        Ok(())
    }

    fn load(&self) -> Result<Option<GameState>> {
        let blob = self
            .blob
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        blob.as_deref().map(SaveCodec::decode).transpose()
    }

    fn exists(&self) -> bool {
        self.blob
            .read()
            .map(|blob| blob.is_some())
            .unwrap_or(false)
    }

    fn delete(&self) -> Result<()> {
        let mut blob = self
            .blob
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *blob = None;
        Ok(())
    }
}
