//! Error types raised by repository implementations.

use game_core::StateError;
use thiserror::Error;

/// Errors surfaced by repository implementations.
///
/// A missing save is not an error: repositories report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("state repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),

    #[error("save format version {found} is not supported (expected {expected})")]
    IncompatibleVersion { found: u16, expected: u16 },

    #[error("saved state is inconsistent: {0}")]
    InvalidState(#[from] StateError),
}

impl RepositoryError {
    /// True when the stored bytes exist but cannot become a live state.
    pub fn is_corrupt(&self) -> bool {
        matches!(
            self,
            Self::Serialization(_)
                | Self::CorruptedData(_)
                | Self::IncompatibleVersion { .. }
                | Self::InvalidState(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
