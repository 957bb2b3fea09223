//! Unified error type surfaced by the runtime API.
//!
//! Wraps failures from content, generation, the engine and repositories so
//! clients can bubble them up with consistent context.
use thiserror::Error;

use game_content::ContentError;
use game_core::{ExecuteError, GenerationError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("invalid content pack: {0}")]
    Content(#[from] ContentError),

    #[error("failed to generate a floor: {0}")]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Execute(#[from] ExecuteError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("a finished game cannot be saved")]
    GameFinished,
}

