//! Repository trait definitions.

use game_core::GameState;

use super::Result;

/// Persists the game state across sessions.
///
/// A repository holds at most one save. Saving replaces it atomically, so a
/// failed save never leaves a half-written state behind.
pub trait StateRepository: Send + Sync {
    /// Stores the state, replacing any previous save.
    fn save(&self, state: &GameState) -> Result<()>;

    /// Loads the saved state.
    ///
    /// Returns `Ok(None)` when nothing has been saved.
    fn load(&self) -> Result<Option<GameState>>;

    fn exists(&self) -> bool;

    /// Removes the save. Deleting a missing save is not an error.
    fn delete(&self) -> Result<()>;
}
