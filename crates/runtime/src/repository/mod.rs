//! Repository layer for dynamic runtime data.
//!
//! Repositories handle data that CHANGES during gameplay, which for this game
//! is a single saved [`game_core::GameState`]. Static game content (templates,
//! spawn tables) is handled by oracles, not repositories.
//!
//! Every repository stores the blob produced by [`SaveCodec`], so a state
//! read back from any backend has been checked the same way.

mod codec;
mod error;
mod file;
mod memory;
mod traits;

pub use codec::SaveCodec;
pub use error::{RepositoryError, Result};
pub use file::FileStateRepository;
pub use memory::InMemoryStateRepo;
pub use traits::StateRepository;
