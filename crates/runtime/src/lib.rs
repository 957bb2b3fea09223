//! Runtime layer around the deterministic game core.
//!
//! This crate owns everything the core deliberately stays out of: where the
//! content comes from, where saves live on disk and how a play session is
//! started, advanced, suspended and resumed.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts [`GameSession`], the single owner of a live game
//! - [`oracle`] adapts a [`game_content::ContentPack`] to the core's oracle traits
//! - [`repository`] persists [`game_core::GameState`] as a compressed save blob
//! - [`config`] and [`control`] carry the values the outer loop passes around
pub mod config;
pub mod control;
pub mod error;
pub mod oracle;
pub mod repository;
pub mod session;

pub use config::RuntimeConfig;
pub use control::LoopControl;
pub use error::{Result, RuntimeError};
pub use oracle::{ActorOracleImpl, ItemOracleImpl, OracleManager, TablesOracleImpl};
pub use repository::{
    FileStateRepository, InMemoryStateRepo, RepositoryError, SaveCodec, StateRepository,
};
pub use session::GameSession;
