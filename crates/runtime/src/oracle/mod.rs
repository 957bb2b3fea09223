//! Runtime wrappers around static game content oracles.
//!
//! These implementations expose `game-core` oracle traits and bundle them into
//! an [`OracleManager`] so the runtime can build [`game_core::GameEnv`] values
//! on demand. The data is immutable at runtime; dynamic state lives in
//! repositories or [`game_core::GameState`].
mod actors;
mod items;
mod tables;

use std::sync::Arc;

use game_content::{ContentError, ContentPack};
use game_core::{GameConfig, GameEnv};

pub use actors::ActorOracleImpl;
pub use items::ItemOracleImpl;
pub use tables::TablesOracleImpl;

/// Manages all oracle implementations and provides unified access.
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) actors: Arc<ActorOracleImpl>,
    pub(crate) items: Arc<ItemOracleImpl>,
    pub(crate) tables: Arc<TablesOracleImpl>,
}

impl OracleManager {
    pub fn new(
        actors: Arc<ActorOracleImpl>,
        items: Arc<ItemOracleImpl>,
        tables: Arc<TablesOracleImpl>,
    ) -> Self {
        Self {
            actors,
            items,
            tables,
        }
    }

    /// Builds every oracle from a validated content pack.
    pub fn from_pack(pack: ContentPack) -> Result<Self, ContentError> {
        pack.validate()?;
        Ok(Self::assemble(pack))
    }

    /// Oracles over the built-in catalog.
    pub fn standard() -> Self {
        Self::assemble(ContentPack::standard())
    }

    fn assemble(pack: ContentPack) -> Self {
        let ContentPack {
            actors,
            items,
            tables,
        } = pack;
        Self::new(
            Arc::new(actors.into_iter().collect()),
            Arc::new(items.into_iter().collect()),
            Arc::new(TablesOracleImpl::new(tables)),
        )
    }

    /// Converts the oracle manager into a [`GameEnv`] for game-core.
    pub fn as_game_env(&self, config: GameConfig) -> GameEnv<'_> {
        GameEnv::with_all(
            self.actors.as_ref(),
            self.items.as_ref(),
            self.tables.as_ref(),
            config,
        )
    }

    pub fn actors(&self) -> &ActorOracleImpl {
        &self.actors
    }

    pub fn items(&self) -> &ItemOracleImpl {
        &self.items
    }

    pub fn tables(&self) -> &TablesOracleImpl {
        &self.tables
    }
}
