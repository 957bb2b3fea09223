//! Traits describing read-only content.
//!
//! Oracles expose actor/item templates and generation tables. The [`Env`]
//! aggregate bundles them with the [`GameConfig`] so the engine can access
//! everything it needs without hard coupling to concrete implementations.
mod actors;
mod error;
mod items;
mod rng;
mod tables;

pub use actors::{ActorOracle, ActorTemplate, PLAYER_TEMPLATE_ID};
pub use error::OracleError;
pub use items::{ItemOracle, ItemTemplate};
pub use rng::GameRng;
pub use tables::TablesOracle;

use crate::config::GameConfig;

/// Aggregates read-only oracles required by the engine and generator.
pub struct Env<'a, A, I, T>
where
    A: ActorOracle + ?Sized,
    I: ItemOracle + ?Sized,
    T: TablesOracle + ?Sized,
{
    actors: Option<&'a A>,
    items: Option<&'a I>,
    tables: Option<&'a T>,
    config: GameConfig,
}

impl<A, I, T> Clone for Env<'_, A, I, T>
where
    A: ActorOracle + ?Sized,
    I: ItemOracle + ?Sized,
    T: TablesOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, I, T> Copy for Env<'_, A, I, T>
where
    A: ActorOracle + ?Sized,
    I: ItemOracle + ?Sized,
    T: TablesOracle + ?Sized,
{
}

pub type GameEnv<'a> =
    Env<'a, dyn ActorOracle + 'a, dyn ItemOracle + 'a, dyn TablesOracle + 'a>;

impl<'a, A, I, T> Env<'a, A, I, T>
where
    A: ActorOracle + ?Sized,
    I: ItemOracle + ?Sized,
    T: TablesOracle + ?Sized,
{
    pub fn new(
        actors: Option<&'a A>,
        items: Option<&'a I>,
        tables: Option<&'a T>,
        config: GameConfig,
    ) -> Self {
        Self {
            actors,
            items,
            tables,
            config,
        }
    }

    pub fn with_all(actors: &'a A, items: &'a I, tables: &'a T, config: GameConfig) -> Self {
        Self::new(Some(actors), Some(items), Some(tables), config)
    }

    pub fn empty(config: GameConfig) -> Self {
        Self::new(None, None, None, config)
    }

    /// Returns the ActorOracle, or an error if not available.
    pub fn actors(&self) -> Result<&'a A, OracleError> {
        self.actors.ok_or(OracleError::ActorsNotAvailable)
    }

    /// Returns the ItemOracle, or an error if not available.
    pub fn items(&self) -> Result<&'a I, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Returns the TablesOracle, or an error if not available.
    pub fn tables(&self) -> Result<&'a T, OracleError> {
        self.tables.ok_or(OracleError::TablesNotAvailable)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

impl<'a> GameEnv<'a> {
    /// Bundles a single content source that implements every oracle.
    pub fn from_content<C>(content: &'a C, config: GameConfig) -> Self
    where
        C: ActorOracle + ItemOracle + TablesOracle + 'a,
    {
        Self::with_all(content, content, content, config)
    }

    /// Looks up an actor template, failing with a typed error if it is missing.
    pub fn actor_template(&self, def_id: &str) -> Result<&'a ActorTemplate, OracleError> {
        self.actors()?
            .template(def_id)
            .ok_or_else(|| OracleError::ActorTemplateNotFound(def_id.to_owned()))
    }

    /// Looks up an item template, failing with a typed error if it is missing.
    pub fn item_template(&self, def_id: &str) -> Result<&'a ItemTemplate, OracleError> {
        self.items()?
            .template(def_id)
            .ok_or_else(|| OracleError::ItemTemplateNotFound(def_id.to_owned()))
    }
}
