//! Data-driven content definitions and loaders.
//!
//! This crate houses the game's static content and loaders for RON/TOML data files:
//! - Actor templates (player and monsters)
//! - Item templates (consumables and equipment)
//! - Floor-gated spawn tables, per-room caps and monster scaling
//! - Generation settings (data-driven via TOML)
//!
//! Content is consumed by runtime oracles and never appears in game state.

pub mod pack;
pub mod standard;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use pack::{ContentError, ContentPack, ContentTables};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ContentLoader, GenerationSettings};
