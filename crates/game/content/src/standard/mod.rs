//! The built-in catalog: three monsters, a player and fifteen items.

mod actors;
mod items;
mod tables;

pub use actors::actors;
pub use items::items;
pub use tables::tables;
