//! Deterministic roguelike rules and data types shared across clients.
//!
//! `game-core` defines the canonical rules (dungeon generation, visibility,
//! combat, progression, actions) and exposes pure APIs that the runtime and
//! clients build on. All in-game state mutation flows through
//! [`engine::GameEngine`]; content is read through the oracles in [`env`].
pub mod action;
pub mod ai;
pub mod combat;
pub mod config;
pub mod dungeon;
pub mod engine;
pub mod env;
pub mod error;
pub mod map;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use action::{Action, ActionError, ActionTransition, Direction};
pub use ai::AiKind;
pub use config::{GameConfig, GenerationParams};
pub use dungeon::{
    DungeonGenerator, FloorTable, GeneratedFloor, GenerationError, ScalingTable, SpawnEntry,
    SpawnTable,
};
pub use engine::{
    ExecuteError, GameEngine, TransitionPhase, TransitionPhaseError, TurnOutcome, new_game,
};
pub use env::{
    ActorOracle, ActorTemplate, Env, GameEnv, GameRng, ItemOracle, ItemTemplate, OracleError,
    PLAYER_TEMPLATE_ID, TablesOracle,
};
pub use error::{ErrorSeverity, GameError};
pub use map::{GameMap, Graphic, TileKind};
pub use state::{
    Actor, Consumable, DungeonState, Entity, EntityId, EntityKind, Equippable, EquipmentSlot,
    GameState, Item, LevelUpChoice, Message, MessageKind, MessageLog, Position, StateError,
    TurnPhase,
};
