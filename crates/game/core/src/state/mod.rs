//! Authoritative game state representation.
//!
//! This module owns the data structures that describe entities, the message
//! log, turn bookkeeping and dungeon progress. Runtime layers clone or query
//! this state but mutate it exclusively through the engine.
pub mod error;
pub mod types;

pub use error::StateError;
pub use types::{
    Actor, Consumable, Entity, EntityId, EntityIdAllocator, EntityKind, Equipment, EquipmentSlot,
    Equippable, Fighter, FighterStats, Inventory, Item, Level, LevelUpChoice, Message, MessageKind,
    MessageLog, Position, RenderOrder, Rgb, TurnPhase, TurnState,
};

use std::collections::HashSet;

use crate::config::{GameConfig, GenerationParams};
use crate::env::GameRng;
use crate::map::GameMap;

/// Where the player is in the dungeon and what the next floor will look like.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DungeonState {
    /// Floor number of the active map, starting at 1.
    pub current_floor: u32,

    /// Rule constants the game was started with. Resumed games keep them.
    pub config: GameConfig,

    /// Parameters for the next floor to generate. Width and height grow after
    /// every generated floor.
    pub params: GenerationParams,

    /// Generator for every random decision in the game.
    pub rng: GameRng,
}

impl DungeonState {
    /// Progress before the first floor has been generated.
    pub fn new(config: GameConfig, params: GenerationParams, seed: u64) -> Self {
        Self {
            current_floor: 0,
            config,
            params,
            rng: GameRng::new(seed),
        }
    }
}

/// Canonical snapshot of the whole simulation.
///
/// The player lives in the active map's entity set under [`EntityId::PLAYER`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// The active floor. Replaced, never mutated in place, on descent.
    pub map: GameMap,

    pub dungeon: DungeonState,

    pub messages: MessageLog,

    pub turn: TurnState,

    /// Never reused across floors.
    pub ids: EntityIdAllocator,
}

impl GameState {
    pub fn new(map: GameMap, dungeon: DungeonState, ids: EntityIdAllocator) -> Self {
        Self {
            map,
            dungeon,
            messages: MessageLog::new(),
            turn: TurnState::new(),
            ids,
        }
    }

    /// Player entity.
    ///
    /// # Panics
    ///
    /// Panics if the player is missing from the map, which [`Self::validate`]
    /// rules out for every state the engine accepts.
    pub fn player(&self) -> &Entity {
        self.map
            .entity(EntityId::PLAYER)
            .expect("player entity missing from active map")
    }

    pub fn player_actor(&self) -> &Actor {
        self.player()
            .as_actor()
            .expect("player entity is not an actor")
    }

    pub fn player_actor_mut(&mut self) -> &mut Actor {
        self.map
            .entity_mut(EntityId::PLAYER)
            .and_then(Entity::as_actor_mut)
            .expect("player entity missing from active map")
    }

    pub fn player_position(&self) -> Position {
        self.player().position
    }

    pub fn is_player_alive(&self) -> bool {
        self.player().is_alive()
    }

    pub fn current_floor(&self) -> u32 {
        self.dungeon.current_floor
    }

    /// Checks structural invariants of the whole graph.
    ///
    /// Used after deserialization so a tampered or truncated save is rejected
    /// before any of it becomes the live state.
    pub fn validate(&self) -> Result<(), StateError> {
        let map = &self.map;
        let cells = map.width() as usize * map.height() as usize;
        if map.tiles().len() != cells || map.visible().len() != cells || map.explored().len() != cells
        {
            return Err(StateError::GridSizeMismatch {
                width: map.width(),
                height: map.height(),
            });
        }
        if let Some(index) = map
            .visible()
            .iter()
            .zip(map.explored())
            .position(|(visible, explored)| *visible && !*explored)
        {
            let width = map.width() as usize;
            return Err(StateError::VisibleNotExplored(Position::new(
                (index % width) as i32,
                (index / width) as i32,
            )));
        }

        let player = map.entity(EntityId::PLAYER).ok_or(StateError::MissingPlayer)?;
        if player.as_actor().is_none() {
            return Err(StateError::PlayerNotActor);
        }

        let mut seen = HashSet::new();
        for entity in map.entities() {
            if !map.in_bounds(entity.position) {
                return Err(StateError::EntityOutOfBounds {
                    id: entity.id,
                    position: entity.position,
                    width: map.width(),
                    height: map.height(),
                });
            }
            self.check_entity_id(entity, &mut seen)?;
            if let Some(actor) = entity.as_actor() {
                let fighter = &actor.fighter;
                if fighter.hp() > fighter.max_hp() {
                    return Err(StateError::HpOutOfRange {
                        id: entity.id,
                        hp: fighter.hp(),
                        max_hp: fighter.max_hp(),
                    });
                }
                if actor.inventory.len() > actor.inventory.capacity() {
                    return Err(StateError::InventoryOverCapacity {
                        id: entity.id,
                        len: actor.inventory.len(),
                        capacity: actor.inventory.capacity(),
                    });
                }
                for item in actor.inventory.items() {
                    self.check_entity_id(item, &mut seen)?;
                }
            }
        }

        if !self.turn.phase.is_settled() {
            return Err(StateError::UnsettledPhase(self.turn.phase));
        }
        Ok(())
    }

    fn check_entity_id(
        &self,
        entity: &Entity,
        seen: &mut HashSet<EntityId>,
    ) -> Result<(), StateError> {
        if !seen.insert(entity.id) {
            return Err(StateError::DuplicateEntityId(entity.id));
        }
        if !entity.id.is_player() && entity.id.0 >= self.ids.watermark() {
            return Err(StateError::EntityIdNotAllocated {
                id: entity.id,
                next: self.ids.watermark(),
            });
        }
        Ok(())
    }
}
