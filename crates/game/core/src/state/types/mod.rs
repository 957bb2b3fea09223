pub mod actor;
pub mod common;
pub mod entity;
pub mod item;
pub mod messages;
pub mod turn;

// Re-export all actor-related types
pub use actor::{
    Actor, Equipment, EquipmentSlot, Fighter, FighterStats, Inventory, Level, LevelUpChoice,
};

// Re-export common types
pub use common::{EntityId, EntityIdAllocator, Position, Rgb};

// Re-export entity and item types
pub use entity::{Entity, EntityKind, RenderOrder};
pub use item::{Consumable, Equippable, Item};

// Re-export message log
pub use messages::{Message, MessageKind, MessageLog};

// Re-export turn state
pub use turn::{TurnPhase, TurnState};
