//! Actor-related state types.
//!
//! This module contains the components an actor carries:
//! - Fighter: hit points and base attributes
//! - Level: experience and progression
//! - Equipment: weapon and armor slots
//! - Inventory: carried items

pub mod equipment;
pub mod fighter;
pub mod inventory;
pub mod level;

pub use equipment::{Equipment, EquipmentSlot};
pub use fighter::{Fighter, FighterStats};
pub use inventory::Inventory;
pub use level::{Level, LevelUpChoice};

use crate::ai::AiKind;

/// Components of a living (or formerly living) creature.
///
/// An actor whose `ai` is `None` is a corpse: it stays on the map for
/// rendering and history but never acts again.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    pub fighter: Fighter,
    pub ai: Option<AiKind>,
    pub inventory: Inventory,
    pub equipment: Equipment,
    pub level: Level,
}

impl Actor {
    pub fn new(fighter: Fighter, ai: AiKind, inventory: Inventory, level: Level) -> Self {
        Self {
            fighter,
            ai: Some(ai),
            inventory,
            equipment: Equipment::empty(),
            level,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.ai.is_some()
    }

    /// Base power plus equipment bonus.
    pub fn power(&self) -> i32 {
        self.fighter.base_power() + self.equipment.power_bonus(&self.inventory)
    }

    /// Base defense plus equipment bonus.
    pub fn defense(&self) -> i32 {
        self.fighter.base_defense() + self.equipment.defense_bonus(&self.inventory)
    }
}
