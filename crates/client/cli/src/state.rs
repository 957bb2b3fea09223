//! UI state machine.
//!
//! Each variant is one screen; [`crate::app::App`] has one dispatch function
//! per variant and every transition is a plain assignment of the next state.

use game_core::{EntityId, Position};

/// Why the inventory list is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InventoryPurpose {
    Use,
    Drop,
    Equip,
}

impl InventoryPurpose {
    pub fn title(self) -> &'static str {
        match self {
            Self::Use => "Select an item to use",
            Self::Drop => "Select an item to drop",
            Self::Equip => "Select an item to equip or remove",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    MainMenu,
    Playing,
    Inventory(InventoryPurpose),
    /// Choosing the target tile for a consumable.
    Targeting { item: EntityId, cursor: Position },
    LevelUp,
    GameOver,
}

impl UiState {
    /// Whether a game session must exist in this state.
    pub fn in_game(&self) -> bool {
        !matches!(self, Self::MainMenu)
    }
}
