//! Input processing for the CLI client.
//!
//! This module owns the line-to-command mapping so the rest of the
//! application stays agnostic about concrete key bindings.

use game_core::{Direction, LevelUpChoice};

use crate::config::KeyMap;
use crate::state::{InventoryPurpose, UiState};

/// High-level outcome of processing one line of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    NewGame,
    Continue,
    Direction(Direction),
    Wait,
    Pickup,
    Descend,
    OpenInventory(InventoryPurpose),
    /// Inventory slot, `a` = 0.
    Select(usize),
    Confirm,
    Cancel,
    Choose(LevelUpChoice),
    Menu,
    Quit,
    /// No meaningful command was produced.
    None,
}

/// Translates input lines into commands using a configured key map.
pub struct InputHandler {
    keymap: KeyMap,
}

impl InputHandler {
    pub fn new(keymap: KeyMap) -> Self {
        Self { keymap }
    }

    /// Converts one line into a command. Only the first character counts; an
    /// empty line confirms a target or closes the inventory.
    pub fn translate(&self, line: &str, ui: &UiState) -> Command {
        let Some(key) = line.trim().chars().next() else {
            return match ui {
                UiState::Targeting { .. } => Command::Confirm,
                UiState::Inventory(_) => Command::Cancel,
                _ => Command::None,
            };
        };

        match ui {
            UiState::MainMenu => match key {
                'n' => Command::NewGame,
                'c' => Command::Continue,
                'q' => Command::Quit,
                _ => Command::None,
            },
            UiState::Playing => self.playing(key),
            UiState::Inventory(_) => match key {
                'a'..='z' => Command::Select(key as usize - 'a' as usize),
                _ => Command::Cancel,
            },
            UiState::Targeting { .. } => {
                if let Some(direction) = self.keymap.direction(key) {
                    Command::Direction(direction)
                } else if key == self.keymap.confirm {
                    Command::Confirm
                } else {
                    Command::Cancel
                }
            }
            UiState::LevelUp => match key {
                '1' => Command::Choose(LevelUpChoice::MaxHp),
                '2' => Command::Choose(LevelUpChoice::Power),
                '3' => Command::Choose(LevelUpChoice::Defense),
                _ => Command::None,
            },
            UiState::GameOver => match key {
                'n' => Command::NewGame,
                'm' => Command::Menu,
                'q' | 'Q' => Command::Quit,
                _ => Command::None,
            },
        }
    }

    fn playing(&self, key: char) -> Command {
        let keys = &self.keymap;
        if let Some(direction) = keys.direction(key) {
            return Command::Direction(direction);
        }
        match key {
            k if k == keys.wait => Command::Wait,
            k if k == keys.pickup => Command::Pickup,
            k if k == keys.descend => Command::Descend,
            k if k == keys.use_item => Command::OpenInventory(InventoryPurpose::Use),
            k if k == keys.drop => Command::OpenInventory(InventoryPurpose::Drop),
            k if k == keys.equip => Command::OpenInventory(InventoryPurpose::Equip),
            k if k == keys.menu => Command::Menu,
            k if k == keys.quit => Command::Quit,
            _ => Command::None,
        }
    }
}
