//! Item capabilities.

use super::actor::EquipmentSlot;

/// One-shot effect triggered by the UseItem action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Consumable {
    Healing { amount: u32 },
    Lightning { damage: u32, max_range: u32 },
    Confusion { turns: u32 },
    Fireball { damage: u32, radius: u32 },
}

impl Consumable {
    /// Whether using this item requires the caller to pick a target tile.
    pub fn needs_target(&self) -> bool {
        matches!(self, Self::Confusion { .. } | Self::Fireball { .. })
    }
}

/// Stat bonuses granted while the item sits in an equipment slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equippable {
    pub slot: EquipmentSlot,
    pub power_bonus: i32,
    pub defense_bonus: i32,
}

impl Equippable {
    pub const fn weapon(power_bonus: i32) -> Self {
        Self {
            slot: EquipmentSlot::Weapon,
            power_bonus,
            defense_bonus: 0,
        }
    }

    pub const fn armor(defense_bonus: i32) -> Self {
        Self {
            slot: EquipmentSlot::Armor,
            power_bonus: 0,
            defense_bonus,
        }
    }
}

/// Components of a pick-up-able object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub consumable: Option<Consumable>,
    pub equippable: Option<Equippable>,
}
