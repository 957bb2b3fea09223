//! Equipment system for actors.
//!
//! Equipment references items held in the same actor's inventory by id; the
//! item data itself (slot and bonuses) stays in the inventory.

use strum::{Display, EnumIter};

use super::inventory::Inventory;
use crate::state::EntityId;

/// Slot an equippable item occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipmentSlot {
    Weapon,
    Armor,
}

/// At most one equipped item per slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    weapon: Option<EntityId>,
    armor: Option<EntityId>,
}

impl Equipment {
    /// Creates empty equipment (no weapon or armor).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn slot(&self, slot: EquipmentSlot) -> Option<EntityId> {
        match slot {
            EquipmentSlot::Weapon => self.weapon,
            EquipmentSlot::Armor => self.armor,
        }
    }

    fn slot_mut(&mut self, slot: EquipmentSlot) -> &mut Option<EntityId> {
        match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Armor => &mut self.armor,
        }
    }

    /// Equips an item, returning the previously equipped item in that slot if any.
    pub fn equip(&mut self, slot: EquipmentSlot, item: EntityId) -> Option<EntityId> {
        self.slot_mut(slot).replace(item)
    }

    /// Clears a slot, returning the item that was in it.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<EntityId> {
        self.slot_mut(slot).take()
    }

    pub fn is_equipped(&self, item: EntityId) -> bool {
        self.weapon == Some(item) || self.armor == Some(item)
    }

    /// Returns the slot holding `item`, if it is equipped.
    pub fn slot_of(&self, item: EntityId) -> Option<EquipmentSlot> {
        if self.weapon == Some(item) {
            Some(EquipmentSlot::Weapon)
        } else if self.armor == Some(item) {
            Some(EquipmentSlot::Armor)
        } else {
            None
        }
    }

    /// Sum of power bonuses of equipped items.
    pub fn power_bonus(&self, inventory: &Inventory) -> i32 {
        self.equipped(inventory).map(|e| e.power_bonus).sum()
    }

    /// Sum of defense bonuses of equipped items.
    pub fn defense_bonus(&self, inventory: &Inventory) -> i32 {
        self.equipped(inventory).map(|e| e.defense_bonus).sum()
    }

    fn equipped<'a>(
        &'a self,
        inventory: &'a Inventory,
    ) -> impl Iterator<Item = crate::state::Equippable> + 'a {
        [self.weapon, self.armor]
            .into_iter()
            .flatten()
            .filter_map(move |id| inventory.get(id)?.as_item()?.equippable)
    }
}
