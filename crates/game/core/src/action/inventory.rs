use crate::action::{ActionError, ActionTransition, living_actor};
use crate::env::GameEnv;
use crate::state::{Actor, Entity, EntityId, Equippable, GameState, MessageKind};

/// Pick up the first item lying under the actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickupAction {
    pub actor: EntityId,
}

impl PickupAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }

    fn item_here(&self, state: &GameState) -> Result<EntityId, ActionError> {
        let position = living_actor(state, self.actor)?.position;
        state
            .map
            .items_at(position)
            .next()
            .map(|item| item.id)
            .ok_or(ActionError::NothingToPickUp)
    }
}

impl ActionTransition for PickupAction {
    type Error = ActionError;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        self.item_here(state)?;
        let actor = carrier(state, self.actor)?;
        if actor.inventory.is_full() {
            return Err(ActionError::InventoryFull);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let item_id = self.item_here(state)?;
        let item = state
            .map
            .remove_entity(item_id)
            .ok_or(ActionError::NothingToPickUp)?;
        let name = item.name.clone();

        let actor = carrier_mut(state, self.actor)?;
        if let Err(item) = actor.inventory.push(item) {
            state.map.add_entity(item);
            return Err(ActionError::InventoryFull);
        }
        state
            .messages
            .add(format!("You picked up the {name}!"), MessageKind::Info);
        Ok(())
    }
}

/// Drop a carried item at the actor's feet, unequipping it first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropAction {
    pub actor: EntityId,
    pub item: EntityId,
}

impl DropAction {
    pub fn new(actor: EntityId, item: EntityId) -> Self {
        Self { actor, item }
    }
}

impl ActionTransition for DropAction {
    type Error = ActionError;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        carried_item(carrier(state, self.actor)?, self.actor, self.item).map(|_| ())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let position = living_actor(state, self.actor)?.position;
        if carrier(state, self.actor)?.equipment.is_equipped(self.item) {
            toggle_equipment(state, self.actor, self.item)?;
        }

        let mut item = carrier_mut(state, self.actor)?
            .inventory
            .remove(self.item)
            .ok_or(ActionError::ItemNotCarried {
                actor: self.actor,
                item: self.item,
            })?;
        item.position = position;
        let name = item.name.clone();
        state.map.add_entity(item);
        state
            .messages
            .add(format!("You dropped the {name}."), MessageKind::Info);
        Ok(())
    }
}

/// Equip a carried item, or unequip it if it is already worn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipAction {
    pub actor: EntityId,
    pub item: EntityId,
}

impl EquipAction {
    pub fn new(actor: EntityId, item: EntityId) -> Self {
        Self { actor, item }
    }
}

impl ActionTransition for EquipAction {
    type Error = ActionError;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        equippable_of(carrier(state, self.actor)?, self.actor, self.item).map(|_| ())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        toggle_equipment(state, self.actor, self.item)
    }
}

/// Equips `item` into its slot (replacing whatever was there) or takes it off
/// if it is already equipped. Logs one message per item put on or removed.
fn toggle_equipment(
    state: &mut GameState,
    actor_id: EntityId,
    item_id: EntityId,
) -> Result<(), ActionError> {
    let actor = carrier(state, actor_id)?;
    let equippable = equippable_of(actor, actor_id, item_id)?;
    let name_of = |id: EntityId| {
        actor
            .inventory
            .get(id)
            .map(|item| item.name.clone())
            .unwrap_or_default()
    };
    let name = name_of(item_id);

    let mut removed = Vec::new();
    let equipped = if actor.equipment.is_equipped(item_id) {
        removed.push(name.clone());
        false
    } else {
        if let Some(previous) = actor.equipment.slot(equippable.slot) {
            removed.push(name_of(previous));
        }
        true
    };

    let equipment = &mut carrier_mut(state, actor_id)?.equipment;
    if equipped {
        equipment.equip(equippable.slot, item_id);
    } else {
        equipment.unequip(equippable.slot);
    }

    for removed in removed {
        state
            .messages
            .add(format!("You remove the {removed}."), MessageKind::Info);
    }
    if equipped {
        state
            .messages
            .add(format!("You equip the {name}."), MessageKind::Info);
    }
    Ok(())
}

pub(crate) fn carrier(state: &GameState, id: EntityId) -> Result<&Actor, ActionError> {
    living_actor(state, id)?
        .as_actor()
        .ok_or(ActionError::NotAnActor(id))
}

pub(crate) fn carrier_mut(state: &mut GameState, id: EntityId) -> Result<&mut Actor, ActionError> {
    state
        .map
        .entity_mut(id)
        .ok_or(ActionError::ActorNotFound(id))?
        .as_actor_mut()
        .ok_or(ActionError::NotAnActor(id))
}

pub(crate) fn carried_item(
    actor: &Actor,
    actor_id: EntityId,
    item: EntityId,
) -> Result<&Entity, ActionError> {
    actor.inventory.get(item).ok_or(ActionError::ItemNotCarried {
        actor: actor_id,
        item,
    })
}

fn equippable_of(
    actor: &Actor,
    actor_id: EntityId,
    item: EntityId,
) -> Result<Equippable, ActionError> {
    let entity = carried_item(actor, actor_id, item)?;
    entity
        .as_item()
        .and_then(|item| item.equippable)
        .ok_or_else(|| ActionError::NotEquippable(entity.name.clone()))
}
