//! Consumable use.

use tracing::debug;

use super::inventory::{carried_item, carrier, carrier_mut};
use crate::action::{ActionError, ActionTransition, living_actor};
use crate::combat::apply_damage;
use crate::env::GameEnv;
use crate::state::{Consumable, EntityId, GameState, MessageKind, Position};

/// Use a carried consumable, optionally aimed at a map tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseItemAction {
    pub actor: EntityId,
    pub item: EntityId,
    pub target: Option<Position>,
}

/// What the item will do once applied, resolved against the current state.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Effect {
    Heal { amount: u32 },
    Strike { target: EntityId, damage: u32 },
    Confuse { target: EntityId, turns: u32 },
    Blast { targets: Vec<EntityId>, damage: u32 },
}

impl UseItemAction {
    pub fn new(actor: EntityId, item: EntityId, target: Option<Position>) -> Self {
        Self {
            actor,
            item,
            target,
        }
    }

    fn resolve(&self, state: &GameState) -> Result<(String, Effect), ActionError> {
        let user = living_actor(state, self.actor)?;
        let actor = carrier(state, self.actor)?;
        let entity = carried_item(actor, self.actor, self.item)?;
        let name = entity.name.clone();
        let consumable = entity
            .as_item()
            .and_then(|item| item.consumable)
            .ok_or_else(|| ActionError::NotUsable(name.clone()))?;

        let effect = match consumable {
            Consumable::Healing { amount } => {
                if actor.fighter.hp() == actor.fighter.max_hp() {
                    return Err(ActionError::HealthFull);
                }
                Effect::Heal { amount }
            }
            Consumable::Lightning { damage, max_range } => {
                let reach = (max_range + 1) as f32;
                let target = state
                    .map
                    .actors()
                    .filter(|e| e.id != self.actor && state.map.is_visible(e.position))
                    .map(|e| (e.id, user.position.euclidean_distance(e.position)))
                    .filter(|(_, distance)| *distance < reach)
                    .min_by(|a, b| a.1.total_cmp(&b.1))
                    .map(|(id, _)| id)
                    .ok_or(ActionError::NoTargetInRange)?;
                Effect::Strike { target, damage }
            }
            Consumable::Confusion { turns } => {
                let position = self.visible_target(state)?;
                let target = state
                    .map
                    .actor_at(position)
                    .ok_or(ActionError::NoActorAtTarget)?;
                if target.id == self.actor {
                    return Err(ActionError::CannotTargetSelf);
                }
                Effect::Confuse {
                    target: target.id,
                    turns,
                }
            }
            Consumable::Fireball { damage, radius } => {
                let center = self.visible_target(state)?;
                let targets: Vec<EntityId> = state
                    .map
                    .actors()
                    .filter(|e| e.position.euclidean_distance(center) <= radius as f32)
                    .map(|e| e.id)
                    .collect();
                if targets.is_empty() {
                    return Err(ActionError::NoTargetsInRadius);
                }
                Effect::Blast { targets, damage }
            }
        };
        Ok((name, effect))
    }

    fn visible_target(&self, state: &GameState) -> Result<Position, ActionError> {
        let target = self.target.ok_or(ActionError::TargetRequired)?;
        if !state.map.is_visible(target) {
            return Err(ActionError::TargetNotVisible);
        }
        Ok(target)
    }
}

impl ActionTransition for UseItemAction {
    type Error = ActionError;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        self.resolve(state).map(|_| ())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let (item_name, effect) = self.resolve(state)?;
        debug!(actor = %self.actor, item = %self.item, ?effect, "using item");

        match effect {
            Effect::Heal { amount } => {
                let recovered = carrier_mut(state, self.actor)?.fighter.heal(amount);
                state.messages.add(
                    format!("You consume the {item_name}, and recover {recovered} HP!"),
                    MessageKind::HealthRecovered,
                );
            }
            Effect::Strike { target, damage } => {
                let name = entity_name(state, target);
                state.messages.add(
                    format!(
                        "A lighting bolt strikes the {name} with a loud thunder, for {damage} damage!"
                    ),
                    MessageKind::PlayerAttack,
                );
                apply_damage(state, target, damage);
            }
            Effect::Confuse { target, turns } => {
                let name = entity_name(state, target);
                state.messages.add(
                    format!("The eyes of the {name} look vacant, as it starts to stumble around!"),
                    MessageKind::StatusEffect,
                );
                let actor = carrier_mut(state, target)?;
                actor.ai = actor.ai.take().map(|ai| ai.confused(turns));
            }
            Effect::Blast { targets, damage } => {
                for target in targets {
                    let name = entity_name(state, target);
                    state.messages.add(
                        format!(
                            "The {name} is engulfed in a fiery explosion, taking {damage} damage!"
                        ),
                        MessageKind::PlayerAttack,
                    );
                    apply_damage(state, target, damage);
                }
            }
        }

        let user = carrier_mut(state, self.actor)?;
        if let Some(slot) = user.equipment.slot_of(self.item) {
            user.equipment.unequip(slot);
        }
        user.inventory.remove(self.item);
        Ok(())
    }
}

fn entity_name(state: &GameState, id: EntityId) -> String {
    state
        .map
        .entity(id)
        .map(|e| e.name.clone())
        .unwrap_or_default()
}
