use crate::state::{EntityId, GameState};

use super::death::die;

/// Damage dealt by an attack. Never negative.
#[inline]
pub fn calculate_damage(power: i32, defense: i32) -> u32 {
    power.saturating_sub(defense).max(0) as u32
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageResult {
    /// HP actually removed (bounded by the HP the target had).
    pub hp_lost: u32,
    /// The hit turned a living actor into a corpse.
    pub killed: bool,
}

/// Removes `amount` HP from the actor `target` and runs the death transition
/// if it reaches zero while still alive.
///
/// Returns `None` if `target` is not an actor on the active map.
pub fn apply_damage(state: &mut GameState, target: EntityId, amount: u32) -> Option<DamageResult> {
    let entity = state.map.entity_mut(target)?;
    let alive = entity.is_alive();
    let actor = entity.as_actor_mut()?;

    let hp_lost = actor.fighter.take_damage(amount);
    let killed = alive && actor.fighter.is_dead();
    if killed {
        die(state, target);
    }
    Some(DamageResult { hp_lost, killed })
}
