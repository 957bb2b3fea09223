//! Non-player decision making.
//!
//! Every activation an AI either produces one [`Action`] for the engine to run
//! or does nothing. AIs never mutate the world directly; the only state they
//! touch is their own (confusion countdown).

use rand::seq::SliceRandom;
use tracing::trace;

use crate::action::{Action, Direction};
use crate::state::{EntityId, GameState, MessageKind};

/// Behavior attached to an actor. `None` on an actor means it is a corpse.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AiKind {
    /// Driven by external input; the engine never plans for it.
    PlayerControlled,

    /// Chases and attacks the player while standing on a tile the player can see.
    Hostile,

    /// Stumbles randomly, then reverts to `previous`.
    Confused {
        turns_remaining: u32,
        previous: Box<AiKind>,
    },
}

impl AiKind {
    /// Wraps `self` in a confusion that lasts `turns` activations.
    pub fn confused(self, turns: u32) -> Self {
        match self {
            // Re-confusing resets the countdown but keeps the original behavior.
            Self::Confused { previous, .. } => Self::Confused {
                turns_remaining: turns,
                previous,
            },
            other => Self::Confused {
                turns_remaining: turns,
                previous: Box::new(other),
            },
        }
    }

    pub fn is_confused(&self) -> bool {
        matches!(self, Self::Confused { .. })
    }
}

/// Decides what `actor` does this turn.
///
/// Returns `None` when the actor has nothing to do (player-controlled, dead,
/// idle or just recovered from confusion).
pub fn plan_turn(state: &mut GameState, actor: EntityId) -> Option<Action> {
    let entity = state.map.entity(actor)?;
    let ai = entity.as_actor()?.ai.clone()?;
    let position = entity.position;

    match ai {
        AiKind::PlayerControlled => None,
        AiKind::Hostile => plan_hostile(state, actor),
        AiKind::Confused {
            turns_remaining: 0,
            previous,
        } => {
            let name = entity.name.clone();
            if let Some(actor) = state.map.entity_mut(actor).and_then(|e| e.as_actor_mut()) {
                actor.ai = Some(*previous);
            }
            state.messages.add(
                format!("The {name} is no longer confused."),
                MessageKind::StatusEffect,
            );
            None
        }
        AiKind::Confused {
            turns_remaining,
            previous,
        } => {
            let direction = *Direction::ALL.choose(&mut state.dungeon.rng)?;
            if let Some(actor) = state.map.entity_mut(actor).and_then(|e| e.as_actor_mut()) {
                actor.ai = Some(AiKind::Confused {
                    turns_remaining: turns_remaining - 1,
                    previous,
                });
            }
            trace!(%actor, %position, ?direction, "confused actor stumbles");
            Some(Action::bump(actor, direction))
        }
    }
}

/// Attack when adjacent, otherwise take one step along a path to the player.
///
/// Acts only while the actor stands on a currently visible tile; there is no
/// memory of where the player was last seen.
fn plan_hostile(state: &GameState, actor: EntityId) -> Option<Action> {
    let position = state.map.entity(actor)?.position;
    if !state.map.is_visible(position) || !state.is_player_alive() {
        return None;
    }

    let target = state.player_position();
    if position.chebyshev_distance(target) <= 1 {
        return Some(Action::melee(actor, Direction::between(position, target)?));
    }

    let next = state.map.step_toward(position, target)?;
    Some(Action::movement(actor, Direction::between(position, next)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{BumpAction, MeleeAction, MoveAction};
    use crate::map::TileKind;
    use crate::state::Position;
    use crate::testing::{Arena, TestContent};

    #[test]
    fn adjacent_hostile_attacks_the_player() {
        let content = TestContent::new();
        let mut arena = Arena::new(&content, 12, 12, Position::new(5, 5));
        let orc = arena.spawn_monster(&content, "orc", Position::new(6, 6));

        let action = plan_turn(&mut arena.state, orc);
        assert_eq!(
            action,
            Some(Action::Melee(MeleeAction::new(orc, Direction::NorthWest)))
        );
    }

    #[test]
    fn visible_hostile_steps_toward_the_player() {
        let content = TestContent::new();
        let mut arena = Arena::new(&content, 12, 12, Position::new(2, 5));
        let orc = arena.spawn_monster(&content, "orc", Position::new(6, 5));

        let Some(Action::Move(MoveAction { direction, .. })) = plan_turn(&mut arena.state, orc)
        else {
            panic!("expected a move");
        };
        let next = direction.apply(Position::new(6, 5));
        assert_eq!(next.x, 5);
    }

    #[test]
    fn hostile_outside_view_stays_idle() {
        let content = TestContent::new();
        let mut arena = Arena::new(&content, 12, 12, Position::new(2, 5));
        // wall off the right half so the orc's tile is not visible
        for y in 0..12 {
            arena.state.map.set_tile(Position::new(5, y), TileKind::Wall);
        }
        arena.refresh_fov();
        let orc = arena.spawn_monster(&content, "orc", Position::new(8, 5));
        assert!(!arena.state.map.is_visible(Position::new(8, 5)));
        assert_eq!(plan_turn(&mut arena.state, orc), None);
    }

    #[test]
    fn confusion_counts_down_then_restores() {
        let content = TestContent::new();
        let mut arena = Arena::new(&content, 12, 12, Position::new(2, 2));
        let orc = arena.spawn_monster(&content, "orc", Position::new(8, 8));
        let ai = &mut arena.state.map.entity_mut(orc).unwrap().as_actor_mut().unwrap().ai;
        *ai = ai.take().map(|ai| ai.confused(2));

        for _ in 0..2 {
            let action = plan_turn(&mut arena.state, orc);
            assert!(matches!(
                action,
                Some(Action::Bump(BumpAction { actor, .. })) if actor == orc
            ));
        }

        assert_eq!(plan_turn(&mut arena.state, orc), None);
        assert_eq!(
            arena.entity(orc).as_actor().unwrap().ai,
            Some(AiKind::Hostile)
        );
        assert_eq!(arena.last_message(), "The Orc is no longer confused.");
    }

    #[test]
    fn reconfusing_keeps_the_original_behavior() {
        let ai = AiKind::Hostile.confused(3).confused(5);
        assert_eq!(
            ai,
            AiKind::Confused {
                turns_remaining: 5,
                previous: Box::new(AiKind::Hostile),
            }
        );
    }

    #[test]
    fn player_controlled_actors_are_never_planned() {
        let content = TestContent::new();
        let mut arena = Arena::new(&content, 12, 12, Position::new(2, 2));
        assert_eq!(plan_turn(&mut arena.state, crate::state::EntityId::PLAYER), None);
    }
}
