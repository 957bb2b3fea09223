//! Turn pipeline.
//!
//! The [`GameEngine`] is the only writer of [`GameState`] during play. One
//! call to [`GameEngine::submit`] runs a full turn: the player's action, every
//! enemy activation, the visibility update and the settling of the turn phase.
//! A recoverable rejection ends the call early without consuming a turn.

mod errors;
mod level_up;
mod setup;
mod transition;
mod turns;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
pub use setup::{WELCOME_MESSAGE, new_game};

use tracing::debug;

use crate::action::{Action, ActionError};
use crate::env::GameEnv;
use crate::error::GameError;
use crate::state::{GameState, MessageKind, TurnPhase};

/// What a submitted action led to once the turn has settled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The turn ran to completion and the player may act again.
    Completed,

    /// The rules rejected the action; the reason was logged and no turn passed.
    Rejected { reason: ActionError },

    /// The player died during the turn. The game is over.
    PlayerDied,

    /// The player reached a level threshold and must choose an attribute.
    LevelUpPending,
}

/// Game engine that drives turns over a borrowed [`GameState`].
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Current turn phase.
    pub fn phase(&self) -> TurnPhase {
        self.state.turn.phase
    }

    /// Runs the player's action and, if it succeeds, the rest of the turn.
    ///
    /// Only the player may submit actions, and only while the engine is
    /// awaiting input. Non-recoverable action failures are returned as errors;
    /// the phase goes back to `AwaitingPlayerInput` so the caller can decide
    /// what to do with the state.
    pub fn submit(
        &mut self,
        env: GameEnv<'_>,
        action: &Action,
    ) -> Result<TurnOutcome, ExecuteError> {
        match self.state.turn.phase {
            TurnPhase::GameOver => return Err(ExecuteError::GameOver),
            TurnPhase::LevelingUp => return Err(ExecuteError::LevelUpPending),
            _ => {}
        }
        let actor = action.actor();
        if !actor.is_player() {
            return Err(ExecuteError::ActorNotPlayer { actor });
        }

        debug!(action = action.name(), turn = self.state.turn.turn_count, "submit");
        self.state.turn.phase = TurnPhase::ExecutingAction;

        match transition::execute_transition(action, self.state, &env) {
            Ok(()) => {}
            Err(ExecuteError::Action { source, .. }) if source.error.severity().is_recoverable() => {
                self.state
                    .messages
                    .add(source.error.to_string(), MessageKind::Impossible);
                self.state.turn.phase = TurnPhase::AwaitingPlayerInput;
                return Ok(TurnOutcome::Rejected {
                    reason: source.error,
                });
            }
            Err(error) => {
                self.state.turn.phase = TurnPhase::AwaitingPlayerInput;
                return Err(error);
            }
        }

        self.state.turn.turn_count += 1;
        self.handle_enemy_turns(&env);
        self.update_fov(&env);
        Ok(self.settle())
    }

    /// Recomputes the player's field of view at the configured radius.
    pub fn update_fov(&mut self, env: &GameEnv<'_>) {
        self.state.turn.phase = TurnPhase::RecomputingVisibility;
        let origin = self.state.player_position();
        self.state.map.compute_fov(origin, env.config().fov_radius);
    }

    /// Moves to the resting phase implied by the player's condition.
    fn settle(&mut self) -> TurnOutcome {
        let (phase, outcome) = if !self.state.is_player_alive() {
            (TurnPhase::GameOver, TurnOutcome::PlayerDied)
        } else if self.state.player_actor().level.requires_level_up() {
            (TurnPhase::LevelingUp, TurnOutcome::LevelUpPending)
        } else {
            (TurnPhase::AwaitingPlayerInput, TurnOutcome::Completed)
        };
        self.state.turn.phase = phase;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Direction;
    use crate::combat::grant_xp;
    use crate::state::{EntityId, LevelUpChoice, Position};
    use crate::testing::{Arena, TestContent, small_params};

    #[test]
    fn new_game_starts_on_floor_one() {
        let content = TestContent::new();
        let state = new_game(content.env(), small_params(), 9).unwrap();

        assert_eq!(state.current_floor(), 1);
        assert_eq!(state.turn.phase, TurnPhase::AwaitingPlayerInput);
        assert_eq!(state.turn.turn_count, 0);
        assert_eq!(state.messages.last().unwrap().text, WELCOME_MESSAGE);
        assert!(state.map.is_visible(state.player_position()));
        assert!(state.map.is_explored(state.player_position()));
        assert_eq!(state.dungeon.params.map_width, small_params().map_width + 10);
        state.validate().unwrap();
    }

    #[test]
    fn rejected_action_does_not_pass_a_turn() {
        let content = TestContent::new();
        let mut arena = Arena::new(&content, 8, 8, Position::new(1, 1));
        let orc = arena.spawn_monster(&content, "orc", Position::new(3, 1));

        let outcome = GameEngine::new(&mut arena.state)
            .submit(content.env(), &Action::movement(EntityId::PLAYER, Direction::North))
            .unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::Rejected {
                reason: ActionError::Blocked
            }
        );
        assert_eq!(arena.state.turn.turn_count, 0);
        assert_eq!(arena.state.turn.phase, TurnPhase::AwaitingPlayerInput);
        assert_eq!(arena.entity(orc).position, Position::new(3, 1));
        let last = arena.state.messages.last().unwrap();
        assert_eq!(last.text, "That way is blocked.");
        assert_eq!(last.kind, MessageKind::Impossible);
    }

    #[test]
    fn enemies_act_after_a_successful_action() {
        let content = TestContent::new();
        let mut arena = Arena::new(&content, 10, 10, Position::new(2, 2));
        let orc = arena.spawn_monster(&content, "orc", Position::new(6, 2));

        let outcome = GameEngine::new(&mut arena.state)
            .submit(content.env(), &Action::wait(EntityId::PLAYER))
            .unwrap();
        assert_eq!(outcome, TurnOutcome::Completed);
        assert_eq!(arena.state.turn.turn_count, 1);
        assert_eq!(arena.entity(orc).position, Position::new(5, 2));

        let mut engine = GameEngine::new(&mut arena.state);
        engine.submit(content.env(), &Action::wait(EntityId::PLAYER)).unwrap();
        engine.submit(content.env(), &Action::wait(EntityId::PLAYER)).unwrap();
        // the orc reaches the player and attacks on the fourth wait
        engine.submit(content.env(), &Action::wait(EntityId::PLAYER)).unwrap();
        assert_eq!(arena.hp(EntityId::PLAYER), 28);
    }

    #[test]
    fn player_death_ends_the_game() {
        let content = TestContent::new();
        let mut arena = Arena::new(&content, 8, 8, Position::new(2, 2));
        arena.spawn_monster(&content, "orc", Position::new(3, 2));
        arena.state.player_actor_mut().fighter.set_hp(1);

        let mut engine = GameEngine::new(&mut arena.state);
        let outcome = engine
            .submit(content.env(), &Action::wait(EntityId::PLAYER))
            .unwrap();
        assert_eq!(outcome, TurnOutcome::PlayerDied);
        assert_eq!(engine.phase(), TurnPhase::GameOver);
        assert_eq!(
            engine.submit(content.env(), &Action::wait(EntityId::PLAYER)),
            Err(ExecuteError::GameOver)
        );
        assert_eq!(arena.last_message(), "You died!");
    }

    #[test]
    fn level_up_blocks_until_resolved() {
        let content = TestContent::new();
        let mut arena = Arena::new(&content, 8, 8, Position::new(2, 2));
        grant_xp(&mut arena.state, 350);

        let mut engine = GameEngine::new(&mut arena.state);
        let outcome = engine
            .submit(content.env(), &Action::wait(EntityId::PLAYER))
            .unwrap();
        assert_eq!(outcome, TurnOutcome::LevelUpPending);
        assert_eq!(
            engine.submit(content.env(), &Action::wait(EntityId::PLAYER)),
            Err(ExecuteError::LevelUpPending)
        );

        engine
            .choose_level_up(content.env(), LevelUpChoice::MaxHp)
            .unwrap();
        assert_eq!(engine.phase(), TurnPhase::AwaitingPlayerInput);
        assert_eq!(
            engine.choose_level_up(content.env(), LevelUpChoice::Power),
            Err(ExecuteError::NoLevelUpPending)
        );

        let actor = arena.state.player_actor();
        assert_eq!(actor.level.current_level(), 2);
        assert_eq!(actor.fighter.max_hp(), 50);
        assert_eq!(actor.fighter.hp(), 50);
        assert_eq!(arena.last_message(), "Your health improves!");
    }

    #[test]
    fn banked_experience_keeps_leveling() {
        let content = TestContent::new();
        let mut arena = Arena::new(&content, 8, 8, Position::new(2, 2));
        // 350 for level 2, then 500 for level 3
        grant_xp(&mut arena.state, 900);
        arena.state.turn.phase = TurnPhase::LevelingUp;

        let mut engine = GameEngine::new(&mut arena.state);
        engine
            .choose_level_up(content.env(), LevelUpChoice::Power)
            .unwrap();
        assert_eq!(engine.phase(), TurnPhase::LevelingUp);
        engine
            .choose_level_up(content.env(), LevelUpChoice::Defense)
            .unwrap();
        assert_eq!(engine.phase(), TurnPhase::AwaitingPlayerInput);

        let actor = arena.state.player_actor();
        assert_eq!(actor.fighter.base_power(), 3);
        assert_eq!(actor.fighter.base_defense(), 2);
        assert_eq!(actor.level.current_xp(), 50);
    }

    #[test]
    fn only_the_player_submits_actions() {
        let content = TestContent::new();
        let mut arena = Arena::new(&content, 8, 8, Position::new(2, 2));
        let orc = arena.spawn_monster(&content, "orc", Position::new(5, 5));
        let result = GameEngine::new(&mut arena.state).submit(content.env(), &Action::wait(orc));
        assert_eq!(result, Err(ExecuteError::ActorNotPlayer { actor: orc }));
    }

    #[test]
    fn stairs_require_standing_on_them() {
        let content = TestContent::new();
        let mut arena = Arena::new(&content, 8, 8, Position::new(2, 2));
        let outcome = GameEngine::new(&mut arena.state)
            .submit(content.env(), &Action::take_stairs(EntityId::PLAYER))
            .unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::Rejected {
                reason: ActionError::NoStairs
            }
        );
        assert_eq!(arena.last_message(), "There are no stairs here.");
    }

    #[test]
    fn taking_the_stairs_generates_a_larger_floor() {
        let content = TestContent::new();
        let mut state = new_game(content.env(), small_params(), 21).unwrap();
        let stairs = state.map.downstairs().unwrap();
        let ids_before = state.ids.watermark();
        state.map.move_entity(EntityId::PLAYER, stairs);
        state.player_actor_mut().fighter.take_damage(5);

        let outcome = GameEngine::new(&mut state)
            .submit(content.env(), &Action::take_stairs(EntityId::PLAYER))
            .unwrap();

        assert_eq!(outcome, TurnOutcome::Completed);
        assert_eq!(state.current_floor(), 2);
        assert_eq!(state.map.width(), small_params().map_width + 10);
        assert_eq!(state.map.height(), small_params().map_height + 10);
        assert_eq!(state.player_actor().fighter.hp(), 25);
        assert!(state.ids.watermark() >= ids_before);
        assert!(state.map.is_visible(state.player_position()));
        assert!(
            state
                .messages
                .messages()
                .iter()
                .any(|m| m.text == "You descend the staircase.")
        );
        state.validate().unwrap();
    }
}
