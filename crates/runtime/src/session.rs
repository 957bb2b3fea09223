//! A single play session.
//!
//! [`GameSession`] owns the live [`GameState`] together with the content it
//! was generated from. Every state change goes through the core's
//! [`GameEngine`]; the session adds persistence and the bookkeeping the outer
//! loop needs when a game is suspended or finished.

use game_core::{
    Action, GameConfig, GameEngine, GameEnv, GameState, GenerationParams,
    LevelUpChoice, TurnOutcome, TurnPhase, new_game,
};
use tracing::{debug, info};

use crate::config::RuntimeConfig;
use crate::control::LoopControl;
use crate::error::{Result, RuntimeError};
use crate::oracle::OracleManager;
use crate::repository::StateRepository;

/// Rule constants live in the state itself, so a resumed game keeps the
/// [`GameConfig`] it was started with.
pub struct GameSession {
    oracles: OracleManager,
    state: GameState,
}

impl GameSession {
    /// Generates the first floor of a new game.
    pub fn new_game(
        oracles: OracleManager,
        config: GameConfig,
        params: GenerationParams,
        seed: u64,
    ) -> Result<Self> {
        let state = new_game(oracles.as_game_env(config), params, seed)?;
        info!(seed, floor = state.current_floor(), "started new game");
        Ok(Self { oracles, state })
    }

    /// New game using the parameters and seed policy of `runtime`.
    pub fn from_config(oracles: OracleManager, runtime: &RuntimeConfig) -> Result<Self> {
        Self::new_game(
            oracles,
            runtime.game,
            runtime.generation.clone(),
            runtime.next_seed(),
        )
    }

    /// Resumes the saved game, if there is one.
    ///
    /// The saved rule constants apply, whatever the current settings say.
    pub fn load(oracles: OracleManager, repo: &dyn StateRepository) -> Result<Option<Self>> {
        let Some(state) = repo.load()? else {
            return Ok(None);
        };
        Ok(Some(Self { oracles, state }))
    }

    /// Writes the current state to `repo`.
    ///
    /// A finished game is never saved.
    pub fn save(&self, repo: &dyn StateRepository) -> Result<()> {
        if self.is_game_over() {
            return Err(RuntimeError::GameFinished);
        }
        repo.save(&self.state)?;
        Ok(())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.state.dungeon.config
    }

    pub fn env(&self) -> GameEnv<'_> {
        self.oracles.as_game_env(self.state.dungeon.config)
    }

    pub fn phase(&self) -> TurnPhase {
        self.state.turn.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase() == TurnPhase::GameOver
    }

    /// Player's score, derived from level and experience.
    pub fn score(&self) -> u64 {
        self.state.player_actor().level.score()
    }

    /// Runs one player action and the turn that follows it.
    pub fn submit(&mut self, action: &Action) -> Result<TurnOutcome> {
        let env = self.oracles.as_game_env(self.state.dungeon.config);
        let outcome = GameEngine::new(&mut self.state).submit(env, action)?;
        debug!(action = action.name(), ?outcome, "turn settled");
        if outcome == TurnOutcome::PlayerDied {
            info!(
                score = self.score(),
                turns = self.state.turn.turn_count,
                "player died"
            );
        }
        Ok(outcome)
    }

    pub fn choose_level_up(&mut self, choice: LevelUpChoice) -> Result<()> {
        let env = self.oracles.as_game_env(self.state.dungeon.config);
        GameEngine::new(&mut self.state).choose_level_up(env, choice)?;
        Ok(())
    }

    /// Applies what leaving the game means for the save.
    ///
    /// A finished game has its save removed whatever the exit path; a live
    /// game is saved only when returning to the menu.
    pub fn conclude(&self, control: LoopControl, repo: &dyn StateRepository) -> Result<()> {
        if !control.leaves_game() {
            return Ok(());
        }
        if self.is_game_over() {
            repo.delete()?;
        } else if control.saves_game() {
            self.save(repo)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryStateRepo;
    use game_core::EntityId;

    fn params() -> GenerationParams {
        GenerationParams {
            map_width: 50,
            map_height: 40,
            max_rooms: 10,
            room_min_size: 4,
            room_max_size: 8,
            viewport_width: 0,
            viewport_height: 0,
        }
    }

    fn session(seed: u64) -> GameSession {
        GameSession::new_game(OracleManager::standard(), GameConfig::default(), params(), seed)
            .unwrap()
    }

    #[test]
    fn waiting_consumes_a_turn() {
        let mut session = session(5);
        let outcome = session.submit(&Action::wait(EntityId::PLAYER)).unwrap();

        assert_eq!(outcome, TurnOutcome::Completed);
        assert_eq!(session.state().turn.turn_count, 1);
        assert_eq!(session.phase(), TurnPhase::AwaitingPlayerInput);
    }

    #[test]
    fn save_and_load_resume_the_same_game() {
        let mut session = session(11);
        session.submit(&Action::wait(EntityId::PLAYER)).unwrap();
        let repo = InMemoryStateRepo::new();
        session.save(&repo).unwrap();

        let resumed = GameSession::load(OracleManager::standard(), &repo)
            .unwrap()
            .unwrap();
        assert_eq!(resumed.state(), session.state());
    }

    #[test]
    fn resumed_game_keeps_its_rule_constants() {
        let config = GameConfig {
            fov_radius: 4,
            floor_size_increment: 3,
            ..GameConfig::default()
        };
        let session =
            GameSession::new_game(OracleManager::standard(), config, params(), 2).unwrap();
        let repo = InMemoryStateRepo::new();
        session.save(&repo).unwrap();

        let resumed = GameSession::load(OracleManager::standard(), &repo)
            .unwrap()
            .unwrap();
        assert_eq!(*resumed.config(), config);
        assert_eq!(*resumed.env().config(), config);
        assert_eq!(resumed.state().dungeon.params.map_width, params().map_width + 3);
    }

    #[test]
    fn loading_without_a_save_is_not_an_error() {
        let repo = InMemoryStateRepo::new();
        let loaded = GameSession::load(OracleManager::standard(), &repo).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn returning_to_menu_saves_and_quitting_does_not() {
        let session = session(3);
        let repo = InMemoryStateRepo::new();

        session.conclude(LoopControl::QuitWithoutSaving, &repo).unwrap();
        assert!(!repo.exists());
        session.conclude(LoopControl::Continue, &repo).unwrap();
        assert!(!repo.exists());
        session.conclude(LoopControl::ReturnToMenu, &repo).unwrap();
        assert!(repo.exists());
    }

    #[test]
    fn finished_game_deletes_the_save() {
        let mut session = session(8);
        let repo = InMemoryStateRepo::new();
        session.save(&repo).unwrap();

        session.state.player_actor_mut().fighter.set_hp(0);
        session.state.turn.phase = TurnPhase::GameOver;

        assert!(matches!(session.save(&repo), Err(RuntimeError::GameFinished)));
        session.conclude(LoopControl::ReturnToMenu, &repo).unwrap();
        assert!(!repo.exists());
    }

    #[test]
    fn finished_game_rejects_actions() {
        let mut session = session(8);
        session.state.turn.phase = TurnPhase::GameOver;

        let err = session.submit(&Action::wait(EntityId::PLAYER)).unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::Execute(game_core::ExecuteError::GameOver)
        ));
    }
}
