//! Outer game loop.
//!
//! [`App`] reads one line per step, translates it with the current
//! [`UiState`], runs the matching dispatch function and applies the returned
//! [`LoopControl`]. Leaving a game (menu, restart, quit) goes through
//! [`GameSession::conclude`], which decides whether the save is written or
//! removed.

use std::io::{BufRead, Write};

use anyhow::Result;
use game_core::{Action, EntityId, Position, TurnOutcome, TurnPhase};
use runtime::{GameSession, LoopControl, OracleManager, RuntimeConfig, StateRepository};
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::input::{Command, InputHandler};
use crate::render;
use crate::state::{InventoryPurpose, UiState};

pub struct App {
    cli: CliConfig,
    runtime: RuntimeConfig,
    oracles: OracleManager,
    repo: Box<dyn StateRepository>,
    input: InputHandler,
    session: Option<GameSession>,
    ui: UiState,
    /// One-off line shown above the next screen (menu notices).
    notice: Option<String>,
}

impl App {
    pub fn new(
        cli: CliConfig,
        runtime: RuntimeConfig,
        oracles: OracleManager,
        repo: Box<dyn StateRepository>,
    ) -> Self {
        let input = InputHandler::new(cli.keymap.clone());
        Self {
            cli,
            runtime,
            oracles,
            repo,
            input,
            session: None,
            ui: UiState::MainMenu,
            notice: None,
        }
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Runs until the player quits or input ends.
    ///
    /// End of input behaves like closing the window: a live game is saved.
    pub fn run<R: BufRead, W: Write>(&mut self, mut reader: R, mut out: W) -> Result<()> {
        let mut line = String::new();
        loop {
            self.render(&mut out)?;
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                self.leave(LoopControl::ReturnToMenu)?;
                info!("input closed");
                return Ok(());
            }

            let command = self.input.translate(&line, &self.ui);
            let control = self.dispatch(command)?;
            if control == LoopControl::QuitWithoutSaving {
                self.leave(control)?;
                return Ok(());
            }
            self.apply(control)?;
        }
    }

    fn dispatch(&mut self, command: Command) -> Result<LoopControl> {
        match self.ui.clone() {
            UiState::MainMenu => self.main_menu(command),
            UiState::Playing => self.playing(command),
            UiState::Inventory(purpose) => self.inventory(purpose, command),
            UiState::Targeting { item, cursor } => self.targeting(item, cursor, command),
            UiState::LevelUp => self.level_up(command),
            UiState::GameOver => Ok(self.game_over(command)),
        }
    }

    fn apply(&mut self, control: LoopControl) -> Result<()> {
        match control {
            LoopControl::Continue | LoopControl::QuitWithoutSaving => {}
            LoopControl::ReturnToMenu => self.leave(control)?,
            LoopControl::Restart => {
                self.leave(control)?;
                self.start_new_game()?;
            }
        }
        Ok(())
    }

    /// Ends the current game, if any, and shows the main menu.
    fn leave(&mut self, control: LoopControl) -> Result<()> {
        if let Some(session) = self.session.take() {
            session.conclude(control, self.repo.as_ref())?;
        }
        self.ui = UiState::MainMenu;
        Ok(())
    }

    fn start_new_game(&mut self) -> Result<()> {
        let session = GameSession::from_config(self.oracles.clone(), &self.runtime)?;
        self.session = Some(session);
        self.ui = UiState::Playing;
        Ok(())
    }

    // ---- per-state dispatch ----

    fn main_menu(&mut self, command: Command) -> Result<LoopControl> {
        match command {
            Command::NewGame => self.start_new_game()?,
            Command::Continue => {
                match GameSession::load(self.oracles.clone(), self.repo.as_ref()) {
                    Ok(Some(session)) => {
                        self.ui = ui_for_phase(session.phase());
                        self.session = Some(session);
                    }
                    Ok(None) => self.notice = Some("No saved game to load.".into()),
                    Err(error) => {
                        warn!(%error, "failed to load saved game");
                        self.notice = Some(format!("Failed to load save: {error}"));
                    }
                }
            }
            Command::Quit => return Ok(LoopControl::QuitWithoutSaving),
            _ => {}
        }
        Ok(LoopControl::Continue)
    }

    fn playing(&mut self, command: Command) -> Result<LoopControl> {
        let player = EntityId::PLAYER;
        let action = match command {
            Command::Direction(direction) => Action::bump(player, direction),
            Command::Wait => Action::wait(player),
            Command::Pickup => Action::pickup(player),
            Command::Descend => Action::take_stairs(player),
            Command::OpenInventory(purpose) => {
                self.ui = UiState::Inventory(purpose);
                return Ok(LoopControl::Continue);
            }
            Command::Menu => return Ok(LoopControl::ReturnToMenu),
            Command::Quit => {
                // Closing the game from play keeps the save, like closing the window.
                self.leave(LoopControl::ReturnToMenu)?;
                return Ok(LoopControl::QuitWithoutSaving);
            }
            _ => return Ok(LoopControl::Continue),
        };
        self.submit(&action)?;
        Ok(LoopControl::Continue)
    }

    fn inventory(&mut self, purpose: InventoryPurpose, command: Command) -> Result<LoopControl> {
        let Command::Select(index) = command else {
            if command == Command::Cancel {
                self.ui = UiState::Playing;
            }
            return Ok(LoopControl::Continue);
        };
        let Some(session) = self.session.as_ref() else {
            self.ui = UiState::MainMenu;
            return Ok(LoopControl::Continue);
        };
        let state = session.state();
        let Some(item) = state.player_actor().inventory.items().get(index) else {
            self.notice = Some("Invalid entry.".into());
            return Ok(LoopControl::Continue);
        };

        let player = EntityId::PLAYER;
        let action = match purpose {
            InventoryPurpose::Use => {
                let needs_target = item
                    .as_item()
                    .and_then(|it| it.consumable)
                    .is_some_and(|consumable| consumable.needs_target());
                if needs_target {
                    self.ui = UiState::Targeting {
                        item: item.id,
                        cursor: state.player_position(),
                    };
                    return Ok(LoopControl::Continue);
                }
                Action::use_item(player, item.id, None)
            }
            InventoryPurpose::Drop => Action::drop_item(player, item.id),
            InventoryPurpose::Equip => Action::equip(player, item.id),
        };
        self.submit(&action)?;
        Ok(LoopControl::Continue)
    }

    fn targeting(
        &mut self,
        item: EntityId,
        cursor: Position,
        command: Command,
    ) -> Result<LoopControl> {
        match command {
            Command::Direction(direction) => {
                if let Some(session) = self.session.as_ref() {
                    let next = direction.apply(cursor);
                    if session.state().map.in_bounds(next) {
                        self.ui = UiState::Targeting { item, cursor: next };
                    }
                }
            }
            Command::Confirm => {
                self.submit(&Action::use_item(EntityId::PLAYER, item, Some(cursor)))?;
            }
            Command::Cancel => self.ui = UiState::Playing,
            _ => {}
        }
        Ok(LoopControl::Continue)
    }

    fn level_up(&mut self, command: Command) -> Result<LoopControl> {
        if let Command::Choose(choice) = command
            && let Some(session) = self.session.as_mut()
        {
            session.choose_level_up(choice)?;
            self.ui = ui_for_phase(session.phase());
        }
        Ok(LoopControl::Continue)
    }

    fn game_over(&self, command: Command) -> LoopControl {
        match command {
            Command::NewGame => LoopControl::Restart,
            Command::Menu => LoopControl::ReturnToMenu,
            Command::Quit => LoopControl::QuitWithoutSaving,
            _ => LoopControl::Continue,
        }
    }

    /// Submits a player action and moves to the screen the outcome calls for.
    fn submit(&mut self, action: &Action) -> Result<()> {
        let Some(session) = self.session.as_mut() else {
            self.ui = UiState::MainMenu;
            return Ok(());
        };
        let outcome = session.submit(action)?;
        self.ui = match outcome {
            TurnOutcome::Rejected { .. } if matches!(self.ui, UiState::Targeting { .. }) => {
                self.ui.clone()
            }
            TurnOutcome::Completed | TurnOutcome::Rejected { .. } => UiState::Playing,
            TurnOutcome::PlayerDied => UiState::GameOver,
            TurnOutcome::LevelUpPending => UiState::LevelUp,
        };
        Ok(())
    }

    // ---- output ----

    fn render<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let mut lines = Vec::new();
        if let Some(notice) = self.notice.take() {
            lines.push(notice);
        }

        match (&self.ui, self.session.as_ref()) {
            (UiState::MainMenu, _) | (_, None) => {
                lines.push("=== DUNGEON ===".into());
                lines.push("[n] Play a new game".into());
                lines.push("[c] Continue last game".into());
                lines.push("[q] Quit".into());
            }
            (ui, Some(session)) => {
                let state = session.state();
                let cursor = match ui {
                    UiState::Targeting { cursor, .. } => Some(*cursor),
                    _ => None,
                };
                let center = cursor.unwrap_or_else(|| state.player_position());
                lines.extend(render::map_lines(
                    state,
                    center,
                    self.cli.view_width,
                    self.cli.view_height,
                    cursor,
                ));
                lines.push(render::status_line(state));
                lines.extend(render::message_lines(state, self.cli.message_lines));

                match ui {
                    UiState::Inventory(purpose) => {
                        lines.extend(render::inventory_lines(state, *purpose));
                    }
                    UiState::Targeting { cursor, .. } => {
                        lines.push(format!(
                            "Target: {}  [{}] or Enter to confirm, anything else cancels",
                            render::names_at(state, *cursor),
                            self.cli.keymap.confirm
                        ));
                    }
                    UiState::LevelUp => {
                        lines.push("Congratulations! You level up! Select an attribute:".into());
                        lines.push("[1] Constitution (+HP)".into());
                        lines.push("[2] Strength (+ATK)".into());
                        lines.push("[3] Agility (+DEF)".into());
                    }
                    UiState::GameOver => {
                        lines.push(format!("You died. Score: {}", session.score()));
                        lines.push("[n] New game  [m] Main menu  [q] Quit".into());
                    }
                    UiState::MainMenu | UiState::Playing => {}
                }
            }
        }

        for line in lines {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        Ok(())
    }
}

fn ui_for_phase(phase: TurnPhase) -> UiState {
    match phase {
        TurnPhase::LevelingUp => UiState::LevelUp,
        TurnPhase::GameOver => UiState::GameOver,
        _ => UiState::Playing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::GenerationParams;
    use runtime::InMemoryStateRepo;
    use std::sync::Arc;

    fn runtime_config() -> RuntimeConfig {
        RuntimeConfig {
            generation: GenerationParams {
                map_width: 40,
                map_height: 30,
                max_rooms: 6,
                room_min_size: 4,
                room_max_size: 7,
                viewport_width: 0,
                viewport_height: 0,
            },
            seed: Some(99),
            ..RuntimeConfig::default()
        }
    }

    /// Repository shared between the app under test and the assertions.
    struct Shared(Arc<InMemoryStateRepo>);

    impl StateRepository for Shared {
        fn save(&self, state: &game_core::GameState) -> runtime::repository::Result<()> {
            self.0.save(state)
        }
        fn load(&self) -> runtime::repository::Result<Option<game_core::GameState>> {
            self.0.load()
        }
        fn exists(&self) -> bool {
            self.0.exists()
        }
        fn delete(&self) -> runtime::repository::Result<()> {
            self.0.delete()
        }
    }

    fn app(repo: &Arc<InMemoryStateRepo>) -> App {
        App::new(
            CliConfig::default(),
            runtime_config(),
            OracleManager::standard(),
            Box::new(Shared(Arc::clone(repo))),
        )
    }

    fn run(app: &mut App, script: &str) -> String {
        let mut out = Vec::new();
        app.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn continue_without_a_save_stays_in_the_menu() {
        let repo = Arc::new(InMemoryStateRepo::new());
        let mut app = app(&repo);
        let output = run(&mut app, "c\nq\n");

        assert!(output.contains("No saved game to load."));
        assert_eq!(app.ui(), &UiState::MainMenu);
        assert!(!repo.exists());
    }

    #[test]
    fn returning_to_the_menu_saves_and_continue_resumes() {
        let repo = Arc::new(InMemoryStateRepo::new());
        let mut first = app(&repo);
        run(&mut first, "n\n.\n.\nm\nq\n");
        assert!(repo.exists());
        assert!(first.session().is_none());

        let mut second = app(&repo);
        run(&mut second, "c\n");
        // end of input saves the resumed game again
        let saved = repo.load().unwrap().unwrap();
        assert_eq!(saved.turn.turn_count, 2);
    }

    #[test]
    fn quitting_from_play_keeps_the_save() {
        let repo = Arc::new(InMemoryStateRepo::new());
        let mut app = app(&repo);
        run(&mut app, "n\n.\nQ\n");
        assert_eq!(repo.load().unwrap().unwrap().turn.turn_count, 1);
    }

    #[test]
    fn inventory_opens_and_closes() {
        let repo = Arc::new(InMemoryStateRepo::new());
        let mut app = app(&repo);
        let output = run(&mut app, "n\ni\n\nm\nq\n");
        assert!(output.contains("Select an item to use"));
        assert!(output.contains("(Empty)"));
    }

    #[test]
    fn restarting_a_live_game_does_not_save_it() {
        let repo = Arc::new(InMemoryStateRepo::new());
        let mut app = app(&repo);
        app.dispatch(Command::NewGame).unwrap();
        assert_eq!(app.ui(), &UiState::Playing);

        app.apply(LoopControl::Restart).unwrap();
        assert_eq!(app.ui(), &UiState::Playing);
        assert!(app.session().is_some());
        assert!(!repo.exists());
    }
}
