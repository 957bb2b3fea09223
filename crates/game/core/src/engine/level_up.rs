use tracing::info;

use crate::env::GameEnv;
use crate::state::{LevelUpChoice, MessageKind, TurnPhase};

use super::{ExecuteError, GameEngine};

impl GameEngine<'_> {
    /// Resolves one pending level-up with the chosen attribute.
    ///
    /// The engine stays in `LevelingUp` if the player has banked enough
    /// experience for another level.
    pub fn choose_level_up(
        &mut self,
        env: GameEnv<'_>,
        choice: LevelUpChoice,
    ) -> Result<(), ExecuteError> {
        if self.state.turn.phase != TurnPhase::LevelingUp
            || !self.state.player_actor().level.requires_level_up()
        {
            return Err(ExecuteError::NoLevelUpPending);
        }

        let config = *env.config();
        let actor = self.state.player_actor_mut();
        let text = match choice {
            LevelUpChoice::MaxHp => {
                actor.fighter.increase_max_hp(config.level_up_hp);
                "Your health improves!"
            }
            LevelUpChoice::Power => {
                actor.fighter.increase_power(config.level_up_power);
                "You feel stronger!"
            }
            LevelUpChoice::Defense => {
                actor.fighter.increase_defense(config.level_up_defense);
                "Your movements are getting swifter!"
            }
        };
        actor.level.increase_level();
        let level = actor.level.current_level();
        let still_pending = actor.level.requires_level_up();

        info!(level, %choice, "player leveled up");
        self.state.messages.add(text, MessageKind::LevelUp);
        self.state.turn.phase = if still_pending {
            TurnPhase::LevelingUp
        } else {
            TurnPhase::AwaitingPlayerInput
        };
        Ok(())
    }
}
