use tracing::{trace, warn};

use crate::ai;
use crate::env::GameEnv;
use crate::error::GameError;
use crate::state::{EntityId, TurnPhase};

use super::GameEngine;
use super::transition::execute_transition;

impl GameEngine<'_> {
    /// Gives every living non-player actor one activation, in map order.
    ///
    /// Enemy actions that fail are dropped: the actor simply loses its turn.
    /// Stops early once the player is dead.
    pub(super) fn handle_enemy_turns(&mut self, env: &GameEnv<'_>) {
        self.state.turn.phase = TurnPhase::ResolvingEnemyTurns;

        let actors: Vec<EntityId> = self
            .state
            .map
            .actors()
            .filter(|entity| !entity.id.is_player())
            .map(|entity| entity.id)
            .collect();

        for id in actors {
            if !self.state.is_player_alive() {
                break;
            }
            // An earlier activation may have killed this actor.
            if !self.state.map.entity(id).is_some_and(|e| e.is_alive()) {
                continue;
            }
            let Some(action) = ai::plan_turn(self.state, id) else {
                continue;
            };
            trace!(actor = %id, action = action.name(), "enemy activation");

            if let Err(error) = execute_transition(&action, self.state, env)
                && !error.severity().is_recoverable()
            {
                warn!(actor = %id, error = %error, "enemy action failed");
            }
        }
    }
}
