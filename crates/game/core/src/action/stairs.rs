use crate::action::{ActionError, ActionTransition, living_actor};
use crate::dungeon;
use crate::env::GameEnv;
use crate::state::{EntityId, GameState, MessageKind};

/// Descend to the next floor from the down-stairs tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TakeStairsAction {
    pub actor: EntityId,
}

impl TakeStairsAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for TakeStairsAction {
    type Error = ActionError;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if !self.actor.is_player() {
            return Err(ActionError::StairsRequirePlayer);
        }
        let position = living_actor(state, self.actor)?.position;
        if state.map.downstairs() != Some(position) {
            return Err(ActionError::NoStairs);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        dungeon::descend(state, *env)?;
        state
            .messages
            .add("You descend the staircase.", MessageKind::Descend);
        Ok(())
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.map.entity(self.actor).is_none() {
            return Err(ActionError::ActorNotFound(self.actor));
        }
        Ok(())
    }
}
