use crate::action::{ActionError, ActionTransition, Direction, living_actor};
use crate::combat::resolve_attack;
use crate::env::GameEnv;
use crate::state::{EntityId, GameState, Position};

/// Step one tile in a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub actor: EntityId,
    pub direction: Direction,
}

impl MoveAction {
    pub fn new(actor: EntityId, direction: Direction) -> Self {
        Self { actor, direction }
    }

    fn destination(&self, state: &GameState) -> Result<Position, ActionError> {
        Ok(self.direction.apply(living_actor(state, self.actor)?.position))
    }
}

impl ActionTransition for MoveAction {
    type Error = ActionError;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let destination = self.destination(state)?;
        // Out of bounds, walls and blocking entities all read the same to the player.
        if !state.map.is_passable(destination) {
            return Err(ActionError::Blocked);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let destination = self.destination(state)?;
        state.map.move_entity(self.actor, destination);
        Ok(())
    }
}

/// Attack the actor standing in a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeleeAction {
    pub actor: EntityId,
    pub direction: Direction,
}

impl MeleeAction {
    pub fn new(actor: EntityId, direction: Direction) -> Self {
        Self { actor, direction }
    }

    fn target(&self, state: &GameState) -> Result<EntityId, ActionError> {
        let destination = self.direction.apply(living_actor(state, self.actor)?.position);
        state
            .map
            .actor_at(destination)
            .map(|target| target.id)
            .ok_or(ActionError::NothingToAttack)
    }
}

impl ActionTransition for MeleeAction {
    type Error = ActionError;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        self.target(state).map(|_| ())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let target = self.target(state)?;
        resolve_attack(state, self.actor, target).ok_or(ActionError::NotAnActor(target))?;
        Ok(())
    }
}

/// Direction input: attacks a living actor in the way, otherwise moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BumpAction {
    pub actor: EntityId,
    pub direction: Direction,
}

impl BumpAction {
    pub fn new(actor: EntityId, direction: Direction) -> Self {
        Self { actor, direction }
    }

    fn has_target(&self, state: &GameState) -> Result<bool, ActionError> {
        let destination = self.direction.apply(living_actor(state, self.actor)?.position);
        Ok(state.map.actor_at(destination).is_some())
    }
}

impl ActionTransition for BumpAction {
    type Error = ActionError;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        living_actor(state, self.actor).map(|_| ())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if self.has_target(state)? {
            MeleeAction::new(self.actor, self.direction).perform(state, env)
        } else {
            MoveAction::new(self.actor, self.direction).perform(state, env)
        }
    }
}

/// Pass the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaitAction {
    pub actor: EntityId,
}

impl WaitAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for WaitAction {
    type Error = ActionError;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn apply(&self, _state: &mut GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}
