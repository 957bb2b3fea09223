//! Actions an actor can take during its turn.
//!
//! Each variant is a small struct implementing [`ActionTransition`]:
//! `pre_validate` checks the rules against the current state, `apply` mutates
//! it and `post_validate` checks what must hold afterwards. A rule rejection
//! is an [`ActionError`] with recoverable severity; its display text is the
//! message shown to the player.
//!
//! - `movement`: move, melee, bump, wait
//! - `inventory`: pick up, drop, equip toggle
//! - `item`: use a consumable
//! - `stairs`: descend to the next floor

pub mod error;
pub mod inventory;
pub mod item;
pub mod movement;
pub mod stairs;

pub use error::ActionError;
pub use inventory::{DropAction, EquipAction, PickupAction};
pub use item::UseItemAction;
pub use movement::{BumpAction, MeleeAction, MoveAction, WaitAction};
pub use stairs::TakeStairsAction;

use strum::{Display, EnumIter};

use crate::env::GameEnv;
use crate::state::{Entity, EntityId, GameState, Position};

/// Defines how a concrete action variant mutates game state.
pub trait ActionTransition {
    type Error;

    /// Returns the entity performing this action.
    fn actor(&self) -> EntityId;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly. Implementations
    /// may assume that `pre_validate` has already run successfully.
    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<(), Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Runs all three phases in order.
    fn perform(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        self.pre_validate(state, env)?;
        self.apply(state, env)?;
        self.post_validate(state, env)
    }
}

/// One of the eight king-move directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Offset in screen coordinates (`y` grows downward).
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Direction of a single step from `from` to an adjacent `to`.
    pub fn between(from: Position, to: Position) -> Option<Self> {
        let delta = (to.x - from.x, to.y - from.y);
        Self::ALL.into_iter().find(|direction| direction.delta() == delta)
    }

    pub const fn apply(self, position: Position) -> Position {
        let (dx, dy) = self.delta();
        position.offset(dx, dy)
    }
}

/// Every action an actor can submit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Move(MoveAction),
    Melee(MeleeAction),
    Bump(BumpAction),
    Wait(WaitAction),
    Pickup(PickupAction),
    Drop(DropAction),
    Equip(EquipAction),
    UseItem(UseItemAction),
    TakeStairs(TakeStairsAction),
}

impl Action {
    pub fn movement(actor: EntityId, direction: Direction) -> Self {
        Self::Move(MoveAction::new(actor, direction))
    }

    pub fn melee(actor: EntityId, direction: Direction) -> Self {
        Self::Melee(MeleeAction::new(actor, direction))
    }

    /// Attack if a living actor stands in `direction`, otherwise move.
    pub fn bump(actor: EntityId, direction: Direction) -> Self {
        Self::Bump(BumpAction::new(actor, direction))
    }

    pub fn wait(actor: EntityId) -> Self {
        Self::Wait(WaitAction::new(actor))
    }

    pub fn pickup(actor: EntityId) -> Self {
        Self::Pickup(PickupAction::new(actor))
    }

    pub fn drop_item(actor: EntityId, item: EntityId) -> Self {
        Self::Drop(DropAction::new(actor, item))
    }

    pub fn equip(actor: EntityId, item: EntityId) -> Self {
        Self::Equip(EquipAction::new(actor, item))
    }

    pub fn use_item(actor: EntityId, item: EntityId, target: Option<Position>) -> Self {
        Self::UseItem(UseItemAction::new(actor, item, target))
    }

    pub fn take_stairs(actor: EntityId) -> Self {
        Self::TakeStairs(TakeStairsAction::new(actor))
    }

    /// Returns the entity ID performing this action.
    pub fn actor(&self) -> EntityId {
        match self {
            Action::Move(action) => action.actor(),
            Action::Melee(action) => action.actor(),
            Action::Bump(action) => action.actor(),
            Action::Wait(action) => action.actor(),
            Action::Pickup(action) => action.actor(),
            Action::Drop(action) => action.actor(),
            Action::Equip(action) => action.actor(),
            Action::UseItem(action) => action.actor(),
            Action::TakeStairs(action) => action.actor(),
        }
    }

    /// Stable name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Move(_) => "move",
            Action::Melee(_) => "melee",
            Action::Bump(_) => "bump",
            Action::Wait(_) => "wait",
            Action::Pickup(_) => "pickup",
            Action::Drop(_) => "drop",
            Action::Equip(_) => "equip",
            Action::UseItem(_) => "use_item",
            Action::TakeStairs(_) => "take_stairs",
        }
    }
}

/// Looks up a living actor entity.
pub(crate) fn living_actor(state: &GameState, id: EntityId) -> Result<&Entity, ActionError> {
    let entity = state.map.entity(id).ok_or(ActionError::ActorNotFound(id))?;
    let actor = entity.as_actor().ok_or(ActionError::NotAnActor(id))?;
    if !actor.is_alive() {
        return Err(ActionError::ActorDead(id));
    }
    Ok(entity)
}
