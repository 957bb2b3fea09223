//! Consistency errors reported by [`GameState::validate`](super::GameState::validate).

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, Position, TurnPhase};

/// A loaded or constructed state violates a structural invariant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    #[error("player entity is missing from the active map")]
    MissingPlayer,

    #[error("player entity is not an actor")]
    PlayerNotActor,

    #[error("entity {id} at {position} lies outside the {width}x{height} map")]
    EntityOutOfBounds {
        id: EntityId,
        position: Position,
        width: u32,
        height: u32,
    },

    #[error("entity id {0} appears more than once")]
    DuplicateEntityId(EntityId),

    #[error("entity id {id} is not below the allocator watermark {next}")]
    EntityIdNotAllocated { id: EntityId, next: u32 },

    #[error("map grids do not match {width}x{height}")]
    GridSizeMismatch { width: u32, height: u32 },

    #[error("tile {0} is visible but not explored")]
    VisibleNotExplored(Position),

    #[error("fighter {id} has {hp} hp over a maximum of {max_hp}")]
    HpOutOfRange { id: EntityId, hp: u32, max_hp: u32 },

    #[error("turn phase {0} is not a resting phase")]
    UnsettledPhase(TurnPhase),

    #[error("inventory of {id} holds {len} items over a capacity of {capacity}")]
    InventoryOverCapacity {
        id: EntityId,
        len: usize,
        capacity: usize,
    },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            MissingPlayer => "STATE_MISSING_PLAYER",
            PlayerNotActor => "STATE_PLAYER_NOT_ACTOR",
            EntityOutOfBounds { .. } => "STATE_ENTITY_OUT_OF_BOUNDS",
            DuplicateEntityId(_) => "STATE_DUPLICATE_ENTITY_ID",
            EntityIdNotAllocated { .. } => "STATE_ENTITY_ID_NOT_ALLOCATED",
            GridSizeMismatch { .. } => "STATE_GRID_SIZE_MISMATCH",
            VisibleNotExplored(_) => "STATE_VISIBLE_NOT_EXPLORED",
            HpOutOfRange { .. } => "STATE_HP_OUT_OF_RANGE",
            UnsettledPhase(_) => "STATE_UNSETTLED_PHASE",
            InventoryOverCapacity { .. } => "STATE_INVENTORY_OVER_CAPACITY",
        }
    }
}
