//! Action rejection errors.
//!
//! Most variants are "impossible" conditions: the game rules reject the action,
//! the display text is shown to the player and no turn passes. The remaining
//! variants indicate a broken caller or content and are not recoverable.

use crate::dungeon::GenerationError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::EntityId;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    // ---- recoverable ----
    #[error("That way is blocked.")]
    Blocked,

    #[error("Nothing to attack.")]
    NothingToAttack,

    #[error("There is nothing here to pick up.")]
    NothingToPickUp,

    #[error("Your inventory is full.")]
    InventoryFull,

    #[error("Your health is already full.")]
    HealthFull,

    #[error("The {0} cannot be used.")]
    NotUsable(String),

    #[error("The {0} cannot be equipped.")]
    NotEquippable(String),

    #[error("No enemy is close enough to strike.")]
    NoTargetInRange,

    #[error("You must select a target.")]
    TargetRequired,

    #[error("You cannot target an area that you cannot see.")]
    TargetNotVisible,

    #[error("You must select an enemy to target.")]
    NoActorAtTarget,

    #[error("You cannot confuse yourself!")]
    CannotTargetSelf,

    #[error("There are no targets in the radius.")]
    NoTargetsInRadius,

    #[error("There are no stairs here.")]
    NoStairs,

    // ---- caller or content bugs ----
    #[error("actor {0} not found on the active map")]
    ActorNotFound(EntityId),

    #[error("entity {0} is not an actor")]
    NotAnActor(EntityId),

    #[error("actor {0} is dead")]
    ActorDead(EntityId),

    #[error("item {item} is not carried by {actor}")]
    ItemNotCarried { actor: EntityId, item: EntityId },

    #[error("only the player can take the stairs")]
    StairsRequirePlayer,

    #[error("floor generation failed: {0}")]
    Generation(#[from] GenerationError),
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            Blocked | NothingToAttack | NothingToPickUp | InventoryFull | HealthFull
            | NotUsable(_) | NotEquippable(_) | NoTargetInRange | TargetRequired
            | TargetNotVisible | NoActorAtTarget | CannotTargetSelf | NoTargetsInRadius
            | NoStairs => ErrorSeverity::Recoverable,

            ActorDead(_) | ItemNotCarried { .. } | StairsRequirePlayer => {
                ErrorSeverity::Validation
            }

            ActorNotFound(_) | NotAnActor(_) => ErrorSeverity::Internal,

            Generation(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            Blocked => "ACTION_BLOCKED",
            NothingToAttack => "ACTION_NOTHING_TO_ATTACK",
            NothingToPickUp => "ACTION_NOTHING_TO_PICK_UP",
            InventoryFull => "ACTION_INVENTORY_FULL",
            HealthFull => "ACTION_HEALTH_FULL",
            NotUsable(_) => "ACTION_NOT_USABLE",
            NotEquippable(_) => "ACTION_NOT_EQUIPPABLE",
            NoTargetInRange => "ACTION_NO_TARGET_IN_RANGE",
            TargetRequired => "ACTION_TARGET_REQUIRED",
            TargetNotVisible => "ACTION_TARGET_NOT_VISIBLE",
            NoActorAtTarget => "ACTION_NO_ACTOR_AT_TARGET",
            CannotTargetSelf => "ACTION_CANNOT_TARGET_SELF",
            NoTargetsInRadius => "ACTION_NO_TARGETS_IN_RADIUS",
            NoStairs => "ACTION_NO_STAIRS",
            ActorNotFound(_) => "ACTION_ACTOR_NOT_FOUND",
            NotAnActor(_) => "ACTION_NOT_AN_ACTOR",
            ActorDead(_) => "ACTION_ACTOR_DEAD",
            ItemNotCarried { .. } => "ACTION_ITEM_NOT_CARRIED",
            StairsRequirePlayer => "ACTION_STAIRS_REQUIRE_PLAYER",
            Generation(_) => "ACTION_GENERATION_FAILED",
        }
    }
}
