//! Error types for the turn pipeline.

use crate::action::ActionError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::EntityId;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while driving a turn through the game engine.
///
/// Recoverable action rejections never reach the caller as an `Err`; they are
/// turned into an "Impossible" message and a [`super::TurnOutcome::Rejected`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("{action} action failed: {source}")]
    Action {
        action: &'static str,
        source: TransitionPhaseError<ActionError>,
    },

    #[error("the game is over")]
    GameOver,

    #[error("a level-up choice must be made first")]
    LevelUpPending,

    #[error("no level-up is pending")]
    NoLevelUpPending,

    #[error("actor {actor} cannot submit actions; only the player can")]
    ActorNotPlayer { actor: EntityId },
}

impl ExecuteError {
    pub(super) fn action(
        action: &'static str,
    ) -> impl Fn(TransitionPhaseError<ActionError>) -> Self {
        move |source| Self::Action { action, source }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Action { source, .. } => source.error.severity(),
            Self::GameOver
            | Self::LevelUpPending
            | Self::NoLevelUpPending
            | Self::ActorNotPlayer { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Action { source, .. } => source.error.error_code(),
            Self::GameOver => "EXECUTE_GAME_OVER",
            Self::LevelUpPending => "EXECUTE_LEVEL_UP_PENDING",
            Self::NoLevelUpPending => "EXECUTE_NO_LEVEL_UP_PENDING",
            Self::ActorNotPlayer { .. } => "EXECUTE_ACTOR_NOT_PLAYER",
        }
    }
}
