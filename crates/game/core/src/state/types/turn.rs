use strum::{Display, IntoStaticStr};

/// Phase of the turn cycle.
///
/// Only `AwaitingPlayerInput`, `LevelingUp` and `GameOver` are ever observed
/// between engine calls; the other phases exist while a turn is running and
/// show up in logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Display, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TurnPhase {
    #[default]
    AwaitingPlayerInput,
    ExecutingAction,
    ResolvingEnemyTurns,
    RecomputingVisibility,
    /// Blocking: the player must pick an attribute before acting again.
    LevelingUp,
    /// Terminal: the player is dead.
    GameOver,
}

impl TurnPhase {
    /// Phases that are valid resting points between engine calls.
    pub const fn is_settled(self) -> bool {
        matches!(
            self,
            Self::AwaitingPlayerInput | Self::LevelingUp | Self::GameOver
        )
    }
}

/// Turn bookkeeping persisted with the game state.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    pub phase: TurnPhase,

    /// Number of turns that consumed game time (rejected actions do not count).
    pub turn_count: u64,
}

impl TurnState {
    pub fn new() -> Self {
        Self::default()
    }
}
