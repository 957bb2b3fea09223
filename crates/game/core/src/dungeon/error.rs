use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};

/// Errors raised while generating a floor.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GenerationError {
    #[error("room size bounds are inverted: min {min} > max {max}")]
    InvalidRoomBounds { min: u32, max: u32 },

    #[error("rooms need at least 2 tiles per side, got {min}")]
    RoomTooSmall { min: u32 },

    #[error("map dimensions must be non-zero")]
    EmptyMap,

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for GenerationError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidRoomBounds { .. } | Self::RoomTooSmall { .. } | Self::EmptyMap => {
                ErrorSeverity::Validation
            }
            Self::Oracle(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRoomBounds { .. } => "GENERATION_INVALID_ROOM_BOUNDS",
            Self::RoomTooSmall { .. } => "GENERATION_ROOM_TOO_SMALL",
            Self::EmptyMap => "GENERATION_EMPTY_MAP",
            Self::Oracle(error) => error.error_code(),
        }
    }
}
