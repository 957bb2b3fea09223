//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (`ActionError`, `ExecuteError`, `OracleError`) live
//! next to the code that raises them and implement [`GameError`] so callers can
//! route them by severity.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the action was rejected by game rules; no turn passes
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistencies that require investigation
/// - **Fatal**: unrecoverable errors indicating corrupted game state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Rejected by game rules and surfaced to the player as a message.
    ///
    /// Examples: destination blocked, nothing to pick up
    Recoverable,

    /// Invalid input, should not retry without changes.
    ///
    /// Examples: acting while a level-up is pending, unknown item
    Validation,

    /// Unexpected state inconsistency. These indicate bugs.
    Internal,

    /// Game state corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for this error variant, for logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
