//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when accessing oracle data.
///
/// Missing oracles are fatal since the engine cannot generate floors without
/// templates and tables; unknown template ids are content bugs.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("ActorOracle not available")]
    ActorsNotAvailable,

    #[error("ItemOracle not available")]
    ItemsNotAvailable,

    #[error("TablesOracle not available")]
    TablesNotAvailable,

    #[error("actor template '{0}' not found")]
    ActorTemplateNotFound(String),

    #[error("item template '{0}' not found")]
    ItemTemplateNotFound(String),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            ActorsNotAvailable | ItemsNotAvailable | TablesNotAvailable => ErrorSeverity::Fatal,
            ActorTemplateNotFound(_) | ItemTemplateNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            ActorsNotAvailable => "ORACLE_ACTORS_NOT_AVAILABLE",
            ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            TablesNotAvailable => "ORACLE_TABLES_NOT_AVAILABLE",
            ActorTemplateNotFound(_) => "ORACLE_ACTOR_TEMPLATE_NOT_FOUND",
            ItemTemplateNotFound(_) => "ORACLE_ITEM_TEMPLATE_NOT_FOUND",
        }
    }
}
