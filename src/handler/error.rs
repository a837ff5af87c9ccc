//! Command handler error types

use thiserror::Error;

use crate::sql::SqlError;

/// Result type for command handler operations
pub type HandlerResult<T> = Result<T, HandlerError>;

/// Command handler errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// Error from the SQL layer, passed through unchanged
    #[error(transparent)]
    Sql(#[from] SqlError),

    /// Operation called out of order (a defect in the calling layer)
    #[error("Invalid command usage: {operation}() called while {state}")]
    Usage {
        operation: &'static str,
        state: &'static str,
    },
}

impl HandlerError {
    pub(crate) fn usage(operation: &'static str, state: &'static str) -> Self {
        HandlerError::Usage { operation, state }
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, HandlerError::Usage { .. })
    }
}
