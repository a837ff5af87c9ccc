//! SQL error types

use thiserror::Error;

use super::database_type::DatabaseType;

/// SQL layer errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SqlError {
    /// No parser engine is bound for the dialect
    #[error("Unsupported dialect: {0}")]
    UnsupportedDialect(String),

    /// SQL text does not conform to the dialect's grammar
    #[error("You have an error in your SQL syntax: {message}")]
    Parse {
        database_type: DatabaseType,
        message: String,
    },

    /// Statement could not be converted to a document
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SqlError {
    /// Create a parse error for the given dialect
    pub fn parse(database_type: DatabaseType, message: impl Into<String>) -> Self {
        SqlError::Parse {
            database_type,
            message: message.into(),
        }
    }

    /// Check whether this is a syntax error
    pub fn is_parse(&self) -> bool {
        matches!(self, SqlError::Parse { .. })
    }
}

impl From<serde_json::Error> for SqlError {
    fn from(err: serde_json::Error) -> Self {
        SqlError::Serialization(err.to_string())
    }
}

/// Result type for SQL operations
pub type SqlResult<T> = Result<T, SqlError>;
