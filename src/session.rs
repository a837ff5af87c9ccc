//! Session state for proxy connections

use crate::sql::DatabaseType;

/// Per-connection session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    database_type: DatabaseType,
}

impl Session {
    /// Create a new session speaking the given dialect
    pub fn new(database_type: DatabaseType) -> Self {
        Self { database_type }
    }

    /// Dialect the session currently speaks
    pub fn database_type(&self) -> DatabaseType {
        self.database_type
    }
}
