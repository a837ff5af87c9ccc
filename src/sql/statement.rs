//! Parsed statement

use serde::Serialize;
use serde_json::Value;
use sqlparser::ast::Statement;

use super::database_type::DatabaseType;
use super::error::{SqlError, SqlResult};
use super::serializer;

/// A statement parsed with one dialect's grammar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SqlStatement {
    /// Dialect the statement was parsed with
    pub database_type: DatabaseType,
    /// Parse tree
    pub statement: Statement,
    /// Parameter placeholders in source order (empty unless pre-processed)
    pub parameter_markers: Vec<String>,
}

impl SqlStatement {
    pub fn new(database_type: DatabaseType, statement: Statement) -> Self {
        SqlStatement {
            database_type,
            statement,
            parameter_markers: Vec::new(),
        }
    }

    /// Attach parameter markers found during pre-processing
    pub fn with_parameter_markers(mut self, markers: Vec<String>) -> Self {
        self.parameter_markers = markers;
        self
    }

    /// Number of parameter placeholders
    pub fn parameter_count(&self) -> usize {
        self.parameter_markers.len()
    }

    /// Statement category, e.g. `Select`, `Insert`, `CreateTable`
    ///
    /// Taken from the AST variant name; queries are reported as `Select`.
    pub fn category(&self) -> SqlResult<String> {
        category_of(&serializer::to_document(&self.statement)?)
    }

    /// Statement kind name, e.g. `MySQLSelectStatement`
    pub fn kind_name(&self) -> SqlResult<String> {
        Ok(format!(
            "{}{}Statement",
            self.database_type.statement_prefix(),
            self.category()?
        ))
    }
}

/// Category from a serialized statement document
fn category_of(document: &Value) -> SqlResult<String> {
    match serializer::variant_name(document) {
        Some("Query") => Ok("Select".to_string()),
        Some(name) => Ok(name.to_string()),
        None => Err(SqlError::Serialization(format!(
            "statement document is not a tagged variant: {}",
            document
        ))),
    }
}
