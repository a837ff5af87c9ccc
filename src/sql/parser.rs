//! Dialect parser engines wrapping the sqlparser crate

use std::fmt;
use std::ops::ControlFlow;

use sqlparser::ast::{visit_expressions, Expr, Statement, Value};
use sqlparser::dialect::Dialect;
use sqlparser::parser::Parser as SqlParser;

use super::database_type::DatabaseType;
use super::error::{SqlError, SqlResult};
use super::statement::SqlStatement;

/// Parser for one SQL dialect
///
/// Engines hold no mutable state and are shared by every request that
/// speaks their dialect, so `parse` must be safe to call concurrently.
pub trait SqlParserEngine: Send + Sync + fmt::Debug {
    /// Dialect this engine parses
    fn database_type(&self) -> DatabaseType;

    /// Parse exactly one statement
    ///
    /// With `pre_process` set, parameter placeholders are collected into
    /// `SqlStatement::parameter_markers`. The parse tree is the same either way.
    fn parse(&self, sql: &str, pre_process: bool) -> SqlResult<SqlStatement>;
}

/// Parser engine backed by a sqlparser grammar
pub struct DialectParser {
    database_type: DatabaseType,
    grammar: Box<dyn Dialect + Send + Sync>,
}

impl DialectParser {
    /// Create an engine using the dialect's default grammar
    pub fn new(database_type: DatabaseType) -> Self {
        DialectParser {
            database_type,
            grammar: database_type.grammar(),
        }
    }

    fn parse_one(&self, sql: &str) -> SqlResult<Statement> {
        let mut statements = SqlParser::parse_sql(&*self.grammar, sql)
            .map_err(|e| SqlError::parse(self.database_type, e.to_string()))?;

        match statements.len() {
            0 => Err(SqlError::parse(self.database_type, "Empty SQL statement")),
            1 => Ok(statements.remove(0)),
            n => Err(SqlError::parse(
                self.database_type,
                format!("Expected exactly one statement, found {}", n),
            )),
        }
    }
}

impl fmt::Debug for DialectParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialectParser")
            .field("database_type", &self.database_type)
            .field("grammar", &self.grammar)
            .finish()
    }
}

impl SqlParserEngine for DialectParser {
    fn database_type(&self) -> DatabaseType {
        self.database_type
    }

    fn parse(&self, sql: &str, pre_process: bool) -> SqlResult<SqlStatement> {
        let statement = self.parse_one(sql)?;
        let markers = if pre_process {
            parameter_markers(&statement)
        } else {
            Vec::new()
        };
        Ok(SqlStatement::new(self.database_type, statement).with_parameter_markers(markers))
    }
}

/// Collect parameter placeholders (`?`, `$1`, `:name`) in source order
pub fn parameter_markers(statement: &Statement) -> Vec<String> {
    let mut markers = Vec::new();
    let _ = visit_expressions(statement, |expr| {
        if let Expr::Value(Value::Placeholder(marker)) = expr {
            markers.push(marker.clone());
        }
        ControlFlow::<()>::Continue(())
    });
    markers
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlparser::ast as sp;

    fn mysql() -> DialectParser {
        DialectParser::new(DatabaseType::MySql)
    }

    #[test]
    fn test_parse_select() {
        let stmt = mysql().parse("SELECT id, name FROM users WHERE id = 1", false).unwrap();
        assert_eq!(stmt.database_type, DatabaseType::MySql);
        assert!(matches!(stmt.statement, sp::Statement::Query(_)));
    }

    #[test]
    fn test_parse_insert() {
        let stmt = mysql()
            .parse("INSERT INTO users (id, name) VALUES (1, 'Alice')", false)
            .unwrap();
        assert!(matches!(stmt.statement, sp::Statement::Insert(_)));
    }

    #[test]
    fn test_parse_create_table() {
        let stmt = mysql()
            .parse(
                "CREATE TABLE users (id INT NOT NULL, name VARCHAR(100), PRIMARY KEY (id))",
                false,
            )
            .unwrap();
        assert!(matches!(stmt.statement, sp::Statement::CreateTable(_)));
    }

    #[test]
    fn test_parse_delete() {
        let stmt = mysql().parse("DELETE FROM users WHERE id = 1", false).unwrap();
        assert!(matches!(stmt.statement, sp::Statement::Delete(_)));
    }

    #[test]
    fn test_trailing_semicolon() {
        let stmt = mysql().parse("SELECT 1;", false).unwrap();
        assert!(matches!(stmt.statement, sp::Statement::Query(_)));
    }

    #[test]
    fn test_parse_error() {
        let err = mysql().parse("wrong sql", false).unwrap_err();
        match err {
            SqlError::Parse {
                database_type,
                message,
            } => {
                assert_eq!(database_type, DatabaseType::MySql);
                assert!(message.contains("wrong"), "message: {}", message);
            }
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input() {
        let err = mysql().parse("   ", false).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_multiple_statements() {
        let err = mysql().parse("SELECT 1; SELECT 2", false).unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("found 2"));
    }

    #[test]
    fn test_dialect_specific_syntax() {
        let pg = DialectParser::new(DatabaseType::PostgreSql);
        assert!(pg.parse("SELECT a::INT FROM t", false).is_ok());

        let mssql = DialectParser::new(DatabaseType::SqlServer);
        assert!(mssql.parse("SELECT [a] FROM [t]", false).is_ok());
    }

    #[test]
    fn test_pre_process_collects_markers() {
        let stmt = mysql()
            .parse("SELECT * FROM t WHERE a = ? AND b IN (?, ?)", true)
            .unwrap();
        assert_eq!(stmt.parameter_markers, vec!["?", "?", "?"]);

        let pg = DialectParser::new(DatabaseType::PostgreSql);
        let stmt = pg.parse("UPDATE t SET a = $2 WHERE b = $1", true).unwrap();
        assert_eq!(stmt.parameter_count(), 2);
        assert!(stmt.parameter_markers.contains(&"$1".to_string()));
    }

    #[test]
    fn test_pre_process_keeps_tree() {
        let sql = "SELECT * FROM t WHERE a = ?";
        let plain = mysql().parse(sql, false).unwrap();
        let processed = mysql().parse(sql, true).unwrap();
        assert!(plain.parameter_markers.is_empty());
        assert_eq!(plain.statement, processed.statement);
    }
}
