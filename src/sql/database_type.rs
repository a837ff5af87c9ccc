//! Database types (SQL dialects) understood by the proxy

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlparser::dialect::{
    AnsiDialect, Dialect, GenericDialect, MsSqlDialect, MySqlDialect, PostgreSqlDialect,
};

use super::error::SqlError;

/// SQL dialect a session speaks
///
/// The proxy speaks one front-end protocol per session; the dialect decides
/// which grammar is used to parse that session's SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DatabaseType {
    #[serde(rename = "MySQL")]
    MySql,
    #[serde(rename = "PostgreSQL")]
    PostgreSql,
    #[serde(rename = "openGauss")]
    OpenGauss,
    #[serde(rename = "SQLServer")]
    SqlServer,
    #[serde(rename = "SQL92")]
    Sql92,
    #[serde(rename = "H2")]
    H2,
}

impl DatabaseType {
    /// All supported database types, in display order
    pub const ALL: [DatabaseType; 6] = [
        DatabaseType::MySql,
        DatabaseType::PostgreSql,
        DatabaseType::OpenGauss,
        DatabaseType::SqlServer,
        DatabaseType::Sql92,
        DatabaseType::H2,
    ];

    /// Canonical name, as reported by sessions and accepted in configuration
    pub fn name(&self) -> &'static str {
        match self {
            DatabaseType::MySql => "MySQL",
            DatabaseType::PostgreSql => "PostgreSQL",
            DatabaseType::OpenGauss => "openGauss",
            DatabaseType::SqlServer => "SQLServer",
            DatabaseType::Sql92 => "SQL92",
            DatabaseType::H2 => "H2",
        }
    }

    /// Prefix of statement kind names, e.g. `MySQL` in `MySQLSelectStatement`
    pub fn statement_prefix(&self) -> &'static str {
        match self {
            DatabaseType::OpenGauss => "OpenGauss",
            other => other.name(),
        }
    }

    /// Grammar used to parse this dialect
    ///
    /// openGauss is PostgreSQL-compatible and H2 has no dedicated grammar,
    /// so it falls back to the generic one.
    pub fn grammar(&self) -> Box<dyn Dialect + Send + Sync> {
        match self {
            DatabaseType::MySql => Box::new(MySqlDialect {}),
            DatabaseType::PostgreSql | DatabaseType::OpenGauss => Box::new(PostgreSqlDialect {}),
            DatabaseType::SqlServer => Box::new(MsSqlDialect {}),
            DatabaseType::Sql92 => Box::new(AnsiDialect {}),
            DatabaseType::H2 => Box::new(GenericDialect {}),
        }
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DatabaseType {
    type Err = SqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        DatabaseType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| SqlError::UnsupportedDialect(name.to_string()))
    }
}
