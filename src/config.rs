//! Parser rule configuration
//!
//! Decides which dialects get a parser engine. Sources, in order of use by
//! the binary: a JSON file, the `DISTSQL_PARSE_DIALECTS` environment
//! variable, then the default (every supported dialect).

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sql::DatabaseType;

/// Environment variable holding a comma-separated dialect list
pub const DIALECTS_ENV: &str = "DISTSQL_PARSE_DIALECTS";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown dialect in configuration: {0}")]
    UnknownDialect(String),
    #[error("No dialects configured")]
    NoDialects,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed configuration: {0}")]
    Malformed(String),
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration for the parser engine registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Dialects to build parser engines for
    #[serde(default = "default_dialects")]
    pub dialects: Vec<DatabaseType>,
}

fn default_dialects() -> Vec<DatabaseType> {
    DatabaseType::ALL.to_vec()
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            dialects: default_dialects(),
        }
    }
}

impl ParserConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the dialect list
    pub fn with_dialects(mut self, dialects: Vec<DatabaseType>) -> Self {
        self.dialects = dialects;
        self
    }

    /// Add one dialect if not already present
    pub fn with_dialect(mut self, dialect: DatabaseType) -> Self {
        if !self.dialects.contains(&dialect) {
            self.dialects.push(dialect);
        }
        self
    }

    /// Read configuration from environment variables
    ///
    /// Falls back to the default when `DISTSQL_PARSE_DIALECTS` is unset.
    pub fn from_env() -> ConfigResult<Self> {
        match env::var(DIALECTS_ENV) {
            Ok(list) => Self::from_dialect_list(&list),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Parse a comma-separated dialect list, e.g. `MySQL, PostgreSQL`
    pub fn from_dialect_list(list: &str) -> ConfigResult<Self> {
        let mut config = Self::new().with_dialects(Vec::new());
        for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let dialect = name
                .parse::<DatabaseType>()
                .map_err(|_| ConfigError::UnknownDialect(name.to_string()))?;
            config = config.with_dialect(dialect);
        }
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: ParserConfig = serde_json::from_str(&content).map_err(|e| {
            ConfigError::Malformed(format!("failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that at least one dialect is configured
    pub fn validate(&self) -> ConfigResult<()> {
        if self.dialects.is_empty() {
            return Err(ConfigError::NoDialects);
        }
        Ok(())
    }
}
