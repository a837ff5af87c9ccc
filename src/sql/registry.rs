//! Parser engine registry
//!
//! Maps each configured dialect to its parser engine. The registry is built
//! once when configuration is loaded and is read-only afterwards; share it
//! between requests with `Arc`.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::config::ParserConfig;

use super::database_type::DatabaseType;
use super::error::{SqlError, SqlResult};
use super::parser::{DialectParser, SqlParserEngine};

/// Registry of parser engines keyed by dialect
#[derive(Debug, Clone, Default)]
pub struct ParserEngineRegistry {
    engines: BTreeMap<DatabaseType, Arc<dyn SqlParserEngine>>,
}

impl ParserEngineRegistry {
    /// Build a registry with a grammar-backed engine for every configured dialect
    pub fn from_config(config: &ParserConfig) -> Self {
        let registry = config
            .dialects
            .iter()
            .fold(Self::builder(), |builder, &db_type| {
                builder.bind(db_type, Arc::new(DialectParser::new(db_type)))
            })
            .build();
        debug!(dialects = ?registry.dialects(), "Parser engine registry built");
        registry
    }

    /// Start an empty registry builder
    pub fn builder() -> ParserEngineRegistryBuilder {
        ParserEngineRegistryBuilder::default()
    }

    /// Get the engine bound to a dialect
    pub fn engine(&self, database_type: DatabaseType) -> SqlResult<Arc<dyn SqlParserEngine>> {
        self.engines
            .get(&database_type)
            .cloned()
            .ok_or_else(|| SqlError::UnsupportedDialect(database_type.name().to_string()))
    }

    /// Check whether a dialect has an engine
    pub fn contains(&self, database_type: DatabaseType) -> bool {
        self.engines.contains_key(&database_type)
    }

    /// Bound dialects, in declaration order
    pub fn dialects(&self) -> Vec<DatabaseType> {
        self.engines.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}

/// Builder collecting `(dialect, engine)` bindings
#[derive(Debug, Default)]
pub struct ParserEngineRegistryBuilder {
    engines: BTreeMap<DatabaseType, Arc<dyn SqlParserEngine>>,
}

impl ParserEngineRegistryBuilder {
    /// Bind an engine to a dialect, replacing any earlier binding
    pub fn bind(mut self, database_type: DatabaseType, engine: Arc<dyn SqlParserEngine>) -> Self {
        self.engines.insert(database_type, engine);
        self
    }

    pub fn build(self) -> ParserEngineRegistry {
        ParserEngineRegistry {
            engines: self.engines,
        }
    }
}
