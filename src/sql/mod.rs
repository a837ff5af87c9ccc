//! SQL layer - dialects, parsing, and statement serialization
//!
//! This module provides:
//! - `DatabaseType`: The dialects sessions can speak
//! - `SqlParserEngine`: Parses SQL text for one dialect
//! - `ParserEngineRegistry`: Looks up the engine for a dialect
//! - `serializer`: Converts parsed statements into JSON documents

pub mod database_type;
pub mod error;
pub mod parser;
pub mod registry;
pub mod serializer;
pub mod statement;

pub use database_type::DatabaseType;
pub use error::{SqlError, SqlResult};
pub use parser::{DialectParser, SqlParserEngine};
pub use registry::{ParserEngineRegistry, ParserEngineRegistryBuilder};
pub use statement::SqlStatement;
