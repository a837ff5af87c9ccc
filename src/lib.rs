//! distsql-parse - the PARSE administrative command of a distributed SQL proxy
//!
//! Features:
//! - One parser engine per SQL dialect, selected by the session's dialect
//! - Statement kind name plus the full parse tree as a JSON document
//! - Single-row cursor compatible with generic result-set consumers

pub mod config;
pub mod handler;
pub mod session;
pub mod sql;
