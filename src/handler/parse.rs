//! PARSE command handler
//!
//! Parses SQL text with the grammar of the requesting session's dialect and
//! yields exactly one row: the statement kind name and the statement
//! serialized as a JSON document.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::session::Session;
use crate::sql::{serializer, DatabaseType, ParserEngineRegistry, SqlResult};

use super::error::{HandlerError, HandlerResult};
use super::row::ResultRow;
use super::{CommandState, QueryableCommand};

/// Column names of the PARSE result
pub const PARSE_COLUMNS: [&str; 2] = ["parsed_statement", "parsed_statement_detail"];

#[derive(Debug)]
enum HandlerState {
    Created,
    Initialized {
        sql: String,
        database_type: DatabaseType,
    },
    Executed(ResultRow),
    RowAvailable(ResultRow),
    Exhausted,
    Failed,
    Closed,
}

impl HandlerState {
    fn phase(&self) -> CommandState {
        match self {
            HandlerState::Created => CommandState::Created,
            HandlerState::Initialized { .. } => CommandState::Initialized,
            HandlerState::Executed(_) => CommandState::Executed,
            HandlerState::RowAvailable(_) => CommandState::RowAvailable,
            HandlerState::Exhausted => CommandState::Exhausted,
            HandlerState::Failed => CommandState::Failed,
            HandlerState::Closed => CommandState::Closed,
        }
    }
}

/// Handler for the PARSE administrative command
#[derive(Debug)]
pub struct ParseHandler {
    registry: Arc<ParserEngineRegistry>,
    state: HandlerState,
}

impl ParseHandler {
    pub fn new(registry: Arc<ParserEngineRegistry>) -> Self {
        ParseHandler {
            registry,
            state: HandlerState::Created,
        }
    }

    /// Store the SQL text and the session's dialect; parsing happens in `execute`
    pub fn init(&mut self, sql: impl Into<String>, session: &Session) -> HandlerResult<()> {
        match self.state {
            HandlerState::Created => {
                self.state = HandlerState::Initialized {
                    sql: sql.into(),
                    database_type: session.database_type(),
                };
                Ok(())
            }
            ref other => Err(HandlerError::usage("init", other.phase().name())),
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> CommandState {
        self.state.phase()
    }

    /// Whether a row is buffered and not yet consumed past
    pub fn has_buffered_row(&self) -> bool {
        matches!(
            self.state,
            HandlerState::Executed(_) | HandlerState::RowAvailable(_)
        )
    }

    fn build_row(&self, sql: &str, database_type: DatabaseType) -> SqlResult<ResultRow> {
        let engine = self.registry.engine(database_type)?;
        let statement = engine.parse(sql, false)?;
        let kind = statement.kind_name()?;
        let document = serializer::to_document_string(&statement)?;
        debug!(dialect = %database_type, %kind, "Parsed statement");
        Ok(ResultRow::new(vec![kind, document]))
    }
}

#[async_trait]
impl QueryableCommand for ParseHandler {
    fn column_names(&self) -> &'static [&'static str] {
        &PARSE_COLUMNS
    }

    async fn execute(&mut self) -> HandlerResult<()> {
        let result = match &self.state {
            HandlerState::Initialized { sql, database_type } => {
                self.build_row(sql, *database_type)
            }
            other => return Err(HandlerError::usage("execute", other.phase().name())),
        };

        match result {
            Ok(row) => {
                self.state = HandlerState::Executed(row);
                Ok(())
            }
            Err(e) => {
                self.state = HandlerState::Failed;
                Err(e.into())
            }
        }
    }

    fn next(&mut self) -> HandlerResult<bool> {
        match std::mem::replace(&mut self.state, HandlerState::Exhausted) {
            HandlerState::Executed(row) => {
                self.state = HandlerState::RowAvailable(row);
                Ok(true)
            }
            HandlerState::RowAvailable(_) | HandlerState::Exhausted => Ok(false),
            other => {
                let phase = other.phase();
                self.state = other;
                Err(HandlerError::usage("next", phase.name()))
            }
        }
    }

    fn row_data(&self) -> HandlerResult<&ResultRow> {
        match &self.state {
            HandlerState::RowAvailable(row) => Ok(row),
            other => Err(HandlerError::usage("row_data", other.phase().name())),
        }
    }

    fn close(&mut self) -> HandlerResult<()> {
        self.state = HandlerState::Closed;
        Ok(())
    }
}
