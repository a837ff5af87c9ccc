//! Administrative command handlers - cursor model
//!
//! A handler is created per request. The routing layer drives it with:
//! - `execute()`: Run the command and buffer its rows
//! - `next()`: Advance the cursor, false once exhausted
//! - `row_data()`: Read the row under the cursor
//! - `close()`: Release buffered rows

pub mod error;
pub mod parse;
pub mod row;

pub use error::{HandlerError, HandlerResult};
pub use parse::ParseHandler;
pub use row::ResultRow;

use async_trait::async_trait;

/// Lifecycle state of a command handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandState {
    Created,
    Initialized,
    Executed,
    RowAvailable,
    Exhausted,
    Failed,
    Closed,
}

impl CommandState {
    pub fn name(&self) -> &'static str {
        match self {
            CommandState::Created => "created",
            CommandState::Initialized => "initialized",
            CommandState::Executed => "executed",
            CommandState::RowAvailable => "row available",
            CommandState::Exhausted => "exhausted",
            CommandState::Failed => "failed",
            CommandState::Closed => "closed",
        }
    }
}

/// Command producing tabular row data
#[async_trait]
pub trait QueryableCommand: Send {
    /// Column names of the rows this command produces
    fn column_names(&self) -> &'static [&'static str];

    /// Run the command and buffer its result
    async fn execute(&mut self) -> HandlerResult<()>;

    /// Advance to the next row, returns false when there are no more rows
    fn next(&mut self) -> HandlerResult<bool>;

    /// Row under the cursor
    fn row_data(&self) -> HandlerResult<&ResultRow>;

    /// Release resources; the command cannot be used afterwards
    fn close(&mut self) -> HandlerResult<()>;
}

/// Execute a command and collect every row it yields, then close it
pub async fn collect_rows(command: &mut dyn QueryableCommand) -> HandlerResult<Vec<ResultRow>> {
    command.execute().await?;

    let mut rows = Vec::new();
    while command.next()? {
        rows.push(command.row_data()?.clone());
    }

    command.close()?;
    Ok(rows)
}
