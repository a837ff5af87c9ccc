//! distsql-parse binary
//!
//! Usage: distsql-parse [--dialect NAME] [--config FILE] [--pretty] SQL
//!
//! Exit codes:
//!   0 - Success
//!   1 - SQL syntax error
//!   2 - Unsupported dialect, configuration or output error

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use distsql_parse::config::{ConfigError, ConfigResult, ParserConfig};
use distsql_parse::handler::{collect_rows, HandlerError, ParseHandler, QueryableCommand};
use distsql_parse::session::Session;
use distsql_parse::sql::{serializer, DatabaseType, ParserEngineRegistry, SqlError};

#[derive(Parser, Debug)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Parse SQL with a proxy dialect and print the parsed statement")]
struct Cli {
    /// Dialect of the session issuing the command
    #[arg(long, default_value = "MySQL", env = "DISTSQL_PARSE_DIALECT")]
    dialect: String,

    /// JSON parser configuration (defaults to DISTSQL_PARSE_DIALECTS or all dialects)
    #[arg(long, env = "DISTSQL_PARSE_CONFIG")]
    config: Option<PathBuf>,

    /// Pretty-print the statement document
    #[arg(long)]
    pretty: bool,

    /// SQL text to parse
    sql: String,
}

/// Errors surfaced by the binary
#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Dialect(SqlError),
    #[error(transparent)]
    Command(#[from] HandlerError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Command(HandlerError::Sql(SqlError::Parse { .. })) => 1,
            _ => 2,
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> ConfigResult<ParserConfig> {
    match path {
        Some(path) => ParserConfig::from_file(path),
        None => ParserConfig::from_env(),
    }
}

/// Run the PARSE command once and write the header and row to `out`
async fn run(cli: &Cli, out: &mut impl Write) -> Result<(), CliError> {
    let config = load_config(cli.config.as_ref())?;
    let registry = Arc::new(ParserEngineRegistry::from_config(&config));

    let database_type: DatabaseType = cli.dialect.parse().map_err(CliError::Dialect)?;
    info!(dialect = %database_type, "Parsing SQL");

    let mut handler = ParseHandler::new(registry);
    handler.init(cli.sql.as_str(), &Session::new(database_type))?;
    let rows = collect_rows(&mut handler).await?;

    writeln!(out, "{}", handler.column_names().join("\t"))?;
    for row in rows {
        let mut cells = row.into_values();
        if cli.pretty {
            if let Some(detail) = cells.last_mut() {
                *detail = pretty_document(detail);
            }
        }
        writeln!(out, "{}", cells.join("\t"))?;
    }
    Ok(())
}

fn pretty_document(document: &str) -> String {
    serde_json::from_str::<serde_json::Value>(document)
        .map_err(SqlError::from)
        .and_then(|value| serializer::to_pretty_string(&value))
        .unwrap_or_else(|_| document.to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    match run(&cli, &mut stdout.lock()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
