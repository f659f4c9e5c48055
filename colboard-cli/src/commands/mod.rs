//! Command handler modules for the CLI.

mod columns;
mod drop;
mod reorder;
mod script;
mod shift;

use std::path::Path;

use crate::cli::{Commands, OutputFormat};
use crate::error::CliError;
use crate::session::Session;
use crate::util::load_config;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(
    config_path: Option<&Path>,
    format: OutputFormat,
    command: Commands,
) -> Result<(), CliError> {
    let config = load_config(config_path)?;
    let session = Session::open(&config)?;

    match command {
        Commands::Columns => columns::cmd_columns(&session, format),
        Commands::Move { start, finish } => reorder::cmd_move(&session, format, start, finish),
        Commands::Shift { column, direction } => {
            shift::cmd_shift(&session, format, &column, direction.into())
        }
        Commands::Drop { args } => drop::cmd_drop(&session, format, &args),
        Commands::Script { file } => script::cmd_script(&session, format, file.as_deref()),
    }
}
