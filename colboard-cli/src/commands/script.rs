//! Script command: several moves against one mounted board.

use std::io::Read as _;
use std::path::Path;

use clap::Parser;

use crate::cli::{OutputFormat, ScriptCommand, ScriptLine};
use crate::error::CliError;
use crate::session::Session;

use super::{columns, drop, reorder, shift};

/// Script command handler
pub fn cmd_script(
    session: &Session,
    format: OutputFormat,
    file: Option<&Path>,
) -> Result<(), CliError> {
    let content = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            content
        }
    };

    let commands = parse_script(&content)?;
    tracing::info!(commands = commands.len(), "Running script");

    for (line, command) in commands {
        run_command(session, format, command).map_err(|e| e.at_line(line))?;
    }
    Ok(())
}

/// Parses every non-empty, non-comment line. Returns commands with their
/// 1-based line numbers.
pub fn parse_script(content: &str) -> Result<Vec<(usize, ScriptCommand)>, CliError> {
    content
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, text)| {
            ScriptLine::try_parse_from(text.split_whitespace())
                .map(|parsed| (line, parsed.command))
                .map_err(|e| CliError::Script {
                    line,
                    message: first_line(&e.to_string()),
                })
        })
        .collect()
}

fn first_line(message: &str) -> String {
    message
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string()
}

fn run_command(
    session: &Session,
    format: OutputFormat,
    command: ScriptCommand,
) -> Result<(), CliError> {
    match command {
        ScriptCommand::Columns => columns::cmd_columns(session, format),
        ScriptCommand::Move { start, finish } => reorder::cmd_move(session, format, start, finish),
        ScriptCommand::Shift { column, direction } => {
            shift::cmd_shift(session, format, &column, direction.into())
        }
        ScriptCommand::Drop { args } => drop::cmd_drop(session, format, &args),
    }
}
