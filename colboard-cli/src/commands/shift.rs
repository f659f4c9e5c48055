//! Shift command: a column's menu moves.

use colboard_core::KeyboardMove;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::{format_moves, print_move};
use crate::session::Session;

/// Shift command handler
pub fn cmd_shift(
    session: &Session,
    format: OutputFormat,
    column: &str,
    keyboard_move: KeyboardMove,
) -> Result<(), CliError> {
    let report = session.shift(column, keyboard_move)?;
    let skipped = match &report {
        Some(_) => String::new(),
        None => format!(
            "{keyboard_move} is not available for {column}. Available: {}",
            format_moves(&session.available_moves(column)?)
        ),
    };
    print_move(report.as_ref(), format, &skipped)
}
