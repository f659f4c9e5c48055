//! Move command: keyboard reorder by index.

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::print_move;
use crate::session::Session;

/// Move command handler
pub fn cmd_move(
    session: &Session,
    format: OutputFormat,
    start: usize,
    finish: usize,
) -> Result<(), CliError> {
    let report = session.reorder(start, finish)?;
    print_move(Some(&report), format, "")
}
