//! Columns command.

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::print_columns;
use crate::session::Session;

/// Columns command handler
pub fn cmd_columns(session: &Session, format: OutputFormat) -> Result<(), CliError> {
    print_columns(&session.columns(), session.axis(), format)
}
