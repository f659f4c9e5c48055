//! Output formatting for command results.

use std::fmt::Write as _;

use colboard_core::{Axis, Column, ColumnId, KeyboardMove};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::session::{MoveReport, column_rect};

/// Format columns as a table string, with each column's span along the
/// board axis
#[must_use]
pub fn format_columns_table(columns: &[Column], axis: Axis) -> String {
    if columns.is_empty() {
        return "No columns.".to_string();
    }

    let id_width = columns
        .iter()
        .map(|c| c.column_id.as_str().len())
        .max()
        .unwrap_or(2)
        .max(2);
    let title_width = columns
        .iter()
        .map(|c| c.title.len())
        .max()
        .unwrap_or(5)
        .max(5);
    let spans: Vec<String> = (0..columns.len()).map(|index| span(axis, index)).collect();
    let span_width = spans.iter().map(String::len).max().unwrap_or(4).max(4);

    let mut output = String::new();
    let _ = writeln!(
        output,
        "{:<3}  {:<id_width$}  {:<title_width$}  {:<span_width$}  ITEMS",
        "POS", "ID", "TITLE", "SPAN"
    );
    let _ = writeln!(
        output,
        "{:-<3}  {:-<id_width$}  {:-<title_width$}  {:-<span_width$}  -----",
        "", "", "", ""
    );
    for (index, (column, span)) in columns.iter().zip(&spans).enumerate() {
        let _ = writeln!(
            output,
            "{:<3}  {:<id_width$}  {:<title_width$}  {:<span_width$}  {}",
            index + 1,
            column.column_id,
            column.title,
            span,
            column.items.len()
        );
    }

    output.trim_end().to_string()
}

/// Range a column covers along the axis, for `drop --at`.
fn span(axis: Axis, index: usize) -> String {
    let rect = column_rect(axis, index);
    let (start, length) = match axis {
        Axis::Horizontal => (rect.x, rect.width),
        Axis::Vertical => (rect.y, rect.height),
    };
    format!("{start:.0}-{:.0}", start + length)
}

/// Format menu moves as a comma-separated list
#[must_use]
pub fn format_moves(moves: &[KeyboardMove]) -> String {
    if moves.is_empty() {
        return "none".to_string();
    }
    moves
        .iter()
        .map(|mv| mv.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a committed move as text
#[must_use]
pub fn format_report_text(report: &MoveReport) -> String {
    let mut output = String::new();
    match &report.flashed_handle {
        Some(handle) => {
            let _ = writeln!(output, "Flash: {handle}");
        }
        None => {
            let column_id = &report.summary.column_id;
            let _ = writeln!(output, "Flash: skipped ({column_id} not mounted)");
        }
    }
    let _ = writeln!(output, "Announce: {}", report.summary.announcement);
    let _ = write!(output, "Order: {}", join_ids(&report.order));
    output
}

fn join_ids(ids: &[ColumnId]) -> String {
    ids.iter().map(ColumnId::as_str).collect::<Vec<_>>().join(", ")
}

/// Serialize a value as pretty JSON
///
/// # Errors
///
/// Returns `CliError::Output` if serialization fails.
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::Output(format!("Failed to serialize to JSON: {e}")))
}

/// Print the columns in the requested format
pub fn print_columns(columns: &[Column], axis: Axis, format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => println!("{}", format_columns_table(columns, axis)),
        OutputFormat::Json => println!("{}", format_json(columns)?),
    }
    Ok(())
}

/// Print the result of a move command
pub fn print_move(
    report: Option<&MoveReport>,
    format: OutputFormat,
    skipped: &str,
) -> Result<(), CliError> {
    match (report, format) {
        (Some(report), OutputFormat::Table) => println!("{}", format_report_text(report)),
        (Some(report), OutputFormat::Json) => println!("{}", format_json(report)?),
        (None, OutputFormat::Table) => println!("{skipped}"),
        (None, OutputFormat::Json) => println!("null"),
    }
    Ok(())
}
