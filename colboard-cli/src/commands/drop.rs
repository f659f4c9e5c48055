//! Drop command: a simulated pointer drop.

use crate::cli::{DropArgs, OutputFormat};
use crate::error::CliError;
use crate::format::{format_json, format_report_text};
use crate::session::Session;

/// Drop command handler
pub fn cmd_drop(session: &Session, format: OutputFormat, args: &DropArgs) -> Result<(), CliError> {
    let attempt = session.pointer_drop(&args.source, &args.target, args.pointer(), args.kind())?;

    if format == OutputFormat::Json {
        println!("{}", format_json(&attempt.report)?);
        return Ok(());
    }

    let dragged = if args.card { "Card from" } else { "Column" };
    if !attempt.accepted {
        println!("{dragged} {} is not accepted by {}", args.source, args.target);
    } else if let Some(edge) = attempt.indicator {
        println!("Indicator: {edge} edge of {}", args.target);
    }
    match &attempt.report {
        Some(report) => println!("{}", format_report_text(report)),
        None => println!("Drop of {} on {} was ignored", args.source, args.target),
    }
    Ok(())
}
