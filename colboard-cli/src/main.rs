//! `colboard` CLI - Command-line interface for the colboard reorder engine
//!
//! Mounts a board from a TOML file (or the built-in board), applies keyboard
//! moves and simulated pointer drops, and prints the resulting order, the
//! flashed column and the live-region announcement.

mod cli;
mod commands;
mod error;
mod format;
mod session;
mod util;

use clap::Parser;
use cli::Cli;
use colboard_core::tracing::{TracingConfig, TracingLevel, TracingOutput, init_tracing};

fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    let level = if cli.quiet {
        TracingLevel::Error
    } else {
        TracingLevel::from_verbosity(cli.verbose)
    };
    let output = cli
        .log_file
        .clone()
        .map_or(TracingOutput::Stderr, |path| TracingOutput::File { path });
    let mut tracing_config = TracingConfig::new().with_level(level).with_output(output);
    if let Some(filter) = &cli.log_filter {
        tracing_config = tracing_config.with_filter(filter.as_str());
    }
    if let Err(e) = init_tracing(&tracing_config) {
        eprintln!("Warning: {e}");
    }

    let result = commands::dispatch(config_path, cli.format, cli.command);

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
