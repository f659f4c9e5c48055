//! Shared utility functions used across command modules.

use std::path::Path;

use colboard_core::{BoardConfig, load_board_config};

use crate::error::CliError;

/// Loads the board file from `--config`, or the built-in board when none
/// was given.
pub fn load_config(config_path: Option<&Path>) -> Result<BoardConfig, CliError> {
    match config_path {
        Some(path) => Ok(load_board_config(path)?),
        None => Ok(BoardConfig::default()),
    }
}
