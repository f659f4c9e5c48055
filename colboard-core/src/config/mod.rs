//! Board configuration
//!
//! This module loads the initial column set of a board from TOML files.

mod board;

pub use board::{BoardConfig, ColumnConfig, load_board_config};
