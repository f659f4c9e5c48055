//! Core data models for the board

mod column;

pub use column::{Column, ColumnId, basic_board_data};
