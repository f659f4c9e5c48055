//! `colboard` Core Library
//!
//! This crate provides the reorder coordination engine for a board of
//! columns: the order model, the pure reorder and destination algorithms,
//! drop notification handling, the UI handle registry and the post-move
//! effects (flash and live-region announcement).
//!
//! # Crate Structure
//!
//! - [`models`] - Column records and the seed data
//! - [`board`] - Board state, operations, keyboard moves and the coordinator
//! - [`reorder`] - The move-element algorithm
//! - [`drag_drop`] - Drop payloads, hit testing, destination resolution, monitors
//! - [`registry`] - Column ID to UI handle registry
//! - [`effects`] - Flash and announcement dispatch
//! - [`config`] - TOML board files
//! - [`tracing`] - Structured logging setup
//!
//! # Example
//!
//! ```
//! use colboard_core::{Board, BoardState, DropEvent, DropMonitor, LiveRegion, MountedBoard};
//! use colboard_core::{SourceData, TargetData};
//!
//! let monitor = DropMonitor::new();
//! let region = LiveRegion::new();
//! let board: Board<String> = Board::new(BoardState::basic()).with_announcer(region.clone());
//! let board = MountedBoard::mount(board, &monitor);
//!
//! monitor.drop_event(&DropEvent::new(
//!     SourceData::column("confluence", board.instance_id()),
//!     vec![TargetData::column("trello")],
//! ));
//!
//! let titles: Vec<String> = board.board().get_columns().into_iter().map(|c| c.title).collect();
//! assert_eq!(titles, ["Jira", "Trello", "Confluence"]);
//! assert_eq!(
//!     region.current_message().as_deref(),
//!     Some("You've moved Confluence from position 1 to position 3 of 3.")
//! );
//! ```

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod board;
pub mod config;
pub mod drag_drop;
pub mod effects;
pub mod error;
pub mod models;
pub mod registry;
pub mod reorder;
pub mod tracing;

// =============================================================================
// Convenience re-exports
//
// Property tests, integration tests and `colboard-cli` use the flat
// namespace for the common types.
// =============================================================================

pub use board::{
    Board, BoardState, DropResolution, IgnoreReason, KeyboardMove, MountedBoard, Operation,
    OperationId, Outcome, Trigger, available_moves,
};
pub use config::{BoardConfig, ColumnConfig, load_board_config};
pub use drag_drop::{
    Axis, COLUMN_ALLOWED_EDGES, ColumnDropState, ColumnViewState, DragKind, DropEvent,
    DropMonitor, Edge, EdgeHint, InstanceId, MonitorSubscription, Point, Rect, SourceData,
    TargetData, attach_closest_edge, can_drop, closest_edge, extract_closest_edge,
    resolve_destination,
};
pub use effects::{
    Announcer, EffectsDispatcher, FlashEffect, LiveRegion, MoveSummary, NoFlash,
    announcement_text,
};
pub use error::{BoardError, BoardResult, ConfigError, ConfigResult, RegistryError};
pub use models::{Column, ColumnId, basic_board_data};
pub use registry::{Registration, Registry};
pub use reorder::reorder;
pub use tracing::{
    TracingConfig, TracingError, TracingLevel, TracingOutput, TracingResult, init_tracing,
};
