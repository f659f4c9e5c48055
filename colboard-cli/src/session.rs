//! A mounted board driven from the command line.
//!
//! The session plays the part of the view layer: it lays the columns out,
//! registers a handle for every column, keeps each column's drag feedback,
//! records which handles were flashed and feeds pointer drops through a
//! [`DropMonitor`] the same way a drag library would.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use colboard_core::{
    Axis, Board, BoardConfig, COLUMN_ALLOWED_EDGES, Column, ColumnId, ColumnViewState, DragKind,
    DropEvent, DropMonitor, Edge, KeyboardMove, LiveRegion, MountedBoard, MoveSummary, Operation,
    Point, Rect, Registration, SourceData, TargetData, Trigger, attach_closest_edge,
    available_moves, can_drop,
};
use serde::Serialize;

use crate::error::CliError;

/// Width of a laid-out column
pub const COLUMN_WIDTH: f64 = 250.0;
/// Height of a laid-out column
pub const COLUMN_HEIGHT: f64 = 480.0;
/// Space between neighbouring columns
pub const COLUMN_GAP: f64 = 8.0;

const STACKED_ALLOWED_EDGES: [Edge; 2] = [Edge::Top, Edge::Bottom];

/// What one committed move did.
#[derive(Debug, Clone, Serialize)]
pub struct MoveReport {
    /// The recorded operation
    pub operation: Operation,
    /// Effects dispatched for it
    pub summary: MoveSummary,
    /// Handle the flash effect received, if the column was mounted
    pub flashed_handle: Option<String>,
    /// Column order after the move
    pub order: Vec<ColumnId>,
}

/// Where a simulated drag is released over its target column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pointer {
    /// The target reports no closest edge
    NoEdge,
    /// The target reports this closest edge
    Near(Edge),
    /// At this coordinate along the board axis; the edge comes from hit
    /// testing the target's box
    At(f64),
}

/// What a simulated pointer drop did.
#[derive(Debug, Clone)]
pub struct DropAttempt {
    /// Whether the target column accepted the drag
    pub accepted: bool,
    /// Edge the target drew its drop indicator on while hovered
    pub indicator: Option<Edge>,
    /// The committed move, if the board reordered
    pub report: Option<MoveReport>,
}

/// A board mounted for the lifetime of one CLI invocation.
pub struct Session {
    monitor: DropMonitor,
    board: MountedBoard<String>,
    flashed: Rc<RefCell<Vec<String>>>,
    views: RefCell<HashMap<ColumnId, ColumnViewState>>,
    _registrations: Vec<Registration<String>>,
}

impl Session {
    /// Builds and mounts the board described by `config`.
    pub fn open(config: &BoardConfig) -> Result<Self, CliError> {
        let state = config.build_state()?;
        let flashed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&flashed);

        let board: Board<String> = Board::new(state)
            .with_axis(config.axis)
            .with_announcer(LiveRegion::new())
            .with_flash(move |handle: &String| sink.borrow_mut().push(handle.clone()));
        let monitor = DropMonitor::new();
        let board = MountedBoard::mount(board, &monitor);

        let registrations = config
            .columns
            .iter()
            .map(|column| board.register_column(column.id.as_str(), column_handle(&column.id)))
            .collect();
        let views = config
            .columns
            .iter()
            .map(|column| (ColumnId::from(column.id.as_str()), ColumnViewState::default()))
            .collect();
        tracing::debug!(columns = config.columns.len(), "CLI session opened");

        Ok(Self {
            monitor,
            board,
            flashed,
            views: RefCell::new(views),
            _registrations: registrations,
        })
    }

    /// Columns in their current order.
    pub fn columns(&self) -> Vec<Column> {
        self.board.board().get_columns()
    }

    /// Layout axis of the board.
    pub fn axis(&self) -> Axis {
        self.board.board().axis()
    }

    /// Keyboard move by index.
    pub fn reorder(&self, start_index: usize, finish_index: usize) -> Result<MoveReport, CliError> {
        self.board
            .board_mut()
            .reorder_column(start_index, finish_index, Trigger::Keyboard)?;
        self.report()
    }

    /// Menu move of a column. `None` if the move is not available.
    pub fn shift(
        &self,
        column: &str,
        keyboard_move: KeyboardMove,
    ) -> Result<Option<MoveReport>, CliError> {
        let moved = self
            .board
            .board_mut()
            .move_column(&ColumnId::from(column), keyboard_move)?;
        match moved {
            Some(_) => self.report().map(Some),
            None => Ok(None),
        }
    }

    /// Moves the column's menu offers right now.
    pub fn available_moves(&self, column: &str) -> Result<Vec<KeyboardMove>, CliError> {
        let board = self.board.board();
        let index = board
            .state()
            .index_of(&ColumnId::from(column))
            .ok_or_else(|| CliError::ColumnNotFound(column.to_string()))?;
        Ok(available_moves(index, board.state().len()))
    }

    /// Drags `source` over `target` and releases it there.
    ///
    /// A column drag shows on the source as dragging; the target decides
    /// with `can_drop` whether it is a drop target for this drag at all. A
    /// rejected drag still reaches the monitor, with no targets under the
    /// pointer.
    pub fn pointer_drop(
        &self,
        source: &str,
        target: &str,
        pointer: Pointer,
        kind: DragKind,
    ) -> Result<DropAttempt, CliError> {
        let source_id = self.require_column(source)?;
        let target_id = self.require_column(target)?;
        let target_data = self.target_data(&target_id, pointer)?;

        let instance_id = self.board.instance_id();
        let source_data = SourceData {
            kind,
            column_id: Some(source_id.clone()),
            instance_id,
        };
        let accepted = can_drop(&source_data, instance_id);

        let is_column_drag = source_data.kind == DragKind::Column;
        let indicator = {
            let mut views = self.views.borrow_mut();
            if is_column_drag {
                views.entry(source_id.clone()).or_default().drag_start();
            }
            let view = views.entry(target_id.clone()).or_default();
            if accepted {
                view.drop_state_mut().enter(target_data.closest_edge);
            }
            view.drop_state().indicator_edge()
        };

        let drop_targets = if accepted {
            vec![target_data]
        } else {
            Vec::new()
        };
        let event = DropEvent::new(source_data, drop_targets);

        let before = self.last_operation_id();
        let delivered = self.monitor.drop_event(&event);
        tracing::debug!(delivered, accepted, indicator = ?indicator, "Drop delivered");

        {
            let mut views = self.views.borrow_mut();
            if let Some(view) = views.get_mut(&target_id) {
                view.drop_state_mut().drop();
            }
            if let Some(view) = views.get_mut(&source_id) {
                view.drag_end();
            }
        }

        let report = if self.last_operation_id() == before {
            None
        } else {
            Some(self.report()?)
        };
        Ok(DropAttempt {
            accepted,
            indicator,
            report,
        })
    }

    fn target_data(&self, target: &ColumnId, pointer: Pointer) -> Result<TargetData, CliError> {
        match pointer {
            Pointer::NoEdge => Ok(TargetData::column(target.clone())),
            Pointer::Near(edge) => Ok(TargetData::column(target.clone()).with_edge(edge)),
            Pointer::At(position) => {
                let index = self
                    .board
                    .board()
                    .state()
                    .index_of(target)
                    .ok_or_else(|| CliError::ColumnNotFound(target.to_string()))?;
                let axis = self.axis();
                let rect = column_rect(axis, index);
                let point = pointer_point(axis, &rect, position);
                if !rect.contains(point) {
                    return Err(CliError::InvalidMove(format!(
                        "pointer at {position} is not over column {target}"
                    )));
                }
                Ok(attach_closest_edge(target.clone(), point, &rect, allowed_edges(axis)))
            }
        }
    }

    fn require_column(&self, column: &str) -> Result<ColumnId, CliError> {
        let id = ColumnId::from(column);
        if self.board.board().state().column(&id).is_some() {
            Ok(id)
        } else {
            Err(CliError::ColumnNotFound(column.to_string()))
        }
    }

    fn last_operation_id(&self) -> Option<u64> {
        self.board
            .board()
            .state()
            .last_operation()
            .map(|operation| operation.id.0)
    }

    fn report(&self) -> Result<MoveReport, CliError> {
        let board = self.board.board();
        let operation = board
            .state()
            .last_operation()
            .cloned()
            .ok_or_else(|| CliError::InvalidMove("no move was recorded".to_string()))?;
        let summary = board
            .last_summary()
            .filter(|summary| summary.operation_id == operation.id)
            .cloned()
            .ok_or_else(|| CliError::InvalidMove("no effects were dispatched".to_string()))?;

        Ok(MoveReport {
            operation,
            summary,
            flashed_handle: self.flashed.borrow_mut().pop(),
            order: board.state().ordered_column_ids().to_vec(),
        })
    }
}

/// Handle the CLI registers for a column.
pub fn column_handle(column_id: &str) -> String {
    format!("column-{column_id}")
}

/// Bounding box of the column at `index`, laid out along `axis` from the
/// origin with [`COLUMN_GAP`] between columns.
pub fn column_rect(axis: Axis, index: usize) -> Rect {
    #[allow(clippy::cast_precision_loss)]
    let slot = index as f64;
    match axis {
        Axis::Horizontal => Rect::new(
            slot * (COLUMN_WIDTH + COLUMN_GAP),
            0.0,
            COLUMN_WIDTH,
            COLUMN_HEIGHT,
        ),
        Axis::Vertical => Rect::new(
            0.0,
            slot * (COLUMN_HEIGHT + COLUMN_GAP),
            COLUMN_WIDTH,
            COLUMN_HEIGHT,
        ),
    }
}

const fn allowed_edges(axis: Axis) -> &'static [Edge] {
    match axis {
        Axis::Horizontal => &COLUMN_ALLOWED_EDGES,
        Axis::Vertical => &STACKED_ALLOWED_EDGES,
    }
}

/// Pointer halfway across the box, at `position` along the axis.
fn pointer_point(axis: Axis, rect: &Rect, position: f64) -> Point {
    match axis {
        Axis::Horizontal => Point::new(position, rect.y + rect.height / 2.0),
        Axis::Vertical => Point::new(rect.x + rect.width / 2.0, position),
    }
}
