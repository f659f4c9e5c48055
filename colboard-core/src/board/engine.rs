//! The board engine: owns the state, the registry and the effect services
//!
//! All state changes go through [`Board::reorder_column`] (keyboard and
//! programmatic moves) or [`Board::handle_drop`] (pointer drops). Both end in
//! the same commit path, which replaces the state snapshot and then lets the
//! effects dispatcher react to the new operation.

use std::fmt;

use super::keyboard::KeyboardMove;
use super::operation::{OperationId, Trigger};
use super::state::BoardState;
use crate::drag_drop::{Axis, InstanceId};
use crate::effects::{Announcer, EffectsDispatcher, FlashEffect, LiveRegion, MoveSummary, NoFlash};
use crate::error::{BoardError, BoardResult};
use crate::models::{Column, ColumnId};
use crate::registry::{Registration, Registry};
use crate::tracing::span_names;

/// A board of reorderable columns.
///
/// `H` is the UI handle type column views register (an element reference,
/// a widget ID, ...). The board never inspects it; it only hands it to the
/// flash effect.
pub struct Board<H> {
    pub(super) state: BoardState,
    pub(super) instance_id: InstanceId,
    pub(super) axis: Axis,
    registry: Registry<H>,
    effects: EffectsDispatcher,
    pub(super) announcer: Box<dyn Announcer>,
    flash: Box<dyn FlashEffect<H>>,
    last_summary: Option<MoveSummary>,
    next_operation: u64,
}

impl<H: Clone + 'static> Board<H> {
    /// Creates a board over the given state with a fresh instance ID, a
    /// [`LiveRegion`] announcer and no flash effect.
    #[must_use]
    pub fn new(state: BoardState) -> Self {
        Self {
            state,
            instance_id: InstanceId::new(),
            axis: Axis::Horizontal,
            registry: Registry::new(),
            effects: EffectsDispatcher::new(),
            announcer: Box::new(LiveRegion::new()),
            flash: Box::new(NoFlash),
            last_summary: None,
            next_operation: 1,
        }
    }

    /// Replaces the announcer.
    #[must_use]
    pub fn with_announcer(mut self, announcer: impl Announcer + 'static) -> Self {
        self.announcer = Box::new(announcer);
        self
    }

    /// Replaces the flash effect.
    #[must_use]
    pub fn with_flash(mut self, flash: impl FlashEffect<H> + 'static) -> Self {
        self.flash = Box::new(flash);
        self
    }

    /// Sets the axis the columns are laid out along.
    #[must_use]
    pub const fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Registers a mounted column view's handle.
    ///
    /// The view keeps the registration and drops it when it unmounts.
    pub fn register_column(&self, column_id: impl Into<ColumnId>, handle: H) -> Registration<H> {
        self.registry.register(column_id, handle)
    }

    /// Moves the column at `start_index` to `finish_index`.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::IndexOutOfRange` if either index is outside the
    /// current order. The state is left unchanged in that case.
    pub fn reorder_column(
        &mut self,
        start_index: usize,
        finish_index: usize,
        trigger: Trigger,
    ) -> BoardResult<OperationId> {
        let _span = crate::trace_operation!(
            span_names::BOARD_REORDER,
            start_index,
            finish_index,
            trigger = %trigger
        )
        .entered();

        let id = OperationId(self.next_operation);
        let next = self
            .state
            .commit_reorder(start_index, finish_index, trigger, id)?;
        self.next_operation += 1;
        self.state = next;
        tracing::info!(operation_id = id.0, "Column reorder committed");

        self.sync_effects();
        Ok(id)
    }

    /// Applies a keyboard move to a column.
    ///
    /// Returns `Ok(None)` when the move is not possible from the column's
    /// position (e.g. moving the first column left).
    ///
    /// # Errors
    ///
    /// Returns `BoardError::ColumnNotFound` if the column is not on the board.
    pub fn move_column(
        &mut self,
        column_id: &ColumnId,
        keyboard_move: KeyboardMove,
    ) -> BoardResult<Option<OperationId>> {
        let start_index = self
            .state
            .index_of(column_id)
            .ok_or_else(|| BoardError::ColumnNotFound(column_id.clone()))?;

        match keyboard_move.finish_index(start_index, self.state.len()) {
            Some(finish_index) => self
                .reorder_column(start_index, finish_index, Trigger::Keyboard)
                .map(Some),
            None => {
                tracing::debug!(
                    column_id = %column_id,
                    %keyboard_move,
                    "Keyboard move not available"
                );
                Ok(None)
            }
        }
    }

    /// Runs post-move effects for the latest operation if they have not run
    /// yet. Safe to call after every render; effects fire once per operation.
    pub fn sync_effects(&mut self) -> Option<&MoveSummary> {
        let summary = self.effects.dispatch(
            &self.state,
            &self.registry,
            self.flash.as_mut(),
            self.announcer.as_mut(),
        )?;
        self.last_summary = Some(summary);
        self.last_summary.as_ref()
    }
}

impl<H> Board<H> {
    /// The current state snapshot.
    #[must_use]
    pub const fn state(&self) -> &BoardState {
        &self.state
    }

    /// Columns in display order.
    #[must_use]
    pub fn get_columns(&self) -> Vec<Column> {
        self.state.columns()
    }

    /// This board's instance ID, attached to every drag it originates.
    #[must_use]
    pub const fn instance_id(&self) -> InstanceId {
        self.instance_id
    }

    /// The axis the columns are laid out along.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// A shared handle to the registry, for column views.
    #[must_use]
    pub fn registry(&self) -> Registry<H> {
        self.registry.clone()
    }

    /// What the effects dispatcher did for the most recent operation.
    #[must_use]
    pub const fn last_summary(&self) -> Option<&MoveSummary> {
        self.last_summary.as_ref()
    }
}

impl<H> fmt::Debug for Board<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("instance_id", &self.instance_id)
            .field("axis", &self.axis)
            .field("order", &self.state.ordered_column_ids())
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::board::Outcome;

    fn order(board: &Board<&'static str>) -> Vec<String> {
        board
            .get_columns()
            .into_iter()
            .map(|c| c.column_id.to_string())
            .collect()
    }

    #[test]
    fn reorder_updates_state_and_announces() {
        let region = LiveRegion::new();
        let mut board: Board<&str> = Board::new(BoardState::basic()).with_announcer(region.clone());

        let id = board.reorder_column(0, 2, Trigger::Pointer).unwrap();

        assert_eq!(order(&board), ["jira", "trello", "confluence"]);
        assert_eq!(board.state().last_operation().map(|op| op.id), Some(id));
        assert_eq!(
            region.current_message().as_deref(),
            Some("You've moved Confluence from position 1 to position 3 of 3.")
        );
    }

    #[test]
    fn failed_reorder_keeps_state() {
        let mut board: Board<&str> = Board::new(BoardState::basic());
        let err = board.reorder_column(0, 9, Trigger::Keyboard).unwrap_err();
        assert_eq!(err, BoardError::IndexOutOfRange { index: 9, len: 3 });
        assert!(board.state().last_operation().is_none());
        assert!(board.last_summary().is_none());
    }

    #[test]
    fn sync_effects_does_not_refire() {
        let flashed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&flashed);
        let mut board: Board<&'static str> = Board::new(BoardState::basic())
            .with_flash(move |handle: &&'static str| sink.borrow_mut().push(*handle));
        let _reg = board.register_column("jira", "column-jira");

        board.reorder_column(1, 0, Trigger::Keyboard).unwrap();
        assert!(board.sync_effects().is_none());
        assert!(board.sync_effects().is_none());

        assert_eq!(*flashed.borrow(), ["column-jira"]);
        assert_eq!(board.last_summary().map(|s| s.to_position), Some(1));
    }

    #[test]
    fn keyboard_move_by_column_id() {
        let mut board: Board<&str> = Board::new(BoardState::basic());
        let id = board
            .move_column(&ColumnId::from("confluence"), KeyboardMove::Right)
            .unwrap();
        assert!(id.is_some());
        assert_eq!(order(&board), ["jira", "confluence", "trello"]);

        let outcome = &board.state().last_operation().unwrap().outcome;
        assert!(matches!(
            outcome,
            Outcome::ColumnReorder {
                start_index: 0,
                finish_index: 1,
                ..
            }
        ));
    }

    #[test]
    fn unavailable_keyboard_move_is_ignored() {
        let mut board: Board<&str> = Board::new(BoardState::basic());
        let result = board.move_column(&ColumnId::from("confluence"), KeyboardMove::Left);
        assert_eq!(result, Ok(None));
        assert!(board.state().last_operation().is_none());
    }

    #[test]
    fn keyboard_move_of_unknown_column_fails() {
        let mut board: Board<&str> = Board::new(BoardState::basic());
        let result = board.move_column(&ColumnId::from("asana"), KeyboardMove::Right);
        assert_eq!(result, Err(BoardError::ColumnNotFound(ColumnId::from("asana"))));
    }

    #[test]
    fn operation_ids_increase() {
        let mut board: Board<&str> = Board::new(BoardState::basic());
        let first = board.reorder_column(0, 1, Trigger::Keyboard).unwrap();
        let second = board.reorder_column(1, 0, Trigger::Keyboard).unwrap();
        assert!(second > first);
    }

    #[test]
    fn boards_have_distinct_instances() {
        let a: Board<&str> = Board::new(BoardState::basic());
        let b: Board<&str> = Board::new(BoardState::basic());
        assert_ne!(a.instance_id(), b.instance_id());
    }
}
