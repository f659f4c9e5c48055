//! Post-move effects dispatch
//!
//! Runs the flash and the announcement exactly once per committed
//! operation, however often the board asks it to synchronise.

use serde::Serialize;

use super::announcer::Announcer;
use super::flash::FlashEffect;
use crate::board::{BoardState, OperationId, Outcome};
use crate::models::ColumnId;
use crate::registry::Registry;

/// Builds the announcement for a column move. Positions are 1-based.
#[must_use]
pub fn announcement_text(
    title: &str,
    start_index: usize,
    finish_index: usize,
    total: usize,
) -> String {
    format!(
        "You've moved {title} from position {} to position {} of {total}.",
        start_index + 1,
        finish_index + 1
    )
}

/// What the dispatcher did for one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveSummary {
    /// The operation the effects belong to
    pub operation_id: OperationId,
    /// The moved column
    pub column_id: ColumnId,
    /// 1-based position before the move
    pub from_position: usize,
    /// 1-based position after the move
    pub to_position: usize,
    /// Number of columns on the board
    pub total: usize,
    /// Whether a mounted handle was found and flashed
    pub flashed: bool,
    /// The announced text
    pub announcement: String,
}

/// Edge-triggered runner of post-move effects.
#[derive(Debug, Default)]
pub struct EffectsDispatcher {
    last_dispatched: Option<OperationId>,
}

impl EffectsDispatcher {
    /// Creates a dispatcher that has not seen any operation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last operation effects were dispatched for.
    #[must_use]
    pub const fn last_dispatched(&self) -> Option<OperationId> {
        self.last_dispatched
    }

    /// Runs effects for the state's latest operation if it has not been
    /// handled yet.
    ///
    /// A column without a mounted handle is announced but not flashed; the
    /// move itself has already been committed and stays.
    pub fn dispatch<H: Clone>(
        &mut self,
        state: &BoardState,
        registry: &Registry<H>,
        flash: &mut dyn FlashEffect<H>,
        announcer: &mut dyn Announcer,
    ) -> Option<MoveSummary> {
        let operation = state.last_operation()?;
        if self.last_dispatched == Some(operation.id) {
            return None;
        }
        self.last_dispatched = Some(operation.id);

        let _span = crate::trace_operation_debug!(
            crate::tracing::span_names::EFFECTS_DISPATCH,
            operation_id = operation.id.0
        )
        .entered();

        match &operation.outcome {
            Outcome::ColumnReorder {
                column_id,
                start_index,
                finish_index,
            } => {
                let Some(column) = state.column(column_id) else {
                    tracing::warn!(column_id = %column_id, "Moved column missing from board");
                    return None;
                };

                let flashed = match registry.lookup(column_id) {
                    Ok(handle) => {
                        flash.trigger_flash(&handle);
                        true
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Skipping post-move flash");
                        false
                    }
                };

                let total = state.len();
                let announcement =
                    announcement_text(&column.title, *start_index, *finish_index, total);
                announcer.announce(&announcement);
                tracing::debug!(column_id = %column_id, flashed, "Post-move effects dispatched");

                Some(MoveSummary {
                    operation_id: operation.id,
                    column_id: column_id.clone(),
                    from_position: start_index + 1,
                    to_position: finish_index + 1,
                    total,
                    flashed,
                    announcement,
                })
            }
            Outcome::Unknown => {
                tracing::debug!(operation_id = operation.id.0, "No effects for unknown outcome");
                None
            }
        }
    }
}
