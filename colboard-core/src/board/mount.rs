//! Mounted board lifecycle
//!
//! Mounting initialises the announcer and subscribes the board to a
//! [`DropMonitor`]; dropping the [`MountedBoard`] undoes both, whether or not
//! a drag is still in flight.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use super::drop_handler::DropResolution;
use super::engine::Board;
use crate::drag_drop::{DropMonitor, InstanceId, MonitorSubscription};
use crate::models::ColumnId;
use crate::registry::Registration;
use crate::tracing::span_names;

/// A board subscribed to drop notifications.
pub struct MountedBoard<H> {
    board: Rc<RefCell<Board<H>>>,
    instance_id: InstanceId,
    subscription: Option<MonitorSubscription>,
}

impl<H: Clone + 'static> MountedBoard<H> {
    /// Mounts a board: initialises its announcer and subscribes it to drops
    /// started by this board.
    pub fn mount(mut board: Board<H>, monitor: &DropMonitor) -> Self {
        let instance_id = board.instance_id();
        let _span =
            crate::trace_operation!(span_names::BOARD_MOUNT, instance_id = %instance_id).entered();

        board.announcer.init();
        let board = Rc::new(RefCell::new(board));

        let weak = Rc::downgrade(&board);
        let subscription = monitor.monitor(
            move |source| source.instance_id == instance_id,
            move |event| {
                let Some(board) = weak.upgrade() else {
                    tracing::debug!("Drop delivered after unmount");
                    return;
                };
                let Ok(mut board) = board.try_borrow_mut() else {
                    tracing::warn!("Board busy, drop notification ignored");
                    return;
                };
                if let DropResolution::Committed(id) = board.handle_drop(event) {
                    tracing::debug!(operation_id = id.0, "Drop committed");
                }
            },
        );
        tracing::info!("Board mounted");

        Self {
            board,
            instance_id,
            subscription: Some(subscription),
        }
    }

    /// Registers a column view's handle with the board.
    ///
    /// # Panics
    ///
    /// Panics if the board is mutably borrowed, i.e. when called from inside
    /// a flash or announcer callback.
    pub fn register_column(&self, column_id: impl Into<ColumnId>, handle: H) -> Registration<H> {
        self.board.borrow().register_column(column_id, handle)
    }
}

impl<H> MountedBoard<H> {
    /// Borrows the board.
    ///
    /// # Panics
    ///
    /// Panics if the board is currently mutably borrowed.
    #[must_use]
    pub fn board(&self) -> Ref<'_, Board<H>> {
        self.board.borrow()
    }

    /// Mutably borrows the board, for keyboard moves.
    ///
    /// # Panics
    ///
    /// Panics if the board is currently borrowed.
    #[must_use]
    pub fn board_mut(&self) -> RefMut<'_, Board<H>> {
        self.board.borrow_mut()
    }

    /// The mounted board's instance ID.
    #[must_use]
    pub const fn instance_id(&self) -> InstanceId {
        self.instance_id
    }

    /// Returns true while the drop subscription is live.
    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(MonitorSubscription::is_active)
    }

    /// Unmounts the board now.
    pub fn unmount(self) {
        drop(self);
    }
}

impl<H> Drop for MountedBoard<H> {
    fn drop(&mut self) {
        let _span = crate::trace_operation!(
            span_names::BOARD_UNMOUNT,
            instance_id = %self.instance_id
        )
        .entered();

        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
        match self.board.try_borrow_mut() {
            Ok(mut board) => board.announcer.teardown(),
            Err(_) => tracing::warn!("Board busy during unmount, announcer not torn down"),
        }
        tracing::info!("Board unmounted");
    }
}

impl<H> fmt::Debug for MountedBoard<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountedBoard")
            .field("instance_id", &self.instance_id)
            .field("subscribed", &self.subscription.is_some())
            .finish_non_exhaustive()
    }
}
