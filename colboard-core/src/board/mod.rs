//! Board state, operations and the reorder coordinator
//!
//! [`BoardState`] is the pure order model. [`Board`] owns the current state
//! together with the registry and the post-move effects, and is the only
//! place a new state is committed. [`MountedBoard`] connects a board to a
//! [`DropMonitor`](crate::drag_drop::DropMonitor) for pointer drops.

mod drop_handler;
mod engine;
mod keyboard;
mod mount;
mod operation;
mod state;

pub use drop_handler::{DropResolution, IgnoreReason};
pub use engine::Board;
pub use keyboard::{KeyboardMove, available_moves};
pub use mount::MountedBoard;
pub use operation::{Operation, OperationId, Outcome, Trigger};
pub use state::BoardState;
