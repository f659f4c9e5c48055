//! Drag-and-drop model for column reordering
//!
//! This module provides a pure data model for the pointer side of column
//! reordering, allowing property-based testing without any UI toolkit.
//!
//! # Module Structure
//!
//! - `types` - Drop notification payloads (`DropEvent`, `SourceData`, `TargetData`, `InstanceId`)
//! - `hitbox` - Closest-edge hit testing (`Edge`, `Rect`, `Point`)
//! - `destination` - Finish index resolution (`Axis`, `EdgeHint`)
//! - `target_state` - Per-column drag feedback (`ColumnViewState`, `ColumnDropState`)
//! - `monitor` - Drop notification subscriptions (`DropMonitor`)
//!
//! # Example
//!
//! ```
//! use colboard_core::drag_drop::{
//!     Axis, COLUMN_ALLOWED_EDGES, Point, Rect, attach_closest_edge, extract_closest_edge,
//!     resolve_destination,
//! };
//!
//! // The pointer is over the left part of the third column
//! let target = attach_closest_edge(
//!     "trello",
//!     Point::new(520.0, 40.0),
//!     &Rect::new(500.0, 0.0, 250.0, 600.0),
//!     &COLUMN_ALLOWED_EDGES,
//! );
//!
//! // Dragging the first column there lands it between the second and third
//! let finish = resolve_destination(0, 2, extract_closest_edge(&target), Axis::Horizontal);
//! assert_eq!(finish, 1);
//! ```

mod destination;
mod hitbox;
mod monitor;
mod target_state;
mod types;

pub use destination::{Axis, EdgeHint, destination_for_hint, resolve_destination};
pub use hitbox::{
    COLUMN_ALLOWED_EDGES, Edge, Point, Rect, attach_closest_edge, closest_edge,
    extract_closest_edge,
};
pub use monitor::{DropMonitor, MonitorSubscription};
pub use target_state::{ColumnDropState, ColumnViewState, can_drop};
pub use types::{DragKind, DropEvent, InstanceId, SourceData, TargetData};
