//! Closest-edge hit testing for drop targets
//!
//! A drop target decides which of its edges the pointer is nearest to, and
//! stores that edge in its target data. The board later reads it back to
//! decide whether the dragged column lands before or after the target.

use std::fmt;

use super::types::TargetData;
use crate::models::ColumnId;

/// An edge of a rectangular drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Top edge
    Top,
    /// Right edge
    Right,
    /// Bottom edge
    Bottom,
    /// Left edge
    Left,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Right => write!(f, "right"),
            Self::Bottom => write!(f, "bottom"),
            Self::Left => write!(f, "left"),
        }
    }
}

/// Edges a column accepts drops on. Columns sit side by side, so only the
/// horizontal edges are meaningful.
pub const COLUMN_ALLOWED_EDGES: [Edge; 2] = [Edge::Left, Edge::Right];

/// A pointer position in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The bounding box of a drop target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left coordinate
    pub x: f64,
    /// Top coordinate
    pub y: f64,
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns true if the point lies inside the rectangle (edges included).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Distance from the point to the line of the given edge.
    fn distance_to(&self, edge: Edge, point: Point) -> f64 {
        match edge {
            Edge::Top => (point.y - self.y).abs(),
            Edge::Right => (self.x + self.width - point.x).abs(),
            Edge::Bottom => (self.y + self.height - point.y).abs(),
            Edge::Left => (point.x - self.x).abs(),
        }
    }
}

/// Returns the allowed edge of `rect` closest to `point`.
///
/// Ties go to the edge listed first in `allowed_edges`. Returns `None` when
/// no edges are allowed.
#[must_use]
pub fn closest_edge(point: Point, rect: &Rect, allowed_edges: &[Edge]) -> Option<Edge> {
    allowed_edges
        .iter()
        .copied()
        .map(|edge| (edge, rect.distance_to(edge, point)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(edge, _)| edge)
}

/// Builds the target data of a column drop target for the current pointer
/// position.
#[must_use]
pub fn attach_closest_edge(
    column_id: impl Into<ColumnId>,
    point: Point,
    rect: &Rect,
    allowed_edges: &[Edge],
) -> TargetData {
    TargetData {
        column_id: Some(column_id.into()),
        closest_edge: closest_edge(point, rect, allowed_edges),
    }
}

/// Reads the closest edge back out of a target's data.
#[must_use]
pub const fn extract_closest_edge(data: &TargetData) -> Option<Edge> {
    data.closest_edge
}
