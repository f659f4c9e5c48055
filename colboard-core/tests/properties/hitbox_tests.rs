//! Property-based tests for closest-edge hit testing

use colboard_core::{
    COLUMN_ALLOWED_EDGES, Edge, Point, Rect, attach_closest_edge, closest_edge,
    extract_closest_edge,
};
use proptest::prelude::*;

/// Strategy for generating column rectangles
fn rect_strategy() -> impl Strategy<Value = Rect> {
    (0.0..2000.0f64, 0.0..200.0f64, 40.0..400.0f64, 100.0..900.0f64)
        .prop_map(|(x, y, width, height)| Rect::new(x, y, width, height))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Columns only ever report a left or right edge.
    #[test]
    fn prop_columns_report_horizontal_edges(
        rect in rect_strategy(),
        x_ratio in 0.0..1.0f64,
        y_ratio in 0.0..1.0f64,
    ) {
        let point = Point::new(rect.x + x_ratio * rect.width, rect.y + y_ratio * rect.height);
        let edge = closest_edge(point, &rect, &COLUMN_ALLOWED_EDGES);
        prop_assert!(matches!(edge, Some(Edge::Left | Edge::Right)));
    }

    /// The left half of a column is its left edge, the right half its right
    /// edge.
    #[test]
    fn prop_half_decides_edge(
        rect in rect_strategy(),
        x_ratio in 0.0..1.0f64,
    ) {
        prop_assume!((x_ratio - 0.5).abs() > 1e-6);
        let point = Point::new(rect.x + x_ratio * rect.width, rect.y);
        let expected = if x_ratio < 0.5 { Edge::Left } else { Edge::Right };
        prop_assert_eq!(closest_edge(point, &rect, &COLUMN_ALLOWED_EDGES), Some(expected));
    }

    /// Target data carries exactly the edge hit testing computed.
    #[test]
    fn prop_attached_edge_is_extracted(
        rect in rect_strategy(),
        x_ratio in 0.0..1.0f64,
        y_ratio in 0.0..1.0f64,
    ) {
        let point = Point::new(rect.x + x_ratio * rect.width, rect.y + y_ratio * rect.height);
        let data = attach_closest_edge("jira", point, &rect, &COLUMN_ALLOWED_EDGES);
        prop_assert_eq!(
            extract_closest_edge(&data),
            closest_edge(point, &rect, &COLUMN_ALLOWED_EDGES)
        );
    }
}

#[test]
fn no_allowed_edges_means_no_edge() {
    let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert_eq!(closest_edge(Point::new(10.0, 10.0), &rect, &[]), None);
}

#[test]
fn exact_middle_goes_to_first_allowed_edge() {
    let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
    let point = Point::new(50.0, 20.0);
    assert_eq!(closest_edge(point, &rect, &[Edge::Left, Edge::Right]), Some(Edge::Left));
    assert_eq!(closest_edge(point, &rect, &[Edge::Right, Edge::Left]), Some(Edge::Right));
}
