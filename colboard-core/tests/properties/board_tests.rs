//! Property-based tests for board state transitions
//!
//! Random sequences of keyboard moves and pointer drops are applied to a
//! mounted board; every reachable state must keep the order a permutation
//! of the column set, and effects must fire exactly once per committed move.

use colboard_core::{
    Board, BoardState, Column, DropEvent, DropMonitor, DropResolution, Edge, KeyboardMove,
    LiveRegion, MountedBoard, OperationId, SourceData, TargetData, Trigger,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Interaction {
    /// Keyboard reorder by index (indices taken modulo the column count)
    Reorder(usize, usize),
    /// Keyboard menu move of the n-th column
    Menu(usize, KeyboardMove),
    /// Pointer drop of the n-th column on the m-th column
    Drop(usize, usize, Option<Edge>),
    /// Pointer drop outside every target
    EmptyDrop(usize),
}

fn keyboard_move_strategy() -> impl Strategy<Value = KeyboardMove> {
    prop_oneof![
        Just(KeyboardMove::Left),
        Just(KeyboardMove::Right),
        Just(KeyboardMove::First),
        Just(KeyboardMove::Last),
    ]
}

fn edge_strategy() -> impl Strategy<Value = Option<Edge>> {
    prop_oneof![Just(None), Just(Some(Edge::Left)), Just(Some(Edge::Right))]
}

fn interaction_strategy() -> impl Strategy<Value = Interaction> {
    prop_oneof![
        (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Interaction::Reorder(a, b)),
        (any::<usize>(), keyboard_move_strategy()).prop_map(|(a, m)| Interaction::Menu(a, m)),
        (any::<usize>(), any::<usize>(), edge_strategy())
            .prop_map(|(a, b, e)| Interaction::Drop(a, b, e)),
        any::<usize>().prop_map(Interaction::EmptyDrop),
    ]
}

fn columns_strategy() -> impl Strategy<Value = Vec<Column>> {
    (1usize..8).prop_map(|count| {
        (0..count)
            .map(|i| Column::new(format!("col-{i}"), format!("Column {i}")))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_interactions_preserve_column_set(
        columns in columns_strategy(),
        interactions in prop::collection::vec(interaction_strategy(), 0..30),
    ) {
        let monitor = DropMonitor::new();
        let region = LiveRegion::new();
        let board: Board<u32> = Board::new(BoardState::new(columns.clone()).unwrap())
            .with_announcer(region.clone());
        let board = MountedBoard::mount(board, &monitor);
        let len = columns.len();

        let mut committed = 0usize;
        let mut last_id: Option<OperationId> = None;

        for interaction in interactions {
            let before = board.board().state().clone();
            let id_at = |index: usize| before.ordered_column_ids()[index % len].clone();

            match interaction {
                Interaction::Reorder(start, finish) => {
                    board
                        .board_mut()
                        .reorder_column(start % len, finish % len, Trigger::Keyboard)
                        .unwrap();
                    committed += 1;
                }
                Interaction::Menu(index, keyboard_move) => {
                    let result = board
                        .board_mut()
                        .move_column(&id_at(index), keyboard_move)
                        .unwrap();
                    let possible = keyboard_move.finish_index(index % len, len).is_some();
                    prop_assert_eq!(result.is_some(), possible);
                    if possible {
                        committed += 1;
                    }
                }
                Interaction::Drop(source, target, edge) => {
                    let mut target_data = TargetData::column(id_at(target));
                    target_data.closest_edge = edge;
                    let event = DropEvent::new(
                        SourceData::column(id_at(source), board.instance_id()),
                        vec![target_data],
                    );
                    prop_assert_eq!(monitor.drop_event(&event), 1);
                    committed += 1;
                }
                Interaction::EmptyDrop(source) => {
                    let event = DropEvent::new(
                        SourceData::column(id_at(source), board.instance_id()),
                        Vec::new(),
                    );
                    monitor.drop_event(&event);
                    prop_assert_eq!(board.board().state().clone(), before.clone());
                }
            }

            let state = board.board().state().clone();
            prop_assert!(state.is_consistent());
            prop_assert_eq!(state.len(), len);

            let id = state.last_operation().map(|op| op.id);
            if let (Some(previous), Some(current)) = (last_id, id) {
                prop_assert!(current >= previous);
            }
            last_id = id;
        }

        // effects fired once per committed move, however the move was made
        prop_assert_eq!(region.history().len(), committed);
        prop_assert!(board.board_mut().sync_effects().is_none());
    }
}

#[test]
fn empty_drop_never_sets_last_operation() {
    let mut board: Board<u32> = Board::new(BoardState::basic());
    let event = DropEvent::new(SourceData::column("trello", board.instance_id()), Vec::new());

    assert!(matches!(board.handle_drop(&event), DropResolution::Ignored(_)));
    assert!(board.state().last_operation().is_none());
    assert_eq!(board.state(), &BoardState::basic());
}
