use super::*;

use crate::grid::{CellType, SeatSnapshot, StudentInfo};

fn key(row: i32, col: i32) -> SeatKey {
    SeatKey::new(row, col)
}

fn seat(row: i32, col: i32, student: Option<i64>) -> SeatSnapshot {
    SeatSnapshot {
        row,
        col,
        cell_type: CellType::Seat,
        cell_type_display: String::new(),
        student: student.map(|id| StudentInfo { id, name: format!("s{id}"), score_display: None }),
        group: None,
    }
}

/// 2x2 of seats; students 1 and 2 in the top row.
fn grid() -> SeatGrid {
    let mut grid = SeatGrid::new();
    grid.load_snapshot(vec![
        seat(0, 0, Some(1)),
        seat(0, 1, Some(2)),
        seat(1, 0, None),
        seat(1, 1, None),
    ]);
    grid
}

// =============================================================
// Session lifecycle
// =============================================================

#[test]
fn default_session_is_idle() {
    let session = DragSession::default();
    assert!(!session.is_active());
    assert_eq!(session.mode(), None);
    assert_eq!(session.student(), None);
    assert!(session.sources().is_empty());
}

#[test]
fn end_returns_to_idle_from_any_state() {
    let grid = grid();
    let selection = Selection::new();

    let mut session =
        DragSession::begin_from_seat(&grid, &selection, key(0, 0)).expect("occupied seat");
    assert!(session.is_active());
    session.end();
    assert!(!session.is_active());

    let mut session = DragSession::begin_from_roster(9);
    session.end();
    assert!(!session.is_active());

    let mut session = DragSession::Idle;
    session.end();
    assert!(!session.is_active());
}

// =============================================================
// Drag start from a seat
// =============================================================

#[test]
fn seat_drag_captures_anchor_and_student() {
    let grid = grid();
    let selection = Selection::new();
    let session =
        DragSession::begin_from_seat(&grid, &selection, key(0, 1)).expect("occupied seat");
    assert_eq!(session.anchor(), Some(key(0, 1)));
    assert_eq!(session.student(), Some(2));
    assert_eq!(session.mode(), Some(DragMode::Single));
    assert_eq!(session.sources(), &[key(0, 1)]);
}

#[test]
fn empty_seat_cannot_start_a_drag() {
    let grid = grid();
    let selection = Selection::new();
    assert!(DragSession::begin_from_seat(&grid, &selection, key(1, 0)).is_none());
}

#[test]
fn missing_cell_cannot_start_a_drag() {
    let grid = grid();
    let selection = Selection::new();
    assert!(DragSession::begin_from_seat(&grid, &selection, key(9, 9)).is_none());
}

#[test]
fn selected_anchor_with_peers_enters_multi_mode() {
    let grid = grid();
    let mut selection = Selection::new();
    selection.add_to_multi(key(0, 0));
    selection.add_to_multi(key(0, 1));

    let session =
        DragSession::begin_from_seat(&grid, &selection, key(0, 0)).expect("occupied seat");
    assert_eq!(session.mode(), Some(DragMode::Multi));
    assert_eq!(session.sources(), &[key(0, 0), key(0, 1)]);
}

#[test]
fn multi_sources_preserve_selection_order() {
    let grid = grid();
    let mut selection = Selection::new();
    selection.add_to_multi(key(0, 1));
    selection.add_to_multi(key(0, 0));

    let session =
        DragSession::begin_from_seat(&grid, &selection, key(0, 1)).expect("occupied seat");
    assert_eq!(session.sources(), &[key(0, 1), key(0, 0)]);
}

#[test]
fn unselected_anchor_downgrades_to_single_mode() {
    // Other seats are selected, but the grabbed seat is not among them:
    // the drag follows the grabbed seat's own membership.
    let mut grid_data = grid();
    grid_data.load_snapshot(vec![
        seat(0, 0, Some(1)),
        seat(0, 1, Some(2)),
        seat(1, 0, Some(3)),
        seat(1, 1, None),
    ]);
    let mut selection = Selection::new();
    selection.add_to_multi(key(0, 0));
    selection.add_to_multi(key(0, 1));

    let session =
        DragSession::begin_from_seat(&grid_data, &selection, key(1, 0)).expect("occupied seat");
    assert_eq!(session.mode(), Some(DragMode::Single));
    assert_eq!(session.sources(), &[key(1, 0)]);
}

#[test]
fn selection_of_one_eligible_seat_stays_single() {
    let grid = grid();
    let mut selection = Selection::new();
    selection.add_to_multi(key(0, 0));
    // (1, 1) is selected but empty, so only one eligible seat remains.
    selection.add_to_multi(key(1, 1));

    let session =
        DragSession::begin_from_seat(&grid, &selection, key(0, 0)).expect("occupied seat");
    assert_eq!(session.mode(), Some(DragMode::Single));
    assert_eq!(session.sources(), &[key(0, 0)]);
}

#[test]
fn unoccupied_selected_seats_are_filtered_from_sources() {
    let grid = grid();
    let mut selection = Selection::new();
    selection.add_to_multi(key(0, 0));
    selection.add_to_multi(key(1, 0)); // empty
    selection.add_to_multi(key(0, 1));

    let session =
        DragSession::begin_from_seat(&grid, &selection, key(0, 0)).expect("occupied seat");
    assert_eq!(session.mode(), Some(DragMode::Multi));
    assert_eq!(session.sources(), &[key(0, 0), key(0, 1)]);
}

// =============================================================
// Drag start from the roster
// =============================================================

#[test]
fn roster_drag_has_no_anchor() {
    let session = DragSession::begin_from_roster(7);
    assert!(session.is_active());
    assert_eq!(session.anchor(), None);
    assert_eq!(session.student(), Some(7));
    assert_eq!(session.mode(), Some(DragMode::Single));
    assert!(session.sources().is_empty());
}

// =============================================================
// Selection is read at drag start only
// =============================================================

#[test]
fn selection_changes_after_start_do_not_alter_sources() {
    let grid = grid();
    let mut selection = Selection::new();
    selection.add_to_multi(key(0, 0));
    selection.add_to_multi(key(0, 1));

    let session =
        DragSession::begin_from_seat(&grid, &selection, key(0, 0)).expect("occupied seat");
    selection.clear_multi();
    assert_eq!(session.sources(), &[key(0, 0), key(0, 1)]);
}
