use super::*;

use crate::grid::{CellType, SeatSnapshot, StudentInfo};
use crate::selection::Selection;

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

/// 3x3 seats with students 1 and 2 at (0,0) and (0,1); (2,0) is a podium.
fn grid_3x3() -> SeatGrid {
    let mut grid = SeatGrid::new();
    let mut seats = Vec::new();
    for row in 0..3 {
        for col in 0..3 {
            let mut snapshot = seat(
                row,
                col,
                match (row, col) {
                    (0, 0) => Some(1),
                    (0, 1) => Some(2),
                    _ => None,
                },
            );
            if (row, col) == (2, 0) {
                snapshot.cell_type = CellType::Podium;
            }
            seats.push(snapshot);
        }
    }
    grid.load_snapshot(seats);
    grid
}

fn multi_session(grid: &SeatGrid) -> DragSession {
    let mut selection = Selection::new();
    selection.add_to_multi(key(0, 0));
    selection.add_to_multi(key(0, 1));
    DragSession::begin_from_seat(grid, &selection, key(0, 0)).expect("occupied anchor")
}

fn single_session(grid: &SeatGrid) -> DragSession {
    DragSession::begin_from_seat(grid, &Selection::new(), key(0, 0)).expect("occupied anchor")
}

fn marks_of(preview: &Preview, decoration: Decoration) -> Vec<SeatKey> {
    preview
        .marks
        .iter()
        .filter(|(_, d)| *d == decoration)
        .map(|(k, _)| *k)
        .collect()
}

fn hint_label(preview: &Preview) -> Option<&str> {
    preview.hint.as_ref().map(|(_, h)| h.label.as_str())
}

// =============================================================
// Idle and non-seat hover
// =============================================================

#[test]
fn idle_session_renders_nothing() {
    let grid = grid_3x3();
    let preview = compute_preview(&grid, &DragSession::Idle, key(1, 1));
    assert_eq!(preview, Preview::empty());
}

#[test]
fn non_seat_hover_is_invalid() {
    let grid = grid_3x3();
    let session = single_session(&grid);
    let preview = compute_preview(&grid, &session, key(2, 0));
    assert_eq!(marks_of(&preview, Decoration::InvalidTarget), vec![key(2, 0)]);
    let (_, hint) = preview.hint.expect("hint present");
    assert_eq!(hint.tone, HintTone::Invalid);
}

// =============================================================
// Single mode
// =============================================================

#[test]
fn single_drag_marks_origin() {
    let grid = grid_3x3();
    let session = single_session(&grid);
    let preview = compute_preview(&grid, &session, key(1, 1));
    assert_eq!(marks_of(&preview, Decoration::Origin), vec![key(0, 0)]);
}

#[test]
fn hovering_the_origin_says_stays_in_place() {
    let grid = grid_3x3();
    let session = single_session(&grid);
    let preview = compute_preview(&grid, &session, key(0, 0));
    assert_eq!(hint_label(&preview), Some("stays in place"));
    let (_, hint) = preview.hint.expect("hint present");
    assert_eq!(hint.tone, HintTone::Neutral);
}

#[test]
fn hovering_an_occupied_seat_says_will_swap() {
    let grid = grid_3x3();
    let session = single_session(&grid);
    let preview = compute_preview(&grid, &session, key(0, 1));
    assert_eq!(hint_label(&preview), Some("will swap"));
}

#[test]
fn hovering_an_empty_seat_says_will_move_here() {
    let grid = grid_3x3();
    let session = single_session(&grid);
    let preview = compute_preview(&grid, &session, key(1, 1));
    assert_eq!(hint_label(&preview), Some("will move here"));
}

#[test]
fn roster_drag_has_no_origin_mark() {
    let grid = grid_3x3();
    let session = DragSession::begin_from_roster(7);
    let preview = compute_preview(&grid, &session, key(1, 1));
    assert!(marks_of(&preview, Decoration::Origin).is_empty());
    assert_eq!(hint_label(&preview), Some("will move here"));
}

// =============================================================
// Multi mode
// =============================================================

#[test]
fn valid_multi_plan_marks_origins_and_targets() {
    let grid = grid_3x3();
    let session = multi_session(&grid);
    let preview = compute_preview(&grid, &session, key(1, 0));
    assert_eq!(marks_of(&preview, Decoration::Origin), vec![key(0, 0), key(0, 1)]);
    assert_eq!(marks_of(&preview, Decoration::ValidTarget), vec![key(1, 0), key(1, 1)]);
    assert_eq!(hint_label(&preview), Some("will move 2 people"));
    let (hovered, hint) = preview.hint.expect("hint present");
    assert_eq!(hovered, key(1, 0));
    assert_eq!(hint.tone, HintTone::Valid);
}

#[test]
fn failed_multi_plan_marks_partials_and_hovered_invalid() {
    let grid = grid_3x3();
    let session = multi_session(&grid);
    // Anchor to (0,2) pushes the second seat off the grid.
    let preview = compute_preview(&grid, &session, key(0, 2));
    let invalid = marks_of(&preview, Decoration::InvalidTarget);
    assert!(invalid.contains(&key(0, 2)));
    assert_eq!(hint_label(&preview), Some("target is not a seat"));
    let (_, hint) = preview.hint.expect("hint present");
    assert_eq!(hint.tone, HintTone::Invalid);
}

#[test]
fn preview_does_not_mutate_the_grid() {
    let grid = grid_3x3();
    let session = multi_session(&grid);
    let _ = compute_preview(&grid, &session, key(1, 0));
    let _ = compute_preview(&grid, &session, key(0, 2));
    assert_eq!(grid.occupant(key(0, 0)), Some(1));
    assert_eq!(grid.occupant(key(0, 1)), Some(2));
    assert_eq!(grid.occupant(key(1, 0)), None);
}

#[test]
fn repeated_hover_yields_identical_previews() {
    let grid = grid_3x3();
    let session = multi_session(&grid);
    let first = compute_preview(&grid, &session, key(1, 1));
    let second = compute_preview(&grid, &session, key(1, 1));
    assert_eq!(first, second);
}
