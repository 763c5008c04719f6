use super::*;

use chart::grid::{SeatKey, SeatSnapshot};

fn seat(row: i32, col: i32, student: Option<(StudentId, &str)>) -> SeatSnapshot {
    SeatSnapshot {
        row,
        col,
        cell_type: chart::grid::CellType::Seat,
        cell_type_display: String::new(),
        student: student.map(|(id, name)| StudentInfo {
            id,
            name: name.to_owned(),
            score_display: None,
        }),
        group: None,
    }
}

fn unseated(id: StudentId, name: &str) -> StudentInfo {
    StudentInfo { id, name: name.to_owned(), score_display: None }
}

fn snapshot(seats: Vec<SeatSnapshot>, roster: Vec<StudentInfo>) -> StateSnapshot {
    let unseated_count = u32::try_from(roster.len()).unwrap();
    StateSnapshot { seats, unseated: roster, unseated_count, suggestions: Vec::new() }
}

// =============================================================
// apply_snapshot
// =============================================================

#[test]
fn snapshot_replaces_grid_and_roster() {
    let mut state = ChartState::default();
    state.apply_snapshot(snapshot(
        vec![seat(0, 0, Some((1, "Ada")))],
        vec![unseated(2, "Bea")],
    ));

    assert_eq!(state.core.grid.len(), 1);
    assert_eq!(state.roster.len(), 1);
    assert_eq!(state.unseated_count, 1);
}

#[test]
fn roster_selection_survives_when_student_still_unseated() {
    let mut state = ChartState::default();
    state.selected_unseated = Some(2);
    state.apply_snapshot(snapshot(Vec::new(), vec![unseated(2, "Bea")]));
    assert_eq!(state.selected_unseated, Some(2));
}

#[test]
fn roster_selection_drops_when_student_got_seated() {
    let mut state = ChartState::default();
    state.selected_unseated = Some(2);
    state.apply_snapshot(snapshot(vec![seat(0, 0, Some((2, "Bea")))], Vec::new()));
    assert_eq!(state.selected_unseated, None);
}

#[test]
fn seat_selection_is_reconciled_by_key() {
    let mut state = ChartState::default();
    state.apply_snapshot(snapshot(vec![seat(0, 0, Some((1, "Ada")))], Vec::new()));
    state.core.on_seat_click(SeatKey::new(0, 0), chart::selection::Modifiers::default());
    assert_eq!(state.core.selection.selected(), Some(SeatKey::new(0, 0)));

    // The seat survives the reload, so the selection does too.
    state.apply_snapshot(snapshot(vec![seat(0, 0, Some((1, "Ada")))], Vec::new()));
    assert_eq!(state.core.selection.selected(), Some(SeatKey::new(0, 0)));

    // A reload without the seat clears it.
    state.apply_snapshot(snapshot(Vec::new(), Vec::new()));
    assert_eq!(state.core.selection.selected(), None);
}
