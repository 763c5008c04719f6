//! Top-level chart engine: event entry points and host-facing actions.
//!
//! `ChartCore` owns the grid, selection, and drag session for one page
//! session and is constructed once; event handlers borrow it instead of
//! reaching for shared globals. Input events come in, [`Action`]s come
//! out; the host submits them to the server and reloads the snapshot on
//! success. The engine never performs I/O itself.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::drag::{DragMode, DragSession};
use crate::grid::{SeatGrid, SeatKey, SeatSnapshot, StudentId};
use crate::plan::{Move, build_multi_drop_plan};
use crate::preview::{Preview, compute_preview};
use crate::selection::{Marquee, Modifiers, ScreenPoint, ScreenRect, Selection};

/// What the host should do in response to an input event.
///
/// `Reject` surfaces a locally detected planning failure as a blocking
/// message; no request is sent. Everything else maps to one server call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nothing to do (no-op drop, ineligible target, empty clipboard...).
    None,
    /// Relocate one seated student.
    Move { student: StudentId, to: SeatKey },
    /// Seat a student who is not currently placed (or re-place a copied one).
    Assign { student: StudentId, to: SeatKey },
    /// Atomic batch relocation of the multi-selection.
    MoveBatch { moves: Vec<Move> },
    /// Remove the occupant of a seat.
    ClearSeat { at: SeatKey },
    /// The user forced a drop on an invalid plan; show `message`, send nothing.
    Reject { message: String },
}

/// Engine state for one classroom page.
#[derive(Debug, Clone, Default)]
pub struct ChartCore {
    pub grid: SeatGrid,
    pub selection: Selection,
    pub drag: DragSession,
    clipboard: Option<StudentId>,
    marquee: Option<Marquee>,
}

impl ChartCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Hydrate the grid from a server snapshot.
    ///
    /// Selection identity is restored by key; entries whose keys no longer
    /// resolve to a seat are dropped. An active drag is left alone — the
    /// planner re-reads the grid on the next drag-over anyway.
    pub fn load_snapshot(&mut self, seats: Vec<SeatSnapshot>) {
        self.grid.load_snapshot(seats);
        self.selection.reconcile(&self.grid);
    }

    // --- Pointer events ---

    /// Track the seat under the pointer, for keyboard actions.
    pub fn on_seat_hover(&mut self, key: SeatKey) {
        if self.grid.get(key).is_some() {
            self.selection.set_last_hovered(key);
        }
    }

    /// A plain or modified click on a cell.
    pub fn on_seat_click(&mut self, key: SeatKey, modifiers: Modifiers) {
        if !self.grid.is_seat(key) {
            return;
        }
        if modifiers.extends_selection() {
            self.selection.add_to_multi(key);
        } else if self.selection.group_mode() {
            self.selection.toggle_multi(key);
        } else {
            self.selection.set_selected(Some(key));
        }
    }

    // --- Group mode ---

    /// Whether item dragging is currently enabled (it is suspended while
    /// group mode is on).
    #[must_use]
    pub fn drag_enabled(&self) -> bool {
        !self.selection.group_mode()
    }

    pub fn set_group_mode(&mut self, enabled: bool) {
        self.selection.set_group_mode(enabled);
    }

    /// The ordered seat keys a group-assign-batch request should cover.
    #[must_use]
    pub fn group_batch_keys(&self) -> Vec<SeatKey> {
        self.selection.multi().to_vec()
    }

    // --- Drag session ---

    /// Start dragging from a seat. Returns `false` (and stays idle) when
    /// dragging is suspended or the seat has no occupant to carry.
    pub fn begin_seat_drag(&mut self, anchor: SeatKey) -> bool {
        if !self.drag_enabled() {
            return false;
        }
        match DragSession::begin_from_seat(&self.grid, &self.selection, anchor) {
            Some(session) => {
                self.drag = session;
                true
            }
            None => false,
        }
    }

    /// Start dragging a student from the unseated roster.
    pub fn begin_roster_drag(&mut self, student: StudentId) -> bool {
        if !self.drag_enabled() {
            return false;
        }
        self.drag = DragSession::begin_from_roster(student);
        true
    }

    /// Recompute drag feedback for the hovered cell. Call on every
    /// drag-over; the result replaces all previous decorations.
    #[must_use]
    pub fn on_drag_over(&self, hovered: SeatKey) -> Preview {
        compute_preview(&self.grid, &self.drag, hovered)
    }

    /// A drop on `target`. Consumes the session and returns the request
    /// the host should submit, if any.
    ///
    /// The plan is recomputed fresh here; a cached preview is never
    /// trusted. `payload_student` is the platform drag payload, used as a
    /// fallback when no session is active (e.g. a reload mid-drag).
    pub fn on_drop(&mut self, target: SeatKey, payload_student: Option<StudentId>) -> Action {
        let session = std::mem::take(&mut self.drag);

        if !self.grid.is_seat(target) {
            return Action::None;
        }

        match session {
            DragSession::Idle => match payload_student {
                Some(student) => Action::Move { student, to: target },
                None => Action::None,
            },
            DragSession::Roster { student } => Action::Assign { student, to: target },
            DragSession::Seat { anchor, student, mode: DragMode::Single, .. } => {
                if anchor == target {
                    Action::None
                } else {
                    Action::Move { student, to: target }
                }
            }
            DragSession::Seat { anchor, mode: DragMode::Multi, ref sources, .. } => {
                match build_multi_drop_plan(&self.grid, anchor, sources, target) {
                    Ok(plan) if plan.is_noop() => Action::None,
                    Ok(plan) => Action::MoveBatch { moves: plan.moves },
                    Err(failure) => Action::Reject { message: failure.to_string() },
                }
            }
        }
    }

    /// Drag finished, with or without a drop. Always returns the session
    /// to idle.
    pub fn on_drag_end(&mut self) {
        self.drag.end();
    }

    /// The server accepted `action`. A batch move retires the
    /// multi-selection that produced it; the vacated source keys are still
    /// seat-typed, so the post-refresh reconcile would keep them otherwise.
    pub fn on_commit_success(&mut self, action: &Action) {
        if matches!(action, Action::MoveBatch { .. }) {
            self.selection.clear_multi();
        }
    }

    // --- Marquee ---

    /// Pointer-down on empty stage area. Begins a marquee on a
    /// primary-button press when group mode or a modifier key allows it;
    /// without a modifier the existing multi-selection is replaced rather
    /// than extended. `button` follows the DOM convention (0 is primary).
    pub fn on_stage_press(&mut self, at: ScreenPoint, button: i16, modifiers: Modifiers) -> bool {
        if button != 0 {
            return false;
        }
        if !(self.selection.group_mode() || modifiers.extends_selection()) {
            return false;
        }
        if !modifiers.extends_selection() {
            self.selection.clear_multi();
        }
        self.marquee = Some(Marquee::new(at));
        true
    }

    /// Pointer moved while a marquee is active. Returns the rectangle to
    /// render, or `None` when no marquee is in progress.
    pub fn on_stage_move(&mut self, at: ScreenPoint) -> Option<ScreenRect> {
        let marquee = self.marquee.as_mut()?;
        marquee.cursor = at;
        Some(marquee.rect())
    }

    /// Pointer released: commit the marquee against the seats' current
    /// screen bounding boxes.
    pub fn on_stage_release(&mut self, at: ScreenPoint, seat_bounds: &[(SeatKey, ScreenRect)]) {
        let Some(mut marquee) = self.marquee.take() else {
            return;
        };
        marquee.cursor = at;
        self.selection.apply_marquee(&self.grid, marquee.rect(), seat_bounds);
    }

    /// Whether a marquee gesture is in progress.
    #[must_use]
    pub fn marquee_active(&self) -> bool {
        self.marquee.is_some()
    }

    // --- Keyboard clipboard ---

    /// The student id currently on the clipboard.
    #[must_use]
    pub fn clipboard(&self) -> Option<StudentId> {
        self.clipboard
    }

    /// Ctrl-C: remember the occupant of the selected (or hovered) seat.
    pub fn copy_seat(&mut self) -> bool {
        let Some(key) = self.selection.seat_for_action() else {
            return false;
        };
        match self.grid.occupant(key).filter(|_| self.grid.is_seat(key)) {
            Some(student) => {
                self.clipboard = Some(student);
                true
            }
            None => false,
        }
    }

    /// Ctrl-X: copy, then clear the seat.
    pub fn cut_seat(&mut self) -> Action {
        if !self.copy_seat() {
            return Action::None;
        }
        match self.selection.seat_for_action() {
            Some(at) => Action::ClearSeat { at },
            None => Action::None,
        }
    }

    /// Ctrl-V: assign the clipboard student to the selected (or hovered) seat.
    #[must_use]
    pub fn paste_seat(&self) -> Action {
        let Some(to) = self.selection.seat_for_action().filter(|k| self.grid.is_seat(*k)) else {
            return Action::None;
        };
        match self.clipboard {
            Some(student) => Action::Assign { student, to },
            None => Action::None,
        }
    }

    /// Delete / Ctrl-D: clear the selected (or hovered) seat if occupied.
    #[must_use]
    pub fn clear_seat_action(&self) -> Action {
        match self.selection.seat_for_action().filter(|k| self.grid.is_occupied_seat(*k)) {
            Some(at) => Action::ClearSeat { at },
            None => Action::None,
        }
    }

    /// Ctrl-U: seat `student` (the roster selection) at the selected or
    /// hovered seat.
    #[must_use]
    pub fn assign_unseated(&self, student: StudentId) -> Action {
        match self.selection.seat_for_action().filter(|k| self.grid.is_seat(*k)) {
            Some(to) => Action::Assign { student, to },
            None => Action::None,
        }
    }
}
