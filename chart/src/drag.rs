//! The drag gesture state machine.
//!
//! A `DragSession` exists only between drag-start and drag-end/drop. Each
//! active variant carries the full gesture context captured at drag start;
//! in particular the source list is frozen then and never re-reads the
//! selection mid-drag, so selection changes cannot alter an in-flight plan.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::grid::{SeatGrid, SeatKey, StudentId};
use crate::selection::Selection;

/// Whether a seat drag moves one seat or the whole multi-selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Single,
    Multi,
}

/// The active drag gesture, if any.
#[derive(Debug, Clone, Default)]
pub enum DragSession {
    /// No drag in progress; waiting for the next drag-start.
    #[default]
    Idle,
    /// Dragging from an occupied seat.
    Seat {
        /// The seat under the pointer at drag start.
        anchor: SeatKey,
        /// The student being carried (the anchor's occupant at drag start).
        student: StudentId,
        /// Fixed at drag start; never re-derived mid-drag.
        mode: DragMode,
        /// Seats being moved, in selection order. `[anchor]` in single mode.
        sources: Vec<SeatKey>,
    },
    /// Dragging a student from the unseated roster: an assign, not a move.
    Roster {
        student: StudentId,
    },
}

impl DragSession {
    /// Start a drag from an occupied seat.
    ///
    /// Enters multi mode iff the anchor is part of the current
    /// multi-selection and that selection holds at least two eligible
    /// (seat-typed, occupied) seats. Dragging a seat outside the selection
    /// stays single mode even while other seats are selected: a drag always
    /// follows the grabbed seat's own membership.
    ///
    /// Returns `None` when the anchor is not an occupied seat.
    #[must_use]
    pub fn begin_from_seat(grid: &SeatGrid, selection: &Selection, anchor: SeatKey) -> Option<Self> {
        let student = grid.get(anchor).filter(|c| c.is_seat()).and_then(|c| c.occupant())?;

        let eligible: Vec<SeatKey> = selection
            .multi()
            .iter()
            .copied()
            .filter(|k| grid.is_occupied_seat(*k))
            .collect();

        if eligible.contains(&anchor) && eligible.len() > 1 {
            Some(Self::Seat { anchor, student, mode: DragMode::Multi, sources: eligible })
        } else {
            Some(Self::Seat { anchor, student, mode: DragMode::Single, sources: vec![anchor] })
        }
    }

    /// Start a drag from the unseated roster.
    #[must_use]
    pub fn begin_from_roster(student: StudentId) -> Self {
        Self::Roster { student }
    }

    /// Terminal transition: unconditionally back to `Idle`. Reachable from
    /// every state, whether or not a drop ever fired.
    pub fn end(&mut self) {
        *self = Self::Idle;
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// The drag mode, if a seat drag is active. Roster drags are single.
    #[must_use]
    pub fn mode(&self) -> Option<DragMode> {
        match self {
            Self::Idle => None,
            Self::Seat { mode, .. } => Some(*mode),
            Self::Roster { .. } => Some(DragMode::Single),
        }
    }

    /// The anchor seat, when dragging from a seat.
    #[must_use]
    pub fn anchor(&self) -> Option<SeatKey> {
        match self {
            Self::Seat { anchor, .. } => Some(*anchor),
            _ => None,
        }
    }

    /// The carried student's id, if a drag is active.
    #[must_use]
    pub fn student(&self) -> Option<StudentId> {
        match self {
            Self::Idle => None,
            Self::Seat { student, .. } | Self::Roster { student } => Some(*student),
        }
    }

    /// The seats being moved, in selection order. Empty unless a seat drag
    /// is active.
    #[must_use]
    pub fn sources(&self) -> &[SeatKey] {
        match self {
            Self::Seat { sources, .. } => sources,
            _ => &[],
        }
    }
}
