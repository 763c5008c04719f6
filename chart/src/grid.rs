//! Seat-grid model: seat keys, cell types, and the in-memory store.
//!
//! This module defines the data types that describe a classroom layout
//! (`SeatCell`, `CellType`), the wire-shaped snapshot types deserialized
//! straight from the server's state endpoint (`SeatSnapshot`, `StudentInfo`,
//! `GroupInfo`), and the runtime store that owns all live cells (`SeatGrid`).
//!
//! Data flows into this layer from the network (JSON deserialization). The
//! planner and selection manager read from `SeatGrid` instead of querying
//! live DOM elements, which is what keeps them testable.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

/// Server-issued primary key for a student. Opaque to the client.
pub type StudentId = i64;

/// Identity of a cell within the classroom layout.
///
/// Two cells are the same entity iff their keys are equal. The `Display`
/// form (`"{row}-{col}"`) is the canonical string encoding used for DOM
/// lookups and drag payloads, and `parse` is its inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeatKey {
    pub row: i32,
    pub col: i32,
}

impl SeatKey {
    #[must_use]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Apply a rigid `(row, col)` translation to this key.
    #[must_use]
    pub fn translated(self, delta: (i32, i32)) -> Self {
        Self { row: self.row + delta.0, col: self.col + delta.1 }
    }

    /// Parse the canonical `"{row}-{col}"` encoding back into a key.
    ///
    /// Returns `None` for anything that is not two integers joined by `-`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let (row, col) = s.split_once('-')?;
        let Ok(row) = row.trim().parse() else {
            return None;
        };
        let Ok(col) = col.trim().parse() else {
            return None;
        };
        Some(Self { row, col })
    }
}

impl fmt::Display for SeatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

/// What a cell in the layout grid is used for.
///
/// Only `Seat` cells can hold a student or participate in selection and
/// drag-and-drop; the rest are layout furniture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    /// A seat a student can occupy.
    Seat,
    /// Walkway between seat blocks.
    Aisle,
    /// The teacher's podium.
    Podium,
    /// Reserved empty marker.
    Empty,
}

/// A student as rendered on a seat or in the unseated roster.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StudentInfo {
    pub id: StudentId,
    pub name: String,
    /// Pre-formatted score text, present only when the student has a score.
    #[serde(default)]
    pub score_display: Option<String>,
}

/// A seating group referenced by a cell.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupInfo {
    pub id: i64,
    pub name: String,
}

/// One cell of the server's state snapshot, as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct SeatSnapshot {
    pub row: i32,
    pub col: i32,
    pub cell_type: CellType,
    /// Human-readable label for non-seat cells.
    #[serde(default)]
    pub cell_type_display: String,
    #[serde(default)]
    pub student: Option<StudentInfo>,
    #[serde(default)]
    pub group: Option<GroupInfo>,
}

/// A cell of the live layout. The coordinate is immutable once laid out;
/// only occupancy, group, and type change across refreshes.
#[derive(Debug, Clone)]
pub struct SeatCell {
    pub key: SeatKey,
    pub cell_type: CellType,
    pub cell_type_display: String,
    pub student: Option<StudentInfo>,
    pub group: Option<GroupInfo>,
}

impl SeatCell {
    /// Whether this cell can hold a student.
    #[must_use]
    pub fn is_seat(&self) -> bool {
        self.cell_type == CellType::Seat
    }

    /// The occupying student's id, if any.
    #[must_use]
    pub fn occupant(&self) -> Option<StudentId> {
        self.student.as_ref().map(|s| s.id)
    }
}

/// In-memory store of layout cells, keyed by coordinate.
#[derive(Debug, Clone, Default)]
pub struct SeatGrid {
    cells: HashMap<SeatKey, SeatCell>,
}

impl SeatGrid {
    /// Create an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all cells with a full server snapshot.
    pub fn load_snapshot(&mut self, seats: Vec<SeatSnapshot>) {
        self.cells.clear();
        for seat in seats {
            let key = SeatKey::new(seat.row, seat.col);
            self.cells.insert(
                key,
                SeatCell {
                    key,
                    cell_type: seat.cell_type,
                    cell_type_display: seat.cell_type_display,
                    student: seat.student,
                    group: seat.group,
                },
            );
        }
    }

    /// Return a reference to the cell at `key`.
    #[must_use]
    pub fn get(&self, key: SeatKey) -> Option<&SeatCell> {
        self.cells.get(&key)
    }

    /// Whether a seat-typed cell exists at `key`.
    #[must_use]
    pub fn is_seat(&self, key: SeatKey) -> bool {
        self.get(key).is_some_and(SeatCell::is_seat)
    }

    /// The student occupying the cell at `key`, if any.
    #[must_use]
    pub fn occupant(&self, key: SeatKey) -> Option<StudentId> {
        self.get(key).and_then(SeatCell::occupant)
    }

    /// Whether `key` is a seat-typed cell currently holding a student.
    #[must_use]
    pub fn is_occupied_seat(&self, key: SeatKey) -> bool {
        self.get(key).is_some_and(|c| c.is_seat() && c.student.is_some())
    }

    /// All cells in row-major order, for deterministic rendering.
    #[must_use]
    pub fn sorted_cells(&self) -> Vec<&SeatCell> {
        let mut cells: Vec<&SeatCell> = self.cells.values().collect();
        cells.sort_by_key(|c| c.key);
        cells
    }

    /// Number of cells in the layout.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no snapshot has been loaded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
