//! Batch-move planning for multi-seat drags.
//!
//! `build_multi_drop_plan` is a pure function of the grid, the frozen drag
//! sources, and the hovered drop target. It applies one rigid translation
//! (anchor → target) uniformly to every source seat; per-seat independent
//! destinations are never allowed. Landing on a currently occupied seat is
//! not a planning failure — the server arbitrates displacement — but two
//! movers claiming the same target is.

#[cfg(test)]
#[path = "plan_test.rs"]
mod plan_test;

use std::collections::HashSet;
use std::fmt;

use crate::grid::{SeatGrid, SeatKey, StudentId};

/// One relocation within a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub student: StudentId,
    pub to: SeatKey,
}

/// A validated batch-move hypothesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePlan {
    /// Relocations in source order.
    pub moves: Vec<Move>,
    /// The claimed target keys, parallel to `moves`.
    pub targets: Vec<SeatKey>,
    /// The rigid `(row, col)` translation shared by every move.
    pub delta: (i32, i32),
}

impl MovePlan {
    /// A zero translation: the drop target coincides with the anchor. The
    /// dispatcher treats this as a successful no-op and sends nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.delta == (0, 0)
    }
}

/// Why a plan could not be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanErrorKind {
    /// The anchor key no longer resolves to a cell.
    MissingAnchor,
    /// A translated target is off the grid or not a seat-typed cell.
    BlockedTarget,
    /// Two movers would land on the same seat.
    TargetCollision,
    /// No source seat still holds a student.
    NothingMovable,
}

impl fmt::Display for PlanErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::MissingAnchor => "cannot identify drag origin",
            Self::BlockedTarget => "target is not a seat",
            Self::TargetCollision => "two students would land on the same seat",
            Self::NothingMovable => "nothing movable",
        };
        f.write_str(label)
    }
}

/// A failed plan: the reason, plus whatever target keys had already been
/// computed when planning stopped, for invalid-highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanFailure {
    pub kind: PlanErrorKind,
    pub partial_targets: Vec<SeatKey>,
}

impl PlanFailure {
    #[must_use]
    fn new(kind: PlanErrorKind, partial_targets: Vec<SeatKey>) -> Self {
        Self { kind, partial_targets }
    }
}

impl fmt::Display for PlanFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

/// Compute the batch move implied by dropping `sources` (anchored at
/// `anchor`) onto `drop`.
///
/// Sources that no longer hold a student are skipped rather than failing
/// the plan; they are stale references, not user errors.
///
/// # Errors
///
/// Returns a [`PlanFailure`] when the anchor is gone, any translated
/// target is off-grid or non-seat, two movers collide, or nothing is left
/// to move.
pub fn build_multi_drop_plan(
    grid: &SeatGrid,
    anchor: SeatKey,
    sources: &[SeatKey],
    drop: SeatKey,
) -> Result<MovePlan, PlanFailure> {
    if grid.get(anchor).is_none() {
        return Err(PlanFailure::new(PlanErrorKind::MissingAnchor, Vec::new()));
    }
    let delta = (drop.row - anchor.row, drop.col - anchor.col);

    let mut moves = Vec::with_capacity(sources.len());
    let mut targets = Vec::with_capacity(sources.len());
    let mut claimed: HashSet<SeatKey> = HashSet::with_capacity(sources.len());

    for source in sources {
        let Some(student) = grid.occupant(*source) else {
            continue;
        };
        let target = source.translated(delta);
        if !grid.is_seat(target) {
            return Err(PlanFailure::new(PlanErrorKind::BlockedTarget, targets));
        }
        if !claimed.insert(target) {
            return Err(PlanFailure::new(PlanErrorKind::TargetCollision, targets));
        }
        moves.push(Move { student, to: target });
        targets.push(target);
    }

    if moves.is_empty() {
        return Err(PlanFailure::new(PlanErrorKind::NothingMovable, Vec::new()));
    }

    Ok(MovePlan { moves, targets, delta })
}
