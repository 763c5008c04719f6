//! Advisory drag feedback.
//!
//! `compute_preview` derives the full set of per-seat decorations and the
//! hovered-seat hint from `(grid, session, hovered)` alone — there is no
//! accumulated paint state, so the renderer can clear everything and
//! repaint from the returned value on every drag-over. Nothing here
//! mutates seat data.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use crate::drag::{DragMode, DragSession};
use crate::grid::{SeatGrid, SeatKey};
use crate::plan::build_multi_drop_plan;

/// Visual state applied to one seat during a drag. The renderer owns the
/// mapping to CSS classes; planner and session logic never see class names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    /// A seat the drag started from.
    Origin,
    /// A seat the current plan would move a student onto.
    ValidTarget,
    /// A seat implicated in a failed plan.
    InvalidTarget,
}

/// How the hovered-seat label should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintTone {
    Valid,
    Invalid,
    Neutral,
}

/// The label shown on the hovered drop target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropHint {
    pub tone: HintTone,
    pub label: String,
}

/// Everything the renderer needs to paint drag feedback for one hover.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Preview {
    /// Per-seat decorations. A seat may appear more than once (e.g. a
    /// valid target under the pointer); the renderer applies all of them.
    pub marks: Vec<(SeatKey, Decoration)>,
    pub hint: Option<(SeatKey, DropHint)>,
}

impl Preview {
    /// The empty preview: what an idle session renders as.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

fn hint(key: SeatKey, tone: HintTone, label: impl Into<String>) -> Option<(SeatKey, DropHint)> {
    Some((key, DropHint { tone, label: label.into() }))
}

/// Compute drag feedback for hovering `hovered` with the given session.
#[must_use]
pub fn compute_preview(grid: &SeatGrid, session: &DragSession, hovered: SeatKey) -> Preview {
    let mut preview = Preview::empty();
    if !session.is_active() {
        return preview;
    }

    if !grid.is_seat(hovered) {
        preview.marks.push((hovered, Decoration::InvalidTarget));
        preview.hint = hint(hovered, HintTone::Invalid, "target is not a seat");
        return preview;
    }

    match session.mode() {
        Some(DragMode::Multi) => {
            for source in session.sources() {
                preview.marks.push((*source, Decoration::Origin));
            }
            let Some(anchor) = session.anchor() else {
                return preview;
            };
            match build_multi_drop_plan(grid, anchor, session.sources(), hovered) {
                Ok(plan) => {
                    for target in &plan.targets {
                        preview.marks.push((*target, Decoration::ValidTarget));
                    }
                    let label = format!("will move {} people", plan.moves.len());
                    preview.hint = hint(hovered, HintTone::Valid, label);
                }
                Err(failure) => {
                    for target in &failure.partial_targets {
                        preview.marks.push((*target, Decoration::InvalidTarget));
                    }
                    preview.marks.push((hovered, Decoration::InvalidTarget));
                    preview.hint = hint(hovered, HintTone::Invalid, failure.to_string());
                }
            }
        }
        Some(DragMode::Single) => {
            // Roster drags have no origin seat to mark.
            if let Some(anchor) = session.anchor() {
                preview.marks.push((anchor, Decoration::Origin));
            }
            if session.anchor() == Some(hovered) {
                preview.hint = hint(hovered, HintTone::Neutral, "stays in place");
            } else if grid.occupant(hovered).is_some() {
                preview.hint = hint(hovered, HintTone::Valid, "will swap");
            } else {
                preview.hint = hint(hovered, HintTone::Valid, "will move here");
            }
        }
        None => {}
    }

    preview
}
