//! Selection state: single seat, multi-seat set, group mode, and the marquee.
//!
//! Multi-selection keeps insertion order because a multi-seat drag consumes
//! it verbatim as the planner's source list. Membership operations tolerate
//! keys that no longer resolve to a cell; staleness is reconciled on the
//! next snapshot load.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::grid::{SeatGrid, SeatKey};

/// Keyboard modifier keys held during a pointer event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Whether the event should extend the multi-selection instead of
    /// replacing the single selection (shift, ctrl, or meta).
    #[must_use]
    pub fn extends_selection(self) -> bool {
        self.shift || self.ctrl || self.meta
    }
}

/// A point in screen space (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ScreenRect {
    /// Build a normalized rectangle from two opposite corners in any order.
    #[must_use]
    pub fn from_corners(a: ScreenPoint, b: ScreenPoint) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }

    /// Whether two rectangles overlap. Touching edges count as overlap.
    #[must_use]
    pub fn intersects(&self, other: &ScreenRect) -> bool {
        self.left <= other.right
            && self.right >= other.left
            && self.top <= other.bottom
            && self.bottom >= other.top
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// An in-progress rectangle (marquee) selection gesture.
///
/// Purely visual while the pointer moves; membership changes happen once,
/// on release.
#[derive(Debug, Clone, Copy)]
pub struct Marquee {
    /// Screen position of the initial pointer-down.
    pub origin: ScreenPoint,
    /// Most recent pointer position.
    pub cursor: ScreenPoint,
}

impl Marquee {
    #[must_use]
    pub fn new(origin: ScreenPoint) -> Self {
        Self { origin, cursor: origin }
    }

    /// The current selection rectangle.
    #[must_use]
    pub fn rect(&self) -> ScreenRect {
        ScreenRect::from_corners(self.origin, self.cursor)
    }
}

/// Selection state for the seat grid.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: Option<SeatKey>,
    last_hovered: Option<SeatKey>,
    multi: Vec<SeatKey>,
    group_mode: bool,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The exclusive single selection, if any.
    #[must_use]
    pub fn selected(&self) -> Option<SeatKey> {
        self.selected
    }

    /// Set (or clear, with `None`) the exclusive single selection.
    pub fn set_selected(&mut self, key: Option<SeatKey>) {
        self.selected = key;
    }

    /// The seat the pointer most recently entered.
    #[must_use]
    pub fn last_hovered(&self) -> Option<SeatKey> {
        self.last_hovered
    }

    pub fn set_last_hovered(&mut self, key: SeatKey) {
        self.last_hovered = Some(key);
    }

    /// The seat keyboard actions should apply to: the single selection,
    /// falling back to the last hovered seat.
    #[must_use]
    pub fn seat_for_action(&self) -> Option<SeatKey> {
        self.selected.or(self.last_hovered)
    }

    /// Multi-selected keys in insertion order.
    #[must_use]
    pub fn multi(&self) -> &[SeatKey] {
        &self.multi
    }

    /// Whether `key` is part of the multi-selection.
    #[must_use]
    pub fn contains(&self, key: SeatKey) -> bool {
        self.multi.contains(&key)
    }

    /// Insert `key` into the multi-selection. No-op if already present.
    pub fn add_to_multi(&mut self, key: SeatKey) {
        if !self.contains(key) {
            self.multi.push(key);
        }
    }

    /// Insert `key` if absent, remove it if present.
    pub fn toggle_multi(&mut self, key: SeatKey) {
        if let Some(pos) = self.multi.iter().position(|k| *k == key) {
            self.multi.remove(pos);
        } else {
            self.multi.push(key);
        }
    }

    /// Empty the multi-selection.
    pub fn clear_multi(&mut self) {
        self.multi.clear();
    }

    /// Whether plain clicks toggle the multi-selection.
    #[must_use]
    pub fn group_mode(&self) -> bool {
        self.group_mode
    }

    /// Enable or disable group mode. Disabling clears the multi-selection.
    pub fn set_group_mode(&mut self, enabled: bool) {
        self.group_mode = enabled;
        if !enabled {
            self.clear_multi();
        }
    }

    /// Add every seat-typed cell whose bounding box intersects `rect`.
    ///
    /// `candidates` pairs each cell key with its current screen bounding box;
    /// non-seat cells are skipped here so callers can pass the whole grid.
    pub fn apply_marquee(
        &mut self,
        grid: &SeatGrid,
        rect: ScreenRect,
        candidates: &[(SeatKey, ScreenRect)],
    ) {
        for (key, bounds) in candidates {
            if grid.is_seat(*key) && rect.intersects(bounds) {
                self.add_to_multi(*key);
            }
        }
    }

    /// Drop selection entries that no longer resolve to a seat-typed cell.
    /// Called after each snapshot load; identity is restored by key.
    pub fn reconcile(&mut self, grid: &SeatGrid) {
        self.multi.retain(|k| grid.is_seat(*k));
        if let Some(key) = self.selected {
            if grid.get(key).is_none() {
                self.selected = None;
            }
        }
        if let Some(key) = self.last_hovered {
            if grid.get(key).is_none() {
                self.last_hovered = None;
            }
        }
    }
}
