//! Classroom state: the seat-grid engine plus the server-owned extras
//! (unseated roster, suggestions) that render around it.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use chart::engine::ChartCore;
use chart::grid::{StudentId, StudentInfo};

use crate::net::types::{StateSnapshot, Suggestion};

/// State for the classroom page, provided as one reactive context.
#[derive(Clone, Debug, Default)]
pub struct ChartState {
    /// Route parameter; `None` until the page mounts.
    pub classroom_id: Option<String>,
    /// The seat-grid engine: grid, selection, drag session, clipboard.
    pub core: ChartCore,
    /// Students without a seat, in server order.
    pub roster: Vec<StudentInfo>,
    pub unseated_count: u32,
    pub suggestions: Vec<Suggestion>,
    /// The roster entry highlighted for keyboard assignment.
    pub selected_unseated: Option<StudentId>,
}

impl ChartState {
    /// Apply a freshly fetched snapshot.
    ///
    /// The engine reconciles seat selection by key; the roster selection
    /// is restored by student id when that student is still unseated.
    pub fn apply_snapshot(&mut self, snapshot: StateSnapshot) {
        self.core.load_snapshot(snapshot.seats);
        self.roster = snapshot.unseated;
        self.unseated_count = snapshot.unseated_count;
        self.suggestions = snapshot.suggestions;
        if let Some(id) = self.selected_unseated {
            if !self.roster.iter().any(|s| s.id == id) {
                self.selected_unseated = None;
            }
        }
    }
}
