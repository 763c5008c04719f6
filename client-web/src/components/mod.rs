//! UI components for the classroom page.

pub mod roster_panel;
pub mod seat_stage;
pub mod suggestion_toasts;
pub mod toolbar;
