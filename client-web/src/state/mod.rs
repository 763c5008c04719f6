//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`chart` for classroom data + engine, `ui`
//! for chrome) so individual components can depend on small focused
//! models.

pub mod chart;
pub mod ui;
