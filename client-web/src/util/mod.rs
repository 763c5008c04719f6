//! Browser-environment helpers shared across components.

pub mod active_tab;
pub mod feedback;
