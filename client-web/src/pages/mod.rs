//! Top-level routed pages.

pub mod classroom;
pub mod home;
