//! Server communication: wire types, REST helpers, and action dispatch.

pub mod api;
pub mod dispatch;
pub mod sync;
pub mod types;
