//! Seat-chart interaction engine for the classroom seating tool.
//!
//! This crate owns everything about the seating chart that can be reasoned
//! about without a browser: the in-memory seat grid hydrated from server
//! snapshots, single- and multi-seat selection, the drag gesture state
//! machine, the rigid-translation batch-move planner, and the advisory
//! preview computed on every drag-over. The host UI layer is responsible
//! only for wiring DOM events into [`engine::ChartCore`] and submitting the
//! resulting [`engine::Action`]s to the server.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::ChartCore`] and host-facing actions |
//! | [`grid`] | Seat keys, cell types, and the in-memory seat store |
//! | [`selection`] | Single/multi selection, group mode, and the marquee |
//! | [`drag`] | The drag session state machine |
//! | [`plan`] | Batch-move planning for multi-seat drags |
//! | [`preview`] | Per-seat drag feedback derived from the live session |

pub mod drag;
pub mod engine;
pub mod grid;
pub mod plan;
pub mod preview;
pub mod selection;
