//! Controller core – rubber band, gesture tracking, settling, and the facade.
//!
//! Nothing in this module depends on any TUI or rendering crate.  All of it is
//! plain arithmetic on `f64` and runs in O(1) per call.

pub mod clock;
pub mod controller;
pub mod gesture;
pub mod projection;
pub mod rubber_band;
pub mod settle;
