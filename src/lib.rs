//! Per-frame position controller for a vertically draggable sheet.
//!
//! Gesture samples go in through [`SheetController::ingest`]; once per
//! animation frame the driver calls [`SheetController::tick`] and hands the
//! returned offset to the renderer.

pub mod config;
pub mod core;
pub mod error;

pub use crate::config::SheetConfig;
pub use crate::core::controller::SheetController;
pub use crate::core::gesture::{Bounds, GesturePhase, GestureSample};
pub use crate::core::rubber_band::RubberBand;
pub use crate::error::ConfigError;
