//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use sheet_drag::config::PlaygroundConfig;
use sheet_drag::SheetController;

use super::velocity::VelocityTracker;

/// Top-level application state.
pub struct AppState {
    /// The controller being played with.
    pub sheet: SheetController,
    /// Pointer history for the in-flight drag.
    pub velocity: VelocityTracker,
    /// Offset units per terminal row.
    pub units_per_row: f64,
    /// Target frame rate while the sheet needs frames.
    pub frame_rate: u32,
    /// Last known terminal size, for mouse hit-testing.
    pub terminal_area: Rect,
    /// Frames rendered while the motion clock was running (drives the
    /// indicator animation).
    pub motion_frames: u64,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    started: Instant,
}

impl AppState {
    pub fn new(sheet: SheetController, config: &PlaygroundConfig) -> Self {
        Self {
            sheet,
            velocity: VelocityTracker::new(),
            units_per_row: config.units_per_row,
            frame_rate: config.frame_rate,
            terminal_area: Rect::default(),
            motion_frames: 0,
            should_quit: false,
            status_message: None,
            started: Instant::now(),
        }
    }

    /// Monotonic timestamp for velocity readings.
    pub fn now(&self) -> Duration {
        self.started.elapsed()
    }

    /// Pointer coordinate in offset units for a terminal row.
    pub fn row_to_units(&self, row: u16) -> f64 {
        f64::from(row) * self.units_per_row
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.frame_rate.max(1)))
    }

    /// Run one controller frame.
    pub fn tick(&mut self) {
        self.sheet.tick();
        if self.sheet.is_animating() {
            self.motion_frames = self.motion_frames.wrapping_add(1);
        }
    }
}
