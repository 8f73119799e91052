//! Screen regions: a gutter that marks the legal rest range, the stage the
//! sheet moves on, and a one-row status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Columns reserved for the rest-range gutter.
pub const GUTTER_WIDTH: u16 = 10;
/// Below this terminal width the gutter is dropped and the stage takes
/// everything.
const MIN_WIDTH_FOR_GUTTER: u16 = 3 * GUTTER_WIDTH;

pub struct AppLayout {
    /// Zero-width when the terminal is too narrow.
    pub gutter_area: Rect,
    pub stage_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    pub fn from_area(area: Rect) -> Self {
        let [body, status_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);

        let gutter = if body.width >= MIN_WIDTH_FOR_GUTTER {
            GUTTER_WIDTH
        } else {
            0
        };
        let [gutter_area, stage_area] =
            Layout::horizontal([Constraint::Length(gutter), Constraint::Min(0)]).areas(body);

        Self {
            gutter_area,
            stage_area,
            status_area,
        }
    }
}
