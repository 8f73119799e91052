//! Settling indicator: a small spinner + label rendered in the top-right
//! corner of a given area while the motion clock runs.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use super::theme::Theme;

/// Braille-dot spinner frames.  Cycles through these on each frame.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frames advance once per this many motion frames, so the icon
/// stays readable at 60 fps.
const FRAMES_PER_STEP: u64 = 4;

pub struct MotionIndicator {
    /// Whether to show the indicator at all.
    pub visible: bool,
    /// Frames elapsed while moving.
    pub frame: u64,
}

impl Widget for MotionIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.visible || area.width < 16 || area.height == 0 {
            return;
        }

        let step = (self.frame / FRAMES_PER_STEP) as usize;
        let icon = SPINNER_FRAMES[step % SPINNER_FRAMES.len()];
        let label = format!(" {icon} settling ");

        let label_width = label.chars().count() as u16;
        let x = area.x + area.width.saturating_sub(label_width + 1);
        let line = Line::from(Span::styled(label, Theme::indicator_style()));
        buf.set_line(x, area.y, &line, label_width);
    }
}
