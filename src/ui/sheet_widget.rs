//! The draggable sheet, drawn translated by the controller's offset.
//!
//! Offsets are in controller units; one terminal row covers
//! `units_per_row` of them.  The panel may hang partly outside the stage
//! while rubber-banding, so rows are clipped one by one instead of handing
//! ratatui a `Rect` with a negative origin.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use super::theme::Theme;

/// Card height and vertical margin, in controller units.
const CARD_HEIGHT: f64 = 56.0;
const CARD_MARGIN: f64 = 8.0;
const CARD_COUNT: usize = 3;
/// Horizontal inset of cards inside the panel, in columns.
const CARD_INSET: u16 = 3;

/// Panel placement relative to the stage, before clipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetGeometry {
    /// Row of the panel's top edge relative to the stage top.  Negative
    /// while pulled above the stage.
    pub top: i32,
    pub height: u16,
}

impl SheetGeometry {
    pub fn new(offset: f64, container_extent: f64, units_per_row: f64, stage: Rect) -> Self {
        let top = (offset / units_per_row).round() as i32;
        let height = (container_extent / units_per_row).round().max(3.0);
        let height = height.min(f64::from(stage.height.max(3))) as u16;
        Self { top, height }
    }

    /// Visible part of the panel inside `stage`, if any.
    pub fn visible_rect(&self, stage: Rect) -> Option<Rect> {
        let top = i32::from(stage.y) + self.top;
        let bottom = top + i32::from(self.height);
        let clip_top = top.max(i32::from(stage.y));
        let clip_bottom = bottom.min(i32::from(stage.bottom()));
        if clip_bottom <= clip_top || stage.width == 0 {
            return None;
        }
        Some(Rect::new(
            stage.x,
            clip_top as u16,
            stage.width,
            (clip_bottom - clip_top) as u16,
        ))
    }

    pub fn contains(&self, stage: Rect, column: u16, row: u16) -> bool {
        self.visible_rect(stage).is_some_and(|r| {
            column >= r.x && column < r.right() && row >= r.y && row < r.bottom()
        })
    }
}

/// Renders the stage background and the panel.
pub struct SheetWidget {
    pub geometry: SheetGeometry,
    pub units_per_row: f64,
    pub dragging: bool,
}

impl SheetWidget {
    fn card_rows(&self) -> Vec<(u16, u16)> {
        let mut rows = Vec::with_capacity(CARD_COUNT);
        let mut cursor = 1.0 + CARD_MARGIN / self.units_per_row;
        let card_h = (CARD_HEIGHT / self.units_per_row).round().max(1.0);
        let gap = (2.0 * CARD_MARGIN / self.units_per_row).round().max(1.0);
        for _ in 0..CARD_COUNT {
            let start = cursor.round() as u16;
            rows.push((start, start + card_h as u16));
            cursor += card_h + gap;
        }
        rows
    }
}

impl Widget for SheetWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height == 0 {
            return;
        }
        buf.set_style(area, Theme::stage_style());

        let border = if self.dragging {
            Theme::sheet_border_dragging_style()
        } else {
            Theme::sheet_border_style()
        };
        let width = area.width.saturating_sub(2).max(4);
        let left = area.x + 1;
        let inner = width.saturating_sub(2) as usize;
        let cards = self.card_rows();
        let last = self.geometry.height.saturating_sub(1);

        for local in 0..self.geometry.height {
            let y = i32::from(area.y) + self.geometry.top + i32::from(local);
            if y < i32::from(area.y) || y >= i32::from(area.bottom()) {
                continue;
            }
            let y = y as u16;

            let edge = if local == 0 {
                Some(('╭', '╮'))
            } else if local == last {
                Some(('╰', '╯'))
            } else {
                None
            };

            match edge {
                Some((l, r)) => {
                    let line = format!("{l}{}{r}", "─".repeat(inner));
                    buf.set_string(left, y, line, border);
                }
                None => {
                    buf.set_string(left, y, "│", border);
                    buf.set_string(left + 1, y, " ".repeat(inner), Style::default());
                    buf.set_string(left + width - 1, y, "│", border);

                    if cards.iter().any(|&(s, e)| local >= s && local < e) && last > 1 {
                        let card_w = (inner as u16).saturating_sub(2 * CARD_INSET);
                        buf.set_style(
                            Rect::new(left + 1 + CARD_INSET, y, card_w, 1),
                            Theme::card_style(),
                        );
                    }
                }
            }
        }
    }
}

/// Left gutter: a rail spanning the rows the panel top may rest on, labels
/// at both ends, and a pointer at the panel's current top row.
pub struct RestGutter {
    /// Panel top rows for offset 0 and for the maximum offset.
    pub rest_rows: (i32, i32),
    pub current_top: i32,
}

impl Widget for RestGutter {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height == 0 {
            return;
        }
        let (first, last) = self.rest_rows;
        let to_row = |rel: i32| {
            let y = i32::from(area.y) + rel;
            (y >= i32::from(area.y) && y < i32::from(area.bottom())).then_some(y as u16)
        };
        let rail_x = area.right() - 2;

        for rel in first..=last {
            if let Some(y) = to_row(rel) {
                buf.set_string(rail_x, y, "│", Theme::marker_style());
            }
        }
        for (label, rel) in [("0", first), ("max", last)] {
            if let Some(y) = to_row(rel) {
                buf.set_string(area.x, y, label, Theme::marker_style());
                buf.set_string(rail_x, y, "┼", Theme::marker_style());
            }
        }

        let outside = self.current_top < first || self.current_top > last;
        let pointer = if outside { "◂" } else { "◀" };
        let style = if outside {
            Theme::indicator_style()
        } else {
            Theme::marker_style()
        };
        if let Some(y) = to_row(self.current_top) {
            buf.set_string(rail_x + 1, y, pointer, style);
        }
    }
}
