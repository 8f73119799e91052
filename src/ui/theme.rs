//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── stage ──────────────────────────────────────────────────
    pub fn stage_style() -> Style {
        Style::default().bg(Color::Magenta)
    }

    pub fn sheet_border_style() -> Style {
        Style::default().fg(Color::White).bg(Color::Magenta)
    }

    pub fn sheet_border_dragging_style() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .bg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    }

    pub fn card_style() -> Style {
        Style::default().bg(Color::Blue)
    }

    pub fn marker_style() -> Style {
        Style::default()
            .fg(Color::Gray)
            .bg(Color::Magenta)
            .add_modifier(Modifier::DIM)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    pub fn indicator_style() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }
}
