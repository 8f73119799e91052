//! Input handling: maps key/mouse events to gesture samples.
//!
//! This is the playground's gesture recogniser: left-button down over the
//! panel begins a drag, motion with the button held keeps it active, and
//! release (or losing focus) ends it.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use sheet_drag::GestureSample;

use super::state::AppState;
use crate::ui::layout::AppLayout;
use crate::ui::sheet_widget::SheetGeometry;

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        _ => {}
    }
}

/// Process a mouse event.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let position = state.row_to_units(mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let stage = AppLayout::from_area(state.terminal_area).stage_area;
            let geometry = SheetGeometry::new(
                state.sheet.offset(),
                state.sheet.config().container_extent,
                state.units_per_row,
                stage,
            );
            if !geometry.contains(stage, mouse.column, mouse.row) {
                return;
            }
            // A press while still dragging means the last button-up was
            // lost; close that drag so the new one anchors here.
            if state.sheet.is_dragging() {
                state.sheet.ingest(GestureSample::cancelled(position));
            }
            state.velocity.reset();
            let now = state.now();
            state.velocity.push(position, now);
            state.sheet.ingest(GestureSample::began(position));
            state.status_message = None;
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if !state.sheet.is_dragging() {
                return;
            }
            let now = state.now();
            state.velocity.push(position, now);
            state.sheet.ingest(GestureSample::active(position));
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if !state.sheet.is_dragging() {
                return;
            }
            let now = state.now();
            state.velocity.push(position, now);
            let velocity = state.velocity.velocity();
            state.sheet.ingest(GestureSample::ended(position, velocity));
            state.status_message = Some(format!(
                "released at {velocity:.0} u/s, fling would land at {:.1}",
                state.sheet.projected_rest()
            ));
        }
        _ => {}
    }
}

/// The button-up will never arrive once focus is gone.
pub fn handle_focus_lost(state: &mut AppState) {
    if state.sheet.is_dragging() {
        state.velocity.reset();
        state.sheet.ingest(GestureSample::cancelled(state.sheet.candidate()));
        state.status_message = Some("drag cancelled".into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;
    use sheet_drag::config::PlaygroundConfig;
    use sheet_drag::SheetController;

    fn state() -> AppState {
        let config = PlaygroundConfig::default();
        let sheet = SheetController::new(config.sheet).unwrap();
        let mut state = AppState::new(sheet, &config);
        state.terminal_area = Rect::new(0, 0, 60, 40);
        state
    }

    fn mouse(kind: MouseEventKind, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column: 10,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn press_drag_release_drives_controller() {
        let mut state = state();
        handle_mouse(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 2));
        assert!(state.sheet.is_dragging());

        handle_mouse(&mut state, mouse(MouseEventKind::Drag(MouseButton::Left), 7));
        assert_eq!(state.sheet.candidate(), 50.0);
        state.tick();
        assert_eq!(state.sheet.offset(), 50.0);

        handle_mouse(&mut state, mouse(MouseEventKind::Up(MouseButton::Left), 7));
        assert!(!state.sheet.is_dragging());
        assert!(state.status_message.is_some());
    }

    #[test]
    fn second_press_after_lost_release_reanchors() {
        let mut state = state();
        handle_mouse(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 2));
        handle_mouse(&mut state, mouse(MouseEventKind::Drag(MouseButton::Left), 7));
        state.tick();
        assert_eq!(state.sheet.offset(), 50.0);

        // No Up for the first drag; the panel now spans rows 5..25.
        handle_mouse(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 10));
        assert!(state.sheet.is_dragging());
        assert_eq!(state.sheet.candidate(), 50.0);

        handle_mouse(&mut state, mouse(MouseEventKind::Drag(MouseButton::Left), 11));
        assert_eq!(state.sheet.candidate(), 60.0);
    }

    #[test]
    fn press_outside_panel_is_ignored() {
        let mut state = state();
        // Panel is 20 rows tall at offset 0.
        handle_mouse(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 30));
        assert!(!state.sheet.is_dragging());
        handle_mouse(&mut state, mouse(MouseEventKind::Drag(MouseButton::Left), 35));
        assert_eq!(state.sheet.candidate(), 0.0);
    }

    #[test]
    fn focus_loss_cancels_drag() {
        let mut state = state();
        handle_mouse(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 1));
        handle_focus_lost(&mut state);
        assert!(!state.sheet.is_dragging());
    }

    #[test]
    fn quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut state = state();
            handle_key(
                &mut state,
                KeyEvent {
                    code,
                    modifiers: KeyModifiers::NONE,
                    kind: KeyEventKind::Press,
                    state: KeyEventState::NONE,
                },
            );
            assert!(state.should_quit);
        }
    }
}
