//! Terminal input, forwarded over a channel.
//!
//! crossterm's `read` blocks, so a dedicated thread owns it and the async
//! loop only ever awaits the receiver.  Frames are driven separately by the
//! motion interval; nothing here wakes the loop unless input arrived.

use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, MouseEvent};
use tokio::sync::mpsc;
use tracing::warn;

/// How long the reader blocks before checking whether the loop has gone.
const SHUTDOWN_POLL: Duration = Duration::from_millis(250);

/// Input the playground reacts to.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Layout is recomputed from the frame on every draw, so a resize only
    /// needs to wake the loop.
    Resize,
    /// Terminal lost focus; an in-flight drag can never see its mouse-up.
    FocusLost,
}

impl AppEvent {
    fn from_terminal(ev: CtEvent) -> Option<Self> {
        match ev {
            CtEvent::Key(k) => Some(AppEvent::Key(k)),
            CtEvent::Mouse(m) => Some(AppEvent::Mouse(m)),
            CtEvent::Resize(..) => Some(AppEvent::Resize),
            CtEvent::FocusLost => Some(AppEvent::FocusLost),
            _ => None,
        }
    }
}

/// Start the reader thread and return its channel.  The thread exits once
/// the receiver is dropped or the terminal stops delivering events.
pub fn spawn_event_reader() -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    thread::spawn(move || loop {
        match event::poll(SHUTDOWN_POLL) {
            Ok(false) if tx.is_closed() => break,
            Ok(false) => continue,
            Ok(true) => {}
            Err(err) => {
                warn!(%err, "terminal poll failed; input reader stopping");
                break;
            }
        }
        let ev = match event::read() {
            Ok(ev) => ev,
            Err(err) => {
                warn!(%err, "terminal read failed; input reader stopping");
                break;
            }
        };
        if let Some(app_event) = AppEvent::from_terminal(ev) {
            if tx.send(app_event).is_err() {
                break;
            }
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn maps_terminal_events() {
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(matches!(
            AppEvent::from_terminal(CtEvent::Key(key)),
            Some(AppEvent::Key(k)) if k.code == KeyCode::Char('q')
        ));
        assert!(matches!(
            AppEvent::from_terminal(CtEvent::Resize(80, 24)),
            Some(AppEvent::Resize)
        ));
        assert!(matches!(
            AppEvent::from_terminal(CtEvent::FocusLost),
            Some(AppEvent::FocusLost)
        ));
    }

    #[test]
    fn focus_gained_is_dropped() {
        assert!(AppEvent::from_terminal(CtEvent::FocusGained).is_none());
    }
}
