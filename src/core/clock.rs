//! Owned start/stop motion clock.
//!
//! The clock does not schedule anything.  It is a flag the external frame
//! driver polls to decide whether another `tick()` is needed, plus a frame
//! count since the last start.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MotionClock {
    running: bool,
    frames: u64,
}

impl MotionClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames advanced since the clock last started.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Returns `true` if the clock was stopped before.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.frames = 0;
        true
    }

    /// Returns `true` if the clock was running before.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }

    /// Count one frame.  No-op while stopped.
    pub fn advance(&mut self) {
        if self.running {
            self.frames = self.frames.saturating_add(1);
        }
    }
}
