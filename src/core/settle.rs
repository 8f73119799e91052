//! Per-frame reconciliation of the candidate into the rendered offset.
//!
//! While a drag is active the offset follows the candidate 1:1.  Otherwise it
//! closes a fixed fraction of the remaining gap every frame (first-order
//! decay, no velocity term) and snaps once the gap drops under epsilon.

use tracing::debug;

use super::clock::MotionClock;

/// Default fraction of the gap closed per frame.
pub const DEFAULT_CONVERGENCE: f64 = 0.3;
/// Default snap threshold, in offset units.
pub const DEFAULT_EPSILON: f64 = 0.5;

/// Convergence constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleParams {
    /// In `(0, 1]`; `1` snaps immediately.
    pub convergence: f64,
    pub epsilon: f64,
}

impl Default for SettleParams {
    fn default() -> Self {
        Self {
            convergence: DEFAULT_CONVERGENCE,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Next offset given the previous one and this frame's candidate.
pub fn settle_step(offset: f64, candidate: f64, dragging: bool, params: &SettleParams) -> f64 {
    if dragging {
        return candidate;
    }
    let delta = candidate - offset;
    if delta.abs() < params.epsilon {
        candidate
    } else {
        offset + delta * params.convergence
    }
}

/// Owner of the rendered offset and the motion clock.
#[derive(Debug, Clone)]
pub struct SettlingController {
    offset: f64,
    params: SettleParams,
    clock: MotionClock,
}

impl SettlingController {
    pub fn new(params: SettleParams) -> Self {
        Self::with_offset(0.0, params)
    }

    pub fn with_offset(offset: f64, params: SettleParams) -> Self {
        Self {
            offset,
            params,
            clock: MotionClock::new(),
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn clock(&self) -> &MotionClock {
        &self.clock
    }

    pub fn params(&self) -> &SettleParams {
        &self.params
    }

    /// Start the clock if `target` differs from the rendered offset.  Called
    /// when a drag is released so the driver knows frames are needed before
    /// the first settling `step`.  Leaves the offset alone.
    pub fn arm(&mut self, target: f64) -> bool {
        if target == self.offset {
            return false;
        }
        let started = self.clock.start();
        if started {
            debug!(offset = self.offset, target, "motion clock started on release");
        }
        started
    }

    /// Advance one frame and return the new offset.
    ///
    /// The clock runs exactly while the offset still differs from the
    /// candidate after this frame's update.
    pub fn step(&mut self, candidate: f64, dragging: bool) -> f64 {
        self.clock.advance();
        self.offset = settle_step(self.offset, candidate, dragging, &self.params);

        if candidate != self.offset {
            if self.clock.start() {
                debug!(offset = self.offset, target = candidate, "motion clock started");
            }
        } else if self.clock.stop() {
            debug!(
                offset = self.offset,
                frames = self.clock.frames(),
                "motion clock stopped"
            );
        }

        self.offset
    }
}
