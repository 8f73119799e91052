//! Release-velocity estimate for mouse drags.
//!
//! Terminals report positions only, so the playground keeps a short history
//! of pointer readings and averages over it when the button goes up.

use std::collections::VecDeque;
use std::time::Duration;

const HISTORY_LIMIT: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy)]
struct Reading {
    position: f64,
    timestamp: Duration,
}

#[derive(Debug, Default)]
pub struct VelocityTracker {
    history: VecDeque<Reading>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }

    /// `timestamp` is measured from any fixed origin and must not go
    /// backwards; earlier readings are dropped.
    pub fn push(&mut self, position: f64, timestamp: Duration) {
        if let Some(last) = self.history.back() {
            if timestamp < last.timestamp {
                tracing::trace!(
                    "ignoring reading at {timestamp:?} earlier than last {:?}",
                    last.timestamp
                );
                return;
            }
        }
        self.history.push_back(Reading { position, timestamp });
        self.trim_history();
    }

    /// Units per second across the retained history.
    pub fn velocity(&self) -> f64 {
        let (Some(first), Some(last)) = (self.history.front(), self.history.back()) else {
            return 0.0;
        };
        let elapsed = (last.timestamp - first.timestamp).as_secs_f64();
        if elapsed == 0.0 {
            return 0.0;
        }
        (last.position - first.position) / elapsed
    }

    fn trim_history(&mut self) {
        let Some(&Reading { timestamp, .. }) = self.history.back() else {
            return;
        };
        while let Some(first) = self.history.front() {
            if timestamp <= first.timestamp + HISTORY_LIMIT {
                break;
            }
            self.history.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn empty_or_single_reading_is_still() {
        let mut tracker = VelocityTracker::new();
        assert_eq!(tracker.velocity(), 0.0);
        tracker.push(10.0, ms(5));
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn steady_motion() {
        let mut tracker = VelocityTracker::new();
        for i in 0..5 {
            tracker.push(i as f64 * 10.0, ms(i * 20));
        }
        // 40 units over 80 ms.
        assert!((tracker.velocity() - 500.0).abs() < 1e-9);
    }

    #[test]
    fn old_readings_fall_out_of_window() {
        let mut tracker = VelocityTracker::new();
        tracker.push(0.0, ms(0));
        tracker.push(1000.0, ms(10));
        tracker.push(1000.0, ms(300));
        tracker.push(1010.0, ms(400));
        // Only the last two readings remain.
        assert!((tracker.velocity() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn out_of_order_reading_is_dropped() {
        let mut tracker = VelocityTracker::new();
        tracker.push(0.0, ms(50));
        tracker.push(-500.0, ms(10));
        tracker.push(20.0, ms(100));
        assert!((tracker.velocity() - 400.0).abs() < 1e-9);
    }
}
