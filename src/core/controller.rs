//! The public face of the sheet: gesture samples in, one offset per frame out.
//!
//! `ingest` only touches the gesture tracker and, on release, the motion
//! clock; `tick` is the single writer of the offset.  A driver keeps calling
//! `tick` while [`SheetController::needs_frame`] is true and stops once it
//! turns false.

use tracing::{debug, trace};

use super::gesture::{Bounds, GesturePhase, GestureSample, GestureTracker, Transition};
use super::projection::projected_distance;
use super::rubber_band::RubberBand;
use super::settle::SettlingController;
use crate::config::SheetConfig;
use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct SheetController {
    config: SheetConfig,
    bounds: Bounds,
    band: RubberBand,
    tracker: GestureTracker,
    settle: SettlingController,
}

impl SheetController {
    /// Fails if any constant is out of range; a controller never exists in an
    /// invalid state.
    pub fn new(config: SheetConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            bounds: config.bounds(),
            band: config.rubber_band(),
            tracker: GestureTracker::new(),
            settle: SettlingController::new(config.settle_params()),
            config,
        })
    }

    /// Feed one gesture sample.  Never moves the offset; a release that leaves
    /// the offset away from its rest position starts the motion clock.
    pub fn ingest(&mut self, sample: GestureSample) {
        let offset = self.settle.offset();
        match self.tracker.ingest(sample, offset) {
            Transition::Started => {
                debug!(offset, pointer = sample.position, "drag started");
            }
            Transition::Moved => {
                trace!(pointer = sample.position, "drag moved");
            }
            Transition::Released => {
                debug!(
                    offset,
                    velocity = sample.release_velocity,
                    phase = sample.phase.label(),
                    "drag released"
                );
                let target = self.candidate();
                self.settle.arm(target);
            }
            Transition::Ignored => {
                trace!(phase = sample.phase.label(), "sample ignored");
            }
        }
    }

    /// Run one frame and return the offset the renderer should apply.
    pub fn tick(&mut self) -> f64 {
        let candidate = self.candidate();
        self.settle.step(candidate, self.tracker.is_dragging())
    }

    /// Rendered offset as of the last `tick`.
    pub fn offset(&self) -> f64 {
        self.settle.offset()
    }

    /// Value the next `tick` will reconcile toward.
    pub fn candidate(&self) -> f64 {
        self.tracker.candidate(self.settle.offset(), &self.bounds, &self.band)
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    /// Motion clock state.
    pub fn is_animating(&self) -> bool {
        self.settle.clock().is_running()
    }

    /// Whether the driver should schedule another `tick`.
    pub fn needs_frame(&self) -> bool {
        self.is_dragging() || self.is_animating()
    }

    pub fn last_phase(&self) -> GesturePhase {
        self.tracker.last_phase()
    }

    pub fn release_velocity(&self) -> f64 {
        self.tracker.release_velocity()
    }

    /// Where an inertial fling at the last release velocity would land,
    /// clamped into bounds.  Settling does not aim here.
    pub fn projected_rest(&self) -> f64 {
        // The rate was validated at construction.
        let distance = projected_distance(self.release_velocity(), self.config.deceleration_rate)
            .unwrap_or(0.0);
        self.bounds.clamp(self.offset() + distance)
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> SheetController {
        SheetController::new(SheetConfig::new(400.0, 200.0)).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let config = SheetConfig {
            resistance_constant: 1.0,
            ..SheetConfig::default()
        };
        assert!(SheetController::new(config).is_err());
        assert!(SheetController::new(SheetConfig::new(10.0, 20.0)).is_err());
    }

    #[test]
    fn starts_settled_at_zero() {
        let mut sheet = controller();
        assert_eq!(sheet.offset(), 0.0);
        assert!(!sheet.needs_frame());
        assert_eq!(sheet.tick(), 0.0);
        assert!(!sheet.is_animating());
    }

    #[test]
    fn ingest_does_not_move_offset() {
        let mut sheet = controller();
        sheet.ingest(GestureSample::began(0.0));
        sheet.ingest(GestureSample::active(120.0));
        assert_eq!(sheet.offset(), 0.0);
        assert_eq!(sheet.candidate(), 120.0);
        assert!(sheet.needs_frame());

        assert_eq!(sheet.tick(), 120.0);
        assert_eq!(sheet.offset(), 120.0);
    }

    #[test]
    fn drag_follows_finger_one_to_one() {
        let mut sheet = controller();
        sheet.ingest(GestureSample::began(500.0));
        for pointer in [510.0, 530.0, 560.0, 520.0] {
            sheet.ingest(GestureSample::active(pointer));
            assert_eq!(sheet.tick(), pointer - 500.0);
            assert!(!sheet.is_animating());
        }
    }

    #[test]
    fn second_drag_starts_from_rendered_offset() {
        let mut sheet = controller();
        sheet.ingest(GestureSample::began(0.0));
        sheet.ingest(GestureSample::active(50.0));
        sheet.tick();
        sheet.ingest(GestureSample::ended(50.0, 0.0));
        sheet.tick();
        assert_eq!(sheet.offset(), 50.0);

        sheet.ingest(GestureSample::began(300.0));
        sheet.ingest(GestureSample::active(330.0));
        assert_eq!(sheet.tick(), 80.0);
    }

    #[test]
    fn release_in_bounds_stays_put() {
        let mut sheet = controller();
        sheet.ingest(GestureSample::began(0.0));
        sheet.ingest(GestureSample::active(75.0));
        sheet.tick();
        sheet.ingest(GestureSample::ended(75.0, 0.0));

        assert!(!sheet.needs_frame());
        assert_eq!(sheet.tick(), 75.0);
        assert!(!sheet.is_animating());
    }

    #[test]
    fn release_past_bottom_settles_to_max() {
        let mut sheet = controller();
        sheet.ingest(GestureSample::began(0.0));
        sheet.ingest(GestureSample::active(350.0));
        let stretched = sheet.tick();
        assert!(stretched > 200.0 && stretched < 350.0);

        sheet.ingest(GestureSample::ended(350.0, 900.0));
        assert_eq!(sheet.release_velocity(), 900.0);

        let mut frames = 0;
        while sheet.needs_frame() {
            let offset = sheet.tick();
            assert!(offset >= 200.0);
            frames += 1;
            assert!(frames < 100);
        }
        assert_eq!(sheet.offset(), 200.0);
    }

    #[test]
    fn release_past_edge_starts_clock_before_first_tick() {
        let mut sheet = controller();
        sheet.ingest(GestureSample::began(0.0));
        sheet.ingest(GestureSample::active(-80.0));
        sheet.tick();
        assert!(!sheet.is_animating());

        sheet.ingest(GestureSample::ended(-80.0, 0.0));
        assert!(sheet.is_animating());
        assert!(sheet.offset() < 0.0, "ingest moved the offset");

        // A driver that only looks at the clock and the drag state.
        let mut ticks = 0;
        while sheet.is_animating() || sheet.is_dragging() {
            sheet.tick();
            ticks += 1;
            assert!(ticks < 100, "never settled");
        }
        assert!(ticks > 1);
        assert_eq!(sheet.offset(), 0.0);
    }

    #[test]
    fn cancel_behaves_like_release() {
        let mut sheet = controller();
        sheet.ingest(GestureSample::began(0.0));
        sheet.ingest(GestureSample::active(-30.0));
        sheet.tick();
        sheet.ingest(GestureSample::cancelled(-30.0));
        assert!(!sheet.is_dragging());
        assert_eq!(sheet.candidate(), 0.0);
    }

    #[test]
    fn projected_rest_is_clamped() {
        let mut sheet = controller();
        sheet.ingest(GestureSample::began(0.0));
        sheet.ingest(GestureSample::active(100.0));
        sheet.tick();
        sheet.ingest(GestureSample::ended(100.0, 1e6));
        assert_eq!(sheet.projected_rest(), 200.0);
        // Settling ignores it.
        assert_eq!(sheet.candidate(), 100.0);
    }
}
