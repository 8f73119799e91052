//! Drag-phase tracking and candidate offset computation.
//!
//! The tracker never writes the rendered offset.  It only remembers where the
//! current drag started and produces the *candidate* that the settling step
//! reconciles into the offset on the next frame.

use super::rubber_band::RubberBand;

// ───────────────────────────────────────── bounds ────────────

/// Legal offset range `[0, content − container]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub content_extent: f64,
    pub container_extent: f64,
}

impl Bounds {
    pub fn new(content_extent: f64, container_extent: f64) -> Self {
        Self {
            content_extent,
            container_extent,
        }
    }

    pub fn lower(&self) -> f64 {
        0.0
    }

    /// A negative range length collapses to a zero-length range at 0.
    pub fn upper(&self) -> f64 {
        (self.content_extent - self.container_extent).max(0.0)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower() && value <= self.upper()
    }

    /// Hard clamp, no resistance.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.lower(), self.upper())
    }

    /// Pass in-range values through untouched; past either edge, only the
    /// resisted overscroll is added to the edge.
    pub fn rubber_clamp(&self, raw: f64, band: &RubberBand) -> f64 {
        let (lower, upper) = (self.lower(), self.upper());
        if raw < lower {
            lower - band.resist(lower - raw)
        } else if raw > upper {
            upper + band.resist(raw - upper)
        } else {
            raw
        }
    }
}

// ───────────────────────────────────────── samples ───────────

/// Phase reported by the gesture recogniser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Began,
    Active,
    Ended,
    Cancelled,
    /// Any recogniser state this controller has no name for (failed,
    /// undetermined, ...).  Treated as "not dragging".
    Other,
}

impl GesturePhase {
    /// `Began` and `Active` are indistinguishable to the tracker.
    pub fn is_dragging(self) -> bool {
        matches!(self, GesturePhase::Began | GesturePhase::Active)
    }

    pub fn label(self) -> &'static str {
        match self {
            GesturePhase::Idle => "idle",
            GesturePhase::Began => "began",
            GesturePhase::Active => "active",
            GesturePhase::Ended => "ended",
            GesturePhase::Cancelled => "cancelled",
            GesturePhase::Other => "other",
        }
    }
}

/// One input event along the drag axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSample {
    /// Absolute pointer coordinate.
    pub position: f64,
    pub phase: GesturePhase,
    /// Velocity at release, in units per second.  Only meaningful on the
    /// sample that ends a drag.
    pub release_velocity: f64,
}

impl GestureSample {
    pub fn began(position: f64) -> Self {
        Self {
            position,
            phase: GesturePhase::Began,
            release_velocity: 0.0,
        }
    }

    pub fn active(position: f64) -> Self {
        Self {
            position,
            phase: GesturePhase::Active,
            release_velocity: 0.0,
        }
    }

    pub fn ended(position: f64, release_velocity: f64) -> Self {
        Self {
            position,
            phase: GesturePhase::Ended,
            release_velocity,
        }
    }

    pub fn cancelled(position: f64) -> Self {
        Self {
            position,
            phase: GesturePhase::Cancelled,
            release_velocity: 0.0,
        }
    }
}

// ───────────────────────────────────────── tracker ───────────

/// Anchor captured when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    start_pointer: f64,
    start_offset: f64,
    pointer: f64,
}

impl DragSession {
    fn raw(&self) -> f64 {
        self.start_offset + (self.pointer - self.start_pointer)
    }
}

/// What an ingested sample did to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Started,
    Moved,
    Released,
    /// Terminal phase while already idle, or a drag sample without a
    /// usable position.
    Ignored,
}

/// Idle/Dragging state machine.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    session: Option<DragSession>,
    release_velocity: f64,
    last_phase: GesturePhase,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one sample.  `offset` is the currently rendered offset; it is
    /// only read when this sample starts a drag.
    pub fn ingest(&mut self, sample: GestureSample, offset: f64) -> Transition {
        if sample.phase.is_dragging() && !sample.position.is_finite() {
            return Transition::Ignored;
        }
        self.last_phase = sample.phase;

        if sample.phase.is_dragging() {
            return match self.session.as_mut() {
                Some(session) => {
                    session.pointer = sample.position;
                    Transition::Moved
                }
                None => {
                    self.session = Some(DragSession {
                        start_pointer: sample.position,
                        start_offset: offset,
                        pointer: sample.position,
                    });
                    Transition::Started
                }
            };
        }

        match self.session.take() {
            Some(_) => {
                self.release_velocity = if sample.release_velocity.is_finite() {
                    sample.release_velocity
                } else {
                    0.0
                };
                Transition::Released
            }
            None => Transition::Ignored,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Velocity recorded by the last drag-ending sample.
    pub fn release_velocity(&self) -> f64 {
        self.release_velocity
    }

    pub fn last_phase(&self) -> GesturePhase {
        self.last_phase
    }

    /// Candidate offset.  While dragging this is the finger-tracked position
    /// with rubber-band resistance past the edges; while idle it is `offset`
    /// hard-clamped into bounds, i.e. the rest position.
    pub fn candidate(&self, offset: f64, bounds: &Bounds, band: &RubberBand) -> f64 {
        match &self.session {
            Some(session) => bounds.rubber_clamp(session.raw(), band),
            None => bounds.clamp(offset),
        }
    }
}
