//! Elastic resistance for overscroll.
//!
//! Maps a non-negative overscroll distance `x` to a displacement
//! `y = x·d·c / (d + c·x)`, where `d` is the extent constant and `c` the
//! resistance constant.  The curve starts with slope `c` and flattens out as
//! it approaches `d`, so pulling further past an edge moves the sheet less
//! and less.

/// Default extent constant (`d`).
pub const DEFAULT_EXTENT: f64 = 300.0;
/// Default resistance constant (`c`).
pub const DEFAULT_RESISTANCE: f64 = 0.3;

/// Rubber-band curve with fixed constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RubberBand {
    extent: f64,
    resistance: f64,
}

impl Default for RubberBand {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENT, DEFAULT_RESISTANCE)
    }
}

impl RubberBand {
    /// Constants are validated by [`crate::SheetConfig::validate`]; this
    /// constructor trusts them.
    pub fn new(extent: f64, resistance: f64) -> Self {
        Self { extent, resistance }
    }

    pub fn extent(&self) -> f64 {
        self.extent
    }

    pub fn resistance(&self) -> f64 {
        self.resistance
    }

    /// Resisted displacement for an overscroll of `x ≥ 0`.
    pub fn resist(&self, x: f64) -> f64 {
        resist(x, self.extent, self.resistance)
    }

    /// Overscroll that produces the displacement `y`.
    pub fn unresist(&self, y: f64) -> f64 {
        unresist(y, self.extent, self.resistance)
    }

    /// Upper limit of [`resist`](Self::resist); never reached.
    pub fn saturation(&self) -> f64 {
        self.extent
    }
}

/// `x·d·c / (d + c·x)`.  Callers pass the overscroll magnitude and re-apply
/// the sign themselves.
pub fn resist(x: f64, extent: f64, resistance: f64) -> f64 {
    x * extent * resistance / (extent + x * resistance)
}

/// Inverse of [`resist`]: `d·y / (c·(d − y))`.
///
/// Only displacements below `extent` have a preimage; anything at or past the
/// asymptote maps to `f64::INFINITY`.
pub fn unresist(y: f64, extent: f64, resistance: f64) -> f64 {
    if y >= extent {
        return f64::INFINITY;
    }
    extent * y / (resistance * (extent - y))
}
