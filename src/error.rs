//! Construction-time errors.
//!
//! The controller is pure arithmetic over a small fixed state, so the only
//! fatal condition is a bad set of constants.  Everything that happens after
//! construction is absorbed silently.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("resistance constant must lie strictly between 0 and 1 (got {0})")]
    ResistanceOutOfRange(f64),

    #[error("content extent {content} is smaller than container extent {container}")]
    NegativeRange { content: f64, container: f64 },

    #[error("rubber-band extent constant must be positive (got {0})")]
    InvalidExtentConstant(f64),

    #[error("convergence factor must lie in (0, 1] (got {0})")]
    InvalidConvergence(f64),

    #[error("settle epsilon must be positive (got {0})")]
    InvalidEpsilon(f64),

    #[error("deceleration rate must lie strictly between 0 and 1 (got {0})")]
    DecelerationOutOfRange(f64),

    #[error("`{0}` must be a finite number")]
    NonFinite(&'static str),
}
