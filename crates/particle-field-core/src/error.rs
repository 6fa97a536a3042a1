//! Configuration errors.

use thiserror::Error;

/// A field configuration or viewport the simulation refuses to run with.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("viewport must have finite positive extents, got {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("particle count {count} exceeds the maximum of {max}")]
    TooManyParticles { count: usize, max: usize },

    #[error("escape radius must be finite and positive, got {0}")]
    InvalidEscapeRadius(f64),

    #[error("radius range must satisfy 0 <= min <= max, got {min}..{max}")]
    InvalidRadiusRange { min: f64, max: f64 },

    #[error("initial speed must be finite and non-negative, got {0}")]
    InvalidInitialSpeed(f64),

    #[error("{field} must lie in [0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f64 },

    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidTuning { field: &'static str, value: f64 },

    #[error("color palette is empty")]
    EmptyPalette,
}
