//! Engine construction errors.

use thiserror::Error;

use particle_field_core::error::ConfigError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("expected {expected} particles, got {actual}")]
    CountMismatch { expected: usize, actual: usize },

    #[error("particle {id} at ({x}, {y}) lies outside the viewport")]
    OutOfViewport { id: u32, x: f64, y: f64 },

    #[error("duplicate particle id {0}")]
    DuplicateId(u32),

    #[error("particle {id} has an invalid {field}")]
    InvalidState { id: u32, field: &'static str },
}
