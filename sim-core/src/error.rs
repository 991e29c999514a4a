//! Error types for the simulation core.

use thiserror::Error;

/// A [`crate::config::Config`] value outside its valid range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be a probability in [0, 1], got {value}")]
    Probability { name: &'static str, value: f64 },
    #[error("{name} must be finite and non-negative, got {value}")]
    Negative { name: &'static str, value: f64 },
    #[error("{name} must be finite and greater than zero, got {value}")]
    NotPositive { name: &'static str, value: f64 },
}

/// Errors that can occur while setting up or resizing a simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// The drawing surface has an unusable size.
    #[error("invalid drawing surface size {width}x{height}")]
    InvalidSurface { width: f32, height: f32 },
    #[error(transparent)]
    Config(#[from] ConfigError),
}
