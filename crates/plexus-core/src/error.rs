use std::fmt;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// Rejected [`NetworkConfig`](crate::NetworkConfig). Stepping an
/// initialized network cannot fail, so this is the only error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("particle count must be at least 1")]
    EmptyParticleSet,
    #[error("{count} particles need a line buffer larger than this target can allocate")]
    TooManyParticles { count: usize },
    #[error("bounds.{axis} must be finite and non-negative, got {value}")]
    InvalidBounds { axis: Axis, value: f32 },
    #[error("speed_range.{axis} must be finite and non-negative, got {value}")]
    InvalidSpeedRange { axis: Axis, value: f32 },
    #[error("connection distance must be finite and non-negative, got {0}")]
    InvalidConnectionDistance(f32),
    #[error("rotation rate must be finite, got {0}")]
    InvalidRotationRate(f32),
}
