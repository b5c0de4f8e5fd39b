use glam::Vec3;

use crate::error::{Axis, ConfigError};
use crate::frame::Segment;
use crate::proximity::checked_max_edges;

/// Construction-time constants for a [`ParticleNetwork`](crate::ParticleNetwork).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NetworkConfig {
    pub particle_count: usize,
    /// Full extents of the spawn box, centered on the origin.
    /// The reflecting walls sit at half of these.
    pub bounds: Vec3,
    /// Full width of the symmetric per-axis velocity range.
    pub speed_range: Vec3,
    pub connection_distance: f32,
    /// Display rotation about +Y, in radians per second.
    pub rotation_rate: f32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            particle_count: 80,
            bounds: Vec3::new(15.0, 15.0, 8.0),
            speed_range: Vec3::new(0.01, 0.01, 0.005),
            connection_distance: 2.5,
            rotation_rate: 0.02,
        }
    }
}

impl NetworkConfig {
    /// Config with the given size and threshold; speed range and
    /// rotation rate keep their defaults.
    pub fn new(particle_count: usize, bounds: Vec3, connection_distance: f32) -> Self {
        Self {
            particle_count,
            bounds,
            connection_distance,
            ..Self::default()
        }
    }

    /// Wall positions: `|position.axis| > half_extents.axis` reflects.
    pub fn half_extents(&self) -> Vec3 {
        self.bounds * 0.5
    }

    /// Size of the preallocated line buffer, or `None` when it cannot be
    /// addressed on this target.
    pub fn line_buffer_bytes(&self) -> Option<usize> {
        checked_max_edges(self.particle_count)?
            .checked_mul(std::mem::size_of::<Segment>())
            .filter(|&bytes| bytes <= isize::MAX as usize)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::EmptyParticleSet);
        }
        if self.line_buffer_bytes().is_none() {
            return Err(ConfigError::TooManyParticles {
                count: self.particle_count,
            });
        }
        for (axis, value) in Axis::ALL.into_iter().zip(self.bounds.to_array()) {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidBounds { axis, value });
            }
        }
        for (axis, value) in Axis::ALL.into_iter().zip(self.speed_range.to_array()) {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidSpeedRange { axis, value });
            }
        }
        if !self.connection_distance.is_finite() || self.connection_distance < 0.0 {
            return Err(ConfigError::InvalidConnectionDistance(self.connection_distance));
        }
        if !self.rotation_rate.is_finite() {
            return Err(ConfigError::InvalidRotationRate(self.rotation_rate));
        }
        Ok(())
    }
}
