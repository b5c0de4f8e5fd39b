//! Particle-network background simulation.
//!
//! A fixed cloud of points drifts at constant velocity inside a box,
//! bouncing off its walls, and every frame the pairs closer than a
//! threshold are emitted as line segments. The host renderer owns
//! nothing: it reads the flat buffers of a [`Frame`] and draws them.

pub mod animation;
pub mod config;
pub mod error;
pub mod frame;
pub mod network;
pub mod particle;
pub mod proximity;
pub mod style;

pub use config::NetworkConfig;
pub use error::ConfigError;
pub use frame::{Frame, Segment};
pub use network::ParticleNetwork;
