use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::NetworkConfig;
use crate::error::ConfigError;
use crate::frame::{Frame, Segment};
use crate::particle::ParticleSet;
use crate::proximity::{max_edges, PairScanner};

/// The particle-network simulator.
///
/// Owns the particle cloud and the line buffer. The host calls
/// [`step`](Self::step) once per display frame and draws the returned
/// [`Frame`]; there is no internal timer.
#[derive(Debug)]
pub struct ParticleNetwork {
    config: NetworkConfig,
    half_extents: Vec3,
    particles: ParticleSet,
    /// Preallocated for every possible pair, reused across frames.
    segments: Vec<Segment>,
    scanner: PairScanner,
    edge_count: usize,
    rotation_angle: f32,
    frames: u64,
}

impl ParticleNetwork {
    /// Validate `config` and scatter the particles using `rng`.
    pub fn new<R: Rng + ?Sized>(config: NetworkConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;

        let count = config.particle_count;
        let capacity = max_edges(count);

        // Largest allocation first; a refused allocation is a config error,
        // not an abort
        let mut segments = Vec::new();
        segments
            .try_reserve_exact(capacity)
            .map_err(|_| ConfigError::TooManyParticles { count })?;
        segments.resize(capacity, Segment::default());

        let particles = ParticleSet::spawn(&config, rng);

        log::debug!(
            "particle network created: {} particles, {} segment slots, connection distance {}",
            count,
            capacity,
            config.connection_distance
        );

        Ok(Self {
            half_extents: config.half_extents(),
            config,
            particles,
            segments,
            scanner: PairScanner::new(count),
            edge_count: 0,
            rotation_angle: 0.0,
            frames: 0,
        })
    }

    /// Deterministic construction: the same seed always yields the same
    /// cloud and therefore the same frames.
    pub fn with_seed(config: NetworkConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, &mut StdRng::seed_from_u64(seed))
    }

    /// Advance one frame.
    ///
    /// `elapsed_seconds` is total wall-clock time since the animation
    /// started and only drives the display rotation; the particles move
    /// exactly one velocity step per call.
    pub fn step(&mut self, elapsed_seconds: f32) -> Frame<'_> {
        // 1. Integrate and reflect off the walls
        self.particles.advance(self.half_extents);

        // 2. Rebuild the proximity edges from scratch
        let previous = self.edge_count;
        self.edge_count = self.scanner.scan(
            self.particles.positions(),
            self.config.connection_distance,
            &mut self.segments,
        );

        // 3. Clear stale segments. Slots past the previous frame's count
        //    are already zero.
        if self.edge_count < previous {
            self.segments[self.edge_count..previous].fill(Segment::default());
        }

        // 4. Display rotation
        self.rotation_angle = elapsed_seconds * self.config.rotation_rate;
        self.frames += 1;

        log::trace!(
            "frame {}: {} edges, rotation {:.4}",
            self.frames,
            self.edge_count,
            self.rotation_angle
        );

        self.frame()
    }

    /// Output of the most recent `step`, or the freshly spawned cloud
    /// with no edges before the first one.
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            positions: self.particles.positions(),
            segments: &self.segments,
            edge_count: self.edge_count,
            rotation_angle: self.rotation_angle,
        }
    }

    /// Respawn every particle from `rng` and clear the line buffer.
    /// The particle count never changes.
    pub fn reseed<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.particles.scatter(&self.config, rng);
        self.segments[..self.edge_count].fill(Segment::default());
        self.edge_count = 0;
        self.rotation_angle = 0.0;
        self.frames = 0;

        log::debug!("particle network reseeded: {} particles", self.particles.len());
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    /// Slice-level access for hosts and tests that place particles by
    /// hand. The count cannot change through this.
    pub fn particles_mut(&mut self) -> &mut ParticleSet {
        &mut self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Line buffer capacity in segments: `N * (N - 1) / 2`.
    pub fn segment_capacity(&self) -> usize {
        self.segments.len()
    }

    /// Number of `step` calls since construction or the last reseed.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
