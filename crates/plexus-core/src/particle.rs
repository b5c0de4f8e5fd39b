use glam::Vec3;
use rand::Rng;

use crate::config::NetworkConfig;

/// SoA particle storage.
///
/// The length is fixed when the set is created. Callers only get slices,
/// so no point can be added or removed afterwards.
#[derive(Clone, Debug)]
pub struct ParticleSet {
    position: Vec<Vec3>,
    velocity: Vec<Vec3>,
}

impl ParticleSet {
    /// All particles at rest at the origin.
    pub fn new(count: usize) -> Self {
        Self {
            position: vec![Vec3::ZERO; count],
            velocity: vec![Vec3::ZERO; count],
        }
    }

    /// Scatter `config.particle_count` particles uniformly through the
    /// spawn box with velocities drawn from the symmetric speed range.
    pub fn spawn<R: Rng + ?Sized>(config: &NetworkConfig, rng: &mut R) -> Self {
        let mut particles = Self::new(config.particle_count);
        particles.scatter(config, rng);
        particles
    }

    /// Redraw every position and velocity in place.
    ///
    /// Draw order per particle is position x, y, z then velocity x, y, z,
    /// so a seeded generator always yields the same cloud.
    pub fn scatter<R: Rng + ?Sized>(&mut self, config: &NetworkConfig, rng: &mut R) {
        for (pos, vel) in self.position.iter_mut().zip(self.velocity.iter_mut()) {
            *pos = centered(rng, config.bounds);
            *vel = centered(rng, config.speed_range);
        }
    }

    pub fn len(&self) -> usize {
        self.position.len()
    }

    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.position
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocity
    }

    pub fn positions_mut(&mut self) -> &mut [Vec3] {
        &mut self.position
    }

    pub fn velocities_mut(&mut self) -> &mut [Vec3] {
        &mut self.velocity
    }

    /// Explicit Euler step followed by per-axis wall reflection.
    ///
    /// Positions are never clamped: a particle may sit up to one
    /// velocity step past a wall for a single frame before its reversed
    /// velocity carries it back.
    pub fn advance(&mut self, half_extents: Vec3) {
        for (pos, vel) in self.position.iter_mut().zip(self.velocity.iter_mut()) {
            *pos += *vel;

            if pos.x.abs() > half_extents.x {
                vel.x = -vel.x;
            }
            if pos.y.abs() > half_extents.y {
                vel.y = -vel.y;
            }
            if pos.z.abs() > half_extents.z {
                vel.z = -vel.z;
            }
        }
    }
}

/// Uniform sample in `[-extent/2, extent/2)` per axis.
///
/// Written as `(u - 0.5) * extent` rather than `gen_range` so a zero
/// extent collapses the axis instead of panicking on an empty range.
fn centered<R: Rng + ?Sized>(rng: &mut R, extent: Vec3) -> Vec3 {
    let x = (rng.gen::<f32>() - 0.5) * extent.x;
    let y = (rng.gen::<f32>() - 0.5) * extent.y;
    let z = (rng.gen::<f32>() - 0.5) * extent.z;
    Vec3::new(x, y, z)
}
