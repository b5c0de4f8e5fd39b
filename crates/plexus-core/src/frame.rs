use glam::{Quat, Vec3};

/// One proximity edge as the renderer consumes it: both endpoints,
/// six contiguous floats.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Segment {
    pub start: [f32; 3], // 12 bytes
    pub end: [f32; 3],   // 12 bytes
}

impl Segment {
    pub const FLOATS: usize = 6;

    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self {
            start: start.to_array(),
            end: end.to_array(),
        }
    }

    pub fn length(&self) -> f32 {
        Vec3::from_array(self.start).distance(Vec3::from_array(self.end))
    }
}

/// Read-only view of one simulated frame.
///
/// Borrowed from the network, so the renderer can never write into
/// simulation state, and the next `step` cannot run while it is alive.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub(crate) positions: &'a [Vec3],
    pub(crate) segments: &'a [Segment],
    pub(crate) edge_count: usize,
    pub(crate) rotation_angle: f32,
}

impl<'a> Frame<'a> {
    /// Flat `x, y, z` per particle: always `3 * N` floats.
    pub fn positions(&self) -> &'a [f32] {
        bytemuck::cast_slice(self.positions)
    }

    /// Only the segments found this frame: `6 * edge_count` floats.
    pub fn segments(&self) -> &'a [f32] {
        bytemuck::cast_slice(self.meaningful())
    }

    /// The whole preallocated line buffer. Everything past
    /// `6 * edge_count` is zero.
    pub fn padded_segments(&self) -> &'a [f32] {
        bytemuck::cast_slice(self.segments)
    }

    pub fn edges(&self) -> impl Iterator<Item = &'a Segment> + 'a {
        self.meaningful().iter()
    }

    fn meaningful(&self) -> &'a [Segment] {
        let segments = self.segments;
        &segments[..self.edge_count]
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn particle_count(&self) -> usize {
        self.positions.len()
    }

    /// Display rotation about +Y, applied to both the points and the
    /// lines. Never feeds back into the simulation.
    pub fn rotation_angle(&self) -> f32 {
        self.rotation_angle
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.rotation_angle)
    }
}
