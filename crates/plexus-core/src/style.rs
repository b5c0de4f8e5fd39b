use glam::Vec3;

/// Linear RGB colour with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const CYAN: Rgb = Rgb { r: 0.0, g: 1.0, b: 1.0 };

    /// Packed `0xRRGGBB`.
    pub fn from_u32(num: u32) -> Rgb {
        let r = ((num >> 16) & 0xff) as f32 / 255.0;
        let g = ((num >> 8) & 0xff) as f32 / 255.0;
        let b = (num & 0xff) as f32 / 255.0;
        Rgb { r, g, b }
    }

    /// CSS-style `#rrggbb`. `None` for anything else.
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Rgb::from_u32)
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// How the host should draw a frame. None of this affects the simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkStyle {
    pub point_size: f32,
    /// Points shrink with distance from the camera.
    pub size_attenuation: bool,
    pub point_color: Rgb,
    pub point_opacity: f32,
    pub line_color: Rgb,
    pub line_opacity: f32,
    pub camera_position: Vec3,
    /// Vertical field of view in degrees.
    pub camera_fov: f32,
}

impl Default for NetworkStyle {
    fn default() -> Self {
        Self {
            point_size: 0.08,
            size_attenuation: true,
            point_color: Rgb::CYAN,
            point_opacity: 0.8,
            line_color: Rgb::CYAN,
            line_opacity: 0.15,
            camera_position: Vec3::new(0.0, 0.0, 8.0),
            camera_fov: 60.0,
        }
    }
}
