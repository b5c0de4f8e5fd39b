use glam::Mat3;
use plexus_core::animation::{AnimationContext, Clock};
use plexus_core::style::{NetworkStyle, Rgb};
use plexus_core::{NetworkConfig, ParticleNetwork};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

/// Install the panic hook so Rust panics show up in the browser console.
#[wasm_bindgen]
pub fn initialize() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Browser-facing particle network.
///
/// JS calls `step(performance.now() / 1000)` once per animation frame,
/// then uploads `positions` and the first `segments_len` floats of
/// `segments` straight out of wasm memory.
#[wasm_bindgen]
pub struct ParticleField {
    network: ParticleNetwork,
    clock: Clock,
    style: NetworkStyle,
    seed: u64,
    last_step_ms: f32,
}

#[wasm_bindgen]
impl ParticleField {
    /// Default 80-particle field. Without a seed one is drawn from the
    /// browser's crypto source.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u32>) -> Result<ParticleField, JsError> {
        ParticleField::build(NetworkConfig::default(), seed)
    }

    #[wasm_bindgen]
    pub fn with_config(
        particle_count: usize,
        bounds_x: f32,
        bounds_y: f32,
        bounds_z: f32,
        connection_distance: f32,
        seed: Option<u32>,
    ) -> Result<ParticleField, JsError> {
        let config = NetworkConfig::new(
            particle_count,
            glam::Vec3::new(bounds_x, bounds_y, bounds_z),
            connection_distance,
        );
        ParticleField::build(config, seed)
    }

    /// Advance one frame. `now_seconds` is the host timestamp; the first
    /// call defines time zero. Returns the number of edges drawn.
    #[wasm_bindgen]
    pub fn step(&mut self, now_seconds: f64) -> u32 {
        let start = js_sys::Date::now();
        let elapsed = self.clock.tick(now_seconds) as f32;
        let edges = self.network.step(elapsed).edge_count();
        self.last_step_ms = (js_sys::Date::now() - start) as f32;
        edges as u32
    }

    /// Respawn the cloud. Elapsed time and rotation restart from zero.
    #[wasm_bindgen]
    pub fn reinitialize(&mut self, seed: Option<u32>) -> Result<(), JsError> {
        self.seed = resolve_seed(seed)?;
        self.network.reseed(&mut StdRng::seed_from_u64(self.seed));
        self.clock.reset();
        Ok(())
    }

    /// Read-only view of the `positions_len` position floats in wasm
    /// memory. The simulation owns this memory: JS must never write
    /// through it, and the view is only valid until the next `step`,
    /// `reinitialize` or `free`.
    #[wasm_bindgen]
    pub fn positions_ptr(&self) -> *const f32 {
        self.network.frame().positions().as_ptr()
    }

    #[wasm_bindgen]
    pub fn positions_len(&self) -> usize {
        self.network.frame().positions().len()
    }

    /// Read-only view of the line buffer (`segments_capacity` floats,
    /// the first `segments_len` meaningful). Same rules as
    /// `positions_ptr`: never written from JS, valid until the next
    /// `step`, `reinitialize` or `free`.
    #[wasm_bindgen]
    pub fn segments_ptr(&self) -> *const f32 {
        self.network.frame().padded_segments().as_ptr()
    }

    /// Floats that hold this frame's segments.
    #[wasm_bindgen]
    pub fn segments_len(&self) -> usize {
        self.network.frame().segments().len()
    }

    /// Floats in the whole line buffer, for sizing the GPU attribute once.
    #[wasm_bindgen]
    pub fn segments_capacity(&self) -> usize {
        self.network.frame().padded_segments().len()
    }

    /// Flat copy of this frame's segments.
    #[wasm_bindgen]
    pub fn segments(&self) -> Vec<f32> {
        self.network.frame().segments().to_vec()
    }

    /// Flat copy of the particle positions.
    #[wasm_bindgen]
    pub fn positions(&self) -> Vec<f32> {
        self.network.frame().positions().to_vec()
    }

    #[wasm_bindgen]
    pub fn edge_count(&self) -> usize {
        self.network.edge_count()
    }

    #[wasm_bindgen]
    pub fn particle_count(&self) -> usize {
        self.network.particle_count()
    }

    #[wasm_bindgen]
    pub fn rotation_angle(&self) -> f32 {
        self.network.frame().rotation_angle()
    }

    /// Column-major 3x3 display rotation for both points and lines.
    #[wasm_bindgen]
    pub fn rotation_matrix(&self) -> Vec<f32> {
        Mat3::from_quat(self.network.frame().rotation())
            .to_cols_array()
            .to_vec()
    }

    #[wasm_bindgen]
    pub fn seed(&self) -> f64 {
        self.seed as f64
    }

    #[wasm_bindgen]
    pub fn last_step_ms(&self) -> f32 {
        self.last_step_ms
    }

    #[wasm_bindgen]
    pub fn point_size(&self) -> f32 {
        self.style.point_size
    }

    #[wasm_bindgen]
    pub fn size_attenuation(&self) -> bool {
        self.style.size_attenuation
    }

    #[wasm_bindgen]
    pub fn point_color(&self) -> Vec<f32> {
        self.style.point_color.to_array().to_vec()
    }

    #[wasm_bindgen]
    pub fn point_opacity(&self) -> f32 {
        self.style.point_opacity
    }

    #[wasm_bindgen]
    pub fn line_color(&self) -> Vec<f32> {
        self.style.line_color.to_array().to_vec()
    }

    #[wasm_bindgen]
    pub fn line_opacity(&self) -> f32 {
        self.style.line_opacity
    }

    #[wasm_bindgen]
    pub fn camera_position(&self) -> Vec<f32> {
        self.style.camera_position.to_array().to_vec()
    }

    #[wasm_bindgen]
    pub fn camera_fov(&self) -> f32 {
        self.style.camera_fov
    }

    /// `#rrggbb`; rejects anything else and keeps the old colour.
    #[wasm_bindgen]
    pub fn set_point_color(&mut self, hex: &str) -> Result<(), JsError> {
        self.style.point_color = parse_color(hex)?;
        Ok(())
    }

    /// `#rrggbb`; rejects anything else and keeps the old colour.
    #[wasm_bindgen]
    pub fn set_line_color(&mut self, hex: &str) -> Result<(), JsError> {
        self.style.line_color = parse_color(hex)?;
        Ok(())
    }
}

impl ParticleField {
    fn build(config: NetworkConfig, seed: Option<u32>) -> Result<ParticleField, JsError> {
        let seed = resolve_seed(seed)?;
        let network = ParticleNetwork::with_seed(config, seed)?;

        web_sys::console::log_1(
            &format!(
                "WASM ParticleField created: {} particles, seed {}",
                network.particle_count(),
                seed
            )
            .into(),
        );

        Ok(ParticleField {
            network,
            clock: Clock::new(),
            style: NetworkStyle::default(),
            seed,
            last_step_ms: 0.0,
        })
    }
}

fn parse_color(hex: &str) -> Result<Rgb, JsError> {
    Rgb::from_hex(hex)
        .ok_or_else(|| JsError::new(&format!("invalid colour {hex:?}, expected #rrggbb")))
}

fn resolve_seed(seed: Option<u32>) -> Result<u64, JsError> {
    match seed {
        Some(seed) => Ok(seed as u64),
        None => {
            let mut bytes = [0u8; 8];
            getrandom::getrandom(&mut bytes)
                .map_err(|err| JsError::new(&format!("no entropy source: {err}")))?;
            Ok(u64::from_le_bytes(bytes))
        }
    }
}

/// Lifetime scope for one mounted view.
///
/// A view creates a scope on mount, registers the teardown of every
/// listener or tween it starts, and calls `dispose()` (or `free()`) on
/// unmount.
#[wasm_bindgen]
#[derive(Default)]
pub struct AnimationScope {
    context: AnimationContext,
}

#[wasm_bindgen]
impl AnimationScope {
    #[wasm_bindgen(constructor)]
    pub fn new() -> AnimationScope {
        AnimationScope::default()
    }

    #[wasm_bindgen]
    pub fn register(&mut self, teardown: js_sys::Function) {
        self.context.register(move || {
            if let Err(err) = teardown.call0(&JsValue::NULL) {
                web_sys::console::error_2(&"animation teardown failed:".into(), &err);
            }
        });
    }

    #[wasm_bindgen]
    pub fn dispose(&mut self) {
        self.context.dispose();
    }

    #[wasm_bindgen]
    pub fn is_disposed(&self) -> bool {
        self.context.is_disposed()
    }

    #[wasm_bindgen]
    pub fn pending(&self) -> usize {
        self.context.pending()
    }
}
