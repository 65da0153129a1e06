use bytemuck::{Pod, Zeroable};

/// Per-visual render data handed to the host renderer.
/// Must match the host protocol: 12 floats = 48 bytes stride.
///
/// Positions are world space. Nested sprites carry their mask's rectangle
/// as the clip; everything else clips to itself.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub clip_x: f32,
    pub clip_y: f32,
    pub clip_width: f32,
    pub clip_height: f32,
    /// Asset id for sprites, -1 for rectangles.
    pub asset: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    /// 0xRRGGBB fill for rectangles (exact in f32 up to 2^24).
    pub color: f32,
    /// `KIND_SPRITE` or `KIND_RECTANGLE`.
    pub kind: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
    pub const KIND_SPRITE: f32 = 0.0;
    pub const KIND_RECTANGLE: f32 = 1.0;
}

/// Render buffer containing all visible instances for one frame.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(512),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Instance data as one flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Raw pointer to instance data for host memory reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.as_floats().as_ptr()
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
