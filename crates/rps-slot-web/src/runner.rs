use rps_slot::{
    build_render_buffer, FrameContext, FrameTicker, InputEvent, InputQueue, RenderBuffer,
    Result, SlotConfig, SlotSession, Stage,
};

/// Wires one `SlotSession` to the browser frame loop.
///
/// wasm-bindgen cannot export this directly; `lib.rs` keeps it in a
/// `thread_local!` and exposes free functions.
pub struct SlotRunner {
    session: SlotSession,
    stage: Stage,
    ctx: FrameContext,
    input: InputQueue,
    ticker: FrameTicker,
    render_buffer: RenderBuffer,
    /// Flat buffer of sound event ids for the host audio layer.
    sound_buffer: Vec<u8>,
}

impl SlotRunner {
    pub fn new(config: SlotConfig) -> Result<Self> {
        let mut stage = Stage::new();
        let ticker = FrameTicker::new(config.max_fps);
        let session = SlotSession::new(config, &mut stage)?;

        let mut runner = Self {
            session,
            stage,
            ctx: FrameContext::new(),
            input: InputQueue::new(),
            ticker,
            render_buffer: RenderBuffer::new(),
            sound_buffer: Vec::with_capacity(16),
        };
        build_render_buffer(&runner.stage, &mut runner.render_buffer);
        Ok(runner)
    }

    /// Parse a JSON config and build a runner from it.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::new(SlotConfig::from_json(json)?)
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one host frame: maybe tick the session, rebuild the render buffer
    /// and pack the frame's sounds.
    pub fn tick(&mut self, frame_seconds: f32) {
        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        if let Some(dt) = self.ticker.advance(frame_seconds) {
            if let Err(e) = self.session.update(dt, &mut self.input, &mut self.stage, &mut self.ctx) {
                log::error!("slot runner: update failed: {}", e);
            }
        }

        self.render_buffer.clear();
        build_render_buffer(&self.stage, &mut self.render_buffer);

        self.sound_buffer.clear();
        for sound in &self.ctx.sounds {
            self.sound_buffer.push(sound.0 as u8);
        }
    }

    pub fn session(&self) -> &SlotSession {
        &self.session
    }

    /// Asset paths in id order; `RenderInstance::asset` indexes this list.
    pub fn asset_names(&self) -> &[String] {
        self.stage.assets().names()
    }

    pub fn config_json(&self) -> String {
        serde_json::to_string(self.session.config()).unwrap_or_default()
    }

    // ---- Pointer accessors for host buffer reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn sound_events_ptr(&self) -> *const u8 {
        self.sound_buffer.as_ptr()
    }

    pub fn sound_events_len(&self) -> u32 {
        self.sound_buffer.len() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.session.world_size().x
    }

    pub fn world_height(&self) -> f32 {
        self.session.world_size().y
    }

    pub fn balance(&self) -> f64 {
        self.session.balance() as f64
    }

    pub fn bet(&self) -> f64 {
        self.session.bet() as f64
    }
}
