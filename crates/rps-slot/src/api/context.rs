use crate::api::types::{GameEvent, SoundEvent};

/// Per-frame output of the session, drained by the host after each tick.
#[derive(Debug, Default)]
pub struct FrameContext {
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
}

impl FrameContext {
    pub fn new() -> Self {
        Self {
            sounds: Vec::with_capacity(16),
            events: Vec::with_capacity(16),
        }
    }

    /// Emit a sound event for the host audio layer.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        self.sounds.push(event);
    }

    /// Emit a game event for the host UI.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }

    /// Events of one kind emitted so far this frame.
    pub fn events_of(&self, kind: f32) -> impl Iterator<Item = &GameEvent> {
        self.events.iter().filter(move |e| e.kind == kind)
    }
}
