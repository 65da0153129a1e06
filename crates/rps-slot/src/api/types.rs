use bytemuck::{Pod, Zeroable};

/// Handle to a visual nested inside a mask, issued by a `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisualId(pub u32);

/// A sound event emitted by the game logic.
/// The numeric value maps to a sound the host audio layer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct SoundEvent(pub u32);

impl SoundEvent {
    pub const CLICK: SoundEvent = SoundEvent(1);
    /// Start the looping spin sound.
    pub const SPIN_LOOP: SoundEvent = SoundEvent(2);
    /// Stop the looping spin sound.
    pub const SPIN_LOOP_STOP: SoundEvent = SoundEvent(3);
    pub const REEL_STOP: SoundEvent = SoundEvent(4);
    pub const WINNER: SoundEvent = SoundEvent(5);
    pub const SPIN_WON: SoundEvent = SoundEvent(6);
    pub const SPIN_LOST: SoundEvent = SoundEvent(7);
}

/// A game event handed to the host as four floats.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    /// a = machine (0 player, 1 house), b = reel index.
    pub const REEL_STOPPED: f32 = 1.0;
    /// a = winnings, b = win match count, c = balance left once the next bet
    /// is placed.
    pub const SPIN_RESULT: f32 = 2.0;
    /// a = bet, b = balance left after the bet.
    pub const BET_CHANGED: f32 = 3.0;
    /// Balance and bet both exhausted.
    pub const GAME_OVER: f32 = 4.0;

    pub fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_event_is_four_floats() {
        assert_eq!(std::mem::size_of::<GameEvent>(), GameEvent::FLOATS * 4);
        let ev = GameEvent::new(GameEvent::SPIN_RESULT, 10.0, 4.0, 9995.0);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&ev));
        assert_eq!(floats, &[2.0, 10.0, 4.0, 9995.0]);
    }
}
