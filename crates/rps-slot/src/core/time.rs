/// Frames per second the delta scalar is normalized against.
/// A delta of 1.0 means exactly one frame at this rate.
pub const REFERENCE_FPS: f32 = 60.0;

/// Upper bound on one tick's delta (100 ms worth of reference frames).
pub const MAX_DELTA: f32 = 6.0;

/// Frame-rate limited tick source.
/// Converts variable host frame times into the delta-time ratio the reel
/// state machines advance by, delivering at most `max_fps` ticks per second.
#[derive(Debug, Clone)]
pub struct FrameTicker {
    /// Minimum seconds between two delivered ticks.
    min_interval: f32,
    /// Host time accumulated since the last delivered tick.
    accumulator: f32,
}

impl FrameTicker {
    pub fn new(max_fps: u32) -> Self {
        Self {
            min_interval: 1.0 / max_fps.max(1) as f32,
            accumulator: 0.0,
        }
    }

    /// Add one host frame's elapsed seconds.
    /// Returns the delta scalar when a tick is due, `None` while throttled.
    pub fn advance(&mut self, frame_seconds: f32) -> Option<f32> {
        self.accumulator += frame_seconds.max(0.0);
        // allow a sliver of jitter so a 60 Hz host feeding 60 fps never skips
        if self.accumulator < self.min_interval * 0.9 {
            return None;
        }
        let delta = (self.accumulator * REFERENCE_FPS).min(MAX_DELTA);
        self.accumulator = 0.0;
        Some(delta)
    }

    /// Seconds currently banked towards the next tick.
    pub fn pending(&self) -> f32 {
        self.accumulator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_reference_frame_is_unit_delta() {
        let mut ticker = FrameTicker::new(60);
        let delta = ticker.advance(1.0 / 60.0).unwrap();
        assert!((delta - 1.0).abs() < 1e-4);
    }

    #[test]
    fn throttles_fast_frames() {
        let mut ticker = FrameTicker::new(30);
        assert!(ticker.advance(1.0 / 120.0).is_none());
        assert!(ticker.advance(1.0 / 120.0).is_none());
        assert!(ticker.advance(1.0 / 120.0).is_none());
        let delta = ticker.advance(1.0 / 120.0).unwrap();
        // four 120 Hz frames == two reference frames
        assert!((delta - 2.0).abs() < 1e-4, "delta was {}", delta);
        assert_eq!(ticker.pending(), 0.0);
    }

    #[test]
    fn caps_long_stalls() {
        let mut ticker = FrameTicker::new(60);
        let delta = ticker.advance(5.0).unwrap();
        assert_eq!(delta, MAX_DELTA);
    }

    #[test]
    fn negative_frame_time_ignored() {
        let mut ticker = FrameTicker::new(60);
        assert!(ticker.advance(-1.0).is_none());
        assert_eq!(ticker.pending(), 0.0);
    }
}
