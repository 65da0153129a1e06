// reel/kinematics.rs
//
// Scroll physics for one reel: spin-up, cruise, stop on the target symbol
// and a short settle bounce.
//
// Usage:
//   let mut reel = ReelKinematics::new(&mut stage, "PlayerReel0", strip, &assets, 12, rect, physics, seed);
//   reel.start_spin();
//   reel.end_spin(7);
//   while !reel.update(dt, &mut stage) {}   // true on the frame the reel stops

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::api::types::VisualId;
use crate::core::rng::Rng;
use crate::display::{Display, Rect};
use crate::engine::strip::ReelStrip;
use crate::error::{Result, SlotError};

/// Tuning for the reel state machine. Velocities are in symbols per frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReelPhysics {
    /// Update ticks a spin must run before it may stop.
    pub min_spin_frames: u32,
    pub velocity_start: f32,
    /// Added per frame (scaled by dt) until `velocity_max`.
    pub velocity_increment: f32,
    pub velocity_max: f32,
    /// Largest settle jitter, as a fraction of the symbol size.
    pub bounce_max: f32,
    pub bounce_frames: u32,
}

impl Default for ReelPhysics {
    fn default() -> Self {
        Self {
            min_spin_frames: 180,
            velocity_start: 0.01,
            velocity_increment: 0.01,
            velocity_max: 0.5,
            bounce_max: 0.025,
            bounce_frames: 15,
        }
    }
}

impl ReelPhysics {
    /// Reject tuning that would leave a reel unable to move or settle.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("velocity_start", self.velocity_start, self.velocity_start > 0.0),
            ("velocity_max", self.velocity_max, self.velocity_max >= self.velocity_start),
            ("velocity_increment", self.velocity_increment, self.velocity_increment >= 0.0),
            ("bounce_max", self.bounce_max, self.bounce_max >= 0.0),
        ];
        for (field, value, ok) in checks {
            // comparisons are false for NaN, so it fails here too
            if !ok || !value.is_finite() {
                return Err(SlotError::Physics { field, value });
            }
        }
        Ok(())
    }
}

/// One symbol slot of the doubled strip. `y` is relative to the mask top.
#[derive(Debug, Clone, Copy)]
struct ReelSymbol {
    visual: Option<VisualId>,
    y: f32,
}

/// A single reel: owns its mask and one sprite per doubled-strip entry.
///
/// Symbol `i` always shows `strip.doubled()[i]`; the sprites form a ring one
/// symbol apart, and whatever scrolls past the bottom edge is moved above
/// the topmost one. The reel is at rest on stop `k` when symbol `k` sits at
/// exactly y = 0.
pub struct ReelKinematics {
    mask_id: String,
    strip: ReelStrip,
    symbols: Vec<ReelSymbol>,
    physics: ReelPhysics,
    rng: Rng,
    mask: Rect,
    visible_symbols: usize,
    stop_index: usize,
    velocity: f32,
    /// Update ticks since the current spin started.
    spin_frames: u32,
    /// Ticks into the settle bounce.
    bounce_frame: u32,
    bouncing: bool,
    ending: bool,
}

impl ReelKinematics {
    /// Stage the reel's mask at `rect` and populate it resting on `stop`.
    /// Symbols with no entry in `assets` keep their slot but get no sprite.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        display: &mut dyn Display,
        id: &str,
        strip: ReelStrip,
        assets: &HashMap<String, String>,
        stop: usize,
        rect: Rect,
        physics: ReelPhysics,
        seed: u64,
    ) -> Self {
        display.stage_mask(id, rect);

        let symbols = strip
            .doubled()
            .iter()
            .map(|code| {
                let visual = match assets.get(code) {
                    Some(asset) => display.nest_sprite(asset, id),
                    None => {
                        log::warn!("reel {}: no asset for symbol {}", id, code);
                        None
                    }
                };
                ReelSymbol { visual, y: 0.0 }
            })
            .collect();

        let stop_index = if strip.is_empty() { 0 } else { stop % strip.len() };
        let mut reel = Self {
            mask_id: id.to_string(),
            strip,
            symbols,
            physics,
            rng: Rng::new(seed),
            mask: rect,
            visible_symbols: visible_symbols(rect),
            stop_index,
            velocity: 0.0,
            spin_frames: 0,
            bounce_frame: 0,
            bouncing: false,
            ending: false,
        };
        reel.place_symbols(display);
        reel
    }

    /// Advance one tick. Returns true on the tick the reel stops on its
    /// target (the bounce that follows is not reported).
    pub fn update(&mut self, dt: f32, display: &mut dyn Display) -> bool {
        self.bounce(dt, display);

        if self.velocity == 0.0 || self.symbols.is_empty() {
            return false;
        }

        self.spin_frames += 1;
        let entering = self.target_offset() <= 0.0;

        self.velocity = (self.velocity + self.physics.velocity_increment * dt).min(self.physics.velocity_max);

        // never step past the target: it lands on exactly 0
        let change = self.symbol_size() * self.velocity * dt;
        let offset = self.target_offset();
        let step = if offset < 0.0 { change.min(offset.abs()) } else { change };
        self.move_symbols(step, display);

        let entered = self.target_offset() >= 0.0;
        if entering && entered && self.ending && self.spin_frames > self.physics.min_spin_frames {
            self.velocity = 0.0;
            self.spin_frames = 0;
            self.ending = false;
            self.place_symbols(display);
            self.bouncing = true;
            self.bounce_frame = 0;
            log::debug!("reel {}: stopped on {}", self.mask_id, self.stop_index);
            return true;
        }
        false
    }

    /// Begin spinning. Ignored while a stop or settle is in progress.
    pub fn start_spin(&mut self) {
        if self.ending || self.bouncing {
            log::debug!("reel {}: start ignored, still stopping", self.mask_id);
            return;
        }
        self.velocity = self.physics.velocity_start;
        self.spin_frames = 0;
    }

    /// Request a stop on `stop`. The reel keeps spinning until the minimum
    /// duration has passed and the target symbol rolls into place.
    /// Ignored if a stop is already pending.
    pub fn end_spin(&mut self, stop: usize) {
        if self.ending {
            log::debug!("reel {}: end ignored, already ending", self.mask_id);
            return;
        }
        if !self.strip.is_empty() {
            self.stop_index = stop % self.strip.len();
        }
        self.ending = true;
    }

    /// Re-lay out the reel in a new mask rectangle, snapped to its stop.
    pub fn transform(&mut self, rect: Rect, display: &mut dyn Display) {
        self.mask = rect;
        self.visible_symbols = visible_symbols(rect);
        display.move_mask(&self.mask_id, rect);
        self.place_symbols(display);
    }

    /// Remove the mask and every sprite in it.
    pub fn dispose(&mut self, display: &mut dyn Display) {
        display.remove(&self.mask_id);
        for symbol in &mut self.symbols {
            symbol.visual = None;
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.velocity > 0.0
    }

    pub fn is_ending(&self) -> bool {
        self.ending
    }

    pub fn is_bouncing(&self) -> bool {
        self.bouncing
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn stop_index(&self) -> usize {
        self.stop_index
    }

    pub fn mask_id(&self) -> &str {
        &self.mask_id
    }

    pub fn mask(&self) -> Rect {
        self.mask
    }

    pub fn strip(&self) -> &ReelStrip {
        &self.strip
    }

    /// Number of symbols the mask shows at once.
    pub fn visible_symbols(&self) -> usize {
        self.visible_symbols
    }

    /// Offset of the target symbol from the mask top.
    pub fn target_offset(&self) -> f32 {
        self.symbols.get(self.stop_index).map_or(0.0, |s| s.y)
    }

    /// Codes currently shown top to bottom, read from symbol positions.
    pub fn visible_window(&self) -> Vec<&str> {
        let size = self.symbol_size();
        let mut shown: Vec<(f32, &str)> = self
            .symbols
            .iter()
            .zip(self.strip.doubled())
            .filter(|(s, _)| s.y > -size && s.y < self.mask.height())
            .map(|(s, code)| (s.y, code.as_str()))
            .collect();
        shown.sort_by(|a, b| a.0.total_cmp(&b.0));
        shown.into_iter().map(|(_, code)| code).collect()
    }

    fn symbol_size(&self) -> f32 {
        self.mask.width()
    }

    /// Lay the ring out so the stop symbol sits at y = 0.
    fn place_symbols(&mut self, display: &mut dyn Display) {
        let size = self.symbol_size();
        let stop = self.stop_index as f32;
        for (i, symbol) in self.symbols.iter_mut().enumerate() {
            symbol.y = (i as f32 - stop) * size;
        }
        self.move_symbols(0.0, display);
    }

    /// Scroll every symbol by `change` and wrap the ones past the bottom
    /// edge to the top of the ring.
    fn move_symbols(&mut self, change: f32, display: &mut dyn Display) {
        let size = self.symbol_size();
        let edge_bottom = self.mask.height() + size * self.visible_symbols as f32;

        for symbol in &mut self.symbols {
            symbol.y += change;
        }

        // lowest first, so each wrapped symbol lands directly above the
        // previous one and strip order is kept
        let mut wrapped: Vec<usize> = (0..self.symbols.len())
            .filter(|&i| self.symbols[i].y > edge_bottom)
            .collect();
        if !wrapped.is_empty() {
            wrapped.sort_by(|&a, &b| self.symbols[b].y.total_cmp(&self.symbols[a].y));
            let mut top = self.symbols.iter().map(|s| s.y).fold(f32::INFINITY, f32::min);
            for i in wrapped {
                top -= size;
                self.symbols[i].y = top;
            }
        }

        for symbol in &self.symbols {
            if let Some(visual) = symbol.visual {
                display.place(visual, Rect::square(0.0, symbol.y, size));
            }
        }
    }

    fn bounce(&mut self, dt: f32, display: &mut dyn Display) {
        if !self.bouncing {
            return;
        }

        self.bounce_frame += 1;
        if self.bounce_frame >= self.physics.bounce_frames {
            self.bouncing = false;
            self.bounce_frame = 0;
            let offset = self.target_offset();
            if offset != 0.0 {
                self.move_symbols(-offset, display);
            }
            return;
        }

        let jitter = self.symbol_size() * self.rng.next_f32() * self.physics.bounce_max * self.rng.next_sign() * dt;
        self.move_symbols(jitter, display);
    }
}

fn visible_symbols(rect: Rect) -> usize {
    if rect.width() <= 0.0 {
        return 0;
    }
    (rect.height() / rect.width()).ceil() as usize
}
