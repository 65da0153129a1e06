// reel/coordinator.rs
//
// One slot machine: a row of reels that start together and stop one after
// another, plus the win boxes drawn over its cells.
//
// Usage:
//   let mut machine = ReelSpinCoordinator::new(&mut stage, "MachinePlayer", &config, &stops, Vec2::ZERO)?;
//   machine.start_spin(&mut stage);
//   machine.end_spin(&targets)?;
//   machine.update(dt, &mut stage);
//   for reel in machine.drain_completed() { /* reel stopped */ }

use glam::Vec2;
use crate::config::SlotConfig;
use crate::display::{Display, Rect};
use crate::engine::strip::ReelStrip;
use crate::engine::wins::WinMatch;
use crate::error::{Result, SlotError};
use super::kinematics::ReelKinematics;

const FADE_SPEED: f32 = 0.025;
const FADE_MIN_FACTOR: f32 = 0.5;

/// Look of the boxes marking winning cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WinBoxStyle {
    pub color: u32,
    pub alpha: f32,
    /// Pulse the alpha between `alpha` and half of it.
    pub flash: bool,
}

impl WinBoxStyle {
    /// Flashing red, for the machine that won the cell.
    pub const WINNER: Self = Self { color: 0xff0000, alpha: 0.5, flash: true };
    /// Static dim box, for the machine that lost it.
    pub const LOSER: Self = Self { color: 0x000000, alpha: 0.2, flash: false };
}

#[derive(Debug, Clone)]
struct WinBox {
    id: String,
    cell: WinMatch,
    style: WinBoxStyle,
    alpha: f32,
}

impl WinBox {
    fn update(&mut self, dt: f32, display: &mut dyn Display) {
        if !self.style.flash {
            return;
        }
        self.alpha -= FADE_SPEED * dt;
        if self.alpha <= self.style.alpha * FADE_MIN_FACTOR {
            self.alpha = self.style.alpha;
        }
        display.set_alpha(&self.id, self.alpha);
    }
}

/// Drives every reel of one machine.
///
/// `end_spin` only arms reel 0. When reel `i` reports its stop, reel `i + 1`
/// is armed with its own target, so the reels always land left to right.
pub struct ReelSpinCoordinator {
    id: String,
    reels: Vec<ReelKinematics>,
    rows: usize,
    bounds: Rect,
    /// Targets of the spin being stopped.
    stops: Vec<usize>,
    /// Reels that stopped since the last drain, in stop order.
    completed: Vec<usize>,
    win_boxes: Vec<WinBox>,
}

impl ReelSpinCoordinator {
    /// Stage one reel per configured strip, resting on `stops`, with the
    /// machine's top-left corner at `origin`.
    pub fn new(
        display: &mut dyn Display,
        id: &str,
        config: &SlotConfig,
        stops: &[usize],
        origin: Vec2,
    ) -> Result<Self> {
        if stops.len() != config.reel_count() {
            return Err(SlotError::StopCountMismatch {
                expected: config.reel_count(),
                got: stops.len(),
            });
        }

        let size = config.symbol_size;
        let height = size * config.machine_rows as f32;
        let reels = config
            .reelset
            .iter()
            .zip(stops)
            .enumerate()
            .map(|(i, (codes, &stop))| {
                let rect = Rect::new(origin.x + size * i as f32, origin.y, size, height);
                ReelKinematics::new(
                    display,
                    &format!("{id}Reel{i}"),
                    ReelStrip::new(codes),
                    &config.symbol_assets,
                    stop,
                    rect,
                    config.physics,
                    reel_seed(config.seed, id, i),
                )
            })
            .collect::<Vec<_>>();

        let bounds = Rect::new(origin.x, origin.y, size * reels.len() as f32, height);
        log::debug!("machine {}: {} reels at {:?}", id, reels.len(), bounds);
        Ok(Self {
            id: id.to_string(),
            reels,
            rows: config.machine_rows,
            bounds,
            stops: Vec::new(),
            completed: Vec::new(),
            win_boxes: Vec::new(),
        })
    }

    /// Clear the win boxes and set every reel spinning.
    pub fn start_spin(&mut self, display: &mut dyn Display) {
        self.clear_win_boxes(display);
        self.stops.clear();
        self.completed.clear();
        for reel in &mut self.reels {
            reel.start_spin();
        }
    }

    /// Stop the reels on `stops`, one at a time from the left.
    pub fn end_spin(&mut self, stops: &[usize]) -> Result<()> {
        if stops.len() != self.reels.len() {
            return Err(SlotError::StopCountMismatch {
                expected: self.reels.len(),
                got: stops.len(),
            });
        }
        self.stops = stops.to_vec();
        if let (Some(reel), Some(&stop)) = (self.reels.first_mut(), self.stops.first()) {
            reel.end_spin(stop);
        }
        Ok(())
    }

    /// Advance every reel and win box by one tick.
    pub fn update(&mut self, dt: f32, display: &mut dyn Display) {
        for i in 0..self.reels.len() {
            if self.reels[i].update(dt, display) {
                self.completed.push(i);
                if let (Some(next), Some(&stop)) = (self.reels.get_mut(i + 1), self.stops.get(i + 1)) {
                    next.end_spin(stop);
                }
            }
        }
        for win_box in &mut self.win_boxes {
            win_box.update(dt, display);
        }
    }

    /// Reels that stopped since the last call, in the order they stopped.
    pub fn drain_completed(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.completed)
    }

    /// True while any reel is still moving.
    pub fn is_spinning(&self) -> bool {
        self.reels.iter().any(ReelKinematics::is_spinning)
    }

    /// True once every reel is at rest and done bouncing.
    pub fn is_settled(&self) -> bool {
        self.reels
            .iter()
            .all(|r| !r.is_spinning() && !r.is_ending() && !r.is_bouncing())
    }

    /// Draw a box over each winning cell.
    pub fn show_win_boxes(&mut self, matches: &[WinMatch], style: WinBoxStyle, display: &mut dyn Display) {
        let size = self.cell_size();
        for &cell in matches {
            let id = format!("{}_WinBox{}_{}", self.id, cell.reel, cell.row);
            display.stage_rectangle(&id, self.cell_rect(cell, size), style.color, style.alpha);
            self.win_boxes.retain(|b| b.id != id);
            self.win_boxes.push(WinBox {
                id,
                cell,
                style,
                alpha: style.alpha,
            });
        }
    }

    pub fn clear_win_boxes(&mut self, display: &mut dyn Display) {
        for win_box in self.win_boxes.drain(..) {
            display.remove(&win_box.id);
        }
    }

    /// Move the machine into `rect`; reels become `height / rows` square.
    pub fn transform(&mut self, rect: Rect, display: &mut dyn Display) {
        self.bounds = rect;
        let size = self.cell_size();
        for (i, reel) in self.reels.iter_mut().enumerate() {
            reel.transform(Rect::new(rect.x() + size * i as f32, rect.y(), size, rect.height()), display);
        }
        for win_box in &self.win_boxes {
            let cell = self.cell_rect(win_box.cell, size);
            display.stage_rectangle(&win_box.id, cell, win_box.style.color, win_box.alpha);
        }
    }

    /// Remove every reel and box from the display.
    pub fn dispose(&mut self, display: &mut dyn Display) {
        self.clear_win_boxes(display);
        for reel in &mut self.reels {
            reel.dispose(display);
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn reels(&self) -> &[ReelKinematics] {
        &self.reels
    }

    pub fn reel(&self, index: usize) -> Option<&ReelKinematics> {
        self.reels.get(index)
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Ids of the win boxes currently shown.
    pub fn win_box_ids(&self) -> impl Iterator<Item = &str> {
        self.win_boxes.iter().map(|b| b.id.as_str())
    }

    fn cell_size(&self) -> f32 {
        if self.rows == 0 {
            return 0.0;
        }
        (self.bounds.height() / self.rows as f32).floor()
    }

    fn cell_rect(&self, cell: WinMatch, size: f32) -> Rect {
        Rect::square(
            self.bounds.x() + size * cell.reel as f32,
            self.bounds.y() + size * cell.row as f32,
            size,
        )
    }
}

/// Per-reel jitter seed, distinct across machines and reels.
fn reel_seed(seed: u64, machine: &str, reel: usize) -> u64 {
    let salt = machine.bytes().fold(0u64, |h, b| h.wrapping_mul(31).wrapping_add(b as u64));
    seed ^ salt.rotate_left(17) ^ (reel as u64 + 1).wrapping_mul(0x9e37_79b9_7f4a_7c15)
}
