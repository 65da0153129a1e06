//! Display capability consumed by the reels and machines.
//!
//! The core never draws anything itself. It stages masked scroll regions,
//! nests symbol sprites inside them and moves those sprites around; a host
//! adapter decides what that means on screen. `Stage` is the in-memory
//! adapter shipped with the crate.

use glam::Vec2;
use crate::api::types::VisualId;

/// Axis-aligned rectangle: top-left position plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Square of side `size` at (x, y).
    pub fn square(x: f32, y: f32, size: f32) -> Self {
        Self::new(x, y, size, size)
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Same size, shifted by `offset`.
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            pos: self.pos + offset,
            size: self.size,
        }
    }

    /// Whether the two rectangles share any area.
    pub fn overlaps(&self, other: &Rect) -> bool {
        let a_max = self.pos + self.size;
        let b_max = other.pos + other.size;
        self.pos.x < b_max.x && other.pos.x < a_max.x && self.pos.y < b_max.y && other.pos.y < a_max.y
    }
}

/// Capability surface for creating and mutating display elements.
///
/// Ids are plain strings chosen by the caller; nested sprites are addressed
/// by the `VisualId` returned from `nest_sprite`. Every call naming an id or
/// visual that no longer exists must be a silent no-op, since teardown may
/// race with a final frame.
pub trait Display {
    /// Create (or replace) a clipped container at `rect`.
    fn stage_mask(&mut self, id: &str, rect: Rect);

    /// Move and resize an existing mask.
    fn move_mask(&mut self, id: &str, rect: Rect);

    /// Nest a sprite showing `asset` inside the container `parent_id`.
    /// Returns `None` when the parent does not exist.
    fn nest_sprite(&mut self, asset: &str, parent_id: &str) -> Option<VisualId>;

    /// Set a nested visual's rectangle, relative to its parent.
    fn place(&mut self, visual: VisualId, rect: Rect);

    /// Create (or replace) a filled rectangle at `rect` in world space.
    fn stage_rectangle(&mut self, id: &str, rect: Rect, color: u32, alpha: f32);

    /// Change the opacity of a staged element.
    fn set_alpha(&mut self, id: &str, alpha: f32);

    /// Remove an element and everything nested inside it.
    fn remove(&mut self, id: &str);
}
