use crate::api::types::VisualId;
use crate::display::assets::{AssetId, AssetRegistry};
use crate::display::traits::{Display, Rect};

/// What a visual draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VisualKind {
    /// Clipping container; draws nothing itself.
    Mask,
    /// Sprite nested inside a mask, positioned relative to it.
    Sprite { asset: AssetId },
    /// Solid rectangle in world space.
    Rectangle { color: u32 },
}

/// One display element held by the stage.
#[derive(Debug, Clone)]
pub struct Visual {
    pub id: VisualId,
    /// Caller-chosen id for staged elements; nested sprites have none.
    pub name: Option<String>,
    pub parent: Option<VisualId>,
    pub kind: VisualKind,
    /// World space for masks and rectangles, parent-relative for sprites.
    pub rect: Rect,
    pub alpha: f32,
}

/// In-memory `Display` backed by a flat Vec.
/// Sized for a handful of reels (hundreds of visuals, not millions).
pub struct Stage {
    visuals: Vec<Visual>,
    assets: AssetRegistry,
    next_id: u32,
}

impl Stage {
    pub fn new() -> Self {
        Self {
            visuals: Vec::with_capacity(512),
            assets: AssetRegistry::new(),
            next_id: 1,
        }
    }

    fn alloc_id(&mut self) -> VisualId {
        let id = VisualId(self.next_id);
        self.next_id += 1;
        id
    }

    fn stage_named(&mut self, name: &str, kind: VisualKind, rect: Rect, alpha: f32) {
        self.remove(name);
        let id = self.alloc_id();
        self.visuals.push(Visual {
            id,
            name: Some(name.to_string()),
            parent: None,
            kind,
            rect,
            alpha,
        });
    }

    /// Get a visual by handle.
    pub fn get(&self, id: VisualId) -> Option<&Visual> {
        self.index_of(id).map(|i| &self.visuals[i])
    }

    // ids are issued in increasing order and removal keeps order, so the
    // Vec stays sorted by id
    fn index_of(&self, id: VisualId) -> Option<usize> {
        self.visuals.binary_search_by_key(&id.0, |v| v.id.0).ok()
    }

    /// Find a staged element by its caller-chosen id.
    pub fn find(&self, name: &str) -> Option<&Visual> {
        self.visuals.iter().find(|v| v.name.as_deref() == Some(name))
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Visual> {
        self.visuals.iter_mut().find(|v| v.name.as_deref() == Some(name))
    }

    /// Visuals nested inside `parent`, in insertion order.
    pub fn children(&self, parent: VisualId) -> impl Iterator<Item = &Visual> {
        self.visuals.iter().filter(move |v| v.parent == Some(parent))
    }

    /// Iterate over all visuals in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Visual> {
        self.visuals.iter()
    }

    pub fn assets(&self) -> &AssetRegistry {
        &self.assets
    }

    /// Number of visuals on stage.
    pub fn len(&self) -> usize {
        self.visuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visuals.is_empty()
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Stage {
    fn stage_mask(&mut self, id: &str, rect: Rect) {
        self.stage_named(id, VisualKind::Mask, rect, 1.0);
    }

    fn move_mask(&mut self, id: &str, rect: Rect) {
        if let Some(mask) = self.find_mut(id) {
            mask.rect = rect;
        }
    }

    fn nest_sprite(&mut self, asset: &str, parent_id: &str) -> Option<VisualId> {
        let parent = self.find(parent_id)?.id;
        let asset = self.assets.register(asset);
        let id = self.alloc_id();
        self.visuals.push(Visual {
            id,
            name: None,
            parent: Some(parent),
            kind: VisualKind::Sprite { asset },
            rect: Rect::default(),
            alpha: 1.0,
        });
        Some(id)
    }

    fn place(&mut self, visual: VisualId, rect: Rect) {
        if let Some(i) = self.index_of(visual) {
            self.visuals[i].rect = rect;
        }
    }

    fn stage_rectangle(&mut self, id: &str, rect: Rect, color: u32, alpha: f32) {
        self.stage_named(id, VisualKind::Rectangle { color }, rect, alpha);
    }

    fn set_alpha(&mut self, id: &str, alpha: f32) {
        if let Some(v) = self.find_mut(id) {
            v.alpha = alpha;
        }
    }

    fn remove(&mut self, id: &str) {
        let Some(target) = self.find(id).map(|v| v.id) else {
            return;
        };
        // nesting is one level deep: masks own sprites, nothing owns masks
        self.visuals
            .retain(|v| v.id != target && v.parent != Some(target));
    }
}
