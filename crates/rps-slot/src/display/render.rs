use crate::display::instance::{RenderBuffer, RenderInstance};
use crate::display::stage::{Stage, VisualKind};
use crate::display::traits::Rect;

/// Build the render buffer from the stage.
/// Masks are not drawn; sprites are moved into world space, clipped to their
/// mask and culled when they fall entirely outside it.
pub fn build_render_buffer(stage: &Stage, buffer: &mut RenderBuffer) {
    buffer.clear();

    for visual in stage.iter() {
        let (world, clip, asset, color, kind) = match visual.kind {
            VisualKind::Mask => continue,
            VisualKind::Sprite { asset } => {
                let mask = match visual.parent.and_then(|p| stage.get(p)) {
                    Some(m) => m.rect,
                    None => continue,
                };
                let world = visual.rect.translated(mask.pos);
                if !world.overlaps(&mask) {
                    continue;
                }
                (world, mask, asset.0 as f32, 0.0, RenderInstance::KIND_SPRITE)
            }
            VisualKind::Rectangle { color } => (
                visual.rect,
                visual.rect,
                -1.0,
                color as f32,
                RenderInstance::KIND_RECTANGLE,
            ),
        };

        buffer.push(instance(world, clip, asset, visual.alpha, color, kind));
    }
}

fn instance(world: Rect, clip: Rect, asset: f32, alpha: f32, color: f32, kind: f32) -> RenderInstance {
    RenderInstance {
        x: world.x(),
        y: world.y(),
        width: world.width(),
        height: world.height(),
        clip_x: clip.x(),
        clip_y: clip.y(),
        clip_width: clip.width(),
        clip_height: clip.height(),
        asset,
        alpha,
        color,
        kind,
    }
}
