pub mod assets;
pub mod instance;
pub mod render;
pub mod stage;
pub mod traits;

pub use assets::{AssetId, AssetRegistry};
pub use instance::{RenderBuffer, RenderInstance};
pub use render::build_render_buffer;
pub use stage::{Stage, Visual, VisualKind};
pub use traits::{Display, Rect};
