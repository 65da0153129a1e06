pub mod api;
pub mod config;
pub mod core;
pub mod display;
pub mod engine;
pub mod error;
pub mod input;
pub mod reel;
pub mod session;

// Re-export key types at crate root for convenience
pub use api::context::FrameContext;
pub use api::types::{GameEvent, SoundEvent, VisualId};
pub use config::SlotConfig;
pub use crate::core::rng::Rng;
pub use crate::core::time::FrameTicker;
pub use display::{build_render_buffer, Display, Rect, RenderBuffer, RenderInstance, Stage};
pub use engine::{
    CombinationTable, GaffeQueue, PayoutTable, ReelStrip, Settlement, SlotEngine, SpinStops,
    StopGenerator, WinEvaluator, WinMatch,
};
pub use error::{Result, SlotError};
pub use input::queue::{InputEvent, InputQueue};
pub use reel::{ReelKinematics, ReelPhysics, ReelSpinCoordinator, WinBoxStyle};
pub use session::{BetDirection, SlotSession, SpinResult};
