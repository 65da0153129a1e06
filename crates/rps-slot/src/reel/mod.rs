//! Reel kinematics and the multi-reel machine built on them.

pub mod coordinator;
pub mod kinematics;

pub use coordinator::{ReelSpinCoordinator, WinBoxStyle};
pub use kinematics::{ReelKinematics, ReelPhysics};
