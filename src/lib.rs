pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{Pose, RotationRates, SuitConfig, SuitControls, SuitRig};
pub use plugins::{SuitRigPlugin, SuitSet};
pub use resources::{FrameClock, RigSettings};
