pub mod controls;
pub mod spatial;
pub mod suit;

pub use controls::{RotationRates, SuitControls};
pub use spatial::Pose;
pub use suit::{RotationAccel, SuitConfig, SuitConfigBuilder, SuitRig};
