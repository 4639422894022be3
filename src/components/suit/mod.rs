mod config;
mod state;

pub use config::{RotationAccel, SuitConfig, SuitConfigBuilder};
pub use state::SuitRig;
