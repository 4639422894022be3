pub mod input;
pub mod settings;

pub use input::{AxisBinding, ControlMapping};
pub use settings::{FrameConfig, RigSettings};
