pub mod config;
mod input;
mod time;

pub use config::{AxisBinding, ControlMapping, FrameConfig, RigSettings};
pub use input::{ButtonSnapshot, GamepadSnapshot, SuitPads};
pub use time::FrameClock;
