#![allow(dead_code)]

mod assertions;
mod fixtures;
mod test_app;

// Re-export
pub use assertions::{assert_attitude_eq, assert_rig_valid};
pub use fixtures::*;
pub use test_app::TestApp;
