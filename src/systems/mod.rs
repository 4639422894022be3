pub mod controller;
pub mod diagnostics;
pub mod physics;
pub mod render;

pub use controller::{dead_zone, map_controls, safe_axis, suit_input_system};
pub use diagnostics::{suit_diagnostics_system, DiagnosticsTimer, RigDiagnostics};
pub use physics::{drive_rig, suit_integrator_system};
pub use render::sync_rig_transform_system;
