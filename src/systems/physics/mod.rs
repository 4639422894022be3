mod integrator;

pub use integrator::{drive_rig, suit_integrator_system};
