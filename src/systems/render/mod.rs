mod rig;

pub use rig::sync_rig_transform_system;
