use bevy::prelude::*;

use crate::components::{SuitControls, SuitRig};
use crate::resources::FrameClock;

/// System to advance every suit rig by one render frame.
///
/// The engine delta is clamped by the [`FrameClock`] before it reaches the
/// integrator, so a stalled frame never produces an oversized step.
///
/// # Arguments
/// - `query`: Rigs together with the controls sampled this frame.
/// - `time`: Engine clock supplying the raw frame delta.
/// - `clock`: Caller-owned accumulator that clamps the delta.
pub fn suit_integrator_system(
    mut query: Query<(&mut SuitRig, &SuitControls)>,
    time: Res<Time>,
    mut clock: ResMut<FrameClock>,
) {
    let dt = clock.step(time.delta_secs_f64());

    for (mut rig, controls) in query.iter_mut() {
        drive_rig(&mut rig, controls, dt);
    }
}

/// Apply one frame of controls, then integrate exactly once.
pub fn drive_rig(rig: &mut SuitRig, controls: &SuitControls, dt: f64) {
    if controls.is_thrusting() {
        rig.apply_local_thrust(&controls.thrust, dt);
    }
    if controls.is_rotating() {
        rig.apply_local_angular_accel(controls.rotation, dt);
    }
    rig.set_brake(controls.braking);
    rig.update(dt);
}
