use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{RotationRates, SuitControls};
use crate::resources::{AxisBinding, ControlMapping, GamepadSnapshot, SuitPads};

/// Shape a stick axis: zero inside the dead zone, rescaled to [-1, 1] outside it.
pub fn dead_zone(value: f64, dead: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let magnitude = value.abs();
    if magnitude < dead {
        return 0.0;
    }
    value.signum() * ((magnitude - dead) / (1.0 - dead)).min(1.0)
}

/// Axis value at `index`, or `fallback` if it is missing or non-finite.
pub fn safe_axis(axes: &[f64], index: usize, fallback: f64) -> f64 {
    axes.get(index)
        .copied()
        .filter(|v| v.is_finite())
        .unwrap_or(fallback)
}

fn read_axis(pad: &GamepadSnapshot, binding: AxisBinding) -> f64 {
    safe_axis(&pad.axes, binding.primary, safe_axis(&pad.axes, binding.fallback, 0.0))
}

/// Map raw controller samples onto normalized suit controls.
///
/// Right stick Y drives forward thrust along local -Z, left stick X strafes
/// along local X and right stick X yaws (stick right turns right). Pitch and
/// roll are not bound to any input yet.
pub fn map_controls(pads: &SuitPads, mapping: &ControlMapping) -> SuitControls {
    let right = pads.right.as_ref();
    let left = pads.left.as_ref();

    // Stick pushed forward reads negative
    let forward = -dead_zone(
        right.map_or(0.0, |pad| read_axis(pad, mapping.forward_axis)),
        mapping.dead_zone,
    );
    let strafe = dead_zone(
        left.map_or(0.0, |pad| read_axis(pad, mapping.strafe_axis)),
        mapping.dead_zone,
    );
    let yaw = -dead_zone(
        right.map_or(0.0, |pad| read_axis(pad, mapping.yaw_axis)),
        mapping.dead_zone,
    );

    let braking = right.map_or(false, |pad| {
        mapping.brake_buttons.iter().any(|&index| pad.is_pressed(index))
    });

    SuitControls {
        thrust: Vector3::new(strafe, 0.0, -forward),
        rotation: RotationRates::yaw(yaw),
        braking,
    }
}

/// System for sampling the latest controller state into every rig's controls.
pub fn suit_input_system(
    pads: Res<SuitPads>,
    mapping: Res<ControlMapping>,
    mut query: Query<&mut SuitControls>,
) {
    let sampled = map_controls(&pads, &mapping);
    for mut controls in query.iter_mut() {
        *controls = sampled;
    }
}
