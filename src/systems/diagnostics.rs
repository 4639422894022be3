use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::SuitRig;
use crate::utils::{rad_to_deg, DIAGNOSTICS_INTERVAL};

/// Throttle for [`suit_diagnostics_system`]
#[derive(Resource, Debug, Clone)]
pub struct DiagnosticsTimer(pub Timer);

impl Default for DiagnosticsTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(
            DIAGNOSTICS_INTERVAL as f32,
            TimerMode::Repeating,
        ))
    }
}

/// Read-only snapshot of a rig for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigDiagnostics {
    pub position: Vector3<f64>,
    pub speed: f64,
    pub angular_velocity_y: f64,
    pub yaw_deg: f64,
    pub braking: bool,
}

impl RigDiagnostics {
    pub fn capture(rig: &SuitRig) -> Self {
        Self {
            position: rig.pose().position,
            speed: rig.speed(),
            angular_velocity_y: rig.angular_velocity().y,
            yaw_deg: rad_to_deg(rig.pose().yaw()),
            braking: rig.is_braking(),
        }
    }
}

pub fn suit_diagnostics_system(
    time: Res<Time>,
    mut timer: ResMut<DiagnosticsTimer>,
    query: Query<(Entity, &SuitRig, Option<&Name>)>,
) {
    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }

    for (entity, rig, name) in query.iter() {
        let d = RigDiagnostics::capture(rig);
        let label = name.map_or_else(|| format!("{:?}", entity), |n| n.as_str().to_string());
        info!(
            "{}: pos=({:.2}, {:.2}, {:.2}) speed={:.3} ang_vel_y={:.3} yaw={:.1}deg braking={}",
            label,
            d.position.x,
            d.position.y,
            d.position.z,
            d.speed,
            d.angular_velocity_y,
            d.yaw_deg,
            d.braking
        );
    }
}
