use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Dimensionless rotation-rate input, roughly in [-1, 1] per axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RotationRates {
    /// Turn about the rig's local Y axis
    pub yaw: f64,
    /// Turn about the rig's local X axis
    pub pitch: f64,
    /// Turn about the rig's local Z axis
    pub roll: f64,
}

impl RotationRates {
    pub fn yaw(yaw: f64) -> Self {
        Self {
            yaw,
            ..Default::default()
        }
    }

    pub fn is_zero(&self) -> bool {
        self.yaw == 0.0 && self.pitch == 0.0 && self.roll == 0.0
    }
}

/// Normalized per-frame control state for one rig.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuitControls {
    /// Thrust in rig-local axes; forward is local -Z.
    pub thrust: Vector3<f64>,
    pub rotation: RotationRates,
    /// Hold-to-brake
    pub braking: bool,
}

impl Default for SuitControls {
    fn default() -> Self {
        Self {
            thrust: Vector3::zeros(),
            rotation: RotationRates::default(),
            braking: false,
        }
    }
}

impl SuitControls {
    pub fn is_thrusting(&self) -> bool {
        self.thrust != Vector3::zeros()
    }

    pub fn is_rotating(&self) -> bool {
        !self.rotation.is_zero()
    }
}
