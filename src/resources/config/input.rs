use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{ConfigError, DEFAULT_DEAD_ZONE};

/// Axis index with a fallback for controllers that report fewer axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBinding {
    pub primary: usize,
    pub fallback: usize,
}

impl AxisBinding {
    pub const fn new(primary: usize, fallback: usize) -> Self {
        Self { primary, fallback }
    }
}

/// How controller axes and buttons map onto suit controls.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlMapping {
    pub dead_zone: f64,
    /// Right stick Y, pushed forward is negative
    pub forward_axis: AxisBinding,
    /// Left stick X, right is positive
    pub strafe_axis: AxisBinding,
    /// Right stick X, right is positive
    pub yaw_axis: AxisBinding,
    /// Right-hand buttons, any of which holds the brake
    pub brake_buttons: Vec<usize>,
}

impl Default for ControlMapping {
    fn default() -> Self {
        Self {
            dead_zone: DEFAULT_DEAD_ZONE,
            // xr-standard thumbstick axes, with the legacy two-axis layout as fallback
            forward_axis: AxisBinding::new(3, 1),
            strafe_axis: AxisBinding::new(2, 0),
            yaw_axis: AxisBinding::new(2, 0),
            brake_buttons: vec![3, 9, 10, 4],
        }
    }
}

impl ControlMapping {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.dead_zone) {
            return Err(ConfigError::ValidationError(format!(
                "dead_zone must be in [0, 1), got {}",
                self.dead_zone
            )));
        }
        Ok(())
    }
}
