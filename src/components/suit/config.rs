use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::{
    ConfigError, DEFAULT_ANGULAR_BRAKE_ACCEL, DEFAULT_BRAKE_ACCEL, DEFAULT_MAX_SPEED,
    DEFAULT_MAX_SPIN, DEFAULT_THRUST_ACCEL,
};

/// Angular acceleration per unit of rate input, per rig-local axis [rad/s^2]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationAccel {
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
}

impl Default for RotationAccel {
    fn default() -> Self {
        Self {
            yaw: 2.5,
            pitch: 2.0,
            roll: 2.0,
        }
    }
}

/// Limits and gains of the zero-g flight model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuitConfig {
    /// Linear speed limit [m/s]
    pub max_speed: f64,
    /// Per-axis angular rate limit [rad/s]
    pub max_spin: f64,
    /// Linear acceleration per unit thrust input [m/s^2]
    pub thrust_accel: f64,
    pub rot_accel: RotationAccel,
    /// Fractional velocity loss per second, 0 disables
    pub linear_damping: f64,
    pub angular_damping: f64,
    /// Linear deceleration while braking [m/s^2]
    pub brake_accel: f64,
    /// Angular deceleration while braking [rad/s^2]
    pub angular_brake_accel: f64,
}

impl Default for SuitConfig {
    fn default() -> Self {
        Self {
            max_speed: DEFAULT_MAX_SPEED,
            max_spin: DEFAULT_MAX_SPIN,
            thrust_accel: DEFAULT_THRUST_ACCEL,
            rot_accel: RotationAccel::default(),
            linear_damping: 0.0,
            angular_damping: 0.0,
            brake_accel: DEFAULT_BRAKE_ACCEL,
            angular_brake_accel: DEFAULT_ANGULAR_BRAKE_ACCEL,
        }
    }
}

impl SuitConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [("max_speed", self.max_speed), ("max_spin", self.max_spin)];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }

        let non_negative = [
            ("thrust_accel", self.thrust_accel),
            ("rot_accel.yaw", self.rot_accel.yaw),
            ("rot_accel.pitch", self.rot_accel.pitch),
            ("rot_accel.roll", self.rot_accel.roll),
            ("linear_damping", self.linear_damping),
            ("angular_damping", self.angular_damping),
            ("brake_accel", self.brake_accel),
            ("angular_brake_accel", self.angular_brake_accel),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be non-negative and finite, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

#[derive(Default, Debug, Serialize, Clone, Deserialize)]
pub struct SuitConfigBuilder {
    pub max_speed: Option<f64>,
    pub max_spin: Option<f64>,
    pub thrust_accel: Option<f64>,
    pub rot_accel: Option<RotationAccel>,
    pub linear_damping: Option<f64>,
    pub angular_damping: Option<f64>,
    pub brake_accel: Option<f64>,
    pub angular_brake_accel: Option<f64>,
}

impl SuitConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_speed(mut self, speed: f64) -> Self {
        self.max_speed = Some(speed);
        self
    }

    pub fn max_spin(mut self, spin: f64) -> Self {
        self.max_spin = Some(spin);
        self
    }

    pub fn thrust_accel(mut self, accel: f64) -> Self {
        self.thrust_accel = Some(accel);
        self
    }

    pub fn rot_accel(mut self, accel: RotationAccel) -> Self {
        self.rot_accel = Some(accel);
        self
    }

    pub fn linear_damping(mut self, damping: f64) -> Self {
        self.linear_damping = Some(damping);
        self
    }

    pub fn angular_damping(mut self, damping: f64) -> Self {
        self.angular_damping = Some(damping);
        self
    }

    pub fn brake_accel(mut self, accel: f64) -> Self {
        self.brake_accel = Some(accel);
        self
    }

    pub fn angular_brake_accel(mut self, accel: f64) -> Self {
        self.angular_brake_accel = Some(accel);
        self
    }

    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        let mut builder = Self::new();

        if let Some(max_speed) = value.get("max_speed").and_then(|v| v.as_f64()) {
            builder = builder.max_speed(max_speed);
        }
        if let Some(max_spin) = value.get("max_spin").and_then(|v| v.as_f64()) {
            builder = builder.max_spin(max_spin);
        }
        if let Some(thrust_accel) = value.get("thrust_accel").and_then(|v| v.as_f64()) {
            builder = builder.thrust_accel(thrust_accel);
        }
        if let Some(rot_accel) = value.get("rot_accel") {
            // Partial objects fill the missing axes from the defaults
            let mut accel = RotationAccel::default();
            if let Some(yaw) = rot_accel.get("yaw").and_then(|v| v.as_f64()) {
                accel.yaw = yaw;
            }
            if let Some(pitch) = rot_accel.get("pitch").and_then(|v| v.as_f64()) {
                accel.pitch = pitch;
            }
            if let Some(roll) = rot_accel.get("roll").and_then(|v| v.as_f64()) {
                accel.roll = roll;
            }
            builder = builder.rot_accel(accel);
        }
        if let Some(damping) = value.get("linear_damping").and_then(|v| v.as_f64()) {
            builder = builder.linear_damping(damping);
        }
        if let Some(damping) = value.get("angular_damping").and_then(|v| v.as_f64()) {
            builder = builder.angular_damping(damping);
        }
        if let Some(accel) = value.get("brake_accel").and_then(|v| v.as_f64()) {
            builder = builder.brake_accel(accel);
        }
        if let Some(accel) = value.get("angular_brake_accel").and_then(|v| v.as_f64()) {
            builder = builder.angular_brake_accel(accel);
        }

        Ok(builder)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json(&value)
    }

    pub fn build(self) -> Result<SuitConfig, ConfigError> {
        let mut config = SuitConfig::default();

        if let Some(max_speed) = self.max_speed {
            config.max_speed = max_speed;
        }
        if let Some(max_spin) = self.max_spin {
            config.max_spin = max_spin;
        }
        if let Some(thrust_accel) = self.thrust_accel {
            config.thrust_accel = thrust_accel;
        }
        if let Some(rot_accel) = self.rot_accel {
            config.rot_accel = rot_accel;
        }
        if let Some(damping) = self.linear_damping {
            config.linear_damping = damping;
        }
        if let Some(damping) = self.angular_damping {
            config.angular_damping = damping;
        }
        if let Some(accel) = self.brake_accel {
            config.brake_accel = accel;
        }
        if let Some(accel) = self.angular_brake_accel {
            config.angular_brake_accel = accel;
        }

        config.validate()?;
        Ok(config)
    }
}
