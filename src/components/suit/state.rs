use bevy::prelude::*;
use nalgebra::{Quaternion, UnitQuaternion, Vector3};

use super::config::SuitConfig;
use crate::components::{Pose, RotationRates};
use crate::utils::{
    clamp_magnitude, clamp_per_axis, finite_or_zero, is_valid_timestep, sanitize_attitude,
    sanitize_components, sanitize_vec3, with_length,
};

/// Free-floating zero-g rig driven by thrust and angular-acceleration input.
///
/// The rig exclusively owns its pose and velocities. Every operation is
/// infallible: an invalid `dt` turns the call into a no-op and non-finite
/// values are reset to zero (vectors) or identity (orientation) instead of
/// being propagated.
///
/// Per frame the driver calls any of [`SuitRig::apply_local_thrust`],
/// [`SuitRig::apply_local_angular_accel`] and [`SuitRig::set_brake`], then
/// exactly one [`SuitRig::update`].
#[derive(Component, Debug, Clone, PartialEq)]
pub struct SuitRig {
    pose: Pose,
    /// World-frame linear velocity [m/s]
    velocity: Vector3<f64>,
    /// Rig-local angular rate per axis [rad/s]
    angular_velocity: Vector3<f64>,
    braking: bool,
    config: SuitConfig,
}

impl Default for SuitRig {
    fn default() -> Self {
        Self::new(SuitConfig::default())
    }
}

impl SuitRig {
    /// Create a rig at rest at the origin
    pub fn new(config: SuitConfig) -> Self {
        Self::with_pose(config, Pose::default())
    }

    /// Create a rig at rest at the given pose
    pub fn with_pose(config: SuitConfig, pose: Pose) -> Self {
        Self {
            pose,
            velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
            braking: false,
            config,
        }
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn velocity(&self) -> Vector3<f64> {
        self.velocity
    }

    pub fn angular_velocity(&self) -> Vector3<f64> {
        self.angular_velocity
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    pub fn is_braking(&self) -> bool {
        self.braking
    }

    pub fn config(&self) -> &SuitConfig {
        &self.config
    }

    /// Tuning access; new limits take effect on the next operation.
    pub fn config_mut(&mut self) -> &mut SuitConfig {
        &mut self.config
    }

    /// Accelerate along a direction given in rig-local axes.
    ///
    /// The magnitude of `local_direction` scales the thrust. A non-finite
    /// direction contributes nothing.
    pub fn apply_local_thrust(&mut self, local_direction: &Vector3<f64>, dt: f64) {
        if !is_valid_timestep(dt) {
            return;
        }

        self.pose.orientation = sanitize_attitude(&self.pose.orientation);
        let direction = sanitize_vec3(self.pose.orientation * sanitize_vec3(*local_direction));

        self.velocity = sanitize_vec3(self.velocity);
        self.velocity = sanitize_vec3(self.velocity + direction * (self.config.thrust_accel * dt));
        self.clamp_velocities();
    }

    /// Accumulate angular rate about the rig-local axes.
    ///
    /// Yaw drives local Y, pitch drives local X and roll drives local Z.
    pub fn apply_local_angular_accel(&mut self, rates: RotationRates, dt: f64) {
        if !is_valid_timestep(dt) {
            return;
        }

        self.angular_velocity = sanitize_components(self.angular_velocity);

        let yaw = finite_or_zero(rates.yaw);
        let pitch = finite_or_zero(rates.pitch);
        let roll = finite_or_zero(rates.roll);
        let accel = self.config.rot_accel;

        self.angular_velocity.y += yaw * accel.yaw * dt;
        self.angular_velocity.x += pitch * accel.pitch * dt;
        self.angular_velocity.z += roll * accel.roll * dt;

        self.angular_velocity = sanitize_components(self.angular_velocity);
        self.clamp_velocities();
    }

    /// Hold-to-brake; read by the next [`SuitRig::update`].
    pub fn set_brake(&mut self, on: bool) {
        self.braking = on;
    }

    /// Stop all motion immediately. The pose is left where it is.
    pub fn brake_hard(&mut self) {
        self.velocity = Vector3::zeros();
        self.angular_velocity = Vector3::zeros();
    }

    /// Advance the rig by one frame.
    pub fn update(&mut self, dt: f64) {
        if !is_valid_timestep(dt) {
            return;
        }

        self.velocity = sanitize_vec3(self.velocity);
        self.angular_velocity = sanitize_vec3(self.angular_velocity);

        if self.braking {
            self.apply_brake(dt);
        }

        // Linear
        self.pose.position = sanitize_vec3(self.pose.position + self.velocity * dt);

        // Angular, composed in the body frame so turns stay about the rig's own axes
        if self.angular_velocity.norm_squared() > 0.0 {
            let half = self.angular_velocity * (dt * 0.5);
            let delta = UnitQuaternion::new_normalize(Quaternion::new(1.0, half.x, half.y, half.z));
            self.pose.orientation *= delta;
        }
        self.pose.orientation = sanitize_attitude(&self.pose.orientation);

        if self.config.linear_damping != 0.0 {
            self.velocity *= (1.0 - self.config.linear_damping * dt).max(0.0);
        }
        if self.config.angular_damping != 0.0 {
            self.angular_velocity *= (1.0 - self.config.angular_damping * dt).max(0.0);
        }

        self.clamp_velocities();
        self.velocity = sanitize_vec3(self.velocity);
    }

    /// Decay speed and spin toward zero without overshooting.
    fn apply_brake(&mut self, dt: f64) {
        let speed = self.velocity.norm();
        if speed > 0.0 {
            let decel = (self.config.brake_accel * dt).min(speed);
            self.velocity = with_length(self.velocity, speed - decel);
        }

        let spin = self.angular_velocity.norm();
        if spin > 0.0 {
            let decel = (self.config.angular_brake_accel * dt).min(spin);
            self.angular_velocity = with_length(self.angular_velocity, spin - decel);
        }
    }

    // Linear motion is rescaled along its direction, angular motion is box-clamped per axis.
    fn clamp_velocities(&mut self) {
        self.velocity = clamp_magnitude(self.velocity, self.config.max_speed);
        self.angular_velocity = clamp_per_axis(self.angular_velocity, self.config.max_spin);
    }
}
