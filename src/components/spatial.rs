use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::utils::yaw_yxz;

/// Pose of the rig in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Position in world space [m]
    pub position: Vector3<f64>,

    /// Orientation quaternion (rotation from rig-local to world frame)
    pub orientation: UnitQuaternion<f64>,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            orientation: UnitQuaternion::identity(),
        }
    }
}

impl Pose {
    pub fn new(position: Vector3<f64>, orientation: UnitQuaternion<f64>) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Create a pose at a specific position with identity orientation
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// World direction of the rig's local -Z axis.
    pub fn forward(&self) -> Vector3<f64> {
        self.orientation * -Vector3::z()
    }

    /// Heading about world +Y [rad]
    pub fn yaw(&self) -> f64 {
        yaw_yxz(&self.orientation)
    }

    /// Single-precision transform for the rendering side.
    pub fn to_transform(&self) -> Transform {
        let q = self.orientation.quaternion();
        Transform {
            translation: Vec3::new(
                self.position.x as f32,
                self.position.y as f32,
                self.position.z as f32,
            ),
            rotation: Quat::from_xyzw(q.i as f32, q.j as f32, q.k as f32, q.w as f32),
            scale: Vec3::ONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_default_pose() {
        let pose = Pose::default();
        assert_eq!(pose.position, Vector3::zeros());
        assert_eq!(pose.orientation, UnitQuaternion::identity());
        assert_relative_eq!(pose.forward(), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_forward_follows_yaw() {
        // Quarter turn to the left about +Y faces the rig down world -X
        let pose = Pose::new(
            Vector3::zeros(),
            UnitQuaternion::from_axis_angle(&Vector3::y_axis(), FRAC_PI_2),
        );
        assert_relative_eq!(pose.forward(), Vector3::new(-1.0, 0.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(pose.yaw(), FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_to_transform() {
        let pose = Pose::new(
            Vector3::new(1.0, 2.0, -3.0),
            UnitQuaternion::from_axis_angle(&Vector3::y_axis(), FRAC_PI_2),
        );
        let transform = pose.to_transform();

        assert_eq!(transform.translation, Vec3::new(1.0, 2.0, -3.0));
        let forward = transform.rotation * Vec3::NEG_Z;
        assert!((forward - Vec3::NEG_X).length() < 1e-6);
    }
}
