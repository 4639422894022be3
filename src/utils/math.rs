use nalgebra::{UnitQuaternion, Vector3};
use std::f64::consts::PI;

use super::constants::DEGENERATE_W_EPSILON;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// A frame delta the integrator will act on: finite and strictly positive.
#[inline]
pub fn is_valid_timestep(dt: f64) -> bool {
    dt.is_finite() && dt > 0.0
}

#[inline]
pub fn is_finite_vec3(v: &Vector3<f64>) -> bool {
    v.iter().all(|c| c.is_finite())
}

#[inline]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Whole-vector sanitize: any non-finite component zeroes the entire vector.
#[inline]
pub fn sanitize_vec3(v: Vector3<f64>) -> Vector3<f64> {
    if is_finite_vec3(&v) {
        v
    } else {
        Vector3::zeros()
    }
}

/// Per-component sanitize: only the offending components are zeroed.
#[inline]
pub fn sanitize_components(v: Vector3<f64>) -> Vector3<f64> {
    v.map(finite_or_zero)
}

/// Returns a unit attitude safe to compose with.
///
/// Non-finite quaternions and those whose real part has collapsed to
/// `DEGENERATE_W_EPSILON` or below are replaced by the identity rotation.
/// Everything else is renormalised.
pub fn sanitize_attitude(attitude: &UnitQuaternion<f64>) -> UnitQuaternion<f64> {
    let q = attitude.quaternion();
    if !q.coords.iter().all(|c| c.is_finite()) || q.w.abs() <= DEGENERATE_W_EPSILON {
        return UnitQuaternion::identity();
    }
    UnitQuaternion::new_normalize(*q)
}

/// Rescale `v` to `length` keeping its direction. A zero vector stays zero.
pub fn with_length(v: Vector3<f64>, length: f64) -> Vector3<f64> {
    let norm = v.norm();
    if norm > 0.0 {
        v * (length / norm)
    } else {
        v
    }
}

/// Direction-preserving magnitude clamp.
pub fn clamp_magnitude(v: Vector3<f64>, max: f64) -> Vector3<f64> {
    if v.norm() > max {
        with_length(v, max)
    } else {
        v
    }
}

/// Box clamp of each component to `[-limit, limit]`.
///
/// Uses `min`/`max`, so a negative or NaN limit does not panic.
pub fn clamp_per_axis(v: Vector3<f64>, limit: f64) -> Vector3<f64> {
    v.map(|c| c.min(limit).max(-limit))
}

/// Heading about world +Y in radians, extracted in YXZ Euler order.
pub fn yaw_yxz(attitude: &UnitQuaternion<f64>) -> f64 {
    let q = attitude.quaternion();
    let (x, y, z, w) = (q.i, q.j, q.k, q.w);

    let m13 = 2.0 * (x * z + w * y);
    let m33 = 1.0 - 2.0 * (x * x + y * y);
    let m23 = 2.0 * (y * z - w * x);

    if m23.abs() < 0.9999999 {
        m13.atan2(m33)
    } else {
        // Gimbal lock: pitch at +-90 degrees
        let m31 = 2.0 * (x * z - w * y);
        let m11 = 1.0 - 2.0 * (y * y + z * z);
        (-m31).atan2(m11)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Quaternion;

    #[test]
    fn test_timestep_validity() {
        assert!(is_valid_timestep(0.016));
        assert!(!is_valid_timestep(0.0));
        assert!(!is_valid_timestep(-1.0));
        assert!(!is_valid_timestep(f64::NAN));
        assert!(!is_valid_timestep(f64::INFINITY));
    }

    #[test]
    fn test_sanitize_vec3_is_whole_vector() {
        let v = Vector3::new(1.0, f64::NAN, 3.0);
        assert_eq!(sanitize_vec3(v), Vector3::zeros());

        let ok = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(sanitize_vec3(ok), ok);
    }

    #[test]
    fn test_sanitize_components_is_per_component() {
        let v = Vector3::new(1.0, f64::INFINITY, 3.0);
        assert_eq!(sanitize_components(v), Vector3::new(1.0, 0.0, 3.0));
    }

    #[test]
    fn test_sanitize_attitude_resets_non_finite() {
        let q = UnitQuaternion::new_unchecked(Quaternion::new(f64::NAN, 0.0, 0.0, 0.0));
        assert_eq!(sanitize_attitude(&q), UnitQuaternion::identity());
    }

    #[test]
    fn test_sanitize_attitude_resets_degenerate_real_part() {
        let q = UnitQuaternion::new_unchecked(Quaternion::new(1e-13, 1.0, 0.0, 0.0));
        assert_eq!(sanitize_attitude(&q), UnitQuaternion::identity());
    }

    #[test]
    fn test_sanitize_attitude_renormalises() {
        let q = UnitQuaternion::new_unchecked(Quaternion::new(2.0, 0.0, 2.0, 0.0));
        let safe = sanitize_attitude(&q);
        assert_relative_eq!(safe.quaternion().norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(safe.angle(), PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_clamp_magnitude_preserves_direction() {
        let v = Vector3::new(3.0, 4.0, 0.0);
        let clamped = clamp_magnitude(v, 2.5);
        assert_relative_eq!(clamped.norm(), 2.5, epsilon = 1e-12);
        assert_relative_eq!(clamped.normalize(), v.normalize(), epsilon = 1e-12);
        assert_eq!(clamp_magnitude(v, 10.0), v);
    }

    #[test]
    fn test_clamp_per_axis_is_box_clamp() {
        let v = Vector3::new(10.0, -10.0, 0.5);
        assert_eq!(clamp_per_axis(v, 1.0), Vector3::new(1.0, -1.0, 0.5));
    }

    #[test]
    fn test_with_length_of_zero_vector() {
        assert_eq!(with_length(Vector3::zeros(), 3.0), Vector3::zeros());
    }

    #[test]
    fn test_yaw_extraction() {
        let q = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), deg_to_rad(30.0));
        assert_relative_eq!(rad_to_deg(yaw_yxz(&q)), 30.0, epsilon = 1e-9);

        let turned = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), -2.0);
        assert_relative_eq!(yaw_yxz(&turned), -2.0, epsilon = 1e-9);
    }
}
