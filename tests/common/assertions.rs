use approx::assert_relative_eq;
use nalgebra::UnitQuaternion;
use suit_rig::SuitRig;

/// Assert that a rig satisfies its numeric invariants
#[track_caller]
pub fn assert_rig_valid(rig: &SuitRig) {
    let position = rig.pose().position;
    assert!(
        position.iter().all(|v| v.is_finite()),
        "Position is not finite: {:?}",
        position
    );

    let velocity = rig.velocity();
    assert!(
        velocity.iter().all(|v| v.is_finite()),
        "Velocity is not finite: {:?}",
        velocity
    );
    assert!(
        velocity.norm() <= rig.config().max_speed + 1e-9,
        "Speed exceeded limit: {} > {}",
        velocity.norm(),
        rig.config().max_speed
    );

    let angular_velocity = rig.angular_velocity();
    let max_spin = rig.config().max_spin;
    for (axis, rate) in angular_velocity.iter().enumerate() {
        assert!(rate.is_finite(), "Angular velocity {} is not finite", axis);
        assert!(
            rate.abs() <= max_spin,
            "Angular velocity {} exceeded limit: {} > {}",
            axis,
            rate,
            max_spin
        );
    }

    let norm = rig.pose().orientation.quaternion().norm();
    assert_relative_eq!(norm, 1.0, epsilon = 1e-6);
}

/// Assert that two attitudes are approximately equal
#[track_caller]
pub fn assert_attitude_eq(
    actual: &UnitQuaternion<f64>,
    expected: &UnitQuaternion<f64>,
    epsilon: f64,
) {
    let angle = actual.angle_to(expected);
    assert!(
        angle < epsilon,
        "Attitude difference {} exceeds epsilon {}",
        angle,
        epsilon
    );
}
