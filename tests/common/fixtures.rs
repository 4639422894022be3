use nalgebra::Vector3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use suit_rig::{resources::GamepadSnapshot, RotationRates};

pub const FRAME_DT: f64 = 1.0 / 60.0;

pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub fn random_vector(rng: &mut ChaCha8Rng, range: f64) -> Vector3<f64> {
    Vector3::new(
        rng.gen_range(-range..range),
        rng.gen_range(-range..range),
        rng.gen_range(-range..range),
    )
}

pub fn random_rates(rng: &mut ChaCha8Rng, range: f64) -> RotationRates {
    RotationRates {
        yaw: rng.gen_range(-range..range),
        pitch: rng.gen_range(-range..range),
        roll: rng.gen_range(-range..range),
    }
}

/// Mostly plausible values, with the occasional degenerate one
pub fn noisy_scalar(rng: &mut ChaCha8Rng, range: f64) -> f64 {
    match rng.gen_range(0..20) {
        0 => f64::NAN,
        1 => f64::INFINITY,
        2 => f64::NEG_INFINITY,
        3 => 0.0,
        _ => rng.gen_range(-range..range),
    }
}

pub fn noisy_dt(rng: &mut ChaCha8Rng) -> f64 {
    match rng.gen_range(0..20) {
        0 => f64::NAN,
        1 => 0.0,
        2 => -FRAME_DT,
        3 => f64::INFINITY,
        _ => rng.gen_range(0.0..0.05),
    }
}

/// Right controller with the stick at `(x, y)` on the xr-standard thumbstick axes
pub fn right_stick(x: f64, y: f64) -> GamepadSnapshot {
    GamepadSnapshot::with_axes(vec![0.0, 0.0, x, y])
}
