pub const MAX_FRAME_DELTA: f64 = 0.05; // s, upper bound on a single integration step
pub const DEGENERATE_W_EPSILON: f64 = 1e-12; // attitude real part at or below this resets to identity

pub const DEFAULT_DEAD_ZONE: f64 = 0.15; // stick deflection treated as zero
pub const DIAGNOSTICS_INTERVAL: f64 = 0.25; // s between diagnostic log lines

// Suit limits
pub const DEFAULT_MAX_SPEED: f64 = 5.0; // m/s
pub const DEFAULT_MAX_SPIN: f64 = std::f64::consts::PI; // rad/s per axis
pub const DEFAULT_THRUST_ACCEL: f64 = 3.0; // m/s^2 per unit input
pub const DEFAULT_BRAKE_ACCEL: f64 = 6.0; // m/s^2
pub const DEFAULT_ANGULAR_BRAKE_ACCEL: f64 = std::f64::consts::PI; // rad/s^2
