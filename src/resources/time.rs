use bevy::prelude::*;

use crate::utils::{is_valid_timestep, MAX_FRAME_DELTA};

/// Caller-owned frame timing.
///
/// Turns timestamps (or engine-reported deltas) into the clamped `dt` the
/// integrator consumes. Invalid steps come out as `0.0`, which the
/// integrator ignores.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct FrameClock {
    max_delta: f64,
    last_timestamp: Option<f64>,
    elapsed: f64,
    frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_DELTA)
    }
}

impl FrameClock {
    pub fn new(max_delta: f64) -> Self {
        Self {
            max_delta,
            last_timestamp: None,
            elapsed: 0.0,
            frame_count: 0,
        }
    }

    /// Feed a monotonic timestamp in seconds. The first call only seeds the clock.
    pub fn tick(&mut self, now: f64) -> f64 {
        let raw = match self.last_timestamp {
            Some(last) => now - last,
            None => 0.0,
        };
        if now.is_finite() {
            self.last_timestamp = Some(now);
        }
        self.step(raw)
    }

    /// Feed a raw frame delta in seconds.
    pub fn step(&mut self, raw_delta: f64) -> f64 {
        self.frame_count += 1;
        if !is_valid_timestep(raw_delta) {
            return 0.0;
        }

        let dt = raw_delta.min(self.max_delta);
        self.elapsed += dt;
        dt
    }

    pub fn max_delta(&self) -> f64 {
        self.max_delta
    }

    pub fn set_max_delta(&mut self, max_delta: f64) {
        self.max_delta = max_delta;
    }

    /// Simulated time, the sum of clamped steps
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn reset(&mut self) {
        self.last_timestamp = None;
        self.elapsed = 0.0;
        self.frame_count = 0;
    }
}
