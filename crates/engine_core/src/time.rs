//! Frame timing for the fixed-step simulation loop.

use std::time::{Duration, Instant};

/// Fixed-timestep clock. The simulation advances in whole ticks drained from
/// an accumulator, so entity updates see a constant timestep regardless of
/// how fast the host loop runs.
#[derive(Debug)]
pub struct Time {
    /// Time of the last `update` call.
    last_frame: Instant,
    /// Wall-clock duration of the last frame.
    delta: Duration,
    /// Frames seen since construction.
    frame_count: u64,
    /// Fixed simulation timestep (default 60 Hz).
    fixed_timestep: Duration,
    /// Unconsumed time waiting to be drained into fixed ticks.
    accumulator: Duration,
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

impl Time {
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta: Duration::ZERO,
            frame_count: 0,
            fixed_timestep: Duration::from_secs_f64(1.0 / 60.0),
            accumulator: Duration::ZERO,
        }
    }

    /// Advance the clock at the start of a new frame.
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta = now - self.last_frame;
        self.last_frame = now;
        self.frame_count += 1;
        self.accumulator += self.delta;
    }

    /// Drain one fixed tick from the accumulator if enough time has passed.
    pub fn should_fixed_update(&mut self) -> bool {
        if self.accumulator >= self.fixed_timestep {
            self.accumulator -= self.fixed_timestep;
            true
        } else {
            false
        }
    }

    /// Wall-clock delta of the last frame in seconds.
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Frames seen since construction.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Fixed timestep in seconds.
    pub fn fixed_timestep_seconds(&self) -> f32 {
        self.fixed_timestep.as_secs_f32()
    }

    /// Change the fixed tick rate in Hz.
    pub fn set_fixed_rate(&mut self, hz: f64) {
        self.fixed_timestep = Duration::from_secs_f64(1.0 / hz);
    }
}
