//! Variable-timestep frame clock and the cooperative frame pump.
//!
//! The clock converts monotonic wall-clock samples into bounded frame
//! deltas: `dt = min(now - previous, dt_cap)`, with `dt = 0` on the very
//! first sample. The pump drives a per-frame callback at a target rate with
//! sleep pacing on the calling thread. Single-threaded, no locks.

use std::time::{Duration, Instant};

use tracing::warn;

/// Default upper bound on a single frame delta in seconds.
///
/// A stall longer than this is clamped and accepted as slowdown rather than
/// handed to the integrator as one giant delta.
pub const DEFAULT_DT_CAP: f64 = 0.2;

/// Derives bounded frame deltas from monotonic timestamps.
#[derive(Debug)]
pub struct FrameClock {
    previous: Option<Instant>,
    dt_cap: f64,
}

impl FrameClock {
    /// Creates a clock with the given delta cap in seconds.
    pub fn new(dt_cap: f64) -> Self {
        Self {
            previous: None,
            dt_cap,
        }
    }

    /// Samples the clock at `now`, returning the bounded delta in seconds.
    ///
    /// The first sample returns 0. Timestamps must be monotonically
    /// non-decreasing; `Instant` guarantees that for wall-clock use.
    pub fn sample(&mut self, now: Instant) -> f64 {
        let raw = match self.previous {
            None => 0.0,
            Some(previous) => now.duration_since(previous).as_secs_f64(),
        };
        self.previous = Some(now);

        if raw > self.dt_cap {
            warn!(
                "frame delta {:.1}ms exceeds cap, clamping to {:.1}ms",
                raw * 1000.0,
                self.dt_cap * 1000.0
            );
            return self.dt_cap;
        }
        raw
    }

    /// Samples against the real clock.
    pub fn tick(&mut self) -> f64 {
        self.sample(Instant::now())
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_DT_CAP)
    }
}

/// Sleep-paced frame pump.
///
/// Calls the frame function at roughly `target_fps`, handing it the bounded
/// delta from an internal [`FrameClock`], until the callback returns `false`.
#[derive(Debug)]
pub struct FramePump {
    clock: FrameClock,
    frame_interval: Duration,
    frame_count: u64,
}

impl FramePump {
    /// Creates a pump targeting `target_fps` frames per second with the given
    /// delta cap in seconds. A zero rate is treated as 1 fps.
    pub fn new(target_fps: u32, dt_cap: f64) -> Self {
        let fps = target_fps.max(1);
        Self {
            clock: FrameClock::new(dt_cap),
            frame_interval: Duration::from_secs_f64(1.0 / f64::from(fps)),
            frame_count: 0,
        }
    }

    /// Runs the loop on the calling thread.
    ///
    /// `frame_fn` receives the bounded delta in seconds and returns whether
    /// to keep running.
    pub fn run(&mut self, mut frame_fn: impl FnMut(f64) -> bool) {
        loop {
            let frame_start = Instant::now();
            let dt = self.clock.sample(frame_start);
            self.frame_count += 1;
            if !frame_fn(dt) {
                return;
            }
            if let Some(rest) = self.frame_interval.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(rest);
            }
        }
    }

    /// Frames driven so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
