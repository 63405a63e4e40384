//! The jump state machine: `Grounded` ⇄ `Airborne` under constant gravity.

use tracing::{debug, trace};

use hopper_planet::EARTH_GRAVITY;

use crate::kinematics::{flight_time, launch_speed_for_apex};

/// Apex height in meters of a jump under reference (Earth) gravity.
pub const BASE_JUMP_HEIGHT: f64 = 0.6;

/// Cap on how much weaker gravity may stretch the target apex height.
/// Keeps hang time bounded on very low-gravity worlds.
pub const MAX_HEIGHT_MULTIPLIER: f64 = 3.0;

/// Largest single integration substep in seconds (180 Hz).
pub const MAX_SUBSTEP: f64 = 1.0 / 180.0;

/// Snapshot of the jump simulation.
///
/// Sign convention: positions are meters relative to the ground plane with
/// *up negative*, so `position <= 0.0` always holds and `0.0` means standing
/// on the ground. Upward velocities are negative too.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpState {
    /// Whether a jump is currently in flight.
    pub airborne: bool,
    /// Seconds since launch. Zero while grounded.
    pub time_in_air: f64,
    /// Launch velocity in m/s (negative = upward). Zero while grounded.
    pub initial_velocity: f64,
    /// Meters above ground, negated. Zero while grounded.
    pub position: f64,
    /// Current vertical velocity in m/s.
    pub velocity: f64,
}

impl JumpState {
    /// The grounded baseline: not airborne, everything zeroed.
    pub const GROUNDED: JumpState = JumpState {
        airborne: false,
        time_in_air: 0.0,
        initial_velocity: 0.0,
        position: 0.0,
        velocity: 0.0,
    };

    /// Height above ground in meters, always non-negative.
    pub fn height(&self) -> f64 {
        -self.position
    }
}

/// Advances a single persistent [`JumpState`] through launch, flight, and
/// landing.
///
/// At most one jump is in flight at a time; triggers while airborne are
/// ignored. All mutation of the state goes through [`start`](Self::start),
/// [`advance`](Self::advance), and [`reset`](Self::reset).
#[derive(Debug)]
pub struct JumpIntegrator {
    state: JumpState,
}

impl JumpIntegrator {
    /// Creates an integrator in the grounded baseline state.
    pub fn new() -> Self {
        Self {
            state: JumpState::GROUNDED,
        }
    }

    /// Launches a jump under `gravity` m/s².
    ///
    /// The target apex is [`BASE_JUMP_HEIGHT`] scaled by how much weaker than
    /// Earth the gravity is, capped at [`MAX_HEIGHT_MULTIPLIER`]; the launch
    /// velocity is derived from that apex, so height stays visually bounded
    /// across wildly different worlds instead of a fixed launch speed
    /// producing unbounded airtime on low-gravity ones. A trigger while
    /// already airborne is ignored.
    ///
    /// # Panics
    ///
    /// Panics if `gravity <= 0` — the catalog guarantees positive gravity,
    /// so a non-positive value is a caller bug.
    pub fn start(&mut self, gravity: f64) {
        assert!(gravity > 0.0, "gravity must be positive, got {gravity}");
        if self.state.airborne {
            trace!("jump trigger ignored: already airborne");
            return;
        }
        let apex = BASE_JUMP_HEIGHT * (EARTH_GRAVITY / gravity).min(MAX_HEIGHT_MULTIPLIER);
        let launch = -launch_speed_for_apex(gravity, apex);
        self.state = JumpState {
            airborne: true,
            time_in_air: 0.0,
            initial_velocity: launch,
            position: 0.0,
            velocity: launch,
        };
        debug!(
            gravity,
            apex_m = apex,
            launch_m_s = launch,
            flight_s = flight_time(-launch, gravity),
            "jump launched"
        );
    }

    /// Advances the flight by `dt` seconds under `gravity` m/s².
    ///
    /// `dt` must be non-negative and already clamped by the caller (the frame
    /// clock caps it at 0.2 s); the integrator only bounds individual
    /// substeps at [`MAX_SUBSTEP`]. Position and velocity are evaluated from
    /// the closed-form constant-acceleration solution at each substep
    /// boundary, so splitting a delta across calls changes nothing but
    /// rounding. The first substep whose position reaches the ground snaps
    /// the state back to the grounded baseline and ends the call. No-op while
    /// grounded.
    ///
    /// # Panics
    ///
    /// Panics if `gravity <= 0` or `dt < 0`.
    pub fn advance(&mut self, dt: f64, gravity: f64) {
        assert!(gravity > 0.0, "gravity must be positive, got {gravity}");
        assert!(dt >= 0.0, "frame delta must be non-negative, got {dt}");
        if !self.state.airborne {
            return;
        }
        let mut remaining = dt;
        while remaining > 0.0 {
            let step = remaining.min(MAX_SUBSTEP);
            remaining -= step;
            let t = self.state.time_in_air + step;
            self.state.time_in_air = t;
            self.state.velocity = self.state.initial_velocity + gravity * t;
            self.state.position = self.state.initial_velocity * t + 0.5 * gravity * t * t;
            if self.state.position >= 0.0 {
                debug!(flight_s = t, "landed");
                self.state = JumpState::GROUNDED;
                return;
            }
        }
    }

    /// Returns the state to the grounded baseline (startup, planet change).
    pub fn reset(&mut self) {
        if self.state.airborne {
            debug!("jump aborted by reset");
        }
        self.state = JumpState::GROUNDED;
    }

    /// Current simulation snapshot.
    pub fn state(&self) -> JumpState {
        self.state
    }

    /// Whether a jump is in flight.
    pub fn airborne(&self) -> bool {
        self.state.airborne
    }

    /// Signed position in meters (up negative, 0 = grounded).
    pub fn position(&self) -> f64 {
        self.state.position
    }

    /// Height above ground in meters, always non-negative.
    pub fn height(&self) -> f64 {
        self.state.height()
    }
}

impl Default for JumpIntegrator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "jump_tests.rs"]
mod tests;
