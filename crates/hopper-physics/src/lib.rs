//! Jump physics: a two-state integrator for vertical jumps under constant gravity.
//!
//! [`JumpIntegrator`] owns the single persistent [`JumpState`] and advances it
//! with the closed-form constant-acceleration solution, subdivided into bounded
//! substeps so a degraded frame rate neither overshoots the ground crossing nor
//! skips it.

mod jump;
mod kinematics;

pub use jump::{
    BASE_JUMP_HEIGHT, JumpIntegrator, JumpState, MAX_HEIGHT_MULTIPLIER, MAX_SUBSTEP,
};
pub use kinematics::{apex_for_launch_speed, flight_time, launch_speed_for_apex, time_to_apex};
