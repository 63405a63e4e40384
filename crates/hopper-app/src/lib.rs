//! Hopper application framework.
//!
//! Provides the frame clock and pump, the per-frame session wiring, the
//! weight/facts readout, and a console renderer.

pub mod frame_clock;
pub mod readout;
pub mod renderer;
pub mod session;
