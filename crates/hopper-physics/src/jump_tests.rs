//! Tests for the jump state machine.

use hopper_planet::{EARTH_GRAVITY, Planet};

use super::*;
use crate::kinematics::flight_time;

const FRAME: f64 = 1.0 / 60.0;

/// Analytic apex height targeted by `start` under `gravity`.
fn target_apex(gravity: f64) -> f64 {
    BASE_JUMP_HEIGHT * (EARTH_GRAVITY / gravity).min(MAX_HEIGHT_MULTIPLIER)
}

/// Steps in 60 Hz frames until grounded, returning the frames consumed.
fn frames_until_grounded(integrator: &mut JumpIntegrator, gravity: f64) -> u32 {
    let mut frames = 0;
    while integrator.airborne() {
        integrator.advance(FRAME, gravity);
        frames += 1;
        assert!(frames < 100_000, "integrator never landed");
    }
    frames
}

#[test]
fn test_start_sets_launch_velocity_from_apex() {
    for planet in Planet::all() {
        let mut integrator = JumpIntegrator::new();
        integrator.start(planet.gravity);

        let state = integrator.state();
        let expected = -(2.0 * planet.gravity * target_apex(planet.gravity)).sqrt();
        assert!(state.airborne, "{} jump did not launch", planet.name);
        assert!(
            (state.initial_velocity - expected).abs() < 1e-12,
            "{}: launch velocity {} expected {}",
            planet.name,
            state.initial_velocity,
            expected
        );
        assert_eq!(state.velocity, state.initial_velocity);
        assert_eq!(state.position, 0.0);
        assert_eq!(state.time_in_air, 0.0);
    }
}

#[test]
fn test_moon_apex_is_capped_at_triple() {
    // 9.81 / 1.62 ≈ 6.06, so the multiplier cap at 3 takes over: 1.8 m apex.
    let mut integrator = JumpIntegrator::new();
    integrator.start(1.62);

    assert!((target_apex(1.62) - 1.8).abs() < 1e-12);
    let expected = -(2.0_f64 * 1.62 * 1.8).sqrt();
    assert!((integrator.state().initial_velocity - expected).abs() < 1e-12);
    assert!((expected + 2.415).abs() < 1e-3);
}

#[test]
fn test_jupiter_apex_shrinks_below_base() {
    // Stronger-than-Earth gravity shortens the hop: 0.6 * 9.81 / 24.79 m.
    let apex = target_apex(24.79);
    assert!(apex < BASE_JUMP_HEIGHT);
    assert!((apex - 0.6 * 9.81 / 24.79).abs() < 1e-12);
}

#[test]
fn test_retrigger_while_airborne_is_ignored() {
    let mut integrator = JumpIntegrator::new();
    integrator.start(EARTH_GRAVITY);
    let launched = integrator.state();

    integrator.start(EARTH_GRAVITY);
    assert_eq!(integrator.state(), launched);

    integrator.advance(0.1, EARTH_GRAVITY);
    let mid_flight = integrator.state();
    integrator.start(EARTH_GRAVITY);
    assert_eq!(integrator.state(), mid_flight);
}

#[test]
fn test_advance_while_grounded_is_noop() {
    let mut integrator = JumpIntegrator::new();
    integrator.advance(0.2, EARTH_GRAVITY);
    assert_eq!(integrator.state(), JumpState::GROUNDED);
}

#[test]
fn test_zero_delta_changes_nothing() {
    let mut integrator = JumpIntegrator::new();
    integrator.start(EARTH_GRAVITY);
    integrator.advance(0.05, EARTH_GRAVITY);
    let before = integrator.state();
    integrator.advance(0.0, EARTH_GRAVITY);
    assert_eq!(integrator.state(), before);
}

#[test]
fn test_velocity_monotone_while_airborne() {
    let mut integrator = JumpIntegrator::new();
    integrator.start(3.71);

    let mut previous = integrator.state().velocity;
    while integrator.airborne() {
        integrator.advance(FRAME, 3.71);
        if integrator.airborne() {
            let velocity = integrator.state().velocity;
            assert!(
                velocity >= previous,
                "velocity regressed: {velocity} < {previous}"
            );
            previous = velocity;
        }
    }
}

#[test]
fn test_never_above_ground_midflight() {
    for planet in Planet::all() {
        let mut integrator = JumpIntegrator::new();
        integrator.start(planet.gravity);
        while integrator.airborne() {
            integrator.advance(FRAME, planet.gravity);
            assert!(
                integrator.position() <= 0.0,
                "{}: position {} went above ground",
                planet.name,
                integrator.position()
            );
        }
        assert_eq!(integrator.state(), JumpState::GROUNDED);
    }
}

#[test]
fn test_lands_once_near_analytic_flight_time() {
    for planet in Planet::all() {
        let mut integrator = JumpIntegrator::new();
        integrator.start(planet.gravity);
        let analytic = flight_time(-integrator.state().initial_velocity, planet.gravity);

        let frames = frames_until_grounded(&mut integrator, planet.gravity);
        let simulated = f64::from(frames) * FRAME;
        // Landing happens within the frame that crosses the analytic time.
        assert!(
            simulated >= analytic - 1e-9 && simulated <= analytic + FRAME + 1e-9,
            "{}: landed after {simulated}s, analytic {analytic}s",
            planet.name
        );
    }
}

#[test]
fn test_apex_height_reached_at_half_flight() {
    let gravity = EARTH_GRAVITY;
    let mut integrator = JumpIntegrator::new();
    integrator.start(gravity);
    let half = flight_time(-integrator.state().initial_velocity, gravity) / 2.0;

    integrator.advance(half, gravity);
    assert!(
        (integrator.height() - target_apex(gravity)).abs() < 1e-6,
        "apex {} expected {}",
        integrator.height(),
        target_apex(gravity)
    );
}

#[test]
fn test_split_delta_matches_single_delta() {
    let gravity = EARTH_GRAVITY;
    let mut single = JumpIntegrator::new();
    let mut split = JumpIntegrator::new();
    single.start(gravity);
    split.start(gravity);

    single.advance(0.35, gravity);
    split.advance(0.2, gravity);
    split.advance(0.15, gravity);

    let a = single.state();
    let b = split.state();
    assert_eq!(a.airborne, b.airborne);
    assert!((a.position - b.position).abs() < 1e-9);
    assert!((a.velocity - b.velocity).abs() < 1e-9);
    assert!((a.time_in_air - b.time_in_air).abs() < 1e-9);
}

#[test]
fn test_oversized_delta_lands_without_overshoot() {
    // A 1-second frame spans the whole Earth flight; substepping must still
    // catch the ground crossing instead of sailing past it.
    let mut integrator = JumpIntegrator::new();
    integrator.start(EARTH_GRAVITY);
    integrator.advance(1.0, EARTH_GRAVITY);
    assert_eq!(integrator.state(), JumpState::GROUNDED);
}

#[test]
fn test_reset_aborts_flight() {
    let mut integrator = JumpIntegrator::new();
    integrator.start(EARTH_GRAVITY);
    integrator.advance(0.1, EARTH_GRAVITY);
    integrator.reset();
    assert_eq!(integrator.state(), JumpState::GROUNDED);

    // A fresh jump launches normally afterwards.
    integrator.start(EARTH_GRAVITY);
    assert!(integrator.airborne());
}

#[test]
fn test_grounded_baseline_invariants() {
    let state = JumpState::GROUNDED;
    assert!(!state.airborne);
    assert_eq!(state.position, 0.0);
    assert_eq!(state.velocity, 0.0);
    assert_eq!(state.time_in_air, 0.0);
    assert_eq!(state.initial_velocity, 0.0);
    assert_eq!(state.height(), 0.0);
}

#[test]
#[should_panic(expected = "gravity must be positive")]
fn test_start_rejects_zero_gravity() {
    JumpIntegrator::new().start(0.0);
}

#[test]
#[should_panic(expected = "gravity must be positive")]
fn test_advance_rejects_negative_gravity() {
    let mut integrator = JumpIntegrator::new();
    integrator.start(EARTH_GRAVITY);
    integrator.advance(0.1, -9.81);
}

#[test]
#[should_panic(expected = "frame delta must be non-negative")]
fn test_advance_rejects_negative_delta() {
    let mut integrator = JumpIntegrator::new();
    integrator.start(EARTH_GRAVITY);
    integrator.advance(-0.01, EARTH_GRAVITY);
}
