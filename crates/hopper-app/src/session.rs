//! Wires input, catalog, physics, and visuals into the per-frame session.

use hopper_input::{InputEvent, InputQueue, clamp_mass};
use hopper_physics::{JumpIntegrator, JumpState};
use hopper_planet::{Planet, PlanetId};
use hopper_visual::{Renderer, VisualParams, map_position};
use tracing::info;

use crate::readout;

/// One running simulation: current planet, body mass, jump state, input.
///
/// The session is the only mutator of the jump state, and all mutation goes
/// through the integrator's operations. Events are drained at the start of
/// each frame, so a trigger arriving between two frames is fully applied
/// before the next advance and an advance never observes a half-applied
/// event.
#[derive(Debug)]
pub struct JumpSession {
    planet: &'static Planet,
    mass_kg: f64,
    integrator: JumpIntegrator,
    input: InputQueue,
}

impl JumpSession {
    /// Creates a grounded session on `planet` with the given raw mass.
    pub fn new(planet: PlanetId, mass_kg: f64) -> Self {
        Self {
            planet: Planet::get(planet),
            mass_kg: clamp_mass(mass_kg),
            integrator: JumpIntegrator::new(),
            input: InputQueue::new(),
        }
    }

    /// The pending-event queue (push side, for event sources).
    pub fn input_mut(&mut self) -> &mut InputQueue {
        &mut self.input
    }

    /// Currently selected planet.
    pub fn planet(&self) -> &'static Planet {
        self.planet
    }

    /// Clamped body mass in kilograms.
    pub fn mass_kg(&self) -> f64 {
        self.mass_kg
    }

    /// Whether a jump is in flight.
    pub fn airborne(&self) -> bool {
        self.integrator.airborne()
    }

    /// Current jump snapshot.
    pub fn jump_state(&self) -> JumpState {
        self.integrator.state()
    }

    /// Runs one frame: drains pending events, advances the flight by `dt`
    /// seconds, then hands the mapped visual parameters to the renderer.
    pub fn frame(&mut self, dt: f64, renderer: &mut dyn Renderer) -> VisualParams {
        while let Some(event) = self.input.pop() {
            self.apply_event(event, renderer);
        }
        self.integrator.advance(dt, self.planet.gravity);
        let params = map_position(self.integrator.position());
        renderer.apply(&params);
        params
    }

    fn apply_event(&mut self, event: InputEvent, renderer: &mut dyn Renderer) {
        match event {
            InputEvent::PlanetSelected(id) => {
                self.planet = Planet::get(id);
                self.integrator.reset();
                renderer.set_scene(self.planet);
                info!("{}", readout::weight_line(self.planet, self.mass_kg));
            }
            InputEvent::MassChanged(raw) => {
                self.mass_kg = clamp_mass(raw);
                info!("{}", readout::weight_line(self.planet, self.mass_kg));
            }
            InputEvent::JumpPressed => {
                self.integrator.start(self.planet.gravity);
            }
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
