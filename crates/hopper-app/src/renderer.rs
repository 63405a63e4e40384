//! Console renderer: applies visual state by logging it.

use hopper_planet::Planet;
use hopper_visual::{Renderer, VisualParams};
use tracing::{debug, info, trace};

/// Renderer that writes scene changes and frame parameters to the log.
///
/// Stands in for a real presentation layer; the session only ever sees the
/// [`Renderer`] trait.
#[derive(Debug, Default)]
pub struct ConsoleRenderer {
    verbose: bool,
    frames: u64,
}

impl ConsoleRenderer {
    /// Creates a console renderer. With `verbose`, every frame's parameters
    /// are logged at debug instead of trace.
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            frames: 0,
        }
    }

    /// Frames applied so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for ConsoleRenderer {
    fn set_scene(&mut self, planet: &Planet) {
        info!(
            sky = planet.sky,
            ground = planet.ground,
            class = planet.scene_class,
            "scene set to {}",
            planet.name
        );
    }

    fn apply(&mut self, params: &VisualParams) {
        self.frames += 1;
        if self.verbose {
            debug!(
                offset_px = params.offset_px,
                shadow_scale = params.shadow_scale,
                shadow_opacity = params.shadow_opacity,
                brightness = params.brightness,
                "frame"
            );
        } else {
            trace!(offset_px = params.offset_px, "frame");
        }
    }
}
