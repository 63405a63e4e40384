//! Maps simulated jump height to renderer-facing visual parameters.
//!
//! The mapping is a pure function of the signed position; it keeps no state
//! and has no side effects. Whatever draws the scene consumes the resulting
//! [`VisualParams`] opaquely through the [`Renderer`] trait.

use hopper_planet::Planet;

/// Conversion from simulation meters to screen pixels.
pub const PIXELS_PER_METER: f64 = 55.0;

/// Per-frame visual parameters derived from jump height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualParams {
    /// Vertical offset in pixels (negative = up, same sign as the position).
    pub offset_px: f64,
    /// Ground-shadow scale factor, shrinking with height down to 0.5.
    pub shadow_scale: f64,
    /// Ground-shadow opacity, fading with height down to 0.45.
    pub shadow_opacity: f64,
    /// Character brightness multiplier, growing with height up to 1.35.
    pub brightness: f64,
}

impl VisualParams {
    /// The parameters of a character standing on the ground.
    pub const GROUNDED: VisualParams = VisualParams {
        offset_px: 0.0,
        shadow_scale: 1.0,
        shadow_opacity: 1.0,
        brightness: 1.0,
    };
}

/// Derives visual parameters from a signed position (up negative, 0 = ground).
///
/// Any non-negative position yields [`VisualParams::GROUNDED`].
pub fn map_position(position: f64) -> VisualParams {
    if position >= 0.0 {
        return VisualParams::GROUNDED;
    }
    let height = -position;
    VisualParams {
        offset_px: position * PIXELS_PER_METER,
        shadow_scale: (1.0 - height / 4.0).max(0.5),
        shadow_opacity: (1.0 - height / 3.0).max(0.45),
        brightness: 1.0 + (height / 8.0).min(0.35),
    }
}

/// Receiver of the per-frame visual state.
///
/// The rendering technology is deliberately unspecified; implementations
/// apply the parameters however they draw the scene.
pub trait Renderer {
    /// Applies the scene styling of a newly selected planet.
    fn set_scene(&mut self, planet: &Planet);
    /// Applies one frame of visual parameters.
    fn apply(&mut self, params: &VisualParams);
}
