//! Weight readout and planet facts text.

use hopper_planet::{EARTH_GRAVITY, Planet, weight_newtons};

/// Formats a force in Newtons, switching to kilonewtons at 1000 N.
///
/// Non-finite values render as a dash placeholder.
pub fn format_newtons(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    if value >= 1000.0 {
        format!("{:.2} kN", value / 1000.0)
    } else {
        format!("{value:.1} N")
    }
}

/// One-line weight readout for the given planet and mass.
pub fn weight_line(planet: &Planet, mass_kg: f64) -> String {
    let weight = weight_newtons(mass_kg, planet.gravity);
    format!("Weight on {}: {}", planet.name, format_newtons(weight))
}

/// Multi-line facts panel: gravity, weight, comparison to Earth, description.
pub fn planet_facts(planet: &Planet, mass_kg: f64) -> String {
    let weight = weight_newtons(mass_kg, planet.gravity);
    let earth_weight = weight_newtons(mass_kg, EARTH_GRAVITY);
    format!(
        "Gravity (g): {:.2} m/s²\n\
         Your weight: {}\n\
         Vs. Earth: {:.0}% of your Earth weight ({})\n\
         Fun fact: {}",
        planet.gravity,
        format_newtons(weight),
        planet.relative_gravity() * 100.0,
        format_newtons(earth_weight),
        planet.description
    )
}
