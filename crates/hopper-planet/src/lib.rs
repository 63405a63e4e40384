//! Planet catalog: the fixed set of worlds the character can jump on.
//!
//! Each [`Planet`] pairs a surface gravity with the opaque scene styling the
//! renderer applies when the world becomes active. The table is immutable,
//! defined once, and closed: [`PlanetId`] enumerates every selectable world,
//! so [`Planet::get`] is a total lookup. Strings only enter the picture at
//! the config/CLI boundary, through [`PlanetId::from_str`].

use std::fmt;
use std::str::FromStr;

/// Earth surface gravity in m/s², the fixed reference for jump scaling.
pub const EARTH_GRAVITY: f64 = 9.81;

/// Identifier of one of the selectable worlds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanetId {
    Earth,
    Moon,
    Mars,
    Jupiter,
    Saturn,
}

impl PlanetId {
    /// All selectable worlds, in selector order.
    pub const ALL: [PlanetId; 5] = [
        PlanetId::Earth,
        PlanetId::Moon,
        PlanetId::Mars,
        PlanetId::Jupiter,
        PlanetId::Saturn,
    ];

    /// The stable lowercase identifier used in config files and on the CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            PlanetId::Earth => "earth",
            PlanetId::Moon => "moon",
            PlanetId::Mars => "mars",
            PlanetId::Jupiter => "jupiter",
            PlanetId::Saturn => "saturn",
        }
    }
}

impl fmt::Display for PlanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a planet identifier string that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown planet id: {0:?}")]
pub struct UnknownPlanet(pub String);

impl FromStr for PlanetId {
    type Err = UnknownPlanet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "earth" => Ok(PlanetId::Earth),
            "moon" => Ok(PlanetId::Moon),
            "mars" => Ok(PlanetId::Mars),
            "jupiter" => Ok(PlanetId::Jupiter),
            "saturn" => Ok(PlanetId::Saturn),
            _ => Err(UnknownPlanet(s.to_string())),
        }
    }
}

/// A catalog entry: surface gravity plus renderer-facing styling metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    /// Identifier, unique within the catalog.
    pub id: PlanetId,
    /// Display name.
    pub name: &'static str,
    /// Surface gravity in m/s². Always positive.
    pub gravity: f64,
    /// Opaque sky style reference, applied by the renderer.
    pub sky: &'static str,
    /// Opaque ground style reference, applied by the renderer.
    pub ground: &'static str,
    /// Scene class tag for whole-scene styling.
    pub scene_class: &'static str,
    /// One-line description shown in the facts panel.
    pub description: &'static str,
}

const PLANETS: [Planet; 5] = [
    Planet {
        id: PlanetId::Earth,
        name: "Earth",
        gravity: EARTH_GRAVITY,
        sky: "--earth-sky",
        ground: "--earth-ground",
        scene_class: "scene-earth",
        description: "The blue planet. Gravity keeps your feet firmly planted and your weight feels familiar.",
    },
    Planet {
        id: PlanetId::Moon,
        name: "Moon",
        gravity: 1.62,
        sky: "--moon-sky",
        ground: "--moon-ground",
        scene_class: "scene-moon",
        description: "Only one-sixth of Earth gravity! Astronauts can bound across the dusty surface with ease.",
    },
    Planet {
        id: PlanetId::Mars,
        name: "Mars",
        gravity: 3.71,
        sky: "--mars-sky",
        ground: "--mars-ground",
        scene_class: "scene-mars",
        description: "The red planet has just over one-third of Earth gravity — jumps feel floaty and long.",
    },
    Planet {
        id: PlanetId::Jupiter,
        name: "Jupiter",
        gravity: 24.79,
        sky: "--jupiter-sky",
        ground: "--jupiter-ground",
        scene_class: "scene-jupiter",
        description: "A gas giant with crushing gravity. Jumping is a struggle and you feel incredibly heavy.",
    },
    Planet {
        id: PlanetId::Saturn,
        name: "Saturn",
        gravity: 10.44,
        sky: "--saturn-sky",
        ground: "--saturn-ground",
        scene_class: "scene-saturn",
        description: "Saturn is slightly stronger than Earth gravity, but still friendly enough for a decent hop.",
    },
];

impl Planet {
    /// Looks up the catalog entry for `id`.
    pub fn get(id: PlanetId) -> &'static Planet {
        match id {
            PlanetId::Earth => &PLANETS[0],
            PlanetId::Moon => &PLANETS[1],
            PlanetId::Mars => &PLANETS[2],
            PlanetId::Jupiter => &PLANETS[3],
            PlanetId::Saturn => &PLANETS[4],
        }
    }

    /// The whole catalog, in selector order.
    pub fn all() -> &'static [Planet] {
        &PLANETS
    }

    /// This world's gravity as a fraction of Earth's.
    pub fn relative_gravity(&self) -> f64 {
        self.gravity / EARTH_GRAVITY
    }
}

/// Weight in Newtons of `mass_kg` under `gravity` m/s².
pub fn weight_newtons(mass_kg: f64, gravity: f64) -> f64 {
    mass_kg * gravity
}
