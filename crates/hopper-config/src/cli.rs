//! Command-line argument parsing for Hopper.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Hopper command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "hopper", about = "Planetary jump sandbox")]
pub struct CliArgs {
    /// Planet to jump on (earth, moon, mars, jupiter, saturn).
    #[arg(long)]
    pub planet: Option<String>,

    /// Body mass in kilograms (for the weight readout).
    #[arg(long)]
    pub mass: Option<f64>,

    /// Number of jumps the demo performs before exiting.
    #[arg(long, default_value_t = 1)]
    pub jumps: u32,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (no config file is touched without it).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref planet) = args.planet {
            self.world.planet = planet.clone();
        }
        if let Some(mass) = args.mass {
            self.world.mass_kg = mass;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
