//! The Hopper demo binary: jump on a chosen planet and log the flight.
//!
//! Configuration comes from `config.ron` (when `--config <dir>` is given)
//! with CLI flags layered on top.
//! Run with `cargo run -p hopper-app -- --planet moon --jumps 2`.

use clap::Parser;
use hopper_app::frame_clock::FramePump;
use hopper_app::readout;
use hopper_app::renderer::ConsoleRenderer;
use hopper_app::session::JumpSession;
use hopper_config::{CliArgs, Config};
use hopper_input::InputEvent;
use hopper_planet::PlanetId;
use hopper_visual::Renderer;
use tracing::info;

fn load_config(args: &CliArgs) -> Result<Config, hopper_config::ConfigError> {
    let mut config = match &args.config {
        Some(dir) => Config::load_or_create(dir)?,
        None => Config::default(),
    };
    config.apply_cli_overrides(args);
    Ok(config)
}

fn main() {
    let args = CliArgs::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    hopper_log::init_logging(Some(&config));

    let planet_id: PlanetId = match config.world.planet.parse() {
        Ok(id) => id,
        Err(e) => {
            eprintln!("{e} (expected one of: earth, moon, mars, jupiter, saturn)");
            std::process::exit(1);
        }
    };

    let mut session = JumpSession::new(planet_id, config.world.mass_kg);
    let mut renderer = ConsoleRenderer::new(config.debug.show_frame_stats);

    renderer.set_scene(session.planet());
    info!("{}", readout::weight_line(session.planet(), session.mass_kg()));
    for line in readout::planet_facts(session.planet(), session.mass_kg()).lines() {
        info!("{line}");
    }

    let mut jumps_remaining = args.jumps.max(1);
    session.input_mut().push(InputEvent::JumpPressed);

    let mut pump = FramePump::new(config.sim.target_fps, config.sim.dt_cap_s);
    pump.run(|dt| {
        let was_airborne = session.airborne();
        session.frame(dt, &mut renderer);

        if was_airborne && !session.airborne() {
            jumps_remaining -= 1;
            info!(jumps_remaining, "back on the ground");
            if jumps_remaining == 0 {
                return false;
            }
            session.input_mut().push(InputEvent::JumpPressed);
        }
        true
    });

    info!(
        frames = pump.frame_count(),
        rendered = renderer.frames(),
        "simulation complete"
    );
}
