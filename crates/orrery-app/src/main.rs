//! The binary entry point for the orrery.

use clap::Parser;
use orrery_config::CliArgs;

fn main() {
    let args = CliArgs::parse();

    // Directories and config come first; logging depends on both.
    let (config, dirs) = match orrery_app::startup(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to start: {e}");
            std::process::exit(1);
        }
    };

    orrery_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));
    tracing::info!(config_dir = %dirs.config_dir.display(), "orrery starting");

    match orrery_app::run(&config, &args, &mut rand::rng()) {
        Ok(summary) => summary.log(),
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("orrery: {e}");
            std::process::exit(1);
        }
    }
}
