//! Command-line arguments and how they override the loaded config.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Headless orrery: synthesizes the body textures, then animates the orbits
/// for a fixed number of frames.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "Procedural solar system orrery")]
pub struct CliArgs {
    /// Seed for the bodies' starting angles.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Seed for texture scatter placement.
    #[arg(long)]
    pub texture_seed: Option<u64>,

    /// Starting speed multiplier (0.5, 1, 2 or 5).
    #[arg(long)]
    pub speed: Option<f64>,

    /// Number of frames to simulate.
    #[arg(long)]
    pub frames: Option<u32>,

    /// Write every synthesized texture as PNG into this directory.
    #[arg(long, value_name = "DIR")]
    pub export_textures: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long, value_name = "DIR")]
    pub config: Option<PathBuf>,

    /// Show the info panel for this body after startup.
    #[arg(long, value_name = "BODY")]
    pub select: Option<String>,

    /// Command to run before the first frame; may be repeated
    /// (toggle_labels, toggle_orbits, cycle_speed, reset_camera, toggle_pause).
    #[arg(long = "command", value_name = "NAME")]
    pub commands: Vec<String>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.simulation.seed = Some(seed);
        }
        if let Some(seed) = args.texture_seed {
            self.textures.seed = Some(seed);
        }
        if let Some(speed) = args.speed {
            self.simulation.initial_speed = speed;
        }
        if let Some(frames) = args.frames {
            self.simulation.frames = frames;
        }
        if let Some(ref dir) = args.export_textures {
            self.textures.export_dir = Some(dir.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs::parse_from([
            "orrery",
            "--seed",
            "9",
            "--speed",
            "5",
            "--export-textures",
            "out",
        ]);
        config.apply_cli_overrides(&args);
        assert_eq!(config.simulation.seed, Some(9));
        assert_eq!(config.simulation.initial_speed, 5.0);
        assert_eq!(config.textures.export_dir, Some(PathBuf::from("out")));
        // Non-overridden fields retain defaults
        assert_eq!(config.textures.seed, None);
        assert_eq!(config.simulation.frames, 600);
    }

    #[test]
    fn test_cli_no_override() {
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_repeated_commands_keep_order() {
        let args = CliArgs::parse_from([
            "orrery",
            "--command",
            "cycle_speed",
            "--command",
            "toggle_labels",
            "--select",
            "earth",
        ]);
        assert_eq!(args.commands, vec!["cycle_speed", "toggle_labels"]);
        assert_eq!(args.select.as_deref(), Some("earth"));
    }
}
