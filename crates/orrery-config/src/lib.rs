//! Runtime configuration for the orrery.
//!
//! Settings persist as `config.ron` in the platform config directory, are
//! created with defaults on first run, and can be overridden per run from the
//! command line.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    Config, DebugConfig, InputConfig, SimulationConfig, TextureConfig, ViewConfig,
};
pub use error::ConfigError;
