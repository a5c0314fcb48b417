//! Headless orrery application: platform directories, the fixed-timestep
//! frame loop, and the driver that ties configuration, logging and the
//! scene together.

pub mod frame_loop;
pub mod headless;
pub mod platform;

pub use frame_loop::{FrameHandler, FrameLoop};
pub use headless::{AppError, RunSummary, export_textures, parse_commands, run, startup};
pub use platform::{PlatformDirs, PlatformError};
