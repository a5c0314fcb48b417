//! Headless driver: composes the scene, applies startup commands, runs a
//! fixed number of frames through the [`FrameLoop`] and optionally exports
//! every synthesized texture.

use std::path::{Path, PathBuf};

use orrery_bodies::{BodyKind, BodyTable};
use orrery_config::{CliArgs, Config};
use orrery_scene::{Command, InfoPanel, Scene, SceneSeeds, UnknownCommand};
use orrery_sim::BodyFrame;
use orrery_texture::{ExportError, export_png, export_set};
use rand::Rng;
use tracing::{debug, info, trace, warn};

use crate::frame_loop::{FrameHandler, FrameLoop};
use crate::platform::{PlatformDirs, PlatformError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Platform(#[from] PlatformError),
    #[error(transparent)]
    Command(#[from] UnknownCommand),
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// What a run produced.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub seeds: SceneSeeds,
    pub frames: u64,
    pub ticks: u64,
    /// Final state of every body, in table order.
    pub bodies: Vec<BodyFrame>,
    pub selection: Option<InfoPanel>,
    pub exported: Vec<PathBuf>,
}

impl RunSummary {
    pub fn log(&self) {
        info!(
            frames = self.frames,
            ticks = self.ticks,
            simulation_seed = self.seeds.simulation,
            texture_seed = self.seeds.textures,
            "run complete"
        );
        for frame in &self.bodies {
            info!(
                body = %frame.kind,
                x = frame.position.x,
                y = frame.position.y,
                z = frame.position.z,
                rotation = frame.rotation_phase,
                clouds = ?frame.cloud_phase,
                "final state"
            );
        }
    }
}

/// Stands in for a renderer: reads the scene after every advance the way a
/// real one would, without drawing anything.
struct HeadlessRenderer<'a> {
    scene: &'a mut Scene,
}

impl FrameHandler for HeadlessRenderer<'_> {
    fn advance(&mut self, ticks: u32) {
        self.scene.tick(ticks);
    }

    fn draw(&mut self, alpha: f64) {
        let transforms = self.scene.transforms();
        let labels = self.scene.labels().iter().filter(|l| l.visible).count();
        let orbits = self.scene.orbit_paths().len();
        trace!(bodies = transforms.len(), labels, orbits, alpha, "frame");
    }
}

/// Resolve directories and load the configuration with CLI overrides applied.
///
/// A config file that cannot be read or parsed falls back to defaults with a
/// message on stderr, since logging is not up yet.
pub fn startup(args: &CliArgs) -> Result<(Config, PlatformDirs), AppError> {
    let dirs = match &args.config {
        Some(root) => PlatformDirs::resolve_with_root(root),
        None => PlatformDirs::resolve()?,
    };
    dirs.create_dirs()?;

    let mut config = Config::load_or_create(&dirs.config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(args);
    Ok((config, dirs))
}

/// Parse command names given on the command line.
pub fn parse_commands(names: &[String]) -> Result<Vec<Command>, UnknownCommand> {
    names.iter().map(|name| name.parse()).collect()
}

/// Compose the scene and run `config.simulation.frames` frames of
/// `1 / tick_rate_hz` seconds each.
pub fn run(config: &Config, args: &CliArgs, rng: &mut impl Rng) -> Result<RunSummary, AppError> {
    let commands = parse_commands(&args.commands)?;

    let mut scene = Scene::compose(BodyTable::solar_system(), config, rng);
    for command in commands {
        scene.apply(command);
    }

    let selection = args.select.as_deref().and_then(|name| {
        let panel = scene.select(&BodyKind::from(name));
        match &panel {
            Some(panel) => info!(title = %panel.title, description = %panel.description, "info panel"),
            None => warn!(body = name, "no such body to select"),
        }
        panel
    });

    let mut frame_loop = FrameLoop::new(config.simulation.tick_rate_hz);
    let frame_time = frame_loop.tick_dt();
    {
        let mut renderer = HeadlessRenderer { scene: &mut scene };
        for _ in 0..config.simulation.frames {
            frame_loop.step(frame_time, &mut renderer);
        }
    }
    debug!(
        frames = frame_loop.frame_count(),
        sim_seconds = frame_loop.total_sim_time(),
        "frame loop finished"
    );

    let exported = match &config.textures.export_dir {
        Some(dir) => export_textures(&scene, dir)?,
        None => Vec::new(),
    };

    Ok(RunSummary {
        seeds: scene.seeds(),
        frames: frame_loop.frame_count(),
        ticks: frame_loop.tick_count(),
        bodies: scene.transforms(),
        selection,
        exported,
    })
}

/// Write every body's textures and the star sprite into `dir`.
pub fn export_textures(scene: &Scene, dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
    let mut written = Vec::new();
    for (body, params) in scene.bodies().iter().zip(scene.table()) {
        written.extend(export_set(params.kind.as_str(), &body.textures, dir)?);
    }
    let sprite = dir.join("star_sprite.png");
    export_png(scene.star_sprite(), &sprite)?;
    written.push(sprite);
    Ok(written)
}
