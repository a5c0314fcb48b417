//! The composed scene: one renderable body per table entry, the simulation
//! that moves them, and the view state user commands act on.

use std::time::Instant;

use glam::DVec3;
use orrery_bodies::{BodyKind, BodyTable};
use orrery_config::Config;
use orrery_sim::{AnimationClock, BodyFrame, RotationRates, Simulation, SpeedSetting, orbit_path};
use orrery_texture::{
    StarPoint, StarStyle, StarfieldGenerator, SurfaceTexture, TextureSet, star_sprite,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::camera::OrbitCamera;
use crate::command::{Command, KeyBindings};
use crate::info::InfoPanel;
use crate::view::ViewToggles;
use crate::visual::{BodyVisual, LABEL_STYLE, LabelStyle, LineStyle, ORBIT_LINE_STYLE};

/// Seeds actually used to build the scene, so a run can be reproduced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneSeeds {
    pub simulation: u64,
    pub textures: u64,
}

/// Static renderable data for one body. Its animated state lives in the
/// simulation at the same index.
#[derive(Clone, Debug)]
pub struct SceneBody {
    pub index: usize,
    pub visual: BodyVisual,
    pub textures: TextureSet,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitPath {
    pub index: usize,
    pub points: Vec<DVec3>,
    pub style: LineStyle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub index: usize,
    pub text: String,
    /// World position: above the body's current position.
    pub position: DVec3,
    pub visible: bool,
    pub style: LabelStyle,
}

pub struct Scene {
    simulation: Simulation,
    clock: AnimationClock,
    view: ViewToggles,
    camera: OrbitCamera,
    bindings: KeyBindings,
    bodies: Vec<SceneBody>,
    orbits: Vec<OrbitPath>,
    stars: Vec<StarPoint>,
    star_style: StarStyle,
    star_sprite: SurfaceTexture,
    selected: Option<usize>,
    seeds: SceneSeeds,
}

impl Scene {
    /// Build the whole scene: synthesize every texture, place the bodies at
    /// their start angles, and set up view state from `config`.
    ///
    /// Seeds missing from `config` are drawn from `rng` and logged.
    pub fn compose(table: BodyTable, config: &Config, rng: &mut impl Rng) -> Self {
        let seeds = SceneSeeds {
            simulation: config.simulation.seed.unwrap_or_else(|| rng.random()),
            textures: config.textures.seed.unwrap_or_else(|| rng.random()),
        };
        info!(
            simulation_seed = seeds.simulation,
            texture_seed = seeds.textures,
            "composing scene"
        );

        let started = Instant::now();
        let mut texture_rng = ChaCha8Rng::seed_from_u64(seeds.textures);
        let bodies: Vec<SceneBody> = table
            .iter()
            .enumerate()
            .map(|(index, params)| SceneBody {
                index,
                visual: BodyVisual::for_body(params),
                textures: TextureSet::synthesize(params, &mut texture_rng),
            })
            .collect();
        let texture_count: usize = bodies.iter().map(|b| b.textures.iter().count()).sum();
        info!(
            textures = texture_count,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "textures synthesized"
        );

        let view_config = &config.view;
        let orbits = table
            .iter()
            .enumerate()
            .filter(|(_, params)| !params.is_central())
            .map(|(index, params)| OrbitPath {
                index,
                points: orbit_path(params.orbital_distance, view_config.orbit_segments),
                style: ORBIT_LINE_STYLE,
            })
            .collect();

        let stars = StarfieldGenerator::new(seeds.textures, config.textures.star_count).generate();

        let rates = RotationRates {
            tick_scale: config.simulation.tick_scale,
            body: config.simulation.rotation_rate,
            clouds: config.simulation.cloud_rotation_rate,
        };
        let simulation = Simulation::new(
            table,
            rates,
            &mut ChaCha8Rng::seed_from_u64(seeds.simulation),
        );

        let speed = SpeedSetting::from_multiplier(config.simulation.initial_speed)
            .unwrap_or_else(|| {
                warn!(
                    requested = config.simulation.initial_speed,
                    "unsupported initial speed, using 1x"
                );
                SpeedSetting::Normal
            });

        Self {
            simulation,
            clock: AnimationClock::new(speed),
            view: ViewToggles {
                show_labels: view_config.show_labels,
                show_orbits: view_config.show_orbits,
            },
            camera: OrbitCamera::from_config(view_config),
            bindings: KeyBindings::from_config(&config.input),
            bodies,
            orbits,
            stars,
            star_style: StarStyle::default(),
            star_sprite: star_sprite(),
            selected: None,
            seeds,
        }
    }

    /// Advance every body by `ticks` at the current effective speed.
    pub fn tick(&mut self, ticks: u32) {
        self.simulation.advance(ticks, self.clock.multiplier());
    }

    /// Current position and rotation phases of every body, in table order.
    pub fn transforms(&self) -> Vec<BodyFrame> {
        self.simulation.frames()
    }

    pub fn apply(&mut self, command: Command) {
        debug!(%command, "applying command");
        match command {
            Command::ToggleLabels => {
                self.view.toggle_labels();
            }
            Command::ToggleOrbits => {
                self.view.toggle_orbits();
            }
            Command::CycleSpeed => {
                self.clock.cycle_speed();
            }
            Command::ResetCamera => self.camera.reset(),
            Command::TogglePause => {
                self.clock.toggle_pause();
            }
        }
    }

    /// Apply whatever command `key` is bound to.
    pub fn handle_key(&mut self, key: &str) -> Option<Command> {
        let command = self.bindings.resolve(key)?;
        self.apply(command);
        Some(command)
    }

    /// Select a body by kind and return its info panel. Unknown kinds leave
    /// the current selection unchanged.
    pub fn select(&mut self, kind: &BodyKind) -> Option<InfoPanel> {
        let Some(index) = self.simulation.table().index_of(kind) else {
            debug!(body = %kind, "selection ignored: no such body");
            return None;
        };
        self.selected = Some(index);
        let panel = self.info_panel();
        info!(body = %kind, "body selected");
        panel
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Info panel for the current selection.
    pub fn info_panel(&self) -> Option<InfoPanel> {
        self.selected
            .and_then(|i| self.simulation.table().by_index(i))
            .map(InfoPanel::from)
    }

    /// Orbit polylines to draw this frame; empty while orbits are hidden.
    pub fn orbit_paths(&self) -> &[OrbitPath] {
        if self.view.show_orbits {
            &self.orbits
        } else {
            &[]
        }
    }

    /// One label per body, positioned above its current location.
    pub fn labels(&self) -> Vec<Label> {
        self.simulation
            .frames()
            .into_iter()
            .zip(&self.bodies)
            .zip(self.simulation.table())
            .map(|((frame, body), params)| Label {
                index: frame.index,
                text: params.display_name.clone(),
                position: frame.position + DVec3::Y * body.visual.label_height,
                visible: self.view.show_labels,
                style: LABEL_STYLE,
            })
            .collect()
    }

    pub fn bodies(&self) -> &[SceneBody] {
        &self.bodies
    }

    pub fn body(&self, kind: &BodyKind) -> Option<&SceneBody> {
        let index = self.simulation.table().index_of(kind)?;
        self.bodies.get(index)
    }

    pub fn table(&self) -> &BodyTable {
        self.simulation.table()
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn view(&self) -> ViewToggles {
        self.view
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    pub fn stars(&self) -> &[StarPoint] {
        &self.stars
    }

    /// Point size, tint and opacity for drawing [`Scene::stars`].
    pub fn star_style(&self) -> StarStyle {
        self.star_style
    }

    pub fn star_sprite(&self) -> &SurfaceTexture {
        &self.star_sprite
    }

    pub fn seeds(&self) -> SceneSeeds {
        self.seeds
    }
}
