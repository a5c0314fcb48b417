//! Scene composition for the orrery.
//!
//! Turns the body table and configuration into a ready-to-draw [`Scene`]:
//! textures synthesized once at startup, bodies placed by the orbital
//! simulation, and the view state (labels, orbit paths, camera, selection)
//! that user commands toggle. A renderer reads [`Scene::transforms`] after
//! each [`Scene::tick`] and never keeps its own copy of body state.

pub mod camera;
pub mod command;
pub mod info;
pub mod scene;
pub mod view;
pub mod visual;

pub use camera::OrbitCamera;
pub use command::{Command, KeyBindings, UnknownCommand};
pub use info::InfoPanel;
pub use scene::{Label, OrbitPath, Scene, SceneBody, SceneSeeds};
pub use view::ViewToggles;
pub use visual::{
    BodyVisual, LABEL_STYLE, LabelStyle, LineStyle, ORBIT_LINE_STYLE, RingGeometry, Shell,
    SurfaceMaterial,
};
