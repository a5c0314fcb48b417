//! Procedural texture synthesis for the orrery bodies.
//!
//! Everything is painted on a CPU [`Canvas`] with straight-alpha
//! source-over blending, using a small set of 2D primitives (rectangles,
//! disks, ellipses, quadratic paths) and paints (solid colours, linear and
//! radial gradients). Per-body recipes in [`synth`] combine those primitives
//! into equirectangular surface maps, a ring annulus and a cloud overlay.
//!
//! All randomness comes from a caller-supplied [`rand::Rng`], so a seeded
//! generator reproduces the same textures bit for bit.

pub mod canvas;
pub mod export;
pub mod paint;
pub mod shapes;
pub mod starfield;
pub mod synth;
pub mod texture;

pub use canvas::Canvas;
pub use export::{ExportError, export_png, export_set};
pub use paint::{ColorStop, LinearGradient, Paint, RadialGradient};
pub use shapes::{
    Path, fill_circle, fill_ellipse, fill_path, fill_rect, stroke_circle, stroke_path,
};
pub use starfield::{StarPoint, StarStyle, StarfieldGenerator, star_sprite};
pub use synth::{
    GreatSpot, StormCore, TextureSet, draw_great_spot, synthesize_clouds, synthesize_ring,
    synthesize_surface,
};
pub use texture::{SurfaceTexture, TextureCategory};
