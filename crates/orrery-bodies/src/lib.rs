//! Celestial body definitions for the orrery.
//!
//! Holds the immutable parameter table (one entry per body, keyed by
//! [`BodyKind`]) shared by texture synthesis, orbital simulation and scene
//! composition.

mod color;
mod params;

pub use color::{Rgb, Rgba};
pub use params::{BodyKind, BodyTable, CelestialBodyParameters};
