//! Orbital animation state for the orrery.
//!
//! Bodies move on fixed circles in the x/z plane at a constant angular rate;
//! there is no gravitation, eccentricity or inclination. Each tick adds
//! `angular_speed * speed * tick_scale` to a body's angle and advances its
//! self-rotation (and cloud drift) at fixed rates scaled by the same speed.

pub mod clock;
pub mod orbit_path;
pub mod orbital;
pub mod simulation;

pub use clock::{AnimationClock, SpeedSetting};
pub use orbit_path::{DEFAULT_ORBIT_SEGMENTS, orbit_path};
pub use orbital::{OrbitalState, RotationRates};
pub use simulation::{BodyFrame, Simulation};
