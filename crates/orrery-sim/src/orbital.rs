//! Uniform circular motion in the x/z plane plus self-rotation phases.

use glam::DVec3;
use orrery_bodies::CelestialBodyParameters;

/// Fixed per-tick rates, all scaled by the speed multiplier at advance time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationRates {
    /// Normalizes `angular_speed` into radians per tick.
    pub tick_scale: f64,
    /// Body self-rotation in radians per tick, independent of orbital speed.
    pub body: f64,
    /// Cloud overlay rotation in radians per tick.
    pub clouds: f64,
}

impl Default for RotationRates {
    fn default() -> Self {
        Self {
            tick_scale: 0.01,
            body: 0.01,
            clouds: 0.005,
        }
    }
}

/// Mutable per-body animation state.
///
/// The angle grows without bound; trigonometric evaluation is well defined for
/// any finite input so it is never wrapped.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrbitalState {
    /// Orbital angle in radians.
    pub angle: f64,
    /// Accumulated self-rotation about the body's y axis.
    pub rotation_phase: f64,
    /// Accumulated rotation of the cloud overlay, if the body has one.
    pub cloud_phase: f64,
}

impl OrbitalState {
    pub fn new(start_angle: f64) -> Self {
        Self {
            angle: start_angle,
            ..Default::default()
        }
    }

    /// Position on a circle of radius `distance` around the origin. A central
    /// body (`distance == 0`) sits at the origin whatever its angle.
    pub fn position(&self, distance: f64) -> DVec3 {
        if distance == 0.0 {
            return DVec3::ZERO;
        }
        DVec3::new(
            distance * self.angle.cos(),
            0.0,
            distance * self.angle.sin(),
        )
    }

    /// Advance by `ticks` whole ticks at the given speed multiplier.
    ///
    /// The central body never changes its angle; every body spins, and the
    /// cloud phase only moves for bodies with a cloud layer.
    pub fn advance(
        &mut self,
        params: &CelestialBodyParameters,
        ticks: u32,
        speed: f64,
        rates: &RotationRates,
    ) {
        if ticks == 0 {
            return;
        }
        let steps = ticks as f64 * speed;
        if !params.is_central() {
            self.angle += params.angular_speed * rates.tick_scale * steps;
        }
        self.rotation_phase += rates.body * steps;
        if params.has_cloud_layer() {
            self.cloud_phase += rates.clouds * steps;
        }
    }
}
