//! The indexed table of orbital states, advanced together each tick.

use std::f64::consts::TAU;

use glam::DVec3;
use orrery_bodies::{BodyKind, BodyTable};
use rand::Rng;
use tracing::debug;

use crate::orbital::{OrbitalState, RotationRates};

/// What a renderer needs for one body after a tick.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyFrame {
    pub index: usize,
    pub kind: BodyKind,
    pub position: DVec3,
    pub rotation_phase: f64,
    /// Present only for bodies with a cloud overlay.
    pub cloud_phase: Option<f64>,
}

/// Owns the body table and one [`OrbitalState`] per body, stored at the same
/// index as the body's table entry. Consumers refer to bodies by index and
/// read state through here, never keeping their own copy.
#[derive(Clone, Debug)]
pub struct Simulation {
    table: BodyTable,
    states: Vec<OrbitalState>,
    rates: RotationRates,
    ticks: u64,
}

impl Simulation {
    /// Start every body at a uniformly random angle in `[0, 2π)` so they do
    /// not begin lined up.
    pub fn new(table: BodyTable, rates: RotationRates, rng: &mut impl Rng) -> Self {
        let angles: Vec<f64> = (0..table.len()).map(|_| rng.random_range(0.0..TAU)).collect();
        Self::with_angles(table, rates, angles)
    }

    /// Start from explicit angles, in table order. Missing entries start at 0.
    pub fn with_angles(
        table: BodyTable,
        rates: RotationRates,
        angles: impl IntoIterator<Item = f64>,
    ) -> Self {
        let mut angles = angles.into_iter();
        let states = (0..table.len())
            .map(|_| OrbitalState::new(angles.next().unwrap_or(0.0)))
            .collect();
        let sim = Self {
            table,
            states,
            rates,
            ticks: 0,
        };
        debug!(
            bodies = sim.states.len(),
            tick_scale = rates.tick_scale,
            "simulation created"
        );
        sim
    }

    pub fn table(&self) -> &BodyTable {
        &self.table
    }

    pub fn rates(&self) -> RotationRates {
        self.rates
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Total ticks advanced since creation, paused ticks included.
    pub fn elapsed_ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance every body by `ticks` at the given speed multiplier.
    pub fn advance(&mut self, ticks: u32, speed: f64) {
        for (state, params) in self.states.iter_mut().zip(self.table.iter()) {
            state.advance(params, ticks, speed, &self.rates);
        }
        self.ticks += u64::from(ticks);
    }

    pub fn state(&self, index: usize) -> Option<&OrbitalState> {
        self.states.get(index)
    }

    pub fn frame(&self, index: usize) -> Option<BodyFrame> {
        let state = self.states.get(index)?;
        let params = self.table.by_index(index)?;
        Some(BodyFrame {
            index,
            kind: params.kind.clone(),
            position: state.position(params.orbital_distance),
            rotation_phase: state.rotation_phase,
            cloud_phase: params.has_cloud_layer().then_some(state.cloud_phase),
        })
    }

    /// Frames for all bodies, in table order.
    pub fn frames(&self) -> Vec<BodyFrame> {
        (0..self.states.len()).filter_map(|i| self.frame(i)).collect()
    }
}
