//! Orbit camera state: a position looking at a target, with clamped zoom and
//! a reset to the default viewpoint.

use glam::DVec3;
use orrery_config::ViewConfig;
use tracing::info;

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    pub position: DVec3,
    pub target: DVec3,
    default_position: DVec3,
    default_target: DVec3,
    /// Allowed distance from the target, `[min, max]`.
    pub min_distance: f64,
    pub max_distance: f64,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(DVec3::new(0.0, 30.0, 80.0), DVec3::ZERO, 10.0, 200.0)
    }
}

impl OrbitCamera {
    pub fn new(position: DVec3, target: DVec3, min_distance: f64, max_distance: f64) -> Self {
        Self {
            position,
            target,
            default_position: position,
            default_target: target,
            min_distance,
            max_distance,
        }
    }

    pub fn from_config(view: &ViewConfig) -> Self {
        Self::new(
            DVec3::from_array(view.camera_position),
            DVec3::from_array(view.camera_target),
            view.min_distance,
            view.max_distance,
        )
    }

    pub fn distance(&self) -> f64 {
        self.position.distance(self.target)
    }

    /// Move toward (`delta < 0`) or away from the target along the view
    /// direction, keeping the distance inside `[min_distance, max_distance]`.
    pub fn zoom(&mut self, delta: f64) {
        let offset = self.position - self.target;
        let Some(direction) = offset.try_normalize() else {
            return;
        };
        let distance = (offset.length() + delta).clamp(self.min_distance, self.max_distance);
        self.position = self.target + direction * distance;
    }

    /// Restore the default position and target.
    pub fn reset(&mut self) {
        self.position = self.default_position;
        self.target = self.default_target;
        info!(position = ?self.position, "camera reset");
    }

    pub fn is_at_default(&self) -> bool {
        self.position == self.default_position && self.target == self.default_target
    }
}
