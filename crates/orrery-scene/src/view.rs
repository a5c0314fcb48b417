//! Label and orbit-path visibility toggles.

use tracing::info;

/// Visibility flags read by the draw step each frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewToggles {
    pub show_labels: bool,
    pub show_orbits: bool,
}

impl Default for ViewToggles {
    fn default() -> Self {
        Self {
            show_labels: false,
            show_orbits: true,
        }
    }
}

impl ViewToggles {
    /// Flip label visibility; returns the new state.
    pub fn toggle_labels(&mut self) -> bool {
        self.show_labels = !self.show_labels;
        info!(visible = self.show_labels, "labels toggled");
        self.show_labels
    }

    /// Flip orbit-path visibility; returns the new state.
    pub fn toggle_orbits(&mut self) -> bool {
        self.show_orbits = !self.show_orbits;
        info!(visible = self.show_orbits, "orbit paths toggled");
        self.show_orbits
    }
}
