//! Info panel text for the selected body.

use orrery_bodies::CelestialBodyParameters;

/// Text shown when a body is selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoPanel {
    pub title: String,
    pub description: String,
}

impl From<&CelestialBodyParameters> for InfoPanel {
    fn from(params: &CelestialBodyParameters) -> Self {
        Self {
            title: params.display_name.clone(),
            description: params.description.clone(),
        }
    }
}
