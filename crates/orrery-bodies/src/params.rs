//! Static per-body parameters and the immutable table that owns them.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Identifier selecting a body's rendering and motion rules.
///
/// The named variants are the bodies with a dedicated surface recipe. Any other
/// identifier parses into [`BodyKind::Other`] and gets the flat-colour surface.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BodyKind {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    /// A body without a dedicated recipe, keyed by its lowercase identifier.
    Other(String),
}

impl BodyKind {
    /// All bodies with a dedicated recipe, in table order.
    pub const KNOWN: [BodyKind; 9] = [
        BodyKind::Sun,
        BodyKind::Mercury,
        BodyKind::Venus,
        BodyKind::Earth,
        BodyKind::Mars,
        BodyKind::Jupiter,
        BodyKind::Saturn,
        BodyKind::Uranus,
        BodyKind::Neptune,
    ];

    /// Lowercase identifier, e.g. `"earth"`.
    pub fn as_str(&self) -> &str {
        match self {
            BodyKind::Sun => "sun",
            BodyKind::Mercury => "mercury",
            BodyKind::Venus => "venus",
            BodyKind::Earth => "earth",
            BodyKind::Mars => "mars",
            BodyKind::Jupiter => "jupiter",
            BodyKind::Saturn => "saturn",
            BodyKind::Uranus => "uranus",
            BodyKind::Neptune => "neptune",
            BodyKind::Other(name) => name,
        }
    }
}

impl FromStr for BodyKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Ok(BodyKind::KNOWN
            .iter()
            .find(|k| k.as_str() == lower)
            .cloned()
            .unwrap_or(BodyKind::Other(lower)))
    }
}

impl From<&str> for BodyKind {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<String> for BodyKind {
    fn from(s: String) -> Self {
        BodyKind::from(s.as_str())
    }
}

impl From<BodyKind> for String {
    fn from(kind: BodyKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of one celestial body.
///
/// Input contract (not checked at runtime): `radius > 0`, `orbital_distance >= 0`,
/// `angular_speed >= 0`, and `orbital_distance == 0` only for the central body.
///
/// Optional colours are populated per kind:
/// - `emissive`: Sun, Venus
/// - `secondary_color`: Earth (land), Jupiter (band accent)
/// - `cloud_color`: Earth
/// - `ring_color`: Saturn
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CelestialBodyParameters {
    pub kind: BodyKind,
    /// Sphere radius in scene units.
    pub radius: f64,
    /// Orbit radius in scene units. Zero for the central body.
    pub orbital_distance: f64,
    /// Orbital advance in radians per simulation unit.
    pub angular_speed: f64,
    pub base_color: Rgb,
    pub emissive: Option<Rgb>,
    pub secondary_color: Option<Rgb>,
    pub ring_color: Option<Rgb>,
    pub cloud_color: Option<Rgb>,
    pub display_name: String,
    pub description: String,
}

impl CelestialBodyParameters {
    /// Minimal parameters with no optional colours.
    pub fn new(
        kind: BodyKind,
        radius: f64,
        orbital_distance: f64,
        angular_speed: f64,
        base_color: Rgb,
    ) -> Self {
        let display_name = kind.as_str().to_string();
        Self {
            kind,
            radius,
            orbital_distance,
            angular_speed,
            base_color,
            emissive: None,
            secondary_color: None,
            ring_color: None,
            cloud_color: None,
            display_name,
            description: String::new(),
        }
    }

    /// The non-orbiting, self-luminous body at the origin.
    pub fn is_central(&self) -> bool {
        self.orbital_distance == 0.0
    }

    pub fn has_rings(&self) -> bool {
        self.ring_color.is_some()
    }

    pub fn has_cloud_layer(&self) -> bool {
        self.cloud_color.is_some()
    }
}

/// Immutable, ordered table of body parameters.
///
/// Index positions are stable for the table's lifetime and are the handles the
/// simulation and scene use to refer to a body.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyTable {
    bodies: Vec<CelestialBodyParameters>,
}

impl BodyTable {
    /// Wrap a list of bodies. Exactly one entry must be central.
    pub fn new(bodies: Vec<CelestialBodyParameters>) -> Self {
        debug_assert_eq!(
            bodies.iter().filter(|b| b.is_central()).count(),
            1,
            "body table needs exactly one central body"
        );
        debug_assert!(
            bodies
                .iter()
                .all(|b| b.radius > 0.0 && (b.is_central() || b.angular_speed > 0.0)),
            "body radii and orbital speeds must be positive"
        );
        tracing::debug!(bodies = bodies.len(), "body table built");
        Self { bodies }
    }

    /// The sun and the eight planets.
    pub fn solar_system() -> Self {
        Self::new(solar_system_bodies())
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CelestialBodyParameters> {
        self.bodies.iter()
    }

    pub fn get(&self, kind: &BodyKind) -> Option<&CelestialBodyParameters> {
        self.bodies.iter().find(|b| &b.kind == kind)
    }

    pub fn index_of(&self, kind: &BodyKind) -> Option<usize> {
        self.bodies.iter().position(|b| &b.kind == kind)
    }

    pub fn by_index(&self, index: usize) -> Option<&CelestialBodyParameters> {
        self.bodies.get(index)
    }

    /// The central body, if the table honours its contract.
    pub fn central(&self) -> Option<&CelestialBodyParameters> {
        self.bodies.iter().find(|b| b.is_central())
    }
}

impl<'a> IntoIterator for &'a BodyTable {
    type Item = &'a CelestialBodyParameters;
    type IntoIter = std::slice::Iter<'a, CelestialBodyParameters>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}

fn body(
    kind: BodyKind,
    radius: f64,
    distance: f64,
    speed: f64,
    color: u32,
    name: &str,
    description: &str,
) -> CelestialBodyParameters {
    CelestialBodyParameters {
        display_name: name.to_string(),
        description: description.to_string(),
        ..CelestialBodyParameters::new(kind, radius, distance, speed, Rgb::from_hex(color))
    }
}

fn solar_system_bodies() -> Vec<CelestialBodyParameters> {
    vec![
        CelestialBodyParameters {
            emissive: Some(Rgb::from_hex(0xFFA500)),
            ..body(
                BodyKind::Sun,
                5.0,
                0.0,
                0.0,
                0xFFD700,
                "Sun",
                "Notre étoile - une boule massive de plasma chaud qui fournit l'énergie pour toute vie sur Terre.",
            )
        },
        body(
            BodyKind::Mercury,
            0.4,
            15.0,
            0.047,
            0xC0C0C0,
            "Mercure",
            "La plus petite planète et la plus proche du Soleil. Un jour sur Mercure dure plus longtemps que son année !",
        ),
        CelestialBodyParameters {
            emissive: Some(Rgb::from_hex(0x332211)),
            ..body(
                BodyKind::Venus,
                0.9,
                20.0,
                0.035,
                0xFFE4B5,
                "Vénus",
                "La planète la plus chaude avec d'épais nuages d'acide sulfurique. Elle tourne à l'envers par rapport à la Terre !",
            )
        },
        CelestialBodyParameters {
            secondary_color: Some(Rgb::from_hex(0x32CD32)),
            cloud_color: Some(Rgb::from_hex(0xFFFFFF)),
            ..body(
                BodyKind::Earth,
                1.0,
                25.0,
                0.029,
                0x4169E1,
                "Terre",
                "Notre planète natale - la seule planète connue avec la vie. 71% de sa surface est couverte d'eau.",
            )
        },
        body(
            BodyKind::Mars,
            0.5,
            30.0,
            0.024,
            0xFF4500,
            "Mars",
            "La Planète Rouge - nommée pour sa couleur rouillée d'oxyde de fer. Abrite le plus grand volcan du système solaire !",
        ),
        CelestialBodyParameters {
            secondary_color: Some(Rgb::from_hex(0xF4A460)),
            ..body(
                BodyKind::Jupiter,
                3.0,
                40.0,
                0.013,
                0xDAA520,
                "Jupiter",
                "La plus grande planète - une géante gazeuse avec une Grande Tache Rouge plus grande que la Terre !",
            )
        },
        CelestialBodyParameters {
            ring_color: Some(Rgb::from_hex(0xDAA520)),
            ..body(
                BodyKind::Saturn,
                2.5,
                50.0,
                0.009,
                0xF5DEB3,
                "Saturne",
                "Célèbre pour ses magnifiques anneaux faits de particules de glace et de roche. Elle est moins dense que l'eau !",
            )
        },
        body(
            BodyKind::Uranus,
            1.8,
            60.0,
            0.006,
            0x40E0D0,
            "Uranus",
            "Une géante de glace qui tourne sur le côté. Elle a de faibles anneaux et 27 lunes connues !",
        ),
        body(
            BodyKind::Neptune,
            1.7,
            70.0,
            0.005,
            0x4169E1,
            "Neptune",
            "La planète la plus venteuse avec des vitesses jusqu'à 2000 km/h. Il faut 165 années terrestres pour orbiter le Soleil !",
        ),
    ]
}
