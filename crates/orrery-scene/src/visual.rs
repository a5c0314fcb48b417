//! Per-body render hints: how the collaborating renderer should dress each
//! sphere (material, glow, ring, cloud shell, label).

use orrery_bodies::{CelestialBodyParameters, Rgb};

/// Height of a label above the body's center, past its surface.
pub const LABEL_CLEARANCE: f64 = 3.0;

/// How a renderer draws a label sprite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelStyle {
    pub text_color: Rgb,
    pub background: Rgb,
    pub background_opacity: f32,
    /// Sprite size in world units (width, height).
    pub scale: (f32, f32),
}

pub const LABEL_STYLE: LabelStyle = LabelStyle {
    text_color: Rgb::from_hex(0xFFD700),
    background: Rgb::BLACK,
    background_opacity: 0.8,
    scale: (8.0, 2.0),
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub color: Rgb,
    pub opacity: f32,
}

pub const ORBIT_LINE_STYLE: LineStyle = LineStyle {
    color: Rgb::from_hex(0x444444),
    opacity: 0.3,
};

/// Surface shading for a body's sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceMaterial {
    /// Self-luminous, unaffected by lighting.
    Emissive { color: Rgb, intensity: f32 },
    /// Lit by the scene lights, with the surface texture tinted by `tint` and
    /// a faint self-glow so the night side never goes fully black.
    Lit { tint: Rgb, emissive: Rgb },
}

/// Translucent shell drawn around a body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shell {
    pub radius: f64,
    pub color: Rgb,
    pub opacity: f32,
}

/// Flat annulus in the body's equatorial plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingGeometry {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub opacity: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BodyVisual {
    pub radius: f64,
    pub material: SurfaceMaterial,
    /// Back-facing halo around the central body.
    pub glow: Option<Shell>,
    pub ring: Option<RingGeometry>,
    /// Shell carrying the cloud texture, rotated independently.
    pub cloud_shell: Option<Shell>,
    pub label_height: f64,
}

impl BodyVisual {
    pub fn for_body(params: &CelestialBodyParameters) -> Self {
        let radius = params.radius;
        let material = if params.is_central() {
            SurfaceMaterial::Emissive {
                color: params.emissive.unwrap_or(params.base_color),
                intensity: 0.6,
            }
        } else {
            SurfaceMaterial::Lit {
                tint: params.base_color,
                emissive: params.base_color.scaled(0.1),
            }
        };
        Self {
            radius,
            material,
            glow: params.is_central().then_some(Shell {
                radius: radius * 1.3,
                color: Rgb::from_hex(0xFFAA00),
                opacity: 0.2,
            }),
            ring: params.has_rings().then_some(RingGeometry {
                inner_radius: radius * 1.2,
                outer_radius: radius * 2.2,
                opacity: 0.8,
            }),
            cloud_shell: params.cloud_color.map(|color| Shell {
                radius: radius * 1.01,
                color,
                opacity: 0.4,
            }),
            label_height: radius + LABEL_CLEARANCE,
        }
    }
}
