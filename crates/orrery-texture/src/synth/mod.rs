//! Per-body texture recipes and the dispatch that selects them.
//!
//! Shapes and colour palettes are fixed per body; only the placement and size
//! of scattered features (craters, puffs, storms) come from the random source,
//! so two runs with different seeds differ in detail but not in character.

mod earth;
mod gas;
mod ice;
mod ring;
mod rocky;
mod storm;
mod venus;

use std::time::Instant;

use glam::Vec2;
use orrery_bodies::{BodyKind, CelestialBodyParameters, Rgb};
use rand::Rng;
use tracing::debug;

use crate::canvas::Canvas;
use crate::paint::{ColorStop, Paint, RadialGradient};
use crate::shapes::{fill_circle, fill_rect};
use crate::texture::{SurfaceTexture, TextureCategory};

pub use rocky::{CraterField, MARS_CRATERS, MERCURY_CRATERS};
pub use storm::{GreatSpot, StormCore, draw_great_spot};

/// Synthesize a body's 512×256 surface texture.
///
/// Bodies without a dedicated recipe (including the self-luminous central
/// body) get a flat fill of their base colour. This path never fails.
pub fn synthesize_surface(
    params: &CelestialBodyParameters,
    rng: &mut impl Rng,
) -> SurfaceTexture {
    let started = Instant::now();
    let mut canvas = TextureCategory::Surface.canvas();
    match &params.kind {
        BodyKind::Mercury => rocky::paint_mercury(&mut canvas, rng),
        BodyKind::Mars => rocky::paint_mars(&mut canvas, rng),
        BodyKind::Venus => venus::paint_venus(&mut canvas, rng),
        BodyKind::Earth => earth::paint_earth(&mut canvas, params, rng),
        BodyKind::Jupiter => gas::paint_jupiter(&mut canvas, rng),
        BodyKind::Saturn => gas::paint_saturn(&mut canvas),
        BodyKind::Uranus => ice::paint_uranus(&mut canvas, rng),
        BodyKind::Neptune => ice::paint_neptune(&mut canvas, rng),
        BodyKind::Sun | BodyKind::Other(_) => canvas.fill(params.base_color.opaque()),
    }
    debug!(
        body = %params.kind,
        elapsed_us = started.elapsed().as_micros() as u64,
        "surface texture synthesized"
    );
    SurfaceTexture::new(TextureCategory::Surface, canvas)
}

/// Synthesize the 256×256 ring texture from the body's ring colour
/// (base colour if it has none).
pub fn synthesize_ring(params: &CelestialBodyParameters) -> SurfaceTexture {
    let mut canvas = TextureCategory::Ring.canvas();
    ring::paint_ring(&mut canvas, params.ring_color.unwrap_or(params.base_color));
    debug!(body = %params.kind, "ring texture synthesized");
    SurfaceTexture::new(TextureCategory::Ring, canvas)
}

/// Synthesize the 256×128 translucent cloud overlay from the body's cloud
/// colour (white if it has none).
pub fn synthesize_clouds(
    params: &CelestialBodyParameters,
    rng: &mut impl Rng,
) -> SurfaceTexture {
    let mut canvas = TextureCategory::Clouds.canvas();
    earth::paint_clouds(&mut canvas, params.cloud_color.unwrap_or(Rgb::WHITE), rng);
    debug!(body = %params.kind, "cloud texture synthesized");
    SurfaceTexture::new(TextureCategory::Clouds, canvas)
}

/// Every texture a body owns: its surface plus the optional ring and cloud
/// layers its parameters call for.
#[derive(Clone, Debug)]
pub struct TextureSet {
    pub surface: SurfaceTexture,
    pub ring: Option<SurfaceTexture>,
    pub clouds: Option<SurfaceTexture>,
}

impl TextureSet {
    pub fn synthesize(params: &CelestialBodyParameters, rng: &mut impl Rng) -> Self {
        let surface = synthesize_surface(params, rng);
        let ring = params.has_rings().then(|| synthesize_ring(params));
        let clouds = params
            .has_cloud_layer()
            .then(|| synthesize_clouds(params, rng));
        Self {
            surface,
            ring,
            clouds,
        }
    }

    /// All textures in the set, surface first.
    pub fn iter(&self) -> impl Iterator<Item = &SurfaceTexture> {
        std::iter::once(&self.surface)
            .chain(self.ring.as_ref())
            .chain(self.clouds.as_ref())
    }
}

// --- Shared recipe helpers ---

/// Uniform random point on the canvas.
fn random_point(rng: &mut impl Rng, canvas: &Canvas) -> Vec2 {
    Vec2::new(
        rng.random::<f32>() * canvas.width() as f32,
        rng.random::<f32>() * canvas.height() as f32,
    )
}

/// Uniform random radius in `[min, min + span)`.
fn random_radius(rng: &mut impl Rng, min: f32, span: f32) -> f32 {
    rng.random::<f32>() * span + min
}

/// Scatter `count` disks of one paint at random positions and sizes.
fn scatter_disks(
    canvas: &mut Canvas,
    rng: &mut impl Rng,
    count: usize,
    min_radius: f32,
    radius_span: f32,
    paint: &Paint,
) {
    for _ in 0..count {
        let center = random_point(rng, canvas);
        let radius = random_radius(rng, min_radius, radius_span);
        fill_circle(canvas, center, radius, paint);
    }
}

/// Cover the whole canvas with a radial gradient centred on the canvas,
/// reaching half the canvas width.
fn fill_radial_base(canvas: &mut Canvas, stops: Vec<ColorStop>) {
    let (w, h) = (canvas.width() as f32, canvas.height() as f32);
    let gradient = RadialGradient::centered(Vec2::new(w / 2.0, h / 2.0), w / 2.0, stops);
    fill_rect(canvas, 0.0, 0.0, w, h, &Paint::Radial(gradient));
}

/// Shorthand for an opaque colour stop from a packed hex colour.
fn hex_stop(offset: f32, hex: u32) -> ColorStop {
    ColorStop::new(offset, Rgb::from_hex(hex).opaque())
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_bodies::BodyTable;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    #[test]
    fn test_every_surface_has_fixed_dimensions() {
        let table = BodyTable::solar_system();
        for seed in [1, 2, 3] {
            for body in &table {
                let tex = synthesize_surface(body, &mut rng(seed));
                assert_eq!(tex.dimensions(), (512, 256), "{} seed {seed}", body.kind);
                assert_eq!(tex.category(), TextureCategory::Surface);
            }
        }
    }

    #[test]
    fn test_planet_surfaces_are_opaque_and_detailed() {
        let table = BodyTable::solar_system();
        for body in table.iter().filter(|b| !b.is_central()) {
            let tex = synthesize_surface(body, &mut rng(7));
            assert!(
                tex.image().pixels().all(|p| p.0[3] == 255),
                "{} surface has transparent pixels",
                body.kind
            );
            assert!(
                tex.unique_color_count() > 10,
                "{} surface looks flat ({} colours)",
                body.kind,
                tex.unique_color_count()
            );
        }
    }

    #[test]
    fn test_unknown_body_falls_back_to_flat_base_colour() {
        let pluto = CelestialBodyParameters::new(
            BodyKind::from("pluto"),
            0.3,
            80.0,
            0.004,
            Rgb::from_hex(0x888888),
        );
        let tex = synthesize_surface(&pluto, &mut rng(99));
        assert_eq!(tex.dimensions(), (512, 256));
        assert!(tex.is_uniform(Rgb::new(0x88, 0x88, 0x88)));
    }

    #[test]
    fn test_central_body_uses_flat_fill() {
        let table = BodyTable::solar_system();
        let sun = table.central().unwrap();
        let tex = synthesize_surface(sun, &mut rng(1));
        assert!(tex.is_uniform(sun.base_color));
    }

    #[test]
    fn test_texture_sets_match_body_features() {
        let table = BodyTable::solar_system();
        for body in &table {
            let set = TextureSet::synthesize(body, &mut rng(5));
            assert_eq!(set.ring.is_some(), body.kind == BodyKind::Saturn);
            assert_eq!(set.clouds.is_some(), body.kind == BodyKind::Earth);
            if let Some(ring) = &set.ring {
                assert_eq!(ring.dimensions(), (256, 256));
            }
            if let Some(clouds) = &set.clouds {
                assert_eq!(clouds.dimensions(), (256, 128));
            }
            assert_eq!(
                set.iter().count(),
                1 + set.ring.is_some() as usize + set.clouds.is_some() as usize
            );
        }
    }

    #[test]
    fn test_different_seeds_change_scatter_not_dimensions() {
        let table = BodyTable::solar_system();
        let mercury = table.get(&BodyKind::Mercury).unwrap();
        let a = synthesize_surface(mercury, &mut rng(1));
        let b = synthesize_surface(mercury, &mut rng(2));
        let c = synthesize_surface(mercury, &mut rng(1));
        assert_eq!(a.dimensions(), b.dimensions());
        assert_ne!(a.as_rgba8(), b.as_rgba8());
        assert_eq!(a.as_rgba8(), c.as_rgba8(), "same seed must reproduce");
    }
}
