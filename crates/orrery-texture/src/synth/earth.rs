//! Earth: ocean, three continents, ice caps, islands, and the separate cloud
//! overlay.

use glam::Vec2;
use orrery_bodies::{CelestialBodyParameters, Rgb};
use rand::Rng;

use crate::canvas::Canvas;
use crate::paint::Paint;
use crate::shapes::{Path, fill_path, fill_rect};

use super::{fill_radial_base, hex_stop, scatter_disks};

const FOREST: u32 = 0x228B22;
const DESERT: u32 = 0x8B4513;
const DEFAULT_ISLANDS: u32 = 0x32CD32;

/// Fraction of the height covered by each polar ice band.
const POLAR_BAND: f32 = 0.08;

/// Continent outlines in unit coordinates, scaled to the canvas on use.
fn continents(w: f32, h: f32) -> [(Path, u32); 3] {
    let p = |x: f32, y: f32| Vec2::new(x * w, y * h);

    let americas = Path::new()
        .move_to(p(0.0, 0.2))
        .quad_to(p(0.15, 0.1), p(0.25, 0.3))
        .quad_to(p(0.2, 0.5), p(0.15, 0.7))
        .quad_to(p(0.1, 0.9), p(0.0, 0.8))
        .close();

    let europe_africa = Path::new()
        .move_to(p(0.4, 0.15))
        .quad_to(p(0.5, 0.1), p(0.6, 0.2))
        .quad_to(p(0.55, 0.4), p(0.5, 0.6))
        .quad_to(p(0.45, 0.8), p(0.4, 0.9))
        .quad_to(p(0.35, 0.5), p(0.4, 0.15))
        .close();

    let asia = Path::new()
        .move_to(p(0.7, 0.1))
        .quad_to(p(0.9, 0.2), p(1.0, 0.3))
        .line_to(p(1.0, 0.6))
        .quad_to(p(0.8, 0.7), p(0.7, 0.5))
        .quad_to(p(0.65, 0.3), p(0.7, 0.1))
        .close();

    [(americas, FOREST), (europe_africa, DESERT), (asia, FOREST)]
}

pub(super) fn paint_earth(
    canvas: &mut Canvas,
    params: &CelestialBodyParameters,
    rng: &mut impl Rng,
) {
    let (w, h) = (canvas.width() as f32, canvas.height() as f32);
    fill_radial_base(
        canvas,
        vec![
            hex_stop(0.0, 0x00BFFF),
            hex_stop(0.5, 0x4169E1),
            hex_stop(1.0, 0x0066FF),
        ],
    );

    for (outline, hex) in continents(w, h) {
        fill_path(canvas, &outline, &Rgb::from_hex(hex).opaque().into());
    }

    let ice = Paint::Solid(Rgb::WHITE.with_alpha(0.8));
    fill_rect(canvas, 0.0, 0.0, w, h * POLAR_BAND, &ice);
    fill_rect(canvas, 0.0, h * (1.0 - POLAR_BAND), w, h * POLAR_BAND, &ice);

    let islands = params
        .secondary_color
        .unwrap_or(Rgb::from_hex(DEFAULT_ISLANDS));
    scatter_disks(canvas, rng, 12, 2.0, 5.0, &islands.opaque().into());
}

/// Translucent puffs on a transparent canvas.
pub(super) fn paint_clouds(canvas: &mut Canvas, color: Rgb, rng: &mut impl Rng) {
    scatter_disks(canvas, rng, 20, 5.0, 15.0, &color.with_alpha(0.3).into());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::TextureCategory;
    use orrery_bodies::{BodyKind, BodyTable};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn earth() -> CelestialBodyParameters {
        BodyTable::solar_system()
            .get(&BodyKind::Earth)
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_polar_bands_are_icy() {
        let mut canvas = TextureCategory::Surface.canvas();
        paint_earth(&mut canvas, &earth(), &mut ChaCha8Rng::seed_from_u64(2));
        let (w, h) = canvas.dimensions();
        for y in [0, h - 1] {
            let icy = (0..w)
                .filter(|&x| canvas.pixel(x, y)[..3].iter().all(|&c| c > 200))
                .count();
            assert!(icy as f32 > w as f32 * 0.6, "row {y}: {icy}/{w} icy");
        }
    }

    #[test]
    fn test_desert_continent_present() {
        let brown = Rgb::from_hex(DESERT);
        for seed in [1, 2] {
            let mut canvas = TextureCategory::Surface.canvas();
            paint_earth(&mut canvas, &earth(), &mut ChaCha8Rng::seed_from_u64(seed));
            let count = canvas
                .image()
                .pixels()
                .filter(|p| p.0 == [brown.r, brown.g, brown.b, 255])
                .count();
            assert!(count > 2000, "seed {seed}: {count} desert pixels");
        }
    }

    #[test]
    fn test_clouds_are_translucent_white() {
        let mut canvas = TextureCategory::Clouds.canvas();
        paint_clouds(&mut canvas, Rgb::WHITE, &mut ChaCha8Rng::seed_from_u64(6));
        let mut clear = 0;
        for p in canvas.image().pixels() {
            if p.0[3] == 0 {
                clear += 1;
            } else {
                assert_eq!(&p.0[..3], &[255, 255, 255]);
                assert!(p.0[3] < 255);
            }
        }
        assert!(clear > 0);
    }
}
