//! Background starfield: a seeded cloud of point stars plus the soft round
//! sprite each point is drawn with.

use glam::{Vec2, Vec3};
use orrery_bodies::Rgb;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::paint::{ColorStop, Paint, RadialGradient};
use crate::shapes::fill_circle;
use crate::texture::{SurfaceTexture, TextureCategory};

/// Default number of background stars.
pub const DEFAULT_STAR_COUNT: u32 = 5000;

/// Side of the cube, centered on the origin, that stars are scattered in.
pub const STARFIELD_EXTENT: f32 = 500.0;

/// How a renderer should draw each star point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarStyle {
    /// Uniform grey tint multiplied with the sprite.
    pub tint: Rgb,
    /// World-space point size, attenuated with distance.
    pub size: f32,
    pub opacity: f32,
    /// Sprite texels below this alpha are discarded.
    pub alpha_test: f32,
}

impl Default for StarStyle {
    fn default() -> Self {
        Self {
            tint: Rgb::from_hex(0x888888),
            size: 1.0,
            opacity: 0.8,
            alpha_test: 0.1,
        }
    }
}

/// A single background star.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarPoint {
    pub position: Vec3,
}

/// Generates a deterministic star catalog from a seed.
pub struct StarfieldGenerator {
    seed: u64,
    star_count: u32,
}

impl StarfieldGenerator {
    pub fn new(seed: u64, star_count: u32) -> Self {
        Self { seed, star_count }
    }

    /// Generate the star catalog. Deterministic for a given seed.
    pub fn generate(&self) -> Vec<StarPoint> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let stars = (0..self.star_count)
            .map(|_| {
                let mut coord = || (rng.random::<f32>() - 0.5) * STARFIELD_EXTENT;
                StarPoint {
                    position: Vec3::new(coord(), coord(), coord()),
                }
            })
            .collect::<Vec<_>>();
        tracing::debug!(seed = self.seed, count = stars.len(), "starfield generated");
        stars
    }
}

/// The 32×32 star sprite: a white disk fading from opaque at the center to
/// fully transparent at the rim.
pub fn star_sprite() -> SurfaceTexture {
    let mut canvas = TextureCategory::StarSprite.canvas();
    let (w, h) = (canvas.width() as f32, canvas.height() as f32);
    let center = Vec2::new(w / 2.0, h / 2.0);
    let radius = w / 2.0;
    let glow = RadialGradient::centered(
        center,
        radius,
        vec![
            ColorStop::new(0.0, Rgb::WHITE.with_alpha(1.0)),
            ColorStop::new(0.5, Rgb::WHITE.with_alpha(0.5)),
            ColorStop::new(1.0, Rgb::WHITE.with_alpha(0.0)),
        ],
    );
    fill_circle(&mut canvas, center, radius, &Paint::Radial(glow));
    SurfaceTexture::new(TextureCategory::StarSprite, canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_count_matches_request() {
        let stars = StarfieldGenerator::new(42, DEFAULT_STAR_COUNT).generate();
        assert_eq!(stars.len(), 5000);
        assert!(StarfieldGenerator::new(42, 0).generate().is_empty());
    }

    #[test]
    fn test_stars_stay_inside_cube() {
        let half = STARFIELD_EXTENT / 2.0;
        for star in StarfieldGenerator::new(7, 2000).generate() {
            let p = star.position;
            assert!(
                p.abs().max_element() <= half,
                "star outside the cube: {p:?}"
            );
        }
    }

    #[test]
    fn test_starfield_deterministic_per_seed() {
        let a = StarfieldGenerator::new(123, 100).generate();
        let b = StarfieldGenerator::new(123, 100).generate();
        let c = StarfieldGenerator::new(124, 100).generate();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_stars_fill_the_cube_evenly() {
        let stars = StarfieldGenerator::new(5, 5000).generate();
        let mean = stars.iter().map(|s| s.position).sum::<Vec3>() / stars.len() as f32;
        // Mean of a uniform cube sample sits near the origin.
        assert!(mean.length() < 10.0, "mean {mean:?}");
        let positive_x = stars.iter().filter(|s| s.position.x > 0.0).count();
        assert!((2300..2700).contains(&positive_x), "{positive_x} stars with x > 0");
    }

    #[test]
    fn test_star_sprite_fades_from_center() {
        let sprite = star_sprite();
        assert_eq!(sprite.dimensions(), (32, 32));
        let center = sprite.pixel(16, 16);
        assert_eq!(&center[..3], &[255, 255, 255]);
        assert!(center[3] > 240, "center alpha {}", center[3]);
        let mid = sprite.pixel(24, 16)[3];
        assert!((110..150).contains(&mid), "half-radius alpha {mid}");
        assert_eq!(sprite.pixel(0, 0)[3], 0);
        assert_eq!(sprite.pixel(31, 31)[3], 0);
    }

    #[test]
    fn test_default_style() {
        let style = StarStyle::default();
        assert_eq!(style.tint.to_hex(), 0x888888);
        assert_eq!(style.opacity, 0.8);
    }
}
