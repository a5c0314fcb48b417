//! Ice giants: pale cyan Uranus and deep blue, stormy Neptune.

use std::f32::consts::TAU;

use glam::Vec2;
use orrery_bodies::Rgb;
use rand::Rng;

use crate::canvas::Canvas;
use crate::paint::{ColorStop, Paint, RadialGradient};
use crate::shapes::{Path, fill_circle, fill_rect, stroke_path};

use super::storm::{GreatSpot, draw_great_spot};
use super::{fill_radial_base, hex_stop, random_point, random_radius, scatter_disks};

pub(super) fn paint_uranus(canvas: &mut Canvas, rng: &mut impl Rng) {
    fill_radial_base(
        canvas,
        vec![
            hex_stop(0.0, 0xAFEEEE),
            hex_stop(0.3, 0x87CEEB),
            hex_stop(0.6, 0x4FD0C3),
            hex_stop(1.0, 0x008B8B),
        ],
    );

    scatter_disks(canvas, rng, 8, 10.0, 20.0, &Rgb::new(175, 238, 238).with_alpha(0.2).into());

    paint_uranus_bands(canvas);

    scatter_disks(canvas, rng, 6, 8.0, 15.0, &Rgb::new(0, 139, 139).with_alpha(0.2).into());
    scatter_disks(canvas, rng, 5, 6.0, 12.0, &Rgb::new(224, 255, 255).with_alpha(0.3).into());

    paint_sheen(canvas);
}

/// The axis is tipped over, so the faint bands run pole to pole.
fn paint_uranus_bands(canvas: &mut Canvas) {
    let h = canvas.height() as f32;
    let band = Paint::Solid(Rgb::new(64, 224, 208).with_alpha(0.15));
    for x in (0..canvas.width() as usize).step_by(40) {
        let x = x as f32;
        fill_rect(canvas, x + (x * 0.1).sin() * 5.0, 0.0, 20.0, h, &band);
    }
}

/// Soft white highlight toward the upper left, faded out by 0.4 of the width.
fn paint_sheen(canvas: &mut Canvas) {
    let (w, h) = (canvas.width() as f32, canvas.height() as f32);
    let sheen = RadialGradient::centered(
        Vec2::new(w * 0.3, h * 0.3),
        w * 0.4,
        vec![
            ColorStop::new(0.0, Rgb::WHITE.with_alpha(0.2)),
            ColorStop::new(1.0, Rgb::WHITE.with_alpha(0.0)),
        ],
    );
    fill_rect(canvas, 0.0, 0.0, w, h, &Paint::Radial(sheen));
}

fn paint_neptune_bands(canvas: &mut Canvas) {
    let w = canvas.width() as f32;
    let band = Paint::Solid(Rgb::new(70, 130, 180).with_alpha(0.3));
    for y in (0..canvas.height() as usize).step_by(30) {
        let y = y as f32;
        fill_rect(canvas, 0.0, y + (y * 0.1).sin() * 8.0, w, 15.0, &band);
    }
}

/// Six wavy streaks of fast zonal wind, evenly spaced from the top edge.
fn paint_winds(canvas: &mut Canvas) {
    let h = canvas.height() as f32;
    let wind = Paint::Solid(Rgb::new(176, 196, 222).with_alpha(0.2));
    for i in 0..6 {
        let y = i as f32 / 6.0 * h;
        let mut streak = Path::new().move_to(Vec2::new(0.0, y));
        for x in (0..canvas.width() as usize).step_by(10) {
            let x = x as f32;
            streak = streak.line_to(Vec2::new(x, y + (x * 0.1 + i as f32).sin() * 5.0));
        }
        stroke_path(canvas, &streak, 2.0, &wind);
    }
}

/// Neptune's great dark spot. No lighter core.
pub(super) fn great_dark_spot(w: f32, h: f32) -> GreatSpot {
    GreatSpot {
        center: Vec2::new(w * 0.3, h * 0.4),
        radii: Vec2::new(15.0, 10.0),
        shadow_offset: Vec2::new(1.0, 1.0),
        shadow_radii: Vec2::new(18.0, 12.0),
        shadow_color: Rgb::new(25, 25, 112).with_alpha(0.9),
        body_stops: vec![
            hex_stop(0.0, 0x191970),
            hex_stop(0.5, 0x0F0F50),
            hex_stop(1.0, 0x000080),
        ],
        core: None,
    }
}

pub(super) fn paint_neptune(canvas: &mut Canvas, rng: &mut impl Rng) {
    let (w, h) = (canvas.width() as f32, canvas.height() as f32);
    fill_radial_base(
        canvas,
        vec![
            hex_stop(0.0, 0x87CEEB),
            hex_stop(0.3, 0x4169E1),
            hex_stop(0.6, 0x1E90FF),
            hex_stop(1.0, 0x191970),
        ],
    );

    paint_neptune_bands(canvas);

    draw_great_spot(canvas, &great_dark_spot(w, h));

    // Storm clusters: a central cell ringed by four satellites.
    let cell = Paint::Solid(Rgb::new(135, 206, 235).with_alpha(0.4));
    let satellite = Paint::Solid(Rgb::new(100, 149, 237).with_alpha(0.3));
    for _ in 0..12 {
        let center = random_point(rng, canvas);
        let radius = random_radius(rng, 4.0, 8.0);
        fill_circle(canvas, center, radius, &cell);
        for j in 0..4 {
            let angle = j as f32 / 4.0 * TAU;
            let offset = Vec2::new(angle.cos(), angle.sin()) * 15.0;
            let radius = random_radius(rng, 2.0, 4.0);
            fill_circle(canvas, center + offset, radius, &satellite);
        }
    }

    paint_winds(canvas);

    scatter_disks(canvas, rng, 5, 6.0, 12.0, &Rgb::new(173, 216, 230).with_alpha(0.3).into());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::TextureCategory;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn grey_canvas() -> Canvas {
        Canvas::filled(512, 256, Rgb::from_hex(0x404040).opaque())
    }

    #[test]
    fn test_uranus_bands_run_pole_to_pole() {
        let mut canvas = grey_canvas();
        paint_uranus_bands(&mut canvas);
        for x in 0..512 {
            let top = canvas.pixel(x, 0);
            assert!((1..256).all(|y| canvas.pixel(x, y) == top), "column {x} varies");
        }
        assert_ne!(canvas.pixel(10, 128), [0x40, 0x40, 0x40, 255]);
        assert_eq!(canvas.pixel(28, 128), [0x40, 0x40, 0x40, 255]);
    }

    #[test]
    fn test_neptune_bands_run_along_latitudes() {
        let mut canvas = grey_canvas();
        paint_neptune_bands(&mut canvas);
        for y in 0..256 {
            let left = canvas.pixel(0, y);
            assert!((1..512).all(|x| canvas.pixel(x, y) == left), "row {y} varies");
        }
        assert_ne!(canvas.pixel(256, 5), [0x40, 0x40, 0x40, 255]);
        assert_eq!(canvas.pixel(256, 20), [0x40, 0x40, 0x40, 255]);
    }

    #[test]
    fn test_wind_streaks_wave() {
        let grey = [0x40, 0x40, 0x40, 255];
        let mut canvas = grey_canvas();
        paint_winds(&mut canvas);
        // The second streak sits near y = 42.7 and swings about 5px either way.
        assert_ne!(canvas.pixel(70, 47), grey, "crest missing");
        assert_eq!(canvas.pixel(70, 37), grey);
        assert_ne!(canvas.pixel(40, 37), grey, "trough missing");
        assert_eq!(canvas.pixel(40, 47), grey);
    }

    #[test]
    fn test_sheen_brightens_upper_left_only() {
        let grey = Rgb::from_hex(0x404040).opaque();
        let mut canvas = Canvas::filled(512, 256, grey);
        paint_sheen(&mut canvas);
        // Full 0.2 white at the highlight center.
        let hot = canvas.pixel(153, 76);
        assert!(hot[0] > 0x50, "center {hot:?}");
        // Beyond the outer radius nothing changes.
        assert_eq!(canvas.pixel(511, 255), [0x40, 0x40, 0x40, 255]);
    }

    #[test]
    fn test_uranus_is_cyan() {
        let mut canvas = TextureCategory::Surface.canvas();
        paint_uranus(&mut canvas, &mut ChaCha8Rng::seed_from_u64(4));
        // Blue-green ice: red is the weakest channel everywhere.
        assert!(
            canvas
                .image()
                .pixels()
                .all(|p| p.0[0] <= p.0[1] && p.0[0] <= p.0[2] && p.0[3] == 255)
        );
    }

    #[test]
    fn test_neptune_dark_spot() {
        let mut canvas = TextureCategory::Surface.canvas();
        paint_neptune(&mut canvas, &mut ChaCha8Rng::seed_from_u64(8));
        let spot = great_dark_spot(512.0, 256.0);
        assert!(spot.core.is_none());
        let [r, g, b, _] = canvas.pixel(spot.center.x as u32, spot.center.y as u32);
        assert!(b > r && b > g, "spot {r},{g},{b}");
        assert!(r < 120 && g < 150, "spot not dark: {r},{g},{b}");
    }
}
