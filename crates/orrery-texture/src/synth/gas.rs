//! Banded gas giants: turbulent Jupiter and smooth Saturn.

use glam::Vec2;
use orrery_bodies::Rgb;
use rand::Rng;

use crate::canvas::Canvas;
use crate::paint::{ColorStop, LinearGradient, Paint};
use crate::shapes::{fill_circle, fill_rect};

use super::storm::{GreatSpot, StormCore, draw_great_spot};
use super::{hex_stop, random_radius, scatter_disks};

/// Jupiter's cloud belts, top to bottom.
pub(super) const JUPITER_BANDS: [u32; 8] = [
    0xF4A460, 0xD2691E, 0xCD853F, 0xDEB887, 0xDAA520, 0xB8860B, 0x8B7355, 0xA0522D,
];

/// Horizontal step of the turbulence columns in pixels.
const TURBULENCE_STEP: usize = 20;

/// The great red spot at its fixed place on the surface.
pub(super) fn great_red_spot(w: f32, h: f32) -> GreatSpot {
    GreatSpot {
        center: Vec2::new(w * 0.65, h * 0.55),
        radii: Vec2::new(40.0, 25.0),
        shadow_offset: Vec2::new(2.0, 2.0),
        shadow_radii: Vec2::new(40.0, 25.0),
        shadow_color: Rgb::new(139, 0, 0).with_alpha(0.8),
        body_stops: vec![
            hex_stop(0.0, 0xFF6347),
            hex_stop(0.5, 0xDC143C),
            hex_stop(1.0, 0x8B0000),
        ],
        core: Some(StormCore {
            offset: Vec2::new(-5.0, -3.0),
            scale: 0.6,
            color: Rgb::new(255, 99, 71).with_alpha(0.6),
        }),
    }
}

pub(super) fn paint_jupiter(canvas: &mut Canvas, rng: &mut impl Rng) {
    let (w, h) = (canvas.width() as f32, canvas.height() as f32);
    let band_h = h / JUPITER_BANDS.len() as f32;
    let swirl = Paint::Solid(Rgb::WHITE.with_alpha(0.2));

    for (i, &hex) in JUPITER_BANDS.iter().enumerate() {
        let y = i as f32 * band_h;
        let band = Paint::Solid(Rgb::from_hex(hex).opaque());
        fill_rect(canvas, 0.0, y, w, band_h, &band);

        // Wavy band edges: columns shifted by a sine of x.
        for x in (0..canvas.width() as usize).step_by(TURBULENCE_STEP) {
            let x = x as f32;
            let turbulence = (x * 0.02 + i as f32).sin() * 5.0;
            fill_rect(
                canvas,
                x,
                y + turbulence,
                TURBULENCE_STEP as f32,
                band_h - turbulence,
                &band,
            );
        }

        for _ in 0..3 {
            let center = Vec2::new(
                rng.random::<f32>() * w,
                y + rng.random::<f32>() * band_h,
            );
            let radius = random_radius(rng, 4.0, 8.0);
            fill_circle(canvas, center, radius, &swirl);
        }
    }

    draw_great_spot(canvas, &great_red_spot(w, h));

    // Small white storms.
    scatter_disks(canvas, rng, 8, 3.0, 6.0, &Rgb::WHITE.with_alpha(0.4).into());
}

pub(super) fn paint_saturn(canvas: &mut Canvas) {
    let (w, h) = (canvas.width() as f32, canvas.height() as f32);
    let gradient = LinearGradient::new(
        Vec2::ZERO,
        Vec2::new(0.0, h),
        vec![
            hex_stop(0.0, 0xF5DEB3),
            hex_stop(0.3, 0xDEB887),
            hex_stop(0.7, 0xD2B48C),
            ColorStop::new(1.0, Rgb::from_hex(0xBC9A6A).opaque()),
        ],
    );
    fill_rect(canvas, 0.0, 0.0, w, h, &Paint::Linear(gradient));
}
