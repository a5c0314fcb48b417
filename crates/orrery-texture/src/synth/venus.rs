//! Venus: thick pale atmosphere with spiralling cloud systems.

use std::f32::consts::TAU;

use glam::Vec2;
use orrery_bodies::Rgb;
use rand::Rng;

use crate::canvas::Canvas;
use crate::paint::Paint;
use crate::shapes::{fill_circle, fill_rect};

use super::{fill_radial_base, hex_stop, random_point, random_radius, scatter_disks};

const SPIRAL_SYSTEMS: usize = 15;
const PUFFS_PER_SPIRAL: usize = 20;

/// Position of puff `j` along spiral system `i`, relative to its origin.
/// Two full turns over the puff sequence, rotated by the system index.
fn spiral_offset(i: usize, j: usize) -> Vec2 {
    let angle = j as f32 / PUFFS_PER_SPIRAL as f32 * 2.0 * TAU + i as f32;
    let radius = j as f32 * 3.0;
    Vec2::new(angle.cos(), angle.sin()) * radius
}

pub(super) fn paint_venus(canvas: &mut Canvas, rng: &mut impl Rng) {
    let w = canvas.width() as f32;
    fill_radial_base(
        canvas,
        vec![
            hex_stop(0.0, 0xFFF8DC),
            hex_stop(0.3, 0xF5DEB3),
            hex_stop(0.6, 0xDDBF94),
            hex_stop(1.0, 0xD2B48C),
        ],
    );

    let puff = Paint::Solid(Rgb::WHITE.with_alpha(0.2));
    for i in 0..SPIRAL_SYSTEMS {
        let origin = random_point(rng, canvas);
        for j in 0..PUFFS_PER_SPIRAL {
            let radius = random_radius(rng, 4.0, 8.0);
            fill_circle(canvas, origin + spiral_offset(i, j), radius, &puff);
        }
    }

    // Wavy atmospheric bands.
    let band = Paint::Solid(Rgb::new(210, 180, 140).with_alpha(0.3));
    for y in (0..canvas.height() as usize).step_by(40) {
        let y = y as f32;
        fill_rect(canvas, 0.0, y + (y * 0.1).sin() * 10.0, w, 15.0, &band);
    }

    // Bright sunlit patches.
    scatter_disks(canvas, rng, 8, 10.0, 20.0, &Rgb::new(255, 248, 220).with_alpha(0.4).into());
}
