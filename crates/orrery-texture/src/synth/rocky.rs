//! Cratered rocky bodies: Mercury and Mars.

use glam::Vec2;
use orrery_bodies::{Rgb, Rgba};
use rand::Rng;

use crate::canvas::Canvas;
use crate::paint::Paint;
use crate::shapes::{Path, fill_circle, fill_path, stroke_circle, stroke_path};

use super::{fill_radial_base, hex_stop, random_point, random_radius, scatter_disks};

/// Parameters of a scattered crater population.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CraterField {
    pub count: usize,
    pub min_radius: f32,
    pub radius_span: f32,
    /// Crater floor, darker than the surrounding ground.
    pub floor: Rgba,
    /// Rim outline, lighter than the floor.
    pub rim: Rgba,
    /// Rim circle radius relative to the floor radius.
    pub rim_scale: f32,
    pub rim_width: f32,
}

/// Mercury is the most heavily cratered surface.
pub const MERCURY_CRATERS: CraterField = CraterField {
    count: 35,
    min_radius: 3.0,
    radius_span: 12.0,
    floor: Rgb::from_hex(0x555555).opaque(),
    rim: Rgb::from_hex(0x999999).opaque(),
    rim_scale: 1.2,
    rim_width: 1.0,
};

pub const MARS_CRATERS: CraterField = CraterField {
    count: 20,
    min_radius: 5.0,
    radius_span: 10.0,
    floor: Rgb::from_hex(0x8B4513).opaque(),
    rim: Rgb::from_hex(0xCD853F).opaque(),
    rim_scale: 1.1,
    rim_width: 2.0,
};

fn scatter_craters(canvas: &mut Canvas, rng: &mut impl Rng, field: &CraterField) {
    let floor = Paint::Solid(field.floor);
    let rim = Paint::Solid(field.rim);
    for _ in 0..field.count {
        let center = random_point(rng, canvas);
        let radius = random_radius(rng, field.min_radius, field.radius_span);
        fill_circle(canvas, center, radius, &floor);
        stroke_circle(canvas, center, radius * field.rim_scale, field.rim_width, &rim);
    }
}

pub(super) fn paint_mercury(canvas: &mut Canvas, rng: &mut impl Rng) {
    fill_radial_base(
        canvas,
        vec![
            hex_stop(0.0, 0xB8B8B8),
            hex_stop(0.3, 0xA0A0A0),
            hex_stop(0.6, 0x808080),
            hex_stop(1.0, 0x606060),
        ],
    );
    scatter_craters(canvas, rng, &MERCURY_CRATERS);
    // Smooth lava plains.
    scatter_disks(canvas, rng, 8, 15.0, 25.0, &Rgb::new(96, 96, 96).with_alpha(0.3).into());
}

pub(super) fn paint_mars(canvas: &mut Canvas, rng: &mut impl Rng) {
    let (w, h) = (canvas.width() as f32, canvas.height() as f32);
    fill_radial_base(
        canvas,
        vec![
            hex_stop(0.0, 0xFF6347),
            hex_stop(0.3, 0xFF4500),
            hex_stop(0.6, 0xDC143C),
            hex_stop(1.0, 0xB22222),
        ],
    );

    // Impact basins.
    scatter_disks(canvas, rng, 25, 8.0, 20.0, &Rgb::new(139, 69, 19).with_alpha(0.4).into());
    scatter_craters(canvas, rng, &MARS_CRATERS);

    // Polar caps: half-disks hanging from the top edge and rising from the bottom.
    let ice = Paint::Solid(Rgb::WHITE.with_alpha(0.9));
    let north = Path::new()
        .arc(Vec2::new(w / 2.0, 0.0), w * 0.15, 0.0, std::f32::consts::PI)
        .close();
    fill_path(canvas, &north, &ice);
    let south = Path::new()
        .arc(
            Vec2::new(w / 2.0, h),
            w * 0.12,
            std::f32::consts::PI,
            std::f32::consts::TAU,
        )
        .close();
    fill_path(canvas, &south, &ice);

    // The great canyon.
    let canyon = Path::new()
        .move_to(Vec2::new(w * 0.3, h * 0.4))
        .quad_to(Vec2::new(w * 0.5, h * 0.45), Vec2::new(w * 0.7, h * 0.5));
    stroke_path(canvas, &canyon, 4.0, &Rgb::from_hex(0x654321).opaque().into());

    // Lighter dust.
    scatter_disks(canvas, rng, 15, 10.0, 15.0, &Rgb::new(205, 133, 63).with_alpha(0.3).into());
}
