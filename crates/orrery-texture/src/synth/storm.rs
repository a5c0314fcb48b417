//! Nested-ellipse storm feature shared by Jupiter's great red spot and
//! Neptune's great dark spot.

use glam::Vec2;
use orrery_bodies::Rgba;

use crate::canvas::Canvas;
use crate::paint::{ColorStop, Paint, RadialGradient};
use crate::shapes::fill_ellipse;

/// Lighter inner core drawn on top of the storm body.
#[derive(Clone, Debug, PartialEq)]
pub struct StormCore {
    /// Core center relative to the storm center.
    pub offset: Vec2,
    /// Core radii as a fraction of the body radii.
    pub scale: f32,
    pub color: Rgba,
}

/// A great-spot storm: dark offset shadow, gradient body, optional core.
#[derive(Clone, Debug, PartialEq)]
pub struct GreatSpot {
    pub center: Vec2,
    /// Body ellipse radii `(rx, ry)`.
    pub radii: Vec2,
    pub shadow_offset: Vec2,
    pub shadow_radii: Vec2,
    pub shadow_color: Rgba,
    /// Radial stops filling the body, spanning the body's horizontal radius.
    pub body_stops: Vec<ColorStop>,
    pub core: Option<StormCore>,
}

/// Draw the three layers in order: shadow, body, core.
pub fn draw_great_spot(canvas: &mut Canvas, spot: &GreatSpot) {
    fill_ellipse(
        canvas,
        spot.center + spot.shadow_offset,
        spot.shadow_radii.x,
        spot.shadow_radii.y,
        &Paint::Solid(spot.shadow_color),
    );

    let body = RadialGradient::centered(spot.center, spot.radii.x, spot.body_stops.clone());
    fill_ellipse(
        canvas,
        spot.center,
        spot.radii.x,
        spot.radii.y,
        &Paint::Radial(body),
    );

    if let Some(core) = &spot.core {
        fill_ellipse(
            canvas,
            spot.center + core.offset,
            spot.radii.x * core.scale,
            spot.radii.y * core.scale,
            &Paint::Solid(core.color),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_bodies::Rgb;

    fn spot() -> GreatSpot {
        GreatSpot {
            center: Vec2::new(50.0, 30.0),
            radii: Vec2::new(20.0, 12.0),
            shadow_offset: Vec2::new(4.0, 4.0),
            shadow_radii: Vec2::new(20.0, 12.0),
            shadow_color: Rgb::new(0, 0, 0).opaque(),
            body_stops: vec![
                ColorStop::new(0.0, Rgb::new(255, 0, 0).opaque()),
                ColorStop::new(1.0, Rgb::new(0, 0, 255).opaque()),
            ],
            core: Some(StormCore {
                offset: Vec2::ZERO,
                scale: 0.3,
                color: Rgb::new(0, 255, 0).opaque(),
            }),
        }
    }

    #[test]
    fn test_layers_stack_in_order() {
        let mut canvas = Canvas::filled(100, 60, Rgb::WHITE.opaque());
        draw_great_spot(&mut canvas, &spot());

        // Core covers the center.
        assert_eq!(canvas.pixel(50, 30), [0, 255, 0, 255]);
        // Body gradient between the core and the rim: red-to-blue mix.
        let [r, g, b, _] = canvas.pixel(62, 30);
        assert_eq!(g, 0);
        assert!(r > 0 && b > 0, "body pixel {r},{g},{b}");
        // Shadow peeks out below-right of the body only.
        assert_eq!(canvas.pixel(72, 36), [0, 0, 0, 255]);
        assert_eq!(canvas.pixel(28, 24), [255, 255, 255, 255]);
    }

    #[test]
    fn test_spot_without_core() {
        let mut s = spot();
        s.core = None;
        let mut canvas = Canvas::filled(100, 60, Rgb::WHITE.opaque());
        draw_great_spot(&mut canvas, &s);
        let [r, g, b, a] = canvas.pixel(50, 30);
        assert!(r > 240 && g == 0 && b < 15 && a == 255, "center {r},{g},{b},{a}");
    }
}
