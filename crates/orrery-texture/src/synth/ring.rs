//! Saturn's ring texture: a radial band fading out at both edges.

use glam::Vec2;
use orrery_bodies::Rgb;

use crate::canvas::Canvas;
use crate::paint::{ColorStop, Paint, RadialGradient};
use crate::shapes::fill_rect;

/// Inner radius of the ring annulus on the 256×256 canvas.
pub(super) const RING_INNER: f32 = 50.0;

/// Concentric ring bands fading out at both edges. The outer edge reaches
/// the canvas border, so the corners stay clear.
pub(super) fn paint_ring(canvas: &mut Canvas, ring: Rgb) {
    let (w, h) = (canvas.width() as f32, canvas.height() as f32);
    let dust = Rgb::new(139, 69, 19);
    let gradient = RadialGradient::new(
        Vec2::new(w / 2.0, h / 2.0),
        RING_INNER,
        w / 2.0,
        vec![
            ColorStop::new(0.0, ring.with_alpha(0.0)),
            ColorStop::new(0.3, ring.with_alpha(0.8)),
            ColorStop::new(0.5, Rgb::new(160, 82, 45).with_alpha(0.6)),
            ColorStop::new(0.7, dust.with_alpha(0.4)),
            ColorStop::new(1.0, dust.with_alpha(0.0)),
        ],
    );
    fill_rect(canvas, 0.0, 0.0, w, h, &Paint::Radial(gradient));
}
