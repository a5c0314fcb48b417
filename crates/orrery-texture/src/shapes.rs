//! Rasterized drawing primitives: rectangles, circles, ellipses, and paths.
//!
//! Coverage is decided per pixel center (no anti-aliasing). Each primitive
//! composites a pixel at most once, so a translucent shape never darkens
//! itself where its own parts overlap.

use glam::Vec2;

use crate::canvas::Canvas;
use crate::paint::Paint;

/// Segments used to flatten one quadratic curve.
const CURVE_SEGMENTS: usize = 16;
/// Segments used to flatten a full circle arc.
const ARC_SEGMENTS: usize = 64;

/// Clamp a float bounding box to canvas pixel indices. `None` if empty.
fn pixel_bounds(canvas: &Canvas, min: Vec2, max: Vec2) -> Option<(u32, u32, u32, u32)> {
    let x0 = min.x.floor().max(0.0);
    let y0 = min.y.floor().max(0.0);
    let x1 = max.x.ceil().min(canvas.width() as f32);
    let y1 = max.y.ceil().min(canvas.height() as f32);
    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
}

/// Visit every pixel in the bounding box whose center satisfies `inside`.
fn fill_where(
    canvas: &mut Canvas,
    min: Vec2,
    max: Vec2,
    paint: &Paint,
    inside: impl Fn(Vec2) -> bool,
) {
    let Some((x0, y0, x1, y1)) = pixel_bounds(canvas, min, max) else {
        return;
    };
    for y in y0..y1 {
        for x in x0..x1 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            if inside(p) {
                canvas.blend_pixel(x, y, paint.color_at(p));
            }
        }
    }
}

/// Fill an axis-aligned rectangle. Negative sizes extend left/up.
pub fn fill_rect(canvas: &mut Canvas, x: f32, y: f32, w: f32, h: f32, paint: &Paint) {
    let min = Vec2::new(x.min(x + w), y.min(y + h));
    let max = Vec2::new(x.max(x + w), y.max(y + h));
    fill_where(canvas, min, max, paint, |p| {
        p.x >= min.x && p.x < max.x && p.y >= min.y && p.y < max.y
    });
}

/// Fill an axis-aligned ellipse.
pub fn fill_ellipse(canvas: &mut Canvas, center: Vec2, rx: f32, ry: f32, paint: &Paint) {
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let r = Vec2::new(rx, ry);
    fill_where(canvas, center - r, center + r, paint, |p| {
        let d = (p - center) / r;
        d.length_squared() <= 1.0
    });
}

/// Fill a disk.
pub fn fill_circle(canvas: &mut Canvas, center: Vec2, radius: f32, paint: &Paint) {
    fill_ellipse(canvas, center, radius, radius, paint);
}

/// Stroke a circle outline of the given line width, centred on `radius`.
pub fn stroke_circle(canvas: &mut Canvas, center: Vec2, radius: f32, width: f32, paint: &Paint) {
    let half = width * 0.5;
    let reach = Vec2::splat(radius + half);
    fill_where(canvas, center - reach, center + reach, paint, |p| {
        (p.distance(center) - radius).abs() <= half
    });
}

/// A polyline path made of subpaths, built with canvas-style commands.
///
/// Curves and arcs are flattened to line segments as they are added.
#[derive(Clone, Debug, Default)]
pub struct Path {
    subpaths: Vec<Subpath>,
}

#[derive(Clone, Debug, Default)]
struct Subpath {
    points: Vec<Vec2>,
    closed: bool,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new subpath at `p`.
    pub fn move_to(mut self, p: Vec2) -> Self {
        self.subpaths.push(Subpath {
            points: vec![p],
            closed: false,
        });
        self
    }

    pub fn line_to(mut self, p: Vec2) -> Self {
        self.current().points.push(p);
        self
    }

    /// Quadratic Bézier from the current point through control `c` to `end`.
    pub fn quad_to(mut self, c: Vec2, end: Vec2) -> Self {
        let sub = self.current();
        let start = sub.points.last().copied().unwrap_or(c);
        for i in 1..=CURVE_SEGMENTS {
            let t = i as f32 / CURVE_SEGMENTS as f32;
            let u = 1.0 - t;
            sub.points.push(start * (u * u) + c * (2.0 * u * t) + end * (t * t));
        }
        self
    }

    /// Circular arc from angle `start` to `end` (radians, clockwise in canvas
    /// space where +y points down). Connects from the current point if any.
    pub fn arc(mut self, center: Vec2, radius: f32, start: f32, end: f32) -> Self {
        let sweep = end - start;
        let steps = ((sweep.abs() / std::f32::consts::TAU) * ARC_SEGMENTS as f32)
            .ceil()
            .max(1.0) as usize;
        let sub = self.current();
        for i in 0..=steps {
            let a = start + sweep * (i as f32 / steps as f32);
            sub.points.push(center + Vec2::new(a.cos(), a.sin()) * radius);
        }
        self
    }

    /// Close the current subpath back to its first point.
    pub fn close(mut self) -> Self {
        self.current().closed = true;
        self
    }

    fn current(&mut self) -> &mut Subpath {
        if self.subpaths.is_empty() {
            self.subpaths.push(Subpath::default());
        }
        let last = self.subpaths.len() - 1;
        &mut self.subpaths[last]
    }

    /// Every segment of the path; filled paths treat each subpath as closed.
    fn segments(&self, force_close: bool) -> Vec<(Vec2, Vec2)> {
        let mut segs = Vec::new();
        for sub in &self.subpaths {
            for pair in sub.points.windows(2) {
                segs.push((pair[0], pair[1]));
            }
            if (sub.closed || force_close) && sub.points.len() > 2 {
                segs.push((sub.points[sub.points.len() - 1], sub.points[0]));
            }
        }
        segs
    }

    fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let mut points = self.subpaths.iter().flat_map(|s| s.points.iter().copied());
        let first = points.next()?;
        Some(points.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }
}

/// Non-zero winding number of `p` with respect to closed polygon edges.
fn winding(p: Vec2, segs: &[(Vec2, Vec2)]) -> i32 {
    let mut w = 0;
    for &(a, b) in segs {
        let cross = (b - a).perp_dot(p - a);
        if a.y <= p.y {
            if b.y > p.y && cross > 0.0 {
                w += 1;
            }
        } else if b.y <= p.y && cross < 0.0 {
            w -= 1;
        }
    }
    w
}

fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    let t = if len_sq > 0.0 {
        ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    p.distance(a + ab * t)
}

/// Fill the interior of a path using the non-zero winding rule.
pub fn fill_path(canvas: &mut Canvas, path: &Path, paint: &Paint) {
    let Some((min, max)) = path.bounds() else {
        return;
    };
    let segs = path.segments(true);
    fill_where(canvas, min, max, paint, |p| winding(p, &segs) != 0);
}

/// Stroke a path's outline with the given line width.
pub fn stroke_path(canvas: &mut Canvas, path: &Path, width: f32, paint: &Paint) {
    let Some((min, max)) = path.bounds() else {
        return;
    };
    let half = width * 0.5;
    let segs = path.segments(false);
    let pad = Vec2::splat(half);
    fill_where(canvas, min - pad, max + pad, paint, |p| {
        segs.iter()
            .any(|&(a, b)| distance_to_segment(p, a, b) <= half)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_bodies::Rgb;

    fn count_opaque(canvas: &Canvas) -> usize {
        canvas.image().pixels().filter(|p| p.0[3] > 0).count()
    }

    #[test]
    fn test_fill_rect_covers_exact_area() {
        let mut canvas = Canvas::new(20, 20);
        fill_rect(&mut canvas, 2.0, 3.0, 5.0, 4.0, &Rgb::WHITE.opaque().into());
        assert_eq!(count_opaque(&canvas), 20);
        assert_eq!(canvas.pixel(2, 3)[3], 255);
        assert_eq!(canvas.pixel(6, 6)[3], 255);
        assert_eq!(canvas.pixel(7, 6)[3], 0);
    }

    #[test]
    fn test_fill_rect_negative_height_extends_up() {
        let mut canvas = Canvas::new(10, 10);
        fill_rect(&mut canvas, 0.0, 5.0, 2.0, -3.0, &Rgb::WHITE.opaque().into());
        assert_eq!(count_opaque(&canvas), 6);
        assert_eq!(canvas.pixel(0, 2)[3], 255);
        assert_eq!(canvas.pixel(0, 5)[3], 0);
    }

    #[test]
    fn test_fill_circle_area_close_to_pi_r_squared() {
        let mut canvas = Canvas::new(64, 64);
        fill_circle(&mut canvas, Vec2::splat(32.0), 20.0, &Rgb::WHITE.opaque().into());
        let expected = std::f32::consts::PI * 400.0;
        let got = count_opaque(&canvas) as f32;
        assert!((got - expected).abs() / expected < 0.03, "area {got} vs {expected}");
    }

    #[test]
    fn test_shapes_clip_at_canvas_edges() {
        let mut canvas = Canvas::new(32, 16);
        fill_circle(&mut canvas, Vec2::new(16.0, 0.0), 10.0, &Rgb::WHITE.opaque().into());
        fill_circle(&mut canvas, Vec2::new(-50.0, -50.0), 5.0, &Rgb::WHITE.opaque().into());
        assert!(count_opaque(&canvas) > 0);
        assert_eq!(canvas.pixel(16, 15)[3], 0);
    }

    #[test]
    fn test_stroke_circle_leaves_center_empty() {
        let mut canvas = Canvas::new(40, 40);
        stroke_circle(&mut canvas, Vec2::splat(20.0), 10.0, 2.0, &Rgb::WHITE.opaque().into());
        assert_eq!(canvas.pixel(20, 20)[3], 0);
        assert_eq!(canvas.pixel(29, 19)[3], 255, "ring at radius ~10");
    }

    #[test]
    fn test_fill_path_triangle() {
        let mut canvas = Canvas::new(20, 20);
        let tri = Path::new()
            .move_to(Vec2::new(0.0, 0.0))
            .line_to(Vec2::new(20.0, 0.0))
            .line_to(Vec2::new(0.0, 20.0))
            .close();
        fill_path(&mut canvas, &tri, &Rgb::WHITE.opaque().into());
        assert_eq!(canvas.pixel(2, 2)[3], 255);
        assert_eq!(canvas.pixel(18, 18)[3], 0);
        let area = count_opaque(&canvas) as f32;
        assert!((area - 200.0).abs() < 25.0, "triangle area {area}");
    }

    #[test]
    fn test_translucent_stroke_blends_once_at_joints() {
        let mut canvas = Canvas::filled(30, 30, Rgb::BLACK.opaque());
        let zigzag = Path::new()
            .move_to(Vec2::new(2.0, 15.0))
            .line_to(Vec2::new(15.0, 15.0))
            .line_to(Vec2::new(28.0, 15.0));
        stroke_path(&mut canvas, &zigzag, 2.0, &Rgb::WHITE.with_alpha(0.5).into());
        // Joint pixel gets the same single blend as the rest of the line.
        assert_eq!(canvas.pixel(15, 15), canvas.pixel(8, 15));
    }

    #[test]
    fn test_quad_curve_ends_at_endpoint() {
        let path = Path::new()
            .move_to(Vec2::ZERO)
            .quad_to(Vec2::new(10.0, 10.0), Vec2::new(20.0, 0.0));
        let segs = path.segments(false);
        assert_eq!(segs.len(), CURVE_SEGMENTS);
        let last = segs.last().unwrap().1;
        assert!(last.distance(Vec2::new(20.0, 0.0)) < 1e-4);
    }
}
