//! Fill styles: solid colours and linear/radial colour-stop gradients.

use glam::Vec2;
use orrery_bodies::Rgba;

/// A colour pinned at a normalized offset along a gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    /// Position along the gradient in `[0, 1]`.
    pub offset: f32,
    pub color: Rgba,
}

impl ColorStop {
    pub const fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Interpolate a sorted stop list at `t`. Values outside the stop range take
/// the nearest end colour.
fn sample_stops(stops: &[ColorStop], t: f32) -> Rgba {
    let Some(first) = stops.first() else {
        return Rgba::TRANSPARENT;
    };
    if t <= first.offset {
        return first.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            if span <= f32::EPSILON {
                return b.color;
            }
            return a.color.lerp(b.color, (t - a.offset) / span);
        }
    }
    stops[stops.len() - 1].color
}

/// Gradient along the line from `start` to `end`.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    pub fn sample(&self, p: Vec2) -> Rgba {
        let axis = self.end - self.start;
        let len_sq = axis.length_squared();
        let t = if len_sq > 0.0 {
            (p - self.start).dot(axis) / len_sq
        } else {
            0.0
        };
        sample_stops(&self.stops, t)
    }
}

/// Gradient between two concentric circles around `center`.
///
/// Offset 0 sits on `inner_radius`, offset 1 on `outer_radius`; everything
/// inside the inner circle takes the first stop and everything outside the
/// outer circle the last.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    pub fn new(center: Vec2, inner_radius: f32, outer_radius: f32, stops: Vec<ColorStop>) -> Self {
        Self {
            center,
            inner_radius,
            outer_radius,
            stops,
        }
    }

    /// Gradient that starts at the center point itself.
    pub fn centered(center: Vec2, radius: f32, stops: Vec<ColorStop>) -> Self {
        Self::new(center, 0.0, radius, stops)
    }

    pub fn sample(&self, p: Vec2) -> Rgba {
        let span = self.outer_radius - self.inner_radius;
        let d = p.distance(self.center);
        let t = if span > 0.0 {
            (d - self.inner_radius) / span
        } else {
            0.0
        };
        sample_stops(&self.stops, t)
    }
}

/// How a shape's interior is coloured.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Linear(LinearGradient),
    Radial(RadialGradient),
}

impl Paint {
    /// Colour at canvas position `p` (pixel-center coordinates).
    pub fn color_at(&self, p: Vec2) -> Rgba {
        match self {
            Paint::Solid(c) => *c,
            Paint::Linear(g) => g.sample(p),
            Paint::Radial(g) => g.sample(p),
        }
    }
}

impl From<Rgba> for Paint {
    fn from(c: Rgba) -> Self {
        Paint::Solid(c)
    }
}

impl From<LinearGradient> for Paint {
    fn from(g: LinearGradient) -> Self {
        Paint::Linear(g)
    }
}

impl From<RadialGradient> for Paint {
    fn from(g: RadialGradient) -> Self {
        Paint::Radial(g)
    }
}
