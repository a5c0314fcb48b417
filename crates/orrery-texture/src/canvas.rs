//! A drawable RGBA pixel buffer with straight-alpha "source-over" compositing.

use image::RgbaImage;
use orrery_bodies::Rgba;

/// A 2D drawing surface stored as row-major 8-bit RGBA pixels.
///
/// Every primitive in [`crate::shapes`] composites onto the canvas with
/// [`Canvas::blend_pixel`], so overlapping translucent shapes accumulate the
/// way a 2D canvas context would.
#[derive(Clone, Debug)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// Create a canvas filled with a single colour.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        let mut canvas = Self::new(width, height);
        canvas.fill(color);
        canvas
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Overwrite every pixel with `color`, ignoring what was there.
    pub fn fill(&mut self, color: Rgba) {
        let px = to_pixel(color);
        for p in self.image.pixels_mut() {
            *p = px;
        }
    }

    /// Read a pixel's RGBA bytes.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    /// Composite `src` over the pixel at `(x, y)`.
    ///
    /// Out-of-bounds coordinates are ignored.
    pub fn blend_pixel(&mut self, x: u32, y: u32, src: Rgba) {
        if x >= self.width() || y >= self.height() {
            return;
        }
        let sa = src.a.clamp(0.0, 1.0);
        if sa <= 0.0 {
            return;
        }
        let dst = self.image.get_pixel_mut(x, y);
        if sa >= 1.0 {
            *dst = to_pixel(src);
            return;
        }

        let da = dst.0[3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        let mix = |s: u8, d: u8| {
            let c = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
            c.round().clamp(0.0, 255.0) as u8
        };
        dst.0 = [
            mix(src.r, dst.0[0]),
            mix(src.g, dst.0[1]),
            mix(src.b, dst.0[2]),
            (out_a * 255.0).round() as u8,
        ];
    }

    /// Borrow the underlying image.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

fn to_pixel(c: Rgba) -> image::Rgba<u8> {
    image::Rgba([c.r, c.g, c.b, (c.a.clamp(0.0, 1.0) * 255.0).round() as u8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_bodies::Rgb;

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = Canvas::new(16, 8);
        assert_eq!(canvas.dimensions(), (16, 8));
        assert!(canvas.image().pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn test_opaque_blend_replaces() {
        let mut canvas = Canvas::filled(4, 4, Rgb::new(10, 20, 30).opaque());
        canvas.blend_pixel(1, 1, Rgb::new(200, 100, 50).opaque());
        assert_eq!(canvas.pixel(1, 1), [200, 100, 50, 255]);
        assert_eq!(canvas.pixel(0, 0), [10, 20, 30, 255]);
    }

    #[test]
    fn test_translucent_over_opaque_stays_opaque() {
        let mut canvas = Canvas::filled(1, 1, Rgb::BLACK.opaque());
        canvas.blend_pixel(0, 0, Rgb::WHITE.with_alpha(0.5));
        let [r, g, b, a] = canvas.pixel(0, 0);
        assert_eq!(a, 255);
        assert!((127..=128).contains(&r), "r = {r}");
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn test_translucent_over_transparent_keeps_source_colour() {
        let mut canvas = Canvas::new(1, 1);
        canvas.blend_pixel(0, 0, Rgb::WHITE.with_alpha(0.3));
        canvas.blend_pixel(0, 0, Rgb::WHITE.with_alpha(0.3));
        let [r, g, b, a] = canvas.pixel(0, 0);
        assert_eq!([r, g, b], [255, 255, 255]);
        // 1 - 0.7^2 = 0.51
        assert!((129..=131).contains(&a), "alpha = {a}");
    }

    #[test]
    fn test_out_of_bounds_blend_is_ignored() {
        let mut canvas = Canvas::new(2, 2);
        canvas.blend_pixel(5, 0, Rgb::WHITE.opaque());
        canvas.blend_pixel(0, 9, Rgb::WHITE.opaque());
        assert!(canvas.image().pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }
}
