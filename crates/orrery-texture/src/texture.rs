//! Finished, immutable texture buffers.

use image::RgbaImage;
use orrery_bodies::Rgb;

use crate::canvas::Canvas;

/// What a texture is wrapped onto, which fixes its dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureCategory {
    /// Equirectangular planet surface.
    Surface,
    /// Square texture sampled by a flat ring.
    Ring,
    /// Translucent overlay for a slightly larger cloud shell.
    Clouds,
    /// Soft round sprite used for each background star.
    StarSprite,
}

impl TextureCategory {
    /// `(width, height)` in pixels.
    pub const fn dimensions(self) -> (u32, u32) {
        match self {
            TextureCategory::Surface => (512, 256),
            TextureCategory::Ring => (256, 256),
            TextureCategory::Clouds => (256, 128),
            TextureCategory::StarSprite => (32, 32),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TextureCategory::Surface => "surface",
            TextureCategory::Ring => "ring",
            TextureCategory::Clouds => "clouds",
            TextureCategory::StarSprite => "star",
        }
    }

    /// A blank canvas of this category's size.
    pub fn canvas(self) -> Canvas {
        let (w, h) = self.dimensions();
        Canvas::new(w, h)
    }
}

/// A synthesized pixel buffer. Never modified after synthesis.
#[derive(Clone, Debug)]
pub struct SurfaceTexture {
    category: TextureCategory,
    image: RgbaImage,
}

impl SurfaceTexture {
    pub fn new(category: TextureCategory, canvas: Canvas) -> Self {
        debug_assert_eq!(canvas.dimensions(), category.dimensions());
        Self {
            category,
            image: canvas.into_image(),
        }
    }

    pub fn category(&self) -> TextureCategory {
        self.category
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Raw RGBA8 bytes, row-major, ready for GPU upload.
    pub fn as_rgba8(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Whether every pixel has exactly this opaque colour.
    pub fn is_uniform(&self, color: Rgb) -> bool {
        let expected = [color.r, color.g, color.b, 255];
        self.image.pixels().all(|p| p.0 == expected)
    }

    /// Number of distinct RGB values (alpha ignored).
    pub fn unique_color_count(&self) -> usize {
        let mut colors = std::collections::HashSet::new();
        for p in self.image.pixels() {
            colors.insert([p.0[0], p.0[1], p.0[2]]);
        }
        colors.len()
    }
}
