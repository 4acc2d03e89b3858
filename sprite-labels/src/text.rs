//! Text measurement and rasterization seams
//!
//! [`crate::TextBillboardFactory`] never talks to a font library directly. It
//! measures through a [`TextMeasurer`] and draws through a
//! [`SurfaceRasterizer`], so tests can swap in fakes and the real
//! [`crate::GlyphBackend`] stays a plain implementation of both.

use crate::style::{Rgba, TextStyle};

/// Measures text without needing a destination surface.
pub trait TextMeasurer {
    /// Width in pixels that `text` occupies when drawn in `style`.
    fn measure(&self, text: &str, style: &TextStyle) -> f32;
}

/// Draws text onto a freshly allocated surface.
pub trait SurfaceRasterizer {
    /// Allocates a `width` x `height` surface, fills it with the style's
    /// background and draws `text` in the foreground color with its baseline
    /// at [`TextStyle::baseline`].
    fn rasterize(&self, text: &str, style: &TextStyle, width: u32, height: u32) -> RasterSurface;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, style: &TextStyle) -> f32 {
        (**self).measure(text, style)
    }
}

impl<T: SurfaceRasterizer + ?Sized> SurfaceRasterizer for &T {
    fn rasterize(&self, text: &str, style: &TextStyle, width: u32, height: u32) -> RasterSurface {
        (**self).rasterize(text, style, width, height)
    }
}

/// Offscreen RGBA8 pixel buffer, row-major, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterSurface {
    /// Allocates a fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Fills the whole surface with a solid color.
    pub fn fill(&mut self, color: Rgba) {
        for pixel in self.pixels.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color);
        }
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let offset = self.offset(x as i64, y as i64)?;
        let mut pixel = [0; 4];
        pixel.copy_from_slice(&self.pixels[offset..offset + 4]);
        Some(pixel)
    }

    /// Blends `color` over the pixel at `(x, y)` with the given coverage
    /// (0.0 leaves the pixel untouched, 1.0 replaces it). Coordinates outside
    /// the surface are ignored.
    pub fn blend(&mut self, x: i32, y: i32, color: Rgba, coverage: f32) {
        let Some(offset) = self.offset(x as i64, y as i64) else {
            return;
        };
        let coverage = coverage.clamp(0.0, 1.0);
        for (dst, src) in self.pixels[offset..offset + 4].iter_mut().zip(color) {
            let mixed = *dst as f32 + (src as f32 - *dst as f32) * coverage;
            *dst = mixed.round() as u8;
        }
    }

    fn offset(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{BLACK, WHITE};

    #[test]
    fn test_new_surface_is_transparent() {
        let surface = RasterSurface::new(3, 2);
        assert_eq!(surface.pixels().len(), 3 * 2 * 4);
        assert_eq!(surface.pixel(2, 1), Some([0, 0, 0, 0]));
        assert_eq!(surface.pixel(3, 0), None);
    }

    #[test]
    fn test_fill_then_blend() {
        let mut surface = RasterSurface::new(4, 4);
        surface.fill(WHITE);
        surface.blend(1, 1, BLACK, 1.0);
        surface.blend(2, 1, BLACK, 0.5);
        surface.blend(3, 1, BLACK, 0.0);

        assert_eq!(surface.pixel(1, 1), Some(BLACK));
        assert_eq!(surface.pixel(2, 1), Some([128, 128, 128, 255]));
        assert_eq!(surface.pixel(3, 1), Some(WHITE));
    }

    #[test]
    fn test_blend_outside_is_ignored() {
        let mut surface = RasterSurface::new(2, 2);
        surface.fill(WHITE);
        surface.blend(-1, 0, BLACK, 1.0);
        surface.blend(0, 2, BLACK, 1.0);
        assert!(surface.pixels().iter().all(|&b| b == 255));
    }
}
