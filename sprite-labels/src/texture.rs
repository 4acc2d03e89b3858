//! Texture - immutable pixel snapshot sampled by a sprite material

use crate::text::RasterSurface;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique texture identifier, used by the renderer to key GPU uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(u64);

impl TextureId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// RGBA8 image taken from a [`RasterSurface`].
///
/// The snapshot is one-shot: there is no way to write new pixels into an
/// existing texture, so the GPU copy is uploaded exactly once.
#[derive(Debug, PartialEq, Eq)]
pub struct Texture {
    id: TextureId,
    width: u32,
    height: u32,
    pixels: Box<[u8]>,
}

impl Texture {
    /// Consumes the surface; the texture keeps only its pixels.
    pub fn from_surface(surface: RasterSurface) -> Self {
        let width = surface.width();
        let height = surface.height();
        Self {
            id: TextureId::next(),
            width,
            height,
            pixels: surface.into_pixels().into_boxed_slice(),
        }
    }

    pub fn id(&self) -> TextureId {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tightly packed RGBA8 rows, top row first.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Width over height of the pixel data.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}
