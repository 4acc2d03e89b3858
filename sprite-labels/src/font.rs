//! Glyph backend using rusttype
//!
//! Implements both [`TextMeasurer`] and [`SurfaceRasterizer`] on top of a
//! single loaded face. The bundled face (DejaVu Sans Bold) stands in for bold
//! Arial; any other font file can be loaded in its place.

use crate::error::LabelError;
use crate::style::TextStyle;
use crate::text::{RasterSurface, SurfaceRasterizer, TextMeasurer};
use rusttype::{point, Font, PositionedGlyph, Scale};
use std::path::Path;

const BUNDLED_FONT: &[u8] = include_bytes!("../assets/DejaVuSans-Bold.ttf");

/// Name of the face compiled into the crate.
pub const BUNDLED_TYPEFACE: &str = "DejaVu Sans Bold";

/// Measures and rasterizes text with one font face.
#[derive(Clone)]
pub struct GlyphBackend {
    font: Font<'static>,
    typeface: String,
}

impl GlyphBackend {
    /// Backend using the bundled bold sans-serif face.
    pub fn bundled() -> Result<Self, LabelError> {
        let font = Font::try_from_bytes(BUNDLED_FONT)
            .ok_or_else(|| LabelError::InvalidFont(BUNDLED_TYPEFACE.to_string()))?;
        Ok(Self {
            font,
            typeface: BUNDLED_TYPEFACE.to_string(),
        })
    }

    /// Backend using font data already in memory (TTF or OTF).
    pub fn from_bytes(typeface: impl Into<String>, data: Vec<u8>) -> Result<Self, LabelError> {
        let typeface = typeface.into();
        let font = Font::try_from_vec(data).ok_or_else(|| LabelError::InvalidFont(typeface.clone()))?;
        Ok(Self { font, typeface })
    }

    /// Backend using a font file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LabelError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| LabelError::FontIo {
            path: path.to_path_buf(),
            source,
        })?;
        let typeface = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        log::info!("Loaded label font {} from {:?}", typeface, path);
        Self::from_bytes(typeface, data)
    }

    /// Loads `path` if given, falling back to the bundled face when it is
    /// missing or unreadable. The fallback changes measured widths, so it is
    /// logged rather than hidden.
    pub fn load_or_bundled(path: Option<&Path>) -> Result<Self, LabelError> {
        match path {
            Some(path) => Self::from_file(path).or_else(|e| {
                log::warn!("{}; falling back to bundled {}", e, BUNDLED_TYPEFACE);
                Self::bundled()
            }),
            None => Self::bundled(),
        }
    }

    /// Name of the loaded face.
    pub fn typeface(&self) -> &str {
        &self.typeface
    }

    fn layout<'a>(&'a self, text: &'a str, style: &TextStyle, baseline: f32) -> impl Iterator<Item = PositionedGlyph<'a>> + 'a {
        self.font
            .layout(text, Scale::uniform(style.size), point(0.0, baseline))
    }
}

impl std::fmt::Debug for GlyphBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphBackend")
            .field("typeface", &self.typeface)
            .finish_non_exhaustive()
    }
}

impl TextMeasurer for GlyphBackend {
    fn measure(&self, text: &str, style: &TextStyle) -> f32 {
        // Pen position after the last glyph, kerning included.
        self.layout(text, style, 0.0)
            .last()
            .map(|glyph| glyph.position().x + glyph.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0)
    }
}

impl SurfaceRasterizer for GlyphBackend {
    fn rasterize(&self, text: &str, style: &TextStyle, width: u32, height: u32) -> RasterSurface {
        let mut surface = RasterSurface::new(width, height);
        surface.fill(style.background);

        for glyph in self.layout(text, style, style.baseline()) {
            let Some(bounds) = glyph.pixel_bounding_box() else {
                continue; // whitespace
            };
            glyph.draw(|x, y, coverage| {
                surface.blend(
                    bounds.min.x + x as i32,
                    bounds.min.y + y as i32,
                    style.foreground,
                    coverage,
                );
            });
        }

        surface
    }
}
