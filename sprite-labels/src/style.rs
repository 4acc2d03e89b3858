//! Fixed label styling

use std::fmt;

/// 8-bit RGBA color, the pixel format of [`crate::RasterSurface`].
pub type Rgba = [u8; 4];

/// Extra height below the font size for descenders (g, j, p, q).
pub const DESCENDER_FACTOR: f32 = 1.4;

pub const WHITE: Rgba = [255, 255, 255, 255];
pub const BLACK: Rgba = [0, 0, 0, 255];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Typeface, size and colors used to draw a label.
///
/// Labels only ever use [`TextStyle::LABEL`]; the struct exists so measuring
/// and rasterizing backends receive the style explicitly instead of relying on
/// state left behind by an earlier call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Requested typeface. Backends with a single face resolve any name to it.
    pub typeface: &'static str,
    pub weight: FontWeight,
    /// Font size in pixels.
    pub size: f32,
    pub background: Rgba,
    pub foreground: Rgba,
}

impl TextStyle {
    /// Bold 18px Arial, black on white.
    pub const LABEL: TextStyle = TextStyle {
        typeface: "Arial",
        weight: FontWeight::Bold,
        size: 18.0,
        background: WHITE,
        foreground: BLACK,
    };

    /// Height of a label surface in whole pixels.
    pub fn surface_height(&self) -> u32 {
        (self.size * DESCENDER_FACTOR).ceil() as u32
    }

    /// Baseline offset from the top of the surface.
    pub fn baseline(&self) -> f32 {
        self.size
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::LABEL
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weight = match self.weight {
            FontWeight::Normal => "",
            FontWeight::Bold => "bold ",
        };
        write!(f, "{}{}px {}", weight, self.size, self.typeface)
    }
}
