//! Billboard - camera-facing quad carrying a rasterized text label
//!
//! # Example
//!
//! ```rust,ignore
//! use sprite_labels::{GlyphBackend, TextBillboardFactory};
//!
//! let factory = TextBillboardFactory::from_backend(GlyphBackend::bundled()?);
//! let mut label = factory.create_label(" Hello ")?;
//! label.set_position([-25.0, 50.0, 50.0]);
//! ```

use crate::error::LabelError;
use crate::material::SpriteMaterial;
use crate::style::TextStyle;
use crate::text::{SurfaceRasterizer, TextMeasurer};
use crate::texture::Texture;
use glam::{Vec2, Vec3};

/// World-space height of every label.
pub const LABEL_HEIGHT: f32 = 75.0;

/// World units per measured text pixel, horizontally.
pub const WIDTH_SCALE: f32 = 0.5;

/// Widest surface a label may allocate, the default 2D texture limit of
/// common GPUs.
pub const MAX_SURFACE_WIDTH: u32 = 8192;

/// A textured quad that always faces the camera.
///
/// Its scale is fixed at creation: `measured width * WIDTH_SCALE` wide and
/// [`LABEL_HEIGHT`] high, independent of the texture's pixel aspect.
#[derive(Debug)]
pub struct Billboard {
    id: String,
    text: String,
    measured_width: f32,
    position: Vec3,
    scale: Vec2,
    material: SpriteMaterial,
}

impl Billboard {
    fn new(text: &str, measured_width: f32, material: SpriteMaterial) -> Self {
        Self {
            id: generate_id(),
            text: text.to_string(),
            measured_width,
            position: Vec3::ZERO,
            scale: Vec2::new(measured_width * WIDTH_SCALE, LABEL_HEIGHT),
            material,
        }
    }

    /// Get the billboard's ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The text this billboard was rasterized from.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text width in pixels as reported by the measurer.
    pub fn measured_width(&self) -> f32 {
        self.measured_width
    }

    /// Position in world space.
    pub fn translation(&self) -> Vec3 {
        self.position
    }

    /// Set the position in world space.
    pub fn set_position(&mut self, position: [f32; 3]) {
        self.position = Vec3::from_array(position);
    }

    /// Set position with individual components (builder style).
    pub fn position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    /// World-space width and height of the quad.
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn material(&self) -> &SpriteMaterial {
        &self.material
    }

    pub fn texture(&self) -> &Texture {
        self.material.map()
    }
}

/// Builds [`Billboard`]s from strings using the fixed label style.
///
/// Stateless apart from its backends: every call measures, allocates its own
/// surface and produces its own texture.
#[derive(Debug, Clone)]
pub struct TextBillboardFactory<M, R> {
    measurer: M,
    rasterizer: R,
    style: TextStyle,
}

impl<M: TextMeasurer, R: SurfaceRasterizer> TextBillboardFactory<M, R> {
    pub fn new(measurer: M, rasterizer: R) -> Self {
        Self {
            measurer,
            rasterizer,
            style: TextStyle::LABEL,
        }
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    /// Synthesizes a label billboard for `message`.
    ///
    /// The returned billboard sits at the origin; positioning it and adding
    /// it to the scene is up to the caller.
    pub fn create_label(&self, message: &str) -> Result<Billboard, LabelError> {
        if message.is_empty() {
            return Err(LabelError::EmptyMessage);
        }
        let style = &self.style;

        // Measure first: the surface is allocated once, at its final size.
        let measured = self.measurer.measure(message, style);
        if !(measured > 0.0) {
            return Err(LabelError::ZeroWidth {
                message: message.to_string(),
                measured,
            });
        }
        if measured.ceil() > MAX_SURFACE_WIDTH as f32 {
            return Err(LabelError::SurfaceTooLarge {
                width: measured.ceil() as u32,
                max: MAX_SURFACE_WIDTH,
            });
        }
        let width = measured.ceil() as u32;
        let height = style.surface_height();

        let surface = self.rasterizer.rasterize(message, style, width, height);
        if surface.width() != width || surface.height() != height {
            return Err(LabelError::SurfaceMismatch {
                width,
                height,
                actual_width: surface.width(),
                actual_height: surface.height(),
            });
        }

        let billboard = Billboard::new(message, measured, SpriteMaterial::new(Texture::from_surface(surface)));
        log::debug!(
            "Created label {} {:?}: {}x{}px surface, scale {:?}",
            billboard.id,
            message,
            width,
            height,
            billboard.scale
        );
        Ok(billboard)
    }
}

impl<B: TextMeasurer + SurfaceRasterizer + Clone> TextBillboardFactory<B, B> {
    /// Factory whose measurer and rasterizer are the same backend.
    pub fn from_backend(backend: B) -> Self {
        Self::new(backend.clone(), backend)
    }
}

fn generate_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    format!("label-{}", COUNTER.fetch_add(1, Ordering::Relaxed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::RasterSurface;
    use std::cell::RefCell;

    /// Every character is 10px wide.
    struct FixedWidth;

    impl TextMeasurer for FixedWidth {
        fn measure(&self, text: &str, _style: &TextStyle) -> f32 {
            text.chars().count() as f32 * 10.0
        }
    }

    /// Records the calls it receives and returns a filled surface.
    #[derive(Default)]
    struct RecordingRasterizer {
        calls: RefCell<Vec<(String, u32, u32)>>,
    }

    impl SurfaceRasterizer for RecordingRasterizer {
        fn rasterize(&self, text: &str, style: &TextStyle, width: u32, height: u32) -> RasterSurface {
            self.calls.borrow_mut().push((text.to_string(), width, height));
            let mut surface = RasterSurface::new(width, height);
            surface.fill(style.background);
            surface
        }
    }

    struct Constant(f32);

    impl TextMeasurer for Constant {
        fn measure(&self, _text: &str, _style: &TextStyle) -> f32 {
            self.0
        }
    }

    struct WrongSize;

    impl SurfaceRasterizer for WrongSize {
        fn rasterize(&self, _text: &str, _style: &TextStyle, width: u32, height: u32) -> RasterSurface {
            RasterSurface::new(width + 1, height)
        }
    }

    #[test]
    fn test_scale_follows_measured_width() {
        let rasterizer = RecordingRasterizer::default();
        let factory = TextBillboardFactory::new(FixedWidth, &rasterizer);
        let label = factory.create_label("Hello").unwrap();

        assert_eq!(label.measured_width(), 50.0);
        assert_eq!(label.scale(), Vec2::new(25.0, LABEL_HEIGHT));
        assert_eq!(label.translation(), Vec3::ZERO);
        assert_eq!(label.text(), "Hello");
    }

    #[test]
    fn test_surface_sized_from_measurement() {
        let rasterizer = RecordingRasterizer::default();
        let factory = TextBillboardFactory::new(FixedWidth, &rasterizer);
        let label = factory.create_label("abc").unwrap();

        assert_eq!(*rasterizer.calls.borrow(), vec![("abc".to_string(), 30, 26)]);
        assert_eq!((label.texture().width(), label.texture().height()), (30, 26));
    }

    #[test]
    fn test_fractional_width_rounds_up() {
        let rasterizer = RecordingRasterizer::default();
        let factory = TextBillboardFactory::new(Constant(40.25), &rasterizer);
        let label = factory.create_label("x").unwrap();

        assert_eq!(label.texture().width(), 41);
        assert_eq!(label.scale().x, 40.25 * 0.5);
    }

    #[test]
    fn test_empty_message_is_rejected() {
        let rasterizer = RecordingRasterizer::default();
        let factory = TextBillboardFactory::new(FixedWidth, &rasterizer);

        assert!(matches!(factory.create_label(""), Err(LabelError::EmptyMessage)));
        assert!(rasterizer.calls.borrow().is_empty());
    }

    #[test]
    fn test_zero_width_is_rejected() {
        let factory = TextBillboardFactory::new(Constant(0.0), RecordingRasterizer::default());
        assert!(matches!(
            factory.create_label("\u{200b}"),
            Err(LabelError::ZeroWidth { .. })
        ));

        let factory = TextBillboardFactory::new(Constant(f32::NAN), RecordingRasterizer::default());
        assert!(matches!(factory.create_label("x"), Err(LabelError::ZeroWidth { .. })));
    }

    #[test]
    fn test_oversized_surface_is_rejected() {
        let factory = TextBillboardFactory::new(Constant(8192.5), RecordingRasterizer::default());
        match factory.create_label("wide") {
            Err(LabelError::SurfaceTooLarge { width, max }) => {
                assert_eq!(width, 8193);
                assert_eq!(max, MAX_SURFACE_WIDTH);
            }
            other => panic!("Expected SurfaceTooLarge, got {:?}", other),
        }

        let factory = TextBillboardFactory::new(Constant(8192.0), RecordingRasterizer::default());
        assert!(factory.create_label("widest").is_ok());
    }

    #[test]
    fn test_wrong_sized_surface_is_rejected() {
        let factory = TextBillboardFactory::new(FixedWidth, WrongSize);
        assert!(matches!(
            factory.create_label("ab"),
            Err(LabelError::SurfaceMismatch { width: 20, actual_width: 21, .. })
        ));
    }

    #[test]
    fn test_labels_do_not_share_textures() {
        let rasterizer = RecordingRasterizer::default();
        let factory = TextBillboardFactory::new(FixedWidth, &rasterizer);
        let a = factory.create_label("X").unwrap();
        let b = factory.create_label("X").unwrap();

        assert_ne!(a.id(), b.id());
        assert_ne!(a.texture().id(), b.texture().id());
        assert_ne!(a.texture().pixels().as_ptr(), b.texture().pixels().as_ptr());
        assert_eq!(a.texture().pixels(), b.texture().pixels());
    }

    #[test]
    fn test_position_builder() {
        let factory = TextBillboardFactory::new(FixedWidth, RecordingRasterizer::default());
        let mut label = factory.create_label("pos").unwrap().position(1.0, 2.0, 3.0);
        assert_eq!(label.translation(), Vec3::new(1.0, 2.0, 3.0));

        label.set_position([4.0, 5.0, 6.0]);
        assert_eq!(label.translation(), Vec3::new(4.0, 5.0, 6.0));
    }
}
