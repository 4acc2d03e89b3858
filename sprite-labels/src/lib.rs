//! sprite-labels - camera-facing text labels for a small 3D scene
//!
//! The interesting part is [`TextBillboardFactory`]: it measures a string,
//! rasterizes it onto a fresh pixel surface, snapshots that surface into a
//! [`Texture`] and wraps it in a [`Billboard`] sized from the measured width.
//!
//! Everything else models the scene the billboards live in (camera, orbit
//! controls, light, cube, frame-rate counter) without touching the GPU, so the
//! shell crate only has to upload and draw.
//!
//! # Example
//!
//! ```rust,ignore
//! use sprite_labels::{GlyphBackend, TextBillboardFactory};
//!
//! let factory = TextBillboardFactory::from_backend(GlyphBackend::bundled()?);
//! let label = factory.create_label(" Hello ")?.position(-25.0, 50.0, 50.0);
//! scene.add_label(label);
//! ```

pub mod billboard;
pub mod camera;
pub mod config;
pub mod entity;
pub mod error;
pub mod font;
pub mod frame_loop;
pub mod material;
pub mod mesh;
pub mod scene;
pub mod stats;
pub mod style;
pub mod text;
pub mod texture;

pub use billboard::{Billboard, TextBillboardFactory, LABEL_HEIGHT, MAX_SURFACE_WIDTH, WIDTH_SCALE};
pub use camera::{OrbitControls, OrthographicCamera, PointerInput};
pub use config::SceneConfig;
pub use entity::{Cube, PointLight};
pub use error::{ConfigError, LabelError};
pub use font::{GlyphBackend, BUNDLED_TYPEFACE};
pub use frame_loop::{FrameLoop, FrameState, FrameTarget};
pub use material::{CubeMaterial, SpriteMaterial};
pub use mesh::MeshData;
pub use scene::SceneContext;
pub use stats::FpsCounter;
pub use style::{FontWeight, Rgba, TextStyle};
pub use text::{RasterSurface, SurfaceRasterizer, TextMeasurer};
pub use texture::{Texture, TextureId};
