//! Materials - surface appearance of scene objects

use crate::texture::Texture;

/// Material for a camera-facing sprite: a texture multiplied by a tint.
#[derive(Debug)]
pub struct SpriteMaterial {
    pub(crate) map: Texture,
    pub(crate) color: [f32; 4],
}

impl SpriteMaterial {
    /// Sprite material sampling `map` with a white tint.
    pub fn new(map: Texture) -> Self {
        Self {
            map,
            color: [1.0, 1.0, 1.0, 1.0],
        }
    }

    /// Set the tint (RGBA, values 0.0 to 1.0).
    pub fn color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    pub fn map(&self) -> &Texture {
        &self.map
    }

    pub fn tint(&self) -> [f32; 4] {
        self.color
    }
}

/// How the cube is shaded.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CubeMaterial {
    /// Face normals mapped to RGB; ignores lights.
    #[default]
    Normal,
    /// Diffuse color lit by the scene's point light.
    Lambert { color: [f32; 3] },
}
