//! Scene configuration
//!
//! Every section is optional; missing values fall back to the default scene
//! (a 50-unit cube with " Hello " and a longer label floating above it).
//!
//! ```toml
//! [window]
//! width = 1280
//! height = 720
//!
//! [cube]
//! size = 50.0
//! spin_speed = 0.3
//! material = { type = "lambert", color = [0.2, 0.6, 0.9] }
//!
//! [[labels]]
//! text = " Hello "
//! position = [-25.0, 50.0, 50.0]
//! ```

use crate::error::ConfigError;
use crate::material::CubeMaterial;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub controls: ControlsConfig,
    pub cube: CubeConfig,
    pub light: LightConfig,
    /// Font file for label text; the bundled face is used when unset.
    pub font: Option<PathBuf>,
    pub labels: Vec<LabelConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Clear color (RGBA, values 0.0 to 1.0).
    pub background: [f32; 4],
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    pub frustum_size: f32,
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub near: f32,
    pub far: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControlsConfig {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CubeConfig {
    pub size: f32,
    /// Radians per second around the Y axis.
    pub spin_speed: f32,
    pub material: CubeMaterial,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LightConfig {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelConfig {
    pub text: String,
    pub position: [f32; 3],
}

impl Default for SceneConfig {
    fn default() -> Self {
        let cube = CubeConfig::default();
        let mut config = Self {
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            controls: ControlsConfig::default(),
            cube,
            light: LightConfig::default(),
            font: None,
            labels: Vec::new(),
        };
        config.set_label_texts([" Hello ", " Way more text on this one!!!! "]);
        config
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Sprite Text Labels".to_string(),
            width: 1280,
            height: 720,
            background: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            frustum_size: 250.0,
            position: [0.0, 150.0, 400.0],
            target: [0.0, 0.0, 0.0],
            near: 1.0,
            far: 500.0,
        }
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            enable_damping: false,
            damping_factor: 0.05,
            min_zoom: 0.1,
            max_zoom: 10.0,
        }
    }
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            size: 50.0,
            spin_speed: 0.3,
            material: CubeMaterial::Normal,
        }
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 250.0, 0.0],
            color: [1.0, 1.0, 1.0],
        }
    }
}

impl SceneConfig {
    /// Load a config file. Relative font paths resolve against the file's
    /// directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&content)?;

        if let (Some(font), Some(dir)) = (&config.font, path.parent()) {
            if font.is_relative() {
                config.font = Some(dir.join(font));
            }
        }

        log::info!("Loaded scene config from {:?} ({} labels)", path, config.labels.len());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the labels with `texts`, spread one cube width apart along X,
    /// floating one cube height up and one cube depth toward the camera.
    pub fn set_label_texts<I, S>(&mut self, texts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let texts: Vec<String> = texts.into_iter().map(Into::into).collect();
        let size = self.cube.size;
        let center = (texts.len() as f32 - 1.0) / 2.0;
        self.labels = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| LabelConfig {
                text,
                position: [(i as f32 - center) * size, size, size],
            })
            .collect();
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if !(self.camera.frustum_size > 0.0) {
            return Err(ConfigError::Invalid("camera.frustum_size must be positive".to_string()));
        }
        if !(self.camera.near < self.camera.far) {
            return Err(ConfigError::Invalid("camera.near must be less than camera.far".to_string()));
        }
        if !(self.cube.size > 0.0) {
            return Err(ConfigError::Invalid("cube.size must be positive".to_string()));
        }
        if !(self.controls.min_zoom > 0.0 && self.controls.min_zoom <= self.controls.max_zoom) {
            return Err(ConfigError::Invalid(
                "controls.min_zoom must be positive and not above max_zoom".to_string(),
            ));
        }
        if let Some(i) = self.labels.iter().position(|label| label.text.is_empty()) {
            return Err(ConfigError::Invalid(format!("labels[{}].text is empty", i)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene() {
        let config = SceneConfig::default();
        assert_eq!(config.camera.position, [0.0, 150.0, 400.0]);
        assert_eq!(config.light.position, [0.0, 250.0, 0.0]);
        assert_eq!(config.labels.len(), 2);
        assert_eq!(config.labels[0].text, " Hello ");
        assert_eq!(config.labels[0].position, [-25.0, 50.0, 50.0]);
        assert_eq!(config.labels[1].text, " Way more text on this one!!!! ");
        assert_eq!(config.labels[1].position, [25.0, 50.0, 50.0]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(SceneConfig::from_toml_str("").unwrap(), SceneConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = SceneConfig::from_toml_str(
            r#"
            [window]
            width = 640

            [cube]
            material = { type = "lambert", color = [0.2, 0.6, 0.9] }

            [[labels]]
            text = "only"
            position = [1.0, 2.0, 3.0]
            "#,
        )
        .unwrap();

        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 720);
        assert_eq!(config.cube.material, CubeMaterial::Lambert { color: [0.2, 0.6, 0.9] });
        assert_eq!(config.labels.len(), 1);
        assert_eq!(config.labels[0].position, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = SceneConfig::from_toml_str("[window]\ncolour = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        for content in [
            "[window]\nwidth = 0\n",
            "[camera]\nnear = 600.0\n",
            "[cube]\nsize = -1.0\n",
            "[[labels]]\ntext = \"\"\nposition = [0.0, 0.0, 0.0]\n",
        ] {
            let err = SceneConfig::from_toml_str(content).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{:?} for {:?}", err, content);
        }
    }

    #[test]
    fn test_set_label_texts_spreads_along_x() {
        let mut config = SceneConfig::default();
        config.set_label_texts(["a", "b", "c"]);
        let xs: Vec<f32> = config.labels.iter().map(|l| l.position[0]).collect();
        assert_eq!(xs, vec![-50.0, 0.0, 50.0]);

        config.set_label_texts(["solo"]);
        assert_eq!(config.labels[0].position, [0.0, 50.0, 50.0]);
    }

    #[test]
    fn test_load_resolves_relative_font() {
        let dir = std::env::temp_dir().join(format!("sprite-labels-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("scene.toml");
        std::fs::write(&path, "font = \"fonts/Label.ttf\"\n").unwrap();

        let config = SceneConfig::load(&path).unwrap();
        assert_eq!(config.font, Some(dir.join("fonts/Label.ttf")));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_missing_file() {
        let err = SceneConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
