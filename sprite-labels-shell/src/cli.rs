use clap::Parser;
use sprite_labels::{ConfigError, SceneConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sprite-labels")]
#[command(about = "Rotating cube with camera-facing text labels", long_about = None)]
pub struct Cli {
    /// Scene config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in logical pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Font file for label text (defaults to the bundled face)
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Label text; repeat to replace the configured labels
    #[arg(short, long = "label")]
    pub labels: Vec<String>,
}

impl Cli {
    /// Scene config from the file (or defaults) with command-line overrides
    /// applied on top.
    pub fn into_config(self) -> Result<SceneConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SceneConfig::load(path)?,
            None => SceneConfig::default(),
        };

        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        if self.font.is_some() {
            config.font = self.font;
        }
        if !self.labels.is_empty() {
            config.set_label_texts(self.labels);
        }

        config.validate()?;
        Ok(config)
    }
}
