use std::path::PathBuf;
use thiserror::Error;

/// Errors from label synthesis and font loading.
#[derive(Error, Debug)]
pub enum LabelError {
    #[error("Label text is empty")]
    EmptyMessage,

    #[error("Label {message:?} measures {measured}px, less than one pixel")]
    ZeroWidth { message: String, measured: f32 },

    #[error("Label surface would be {width}px wide, maximum is {max}px")]
    SurfaceTooLarge { width: u32, max: u32 },

    #[error("Rasterizer returned a {actual_width}x{actual_height} surface, expected {width}x{height}")]
    SurfaceMismatch {
        width: u32,
        height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    #[error("Failed to read font {path:?}: {source}")]
    FontIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid font data: {0}")]
    InvalidFont(String),
}

/// Errors from loading a scene configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
