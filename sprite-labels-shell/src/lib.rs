//! sprite-labels-shell - native window and wgpu renderer
//!
//! Opens a winit window, builds the scene from a [`SceneConfig`] and redraws
//! it every frame until the window is closed or Escape is pressed.

mod app;
mod cli;
mod renderer;

pub use cli::Cli;
pub use renderer::Renderer;

use sprite_labels::{ConfigError, LabelError, SceneConfig};
use winit::event_loop::{ControlFlow, EventLoop};

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no usable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to open GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported formats")]
    NoSurfaceFormat,

    #[error("failed to acquire frame: {0}")]
    Frame(#[from] wgpu::SurfaceError),

    #[error(transparent)]
    Label(#[from] LabelError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Run the demo until the window closes.
pub fn run(config: SceneConfig) -> Result<(), ShellError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = app::App::new(config);
    event_loop.run_app(&mut app)?;
    app.finish()
}
