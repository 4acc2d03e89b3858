//! winit application: window lifecycle and input routing

use crate::ShellError;
use crate::renderer::Renderer;
use sprite_labels::{FrameLoop, GlyphBackend, PointerInput, SceneConfig, SceneContext, TextBillboardFactory};
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

/// Pixel-precise wheels (touchpads) report this many pixels per line.
const PIXELS_PER_LINE: f32 = 40.0;

pub(crate) struct App {
    config: SceneConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    scene: Option<SceneContext>,
    frame_loop: FrameLoop,
    error: Option<ShellError>,
}

impl App {
    pub(crate) fn new(config: SceneConfig) -> Self {
        Self {
            config,
            window: None,
            renderer: None,
            scene: None,
            frame_loop: FrameLoop::new(),
            error: None,
        }
    }

    /// The first fatal error hit while the event loop ran, if any.
    pub(crate) fn finish(mut self) -> Result<(), ShellError> {
        log::info!("Rendered {} frames", self.frame_loop.frames());
        self.error.take().map_or(Ok(()), Err)
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), ShellError> {
        let attrs = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(LogicalSize::new(self.config.window.width, self.config.window.height));
        let window = Arc::new(event_loop.create_window(attrs)?);
        let size = window.inner_size();

        let renderer = pollster::block_on(Renderer::new(window.clone()))?;

        let backend = GlyphBackend::load_or_bundled(self.config.font.as_deref())?;
        log::info!("Label font: {}", backend.typeface());
        let factory = TextBillboardFactory::from_backend(backend);
        let scene = SceneContext::build(&self.config, size.width, size.height, &factory)?;

        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
        self.scene = Some(scene);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: ShellError) {
        log::error!("{}", error);
        self.error.get_or_insert(error);
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(scene), Some(renderer)) =
            (self.window.as_ref(), self.scene.as_mut(), self.renderer.as_mut())
        else {
            return;
        };

        window.pre_present_notify();
        if let Err(e) = self.frame_loop.tick(Instant::now(), scene, renderer) {
            self.fail(event_loop, e);
            return;
        }

        if let Some(fps) = scene.take_fps_sample() {
            window.set_title(&format!("{} - {:.0} fps", self.config.window.title, fps));
        }
        window.request_redraw();
    }

    fn pointer(&mut self, input: PointerInput) {
        if let Some(scene) = self.scene.as_mut() {
            scene.handle_pointer(input);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
                if let Some(scene) = self.scene.as_mut() {
                    scene.resize(size.width, size.height);
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => self.pointer(match state {
                ElementState::Pressed => PointerInput::Pressed,
                ElementState::Released => PointerInput::Released,
            }),

            WindowEvent::CursorMoved { position, .. } => self.pointer(PointerInput::Moved {
                x: position.x as f32,
                y: position.y as f32,
            }),

            WindowEvent::MouseWheel { delta, .. } => self.pointer(PointerInput::Scrolled {
                lines: scroll_lines(delta),
            }),

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

/// Wheel delta in lines; positive means away from the user.
fn scroll_lines(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(position) => position.y as f32 / PIXELS_PER_LINE,
    }
}
