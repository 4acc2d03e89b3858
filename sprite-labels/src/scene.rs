//! SceneContext - everything the frame loop draws and updates
//!
//! Built once at startup and passed by reference to the per-frame update and
//! to the renderer; there is no global scene state.

use crate::billboard::{Billboard, TextBillboardFactory};
use crate::camera::{OrbitControls, OrthographicCamera, PointerInput};
use crate::config::SceneConfig;
use crate::entity::{Cube, PointLight};
use crate::error::LabelError;
use crate::stats::FpsCounter;
use crate::text::{SurfaceRasterizer, TextMeasurer};
use glam::Vec3;
use std::time::Instant;

#[derive(Debug)]
pub struct SceneContext {
    pub camera: OrthographicCamera,
    pub controls: OrbitControls,
    pub light: PointLight,
    pub cube: Cube,
    pub stats: FpsCounter,
    background: [f32; 4],
    labels: Vec<Billboard>,
    fps_sample: Option<f32>,
}

impl SceneContext {
    /// Scene without labels for a `width` x `height` viewport.
    pub fn new(config: &SceneConfig, width: u32, height: u32) -> Self {
        let camera_config = &config.camera;
        let mut camera = OrthographicCamera::new(
            camera_config.frustum_size,
            config.window.width as f32 / config.window.height as f32,
            camera_config.near,
            camera_config.far,
        );
        camera.position = Vec3::from_array(camera_config.position);
        camera.target = Vec3::from_array(camera_config.target);
        camera.set_viewport(width, height);

        let mut controls = OrbitControls::new();
        controls.rotate_speed = config.controls.rotate_speed;
        controls.zoom_speed = config.controls.zoom_speed;
        controls.enable_damping = config.controls.enable_damping;
        controls.damping_factor = config.controls.damping_factor;
        controls.min_zoom = config.controls.min_zoom;
        controls.max_zoom = config.controls.max_zoom;
        controls.set_viewport(width, height);

        let [x, y, z] = config.light.position;
        let light = PointLight::new().position(x, y, z).color(config.light.color);

        let cube = Cube::new(config.cube.size)
            .spin_speed(config.cube.spin_speed)
            .with_material(config.cube.material);

        Self {
            camera,
            controls,
            light,
            cube,
            stats: FpsCounter::new(),
            background: config.window.background,
            labels: Vec::new(),
            fps_sample: None,
        }
    }

    /// Scene with every configured label synthesized by `factory`.
    pub fn build<M, R>(
        config: &SceneConfig,
        width: u32,
        height: u32,
        factory: &TextBillboardFactory<M, R>,
    ) -> Result<Self, LabelError>
    where
        M: TextMeasurer,
        R: SurfaceRasterizer,
    {
        let mut scene = Self::new(config, width, height);
        for label in &config.labels {
            let mut billboard = factory.create_label(&label.text)?;
            billboard.set_position(label.position);
            scene.add_label(billboard);
        }
        log::info!(
            "Scene built: cube {} units, {} labels, camera at {:?}",
            scene.cube.size(),
            scene.labels.len(),
            scene.camera.position
        );
        Ok(scene)
    }

    /// Hand a positioned billboard to the scene, which owns it from now on.
    pub fn add_label(&mut self, billboard: Billboard) {
        self.labels.push(billboard);
    }

    pub fn labels(&self) -> &[Billboard] {
        &self.labels
    }

    pub fn background(&self) -> [f32; 4] {
        self.background
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
        self.controls.set_viewport(width, height);
    }

    pub fn handle_pointer(&mut self, input: PointerInput) {
        self.controls.handle_pointer(input);
    }

    /// Per-frame update: orbit controls, cube spin and the fps counter.
    pub fn update(&mut self, dt: f32, now: Instant) {
        self.controls.update(&mut self.camera);
        self.cube.advance(dt);
        if let Some(fps) = self.stats.update(now) {
            log::debug!("{:.1} fps", fps);
            self.fps_sample = Some(fps);
        }
    }

    /// Fps sample published since the last call, if any.
    pub fn take_fps_sample(&mut self) -> Option<f32> {
        self.fps_sample.take()
    }
}
