//! Orthographic camera and orbit controls
//!
//! The camera looks at a target from a position; [`OrbitControls`] moves the
//! position around the target on a sphere in response to pointer drags and
//! zooms the orthographic frustum on wheel input.

use glam::{Mat4, Vec2, Vec3};
use std::f32::consts::PI;

/// Keeps the orbit away from the poles where `look_at` degenerates.
const POLAR_EPSILON: f32 = 1e-6;

/// Camera with an orthographic (parallel) projection.
#[derive(Debug, Clone, PartialEq)]
pub struct OrthographicCamera {
    /// Height of the visible volume in world units at zoom 1.
    pub frustum_size: f32,
    /// Viewport width over height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Divides the frustum; 2.0 shows half as much of the world.
    pub zoom: f32,
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl OrthographicCamera {
    /// Camera at the origin looking down -Z with a `frustum_size` tall view.
    pub fn new(frustum_size: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            frustum_size,
            aspect,
            near,
            far,
            zoom: 1.0,
            position: Vec3::ZERO,
            target: Vec3::NEG_Z,
            up: Vec3::Y,
        }
    }

    /// Recompute the aspect ratio from a viewport size. Zero-sized viewports
    /// (minimized windows) are ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Frustum `(left, right, bottom, top)` after zoom.
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        let half_height = self.frustum_size / 2.0 / self.zoom;
        let half_width = half_height * self.aspect;
        (-half_width, half_width, -half_height, half_height)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        let (left, right, bottom, top) = self.bounds();
        Mat4::orthographic_rh(left, right, bottom, top, self.near, self.far)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Pointer input relevant to orbiting, in window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// Cursor moved to `(x, y)`.
    Moved { x: f32, y: f32 },
    /// Primary button pressed.
    Pressed,
    /// Primary button released.
    Released,
    /// Wheel scrolled; positive lines zoom in.
    Scrolled { lines: f32 },
}

/// Orbits a camera around its target.
///
/// Input accumulates into pending deltas; [`OrbitControls::update`] applies
/// them to the camera once per frame.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    /// Multiplies drag rotation; 1.0 turns a full circle per viewport height.
    pub rotate_speed: f32,
    /// Exponent applied to the 0.95 per-line zoom step.
    pub zoom_speed: f32,
    pub enable_damping: bool,
    /// Fraction of the remaining rotation removed each update when damping.
    pub damping_factor: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    viewport: Vec2,
    cursor: Option<Vec2>,
    dragging: bool,
    /// Pending (azimuth, polar) rotation in radians.
    spherical_delta: Vec2,
    /// Pending multiplicative zoom.
    zoom_scale: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitControls {
    pub fn new() -> Self {
        Self {
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            enable_damping: false,
            damping_factor: 0.05,
            min_zoom: 0.0,
            max_zoom: f32::INFINITY,
            viewport: Vec2::new(1.0, 1.0),
            cursor: None,
            dragging: false,
            spherical_delta: Vec2::ZERO,
            zoom_scale: 1.0,
        }
    }

    /// Viewport size in pixels; rotation is normalized by its height.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.viewport = Vec2::new(width as f32, height as f32);
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn handle_pointer(&mut self, input: PointerInput) {
        match input {
            PointerInput::Moved { x, y } => {
                let position = Vec2::new(x, y);
                if let (true, Some(previous)) = (self.dragging, self.cursor) {
                    self.rotate_by_pixels(position - previous);
                }
                self.cursor = Some(position);
            }
            PointerInput::Pressed => self.dragging = true,
            PointerInput::Released => self.dragging = false,
            PointerInput::Scrolled { lines } => {
                // Each line scales by 0.95^zoom_speed; scrolling up zooms in.
                let step = 0.95f32.powf(self.zoom_speed);
                self.zoom_scale /= step.powf(lines);
            }
        }
    }

    fn rotate_by_pixels(&mut self, delta: Vec2) {
        let radians_per_pixel = 2.0 * PI / self.viewport.y * self.rotate_speed;
        self.spherical_delta -= delta * radians_per_pixel;
    }

    /// Apply pending rotation and zoom to `camera`. Returns whether the
    /// camera changed.
    pub fn update(&mut self, camera: &mut OrthographicCamera) -> bool {
        let mut changed = false;

        if self.spherical_delta != Vec2::ZERO {
            let offset = camera.position - camera.target;
            let radius = offset.length();
            if radius > 0.0 {
                let theta = offset.x.atan2(offset.z) + self.spherical_delta.x;
                let phi = ((offset.y / radius).clamp(-1.0, 1.0).acos() + self.spherical_delta.y)
                    .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);

                let offset = Vec3::new(
                    radius * phi.sin() * theta.sin(),
                    radius * phi.cos(),
                    radius * phi.sin() * theta.cos(),
                );
                camera.position = camera.target + offset;
                changed = true;
            }

            if self.enable_damping {
                self.spherical_delta *= 1.0 - self.damping_factor;
                if self.spherical_delta.length_squared() < 1e-12 {
                    self.spherical_delta = Vec2::ZERO;
                }
            } else {
                self.spherical_delta = Vec2::ZERO;
            }
        }

        if self.zoom_scale != 1.0 {
            let zoom = (camera.zoom * self.zoom_scale).clamp(self.min_zoom, self.max_zoom);
            changed |= zoom != camera.zoom;
            camera.zoom = zoom;
            self.zoom_scale = 1.0;
        }

        changed
    }
}
