//! Scene objects other than labels: the cube and its point light
//!
//! # Example
//!
//! ```rust,ignore
//! use sprite_labels::{Cube, PointLight};
//!
//! let cube = Cube::new(50.0).spin_speed(0.4);
//! let light = PointLight::new().position(0.0, 250.0, 0.0);
//! ```

use crate::material::CubeMaterial;
use glam::{Mat4, Quat, Vec3};

/// Axis-aligned cube resting on the ground plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    size: f32,
    position: Vec3,
    orientation: Quat,
    /// Radians per second around the Y axis.
    spin_speed: f32,
    material: CubeMaterial,
}

impl Cube {
    /// Cube of edge `size` whose bottom face sits on y = 0.
    pub fn new(size: f32) -> Self {
        Self {
            size,
            position: Vec3::new(0.0, size * 0.5, 0.0),
            orientation: Quat::IDENTITY,
            spin_speed: 0.0,
            material: CubeMaterial::default(),
        }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn translation(&self) -> Vec3 {
        self.position
    }

    /// Set position with individual components (builder style).
    pub fn position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    /// Set the spin around the Y axis in radians per second (builder style).
    pub fn spin_speed(mut self, radians_per_second: f32) -> Self {
        self.spin_speed = radians_per_second;
        self
    }

    pub fn with_material(mut self, material: CubeMaterial) -> Self {
        self.material = material;
        self
    }

    pub fn material(&self) -> CubeMaterial {
        self.material
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Advance the spin by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if self.spin_speed != 0.0 {
            self.orientation = (Quat::from_rotation_y(self.spin_speed * dt) * self.orientation).normalize();
        }
    }

    /// Model matrix for a unit cube centered on the origin.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(self.size), self.orientation, self.position)
    }
}

/// Omnidirectional light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: [f32; 3],
}

impl PointLight {
    /// White light at the origin.
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            color: [1.0, 1.0, 1.0],
        }
    }

    /// Set position with individual components (builder style).
    pub fn position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    pub fn color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_rests_on_ground() {
        let cube = Cube::new(50.0);
        assert_eq!(cube.translation(), Vec3::new(0.0, 25.0, 0.0));

        // Bottom face of the unit cube lands on y = 0.
        let bottom = cube.model_matrix().transform_point3(Vec3::new(0.0, -0.5, 0.0));
        assert!(bottom.y.abs() < 1e-5);
    }

    #[test]
    fn test_static_cube_does_not_spin() {
        let mut cube = Cube::new(1.0);
        cube.advance(10.0);
        assert_eq!(cube.orientation(), Quat::IDENTITY);
    }

    #[test]
    fn test_spin_accumulates() {
        let mut cube = Cube::new(1.0).spin_speed(std::f32::consts::FRAC_PI_2);
        cube.advance(0.5);
        cube.advance(0.5);

        // A quarter turn around Y maps +X to -Z.
        let x = cube.orientation() * Vec3::X;
        assert!((x - Vec3::NEG_Z).length() < 1e-5, "got {:?}", x);
    }
}
