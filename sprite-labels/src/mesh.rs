//! Geometry for the unit cube and the sprite quad
//!
//! Both are generated procedurally; the shell uploads them once.

/// Indexed triangle list with per-vertex normals.
#[derive(Debug, Clone)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u16>,
}

impl MeshData {
    /// Unit cube centered on the origin, four vertices per face so every
    /// face gets a flat normal. Counter-clockwise front faces.
    pub fn unit_cube() -> Self {
        // (normal, four corners in CCW order seen from outside)
        const FACES: [([f32; 3], [[f32; 3]; 4]); 6] = [
            ([0.0, 0.0, 1.0], [[-0.5, -0.5, 0.5], [0.5, -0.5, 0.5], [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5]]),
            ([0.0, 0.0, -1.0], [[-0.5, -0.5, -0.5], [-0.5, 0.5, -0.5], [0.5, 0.5, -0.5], [0.5, -0.5, -0.5]]),
            ([0.0, 1.0, 0.0], [[-0.5, 0.5, -0.5], [-0.5, 0.5, 0.5], [0.5, 0.5, 0.5], [0.5, 0.5, -0.5]]),
            ([0.0, -1.0, 0.0], [[-0.5, -0.5, -0.5], [0.5, -0.5, -0.5], [0.5, -0.5, 0.5], [-0.5, -0.5, 0.5]]),
            ([1.0, 0.0, 0.0], [[0.5, -0.5, -0.5], [0.5, 0.5, -0.5], [0.5, 0.5, 0.5], [0.5, -0.5, 0.5]]),
            ([-1.0, 0.0, 0.0], [[-0.5, -0.5, -0.5], [-0.5, -0.5, 0.5], [-0.5, 0.5, 0.5], [-0.5, 0.5, -0.5]]),
        ];

        let mut mesh = Self {
            positions: Vec::with_capacity(24),
            normals: Vec::with_capacity(24),
            indices: Vec::with_capacity(36),
        };
        for (normal, corners) in FACES {
            let base = mesh.positions.len() as u16;
            mesh.positions.extend(corners);
            mesh.normals.extend([normal; 4]);
            mesh.indices.extend([base, base + 1, base + 2, base + 2, base + 3, base]);
        }
        mesh
    }

    /// Unit quad in the XY plane facing +Z, centered on the origin.
    pub fn unit_quad() -> Self {
        Self {
            positions: vec![[-0.5, -0.5, 0.0], [0.5, -0.5, 0.0], [0.5, 0.5, 0.0], [-0.5, 0.5, 0.0]],
            normals: vec![[0.0, 0.0, 1.0]; 4],
            indices: vec![0, 1, 2, 2, 3, 0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_cube_counts() {
        let cube = MeshData::unit_cube();
        assert_eq!(cube.positions.len(), 24);
        assert_eq!(cube.normals.len(), 24);
        assert_eq!(cube.indices.len(), 36);
        assert!(cube.indices.iter().all(|&i| (i as usize) < cube.positions.len()));
    }

    #[test]
    fn test_cube_triangles_wind_outward() {
        let cube = MeshData::unit_cube();
        for tri in cube.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| Vec3::from_array(cube.positions[i as usize]));
            let face_normal = (b - a).cross(c - a).normalize();
            let stored = Vec3::from_array(cube.normals[tri[0] as usize]);
            assert!(face_normal.dot(stored) > 0.99, "triangle {:?} winds inward", tri);
        }
    }

    #[test]
    fn test_quad_is_unit_sized() {
        let quad = MeshData::unit_quad();
        let min_x = quad.positions.iter().map(|p| p[0]).fold(f32::MAX, f32::min);
        let max_x = quad.positions.iter().map(|p| p[0]).fold(f32::MIN, f32::max);
        assert_eq!(max_x - min_x, 1.0);
        assert_eq!(quad.indices.len(), 6);
    }
}
