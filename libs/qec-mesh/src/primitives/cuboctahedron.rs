//! # Cuboctahedron Primitive
//!
//! A fixed unit cuboctahedron: the 12 edge midpoints of the cube
//! `[-1, 1]^3`, with its 6 square faces split into two triangles each.

use crate::mesh::Mesh;
use glam::DVec3;

/// Vertex positions of the unit cuboctahedron.
pub const CUBOCTAHEDRON_VERTICES: [[f64; 3]; 12] = [
    [-1.0, 0.0, -1.0],
    [0.0, -1.0, -1.0],
    [1.0, 0.0, -1.0],
    [0.0, 1.0, -1.0],
    [-1.0, -1.0, 0.0],
    [1.0, -1.0, 0.0],
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [-1.0, 0.0, 1.0],
    [0.0, -1.0, 1.0],
    [1.0, 0.0, 1.0],
    [0.0, 1.0, 1.0],
];

/// Triangles of the unit cuboctahedron: 12 from the squares, 8 corners.
pub const CUBOCTAHEDRON_FACES: [[u32; 3]; 20] = [
    [0, 1, 2],
    [2, 3, 0],
    [8, 9, 10],
    [10, 11, 8],
    [0, 7, 8],
    [8, 4, 0],
    [4, 1, 5],
    [5, 9, 4],
    [5, 2, 6],
    [6, 10, 5],
    [7, 3, 6],
    [6, 11, 7],
    [0, 3, 7],
    [0, 1, 4],
    [1, 5, 2],
    [2, 3, 6],
    [7, 8, 11],
    [4, 8, 9],
    [5, 9, 10],
    [6, 10, 11],
];

/// Creates the unit cuboctahedron with smooth vertex normals.
///
/// # Example
///
/// ```rust
/// use qec_mesh::primitives::create_cuboctahedron;
///
/// let mesh = create_cuboctahedron();
/// assert_eq!(mesh.vertex_count(), 12);
/// assert_eq!(mesh.triangle_count(), 20);
/// ```
pub fn create_cuboctahedron() -> Mesh {
    let vertices = CUBOCTAHEDRON_VERTICES
        .iter()
        .map(|&[x, y, z]| DVec3::new(x, y, z))
        .collect();
    let mut mesh = Mesh::from_parts(vertices, CUBOCTAHEDRON_FACES.to_vec());
    mesh.compute_normals();
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertices_are_cube_edge_midpoints() {
        for [x, y, z] in CUBOCTAHEDRON_VERTICES {
            let zeros = [x, y, z].iter().filter(|c| **c == 0.0).count();
            assert_eq!(zeros, 1);
        }
    }

    #[test]
    fn test_cuboctahedron_validates() {
        let mesh = create_cuboctahedron();
        assert!(mesh.validate());
        assert_eq!(mesh.bounding_box(), (DVec3::splat(-1.0), DVec3::splat(1.0)));
    }

    #[test]
    fn test_every_vertex_is_used() {
        let mesh = create_cuboctahedron();
        let mut used = [false; 12];
        for tri in mesh.triangles() {
            for &i in tri {
                used[i as usize] = true;
            }
        }
        assert!(used.iter().all(|u| *u));
    }
}
