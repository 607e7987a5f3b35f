//! # Octahedron Primitive

use crate::error::{require_positive, MeshError};
use crate::mesh::Mesh;
use glam::DVec3;

/// Creates a regular octahedron whose vertices lie on the axes at `radius`.
///
/// # Example
///
/// ```rust
/// use qec_mesh::primitives::create_octahedron;
///
/// let mesh = create_octahedron(2.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 6);
/// assert_eq!(mesh.triangle_count(), 8);
/// ```
pub fn create_octahedron(radius: f64) -> Result<Mesh, MeshError> {
    require_positive("Octahedron radius", radius)?;

    let vertices = [
        DVec3::X,
        DVec3::NEG_X,
        DVec3::Y,
        DVec3::NEG_Y,
        DVec3::Z,
        DVec3::NEG_Z,
    ]
    .iter()
    .map(|v| *v * radius)
    .collect();

    let triangles = vec![
        [0, 2, 4],
        [0, 4, 3],
        [0, 3, 5],
        [0, 5, 2],
        [1, 2, 5],
        [1, 5, 3],
        [1, 3, 4],
        [1, 4, 2],
    ];

    let mut mesh = Mesh::from_parts(vertices, triangles);
    mesh.compute_normals();
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_octahedron_faces_point_outward() {
        let mesh = create_octahedron(1.5).unwrap();
        for i in 0..mesh.triangle_count() {
            let [a, b, c] = mesh.triangle_corners(i);
            let normal = (b - a).cross(c - a);
            assert!(normal.dot(a + b + c) > 0.0, "face {i} faces inward");
        }
    }

    #[test]
    fn test_octahedron_radius() {
        let mesh = create_octahedron(1.5).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::splat(-1.5));
        assert_eq!(max, DVec3::splat(1.5));
        assert!(mesh.validate());
    }

    #[test]
    fn test_octahedron_invalid_radius() {
        assert!(create_octahedron(0.0).is_err());
    }
}
