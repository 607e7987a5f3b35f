//! # Cuboid Primitive
//!
//! Generates an axis-aligned box centered on the origin.

use crate::error::{require_positive, MeshError};
use crate::mesh::Mesh;
use glam::DVec3;

/// Creates an axis-aligned box mesh.
///
/// Each face owns its four corners so that per-vertex normals stay flat,
/// giving 24 vertices and 12 triangles.
///
/// # Example
///
/// ```rust
/// use qec_mesh::primitives::create_cuboid;
/// use glam::DVec3;
///
/// let mesh = create_cuboid(DVec3::new(2.0, 4.0, 6.0)).unwrap();
/// assert_eq!(mesh.vertex_count(), 24);
/// assert_eq!(mesh.triangle_count(), 12);
/// assert_eq!(mesh.bounding_box(), (DVec3::new(-1.0, -2.0, -3.0), DVec3::new(1.0, 2.0, 3.0)));
/// ```
pub fn create_cuboid(size: DVec3) -> Result<Mesh, MeshError> {
    require_positive("Box width", size.x)?;
    require_positive("Box height", size.y)?;
    require_positive("Box depth", size.z)?;

    let h = size / 2.0;
    let mut vertices = Vec::with_capacity(24);
    let mut normals = Vec::with_capacity(24);
    let mut triangles = Vec::with_capacity(12);

    // Each face: outward normal and two in-plane axes (u, v) with u x v = normal.
    let faces = [
        (DVec3::X, DVec3::NEG_Z, DVec3::Y),
        (DVec3::NEG_X, DVec3::Z, DVec3::Y),
        (DVec3::Y, DVec3::X, DVec3::NEG_Z),
        (DVec3::NEG_Y, DVec3::X, DVec3::Z),
        (DVec3::Z, DVec3::X, DVec3::Y),
        (DVec3::NEG_Z, DVec3::NEG_X, DVec3::Y),
    ];

    for (normal, u, v) in faces {
        let base = vertices.len() as u32;
        let center = normal * h;
        let du = u * h;
        let dv = v * h;

        // Corners counter-clockwise when viewed from outside.
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            vertices.push(center + du * su + dv * sv);
            normals.push(normal);
        }

        triangles.push([base, base + 1, base + 2]);
        triangles.push([base, base + 2, base + 3]);
    }

    let mut mesh = Mesh::from_parts(vertices, triangles);
    mesh.set_normals(normals);
    Ok(mesh)
}
