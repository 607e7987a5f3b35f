//! # Plane Primitive
//!
//! Generates a flat rectangle in the xy-plane facing +z.

use crate::error::{require_positive, MeshError};
use crate::mesh::Mesh;
use glam::DVec3;

/// Creates a `width x height` rectangle centered on the origin.
///
/// # Example
///
/// ```rust
/// use qec_mesh::primitives::create_plane;
///
/// let mesh = create_plane(2.0, 1.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.triangle_count(), 2);
/// ```
pub fn create_plane(width: f64, height: f64) -> Result<Mesh, MeshError> {
    require_positive("Plane width", width)?;
    require_positive("Plane height", height)?;

    let (hw, hh) = (width / 2.0, height / 2.0);
    let vertices = vec![
        DVec3::new(-hw, hh, 0.0),
        DVec3::new(hw, hh, 0.0),
        DVec3::new(-hw, -hh, 0.0),
        DVec3::new(hw, -hh, 0.0),
    ];

    let mut mesh = Mesh::from_parts(vertices, vec![[0, 2, 1], [2, 3, 1]]);
    mesh.set_normals(vec![DVec3::Z; 4]);
    Ok(mesh)
}
