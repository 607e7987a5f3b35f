//! # Triangle Primitive

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Creates a single triangle from three absolute corner positions.
///
/// # Example
///
/// ```rust
/// use qec_mesh::primitives::create_triangle;
/// use glam::DVec3;
///
/// let mesh = create_triangle([DVec3::ZERO, DVec3::X, DVec3::Y]).unwrap();
/// assert_eq!(mesh.triangle(0), [0, 1, 2]);
/// ```
pub fn create_triangle(corners: [DVec3; 3]) -> Result<Mesh, MeshError> {
    if corners.iter().any(|c| !c.is_finite()) {
        return Err(MeshError::degenerate(format!(
            "Triangle corners must be finite: {corners:?}"
        )));
    }

    Ok(Mesh::from_parts(corners.to_vec(), vec![[0, 1, 2]]))
}
