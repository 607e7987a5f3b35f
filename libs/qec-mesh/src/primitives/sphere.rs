//! # Sphere Primitive
//!
//! Generates a UV sphere with pole rows, y-up.

use crate::error::{require_positive, MeshError};
use crate::mesh::Mesh;
use config::constants::{MIN_HEIGHT_SEGMENTS, MIN_RADIAL_SEGMENTS};
use glam::DVec3;
use std::f64::consts::{PI, TAU};

/// Creates a sphere mesh using latitude/longitude tessellation.
///
/// # Arguments
///
/// * `radius` - The radius of the sphere
/// * `width_segments` - Number of segments around the y axis
/// * `height_segments` - Number of latitude bands from pole to pole
///
/// # Algorithm
///
/// - Grid of `(height_segments + 1) x (width_segments + 1)` vertices; the
///   seam column and the pole rows repeat positions so each row can carry
///   its own texture coordinate
/// - Polar angle `theta = PI * row / height_segments` measured from +y
/// - The pole bands emit a single triangle per quad
///
/// # Example
///
/// ```rust
/// use qec_mesh::primitives::create_sphere;
///
/// let mesh = create_sphere(5.0, 32, 32).unwrap();
/// assert_eq!(mesh.vertex_count(), 33 * 33);
/// ```
pub fn create_sphere(
    radius: f64,
    width_segments: u32,
    height_segments: u32,
) -> Result<Mesh, MeshError> {
    require_positive("Sphere radius", radius)?;

    if width_segments < MIN_RADIAL_SEGMENTS {
        return Err(MeshError::degenerate(format!(
            "Sphere width segments must be at least {MIN_RADIAL_SEGMENTS}: {width_segments}"
        )));
    }

    if height_segments < MIN_HEIGHT_SEGMENTS {
        return Err(MeshError::degenerate(format!(
            "Sphere height segments must be at least {MIN_HEIGHT_SEGMENTS}: {height_segments}"
        )));
    }

    let columns = width_segments as usize + 1;
    let rows = height_segments as usize + 1;
    let mut vertices = Vec::with_capacity(rows * columns);
    let mut normals = Vec::with_capacity(rows * columns);

    for iy in 0..rows {
        let theta = PI * iy as f64 / height_segments as f64;
        for ix in 0..columns {
            let phi = TAU * ix as f64 / width_segments as f64;
            let normal = DVec3::new(
                -phi.cos() * theta.sin(),
                theta.cos(),
                phi.sin() * theta.sin(),
            );
            vertices.push(normal * radius);
            normals.push(normal);
        }
    }

    let grid = |iy: usize, ix: usize| (iy * columns + ix) as u32;
    let mut triangles = Vec::new();

    for iy in 0..height_segments as usize {
        for ix in 0..width_segments as usize {
            let a = grid(iy, ix + 1);
            let b = grid(iy, ix);
            let c = grid(iy + 1, ix);
            let d = grid(iy + 1, ix + 1);

            if iy != 0 {
                triangles.push([a, b, d]);
            }
            if iy != height_segments as usize - 1 {
                triangles.push([b, c, d]);
            }
        }
    }

    let mut mesh = Mesh::from_parts(vertices, triangles);
    mesh.set_normals(normals);
    Ok(mesh)
}
