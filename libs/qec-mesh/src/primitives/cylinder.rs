//! # Cylinder Primitive
//!
//! Generates a capped cylinder (or cone) centered on the origin, axis +y.

use crate::error::{require_positive, MeshError};
use crate::mesh::Mesh;
use config::constants::MIN_RADIAL_SEGMENTS;
use glam::DVec3;
use std::f64::consts::TAU;

/// Creates a cylinder or cone mesh.
///
/// # Arguments
///
/// * `radius_top` - Radius at `y = height / 2`
/// * `radius_bottom` - Radius at `y = -height / 2`
/// * `height` - Length along the y axis
/// * `radial_segments` - Number of segments around the circumference
///
/// # Example
///
/// ```rust
/// use qec_mesh::primitives::create_cylinder;
///
/// let mesh = create_cylinder(0.5, 0.5, 2.0, 32).unwrap();
/// let (min, max) = mesh.bounding_box();
/// assert!((max.y - 1.0).abs() < 1e-12);
/// assert!((min.y + 1.0).abs() < 1e-12);
/// ```
pub fn create_cylinder(
    radius_top: f64,
    radius_bottom: f64,
    height: f64,
    radial_segments: u32,
) -> Result<Mesh, MeshError> {
    require_positive("Cylinder height", height)?;

    if !(radius_top >= 0.0 && radius_bottom >= 0.0) {
        return Err(MeshError::degenerate(format!(
            "Cylinder radii must be non-negative: top={radius_top}, bottom={radius_bottom}"
        )));
    }

    if radius_top == 0.0 && radius_bottom == 0.0 {
        return Err(MeshError::degenerate(
            "Cylinder must have at least one non-zero radius",
        ));
    }

    if radial_segments < MIN_RADIAL_SEGMENTS {
        return Err(MeshError::degenerate(format!(
            "Cylinder segments must be at least {MIN_RADIAL_SEGMENTS}: {radial_segments}"
        )));
    }

    let half = height / 2.0;
    let segments = radial_segments as usize;
    let mut mesh = Mesh::new();

    let ring = |radius: f64, y: f64, j: usize| {
        let theta = TAU * j as f64 / segments as f64;
        DVec3::new(radius * theta.sin(), y, radius * theta.cos())
    };

    // Top ring (or apex) then bottom ring (or apex)
    let top: Vec<u32> = if radius_top > 0.0 {
        (0..segments).map(|j| mesh.add_vertex(ring(radius_top, half, j))).collect()
    } else {
        vec![mesh.add_vertex(DVec3::new(0.0, half, 0.0))]
    };
    let bottom: Vec<u32> = if radius_bottom > 0.0 {
        (0..segments).map(|j| mesh.add_vertex(ring(radius_bottom, -half, j))).collect()
    } else {
        vec![mesh.add_vertex(DVec3::new(0.0, -half, 0.0))]
    };

    let at = |ring: &[u32], j: usize| ring[if ring.len() == 1 { 0 } else { j % segments }];

    // Side faces
    for j in 0..segments {
        let t0 = at(&top, j);
        let t1 = at(&top, j + 1);
        let b0 = at(&bottom, j);
        let b1 = at(&bottom, j + 1);

        if radius_top > 0.0 {
            mesh.add_triangle(t0, b0, t1);
        }
        if radius_bottom > 0.0 {
            mesh.add_triangle(b0, b1, t1);
        }
    }

    // Caps as polygon fans
    if radius_top > 0.0 {
        for j in 1..segments - 1 {
            mesh.add_triangle(top[0], top[j], top[j + 1]);
        }
    }
    if radius_bottom > 0.0 {
        for j in 1..segments - 1 {
            mesh.add_triangle(bottom[0], bottom[j + 1], bottom[j]);
        }
    }

    mesh.compute_normals();
    Ok(mesh)
}
