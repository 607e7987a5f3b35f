//! # Edge Outlines
//!
//! Extracts the visible edges of a triangle mesh, matching three.js
//! `EdgesGeometry`: vertices are welded by rounded position, boundary edges
//! are always kept, and an interior edge is kept only when the angle between
//! its two adjacent faces exceeds a threshold.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use config::constants::EDGE_POSITION_PRECISION;
use glam::DVec3;

use crate::lines::LineSegments;
use crate::mesh::Mesh;

type PositionKey = (i64, i64, i64);

struct HalfEdge {
    start: DVec3,
    end: DVec3,
    normal: DVec3,
    /// Cleared once the opposite half-edge has been seen.
    open: bool,
}

/// Builds the outline of `mesh`.
///
/// Edges are matched with their reverse direction only, so two faces with
/// inconsistent winding keep their shared edge as if it were a boundary.
///
/// # Example
///
/// ```rust
/// use qec_mesh::edges::edges_geometry;
/// use qec_mesh::primitives::create_plane;
///
/// // The diagonal of a flat quad is dropped, leaving the four sides.
/// let outline = edges_geometry(&create_plane(1.0, 1.0).unwrap(), 1.0);
/// assert_eq!(outline.segment_count(), 4);
/// ```
pub fn edges_geometry(mesh: &Mesh, threshold_angle_deg: f64) -> LineSegments {
    let threshold_dot = threshold_angle_deg.to_radians().cos();
    let precision = 10f64.powi(EDGE_POSITION_PRECISION);
    let key = |p: DVec3| -> PositionKey {
        (
            (p.x * precision).round() as i64,
            (p.y * precision).round() as i64,
            (p.z * precision).round() as i64,
        )
    };

    let mut outline = LineSegments::new();
    let mut order: Vec<(PositionKey, PositionKey)> = Vec::new();
    let mut edges: HashMap<(PositionKey, PositionKey), HalfEdge> = HashMap::new();

    for i in 0..mesh.triangle_count() {
        let corners = mesh.triangle_corners(i);
        let keys = corners.map(key);

        if keys[0] == keys[1] || keys[1] == keys[2] || keys[2] == keys[0] {
            continue;
        }

        let normal = (corners[1] - corners[0])
            .cross(corners[2] - corners[0])
            .normalize_or_zero();

        for j in 0..3 {
            let next = (j + 1) % 3;
            let forward = (keys[j], keys[next]);
            let reverse = (keys[next], keys[j]);

            if let Some(twin) = edges.get_mut(&reverse).filter(|twin| twin.open) {
                if normal.dot(twin.normal) <= threshold_dot {
                    outline.push(corners[j], corners[next]);
                }
                twin.open = false;
            } else if let Entry::Vacant(slot) = edges.entry(forward) {
                slot.insert(HalfEdge {
                    start: corners[j],
                    end: corners[next],
                    normal,
                    open: true,
                });
                order.push(forward);
            }
        }
    }

    for id in order {
        if let Some(edge) = edges.get(&id).filter(|edge| edge.open) {
            outline.push(edge.start, edge.end);
        }
    }

    outline
}
