//! # Scene Nodes
//!
//! A positioned, oriented piece of geometry with its material and children.
//! Rotations compose in the node's local frame: rotating about x and then
//! about z turns about the node's own (already rotated) z axis.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::lines::LineSegments;
use crate::material::Material;
use crate::mesh::Mesh;

/// A principal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector along the axis.
    pub fn unit(self) -> DVec3 {
        match self {
            Axis::X => DVec3::X,
            Axis::Y => DVec3::Y,
            Axis::Z => DVec3::Z,
        }
    }
}

/// A single rotation about a local principal axis, angle in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub axis: Axis,
    pub angle: f64,
}

impl Rotation {
    pub const fn x(angle: f64) -> Self {
        Self { axis: Axis::X, angle }
    }

    pub const fn y(angle: f64) -> Self {
        Self { axis: Axis::Y, angle }
    }

    pub const fn z(angle: f64) -> Self {
        Self { axis: Axis::Z, angle }
    }

    /// The rotation as a quaternion.
    pub fn quat(&self) -> DQuat {
        match self.axis {
            Axis::X => DQuat::from_rotation_x(self.angle),
            Axis::Y => DQuat::from_rotation_y(self.angle),
            Axis::Z => DQuat::from_rotation_z(self.angle),
        }
    }

    /// Whether two rotations agree within `tolerance` radians.
    pub fn approx_eq(&self, other: &Rotation, tolerance: f64) -> bool {
        self.axis == other.axis && (self.angle - other.angle).abs() <= tolerance
    }
}

/// Composes local rotations in application order.
///
/// # Example
///
/// ```rust
/// use qec_mesh::node::{compose, Rotation};
/// use glam::DVec3;
/// use std::f64::consts::FRAC_PI_2;
///
/// let q = compose(&[Rotation::z(FRAC_PI_2), Rotation::x(FRAC_PI_2)]);
/// assert!((q * DVec3::Y).abs_diff_eq(DVec3::Z, 1e-12));
/// ```
pub fn compose(rotations: &[Rotation]) -> DQuat {
    rotations
        .iter()
        .fold(DQuat::IDENTITY, |q, rotation| q * rotation.quat())
}

/// Geometry carried by a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Triangles(Mesh),
    Lines(LineSegments),
}

impl Geometry {
    /// Local-space points: mesh vertices or segment endpoints.
    pub fn points(&self) -> &[DVec3] {
        match self {
            Geometry::Triangles(mesh) => mesh.vertices(),
            Geometry::Lines(lines) => lines.points(),
        }
    }
}

/// A renderable node.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub geometry: Geometry,
    pub material: Material,
    pub position: DVec3,
    pub rotation: DQuat,
    pub render_order: i32,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// A triangle-mesh node at the origin with no rotation.
    pub fn mesh(mesh: Mesh, material: Material) -> Self {
        Self::with_geometry(Geometry::Triangles(mesh), material)
    }

    /// A line-segments node at the origin with no rotation.
    pub fn lines(lines: LineSegments, material: Material) -> Self {
        Self::with_geometry(Geometry::Lines(lines), material)
    }

    fn with_geometry(geometry: Geometry, material: Material) -> Self {
        Self {
            geometry,
            material,
            position: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
            render_order: 0,
            children: Vec::new(),
        }
    }

    pub fn at(mut self, position: DVec3) -> Self {
        self.position = position;
        self
    }

    /// The triangle mesh, if this node carries one.
    pub fn as_mesh(&self) -> Option<&Mesh> {
        match &self.geometry {
            Geometry::Triangles(mesh) => Some(mesh),
            Geometry::Lines(_) => None,
        }
    }

    /// The line segments, if this node carries them.
    pub fn as_lines(&self) -> Option<&LineSegments> {
        match &self.geometry {
            Geometry::Lines(lines) => Some(lines),
            Geometry::Triangles(_) => None,
        }
    }

    /// Rotates about the node's local axis.
    pub fn rotate(&mut self, rotation: Rotation) {
        self.rotation = (self.rotation * rotation.quat()).normalize();
    }

    pub fn rotate_x(&mut self, angle: f64) {
        self.rotate(Rotation::x(angle));
    }

    pub fn rotate_y(&mut self, angle: f64) {
        self.rotate(Rotation::y(angle));
    }

    pub fn rotate_z(&mut self, angle: f64) {
        self.rotate(Rotation::z(angle));
    }

    /// Applies rotations in order.
    pub fn apply(&mut self, rotations: &[Rotation]) {
        for rotation in rotations {
            self.rotate(*rotation);
        }
    }

    /// Attaches a child node, positioned relative to this node.
    pub fn add(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    /// Maps a local point into the parent's frame.
    #[inline]
    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        self.rotation * point + self.position
    }

    /// The node's own points in the parent's frame.
    pub fn world_points(&self) -> Vec<DVec3> {
        self.geometry
            .points()
            .iter()
            .map(|p| self.transform_point(*p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::MaterialKind;
    use crate::primitives::create_plane;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    fn plane_node() -> SceneNode {
        SceneNode::mesh(create_plane(1.0, 1.0).unwrap(), Material::new(MaterialKind::Toon))
    }

    #[test]
    fn test_rotations_compose_in_local_frame() {
        let mut node = plane_node();
        node.rotate_x(FRAC_PI_2);
        node.rotate_z(FRAC_PI_2);
        // Local z is world -y after the x turn; turning about it maps x to z.
        assert!((node.rotation * DVec3::X).abs_diff_eq(DVec3::Z, 1e-12));
        assert!(node
            .rotation
            .abs_diff_eq(compose(&[Rotation::x(FRAC_PI_2), Rotation::z(FRAC_PI_2)]), 1e-12));
    }

    #[test]
    fn test_transform_point_rotates_then_translates() {
        let mut node = plane_node().at(DVec3::new(1.0, 2.0, 3.0));
        node.rotate_z(FRAC_PI_2);
        let p = node.transform_point(DVec3::X);
        assert!(p.abs_diff_eq(DVec3::new(1.0, 3.0, 3.0), 1e-12));
    }

    #[test]
    fn test_apply_matches_individual_calls() {
        let rotations = [Rotation::z(FRAC_PI_4), Rotation::x(FRAC_PI_2), Rotation::y(FRAC_PI_2)];
        let mut a = plane_node();
        a.apply(&rotations);
        let mut b = plane_node();
        b.rotate_z(FRAC_PI_4);
        b.rotate_x(FRAC_PI_2);
        b.rotate_y(FRAC_PI_2);
        assert!(a.rotation.abs_diff_eq(b.rotation, 1e-12));
    }

    #[test]
    fn test_world_points_follow_position() {
        let node = plane_node().at(DVec3::splat(10.0));
        for p in node.world_points() {
            assert!((p.z - 10.0).abs() < 1e-12);
        }
    }
}
