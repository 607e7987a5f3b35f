//! # Shape Factory
//!
//! Builds one positioned, oriented node from a shape description. The
//! description arrives from the front-end as
//! `{"shape": "<kind>", "params": {...}}`; a missing required parameter is a
//! deserialization error, so a malformed description never reaches geometry
//! construction.
//!
//! | Shape | Geometry | Orientation |
//! |---|---|---|
//! | sphere | UV sphere | none |
//! | rectangle | plane | from `normal`, then roll by `angle` |
//! | cylinder | cylinder along y | `angle` about z, then realigned to `axis` |
//! | octahedron | octahedron | `angle` about z |
//! | box / cube | box + outline | none |
//! | triangle | triangle + outline, baked at `location` | none |
//! | cuboctahedron | unit cuboctahedron + outline | none |

use std::f64::consts::FRAC_PI_2;

use config::constants::{
    CYLINDER_RADIAL_SEGMENTS, EDGE_THRESHOLD_ANGLE_DEG, SPHERE_HEIGHT_SEGMENTS,
    SPHERE_WIDTH_SEGMENTS, TRIANGLE_LINE_WIDTH, WIREFRAME_COLOR, WIREFRAME_LINE_WIDTH,
    WIREFRAME_RENDER_ORDER,
};
use glam::DVec3;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::edges::edges_geometry;
use crate::error::ShapeError;
use crate::material::{Material, MaterialKind};
use crate::mesh::Mesh;
use crate::node::{Axis, Rotation, SceneNode};
use crate::primitives::{
    create_cuboctahedron, create_cuboid, create_cylinder, create_octahedron, create_plane,
    create_sphere, create_triangle,
};

/// Parameters of a sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereParams {
    pub radius: f64,
}

/// Parameters of a rectangle (plane).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangleParams {
    pub w: f64,
    pub h: f64,
    pub normal: [f64; 3],
    pub angle: f64,
}

/// Parameters of a cylinder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderParams {
    pub radius: f64,
    pub length: f64,
    pub angle: f64,
    /// Long axis of the cylinder; y when absent.
    #[serde(default)]
    pub axis: Option<Axis>,
}

/// Parameters of an octahedron.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OctahedronParams {
    pub length: f64,
    pub angle: f64,
}

/// Parameters of a box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxParams {
    #[serde(rename = "Lx")]
    pub lx: f64,
    #[serde(rename = "Ly")]
    pub ly: f64,
    #[serde(rename = "Lz")]
    pub lz: f64,
}

/// Parameters of a cube.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubeParams {
    pub length: f64,
}

impl From<CubeParams> for BoxParams {
    fn from(cube: CubeParams) -> Self {
        Self {
            lx: cube.length,
            ly: cube.length,
            lz: cube.length,
        }
    }
}

/// Parameters of a triangle: corner offsets from the location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleParams {
    pub vertices: [[f64; 3]; 3],
}

/// Parameters of a cuboctahedron.
///
/// `angle` is accepted for symmetry with the other solids but not applied.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CuboctahedronParams {
    #[serde(default)]
    pub angle: Option<f64>,
}

/// A shape description.
///
/// Every shape except the cuboctahedron requires `params`.
///
/// # Example
///
/// ```rust
/// use qec_mesh::shapes::{Shape, SphereParams};
///
/// let shape: Shape = serde_json::from_str(
///     r#"{"shape": "sphere", "params": {"radius": 0.5}}"#,
/// ).unwrap();
/// assert_eq!(shape, Shape::Sphere(SphereParams { radius: 0.5 }));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", content = "params", rename_all = "lowercase")]
pub enum Shape {
    Sphere(SphereParams),
    Rectangle(RectangleParams),
    Cylinder(CylinderParams),
    Octahedron(OctahedronParams),
    Box(BoxParams),
    Cube(CubeParams),
    Triangle(TriangleParams),
    Cuboctahedron(CuboctahedronParams),
}

impl Shape {
    /// The front-end name of this shape kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Sphere(_) => "sphere",
            Shape::Rectangle(_) => "rectangle",
            Shape::Cylinder(_) => "cylinder",
            Shape::Octahedron(_) => "octahedron",
            Shape::Box(_) => "box",
            Shape::Cube(_) => "cube",
            Shape::Triangle(_) => "triangle",
            Shape::Cuboctahedron(_) => "cuboctahedron",
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum ShapeKind {
    Sphere,
    Rectangle,
    Cylinder,
    Octahedron,
    Box,
    Cube,
    Triangle,
    Cuboctahedron,
}

#[derive(Deserialize)]
struct RawShape {
    shape: ShapeKind,
    #[serde(default)]
    params: serde_json::Value,
}

impl<'de> Deserialize<'de> for Shape {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let RawShape { shape, params } = RawShape::deserialize(deserializer)?;
        if params.is_null() {
            return match shape {
                ShapeKind::Cuboctahedron => Ok(Shape::Cuboctahedron(CuboctahedronParams::default())),
                _ => Err(de::Error::missing_field("params")),
            };
        }

        let shape = match shape {
            ShapeKind::Sphere => serde_json::from_value(params).map(Shape::Sphere),
            ShapeKind::Rectangle => serde_json::from_value(params).map(Shape::Rectangle),
            ShapeKind::Cylinder => serde_json::from_value(params).map(Shape::Cylinder),
            ShapeKind::Octahedron => serde_json::from_value(params).map(Shape::Octahedron),
            ShapeKind::Box => serde_json::from_value(params).map(Shape::Box),
            ShapeKind::Cube => serde_json::from_value(params).map(Shape::Cube),
            ShapeKind::Triangle => serde_json::from_value(params).map(Shape::Triangle),
            ShapeKind::Cuboctahedron => serde_json::from_value(params).map(Shape::Cuboctahedron),
        };
        shape.map_err(de::Error::custom)
    }
}

/// A shape location; a 2D location lies in the `z = 0` plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location(pub DVec3);

impl Location {
    /// Reads a location from 2 or 3 coordinates.
    ///
    /// # Example
    ///
    /// ```rust
    /// use qec_mesh::shapes::Location;
    /// use glam::DVec3;
    ///
    /// assert_eq!(Location::from_slice(&[1.0, 2.0]).unwrap().0, DVec3::new(1.0, 2.0, 0.0));
    /// assert!(Location::from_slice(&[1.0]).is_err());
    /// ```
    pub fn from_slice(coords: &[f64]) -> Result<Self, ShapeError> {
        match *coords {
            [x, y] => Ok(Self(DVec3::new(x, y, 0.0))),
            [x, y, z] => Ok(Self(DVec3::new(x, y, z))),
            _ => Err(ShapeError::InvalidLocation(coords.len())),
        }
    }
}

/// Builds the node for `shape` at `location`.
///
/// # Example
///
/// ```rust
/// use qec_mesh::shapes::{create_shape, Shape, CubeParams};
///
/// let node = create_shape(&[1.0, 2.0, 3.0], &Shape::Cube(CubeParams { length: 2.0 })).unwrap();
/// assert_eq!(node.children.len(), 1);
/// ```
pub fn create_shape(location: &[f64], shape: &Shape) -> Result<SceneNode, ShapeError> {
    let Location(position) = Location::from_slice(location)?;

    let node = match shape {
        Shape::Sphere(params) => sphere(position, params)?,
        Shape::Rectangle(params) => rectangle(position, params)?,
        Shape::Cylinder(params) => cylinder(position, params)?,
        Shape::Octahedron(params) => octahedron(position, params)?,
        Shape::Box(params) => cuboid(position, params)?,
        Shape::Cube(params) => cuboid(position, &BoxParams::from(*params))?,
        Shape::Triangle(params) => triangle(position, params)?,
        Shape::Cuboctahedron(_) => cuboctahedron(position),
    };

    Ok(node)
}

/// Orientation of a rectangle facing `normal`, rolled by `angle`.
///
/// `theta` is the azimuth of the normal's xz-projection measured from +x
/// (zero when the projection vanishes) and `alpha` its elevation out of the
/// xz-plane.
///
/// # Example
///
/// ```rust
/// use qec_mesh::shapes::rectangle_rotations;
/// use qec_mesh::node::Rotation;
/// use glam::DVec3;
/// use std::f64::consts::FRAC_PI_2;
///
/// // A vertical normal has no xz-projection, so theta falls back to zero.
/// let rotations = rectangle_rotations(DVec3::Y, 0.0).unwrap();
/// let expected = [Rotation::y(FRAC_PI_2), Rotation::x(FRAC_PI_2), Rotation::z(0.0)];
/// for (got, want) in rotations.iter().zip(&expected) {
///     assert!(got.approx_eq(want, 1e-12));
/// }
/// ```
pub fn rectangle_rotations(normal: DVec3, angle: f64) -> Result<[Rotation; 3], ShapeError> {
    let norm = normal.length();
    if !(norm.is_finite() && norm > 0.0) {
        return Err(ShapeError::ZeroNormal);
    }

    let norm_xz = normal.x.hypot(normal.z);
    let theta = if norm_xz == 0.0 {
        0.0
    } else {
        (normal.x / norm_xz).clamp(-1.0, 1.0).acos()
    };
    let alpha = (norm_xz / norm).clamp(-1.0, 1.0).acos();

    Ok([
        Rotation::y(theta + FRAC_PI_2),
        Rotation::x(alpha),
        Rotation::z(angle),
    ])
}

/// Orientation of a cylinder: roll by `angle`, then realign the long axis.
///
/// # Example
///
/// ```rust
/// use qec_mesh::shapes::cylinder_rotations;
/// use qec_mesh::node::{Axis, Rotation};
/// use std::f64::consts::FRAC_PI_2;
///
/// let rotations = cylinder_rotations(0.0, Some(Axis::Z));
/// assert_eq!(rotations, vec![Rotation::z(0.0), Rotation::x(FRAC_PI_2)]);
/// ```
pub fn cylinder_rotations(angle: f64, axis: Option<Axis>) -> Vec<Rotation> {
    let mut rotations = vec![Rotation::z(angle)];
    match axis {
        Some(Axis::X) => rotations.push(Rotation::z(FRAC_PI_2)),
        Some(Axis::Z) => rotations.push(Rotation::x(FRAC_PI_2)),
        Some(Axis::Y) | None => {}
    }
    rotations
}

fn surface_material(kind: MaterialKind) -> Material {
    Material::new(kind).transparent()
}

fn outline(mesh: &Mesh, material: Material) -> SceneNode {
    SceneNode::lines(edges_geometry(mesh, EDGE_THRESHOLD_ANGLE_DEG), material)
}

fn hidden_outline_material() -> Material {
    Material::new(MaterialKind::LineBasic)
        .with_color(WIREFRAME_COLOR)
        .with_line_width(WIREFRAME_LINE_WIDTH)
        .with_opacity(0.0)
        .transparent()
}

fn sphere(position: DVec3, params: &SphereParams) -> Result<SceneNode, ShapeError> {
    let mesh = create_sphere(params.radius, SPHERE_WIDTH_SEGMENTS, SPHERE_HEIGHT_SEGMENTS)?;
    Ok(SceneNode::mesh(mesh, surface_material(MaterialKind::Toon)).at(position))
}

fn rectangle(position: DVec3, params: &RectangleParams) -> Result<SceneNode, ShapeError> {
    let rotations = rectangle_rotations(DVec3::from_array(params.normal), params.angle)?;
    let mesh = create_plane(params.w, params.h)?;
    let mut node =
        SceneNode::mesh(mesh, surface_material(MaterialKind::Toon).double_sided()).at(position);
    node.apply(&rotations);
    Ok(node)
}

fn cylinder(position: DVec3, params: &CylinderParams) -> Result<SceneNode, ShapeError> {
    let mesh = create_cylinder(
        params.radius,
        params.radius,
        params.length,
        CYLINDER_RADIAL_SEGMENTS,
    )?;
    let mut node = SceneNode::mesh(mesh, surface_material(MaterialKind::Phong)).at(position);
    node.apply(&cylinder_rotations(params.angle, params.axis));
    Ok(node)
}

fn octahedron(position: DVec3, params: &OctahedronParams) -> Result<SceneNode, ShapeError> {
    let mesh = create_octahedron(params.length)?;
    let mut node =
        SceneNode::mesh(mesh, surface_material(MaterialKind::Toon).double_sided()).at(position);
    node.rotate_z(params.angle);
    Ok(node)
}

fn cuboid(position: DVec3, params: &BoxParams) -> Result<SceneNode, ShapeError> {
    let mesh = create_cuboid(DVec3::new(params.lx, params.ly, params.lz))?;
    let mut wireframe = outline(&mesh, hidden_outline_material());
    wireframe.render_order = WIREFRAME_RENDER_ORDER;

    let mut node = SceneNode::mesh(mesh, surface_material(MaterialKind::Toon)).at(position);
    node.add(wireframe);
    Ok(node)
}

fn triangle(position: DVec3, params: &TriangleParams) -> Result<SceneNode, ShapeError> {
    // Corners are baked at the location; the node itself stays at the origin.
    let corners = params.vertices.map(|offset| position + DVec3::from_array(offset));
    let mesh = create_triangle(corners)?;

    let line_material = Material::new(MaterialKind::LineBasic)
        .with_color(WIREFRAME_COLOR)
        .with_line_width(TRIANGLE_LINE_WIDTH)
        .transparent();
    let mut wireframe = outline(&mesh, line_material);
    wireframe.render_order = WIREFRAME_RENDER_ORDER;

    let mut node = SceneNode::mesh(mesh, surface_material(MaterialKind::Basic).double_sided());
    node.add(wireframe);
    Ok(node)
}

fn cuboctahedron(position: DVec3) -> SceneNode {
    let mesh = create_cuboctahedron();
    let wireframe = outline(&mesh, hidden_outline_material());

    let mut node =
        SceneNode::mesh(mesh, surface_material(MaterialKind::Toon).double_sided()).at(position);
    node.add(wireframe);
    node
}

#[cfg(test)]
mod tests;
