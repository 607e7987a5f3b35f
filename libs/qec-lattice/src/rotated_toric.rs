//! # Rotated Toric Codes
//!
//! The standard 3D rotated toric code and its dual (RP) variant.
//!
//! | Element        | Standard                          | Dual (RP)                          |
//! |----------------|-----------------------------------|------------------------------------|
//! | qubit          | cylinder along its edge, Phong    | sphere, Toon                       |
//! | vertex         | sphere, Toon                      | unsupported                        |
//! | face           | inset square plaquette, Toon      | inset square plaquette, dual tilt  |
//! | octahedron     | unsupported                       | octahedron of radius `lengthEdge/2` |

use config::constants::{CYLINDER_RADIAL_SEGMENTS, SPHERE_HEIGHT_SEGMENTS, SPHERE_WIDTH_SEGMENTS};
use config::VisualConfig;
use qec_mesh::material::{Material, MaterialKind};
use qec_mesh::primitives::{create_cylinder, create_octahedron, create_plane, create_sphere};
use qec_mesh::{NodeId, Rotation, SceneNode};

use crate::axis::QubitAxisTable;
use crate::code::{CubicCode, CubicCodeBuilder, ElementNode};
use crate::coord::Coord;
use crate::element::StabilizerKind;
use crate::error::LatticeError;
use crate::index::CodeIndices;
use crate::rotation::{dual_face_rotations, face_rotations, octahedron_rotations, qubit_rotations};

fn placed(code: &CubicCode, coord: Coord, node: SceneNode, rotations: &[Rotation]) -> SceneNode {
    let mut node = node.at(code.placement().position(coord));
    node.apply(rotations);
    node
}

fn sphere_node(radius: f64, material: Material) -> Result<SceneNode, LatticeError> {
    let mesh = create_sphere(radius, SPHERE_WIDTH_SEGMENTS, SPHERE_HEIGHT_SEGMENTS)?;
    Ok(SceneNode::mesh(mesh, material))
}

/// Square face plaquette, shared by both variants.
fn face_node(visual: &VisualConfig) -> Result<SceneNode, LatticeError> {
    let width = visual.face_width();
    let material = Material::new(MaterialKind::Toon)
        .with_color(visual.color.activated_face)
        .with_opacity(visual.opacity.max_deactivated_stabilizer.face)
        .transparent()
        .double_sided();
    Ok(SceneNode::mesh(create_plane(width, width)?, material))
}

/// Standard rotated toric code: cylinder qubits, sphere vertices and square
/// faces.
///
/// # Example
///
/// ```rust
/// use config::VisualConfig;
/// use qec_lattice::{CubicCodeBuilder, RotatedToric3DCode, RotatedToricLayout};
///
/// let layout = RotatedToricLayout::new(2, 2, 1);
/// let mut code = RotatedToric3DCode::new(
///     VisualConfig::default(),
///     layout.indices().unwrap(),
///     layout.qubit_axes(),
/// ).unwrap();
/// code.build().unwrap();
///
/// assert_eq!(code.code().scene().len(), 10 + 4 + 8);
/// assert!(code.code().warnings().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct RotatedToric3DCode {
    code: CubicCode,
}

impl RotatedToric3DCode {
    pub fn new(
        visual: VisualConfig,
        indices: CodeIndices,
        qubit_axes: QubitAxisTable,
    ) -> Result<Self, LatticeError> {
        Ok(Self::from_code(CubicCode::new(visual, indices, qubit_axes)?))
    }

    pub fn from_code(code: CubicCode) -> Self {
        Self { code }
    }

    pub fn into_code(self) -> CubicCode {
        self.code
    }

    pub fn build_vertex(&mut self, coord: Coord) -> Result<NodeId, LatticeError> {
        self.build_stabilizer(StabilizerKind::Vertex, coord)
    }

    pub fn build_face(&mut self, coord: Coord) -> Result<NodeId, LatticeError> {
        self.build_stabilizer(StabilizerKind::Face, coord)
    }

    fn vertex_node(&self, coord: Coord) -> Result<SceneNode, LatticeError> {
        let visual = self.code.visual();
        let material = Material::new(MaterialKind::Toon)
            .with_color(visual.color.deactivated_vertex)
            .with_opacity(visual.opacity.max_deactivated_stabilizer.vertex)
            .transparent();
        let node = sphere_node(visual.size.radius_vertex, material)?;
        Ok(placed(&self.code, coord, node, &[]))
    }

    fn face_node(&self, coord: Coord) -> Result<SceneNode, LatticeError> {
        let node = face_node(self.code.visual())?;
        Ok(placed(&self.code, coord, node, &face_rotations(coord)))
    }
}

impl CubicCodeBuilder for RotatedToric3DCode {
    const NAME: &'static str = "RotatedToric3DCode";

    fn code(&self) -> &CubicCode {
        &self.code
    }

    fn code_mut(&mut self) -> &mut CubicCode {
        &mut self.code
    }

    fn qubit_node(&self, coord: Coord) -> Result<ElementNode, LatticeError> {
        let visual = self.code.visual();
        let size = &visual.size;
        let mesh = create_cylinder(
            size.radius_edge,
            size.radius_edge,
            size.length_edge,
            CYLINDER_RADIAL_SEGMENTS,
        )?;
        let material = Material::new(MaterialKind::Phong)
            .with_color(visual.color.deactivated_edge)
            .with_opacity(visual.opacity.max_deactivated_qubit)
            .transparent();
        let node = SceneNode::mesh(mesh, material);

        Ok(match self.code.qubit_axes().axis(coord) {
            Ok(axis) => ElementNode::new(placed(&self.code, coord, node, &qubit_rotations(axis))),
            Err(warning) => ElementNode::with_warning(placed(&self.code, coord, node, &[]), warning),
        })
    }

    fn stabilizer_node(&self, kind: StabilizerKind, coord: Coord) -> Result<ElementNode, LatticeError> {
        let node = match kind {
            StabilizerKind::Vertex => self.vertex_node(coord)?,
            StabilizerKind::Face => self.face_node(coord)?,
            StabilizerKind::Octahedron => {
                return Err(LatticeError::UnsupportedStabilizer {
                    code: Self::NAME,
                    kind,
                })
            }
        };
        Ok(ElementNode::new(node))
    }
}

/// Dual (RP) rotated toric code: sphere qubits, octahedra and tilted faces.
#[derive(Debug, Clone)]
pub struct RpRotatedToric3DCode {
    code: CubicCode,
}

impl RpRotatedToric3DCode {
    pub fn new(
        visual: VisualConfig,
        indices: CodeIndices,
        qubit_axes: QubitAxisTable,
    ) -> Result<Self, LatticeError> {
        Ok(Self::from_code(CubicCode::new(visual, indices, qubit_axes)?))
    }

    pub fn from_code(code: CubicCode) -> Self {
        Self { code }
    }

    pub fn into_code(self) -> CubicCode {
        self.code
    }

    pub fn build_octahedron(&mut self, coord: Coord) -> Result<NodeId, LatticeError> {
        self.build_stabilizer(StabilizerKind::Octahedron, coord)
    }

    pub fn build_face(&mut self, coord: Coord) -> Result<NodeId, LatticeError> {
        self.build_stabilizer(StabilizerKind::Face, coord)
    }

    fn octahedron_node(&self, coord: Coord) -> Result<SceneNode, LatticeError> {
        let visual = self.code.visual();
        let material = Material::new(MaterialKind::Toon)
            .with_color(visual.color.activated_octahedron)
            .with_opacity(visual.opacity.max_deactivated_stabilizer.octahedron)
            .transparent()
            .double_sided();
        let mesh = create_octahedron(visual.size.length_edge / 2.0)?;
        Ok(placed(
            &self.code,
            coord,
            SceneNode::mesh(mesh, material),
            &octahedron_rotations(coord),
        ))
    }

    fn face_node(&self, coord: Coord) -> Result<SceneNode, LatticeError> {
        let node = face_node(self.code.visual())?;
        Ok(placed(&self.code, coord, node, &dual_face_rotations(coord)))
    }
}

impl CubicCodeBuilder for RpRotatedToric3DCode {
    const NAME: &'static str = "RpRotatedToric3DCode";

    fn code(&self) -> &CubicCode {
        &self.code
    }

    fn code_mut(&mut self) -> &mut CubicCode {
        &mut self.code
    }

    fn qubit_node(&self, coord: Coord) -> Result<ElementNode, LatticeError> {
        let visual = self.code.visual();
        let material = Material::new(MaterialKind::Toon)
            .with_color(visual.color.deactivated_qubit)
            .with_opacity(visual.opacity.max_deactivated_qubit)
            .transparent();
        let node = sphere_node(visual.size.radius_vertex, material)?;
        Ok(ElementNode::new(placed(&self.code, coord, node, &[])))
    }

    fn stabilizer_node(&self, kind: StabilizerKind, coord: Coord) -> Result<ElementNode, LatticeError> {
        let node = match kind {
            StabilizerKind::Octahedron => self.octahedron_node(coord)?,
            StabilizerKind::Face => self.face_node(coord)?,
            StabilizerKind::Vertex => {
                return Err(LatticeError::UnsupportedStabilizer {
                    code: Self::NAME,
                    kind,
                })
            }
        };
        Ok(ElementNode::new(node))
    }
}

#[cfg(test)]
mod tests;
