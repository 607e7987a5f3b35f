//! Tests for the per-element geometry and materials of both variants.

use super::*;
use crate::index::{IndexTable, StabilizerTable};
use glam::DQuat;
use qec_mesh::material::Side;

fn indices(stabilizers: Vec<(StabilizerKind, Vec<Coord>)>) -> CodeIndices {
    let qubits = IndexTable::from_coords([Coord::new(1, 1, 1), Coord::new(2, 4, 2)]).unwrap();
    let stabilizers = StabilizerTable::new(
        stabilizers
            .into_iter()
            .map(|(kind, coords)| (kind, IndexTable::from_coords(coords).unwrap())),
    )
    .unwrap();
    CodeIndices::new(qubits, stabilizers)
}

fn standard() -> RotatedToric3DCode {
    let axes = [(Coord::new(1, 1, 1), 0), (Coord::new(2, 4, 2), 2)];
    let mut table = QubitAxisTable::new();
    for (coord, value) in axes {
        table.insert(coord, value);
    }
    RotatedToric3DCode::new(
        VisualConfig::default(),
        indices(vec![
            (StabilizerKind::Vertex, vec![Coord::new(2, 4, 1)]),
            (StabilizerKind::Face, vec![Coord::new(2, 2, 1), Coord::new(1, 1, 2)]),
        ]),
        table,
    )
    .unwrap()
}

fn dual() -> RpRotatedToric3DCode {
    RpRotatedToric3DCode::new(
        VisualConfig::default(),
        indices(vec![
            (StabilizerKind::Octahedron, vec![Coord::new(2, 4, 1)]),
            (StabilizerKind::Face, vec![Coord::new(1, 1, 2)]),
        ]),
        QubitAxisTable::new(),
    )
    .unwrap()
}

#[test]
fn standard_qubit_is_phong_cylinder() {
    let code = standard();
    let built = code.qubit_node(Coord::new(2, 4, 2)).unwrap();
    let visual = code.code().visual();

    assert!(built.warning.is_none());
    assert_eq!(built.node.material.kind, MaterialKind::Phong);
    assert_eq!(built.node.material.color, Some(visual.color.deactivated_edge));
    assert_eq!(built.node.material.opacity, visual.opacity.max_deactivated_qubit);
    assert!(built.node.material.transparent);

    let (min, max) = built.node.as_mesh().unwrap().bounding_box();
    assert!((max.y - min.y - visual.size.length_edge).abs() < 1e-12);
    assert!((max.x - visual.size.radius_edge).abs() < 1e-12);
}

#[test]
fn standard_vertex_is_unrotated_sphere() {
    let code = standard();
    let built = code.stabilizer_node(StabilizerKind::Vertex, Coord::new(2, 4, 1)).unwrap();
    assert_eq!(built.node.rotation, DQuat::IDENTITY);
    assert_eq!(built.node.material.kind, MaterialKind::Toon);
    assert_eq!(
        built.node.material.opacity,
        code.code().visual().opacity.max_deactivated_stabilizer.vertex
    );
    let (_, max) = built.node.as_mesh().unwrap().bounding_box();
    assert!((max.y - code.code().visual().size.radius_vertex).abs() < 1e-12);
}

#[test]
fn standard_face_is_inset_double_sided_plane() {
    let code = standard();
    let built = code.stabilizer_node(StabilizerKind::Face, Coord::new(2, 2, 1)).unwrap();
    let visual = code.code().visual();

    assert_eq!(built.node.material.side, Side::Double);
    assert_eq!(built.node.material.color, Some(visual.color.activated_face));
    let (min, max) = built.node.as_mesh().unwrap().bounding_box();
    assert!((max.x - min.x - visual.face_width()).abs() < 1e-12);
}

#[test]
fn standard_code_has_no_octahedra() {
    let code = standard();
    assert_eq!(
        code.stabilizer_node(StabilizerKind::Octahedron, Coord::new(2, 4, 1)).unwrap_err(),
        LatticeError::UnsupportedStabilizer {
            code: "RotatedToric3DCode",
            kind: StabilizerKind::Octahedron,
        }
    );
}

#[test]
fn dual_qubit_is_toon_sphere() {
    let code = dual();
    let built = code.qubit_node(Coord::new(1, 1, 1)).unwrap();
    assert!(built.warning.is_none(), "axis table is not consulted");
    assert_eq!(built.node.rotation, DQuat::IDENTITY);
    assert_eq!(built.node.material.kind, MaterialKind::Toon);
    assert_eq!(built.node.material.color, Some(code.code().visual().color.deactivated_qubit));
}

#[test]
fn dual_octahedron_radius_is_half_edge() {
    let code = dual();
    let built = code
        .stabilizer_node(StabilizerKind::Octahedron, Coord::new(2, 4, 1))
        .unwrap();
    let visual = code.code().visual();

    let (_, max) = built.node.as_mesh().unwrap().bounding_box();
    assert!((max.x - visual.size.length_edge / 2.0).abs() < 1e-12);
    assert_eq!(built.node.material.side, Side::Double);
    assert_eq!(built.node.material.color, Some(visual.color.activated_octahedron));
}

#[test]
fn dual_code_has_no_vertices() {
    let mut code = dual();
    assert!(matches!(
        code.stabilizer_node(StabilizerKind::Vertex, Coord::new(2, 4, 1)),
        Err(LatticeError::UnsupportedStabilizer { .. })
    ));
    // The coordinate is an octahedron in this code.
    assert!(matches!(
        code.build_stabilizer(StabilizerKind::Vertex, Coord::new(2, 4, 1)),
        Err(LatticeError::KindMismatch { .. })
    ));
    assert!(code.code().scene().is_empty());
}

#[test]
fn named_builders_fill_their_slots() {
    let mut code = dual();
    code.build_octahedron(Coord::new(2, 4, 1)).unwrap();
    code.build_face(Coord::new(1, 1, 2)).unwrap();
    assert_eq!(code.code().stabilizer(0).unwrap().kind, StabilizerKind::Octahedron);
    assert_eq!(code.code().stabilizer(1).unwrap().kind, StabilizerKind::Face);

    let mut code = standard();
    code.build_vertex(Coord::new(2, 4, 1)).unwrap();
    code.build_face(Coord::new(1, 1, 2)).unwrap();
    assert_eq!(code.code().stabilizer(0).unwrap().kind, StabilizerKind::Vertex);
    assert_eq!(code.code().stabilizer(2).unwrap().location, Coord::new(1, 1, 2));
    assert!(code.code().stabilizer(1).is_none());
}
