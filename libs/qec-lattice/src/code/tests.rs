//! Tests for slot registration and element state.

use super::*;
use crate::index::{IndexTable, StabilizerTable};
use glam::DVec3;
use qec_mesh::material::{Material, MaterialKind};
use qec_mesh::primitives::create_octahedron;

fn node_at(position: DVec3) -> ElementNode {
    let mesh = create_octahedron(0.5).unwrap();
    ElementNode::new(SceneNode::mesh(mesh, Material::new(MaterialKind::Toon)).at(position))
}

fn small_code() -> CubicCode {
    let qubits = IndexTable::from_coords([Coord::new(1, 1, 1), Coord::new(2, 4, 2)]).unwrap();
    let faces = IndexTable::from_coords([Coord::new(2, 2, 1)]).unwrap();
    let vertices = IndexTable::from_coords([Coord::new(2, 4, 1)]).unwrap();
    let stabilizers = StabilizerTable::new([
        (StabilizerKind::Vertex, vertices),
        (StabilizerKind::Face, faces),
    ])
    .unwrap();
    CubicCode::new(
        VisualConfig::default(),
        CodeIndices::new(qubits, stabilizers),
        QubitAxisTable::new(),
    )
    .unwrap()
}

#[test]
fn slots_are_presized_and_empty() {
    let code = small_code();
    assert_eq!(code.qubit_count(), 2);
    assert_eq!(code.stabilizer_count(), 2);
    assert!(code.scene().is_empty());
    assert!(code.qubit(0).is_none());
    assert!(!code.is_complete());
}

#[test]
fn register_adds_to_scene_with_fresh_state() {
    let mut code = small_code();
    let id = code.register_qubit(1, Coord::new(2, 4, 2), node_at(DVec3::X)).unwrap();

    let qubit = code.qubit(1).unwrap();
    assert_eq!(qubit.index, 1);
    assert_eq!(qubit.location, Coord::new(2, 4, 2));
    assert_eq!(qubit.node, id);
    assert!(!qubit.has_error.any());
    assert_eq!(code.node(id).unwrap().position, DVec3::X);
    assert_eq!(code.scene().len(), 1);
}

#[test]
fn reregistering_replaces_in_place() {
    let mut code = small_code();
    let first = code
        .register_stabilizer(1, Coord::new(2, 2, 1), StabilizerKind::Face, node_at(DVec3::X))
        .unwrap();
    code.set_stabilizer_activated(1, true).unwrap();

    let second = code
        .register_stabilizer(1, Coord::new(2, 2, 1), StabilizerKind::Face, node_at(DVec3::Y))
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(code.scene().len(), 1);
    assert_eq!(code.node(second).unwrap().position, DVec3::Y);
    assert!(!code.stabilizer(1).unwrap().is_activated);
}

#[test]
fn register_out_of_range() {
    let mut code = small_code();
    let err = code
        .register_qubit(2, Coord::new(1, 1, 1), node_at(DVec3::ZERO))
        .unwrap_err();
    assert_eq!(
        err,
        LatticeError::IndexOutOfRange {
            element: "qubit",
            index: 2,
            len: 2
        }
    );
    assert!(code.scene().is_empty());
}

#[test]
fn warnings_are_recorded_once_per_registration() {
    let mut code = small_code();
    let coord = Coord::new(1, 1, 1);
    let warning = BuildWarning::UnknownQubitAxis { coord, value: None };
    let built = ElementNode::with_warning(node_at(DVec3::ZERO).node, warning.clone());

    code.register_qubit(0, coord, built).unwrap();
    assert_eq!(code.warnings(), &[warning]);
    assert!(code.qubit(0).is_some(), "still registered");
}

#[test]
fn rebuilt_qubit_keeps_only_latest_warning() {
    let mut code = small_code();
    let coord = Coord::new(1, 1, 1);
    let first = BuildWarning::UnknownQubitAxis { coord, value: None };
    let second = BuildWarning::UnknownQubitAxis { coord, value: Some(7) };

    code.register_qubit(0, coord, ElementNode::with_warning(node_at(DVec3::ZERO).node, first))
        .unwrap();
    code.register_qubit(0, coord, ElementNode::with_warning(node_at(DVec3::ZERO).node, second.clone()))
        .unwrap();
    assert_eq!(code.warnings(), &[second]);

    code.register_qubit(0, coord, node_at(DVec3::ZERO)).unwrap();
    assert!(code.warnings().is_empty());
}

#[test]
fn state_setters_require_built_elements() {
    let mut code = small_code();
    assert_eq!(
        code.set_qubit_error(0, Pauli::X, true).unwrap_err(),
        LatticeError::NotBuilt {
            element: "qubit",
            index: 0
        }
    );
    assert!(matches!(
        code.set_stabilizer_activated(9, true).unwrap_err(),
        LatticeError::IndexOutOfRange { index: 9, .. }
    ));

    code.register_qubit(0, Coord::new(1, 1, 1), node_at(DVec3::ZERO)).unwrap();
    code.set_qubit_error(0, Pauli::X, true).unwrap();
    let flags = code.qubit(0).unwrap().has_error;
    assert!(flags.x && !flags.z);
}

#[test]
fn stabilizer_lookup_reports_kind_mismatch() {
    let code = small_code();
    assert_eq!(code.stabilizer_index(StabilizerKind::Face, Coord::new(2, 2, 1)), Ok(1));
    assert_eq!(
        code.stabilizer_index(StabilizerKind::Face, Coord::new(2, 4, 1)),
        Err(LatticeError::KindMismatch {
            coord: Coord::new(2, 4, 1),
            expected: StabilizerKind::Face,
            found: StabilizerKind::Vertex,
        })
    );
    assert_eq!(
        code.stabilizer_index(StabilizerKind::Vertex, Coord::new(7, 7, 7)),
        Err(LatticeError::UnknownCoordinate {
            element: "vertex",
            coord: Coord::new(7, 7, 7),
        })
    );
    assert!(code.qubit_index(Coord::new(7, 7, 7)).is_err());
}

#[test]
fn invalid_visual_config_is_rejected() {
    let mut visual = VisualConfig::default();
    visual.size.length_edge = 0.2;
    let result = CubicCode::new(visual, CodeIndices::default(), QubitAxisTable::new());
    assert!(matches!(result, Err(LatticeError::Config(_))));
}

#[test]
fn placement_recenters_all_elements() {
    let code = small_code();
    let placement = code.placement();
    // x spans 1..=2, y spans 1..=4 and z spans 1..=2 over all elements.
    let scale = placement.length_edge() * std::f64::consts::SQRT_2 / 4.0;
    assert!((placement.offset().x - scale * 1.5).abs() < 1e-12);
    assert!((placement.offset().y - scale * 2.5).abs() < 1e-12);
    assert!((placement.offset().z - 0.75).abs() < 1e-12);
}
