//! Tests for the shape factory.

use super::*;
use crate::error::MeshError;
use crate::material::Side;
use crate::primitives::{CUBOCTAHEDRON_FACES, CUBOCTAHEDRON_VERTICES};
use approx::assert_abs_diff_eq;
use std::f64::consts::FRAC_PI_4;

fn parse(json: &str) -> Shape {
    serde_json::from_str(json).expect("valid shape description")
}

#[test]
fn sphere_is_placed_without_rotation() {
    let node = create_shape(&[1.0, 2.0, 3.0], &parse(r#"{"shape": "sphere", "params": {"radius": 0.5}}"#))
        .unwrap();
    assert_eq!(node.position, DVec3::new(1.0, 2.0, 3.0));
    assert_eq!(node.rotation, glam::DQuat::IDENTITY);
    assert_eq!(node.material.kind, MaterialKind::Toon);
    assert!(node.material.transparent);
}

#[test]
fn two_coordinate_location_defaults_z() {
    let node = create_shape(&[4.0, 5.0], &Shape::Sphere(SphereParams { radius: 1.0 })).unwrap();
    assert_eq!(node.position, DVec3::new(4.0, 5.0, 0.0));
}

#[test]
fn location_of_wrong_length_is_rejected() {
    let shape = Shape::Sphere(SphereParams { radius: 1.0 });
    assert_eq!(create_shape(&[], &shape).unwrap_err(), ShapeError::InvalidLocation(0));
    assert_eq!(
        create_shape(&[1.0, 2.0, 3.0, 4.0], &shape).unwrap_err(),
        ShapeError::InvalidLocation(4)
    );
}

#[test]
fn missing_parameters_fail_at_parse_time() {
    let result: Result<Shape, _> =
        serde_json::from_str(r#"{"shape": "cylinder", "params": {"radius": 0.1, "length": 1.0}}"#);
    assert!(result.is_err(), "angle is required");

    let result: Result<Shape, _> = serde_json::from_str(r#"{"shape": "hexagon", "params": {}}"#);
    assert!(result.is_err(), "unknown shape kinds are rejected");
}

#[test]
fn params_may_be_omitted_only_for_cuboctahedron() {
    assert_eq!(
        parse(r#"{"shape": "cuboctahedron"}"#),
        Shape::Cuboctahedron(CuboctahedronParams::default())
    );
    assert_eq!(
        parse(r#"{"shape": "cuboctahedron", "params": {"angle": 0.5}}"#),
        Shape::Cuboctahedron(CuboctahedronParams { angle: Some(0.5) })
    );

    let err = serde_json::from_str::<Shape>(r#"{"shape": "sphere"}"#).unwrap_err();
    assert!(err.to_string().contains("missing field `params`"), "{err}");

    let err = serde_json::from_str::<Shape>(r#"{"shape": "sphere", "params": {}}"#).unwrap_err();
    assert!(err.to_string().contains("radius"), "{err}");
}

#[test]
fn degenerate_dimensions_propagate_from_primitives() {
    let err = create_shape(&[0.0, 0.0, 0.0], &Shape::Sphere(SphereParams { radius: 0.0 })).unwrap_err();
    assert!(matches!(err, ShapeError::Mesh(MeshError::DegenerateGeometry { .. })));
}

#[test]
fn rectangle_with_vertical_normal_uses_zero_theta() {
    let rotations = rectangle_rotations(DVec3::Y, 0.0).unwrap();
    assert!(rotations.iter().all(|r| r.angle.is_finite()));
    assert_abs_diff_eq!(rotations[0].angle, FRAC_PI_2, epsilon = 1e-12);
    assert_abs_diff_eq!(rotations[1].angle, FRAC_PI_2, epsilon = 1e-12);

    let node = create_shape(
        &[0.0, 0.0, 0.0],
        &parse(r#"{"shape": "rectangle", "params": {"w": 1, "h": 2, "normal": [0, 1, 0], "angle": 0}}"#),
    )
    .unwrap();
    // The plane's +z normal ends up along the requested axis.
    let facing = node.rotation * DVec3::Z;
    assert_abs_diff_eq!(facing.dot(DVec3::Y).abs(), 1.0, epsilon = 1e-12);
    assert_eq!(node.material.side, Side::Double);
}

#[test]
fn rectangle_facing_x() {
    let rotations = rectangle_rotations(DVec3::new(3.0, 0.0, 0.0), FRAC_PI_4).unwrap();
    assert_abs_diff_eq!(rotations[0].angle, FRAC_PI_2, epsilon = 1e-12);
    assert_abs_diff_eq!(rotations[1].angle, 0.0, epsilon = 1e-12);
    assert_eq!(rotations[2], Rotation::z(FRAC_PI_4));

    let facing = crate::node::compose(&rotations) * DVec3::Z;
    assert!(facing.abs_diff_eq(DVec3::X, 1e-12));
}

#[test]
fn rectangle_rejects_zero_normal() {
    assert_eq!(rectangle_rotations(DVec3::ZERO, 0.0).unwrap_err(), ShapeError::ZeroNormal);
}

#[test]
fn cylinder_axis_realignment() {
    let along = |axis: Option<Axis>| {
        let params = CylinderParams {
            radius: 0.1,
            length: 1.0,
            angle: 0.0,
            axis,
        };
        let node = create_shape(&[0.0, 0.0, 0.0], &Shape::Cylinder(params)).unwrap();
        node.rotation * DVec3::Y
    };

    assert_abs_diff_eq!(along(None).dot(DVec3::Y).abs(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(along(Some(Axis::Y)).dot(DVec3::Y).abs(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(along(Some(Axis::X)).dot(DVec3::X).abs(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(along(Some(Axis::Z)).dot(DVec3::Z).abs(), 1.0, epsilon = 1e-12);
}

#[test]
fn cylinder_uses_phong_material() {
    let shape = parse(r#"{"shape": "cylinder", "params": {"radius": 0.1, "length": 1, "angle": 0, "axis": "x"}}"#);
    let node = create_shape(&[0.0, 0.0, 0.0], &shape).unwrap();
    assert_eq!(node.material.kind, MaterialKind::Phong);
    assert!(node.children.is_empty());
}

#[test]
fn octahedron_is_rolled_about_z() {
    let shape = Shape::Octahedron(OctahedronParams {
        length: 2.0,
        angle: FRAC_PI_4,
    });
    let node = create_shape(&[0.0, 0.0, 1.0], &shape).unwrap();
    assert!(node.rotation.abs_diff_eq(glam::DQuat::from_rotation_z(FRAC_PI_4), 1e-12));
    let (_, max) = node.as_mesh().unwrap().bounding_box();
    assert_abs_diff_eq!(max.x, 2.0, epsilon = 1e-12);
}

#[test]
fn cube_matches_box_with_equal_sides() {
    let cube = create_shape(&[1.0, 1.0, 1.0], &parse(r#"{"shape": "cube", "params": {"length": 2}}"#)).unwrap();
    let cuboid = create_shape(
        &[1.0, 1.0, 1.0],
        &parse(r#"{"shape": "box", "params": {"Lx": 2, "Ly": 2, "Lz": 2}}"#),
    )
    .unwrap();
    assert_eq!(cube, cuboid);
}

#[test]
fn box_has_hidden_outline_child() {
    let node = create_shape(&[0.0, 0.0, 0.0], &Shape::Box(BoxParams { lx: 1.0, ly: 2.0, lz: 3.0 })).unwrap();
    assert_eq!(node.rotation, glam::DQuat::IDENTITY);
    assert_eq!(node.children.len(), 1);

    let wireframe = &node.children[0];
    assert_eq!(wireframe.as_lines().unwrap().segment_count(), 12);
    assert_eq!(wireframe.render_order, WIREFRAME_RENDER_ORDER);
    assert_eq!(wireframe.material.kind, MaterialKind::LineBasic);
    assert_eq!(wireframe.material.color, Some(WIREFRAME_COLOR));
    assert_eq!(wireframe.material.opacity, 0.0);
    // The child sits at its parent's origin.
    assert_eq!(wireframe.position, DVec3::ZERO);
}

#[test]
fn triangle_is_baked_at_location() {
    let shape = parse(
        r#"{"shape": "triangle", "params": {"vertices": [[0, 0, 0], [1, 0, 0], [0, 1, 0]]}}"#,
    );
    let node = create_shape(&[10.0, 20.0, 30.0], &shape).unwrap();

    assert_eq!(node.position, DVec3::ZERO);
    let mesh = node.as_mesh().unwrap();
    assert_eq!(
        mesh.vertices(),
        &[
            DVec3::new(10.0, 20.0, 30.0),
            DVec3::new(11.0, 20.0, 30.0),
            DVec3::new(10.0, 21.0, 30.0),
        ]
    );
    assert_eq!(node.children[0].as_lines().unwrap().segment_count(), 3);
    assert_eq!(node.children[0].material.opacity, 1.0);
}

#[test]
fn cuboctahedron_outline_comes_from_fixed_solid() {
    let node = create_shape(
        &[3.0, -1.0, 2.0],
        &parse(r#"{"shape": "cuboctahedron", "params": {"angle": 1.0}}"#),
    )
    .unwrap();

    assert_eq!(node.position, DVec3::new(3.0, -1.0, 2.0));
    assert_eq!(node.rotation, glam::DQuat::IDENTITY, "angle is ignored");

    let mesh = node.as_mesh().unwrap();
    assert_eq!(mesh.vertex_count(), CUBOCTAHEDRON_VERTICES.len());
    assert_eq!(mesh.triangles(), &CUBOCTAHEDRON_FACES);

    assert_eq!(node.children.len(), 1);
    let outline = node.children[0].as_lines().unwrap();
    assert_eq!(outline.segment_count(), 24);
    for point in outline.points() {
        assert!(mesh.vertices().contains(point), "{point:?} is not a solid vertex");
    }
}

#[test]
fn shape_kind_names_round_trip() {
    for json in [
        r#"{"shape": "sphere", "params": {"radius": 1}}"#,
        r#"{"shape": "cube", "params": {"length": 1}}"#,
        r#"{"shape": "cuboctahedron", "params": {}}"#,
    ] {
        let shape = parse(json);
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(value["shape"], shape.kind());
    }
}
