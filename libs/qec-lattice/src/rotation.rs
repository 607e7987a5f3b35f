//! # Rotation Rules
//!
//! Orientation of each element kind as a function of its coordinate. Every
//! function returns local rotations in application order; feed them to
//! [`qec_mesh::SceneNode::apply`].
//!
//! | Element            | Condition                   | Rotations              |
//! |--------------------|-----------------------------|------------------------|
//! | qubit              | axis 2 / 0 / 1              | X(90°) / Z(45°) / Z(−45°) |
//! | face, octahedron   | always                      | Z(45°)                 |
//! |                    | z even                      | then X(90°)            |
//! |                    | z even, (x+y) % 4 == 0      | then Y(90°)            |
//! | dual face          | z even                      | X(90°), Y(±45°), Z(45°) |
//! |                    | z odd                       | none                   |
//!
//! Parity uses Euclidean remainders, so negative coordinates fall in the
//! same classes as their positive translates.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use qec_mesh::Rotation;

use crate::axis::QubitAxis;
use crate::coord::Coord;

fn z_even(coord: Coord) -> bool {
    coord.z.rem_euclid(2) == 0
}

/// Orients a y-axis cylinder along its qubit edge.
pub fn qubit_rotations(axis: QubitAxis) -> Vec<Rotation> {
    match axis {
        QubitAxis::Vertical => vec![Rotation::x(FRAC_PI_2)],
        QubitAxis::Horizontal0 => vec![Rotation::z(FRAC_PI_4)],
        QubitAxis::Horizontal1 => vec![Rotation::z(-FRAC_PI_4)],
    }
}

/// Face plaquette of the standard code.
///
/// # Example
///
/// ```rust
/// use qec_lattice::rotation::face_rotations;
/// use qec_lattice::Coord;
/// use qec_mesh::Rotation;
/// use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
///
/// assert_eq!(
///     face_rotations(Coord::new(2, 2, 4)),
///     vec![Rotation::z(FRAC_PI_4), Rotation::x(FRAC_PI_2), Rotation::y(FRAC_PI_2)],
/// );
/// assert_eq!(face_rotations(Coord::new(2, 2, 3)), vec![Rotation::z(FRAC_PI_4)]);
/// ```
pub fn face_rotations(coord: Coord) -> Vec<Rotation> {
    let mut rotations = vec![Rotation::z(FRAC_PI_4)];
    if z_even(coord) {
        rotations.push(Rotation::x(FRAC_PI_2));
        if coord.diagonal_class() == 0 {
            rotations.push(Rotation::y(FRAC_PI_2));
        }
    }
    rotations
}

/// Octahedron of the dual code; same rule as a standard face.
pub fn octahedron_rotations(coord: Coord) -> Vec<Rotation> {
    face_rotations(coord)
}

/// Face plaquette of the dual code.
pub fn dual_face_rotations(coord: Coord) -> Vec<Rotation> {
    if !z_even(coord) {
        return Vec::new();
    }
    let tilt = if coord.diagonal_class() != 0 {
        FRAC_PI_4
    } else {
        -FRAC_PI_4
    };
    vec![Rotation::x(FRAC_PI_2), Rotation::y(tilt), Rotation::z(FRAC_PI_4)]
}
