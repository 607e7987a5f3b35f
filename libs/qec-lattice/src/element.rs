//! # Elements
//!
//! Semantic state of built qubits and stabilizers, kept beside the render
//! node rather than on it. A record points at its node through a
//! [`NodeId`] into the code's [`qec_mesh::Scene`].

use std::fmt;

use qec_mesh::NodeId;
use serde::{Deserialize, Serialize};

use crate::coord::Coord;

/// Kind of a stabilizer element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StabilizerKind {
    Vertex,
    Octahedron,
    Face,
}

impl StabilizerKind {
    /// The kind's name as used in index payloads (`"vertex"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            StabilizerKind::Vertex => "vertex",
            StabilizerKind::Face => "face",
            StabilizerKind::Octahedron => "octahedron",
        }
    }
}

impl fmt::Display for StabilizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pauli error type tracked per qubit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pauli {
    X,
    Z,
}

/// Error flags of a qubit (`hasError`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorFlags {
    #[serde(rename = "X")]
    pub x: bool,
    #[serde(rename = "Z")]
    pub z: bool,
}

impl ErrorFlags {
    pub fn get(&self, pauli: Pauli) -> bool {
        match pauli {
            Pauli::X => self.x,
            Pauli::Z => self.z,
        }
    }

    pub fn set(&mut self, pauli: Pauli, value: bool) {
        match pauli {
            Pauli::X => self.x = value,
            Pauli::Z => self.z = value,
        }
    }

    /// Whether any error is present.
    pub fn any(&self) -> bool {
        self.x || self.z
    }
}

/// A built qubit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Qubit {
    pub index: usize,
    pub location: Coord,
    #[serde(skip)]
    pub node: NodeId,
    pub has_error: ErrorFlags,
}

impl Qubit {
    pub fn new(index: usize, location: Coord, node: NodeId) -> Self {
        Self {
            index,
            location,
            node,
            has_error: ErrorFlags::default(),
        }
    }
}

/// A built stabilizer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stabilizer {
    pub index: usize,
    pub location: Coord,
    #[serde(rename = "type")]
    pub kind: StabilizerKind,
    #[serde(skip)]
    pub node: NodeId,
    pub is_activated: bool,
}

impl Stabilizer {
    pub fn new(index: usize, location: Coord, kind: StabilizerKind, node: NodeId) -> Self {
        Self {
            index,
            location,
            kind,
            node,
            is_activated: false,
        }
    }
}
