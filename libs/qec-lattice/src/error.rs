//! # Lattice Errors
//!
//! Hard failures of table construction and element building, plus the
//! non-fatal [`BuildWarning`]s recorded while a code is built.

use std::fmt;

use config::ConfigError;
use qec_mesh::MeshError;
use serde::Serialize;
use thiserror::Error;

use crate::coord::Coord;
use crate::element::StabilizerKind;

/// Errors that can occur while assembling or building a lattice code.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LatticeError {
    /// The coordinate is not listed in the element table
    #[error("No {element} at coordinate {coord}")]
    UnknownCoordinate { element: &'static str, coord: Coord },

    /// The coordinate belongs to a different stabilizer kind
    #[error("Stabilizer at {coord} is a {found}, not a {expected}")]
    KindMismatch {
        coord: Coord,
        expected: StabilizerKind,
        found: StabilizerKind,
    },

    /// The code variant has no stabilizers of this kind
    #[error("{code} has no {kind} stabilizers")]
    UnsupportedStabilizer { code: &'static str, kind: StabilizerKind },

    /// A table key is not a stringified coordinate
    #[error("Invalid coordinate key: {0:?}")]
    InvalidCoordKey(String),

    /// Indices of a table are not exactly `0..len`
    #[error("Indices are not dense: {message}")]
    NonDenseIndex { message: String },

    /// An index lies past the end of its collection
    #[error("{element} index {index} out of range (len {len})")]
    IndexOutOfRange {
        element: &'static str,
        index: usize,
        len: usize,
    },

    /// The slot exists but nothing has been built into it yet
    #[error("{element} {index} has not been built")]
    NotBuilt { element: &'static str, index: usize },

    /// Geometry construction failed
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// Visual configuration is invalid
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl LatticeError {
    pub(crate) fn non_dense(message: impl Into<String>) -> Self {
        Self::NonDenseIndex {
            message: message.into(),
        }
    }
}

/// A recoverable problem met while building. The element is still built and
/// registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "warning", rename_all = "camelCase")]
pub enum BuildWarning {
    /// The qubit axis table has no usable entry for this qubit, so its node
    /// was left unrotated.
    UnknownQubitAxis { coord: Coord, value: Option<i64> },
}

impl BuildWarning {
    /// Coordinate of the qubit the warning is about.
    pub fn coord(&self) -> Coord {
        match self {
            BuildWarning::UnknownQubitAxis { coord, .. } => *coord,
        }
    }
}

impl fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildWarning::UnknownQubitAxis {
                coord,
                value: Some(value),
            } => write!(f, "Coordinate {coord} is not correct: qubit axis {value}"),
            BuildWarning::UnknownQubitAxis { coord, value: None } => {
                write!(f, "Coordinate {coord} is not correct: no qubit axis")
            }
        }
    }
}
