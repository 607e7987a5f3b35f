//! # Rotated Toric Layout
//!
//! Generates the coordinate tables of a rotated toric code of size
//! `(Lx, Ly, Lz)`, the same tables a server would otherwise send.
//!
//! ```text
//! horizontal qubits   x, y odd    z odd     (1 ≤ z ≤ 2Lz+1)
//! vertical qubits     x, y even   z even    (x+y) % 4 == 2
//! vertices            x, y even   z odd     (x+y) % 4 == 2
//! horizontal faces    x, y even   z odd     (x+y) % 4 == 0
//! vertical faces      x, y odd    z even
//! ```
//!
//! Odd `x`, `y` run over `1..2L`, even ones over `2..=2L`.

use crate::axis::{QubitAxis, QubitAxisTable};
use crate::coord::Coord;
use crate::element::StabilizerKind;
use crate::error::LatticeError;
use crate::index::{CodeIndices, IndexTable, StabilizerTable};

/// Size of a rotated toric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotatedToricLayout {
    pub lx: u32,
    pub ly: u32,
    pub lz: u32,
}

impl RotatedToricLayout {
    pub const fn new(lx: u32, ly: u32, lz: u32) -> Self {
        Self { lx, ly, lz }
    }

    fn odd(limit: u32) -> impl Iterator<Item = i64> + Clone {
        (1..2 * i64::from(limit)).step_by(2)
    }

    fn even(limit: u32) -> impl Iterator<Item = i64> + Clone {
        (2..=2 * i64::from(limit)).step_by(2)
    }

    /// Every `(x, y, z)` of the three ranges, x outermost.
    fn grid(
        xs: impl Iterator<Item = i64> + Clone,
        ys: impl Iterator<Item = i64> + Clone,
        zs: impl Iterator<Item = i64> + Clone,
    ) -> impl Iterator<Item = Coord> {
        xs.flat_map(move |x| {
            let zs = zs.clone();
            ys.clone()
                .flat_map(move |y| zs.clone().map(move |z| Coord::new(x, y, z)))
        })
    }

    fn horizontal_qubits(&self) -> impl Iterator<Item = Coord> {
        Self::grid(Self::odd(self.lx), Self::odd(self.ly), (1..=2 * i64::from(self.lz) + 1).step_by(2))
    }

    fn vertical_qubits(&self) -> impl Iterator<Item = Coord> {
        Self::grid(Self::even(self.lx), Self::even(self.ly), Self::even(self.lz))
            .filter(|c| c.diagonal_class() == 2)
    }

    /// Qubit coordinates in index order: horizontal, then vertical.
    pub fn qubit_coords(&self) -> Vec<Coord> {
        self.horizontal_qubits().chain(self.vertical_qubits()).collect()
    }

    pub fn vertex_coords(&self) -> Vec<Coord> {
        Self::grid(Self::even(self.lx), Self::even(self.ly), (1..=2 * i64::from(self.lz) + 1).step_by(2))
            .filter(|c| c.diagonal_class() == 2)
            .collect()
    }

    /// Face coordinates in index order: horizontal, then vertical.
    pub fn face_coords(&self) -> Vec<Coord> {
        let horizontal = Self::grid(
            Self::even(self.lx),
            Self::even(self.ly),
            (1..=2 * i64::from(self.lz) + 1).step_by(2),
        )
        .filter(|c| c.diagonal_class() == 0);
        let vertical = Self::grid(Self::odd(self.lx), Self::odd(self.ly), Self::even(self.lz));
        horizontal.chain(vertical).collect()
    }

    /// Axis of the qubit at `coord`, assuming it is one of this layout's.
    pub fn qubit_axis(coord: Coord) -> QubitAxis {
        if coord.z.rem_euclid(2) == 0 {
            QubitAxis::Vertical
        } else if coord.diagonal_class() == 2 {
            QubitAxis::Horizontal0
        } else {
            QubitAxis::Horizontal1
        }
    }

    /// Qubit, vertex and face index tables.
    pub fn indices(&self) -> Result<CodeIndices, LatticeError> {
        let qubits = IndexTable::from_coords(self.qubit_coords())?;
        let stabilizers = StabilizerTable::new([
            (StabilizerKind::Vertex, IndexTable::from_coords(self.vertex_coords())?),
            (StabilizerKind::Face, IndexTable::from_coords(self.face_coords())?),
        ])?;
        Ok(CodeIndices::new(qubits, stabilizers))
    }

    pub fn qubit_axes(&self) -> QubitAxisTable {
        self.qubit_coords()
            .into_iter()
            .map(|coord| (coord, Self::qubit_axis(coord)))
            .collect()
    }
}
