//! # Index Tables
//!
//! Dense coordinate ↔ index maps. The server sends one map per element
//! kind, keyed by stringified coordinate:
//!
//! ```json
//! {"qubit": {"[1, 1, 1]": 0, ...}, "vertex": {...}, "face": {...}}
//! ```
//!
//! Stabilizer kinds share a single index space. Kinds are stacked in
//! [`StabilizerKind`] order (vertex, octahedron, face) when read from such a
//! payload, each kind's local indices shifted past the earlier kinds.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::coord::Coord;
use crate::element::StabilizerKind;
use crate::error::LatticeError;

/// Coordinate → index map whose indices are exactly `0..len`.
///
/// # Example
///
/// ```rust
/// use qec_lattice::{Coord, IndexTable};
///
/// let table: IndexTable = serde_json::from_str(r#"{"[1, 1, 1]": 1, "[3, 1, 1]": 0}"#).unwrap();
/// assert_eq!(table.index_of(Coord::new(1, 1, 1)), Some(1));
/// assert_eq!(table.coord_of(0), Some(Coord::new(3, 1, 1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "BTreeMap<String, usize>")]
pub struct IndexTable {
    coords: Vec<Coord>,
    indices: HashMap<Coord, usize>,
}

impl IndexTable {
    /// Numbers coordinates in iteration order.
    pub fn from_coords(coords: impl IntoIterator<Item = Coord>) -> Result<Self, LatticeError> {
        Self::from_pairs(coords.into_iter().enumerate().map(|(i, c)| (c, i)))
    }

    /// Builds a table from explicit `(coordinate, index)` pairs.
    ///
    /// Fails if a coordinate or index repeats, or if the indices leave a gap.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Coord, usize)>) -> Result<Self, LatticeError> {
        let pairs: Vec<(Coord, usize)> = pairs.into_iter().collect();
        let len = pairs.len();

        let mut slots: Vec<Option<Coord>> = vec![None; len];
        let mut indices = HashMap::with_capacity(len);

        for (coord, index) in pairs {
            let slot = slots.get_mut(index).ok_or_else(|| {
                LatticeError::non_dense(format!("index {index} of {coord} exceeds table size {len}"))
            })?;
            if let Some(other) = slot {
                return Err(LatticeError::non_dense(format!(
                    "index {index} assigned to both {other} and {coord}"
                )));
            }
            if indices.insert(coord, index).is_some() {
                return Err(LatticeError::non_dense(format!("coordinate {coord} listed twice")));
            }
            *slot = Some(coord);
        }

        // Every index is < len and none repeats, so every slot is filled.
        let coords = slots.into_iter().flatten().collect();
        Ok(Self { coords, indices })
    }

    #[inline]
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        self.indices.get(&coord).copied()
    }

    #[inline]
    pub fn coord_of(&self, index: usize) -> Option<Coord> {
        self.coords.get(index).copied()
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        self.indices.contains_key(&coord)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// `(index, coordinate)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Coord)> + '_ {
        self.coords.iter().copied().enumerate()
    }
}

impl TryFrom<BTreeMap<String, usize>> for IndexTable {
    type Error = LatticeError;

    fn try_from(map: BTreeMap<String, usize>) -> Result<Self, Self::Error> {
        let pairs = map
            .into_iter()
            .map(|(key, index)| Ok((key.parse::<Coord>()?, index)))
            .collect::<Result<Vec<_>, LatticeError>>()?;
        Self::from_pairs(pairs)
    }
}

/// All stabilizer kinds of a code in one dense index space.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StabilizerTable {
    parts: Vec<(StabilizerKind, IndexTable)>,
    offsets: Vec<usize>,
}

impl StabilizerTable {
    /// Stacks per-kind tables in the order given.
    ///
    /// # Example
    ///
    /// ```rust
    /// use qec_lattice::{Coord, IndexTable, StabilizerKind, StabilizerTable};
    ///
    /// let vertices = IndexTable::from_coords([Coord::new(2, 4, 1), Coord::new(4, 2, 1)]).unwrap();
    /// let faces = IndexTable::from_coords([Coord::new(2, 2, 1)]).unwrap();
    /// let table = StabilizerTable::new([
    ///     (StabilizerKind::Vertex, vertices),
    ///     (StabilizerKind::Face, faces),
    /// ]).unwrap();
    ///
    /// assert_eq!(table.len(), 3);
    /// assert_eq!(table.index_of(StabilizerKind::Face, Coord::new(2, 2, 1)), Some(2));
    /// ```
    pub fn new(
        parts: impl IntoIterator<Item = (StabilizerKind, IndexTable)>,
    ) -> Result<Self, LatticeError> {
        let parts: Vec<(StabilizerKind, IndexTable)> = parts.into_iter().collect();

        let mut offsets = Vec::with_capacity(parts.len());
        let mut offset = 0;
        for (i, (kind, table)) in parts.iter().enumerate() {
            if parts[..i].iter().any(|(earlier, _)| earlier == kind) {
                return Err(LatticeError::non_dense(format!("{kind} table given twice")));
            }
            offsets.push(offset);
            offset += table.len();
        }

        Ok(Self { parts, offsets })
    }

    /// Total number of stabilizers.
    pub fn len(&self) -> usize {
        self.parts.iter().map(|(_, table)| table.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Kinds present, in index order.
    pub fn kinds(&self) -> impl Iterator<Item = StabilizerKind> + '_ {
        self.parts.iter().map(|(kind, _)| *kind)
    }

    /// The kind's own table, with local indices.
    pub fn table(&self, kind: StabilizerKind) -> Option<&IndexTable> {
        self.parts.iter().find(|(k, _)| *k == kind).map(|(_, table)| table)
    }

    /// Global index of the `kind` stabilizer at `coord`.
    pub fn index_of(&self, kind: StabilizerKind, coord: Coord) -> Option<usize> {
        self.parts
            .iter()
            .zip(&self.offsets)
            .find(|((k, _), _)| *k == kind)
            .and_then(|((_, table), offset)| table.index_of(coord).map(|i| offset + i))
    }

    /// Kind and coordinate behind a global index.
    pub fn get(&self, index: usize) -> Option<(StabilizerKind, Coord)> {
        self.parts
            .iter()
            .zip(&self.offsets)
            .find(|((_, table), offset)| index >= **offset && index < **offset + table.len())
            .and_then(|((kind, table), offset)| table.coord_of(index - offset).map(|c| (*kind, c)))
    }

    /// First kind (in index order) with a stabilizer at `coord`.
    pub fn kind_at(&self, coord: Coord) -> Option<StabilizerKind> {
        self.parts
            .iter()
            .find(|(_, table)| table.contains(coord))
            .map(|(kind, _)| *kind)
    }

    /// `(global index, kind, coordinate)` triples in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, StabilizerKind, Coord)> + '_ {
        self.parts
            .iter()
            .zip(&self.offsets)
            .flat_map(|((kind, table), offset)| {
                table.iter().map(move |(i, coord)| (offset + i, *kind, coord))
            })
    }
}

/// Qubit and stabilizer indices of one code instance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "RawCodeIndices")]
pub struct CodeIndices {
    pub qubits: IndexTable,
    pub stabilizers: StabilizerTable,
}

impl CodeIndices {
    pub fn new(qubits: IndexTable, stabilizers: StabilizerTable) -> Self {
        Self { qubits, stabilizers }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCodeIndices {
    qubit: IndexTable,
    #[serde(default)]
    vertex: Option<IndexTable>,
    #[serde(default)]
    octahedron: Option<IndexTable>,
    #[serde(default)]
    face: Option<IndexTable>,
}

impl TryFrom<RawCodeIndices> for CodeIndices {
    type Error = LatticeError;

    fn try_from(raw: RawCodeIndices) -> Result<Self, Self::Error> {
        let parts = [
            (StabilizerKind::Vertex, raw.vertex),
            (StabilizerKind::Octahedron, raw.octahedron),
            (StabilizerKind::Face, raw.face),
        ]
        .into_iter()
        .filter_map(|(kind, table)| table.map(|t| (kind, t)));

        Ok(Self::new(raw.qubit, StabilizerTable::new(parts)?))
    }
}
