//! # Cubic Codes
//!
//! State shared by every lattice code variant, and the [`CubicCodeBuilder`]
//! trait the variants implement.
//!
//! ## Build flow
//!
//! ```text
//! coord → index (tables) → node (variant: geometry, material, rotations)
//!       → register (slot + scene node)
//! ```
//!
//! Each qubit and stabilizer index owns one slot and one scene node.
//! Building a coordinate a second time overwrites both in place, so the
//! scene never holds more nodes than there are distinct built elements.

use config::VisualConfig;
use qec_mesh::{NodeId, Scene, SceneNode};

use crate::axis::QubitAxisTable;
use crate::coord::Coord;
use crate::element::{Pauli, Qubit, Stabilizer, StabilizerKind};
use crate::error::{BuildWarning, LatticeError};
use crate::index::CodeIndices;
use crate::placement::LatticePlacement;

/// A freshly built render node and the warning raised while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementNode {
    pub node: SceneNode,
    pub warning: Option<BuildWarning>,
}

impl ElementNode {
    pub fn new(node: SceneNode) -> Self {
        Self { node, warning: None }
    }

    pub fn with_warning(node: SceneNode, warning: BuildWarning) -> Self {
        Self {
            node,
            warning: Some(warning),
        }
    }
}

/// Lattice, tables and built elements of one code instance.
#[derive(Debug, Clone)]
pub struct CubicCode {
    visual: VisualConfig,
    placement: LatticePlacement,
    indices: CodeIndices,
    qubit_axes: QubitAxisTable,
    qubits: Vec<Option<Qubit>>,
    stabilizers: Vec<Option<Stabilizer>>,
    scene: Scene,
    warnings: Vec<BuildWarning>,
}

impl CubicCode {
    /// Creates an empty code whose placement recenters all of its elements
    /// on the origin.
    pub fn new(
        visual: VisualConfig,
        indices: CodeIndices,
        qubit_axes: QubitAxisTable,
    ) -> Result<Self, LatticeError> {
        let coords = indices
            .qubits
            .iter()
            .map(|(_, coord)| coord)
            .chain(indices.stabilizers.iter().map(|(_, _, coord)| coord));
        let placement = LatticePlacement::centered(visual.size.length_edge, coords);
        Self::with_placement(visual, placement, indices, qubit_axes)
    }

    /// Creates an empty code with an explicit placement.
    pub fn with_placement(
        visual: VisualConfig,
        placement: LatticePlacement,
        indices: CodeIndices,
        qubit_axes: QubitAxisTable,
    ) -> Result<Self, LatticeError> {
        visual.validate()?;
        Ok(Self {
            visual,
            placement,
            qubits: vec![None; indices.qubits.len()],
            stabilizers: vec![None; indices.stabilizers.len()],
            indices,
            qubit_axes,
            scene: Scene::new(),
            warnings: Vec::new(),
        })
    }

    pub fn visual(&self) -> &VisualConfig {
        &self.visual
    }

    pub fn placement(&self) -> &LatticePlacement {
        &self.placement
    }

    pub fn indices(&self) -> &CodeIndices {
        &self.indices
    }

    pub fn qubit_axes(&self) -> &QubitAxisTable {
        &self.qubit_axes
    }

    pub fn qubit_index(&self, coord: Coord) -> Result<usize, LatticeError> {
        self.indices
            .qubits
            .index_of(coord)
            .ok_or(LatticeError::UnknownCoordinate {
                element: "qubit",
                coord,
            })
    }

    pub fn stabilizer_index(&self, kind: StabilizerKind, coord: Coord) -> Result<usize, LatticeError> {
        let stabilizers = &self.indices.stabilizers;
        if let Some(index) = stabilizers.index_of(kind, coord) {
            return Ok(index);
        }
        Err(match stabilizers.kind_at(coord) {
            Some(found) => LatticeError::KindMismatch {
                coord,
                expected: kind,
                found,
            },
            None => LatticeError::UnknownCoordinate {
                element: kind.as_str(),
                coord,
            },
        })
    }

    /// Number of qubit slots.
    pub fn qubit_count(&self) -> usize {
        self.qubits.len()
    }

    /// Number of stabilizer slots.
    pub fn stabilizer_count(&self) -> usize {
        self.stabilizers.len()
    }

    /// Stores a built qubit and shows its node.
    ///
    /// Re-registering an index resets the qubit's error flags, swaps its
    /// scene node (keeping the [`NodeId`]) and replaces its earlier warning.
    pub fn register_qubit(
        &mut self,
        index: usize,
        location: Coord,
        built: ElementNode,
    ) -> Result<NodeId, LatticeError> {
        let len = self.qubits.len();
        let slot = self.qubits.get_mut(index).ok_or(LatticeError::IndexOutOfRange {
            element: "qubit",
            index,
            len,
        })?;

        let node = match slot {
            Some(existing) => {
                self.scene.replace(existing.node, built.node);
                existing.node
            }
            None => self.scene.add(built.node),
        };
        *slot = Some(Qubit::new(index, location, node));

        // A rebuilt qubit reports only its latest warning.
        self.warnings.retain(|warning| warning.coord() != location);
        if let Some(warning) = built.warning {
            self.warn(warning);
        }
        Ok(node)
    }

    /// Stores a built stabilizer and shows its node.
    pub fn register_stabilizer(
        &mut self,
        index: usize,
        location: Coord,
        kind: StabilizerKind,
        built: ElementNode,
    ) -> Result<NodeId, LatticeError> {
        let len = self.stabilizers.len();
        let slot = self
            .stabilizers
            .get_mut(index)
            .ok_or(LatticeError::IndexOutOfRange {
                element: "stabilizer",
                index,
                len,
            })?;

        let node = match slot {
            Some(existing) => {
                self.scene.replace(existing.node, built.node);
                existing.node
            }
            None => self.scene.add(built.node),
        };
        *slot = Some(Stabilizer::new(index, location, kind, node));

        if let Some(warning) = built.warning {
            self.warn(warning);
        }
        Ok(node)
    }

    fn warn(&mut self, warning: BuildWarning) {
        log::error!("{warning}");
        self.warnings.push(warning);
    }

    pub fn qubit(&self, index: usize) -> Option<&Qubit> {
        self.qubits.get(index).and_then(Option::as_ref)
    }

    pub fn stabilizer(&self, index: usize) -> Option<&Stabilizer> {
        self.stabilizers.get(index).and_then(Option::as_ref)
    }

    fn built_qubit_mut(&mut self, index: usize) -> Result<&mut Qubit, LatticeError> {
        let len = self.qubits.len();
        self.qubits
            .get_mut(index)
            .ok_or(LatticeError::IndexOutOfRange {
                element: "qubit",
                index,
                len,
            })?
            .as_mut()
            .ok_or(LatticeError::NotBuilt {
                element: "qubit",
                index,
            })
    }

    fn built_stabilizer_mut(&mut self, index: usize) -> Result<&mut Stabilizer, LatticeError> {
        let len = self.stabilizers.len();
        self.stabilizers
            .get_mut(index)
            .ok_or(LatticeError::IndexOutOfRange {
                element: "stabilizer",
                index,
                len,
            })?
            .as_mut()
            .ok_or(LatticeError::NotBuilt {
                element: "stabilizer",
                index,
            })
    }

    /// Flags or clears a Pauli error on a built qubit.
    pub fn set_qubit_error(&mut self, index: usize, pauli: Pauli, value: bool) -> Result<(), LatticeError> {
        self.built_qubit_mut(index)?.has_error.set(pauli, value);
        Ok(())
    }

    /// Activates or deactivates a built stabilizer.
    pub fn set_stabilizer_activated(&mut self, index: usize, value: bool) -> Result<(), LatticeError> {
        self.built_stabilizer_mut(index)?.is_activated = value;
        Ok(())
    }

    /// Built qubits in index order.
    pub fn built_qubits(&self) -> impl Iterator<Item = &Qubit> {
        self.qubits.iter().flatten()
    }

    /// Built stabilizers in index order.
    pub fn built_stabilizers(&self) -> impl Iterator<Item = &Stabilizer> {
        self.stabilizers.iter().flatten()
    }

    /// Whether every slot has been built.
    pub fn is_complete(&self) -> bool {
        self.qubits.iter().all(Option::is_some) && self.stabilizers.iter().all(Option::is_some)
    }

    pub fn warnings(&self) -> &[BuildWarning] {
        &self.warnings
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Render node behind `id`.
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.scene.get(id)
    }
}

/// A code variant: how each element kind is drawn.
///
/// Implementors only say how to make one element's node; indexing,
/// registration and the bulk [`build`](CubicCodeBuilder::build) are shared.
pub trait CubicCodeBuilder: Sync {
    /// Short name used in error messages.
    const NAME: &'static str;

    fn code(&self) -> &CubicCode;

    fn code_mut(&mut self) -> &mut CubicCode;

    /// Creates the node of the qubit at `coord`.
    fn qubit_node(&self, coord: Coord) -> Result<ElementNode, LatticeError>;

    /// Creates the node of the `kind` stabilizer at `coord`.
    fn stabilizer_node(&self, kind: StabilizerKind, coord: Coord) -> Result<ElementNode, LatticeError>;

    /// Builds, registers and shows the qubit at `coord`.
    fn build_qubit(&mut self, coord: Coord) -> Result<NodeId, LatticeError> {
        let index = self.code().qubit_index(coord)?;
        let built = self.qubit_node(coord)?;
        self.code_mut().register_qubit(index, coord, built)
    }

    /// Builds, registers and shows the `kind` stabilizer at `coord`.
    fn build_stabilizer(&mut self, kind: StabilizerKind, coord: Coord) -> Result<NodeId, LatticeError> {
        let index = self.code().stabilizer_index(kind, coord)?;
        let built = self.stabilizer_node(kind, coord)?;
        self.code_mut().register_stabilizer(index, coord, kind, built)
    }

    /// Builds every qubit and stabilizer listed in the index tables.
    ///
    /// Nodes are created independently per coordinate (in parallel with the
    /// `parallel` feature), then attached to the scene in index order.
    fn build(&mut self) -> Result<(), LatticeError> {
        let qubits: Vec<(usize, Coord)> = self.code().indices().qubits.iter().collect();
        let stabilizers: Vec<(usize, StabilizerKind, Coord)> =
            self.code().indices().stabilizers.iter().collect();

        let this = &*self;
        let qubit_nodes = map_elements(&qubits, |&(_, coord)| this.qubit_node(coord))?;
        let stabilizer_nodes =
            map_elements(&stabilizers, |&(_, kind, coord)| this.stabilizer_node(kind, coord))?;

        let code = self.code_mut();
        for ((index, coord), built) in qubits.into_iter().zip(qubit_nodes) {
            code.register_qubit(index, coord, built)?;
        }
        for ((index, kind, coord), built) in stabilizers.into_iter().zip(stabilizer_nodes) {
            code.register_stabilizer(index, coord, kind, built)?;
        }

        log::debug!(
            "{}: built {} qubits and {} stabilizers ({} warnings)",
            Self::NAME,
            code.qubit_count(),
            code.stabilizer_count(),
            code.warnings().len()
        );
        Ok(())
    }
}

#[cfg(feature = "parallel")]
fn map_elements<T, F>(items: &[T], f: F) -> Result<Vec<ElementNode>, LatticeError>
where
    T: Sync,
    F: Fn(&T) -> Result<ElementNode, LatticeError> + Sync + Send,
{
    use rayon::prelude::*;
    items.par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
fn map_elements<T, F>(items: &[T], f: F) -> Result<Vec<ElementNode>, LatticeError>
where
    F: Fn(&T) -> Result<ElementNode, LatticeError>,
{
    items.iter().map(f).collect()
}

#[cfg(test)]
mod tests;
