//! # Scene
//!
//! The scene graph lattice builders insert into. Nodes are addressed by a
//! stable [`NodeId`]; replacing a node keeps its id.

use crate::node::SceneNode;

/// Handle to a top-level scene node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

/// An ordered collection of top-level nodes.
///
/// # Example
///
/// ```rust
/// use qec_mesh::material::{Material, MaterialKind};
/// use qec_mesh::primitives::create_octahedron;
/// use qec_mesh::{Scene, SceneNode};
///
/// let mut scene = Scene::new();
/// let node = SceneNode::mesh(create_octahedron(1.0).unwrap(), Material::new(MaterialKind::Toon));
/// let id = scene.add(node);
/// assert_eq!(scene.len(), 1);
/// assert!(scene.get(id).is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node and returns its handle.
    pub fn add(&mut self, node: SceneNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Swaps the node behind `id`, returning the previous one.
    ///
    /// Returns `None` and leaves the scene untouched if `id` is unknown.
    pub fn replace(&mut self, id: NodeId, node: SceneNode) -> Option<SceneNode> {
        self.nodes
            .get_mut(id.0)
            .map(|slot| std::mem::replace(slot, node))
    }

    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{Material, MaterialKind};
    use crate::primitives::{create_octahedron, create_plane};
    use glam::DVec3;

    fn node(at: DVec3) -> SceneNode {
        SceneNode::mesh(create_octahedron(1.0).unwrap(), Material::new(MaterialKind::Toon)).at(at)
    }

    #[test]
    fn test_replace_keeps_id_and_size() {
        let mut scene = Scene::new();
        let id = scene.add(node(DVec3::ZERO));
        let old = scene.replace(id, node(DVec3::X)).unwrap();
        assert_eq!(old.position, DVec3::ZERO);
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.get(id).unwrap().position, DVec3::X);
    }

    #[test]
    fn test_replace_unknown_id() {
        let mut scene = Scene::new();
        let plane = SceneNode::mesh(create_plane(1.0, 1.0).unwrap(), Material::new(MaterialKind::Basic));
        assert!(scene.replace(NodeId(3), plane).is_none());
        assert!(scene.is_empty());
    }

    #[test]
    fn test_iter_in_insertion_order() {
        let mut scene = Scene::new();
        scene.add(node(DVec3::X));
        scene.add(node(DVec3::Y));
        let positions: Vec<_> = scene.iter().map(|(_, n)| n.position).collect();
        assert_eq!(positions, vec![DVec3::X, DVec3::Y]);
    }
}
