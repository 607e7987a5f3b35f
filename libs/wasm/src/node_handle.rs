//! # Node Handle
//!
//! WASM-friendly copy of a scene node that can be transferred to JavaScript.

use qec_mesh::{Geometry, SceneNode};
use wasm_bindgen::prelude::*;

/// A scene node flattened into GPU buffers and plain transform data.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const handle = create_shape([0, 0, 0], '{"shape": "cube", "params": {"length": 1}}');
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(handle.vertices(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(handle.indices(), 1));
///
/// const mesh = new THREE.Mesh(geometry, materialFrom(JSON.parse(handle.material_json())));
/// mesh.position.fromArray(handle.position());
/// mesh.quaternion.fromArray(handle.quaternion());
///
/// for (let i = 0; i < handle.child_count; i++) {
///     mesh.add(toLineSegments(handle.child(i)));
/// }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct NodeHandle {
    /// Whether the geometry is line segments rather than triangles
    lines: bool,
    /// Vertex positions (or segment endpoints) as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, ...]; empty for lines
    indices: Vec<u32>,
    /// Optional vertex normals as [nx, ny, nz, ...]
    normals: Option<Vec<f32>>,
    position: [f64; 3],
    /// Local rotation as [x, y, z, w]
    quaternion: [f64; 4],
    material_json: String,
    render_order: i32,
    children: Vec<NodeHandle>,
}

#[wasm_bindgen]
impl NodeHandle {
    /// Returns true for line-segment geometry.
    #[wasm_bindgen(getter)]
    pub fn is_lines(&self) -> bool {
        self.lines
    }

    /// Returns the number of vertices (segment endpoints for lines).
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        (self.vertices.len() / 3) as u32
    }

    /// Returns the number of triangles; zero for lines.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        (self.indices.len() / 3) as u32
    }

    /// Returns the vertex positions as a Float32Array.
    #[wasm_bindgen]
    pub fn vertices(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.vertices[..])
    }

    /// Returns the triangle indices as a Uint32Array.
    #[wasm_bindgen]
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.indices[..])
    }

    /// Returns the vertex normals as a Float32Array, if available.
    #[wasm_bindgen]
    pub fn normals(&self) -> Option<js_sys::Float32Array> {
        self.normals
            .as_ref()
            .map(|n| js_sys::Float32Array::from(&n[..]))
    }

    /// Returns the node position as [x, y, z].
    #[wasm_bindgen]
    pub fn position(&self) -> Vec<f64> {
        self.position.to_vec()
    }

    /// Returns the node rotation as a quaternion [x, y, z, w].
    #[wasm_bindgen]
    pub fn quaternion(&self) -> Vec<f64> {
        self.quaternion.to_vec()
    }

    /// Returns the material description as JSON.
    #[wasm_bindgen]
    pub fn material_json(&self) -> String {
        self.material_json.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn render_order(&self) -> i32 {
        self.render_order
    }

    /// Returns the number of child nodes (outlines).
    #[wasm_bindgen(getter)]
    pub fn child_count(&self) -> u32 {
        self.children.len() as u32
    }

    /// Returns a copy of the child at `index`.
    #[wasm_bindgen]
    pub fn child(&self, index: u32) -> Option<NodeHandle> {
        self.children.get(index as usize).cloned()
    }
}

impl NodeHandle {
    /// Creates a NodeHandle from a SceneNode, children included.
    pub fn from_node(node: &SceneNode) -> Result<Self, serde_json::Error> {
        let (lines, vertices, indices, normals) = match &node.geometry {
            Geometry::Triangles(mesh) => (
                false,
                mesh.vertices_f32(),
                mesh.indices_u32(),
                mesh.normals_f32(),
            ),
            Geometry::Lines(segments) => (true, segments.points_f32(), Vec::new(), None),
        };

        let children = node
            .children
            .iter()
            .map(NodeHandle::from_node)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            lines,
            vertices,
            indices,
            normals,
            position: node.position.to_array(),
            quaternion: node.rotation.to_array(),
            material_json: serde_json::to_string(&node.material)?,
            render_order: node.render_order,
            children,
        })
    }

    /// Host-side view of the vertex buffer.
    pub fn vertex_buffer(&self) -> &[f32] {
        &self.vertices
    }

    /// Host-side view of the index buffer.
    pub fn index_buffer(&self) -> &[u32] {
        &self.indices
    }

    pub fn position_array(&self) -> [f64; 3] {
        self.position
    }

    pub fn quaternion_array(&self) -> [f64; 4] {
        self.quaternion
    }

    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }
}
