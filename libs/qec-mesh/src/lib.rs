//! # QEC Mesh
//!
//! Browser-safe geometry for visualizing lattice codes. Builds the primitive
//! meshes, outline geometry and positioned scene nodes that a three.js
//! front-end turns into render objects.
//!
//! ## Architecture
//!
//! ```text
//! Shape description / lattice builder → primitives (Mesh) → SceneNode → Scene
//! ```
//!
//! ## Modules
//!
//! - **Primitives**: sphere, cylinder, plane, octahedron, box,
//!   cuboctahedron and triangle meshes in three.js conventions
//! - **Edges**: outline extraction for wireframe overlays
//! - **Nodes**: position, local rotations, material and children
//! - **Shapes**: the shape factory
//!
//! ## Usage
//!
//! ```rust
//! use qec_mesh::shapes::{create_shape, Shape};
//!
//! let shape: Shape = serde_json::from_str(
//!     r#"{"shape": "octahedron", "params": {"length": 1.0, "angle": 0.0}}"#,
//! ).unwrap();
//! let node = create_shape(&[0.0, 0.0, 0.0], &shape).unwrap();
//! assert_eq!(node.as_mesh().unwrap().triangle_count(), 8);
//! ```

pub mod edges;
pub mod error;
pub mod lines;
pub mod material;
pub mod mesh;
pub mod node;
pub mod primitives;
pub mod scene;
pub mod shapes;

pub use error::{MeshError, ShapeError};
pub use lines::LineSegments;
pub use material::{Material, MaterialKind, Side};
pub use mesh::Mesh;
pub use node::{Axis, Geometry, Rotation, SceneNode};
pub use scene::{NodeId, Scene};
pub use shapes::{create_shape, Shape};
