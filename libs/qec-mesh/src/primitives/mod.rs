//! # Primitives
//!
//! Mesh generation for the primitive shapes placed in a lattice scene.
//! Every primitive is centered on the origin and follows the three.js
//! geometry conventions (cylinders along +y, planes in the xy-plane).

pub mod cuboctahedron;
pub mod cuboid;
pub mod cylinder;
pub mod octahedron;
pub mod plane;
pub mod sphere;
pub mod triangle;

pub use cuboctahedron::{create_cuboctahedron, CUBOCTAHEDRON_FACES, CUBOCTAHEDRON_VERTICES};
pub use cuboid::create_cuboid;
pub use cylinder::create_cylinder;
pub use octahedron::create_octahedron;
pub use plane::create_plane;
pub use sphere::create_sphere;
pub use triangle::create_triangle;
