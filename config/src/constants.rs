//! # Constants
//!
//! Fixed numbers shared by the mesh and lattice crates: tessellation
//! resolution, outline styling and the face plaquette inset. Anything a user
//! can change lives in [`crate::visual`] instead.

// =============================================================================
// TESSELLATION
// =============================================================================

/// Columns of a sphere (around the equator). Matches the front-end's
/// `SphereGeometry(r, 32, 32)`.
///
/// ```rust
/// use config::constants::{MIN_RADIAL_SEGMENTS, SPHERE_WIDTH_SEGMENTS};
/// assert!(SPHERE_WIDTH_SEGMENTS >= MIN_RADIAL_SEGMENTS);
/// ```
pub const SPHERE_WIDTH_SEGMENTS: u32 = 32;

/// Rows of a sphere, pole to pole.
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 32;

/// Sides of a qubit or shape-factory cylinder.
pub const CYLINDER_RADIAL_SEGMENTS: u32 = 32;

pub const MIN_RADIAL_SEGMENTS: u32 = 3;

pub const MIN_HEIGHT_SEGMENTS: u32 = 2;

/// Triangles with less area than this are degenerate.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-12;

// =============================================================================
// OUTLINES
// =============================================================================

/// Two faces meeting at less than this many degrees share an invisible edge.
///
/// One degree keeps the diagonal of a split quad hidden while every real
/// crease of a box or cuboctahedron is drawn:
///
/// ```rust
/// use config::constants::EDGE_THRESHOLD_ANGLE_DEG;
/// assert!(EDGE_THRESHOLD_ANGLE_DEG.to_radians().cos() > 0.999);
/// ```
pub const EDGE_THRESHOLD_ANGLE_DEG: f64 = 1.0;

/// Positions are rounded to this many decimals before edges are matched.
pub const EDGE_POSITION_PRECISION: i32 = 4;

pub const WIREFRAME_COLOR: u32 = 0x000000;

/// Outline width for boxes, cubes and cuboctahedra.
pub const WIREFRAME_LINE_WIDTH: f64 = 2.0;

pub const TRIANGLE_LINE_WIDTH: f64 = 1.0;

/// Outlines draw after the solid they belong to.
pub const WIREFRAME_RENDER_ORDER: i32 = 1;

// =============================================================================
// LATTICE
// =============================================================================

/// A face plaquette is `lengthEdge - FACE_INSET` wide, so neighbouring faces
/// never touch.
///
/// ```rust
/// use config::constants::FACE_INSET;
/// assert!((2.0 - FACE_INSET - 1.7).abs() < 1e-12);
/// ```
pub const FACE_INSET: f64 = 0.3;
