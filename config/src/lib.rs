//! # Config Crate
//!
//! Centralized configuration for the lattice code renderer.
//! Tessellation counts, tolerances and the visual configuration
//! (`SIZE`, `COLOR`, `OPACITY`) used by the lattice builders live here so
//! that the geometry crates stay free of scattered literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::FACE_INSET;
//! use config::visual::VisualConfig;
//!
//! let visual = VisualConfig::default();
//! assert!(visual.size.length_edge > FACE_INSET);
//! assert!(visual.face_width() > 0.0);
//! ```
//!
//! Visual settings deserialize from the same JSON keys the three.js
//! front-end uses, so a front-end config object can be passed through as is.

pub mod constants;
pub mod visual;

pub use visual::{Colors, ConfigError, Opacity, Size, StabilizerOpacity, VisualConfig};
