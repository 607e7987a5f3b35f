//! # QEC Lattice
//!
//! Builds the scene of a 3D rotated toric code: one node per qubit and
//! stabilizer, placed by lattice coordinate and oriented by coordinate
//! parity, with per-element state kept in parallel metadata records.
//!
//! ## Architecture
//!
//! ```text
//! CodeIndices + QubitAxisTable ─┐
//!                               ├→ CubicCode (placement, slots, Scene)
//! VisualConfig ─────────────────┘        ↑
//!                      RotatedToric3DCode / RpRotatedToric3DCode
//!                      (geometry + rotation rules per element kind)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use config::VisualConfig;
//! use qec_lattice::{Coord, CubicCodeBuilder, RotatedToric3DCode, RotatedToricLayout};
//!
//! let layout = RotatedToricLayout::new(2, 2, 2);
//! let mut code = RotatedToric3DCode::new(
//!     VisualConfig::default(),
//!     layout.indices().unwrap(),
//!     layout.qubit_axes(),
//! ).unwrap();
//! code.build_qubit(Coord::new(1, 1, 1)).unwrap();
//!
//! let qubit = code.code().qubit(0).unwrap();
//! assert_eq!(qubit.location, Coord::new(1, 1, 1));
//! assert!(!qubit.has_error.x && !qubit.has_error.z);
//! ```
//!
//! ## Features
//!
//! - `parallel` (default): [`CubicCodeBuilder::build`] creates nodes on the
//!   rayon thread pool.

pub mod axis;
pub mod code;
pub mod coord;
pub mod element;
pub mod error;
pub mod index;
pub mod layout;
pub mod placement;
pub mod rotated_toric;
pub mod rotation;

pub use axis::{QubitAxis, QubitAxisTable, UnknownAxis};
pub use code::{CubicCode, CubicCodeBuilder, ElementNode};
pub use coord::Coord;
pub use element::{ErrorFlags, Pauli, Qubit, Stabilizer, StabilizerKind};
pub use error::{BuildWarning, LatticeError};
pub use index::{CodeIndices, IndexTable, StabilizerTable};
pub use layout::RotatedToricLayout;
pub use placement::LatticePlacement;
pub use rotated_toric::{RotatedToric3DCode, RpRotatedToric3DCode};
