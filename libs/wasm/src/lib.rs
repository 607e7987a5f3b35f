//! WASM-facing entry points for lattice code scenes.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. The browser keeps the three.js scene; Rust builds the
//! nodes and hands them over as [`NodeHandle`]s. Native tests use the
//! `*_internal` helpers, which return Rust errors instead of `JsValue`s.
//!
//! ```
//! let scene = qec_wasm::rotated_toric_layout_internal(2, 2, 1, None).unwrap();
//! assert_eq!(scene.node_count(), 22);
//! ```

use config::VisualConfig;
use qec_lattice::{
    CodeIndices, Coord, CubicCode, CubicCodeBuilder, LatticeError, Pauli, QubitAxisTable,
    RotatedToric3DCode, RotatedToricLayout, RpRotatedToric3DCode, StabilizerKind,
};
use qec_mesh::{NodeId, Shape, ShapeError};
use thiserror::Error;
use wasm_bindgen::prelude::*;

mod node_handle;

pub use node_handle::NodeHandle;

/// Errors surfaced to JavaScript as message strings.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Unknown code variant: {0:?}")]
    UnknownVariant(String),

    #[error("Unknown Pauli error type: {0:?}")]
    UnknownPauli(String),

    #[error("Unknown stabilizer kind: {0:?}")]
    UnknownStabilizerKind(String),

    #[error("Scene node {index} out of range (len {len})")]
    NodeOutOfRange { index: usize, len: usize },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Lattice(#[from] LatticeError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("Failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl From<SceneError> for JsValue {
    fn from(err: SceneError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "qec_wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Routes Rust log records at or above `level` (`"error"`, `"warn"`,
/// `"info"`, `"debug"`, `"trace"`) to the browser console.
///
/// Unknown level names fall back to `"info"`. Fails if a logger is already
/// installed.
#[wasm_bindgen]
pub fn init_logging(level: &str) -> Result<(), JsValue> {
    console_log::init_with_level(parse_level(level)).map_err(SceneError::from)?;
    Ok(())
}

/// Parses a level name case-insensitively, defaulting to `Info`.
pub fn parse_level(name: &str) -> log::Level {
    name.parse().unwrap_or(log::Level::Info)
}

/// Builds a single shape from the shape factory.
///
/// `shape_json` is `{"shape": "<kind>", "params": {...}}`.
///
/// # Errors
/// Returns a JavaScript error for malformed JSON, missing parameters, a
/// location that is not 2 or 3 numbers, or degenerate dimensions.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const sphere = create_shape([1, 2, 3], '{"shape": "sphere", "params": {"radius": 0.5}}');
/// ```
#[wasm_bindgen]
pub fn create_shape(location: Vec<f64>, shape_json: &str) -> Result<NodeHandle, JsValue> {
    Ok(create_shape_internal(&location, shape_json)?)
}

/// Host-only variant of [`create_shape`].
///
/// # Examples
/// ```
/// let node = qec_wasm::create_shape_internal(
///     &[0.0, 0.0],
///     r#"{"shape": "box", "params": {"Lx": 1, "Ly": 2, "Lz": 3}}"#,
/// ).unwrap();
/// assert_eq!(node.children().len(), 1);
/// ```
pub fn create_shape_internal(location: &[f64], shape_json: &str) -> Result<NodeHandle, SceneError> {
    let shape: Shape = serde_json::from_str(shape_json)?;
    let node = qec_mesh::create_shape(location, &shape)?;
    Ok(NodeHandle::from_node(&node)?)
}

/// A standard rotated toric code sized `lx × ly × lz`, with its tables
/// generated in Rust. Pass `null` for the default visual configuration.
#[wasm_bindgen]
pub fn rotated_toric_layout(
    lx: u32,
    ly: u32,
    lz: u32,
    visual_json: Option<String>,
) -> Result<LatticeScene, JsValue> {
    Ok(rotated_toric_layout_internal(lx, ly, lz, visual_json.as_deref())?)
}

/// Host-only variant of [`rotated_toric_layout`]. The scene is already
/// built.
pub fn rotated_toric_layout_internal(
    lx: u32,
    ly: u32,
    lz: u32,
    visual_json: Option<&str>,
) -> Result<LatticeScene, SceneError> {
    let layout = RotatedToricLayout::new(lx, ly, lz);
    let visual = parse_visual(visual_json)?;
    let code = RotatedToric3DCode::new(visual, layout.indices()?, layout.qubit_axes())?;
    let mut scene = LatticeScene {
        variant: Variant::Standard(code),
    };
    scene.build_internal()?;
    Ok(scene)
}

fn parse_visual(json: Option<&str>) -> Result<VisualConfig, SceneError> {
    match json {
        Some(json) => Ok(serde_json::from_str(json)?),
        None => Ok(VisualConfig::default()),
    }
}

#[derive(Debug, Clone)]
enum Variant {
    Standard(RotatedToric3DCode),
    Dual(RpRotatedToric3DCode),
}

impl Variant {
    fn code(&self) -> &CubicCode {
        match self {
            Variant::Standard(code) => code.code(),
            Variant::Dual(code) => code.code(),
        }
    }

    fn code_mut(&mut self) -> &mut CubicCode {
        match self {
            Variant::Standard(code) => code.code_mut(),
            Variant::Dual(code) => code.code_mut(),
        }
    }

    fn build(&mut self) -> Result<(), LatticeError> {
        match self {
            Variant::Standard(code) => code.build(),
            Variant::Dual(code) => code.build(),
        }
    }

    fn build_qubit(&mut self, coord: Coord) -> Result<NodeId, LatticeError> {
        match self {
            Variant::Standard(code) => code.build_qubit(coord),
            Variant::Dual(code) => code.build_qubit(coord),
        }
    }

    fn build_stabilizer(&mut self, kind: StabilizerKind, coord: Coord) -> Result<NodeId, LatticeError> {
        match self {
            Variant::Standard(code) => code.build_stabilizer(kind, coord),
            Variant::Dual(code) => code.build_stabilizer(kind, coord),
        }
    }
}

/// A lattice code and the scene built from it.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const scene = new LatticeScene("rotated-toric", visual, indices, qubitAxis);
/// // scene.build();
/// // for (let i = 0; i < scene.node_count(); i++) addToThree(scene.node(i));
/// // scene.set_qubit_error(3, "X", true);
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct LatticeScene {
    variant: Variant,
}

#[wasm_bindgen]
impl LatticeScene {
    /// Creates an unbuilt scene.
    ///
    /// - `variant`: `"rotated-toric"` or `"rp-rotated-toric"`
    /// - `visual_json`: `{"SIZE": {...}, "COLOR": {...}, "OPACITY": {...}}`
    /// - `indices_json`: `{"qubit": {...}, "vertex" | "octahedron": {...}, "face": {...}}`
    /// - `qubit_axis_json`: `{"[x, y, z]": 0 | 1 | 2, ...}`
    #[wasm_bindgen(constructor)]
    pub fn new(
        variant: &str,
        visual_json: &str,
        indices_json: &str,
        qubit_axis_json: &str,
    ) -> Result<LatticeScene, JsValue> {
        Ok(Self::from_json(variant, visual_json, indices_json, qubit_axis_json)?)
    }

    /// Builds every qubit and stabilizer.
    pub fn build(&mut self) -> Result<(), JsValue> {
        Ok(self.build_internal()?)
    }

    /// Builds (or rebuilds) one qubit and returns its node index.
    pub fn build_qubit(&mut self, x: i64, y: i64, z: i64) -> Result<usize, JsValue> {
        let id = self
            .variant
            .build_qubit(Coord::new(x, y, z))
            .map_err(SceneError::from)?;
        Ok(id.get())
    }

    /// Builds (or rebuilds) one stabilizer of `kind` (`"vertex"`, `"face"`
    /// or `"octahedron"`) and returns its node index.
    pub fn build_stabilizer(&mut self, kind: &str, x: i64, y: i64, z: i64) -> Result<usize, JsValue> {
        Ok(self.build_stabilizer_internal(kind, Coord::new(x, y, z))?.get())
    }

    pub fn node_count(&self) -> usize {
        self.code().scene().len()
    }

    pub fn qubit_count(&self) -> usize {
        self.code().qubit_count()
    }

    pub fn stabilizer_count(&self) -> usize {
        self.code().stabilizer_count()
    }

    /// Scene node `index`, in insertion order.
    pub fn node(&self, index: usize) -> Result<NodeHandle, JsValue> {
        Ok(self.node_internal(index)?)
    }

    /// Node of the built qubit `index`, if any.
    pub fn qubit_node(&self, index: usize) -> Result<Option<NodeHandle>, JsValue> {
        let code = self.code();
        let node = code.qubit(index).and_then(|qubit| code.node(qubit.node));
        Ok(node
            .map(NodeHandle::from_node)
            .transpose()
            .map_err(SceneError::from)?)
    }

    /// Node of the built stabilizer `index`, if any.
    pub fn stabilizer_node(&self, index: usize) -> Result<Option<NodeHandle>, JsValue> {
        let code = self.code();
        let node = code
            .stabilizer(index)
            .and_then(|stabilizer| code.node(stabilizer.node));
        Ok(node
            .map(NodeHandle::from_node)
            .transpose()
            .map_err(SceneError::from)?)
    }

    /// Metadata of qubit `index` as JSON (`index`, `location`, `hasError`),
    /// or `null` if it has not been built.
    pub fn qubit_json(&self, index: usize) -> Result<String, JsValue> {
        Ok(serde_json::to_string(&self.code().qubit(index)).map_err(SceneError::from)?)
    }

    /// Metadata of stabilizer `index` as JSON (`index`, `location`, `type`,
    /// `isActivated`), or `null` if it has not been built.
    pub fn stabilizer_json(&self, index: usize) -> Result<String, JsValue> {
        Ok(serde_json::to_string(&self.code().stabilizer(index)).map_err(SceneError::from)?)
    }

    /// Sets or clears the `"X"` or `"Z"` error flag of a built qubit.
    pub fn set_qubit_error(&mut self, index: usize, pauli: &str, value: bool) -> Result<(), JsValue> {
        Ok(self.set_qubit_error_internal(index, pauli, value)?)
    }

    pub fn set_stabilizer_activated(&mut self, index: usize, value: bool) -> Result<(), JsValue> {
        self.variant
            .code_mut()
            .set_stabilizer_activated(index, value)
            .map_err(SceneError::from)?;
        Ok(())
    }

    pub fn warning_count(&self) -> usize {
        self.code().warnings().len()
    }

    /// Recorded build warnings as a JSON array.
    pub fn warnings_json(&self) -> Result<String, JsValue> {
        Ok(serde_json::to_string(self.code().warnings()).map_err(SceneError::from)?)
    }
}

impl LatticeScene {
    /// Host-only constructor.
    pub fn from_json(
        variant: &str,
        visual_json: &str,
        indices_json: &str,
        qubit_axis_json: &str,
    ) -> Result<Self, SceneError> {
        let visual: VisualConfig = serde_json::from_str(visual_json)?;
        let indices: CodeIndices = serde_json::from_str(indices_json)?;
        let qubit_axes: QubitAxisTable = serde_json::from_str(qubit_axis_json)?;

        let variant = match variant {
            "rotated-toric" => Variant::Standard(RotatedToric3DCode::new(visual, indices, qubit_axes)?),
            "rp-rotated-toric" => Variant::Dual(RpRotatedToric3DCode::new(visual, indices, qubit_axes)?),
            other => return Err(SceneError::UnknownVariant(other.to_string())),
        };
        Ok(Self { variant })
    }

    pub fn build_internal(&mut self) -> Result<(), SceneError> {
        Ok(self.variant.build()?)
    }

    pub fn build_stabilizer_internal(&mut self, kind: &str, coord: Coord) -> Result<NodeId, SceneError> {
        let kind = match kind {
            "vertex" => StabilizerKind::Vertex,
            "face" => StabilizerKind::Face,
            "octahedron" => StabilizerKind::Octahedron,
            other => return Err(SceneError::UnknownStabilizerKind(other.to_string())),
        };
        Ok(self.variant.build_stabilizer(kind, coord)?)
    }

    pub fn node_internal(&self, index: usize) -> Result<NodeHandle, SceneError> {
        let scene = self.code().scene();
        let (_, node) = scene.iter().nth(index).ok_or(SceneError::NodeOutOfRange {
            index,
            len: scene.len(),
        })?;
        Ok(NodeHandle::from_node(node)?)
    }

    pub fn set_qubit_error_internal(&mut self, index: usize, pauli: &str, value: bool) -> Result<(), SceneError> {
        let pauli = match pauli {
            "X" => Pauli::X,
            "Z" => Pauli::Z,
            other => return Err(SceneError::UnknownPauli(other.to_string())),
        };
        Ok(self.variant.code_mut().set_qubit_error(index, pauli, value)?)
    }

    /// The underlying code.
    pub fn code(&self) -> &CubicCode {
        self.variant.code()
    }
}
