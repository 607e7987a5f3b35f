//! Visual configuration shared by the lattice builders.
//!
//! Mirrors the `SIZE`, `COLOR` and `OPACITY` objects the front-end hands to a
//! code instance. Every struct deserializes from camelCase JSON so the same
//! payload the browser already holds can be passed through unchanged.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::FACE_INSET;

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A length or radius is zero, negative or not finite.
    #[error("{name} must be positive: {value}")]
    NonPositiveSize { name: &'static str, value: f64 },

    /// The edge length leaves no room for a face plaquette.
    #[error("lengthEdge must exceed the face inset {inset}: {value}")]
    EdgeTooShort { value: f64, inset: f64 },

    /// An opacity lies outside `[0, 1]`.
    #[error("{name} must lie in [0, 1]: {value}")]
    OpacityOutOfRange { name: &'static str, value: f64 },
}

/// Element dimensions (`SIZE`).
///
/// # Examples
/// ```
/// use config::Size;
/// let size: Size = serde_json::from_str(
///     r#"{"lengthEdge": 1.0, "radiusEdge": 0.05, "radiusVertex": 0.1}"#,
/// ).unwrap();
/// assert_eq!(size.length_edge, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Size {
    /// Edge length of the lattice; drives spacing and face size.
    pub length_edge: f64,
    /// Radius of a qubit cylinder.
    pub radius_edge: f64,
    /// Radius of a vertex (or dual qubit) sphere.
    pub radius_vertex: f64,
}

impl Default for Size {
    fn default() -> Self {
        Self {
            length_edge: 1.0,
            radius_edge: 0.05,
            radius_vertex: 0.1,
        }
    }
}

/// Element colors (`COLOR`) as `0xRRGGBB` integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Colors {
    pub deactivated_edge: u32,
    pub activated_edge: u32,
    pub deactivated_qubit: u32,
    pub deactivated_vertex: u32,
    pub activated_vertex: u32,
    pub deactivated_face: u32,
    pub activated_face: u32,
    pub deactivated_octahedron: u32,
    pub activated_octahedron: u32,
    pub x_error: u32,
    pub z_error: u32,
    pub y_error: u32,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            deactivated_edge: 0xf2f28c,
            activated_edge: 0xffbcbc,
            deactivated_qubit: 0xf2f28c,
            deactivated_vertex: 0xf2f28c,
            activated_vertex: 0xf1c232,
            deactivated_face: 0xf2f28c,
            activated_face: 0xf1c232,
            deactivated_octahedron: 0xf2f28c,
            activated_octahedron: 0xfa7921,
            x_error: 0xff0000,
            z_error: 0x25ccf7,
            y_error: 0xa55eea,
        }
    }
}

/// Opacities of deactivated stabilizers per stabilizer kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StabilizerOpacity {
    pub vertex: f64,
    pub face: f64,
    pub octahedron: f64,
}

impl Default for StabilizerOpacity {
    fn default() -> Self {
        Self {
            vertex: 0.1,
            face: 0.0,
            octahedron: 0.1,
        }
    }
}

/// Element opacities (`OPACITY`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Opacity {
    pub max_deactivated_qubit: f64,
    pub max_activated_qubit: f64,
    pub max_deactivated_stabilizer: StabilizerOpacity,
    pub activated_stabilizer: f64,
}

impl Default for Opacity {
    fn default() -> Self {
        Self {
            max_deactivated_qubit: 0.1,
            max_activated_qubit: 1.0,
            max_deactivated_stabilizer: StabilizerOpacity::default(),
            activated_stabilizer: 0.6,
        }
    }
}

/// Immutable visual settings for one code instance.
///
/// # Examples
/// ```
/// use config::VisualConfig;
/// let visual = VisualConfig::default();
/// assert!(visual.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualConfig {
    #[serde(rename = "SIZE")]
    pub size: Size,
    #[serde(rename = "COLOR")]
    pub color: Colors,
    #[serde(rename = "OPACITY")]
    pub opacity: Opacity,
}

impl VisualConfig {
    /// Builds a configuration and validates it.
    ///
    /// # Examples
    /// ```
    /// use config::{Colors, Opacity, Size, VisualConfig};
    /// let size = Size { length_edge: 2.0, radius_edge: 0.1, radius_vertex: 0.2 };
    /// let visual = VisualConfig::new(size, Colors::default(), Opacity::default()).unwrap();
    /// assert_eq!(visual.size.length_edge, 2.0);
    /// ```
    pub fn new(size: Size, color: Colors, opacity: Opacity) -> Result<Self, ConfigError> {
        let config = Self {
            size,
            color,
            opacity,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks sizes are positive and opacities are in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("lengthEdge", self.size.length_edge)?;
        positive("radiusEdge", self.size.radius_edge)?;
        positive("radiusVertex", self.size.radius_vertex)?;

        if self.size.length_edge <= FACE_INSET {
            return Err(ConfigError::EdgeTooShort {
                value: self.size.length_edge,
                inset: FACE_INSET,
            });
        }

        let opacity = &self.opacity;
        unit_interval("maxDeactivatedQubit", opacity.max_deactivated_qubit)?;
        unit_interval("maxActivatedQubit", opacity.max_activated_qubit)?;
        unit_interval("activatedStabilizer", opacity.activated_stabilizer)?;
        let stabilizer = &opacity.max_deactivated_stabilizer;
        unit_interval("maxDeactivatedStabilizer.vertex", stabilizer.vertex)?;
        unit_interval("maxDeactivatedStabilizer.face", stabilizer.face)?;
        unit_interval("maxDeactivatedStabilizer.octahedron", stabilizer.octahedron)?;
        Ok(())
    }

    /// Side length of a face plaquette.
    #[inline]
    pub fn face_width(&self) -> f64 {
        self.size.length_edge - FACE_INSET
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveSize { name, value })
    }
}

fn unit_interval(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OpacityOutOfRange { name, value })
    }
}
