//! # Materials
//!
//! Render-material descriptions handed to the front-end alongside geometry.

use serde::{Deserialize, Serialize};

/// Shading model of a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MaterialKind {
    /// Specular shading, used for qubit cylinders.
    Phong,
    /// Cel shading, used for most lattice elements.
    Toon,
    /// Unlit.
    Basic,
    /// Unlit lines, used for outlines.
    LineBasic,
}

/// Which faces of a surface are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    #[default]
    Front,
    Double,
}

/// A material description.
///
/// # Example
///
/// ```rust
/// use qec_mesh::material::{Material, MaterialKind, Side};
///
/// let material = Material::new(MaterialKind::Toon)
///     .with_color(0xf1c232)
///     .with_opacity(0.4)
///     .transparent()
///     .double_sided();
/// assert_eq!(material.side, Side::Double);
/// assert!(material.transparent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub kind: MaterialKind,
    /// `0xRRGGBB`; `None` leaves the renderer's default.
    pub color: Option<u32>,
    pub opacity: f64,
    pub transparent: bool,
    pub side: Side,
    pub line_width: f64,
}

impl Material {
    /// An opaque, front-sided material of the given kind.
    pub fn new(kind: MaterialKind) -> Self {
        Self {
            kind,
            color: None,
            opacity: 1.0,
            transparent: false,
            side: Side::Front,
            line_width: 1.0,
        }
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn transparent(mut self) -> Self {
        self.transparent = true;
        self
    }

    pub fn double_sided(mut self) -> Self {
        self.side = Side::Double;
        self
    }
}
