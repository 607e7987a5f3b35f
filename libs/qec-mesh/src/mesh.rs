//! # Mesh
//!
//! Indexed triangle geometry shared by every solid primitive. Positions and
//! normals stay in f64 until they are flattened into GPU buffers.

use config::constants::DEGENERATE_AREA_EPSILON;
use glam::DVec3;

/// Three vertex indices, counter-clockwise when seen from outside.
pub type Triangle = [u32; 3];

/// An indexed triangle mesh.
///
/// ```rust
/// use glam::DVec3;
/// use qec_mesh::Mesh;
///
/// let mut mesh = Mesh::new();
/// let a = mesh.add_vertex(DVec3::ZERO);
/// let b = mesh.add_vertex(DVec3::X);
/// let c = mesh.add_vertex(DVec3::Y);
/// mesh.add_triangle(a, b, c);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    triangles: Vec<Triangle>,
    /// One per vertex when present.
    normals: Option<Vec<DVec3>>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps precomputed vertex and triangle lists; normals are left unset.
    pub fn from_parts(vertices: Vec<DVec3>, triangles: Vec<Triangle>) -> Self {
        Self {
            vertices,
            triangles,
            normals: None,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Appends a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        self.vertices.push(position);
        (self.vertices.len() - 1) as u32
    }

    pub fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.triangles.push([a, b, c]);
    }

    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Panics if `index` is out of range.
    pub fn triangle(&self, index: usize) -> Triangle {
        self.triangles[index]
    }

    /// Positions of the corners of triangle `index`.
    pub fn triangle_corners(&self, index: usize) -> [DVec3; 3] {
        self.triangles[index].map(|i| self.vertices[i as usize])
    }

    pub fn set_normals(&mut self, normals: Vec<DVec3>) {
        self.normals = Some(normals);
    }

    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Smooth normals: each vertex gets the area-weighted average of the
    /// faces that use it.
    pub fn compute_normals(&mut self) {
        let mut sums = vec![DVec3::ZERO; self.vertices.len()];
        for index in 0..self.triangles.len() {
            let [a, b, c] = self.triangle_corners(index);
            let face = (b - a).cross(c - a);
            for vertex in self.triangles[index] {
                sums[vertex as usize] += face;
            }
        }
        self.normals = Some(sums.into_iter().map(DVec3::normalize_or_zero).collect());
    }

    /// `(min, max)` corners; both zero for a mesh without vertices.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some(&first) = self.vertices.first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        self.vertices
            .iter()
            .fold((first, first), |(min, max), &v| (min.min(v), max.max(v)))
    }

    /// True when every triangle references existing, distinct vertices and
    /// encloses a non-zero area.
    pub fn validate(&self) -> bool {
        let in_range = |i: u32| (i as usize) < self.vertices.len();
        (0..self.triangles.len()).all(|index| {
            let [a, b, c] = self.triangles[index];
            if !(in_range(a) && in_range(b) && in_range(c)) || a == b || b == c || a == c {
                return false;
            }
            let [p, q, r] = self.triangle_corners(index);
            (q - p).cross(r - p).length() / 2.0 >= DEGENERATE_AREA_EPSILON
        })
    }

    /// Positions as `[x, y, z, x, y, z, ...]`.
    pub fn vertices_f32(&self) -> Vec<f32> {
        flatten_f32(&self.vertices)
    }

    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.concat()
    }

    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_deref().map(flatten_f32)
    }
}

pub(crate) fn flatten_f32(points: &[DVec3]) -> Vec<f32> {
    points
        .iter()
        .flat_map(|p| p.as_vec3().to_array())
        .collect()
}
