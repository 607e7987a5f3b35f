//! # Line Segments
//!
//! Unindexed line geometry used for outlines.

use glam::DVec3;

use crate::mesh::flatten_f32;

/// A list of independent line segments, stored as endpoint pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineSegments {
    points: Vec<DVec3>,
}

impl LineSegments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the segment `start -> end`.
    pub fn push(&mut self, start: DVec3, end: DVec3) {
        self.points.push(start);
        self.points.push(end);
    }

    /// Number of segments.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.points.len() / 2
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Endpoints as `[start, end, start, end, ...]`.
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Iterates over `(start, end)` pairs.
    pub fn segments(&self) -> impl Iterator<Item = (DVec3, DVec3)> + '_ {
        self.points.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    /// Exports endpoints as a flat f32 buffer for GPU.
    pub fn points_f32(&self) -> Vec<f32> {
        flatten_f32(&self.points)
    }
}
