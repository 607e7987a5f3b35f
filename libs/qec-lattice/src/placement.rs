//! # Placement
//!
//! Affine map from lattice coordinates to scene positions. With edge length
//! `L` and offset `o`:
//!
//! ```text
//! x' = (L·√2/4)·x − o.x
//! y' = (L·√2/4)·y − o.y
//! z' = (L/2)·z   − o.z
//! ```
//!
//! In-plane spacing is rotated 45°, which gives the rotated code its
//! diagonal layout.

use std::f64::consts::SQRT_2;

use glam::DVec3;

use crate::coord::Coord;

/// Placement of one code instance. The offset never changes after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticePlacement {
    length_edge: f64,
    offset: DVec3,
}

impl LatticePlacement {
    pub fn new(length_edge: f64, offset: DVec3) -> Self {
        Self { length_edge, offset }
    }

    /// Placement whose offset recenters `coords` on the origin.
    ///
    /// # Example
    ///
    /// ```rust
    /// use qec_lattice::{Coord, LatticePlacement};
    /// use glam::DVec3;
    ///
    /// let placement = LatticePlacement::centered(1.0, [Coord::new(0, 0, 0), Coord::new(4, 4, 2)]);
    /// let a = placement.position(Coord::new(0, 0, 0));
    /// let b = placement.position(Coord::new(4, 4, 2));
    /// assert!((a + b).abs_diff_eq(DVec3::ZERO, 1e-12));
    /// ```
    pub fn centered(length_edge: f64, coords: impl IntoIterator<Item = Coord>) -> Self {
        let raw = Self::new(length_edge, DVec3::ZERO);
        let bounds = coords
            .into_iter()
            .map(|coord| raw.position(coord))
            .fold(None, |bounds: Option<(DVec3, DVec3)>, p| match bounds {
                Some((min, max)) => Some((min.min(p), max.max(p))),
                None => Some((p, p)),
            });

        match bounds {
            Some((min, max)) => Self::new(length_edge, (min + max) / 2.0),
            None => raw,
        }
    }

    #[inline]
    pub fn length_edge(&self) -> f64 {
        self.length_edge
    }

    #[inline]
    pub fn offset(&self) -> DVec3 {
        self.offset
    }

    /// Scene position of `coord`.
    pub fn position(&self, coord: Coord) -> DVec3 {
        let length = self.length_edge;
        DVec3::new(
            (length * SQRT_2 / 4.0) * coord.x as f64 - self.offset.x,
            (length * SQRT_2 / 4.0) * coord.y as f64 - self.offset.y,
            length * coord.z as f64 / 2.0 - self.offset.z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_steps() {
        let placement = LatticePlacement::new(2.0, DVec3::ZERO);
        let p = placement.position(Coord::new(1, 1, 1));
        assert_relative_eq!(p.x, SQRT_2 / 2.0);
        assert_relative_eq!(p.y, SQRT_2 / 2.0);
        assert_relative_eq!(p.z, 1.0);
    }

    #[test]
    fn test_offset_is_subtracted() {
        let offset = DVec3::new(1.0, -2.0, 0.5);
        let placement = LatticePlacement::new(1.0, offset);
        let p = placement.position(Coord::new(0, 0, 0));
        assert_eq!(p, -offset);
    }

    #[test]
    fn test_centered_on_empty_has_no_offset() {
        let placement = LatticePlacement::centered(1.0, std::iter::empty());
        assert_eq!(placement.offset(), DVec3::ZERO);
    }

    #[test]
    fn test_centered_uses_bounding_box_center() {
        let placement =
            LatticePlacement::centered(4.0, [Coord::new(2, 2, 1), Coord::new(6, 2, 3), Coord::new(2, 10, 1)]);
        let s = SQRT_2;
        assert_relative_eq!(placement.offset().x, s * 4.0, epsilon = 1e-12);
        assert_relative_eq!(placement.offset().y, s * 6.0, epsilon = 1e-12);
        assert_relative_eq!(placement.offset().z, 4.0, epsilon = 1e-12);
    }
}
