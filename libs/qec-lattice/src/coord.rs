//! # Lattice Coordinates
//!
//! Integer sites of the lattice. Parity of each component encodes whether a
//! site is a cell, an edge midpoint or a face center, so the rule functions
//! in [`crate::rotation`] only ever look at `x`, `y` and `z` modulo 2 or 4.
//!
//! Index tables arrive keyed by the stringified coordinate `"[x, y, z]"`;
//! [`Coord`] parses and prints that form.

use std::fmt;
use std::str::FromStr;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::LatticeError;

/// A lattice site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[i64; 3]", into = "[i64; 3]")]
pub struct Coord {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Coord {
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    pub fn to_array(self) -> [i64; 3] {
        [self.x, self.y, self.z]
    }

    /// The coordinate as floating point, before scaling.
    pub fn as_dvec3(self) -> DVec3 {
        DVec3::new(self.x as f64, self.y as f64, self.z as f64)
    }

    /// `(x + y) mod 4` in `0..4`, for any `x` and `y`.
    ///
    /// The sum wraps; 4 divides 2^64, so the class is unaffected.
    pub fn diagonal_class(self) -> i64 {
        self.x.wrapping_add(self.y).rem_euclid(4)
    }
}

impl From<[i64; 3]> for Coord {
    fn from([x, y, z]: [i64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Coord> for [i64; 3] {
    fn from(coord: Coord) -> Self {
        coord.to_array()
    }
}

impl From<(i64, i64, i64)> for Coord {
    fn from((x, y, z): (i64, i64, i64)) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

impl FromStr for Coord {
    type Err = LatticeError;

    /// Parses `"[x, y, z]"`. Parenthesized keys are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LatticeError::InvalidCoordKey(s.to_string());

        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .or_else(|| {
                trimmed
                    .strip_prefix('(')
                    .and_then(|rest| rest.strip_suffix(')'))
            })
            .ok_or_else(invalid)?;

        let mut parts = inner.split(',').map(|part| part.trim().parse::<i64>());
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Ok(x)), Some(Ok(y)), Some(Ok(z)), None) => Ok(Self::new(x, y, z)),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_class_near_extremes() {
        assert_eq!(Coord::new(1, 1, 0).diagonal_class(), 2);
        assert_eq!(Coord::new(-3, 1, 0).diagonal_class(), 2);
        // i64::MAX = 2^63 - 1 is 3 mod 4; i64::MAX + 1 is 0 mod 4.
        assert_eq!(Coord::new(i64::MAX, 1, 0).diagonal_class(), 0);
        assert_eq!(Coord::new(i64::MAX, i64::MAX, 0).diagonal_class(), 2);
        assert_eq!(Coord::new(i64::MIN, -1, 0).diagonal_class(), 3);
    }

    #[test]
    fn test_display_matches_key_form() {
        assert_eq!(Coord::new(1, -2, 3).to_string(), "[1, -2, 3]");
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        assert_eq!("[1,1,2]".parse::<Coord>().unwrap(), Coord::new(1, 1, 2));
        assert_eq!("  [ 4 ,  0, -7 ] ".parse::<Coord>().unwrap(), Coord::new(4, 0, -7));
        assert_eq!("(3, 5, 1)".parse::<Coord>().unwrap(), Coord::new(3, 5, 1));
    }

    #[test]
    fn test_parse_rejects_malformed_keys() {
        for key in ["", "[1, 2]", "[1, 2, 3, 4]", "1, 2, 3", "[a, b, c]", "[1, 2, 3)", "[1.5, 2, 3]"] {
            assert_eq!(
                key.parse::<Coord>().unwrap_err(),
                LatticeError::InvalidCoordKey(key.to_string()),
                "{key:?}"
            );
        }
    }

    #[test]
    fn test_display_parse_round_trip() {
        let coord = Coord::new(12, 7, -1);
        assert_eq!(coord.to_string().parse::<Coord>().unwrap(), coord);
    }

    #[test]
    fn test_serializes_as_array() {
        let json = serde_json::to_string(&Coord::new(1, 2, 3)).unwrap();
        assert_eq!(json, "[1,2,3]");
        let back: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Coord::new(1, 2, 3));
    }
}
