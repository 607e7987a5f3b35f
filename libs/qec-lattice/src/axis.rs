//! # Qubit Axes
//!
//! Which way a qubit edge points. The table is filled by whoever laid out
//! the code and is only read here; raw values are kept so that a bad entry
//! can be reported as it was received.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;
use thiserror::Error;

use crate::coord::Coord;
use crate::error::{BuildWarning, LatticeError};

/// Orientation class of a qubit edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QubitAxis {
    /// In-plane edge along the `x = -y` diagonal (raw value 0).
    Horizontal0,
    /// In-plane edge along the `x = y` diagonal (raw value 1).
    Horizontal1,
    /// Edge along z (raw value 2).
    Vertical,
}

impl QubitAxis {
    pub fn value(self) -> i64 {
        match self {
            QubitAxis::Horizontal0 => 0,
            QubitAxis::Horizontal1 => 1,
            QubitAxis::Vertical => 2,
        }
    }
}

/// A raw axis value outside `{0, 1, 2}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown qubit axis value {0}")]
pub struct UnknownAxis(pub i64);

impl TryFrom<i64> for QubitAxis {
    type Error = UnknownAxis;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(QubitAxis::Horizontal0),
            1 => Ok(QubitAxis::Horizontal1),
            2 => Ok(QubitAxis::Vertical),
            other => Err(UnknownAxis(other)),
        }
    }
}

/// Coordinate → raw axis value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "BTreeMap<String, i64>")]
pub struct QubitAxisTable {
    values: HashMap<Coord, i64>,
}

impl QubitAxisTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw value at `coord`, returning the previous one.
    pub fn insert(&mut self, coord: Coord, value: i64) -> Option<i64> {
        self.values.insert(coord, value)
    }

    /// Raw value as received.
    pub fn raw(&self, coord: Coord) -> Option<i64> {
        self.values.get(&coord).copied()
    }

    /// The qubit's axis, or the warning describing why there is none.
    ///
    /// # Example
    ///
    /// ```rust
    /// use qec_lattice::{BuildWarning, Coord, QubitAxis, QubitAxisTable};
    ///
    /// let mut table = QubitAxisTable::new();
    /// table.insert(Coord::new(1, 1, 2), 2);
    /// table.insert(Coord::new(1, 3, 2), 7);
    ///
    /// assert_eq!(table.axis(Coord::new(1, 1, 2)), Ok(QubitAxis::Vertical));
    /// assert_eq!(
    ///     table.axis(Coord::new(1, 3, 2)),
    ///     Err(BuildWarning::UnknownQubitAxis { coord: Coord::new(1, 3, 2), value: Some(7) }),
    /// );
    /// ```
    pub fn axis(&self, coord: Coord) -> Result<QubitAxis, BuildWarning> {
        let value = self.raw(coord);
        value
            .and_then(|v| QubitAxis::try_from(v).ok())
            .ok_or(BuildWarning::UnknownQubitAxis { coord, value })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(Coord, QubitAxis)> for QubitAxisTable {
    fn from_iter<I: IntoIterator<Item = (Coord, QubitAxis)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(coord, axis)| (coord, axis.value()))
                .collect(),
        }
    }
}

impl TryFrom<BTreeMap<String, i64>> for QubitAxisTable {
    type Error = LatticeError;

    fn try_from(map: BTreeMap<String, i64>) -> Result<Self, Self::Error> {
        let values = map
            .into_iter()
            .map(|(key, value)| Ok((key.parse::<Coord>()?, value)))
            .collect::<Result<HashMap<_, _>, LatticeError>>()?;
        Ok(Self { values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_raw_values() {
        assert_eq!(QubitAxis::try_from(0), Ok(QubitAxis::Horizontal0));
        assert_eq!(QubitAxis::try_from(1), Ok(QubitAxis::Horizontal1));
        assert_eq!(QubitAxis::try_from(2), Ok(QubitAxis::Vertical));
        assert_eq!(QubitAxis::try_from(3), Err(UnknownAxis(3)));
        assert_eq!(QubitAxis::try_from(-1), Err(UnknownAxis(-1)));
    }

    #[test]
    fn test_missing_entry_warns_without_value() {
        let table = QubitAxisTable::new();
        let coord = Coord::new(5, 5, 5);
        assert_eq!(
            table.axis(coord),
            Err(BuildWarning::UnknownQubitAxis { coord, value: None })
        );
    }

    #[test]
    fn test_deserialize_payload() {
        let table: QubitAxisTable =
            serde_json::from_str(r#"{"[1, 1, 1]": 1, "[3, 1, 1]": 0, "[2, 4, 2]": 2}"#).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.axis(Coord::new(2, 4, 2)), Ok(QubitAxis::Vertical));
        assert_eq!(table.raw(Coord::new(3, 1, 1)), Some(0));
    }

    #[test]
    fn test_collect_from_axes() {
        let table: QubitAxisTable = [(Coord::new(1, 1, 1), QubitAxis::Horizontal1)]
            .into_iter()
            .collect();
        assert_eq!(table.raw(Coord::new(1, 1, 1)), Some(1));
    }
}
