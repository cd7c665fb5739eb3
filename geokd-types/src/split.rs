use geo::Point;
use serde::{Deserialize, Serialize};

/// Coordinate axis compared at one level of the tree.
///
/// Latitude is compared at even depths (the root included), longitude at odd
/// depths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Axis used at the root.
    pub const ROOT: Axis = Axis::Latitude;

    /// Axis used one level below this one.
    #[inline]
    pub fn flip(self) -> Axis {
        match self {
            Axis::Latitude => Axis::Longitude,
            Axis::Longitude => Axis::Latitude,
        }
    }

    /// Select this axis' coordinate of a point.
    #[inline]
    pub fn coordinate(self, point: &Point<f64>) -> f64 {
        match self {
            Axis::Latitude => point.y(),
            Axis::Longitude => point.x(),
        }
    }
}

/// Comparison used to place a new point below an existing node.
///
/// - **Signed**: compare the signed coordinates. Placement agrees with the
///   signed splitting-plane test used by range queries.
/// - **Magnitude**: compare absolute values, so points in opposite hemispheres
///   with equal magnitude fall on the same side. Range queries still prune on
///   signed values, which can skip matches when a subtree mixes signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SplitRule {
    #[default]
    Signed,
    Magnitude,
}

impl SplitRule {
    /// Returns true when `value` belongs in the left subtree of a node whose
    /// coordinate on the active axis is `split`. Ties go left.
    #[inline]
    pub fn goes_left(self, value: f64, split: f64) -> bool {
        match self {
            SplitRule::Signed => value <= split,
            SplitRule::Magnitude => value.abs() <= split.abs(),
        }
    }
}
