//! Neighbor indexes.
//!
//! Two interchangeable strategies answer the same question, "every point
//! within `radius` miles of a center whose label contains a substring":
//!
//! - [`KdIndex`]: a two-dimensional k-d tree that prunes subtrees using the
//!   splitting-plane position at each node.
//! - [`LinearIndex`]: a head-inserted list scanned in full, the baseline the
//!   tree is checked against.
//!
//! Both use the same membership predicate: great-circle distance strictly
//! less than the radius, and the filter is a substring of the label.

pub mod kdtree;
pub mod linear;

pub use kdtree::KdIndex;
pub use linear::LinearIndex;

use geo::Point;
use geokd_types::point::{LabeledPoint, Neighbor};
use serde::{Deserialize, Serialize};

/// Parameters of a radius and label filtered query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeQuery<'a> {
    pub center: Point<f64>,
    /// Search radius in miles.
    pub radius: f64,
    /// Substring the label must contain. Empty matches every label.
    pub filter: &'a str,
}

impl<'a> RangeQuery<'a> {
    /// Query around a latitude/longitude in degrees with no label filter.
    pub fn new(latitude: f64, longitude: f64, radius: f64) -> Self {
        Self {
            center: Point::new(longitude, latitude),
            radius,
            filter: "",
        }
    }

    pub fn with_filter(mut self, filter: &'a str) -> Self {
        self.filter = filter;
        self
    }

    pub fn latitude(&self) -> f64 {
        self.center.y()
    }

    pub fn longitude(&self) -> f64 {
        self.center.x()
    }

    /// Full membership test for a stored point at the given distance.
    #[inline]
    pub(crate) fn accepts(&self, point: &LabeledPoint, distance: f64) -> bool {
        distance < self.radius && point.label_contains(self.filter)
    }

    pub(crate) fn warn_if_degenerate(&self) {
        if !self.radius.is_finite() || self.radius < 0.0 {
            log::warn!(
                "Range query with radius {} around ({}, {}) cannot match anything",
                self.radius,
                self.latitude(),
                self.longitude()
            );
        }
    }
}

/// Work counters for a single query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryStats {
    /// Nodes reached by the traversal.
    pub visited: usize,
    /// Nodes whose distance to the center was computed.
    pub evaluated: usize,
    /// Child subtrees skipped by the splitting-plane test.
    pub pruned: usize,
}

/// Matches of one query, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub matches: Vec<Neighbor>,
    pub stats: QueryStats,
}

impl QueryResult {
    /// Number of matching records.
    pub fn count(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Neighbor> {
        self.matches.iter()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.matches.iter().map(Neighbor::label).collect()
    }
}

impl IntoIterator for QueryResult {
    type Item = Neighbor;
    type IntoIter = std::vec::IntoIter<Neighbor>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}

impl<'a> IntoIterator for &'a QueryResult {
    type Item = &'a Neighbor;
    type IntoIter = std::slice::Iter<'a, Neighbor>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

/// Common interface of the neighbor indexes.
pub trait NeighborIndex {
    /// Store a point. Never fails.
    fn insert_point(&mut self, point: LabeledPoint);

    /// Every stored point accepted by `query`.
    fn query(&self, query: &RangeQuery<'_>) -> QueryResult;

    /// Number of stored points.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
