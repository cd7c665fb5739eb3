//! Unordered baseline index.
//!
//! New points go to the front and every query scans all of them, so matches
//! come out newest first. Used as the reference result for the k-d tree.

use super::{NeighborIndex, QueryResult, QueryStats, RangeQuery};
use crate::compute::distance::{EARTH_RADIUS_MILES, haversine};
use geokd_types::point::{LabeledPoint, Neighbor};

/// Linear-scan neighbor index.
#[derive(Debug, Clone)]
pub struct LinearIndex {
    // Oldest first; scanned in reverse to mimic head insertion.
    points: Vec<LabeledPoint>,
    earth_radius: f64,
}

impl LinearIndex {
    pub fn new() -> Self {
        Self::with_earth_radius(EARTH_RADIUS_MILES)
    }

    pub fn with_earth_radius(earth_radius: f64) -> Self {
        Self {
            points: Vec::new(),
            earth_radius,
        }
    }

    pub fn insert(&mut self, latitude: f64, longitude: f64, label: impl Into<String>) {
        self.insert_point(LabeledPoint::new(latitude, longitude, label));
    }

    pub fn range_query(
        &self,
        latitude: f64,
        longitude: f64,
        radius: f64,
        filter: &str,
    ) -> QueryResult {
        self.query(&RangeQuery::new(latitude, longitude, radius).with_filter(filter))
    }

    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// Stored points, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &LabeledPoint> + '_ {
        self.points.iter().rev()
    }
}

impl Default for LinearIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl NeighborIndex for LinearIndex {
    fn insert_point(&mut self, point: LabeledPoint) {
        self.points.push(point);
    }

    fn query(&self, query: &RangeQuery<'_>) -> QueryResult {
        query.warn_if_degenerate();

        let matches: Vec<Neighbor> = self
            .iter()
            .filter_map(|point| {
                let distance = haversine(&point.point, &query.center, self.earth_radius);
                query
                    .accepts(point, distance)
                    .then(|| Neighbor::new(point.clone(), distance))
            })
            .collect();

        let stats = QueryStats {
            visited: self.points.len(),
            evaluated: self.points.len(),
            pruned: 0,
        };
        log::debug!(
            "Linear range query: {} matches out of {} points",
            matches.len(),
            self.points.len()
        );

        QueryResult { matches, stats }
    }

    fn len(&self) -> usize {
        self.points.len()
    }
}

impl Extend<LabeledPoint> for LinearIndex {
    fn extend<I: IntoIterator<Item = LabeledPoint>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl FromIterator<LabeledPoint> for LinearIndex {
    fn from_iter<I: IntoIterator<Item = LabeledPoint>>(iter: I) -> Self {
        let mut index = LinearIndex::new();
        index.extend(iter);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_newest_first() {
        let mut index = LinearIndex::new();
        index.insert(40.0, -75.0, "first");
        index.insert(40.0, -75.0, "second");
        index.insert(40.0, -75.0, "third");

        let result = index.range_query(40.0, -75.0, 1.0, "");
        assert_eq!(result.labels(), vec!["third", "second", "first"]);
        assert_eq!(result.stats.visited, 3);
        assert_eq!(result.stats.pruned, 0);
    }

    #[test]
    fn test_linear_filter_and_radius() {
        let mut index = LinearIndex::new();
        index.insert(40.0, -75.0, "Alpha");
        index.insert(40.0, -75.0, "Beta");
        index.insert(45.0, -75.0, "Alpha far");

        let result = index.range_query(40.0, -75.0, 10.0, "Alpha");
        assert_eq!(result.labels(), vec!["Alpha"]);
        assert_eq!(index.size(), 3);
    }

    #[test]
    fn test_linear_empty() {
        let index = LinearIndex::default();
        assert!(index.is_empty());
        assert!(index.range_query(0.0, 0.0, 100.0, "").is_empty());
    }
}
