use geo::Point;
use serde::{Deserialize, Serialize};

/// A geographic position with a free-text label.
///
/// Coordinates are degrees and are stored without any range check. The label
/// may be empty and does not have to be unique.
///
/// # Examples
///
/// ```
/// use geokd_types::point::LabeledPoint;
///
/// let p = LabeledPoint::new(40.0, -75.0, "Philadelphia");
/// assert_eq!(p.label(), "Philadelphia");
/// assert_eq!(p.point().x(), -75.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledPoint {
    /// Longitude in `x`, latitude in `y`.
    pub point: Point<f64>,
    pub label: String,
}

impl LabeledPoint {
    /// Create a labeled point from latitude and longitude in degrees.
    pub fn new(latitude: f64, longitude: f64, label: impl Into<String>) -> Self {
        Self::from_point(Point::new(longitude, latitude), label)
    }

    /// Create a labeled point from an existing `geo::Point`.
    pub fn from_point(point: Point<f64>, label: impl Into<String>) -> Self {
        Self {
            point,
            label: label.into(),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.point.y()
    }

    pub fn longitude(&self) -> f64 {
        self.point.x()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn point(&self) -> &Point<f64> {
        &self.point
    }

    /// Substring test used by range queries. An empty filter always passes.
    #[inline]
    pub fn label_contains(&self, filter: &str) -> bool {
        self.label.contains(filter)
    }
}

/// A record returned by a range query together with its distance to the
/// query center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub point: LabeledPoint,
    /// Great-circle distance to the query center, in miles.
    pub distance: f64,
}

impl Neighbor {
    pub fn new(point: LabeledPoint, distance: f64) -> Self {
        Self { point, distance }
    }

    pub fn label(&self) -> &str {
        self.point.label()
    }

    pub fn latitude(&self) -> f64 {
        self.point.latitude()
    }

    pub fn longitude(&self) -> f64 {
        self.point.longitude()
    }
}
