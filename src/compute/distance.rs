//! Haversine great-circle distance.
//!
//! The only metric used by the indexes, both for the membership test and for
//! reporting neighbor distances.

use geo::Point;

/// Radius of the sphere used for all distances, in miles.
pub const EARTH_RADIUS_MILES: f64 = 3956.0;

/// Haversine distance between two points on a sphere of the given radius.
///
/// Points are `geo::Point`s with longitude in `x` and latitude in `y`, in
/// degrees. The result is in the unit of `radius`. Coordinates are not
/// range-checked; out-of-range values still produce a finite number.
///
/// # Examples
///
/// ```
/// use geokd::compute::distance::haversine;
/// use geo::Point;
///
/// let a = Point::new(-75.0, 40.0);
/// assert_eq!(haversine(&a, &a, 3956.0), 0.0);
/// ```
#[inline]
pub fn haversine(a: &Point<f64>, b: &Point<f64>, radius: f64) -> f64 {
    let lat_a = a.y().to_radians();
    let lat_b = b.y().to_radians();
    let delta_lat = (b.y() - a.y()).to_radians();
    let delta_lon = (b.x() - a.x()).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lon / 2.0).sin().powi(2);

    2.0 * radius * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Haversine distance in miles on a sphere of radius [`EARTH_RADIUS_MILES`].
///
/// # Examples
///
/// ```
/// use geokd::compute::distance::haversine_miles;
/// use geo::Point;
///
/// let nyc = Point::new(-74.0060, 40.7128);
/// let philly = Point::new(-75.1652, 39.9526);
/// let d = haversine_miles(&nyc, &philly);
/// assert!(d > 75.0 && d < 85.0);
/// ```
#[inline]
pub fn haversine_miles(a: &Point<f64>, b: &Point<f64>) -> f64 {
    haversine(a, b, EARTH_RADIUS_MILES)
}

/// Haversine distance in miles between two latitude/longitude pairs.
pub fn distance_between(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
    haversine_miles(&Point::new(lon_a, lat_a), &Point::new(lon_b, lat_b))
}
