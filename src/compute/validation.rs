//! Validation for geographic coordinates and query arguments.
//!
//! The core `insert` and `range_query` accept anything. These checks back the
//! opt-in `try_insert` and `try_range_query` entry points.

use crate::error::{GeoKdError, Result};
use geokd_types::point::LabeledPoint;

/// Validates that latitude and longitude are finite and in range.
///
/// Longitude: [-180.0, 180.0], Latitude: [-90.0, 90.0]
///
/// # Examples
///
/// ```
/// use geokd::compute::validation::validate_coordinates;
///
/// assert!(validate_coordinates(40.7128, -74.0060).is_ok());
/// assert!(validate_coordinates(95.0, -74.0).is_err());
/// assert!(validate_coordinates(40.0, 200.0).is_err());
/// ```
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    if !latitude.is_finite() {
        return Err(GeoKdError::InvalidInput(format!(
            "Latitude must be finite, got: {}",
            latitude
        )));
    }

    if !longitude.is_finite() {
        return Err(GeoKdError::InvalidInput(format!(
            "Longitude must be finite, got: {}",
            longitude
        )));
    }

    if !(-90.0..=90.0).contains(&latitude) {
        return Err(GeoKdError::InvalidInput(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            latitude
        )));
    }

    if !(-180.0..=180.0).contains(&longitude) {
        return Err(GeoKdError::InvalidInput(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            longitude
        )));
    }

    Ok(())
}

/// Validates a labeled point's coordinates.
pub fn validate_point(point: &LabeledPoint) -> Result<()> {
    validate_coordinates(point.latitude(), point.longitude())
}

/// Validates multiple points, reporting the index of the first bad one.
///
/// # Examples
///
/// ```
/// use geokd::compute::validation::validate_points;
/// use geokd_types::point::LabeledPoint;
///
/// let points = vec![
///     LabeledPoint::new(40.7, -74.0, "a"),
///     LabeledPoint::new(40.8, -73.9, "b"),
///     LabeledPoint::new(40.0, 999.0, "bad"),
/// ];
/// assert!(validate_points(&points).is_err());
/// ```
pub fn validate_points(points: &[LabeledPoint]) -> Result<()> {
    for (idx, point) in points.iter().enumerate() {
        validate_point(point)
            .map_err(|e| GeoKdError::InvalidInput(format!("Point at index {}: {}", idx, e)))?;
    }
    Ok(())
}

/// Validates a query radius in miles.
pub fn validate_radius(radius: f64) -> Result<()> {
    if !radius.is_finite() {
        return Err(GeoKdError::InvalidInput(format!(
            "Radius must be finite, got: {}",
            radius
        )));
    }

    if radius < 0.0 {
        return Err(GeoKdError::InvalidInput(format!(
            "Radius must be non-negative, got: {}",
            radius
        )));
    }

    Ok(())
}
