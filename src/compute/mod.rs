//! Geometry used by the indexes.
//!
//! - Great-circle (haversine) distance in miles
//! - Optional coordinate validation for checked inserts

pub mod distance;
pub mod validation;
