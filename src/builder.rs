//! Index builder for flexible configuration
//!
//! Collects configuration and an initial batch of points, validates them once,
//! and loads the points in the order they were given.

use crate::compute::validation::validate_points;
use crate::config::{Config, SplitRule};
use crate::error::Result;
use crate::index::{KdIndex, LinearIndex, NeighborIndex};
use geokd_types::point::LabeledPoint;
use std::path::Path;

/// Builder for indexes with custom configuration and initial contents.
#[derive(Debug, Clone, Default)]
pub struct IndexBuilder {
    config: Config,
    points: Vec<LabeledPoint>,
}

impl IndexBuilder {
    /// Create a new builder with the default configuration and no points.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a configuration file (see [`Config::load`]).
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new().config(Config::load(path)?))
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn split_rule(mut self, rule: SplitRule) -> Self {
        self.config = self.config.with_split_rule(rule);
        self
    }

    pub fn earth_radius(mut self, radius: f64) -> Self {
        self.config = self.config.with_earth_radius(radius);
        self
    }

    /// Reject the build if any initial point is out of range.
    pub fn validate_coordinates(mut self, enabled: bool) -> Self {
        self.config = self.config.with_coordinate_validation(enabled);
        self
    }

    /// Queue one point for insertion.
    pub fn point(mut self, latitude: f64, longitude: f64, label: impl Into<String>) -> Self {
        self.points.push(LabeledPoint::new(latitude, longitude, label));
        self
    }

    /// Queue several points, inserted in iteration order.
    pub fn points<I: IntoIterator<Item = LabeledPoint>>(mut self, points: I) -> Self {
        self.points.extend(points);
        self
    }

    fn check(&self) -> Result<()> {
        self.config.validate()?;
        if self.config.validate_coordinates {
            validate_points(&self.points)?;
        }
        Ok(())
    }

    /// Build a k-d tree index. Fails on an invalid configuration or, with
    /// coordinate validation on, an out-of-range point.
    pub fn build(self) -> Result<KdIndex> {
        self.check()?;
        let mut index = KdIndex::from_validated(self.config);
        index.extend(self.points);
        log::debug!(
            "Built k-d index with {} points, height {}",
            index.len(),
            index.height()
        );
        Ok(index)
    }

    /// Build the linear-scan baseline with the same points and sphere.
    pub fn build_linear(self) -> Result<LinearIndex> {
        self.check()?;
        let mut index = LinearIndex::with_earth_radius(self.config.earth_radius);
        index.extend(self.points);
        Ok(index)
    }
}
