//! Index configuration.
//!
//! Re-exports the partitioning types from `geokd-types` for convenience.

use crate::compute::distance::EARTH_RADIUS_MILES;
use crate::error::{GeoKdError, Result};
use std::path::Path;

pub use geokd_types::split::{Axis, SplitRule};

/// Index configuration
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How a new point is compared against a node during insertion.
    #[serde(default)]
    pub split_rule: SplitRule,

    /// Sphere radius used by the haversine distance, in miles.
    #[serde(default = "Config::default_earth_radius")]
    pub earth_radius: f64,

    /// Reject out-of-range coordinates among the builder's initial points.
    /// `try_insert` and `try_range_query` always check, whatever this says.
    #[serde(default)]
    pub validate_coordinates: bool,
}

impl Config {
    const fn default_earth_radius() -> f64 {
        EARTH_RADIUS_MILES
    }

    pub fn with_split_rule(mut self, rule: SplitRule) -> Self {
        self.split_rule = rule;
        self
    }

    pub fn with_earth_radius(mut self, radius: f64) -> Self {
        self.earth_radius = radius;
        self
    }

    pub fn with_coordinate_validation(mut self, enabled: bool) -> Self {
        self.validate_coordinates = enabled;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.earth_radius.is_finite() || self.earth_radius <= 0.0 {
            return Err(GeoKdError::InvalidConfig(format!(
                "Earth radius must be finite and positive, got: {}",
                self.earth_radius
            )));
        }

        self.warn_on_lossy_split_rule();
        Ok(())
    }

    pub(crate) fn warn_on_lossy_split_rule(&self) {
        if self.split_rule == SplitRule::Magnitude {
            log::warn!(
                "Magnitude split rule selected; range queries may miss points in subtrees \
                 that mix coordinate signs"
            );
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load a configuration file. `.toml` files need the `toml` feature, any
    /// other extension is read as JSON.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            #[cfg(feature = "toml")]
            Some("toml") => Self::from_toml(&contents),
            #[cfg(not(feature = "toml"))]
            Some("toml") => Err(GeoKdError::InvalidConfig(format!(
                "{} is a TOML file but the `toml` feature is disabled",
                path.display()
            ))),
            _ => Self::from_json(&contents),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            split_rule: SplitRule::default(),
            earth_radius: Self::default_earth_radius(),
            validate_coordinates: false,
        }
    }
}
